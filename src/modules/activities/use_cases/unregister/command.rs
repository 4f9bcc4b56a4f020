#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unregister {
    pub activity: String,
    pub email: String,
}
