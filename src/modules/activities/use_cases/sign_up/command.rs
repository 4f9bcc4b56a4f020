#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUp {
    pub activity: String,
    pub email: String,
}
