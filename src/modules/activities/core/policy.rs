use std::str::FromStr;

/// Admission policy for activities at capacity. `Enforce` rejects sign-ups
/// once the roster reaches `max_participants`; `Ignore` admits past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapacityPolicy {
    #[default]
    Enforce,
    Ignore,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown capacity policy: {0}")]
pub struct ParseCapacityPolicyError(String);

impl FromStr for CapacityPolicy {
    type Err = ParseCapacityPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "enforce" => Ok(CapacityPolicy::Enforce),
            "ignore" => Ok(CapacityPolicy::Ignore),
            other => Err(ParseCapacityPolicyError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod capacity_policy_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("enforce", CapacityPolicy::Enforce)]
    #[case("Enforce", CapacityPolicy::Enforce)]
    #[case("ignore", CapacityPolicy::Ignore)]
    #[case("IGNORE", CapacityPolicy::Ignore)]
    fn it_should_parse_known_policies(#[case] input: &str, #[case] expected: CapacityPolicy) {
        assert_eq!(input.parse::<CapacityPolicy>().unwrap(), expected);
    }

    #[rstest]
    fn it_should_reject_an_unknown_policy() {
        let result = "strict".parse::<CapacityPolicy>();
        assert_eq!(
            result.unwrap_err().to_string(),
            "unknown capacity policy: strict"
        );
    }

    #[rstest]
    fn it_should_default_to_enforce() {
        assert_eq!(CapacityPolicy::default(), CapacityPolicy::Enforce);
    }
}
