//! Tier and resolution vocabulary shared by movies and viewers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Access tier of a viewer or a movie.
///
/// A single field on each entity rather than a subtype hierarchy: the access
/// rule in [`crate::policy`] only ever compares the two tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Simple,
    Pro,
}

impl Tier {
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Simple => "simple",
            Tier::Pro => "pro",
        }
    }
}

impl Default for Tier {
    /// New accounts and newly created movies start out `simple`.
    fn default() -> Self {
        Tier::Simple
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(Tier::Simple),
            "pro" => Ok(Tier::Pro),
            other => Err(CoreError::Validation(format!(
                "Invalid tier '{other}'. Must be one of: simple, pro"
            ))),
        }
    }
}

/// All supported playback resolution tags.
pub const VALID_RESOLUTIONS: &[&str] = &["144", "360", "480", "720", "1080"];

/// Validate that every tag in a movie's resolution list is a known value.
pub fn validate_resolutions(resolutions: &[String]) -> Result<(), CoreError> {
    for tag in resolutions {
        if !VALID_RESOLUTIONS.contains(&tag.as_str()) {
            return Err(CoreError::Validation(format!(
                "Invalid resolution '{tag}'. Must be one of: {}",
                VALID_RESOLUTIONS.join(", ")
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_round_trips_through_str() {
        assert_eq!("simple".parse::<Tier>().unwrap(), Tier::Simple);
        assert_eq!("pro".parse::<Tier>().unwrap(), Tier::Pro);
        assert_eq!(Tier::Simple.as_str(), "simple");
        assert_eq!(Tier::Pro.to_string(), "pro");
    }

    #[test]
    fn test_unknown_tier_rejected() {
        let result = "premium".parse::<Tier>();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid tier"));
    }

    #[test]
    fn test_default_tier_is_simple() {
        assert_eq!(Tier::default(), Tier::Simple);
    }

    #[test]
    fn test_known_resolutions_accepted() {
        let tags: Vec<String> = ["144", "480", "1080"].iter().map(|s| s.to_string()).collect();
        assert!(validate_resolutions(&tags).is_ok());
        assert!(validate_resolutions(&[]).is_ok());
    }

    #[test]
    fn test_unknown_resolution_rejected() {
        let tags = vec!["720".to_string(), "4k".to_string()];
        let result = validate_resolutions(&tags);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid resolution '4k'"));
    }
}
