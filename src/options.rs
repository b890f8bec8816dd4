//! Knobs for a single calculation request.

use crate::validate::ValidationStrategy;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Whether masks with scattered 1-bits are accepted.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MaskPolicy {
    /// Only `1...10...0` masks.
    #[default]
    Strict,
    /// Any four octets.
    Permissive,
}

/// What to do when no mask text is supplied.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MissingMask {
    /// Class A/B/C default mask from the first octet.
    #[default]
    Classful,
    /// The address is used as its own mask.
    #[serde(rename = "self")]
    LegacySelfMask,
}

/// Options for [`calculate_with`](crate::calculate_with).
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct CalcOptions {
    pub strategy: ValidationStrategy,
    pub mask_policy: MaskPolicy,
    pub missing_mask: MissingMask,
}

impl FromStr for MaskPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(MaskPolicy::Strict),
            "permissive" => Ok(MaskPolicy::Permissive),
            other => Err(format!("unknown mask policy '{other}'")),
        }
    }
}

impl std::fmt::Display for MaskPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            MaskPolicy::Strict => write!(f, "strict"),
            MaskPolicy::Permissive => write!(f, "permissive"),
        }
    }
}

impl FromStr for MissingMask {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classful" => Ok(MissingMask::Classful),
            "self" | "legacy" => Ok(MissingMask::LegacySelfMask),
            other => Err(format!("unknown missing-mask mode '{other}'")),
        }
    }
}

impl std::fmt::Display for MissingMask {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            MissingMask::Classful => write!(f, "classful"),
            MissingMask::LegacySelfMask => write!(f, "self"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = CalcOptions::default();
        assert_eq!(options.strategy, ValidationStrategy::Regex);
        assert_eq!(options.mask_policy, MaskPolicy::Strict);
        assert_eq!(options.missing_mask, MissingMask::Classful);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("PERMISSIVE".parse(), Ok(MaskPolicy::Permissive));
        assert!("loose".parse::<MaskPolicy>().is_err());
        assert_eq!("legacy".parse(), Ok(MissingMask::LegacySelfMask));
        assert_eq!("self".parse(), Ok(MissingMask::LegacySelfMask));
        assert!("guess".parse::<MissingMask>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for policy in [MaskPolicy::Strict, MaskPolicy::Permissive] {
            assert_eq!(policy.to_string().parse(), Ok(policy));
        }
        for mode in [MissingMask::Classful, MissingMask::LegacySelfMask] {
            assert_eq!(mode.to_string().parse(), Ok(mode));
        }
    }

    #[test]
    fn test_options_json() {
        let options = CalcOptions {
            strategy: ValidationStrategy::Split,
            mask_policy: MaskPolicy::Permissive,
            missing_mask: MissingMask::LegacySelfMask,
        };
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(
            json,
            r#"{"strategy":"split","mask_policy":"permissive","missing_mask":"self"}"#
        );
    }
}
