use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// Pose parameterizations supported by the codec.
///
/// The format is selected once per trained model and never mixed: a network
/// trained on one format produces predictions that only decode through the
/// same format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoseFormat {
    /// 3-DoF translation only, passed through untouched. Baseline case.
    TranslationOnly,
    /// 6-DoF translation plus Euler angles, each component divided by its
    /// configured range.
    EulerAbsolute,
    /// 6-DoF with perspective-corrected depth: the stored depth fraction is
    /// inverted to true depth and x/y are un-projected by it before range
    /// normalization.
    EulerPerspective,
    /// 7-DoF translation plus unit quaternion, with the same depth handling
    /// as [`PoseFormat::EulerPerspective`].
    Quaternion,
}

impl PoseFormat {
    /// Number of components in a pose of this format.
    pub fn arity(&self) -> usize {
        match self {
            Self::TranslationOnly => 3,
            Self::EulerAbsolute | Self::EulerPerspective => 6,
            Self::Quaternion => 7,
        }
    }

    /// Name used in model metadata and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TranslationOnly => "translation_only",
            Self::EulerAbsolute => "euler_absolute",
            Self::EulerPerspective => "euler_perspective",
            Self::Quaternion => "quaternion",
        }
    }
}

impl fmt::Display for PoseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PoseFormat {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "translation_only" => Ok(Self::TranslationOnly),
            "euler_absolute" => Ok(Self::EulerAbsolute),
            "euler_perspective" => Ok(Self::EulerPerspective),
            "quaternion" => Ok(Self::Quaternion),
            other => Err(CodecError::UnknownFormat(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity() {
        assert_eq!(PoseFormat::TranslationOnly.arity(), 3);
        assert_eq!(PoseFormat::EulerAbsolute.arity(), 6);
        assert_eq!(PoseFormat::EulerPerspective.arity(), 6);
        assert_eq!(PoseFormat::Quaternion.arity(), 7);
    }

    #[test]
    fn test_name_round_trip() -> Result<(), CodecError> {
        for format in [
            PoseFormat::TranslationOnly,
            PoseFormat::EulerAbsolute,
            PoseFormat::EulerPerspective,
            PoseFormat::Quaternion,
        ] {
            assert_eq!(format.to_string().parse::<PoseFormat>()?, format);
        }
        Ok(())
    }

    #[test]
    fn test_unknown_name() {
        let result = "euler".parse::<PoseFormat>();
        assert!(matches!(result, Err(CodecError::UnknownFormat(_))));
    }
}
