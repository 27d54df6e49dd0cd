//! Supported programming languages

use serde::{Deserialize, Serialize};

/// The closed set of languages a problem must provide starter and reference
/// code for, and a submission may be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Cpp,
    Java,
    Javascript,
}

impl Language {
    /// All supported languages
    pub const ALL: &[Language] = &[Self::Cpp, Self::Java, Self::Javascript];

    /// Stable identifier as persisted and carried on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cpp => "cpp",
            Self::Java => "java",
            Self::Javascript => "javascript",
        }
    }

    /// Human-readable name for UI listings
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Cpp => "C++",
            Self::Java => "Java",
            Self::Javascript => "JavaScript",
        }
    }

    /// Numeric language id understood by the execution provider
    pub fn provider_id(&self) -> u32 {
        match self {
            Self::Cpp => 54,
            Self::Java => 62,
            Self::Javascript => 63,
        }
    }

    /// Parse a stable identifier back into a language
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "cpp" => Some(Self::Cpp),
            "java" => Some(Self::Java),
            "javascript" => Some(Self::Javascript),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_str(lang.as_str()), Some(*lang));
        }
        assert_eq!(Language::from_str("cobol"), None);
    }

    #[test]
    fn test_serde_rejects_unknown() {
        assert!(serde_json::from_str::<Language>("\"cpp\"").is_ok());
        assert!(serde_json::from_str::<Language>("\"brainfuck\"").is_err());
    }
}
