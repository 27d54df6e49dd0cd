//! Input validation utilities

use std::collections::HashSet;

use crate::constants;
use crate::models::Language;

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < constants::MIN_PASSWORD_LENGTH as usize {
        return Err("Password must be at least 8 characters");
    }
    if password.len() > constants::MAX_PASSWORD_LENGTH as usize {
        return Err("Password must be at most 128 characters");
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        return Err("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        return Err("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_numeric()) {
        return Err("Password must contain at least one number");
    }
    Ok(())
}

/// Validate source code size
pub fn validate_source_code(code: &str) -> Result<(), &'static str> {
    if code.is_empty() {
        return Err("Source code cannot be empty");
    }
    if code.len() as u64 > constants::MAX_SOURCE_CODE_SIZE {
        return Err("Source code exceeds maximum size of 64KB");
    }
    Ok(())
}

/// Check that a per-language code list covers every supported language
/// exactly once. Applied to both starter code and reference solutions at
/// problem-creation time.
pub fn validate_language_coverage(languages: &[Language]) -> Result<(), &'static str> {
    let mut seen = HashSet::new();
    for lang in languages {
        if !seen.insert(*lang) {
            return Err("Duplicate language entry");
        }
    }
    if seen.len() != Language::ALL.len() {
        return Err("Every supported language must have exactly one entry");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_password() {
        assert!(validate_password("Password123").is_ok());
        assert!(validate_password("short").is_err());
        assert!(validate_password("nouppercase123").is_err());
        assert!(validate_password("NOLOWERCASE123").is_err());
        assert!(validate_password("NoNumbers").is_err());
    }

    #[test]
    fn test_validate_source_code() {
        assert!(validate_source_code("int main() {}").is_ok());
        assert!(validate_source_code("").is_err());
        assert!(
            validate_source_code(&"x".repeat(constants::MAX_SOURCE_CODE_SIZE as usize + 1)).is_err()
        );
    }

    #[test]
    fn test_language_coverage_full_set() {
        assert!(validate_language_coverage(&[
            Language::Cpp,
            Language::Java,
            Language::Javascript
        ])
        .is_ok());

        // Order does not matter
        assert!(validate_language_coverage(&[
            Language::Javascript,
            Language::Cpp,
            Language::Java
        ])
        .is_ok());
    }

    #[test]
    fn test_language_coverage_rejects_gaps_and_duplicates() {
        assert!(validate_language_coverage(&[Language::Cpp, Language::Java]).is_err());
        assert!(validate_language_coverage(&[
            Language::Cpp,
            Language::Cpp,
            Language::Java
        ])
        .is_err());
        assert!(validate_language_coverage(&[]).is_err());
    }
}
