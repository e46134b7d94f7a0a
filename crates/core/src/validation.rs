//! Boundary validation for incoming note payloads.
//!
//! Validation happens at the transport boundary, before a repository is
//! invoked. Repositories themselves perform no validation and will store
//! whatever they are handed.

/// Maximum length of a note title in characters.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length of note content in characters.
pub const MAX_CONTENT_LENGTH: usize = 10_000;

/// Validate a note title: required, non-blank, and within length limits.
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Note title is required".to_string());
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(format!(
            "Note title must be at most {MAX_TITLE_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate note content: required, non-blank, and within length limits.
pub fn validate_content(content: &str) -> Result<(), String> {
    if content.trim().is_empty() {
        return Err("Note content is required".to_string());
    }
    if content.chars().count() > MAX_CONTENT_LENGTH {
        return Err(format!(
            "Note content must be at most {MAX_CONTENT_LENGTH} characters"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_values() {
        assert!(validate_title("Groceries").is_ok());
        assert!(validate_content("milk, eggs").is_ok());
    }

    #[test]
    fn rejects_empty_and_blank_title() {
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
    }

    #[test]
    fn rejects_empty_content() {
        assert!(validate_content("").is_err());
    }

    #[test]
    fn rejects_oversized_title() {
        let long = "x".repeat(MAX_TITLE_LENGTH + 1);
        assert!(validate_title(&long).is_err());
        assert!(validate_title(&"x".repeat(MAX_TITLE_LENGTH)).is_ok());
    }

    #[test]
    fn rejects_oversized_content() {
        let long = "x".repeat(MAX_CONTENT_LENGTH + 1);
        assert!(validate_content(&long).is_err());
    }
}
