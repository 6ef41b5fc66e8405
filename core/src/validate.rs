//! Field checks applied to create requests before they reach the store.
//!
//! Rules run in order and the first failure wins. Lengths are counted in
//! characters, not bytes, and the title is not trimmed.

use crate::error::ValidationError;

pub const MAX_TITLE_CHARS: usize = 100;
pub const MAX_DESCRIPTION_CHARS: usize = 500;

pub fn validate(title: &str, description: &str) -> Result<(), ValidationError> {
    if title.is_empty() {
        return Err(ValidationError::new("title", "title must not be empty"));
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(ValidationError::new(
            "title",
            format!("title must not exceed {MAX_TITLE_CHARS} characters"),
        ));
    }
    if description.chars().count() > MAX_DESCRIPTION_CHARS {
        return Err(ValidationError::new(
            "description",
            format!("description must not exceed {MAX_DESCRIPTION_CHARS} characters"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_title_is_rejected() {
        let err = validate("", "x").unwrap_err();
        assert_eq!(err.field, "title");
        assert_eq!(err.to_string(), "title must not be empty");
    }

    #[test]
    fn whitespace_title_is_accepted() {
        assert!(validate(" ", "").is_ok());
    }

    #[test]
    fn title_length_boundary() {
        assert!(validate(&"a".repeat(100), "").is_ok());
        let err = validate(&"a".repeat(101), "").unwrap_err();
        assert_eq!(err.field, "title");
    }

    #[test]
    fn description_length_boundary() {
        assert!(validate("ok", &"b".repeat(500)).is_ok());
        let err = validate("ok", &"b".repeat(501)).unwrap_err();
        assert_eq!(err.field, "description");
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        // 100 three-byte characters.
        assert!(validate(&"牛".repeat(100), "").is_ok());
        assert!(validate("ok", &"é".repeat(500)).is_ok());
    }

    #[test]
    fn title_checked_before_description() {
        let err = validate("", &"b".repeat(501)).unwrap_err();
        assert_eq!(err.field, "title");
    }
}
