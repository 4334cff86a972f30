//! Synchronous, local form validation helpers shared by the edit dialogs.
//!
//! Validation never contacts the server: a failing field blocks
//! submission and surfaces its message next to the input.

pub const NAME_REQUIRED: &str = "Name is required";

/// Required-field check for name/title inputs; whitespace does not count.
pub fn validate_required(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        Some(NAME_REQUIRED)
    } else {
        None
    }
}

/// Trimmed copy of a required field, applied just before submission.
pub fn trimmed(value: &str) -> String {
    value.trim().to_string()
}

/// Trimmed copy of an optional field; all-whitespace collapses to `None`.
pub fn trimmed_opt(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_are_rejected() {
        assert_eq!(validate_required(""), Some(NAME_REQUIRED));
        assert_eq!(validate_required("   "), Some(NAME_REQUIRED));
        assert_eq!(validate_required("\t\n"), Some(NAME_REQUIRED));
    }

    #[test]
    fn present_names_pass() {
        assert_eq!(validate_required("Tolkien"), None);
        assert_eq!(validate_required("  x  "), None);
    }

    #[test]
    fn optional_fields_collapse_to_none() {
        assert_eq!(trimmed_opt("  "), None);
        assert_eq!(trimmed_opt(" fantasy "), Some("fantasy".to_string()));
        assert_eq!(trimmed(" Tolkien "), "Tolkien");
    }
}
