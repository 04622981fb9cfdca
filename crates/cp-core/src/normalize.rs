//! Input normalization applied before entities are persisted.

/// Trim surrounding whitespace.
#[must_use]
pub fn text(value: &str) -> String {
    value.trim().to_string()
}

/// Trim and lower-case an email address.
#[must_use]
pub fn email(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Trim lesson notes; blank notes become `None`.
#[must_use]
pub fn notes(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|notes| !notes.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_trimmed_and_lowercased() {
        assert_eq!(email("  Ana.Ruiz@Demo.COM \n"), "ana.ruiz@demo.com");
    }

    #[test]
    fn blank_notes_are_absent() {
        assert_eq!(notes(None), None);
        assert_eq!(notes(Some("")), None);
        assert_eq!(notes(Some("   \t")), None);
        assert_eq!(notes(Some("  Great progress ")).as_deref(), Some("Great progress"));
    }
}
