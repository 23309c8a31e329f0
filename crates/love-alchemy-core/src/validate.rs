//! Shared input validation helpers.

use crate::error::ValidationError;

/// Accept names made of letters and spaces, non-empty after trimming.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if !trimmed.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
        return Err(ValidationError::InvalidName {
            input: trimmed.to_string(),
        });
    }
    Ok(())
}

/// Minimal shape check: `local@domain.tld` with no whitespace.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::InvalidEmail(email.to_string());
    if email.contains(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() => Ok(()),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_allow_letters_and_spaces() {
        assert!(validate_name("Mary Jane").is_ok());
        assert!(validate_name("  Bob  ").is_ok());
        assert_eq!(validate_name("   "), Err(ValidationError::EmptyName));
        assert_eq!(validate_name(""), Err(ValidationError::EmptyName));
        assert!(matches!(
            validate_name("X Æ A-12"),
            Err(ValidationError::InvalidName { .. })
        ));
        assert!(matches!(
            validate_name("name1"),
            Err(ValidationError::InvalidName { .. })
        ));
    }

    #[test]
    fn email_shape_check() {
        assert!(validate_email("a@b.co").is_ok());
        assert!(validate_email("first.last@mail.example.org").is_ok());
        for bad in ["", "plain", "@b.co", "a@", "a@b", "a b@c.d", "a@b@c.d", "a@.co"] {
            assert!(validate_email(bad).is_err(), "{bad:?} should be rejected");
        }
    }
}
