//! Viewer profile validation.

use crate::error::CoreError;

/// Minimum age for an account that states one.
pub const MIN_VIEWER_AGE: i32 = 18;

/// Validate a profile age. Absent is fine; a stated age must be >= 18.
pub fn validate_age(age: Option<i32>) -> Result<(), CoreError> {
    match age {
        Some(age) if age < MIN_VIEWER_AGE => Err(CoreError::Validation(format!(
            "Age must be at least {MIN_VIEWER_AGE}"
        ))),
        _ => Ok(()),
    }
}

/// Validate a phone number: `+` followed by 8 to 15 digits.
pub fn validate_phone_number(phone: &str) -> Result<(), CoreError> {
    let digits = match phone.strip_prefix('+') {
        Some(rest) => rest,
        None => {
            return Err(CoreError::Validation(format!(
                "Invalid phone number '{phone}'. Must start with '+'"
            )))
        }
    };

    if digits.len() < 8 || digits.len() > 15 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(CoreError::Validation(format!(
            "Invalid phone number '{phone}'. Expected 8-15 digits after '+'"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_age_accepted() {
        assert!(validate_age(None).is_ok());
    }

    #[test]
    fn test_adult_age_accepted() {
        assert!(validate_age(Some(18)).is_ok());
        assert!(validate_age(Some(47)).is_ok());
    }

    #[test]
    fn test_under_18_rejected() {
        let result = validate_age(Some(17));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("at least 18"));
    }

    #[test]
    fn test_valid_phone_numbers_accepted() {
        assert!(validate_phone_number("+996700123456").is_ok());
        assert!(validate_phone_number("+12025550123").is_ok());
    }

    #[test]
    fn test_invalid_phone_numbers_rejected() {
        assert!(validate_phone_number("996700123456").is_err()); // Missing +
        assert!(validate_phone_number("+123").is_err()); // Too short
        assert!(validate_phone_number("+1202555012345678").is_err()); // Too long
        assert!(validate_phone_number("+120255501ab").is_err()); // Non-digits
    }
}
