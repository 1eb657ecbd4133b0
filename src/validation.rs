//! Validation for host-supplied identity fields
//!
//! The composer itself never rejects input; these helpers let the host
//! check identity data at its own boundary before rendering.

/// Validates a numeric user id (decimal snowflake form)
pub fn validate_user_id(id: &str) -> Result<(), String> {
    if id.is_empty() {
        return Err("User id cannot be empty".to_string());
    }

    // Snowflake ids fit in 64 bits, which is at most 20 decimal digits
    if id.len() > 20 {
        return Err("User id too long (max 20 digits)".to_string());
    }

    if !id.chars().all(|c| c.is_ascii_digit()) {
        return Err("User id must contain only decimal digits".to_string());
    }

    Ok(())
}

/// Validates a username or display name
pub fn validate_username(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Username cannot be empty".to_string());
    }

    // Platform account names are capped at 32 characters
    if name.chars().count() > 32 {
        return Err("Username too long (max 32 characters)".to_string());
    }

    if name.contains(|c: char| c.is_control()) {
        return Err("Username contains invalid characters".to_string());
    }

    Ok(())
}

/// Sanitizes a nickname by removing control characters and truncating
pub fn sanitize_nick(nick: &str) -> String {
    nick.chars().filter(|c| !c.is_control()).take(32).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_user_id() {
        assert!(validate_user_id("123456789").is_ok());
        assert!(validate_user_id("0").is_ok());
        assert!(validate_user_id(&"9".repeat(20)).is_ok());

        assert!(validate_user_id("").is_err());
        assert!(validate_user_id("12a34").is_err());
        assert!(validate_user_id("-123").is_err());
        assert!(validate_user_id("12 34").is_err());
        assert!(validate_user_id(&"9".repeat(21)).is_err()); // Too long
    }

    #[test]
    fn test_validate_username() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("Bob123").is_ok());
        assert!(validate_username("user name").is_ok()); // Display names allow spaces
        assert!(validate_username("日本語ユーザー").is_ok());

        assert!(validate_username("").is_err());
        assert!(validate_username("line\nbreak").is_err());
        assert!(validate_username("tab\there").is_err());
        assert!(validate_username(&"a".repeat(33)).is_err()); // Too long
    }

    #[test]
    fn test_sanitize_nick() {
        assert_eq!(sanitize_nick("Al"), "Al");
        assert_eq!(sanitize_nick("Al\nice"), "Alice");
        assert_eq!(sanitize_nick("CR\rLF"), "CRLF");
        assert_eq!(sanitize_nick(&"x".repeat(50)), "x".repeat(32));
    }
}
