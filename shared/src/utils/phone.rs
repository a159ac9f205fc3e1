//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// E.164: optional leading '+', no leading zero, at most 15 digits
static E164_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[1-9]\d{6,14}$").expect("E.164 pattern is valid")
});

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Check if a phone number looks like a dialable E.164 number
pub fn is_valid_phone(phone: &str) -> bool {
    E164_REGEX.is_match(&normalize_phone_number(phone))
}

/// Mask a phone number for logs and display (e.g. +15****0000)
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() >= 7 {
        format!(
            "{}****{}",
            &normalized[0..3],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone_number() {
        assert_eq!(normalize_phone_number("+1 (555) 123-0000"), "+15551230000");
        assert_eq!(normalize_phone_number("555.123.0000"), "5551230000");
    }

    #[test]
    fn test_is_valid_phone() {
        assert!(is_valid_phone("+15551230000"));
        assert!(is_valid_phone("+91 98765 43210"));
        assert!(!is_valid_phone("+05551230000"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("+1234567890123456"));
    }

    #[test]
    fn test_mask_phone_number() {
        assert_eq!(mask_phone_number("+15551230000"), "+15****0000");
        assert_eq!(mask_phone_number("9876543210"), "987****3210");
        assert_eq!(mask_phone_number("123"), "****");
    }
}
