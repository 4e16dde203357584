//! Credential validation
//!
//! Pure, deterministic checks over the registration fields. Kept free of
//! any I/O so they can be exercised exhaustively in unit tests.

use chrono::NaiveDate;

/// A name qualifies when it trims and splits into at least two
/// whitespace-separated tokens.
pub fn is_full_name(value: &str) -> bool {
    value.split_whitespace().take(2).count() >= 2
}

/// Parse a `YYYY-MM-DD` birth date. Rejects impossible calendar dates
/// (e.g. February 30th), not just malformed strings.
pub fn parse_birth_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Email shape: local part of `[A-Za-z0-9._-]+`, a single `@`, a dotted
/// domain, and a final TLD of 2 to 6 ASCII letters.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    if !local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
    {
        return false;
    }

    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    if host.is_empty()
        || !host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'))
    {
        return false;
    }
    (2..=6).contains(&tld.len()) && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Password strength: at least 8 characters, with at least one uppercase
/// letter, one lowercase letter, one digit, and one character outside
/// `[A-Za-z0-9_]`.
pub fn is_strong_password(value: &str) -> bool {
    value.chars().count() >= 8
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value
            .chars()
            .any(|c| !(c.is_ascii_alphanumeric() || c == '_'))
}
