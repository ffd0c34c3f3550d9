// File: src/patterns.rs
// Purpose: Pattern predicates for each employee field kind

use once_cell::sync::Lazy;
use regex::Regex;

/// Letters, periods, hyphens and ASCII whitespace; at least one character.
pub const NAME_PATTERN: &str = r"^[A-Za-z.\-[:space:]]+$";

/// Literal `0` followed by exactly six ASCII digits.
pub const ID_PATTERN: &str = r"^0[0-9]{6}$";

/// Alphanumeric local part, letters-only domain label, letters-only TLD.
///
/// This rejects dots in the local part, digits or hyphens in the domain,
/// plus-addressing and multi-label domains such as `example.co.uk`.
pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9]+@[A-Za-z]+\.[A-Za-z]+$";

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(NAME_PATTERN).expect("name pattern compiles"));

static ID_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(ID_PATTERN).expect("id pattern compiles"));

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));

/// Validate a first or last name
pub fn is_valid_name(name: &str) -> bool {
    NAME_REGEX.is_match(name)
}

/// Validate an employee ID such as `0123456`
pub fn is_valid_id(id: &str) -> bool {
    ID_REGEX.is_match(id)
}

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Absent names are never valid
pub fn is_valid_name_opt(name: Option<&str>) -> bool {
    name.is_some_and(is_valid_name)
}

/// Absent IDs are never valid
pub fn is_valid_id_opt(id: Option<&str>) -> bool {
    id.is_some_and(is_valid_id)
}

/// Absent emails are never valid
pub fn is_valid_email_opt(email: Option<&str>) -> bool {
    email.is_some_and(is_valid_email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("John")]
    #[case("Mary-Jane")]
    #[case("St. John")]
    #[case("van der Berg")]
    #[case("J.R.R")]
    #[case(" ")]
    #[case("tab\tseparated")]
    fn test_valid_names(#[case] name: &str) {
        assert!(is_valid_name(name), "{name:?} should be a valid name");
    }

    #[rstest]
    #[case("")]
    #[case("John123")]
    #[case("O'Brien")]
    #[case("Anne_Marie")]
    #[case("José")]
    #[case("John!")]
    #[case("Jo\u{00A0}hn")]
    fn test_invalid_names(#[case] name: &str) {
        assert!(!is_valid_name(name), "{name:?} should be rejected");
    }

    #[test]
    fn test_id_validation() {
        assert!(is_valid_id("0123456"));
        assert!(is_valid_id("0000000"));

        assert!(!is_valid_id("1234567")); // must start with 0
        assert!(!is_valid_id("012345")); // too short
        assert!(!is_valid_id("01234567")); // too long
        assert!(!is_valid_id(""));
        assert!(!is_valid_id("01234a6"));
        assert!(!is_valid_id(" 0123456"));
        assert!(!is_valid_id("0123456\n"));
    }

    #[test]
    fn test_id_rejects_non_ascii_digits() {
        // Arabic-Indic digits are Unicode \d but not valid IDs
        assert!(!is_valid_id("0١٢٣٤٥٦"));
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("john@doe.com"));
        assert!(is_valid_email("User42@Example.ORG"));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("invalid"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("test@"));
        assert!(!is_valid_email("test@example"));
        assert!(!is_valid_email("test@@example.com"));
    }

    #[test]
    fn test_email_requires_full_match() {
        assert!(!is_valid_email("xx a@b.com"));
        assert!(!is_valid_email("a@b.com yy"));
        assert!(!is_valid_email("a@b.com\n"));
    }

    /// Known narrow match: these are deliverable addresses the pattern rejects.
    #[rstest]
    #[case("a@b1.com")]
    #[case("a.b@c.com")]
    #[case("user+tag@example.com")]
    #[case("user@example.co.uk")]
    #[case("user@my-company.com")]
    fn test_email_known_narrow_rejections(#[case] email: &str) {
        assert!(!is_valid_email(email));
    }

    #[test]
    fn test_absent_input_is_invalid() {
        assert!(!is_valid_name_opt(None));
        assert!(!is_valid_id_opt(None));
        assert!(!is_valid_email_opt(None));

        assert!(is_valid_name_opt(Some("Doe")));
        assert!(is_valid_id_opt(Some("0123456")));
        assert!(is_valid_email_opt(Some("john@doe.com")));
    }
}
