//! Best-effort PII redaction for anonymous submissions.
//!
//! Posts are supposed to be anonymous, so email- and phone-shaped substrings
//! are replaced with literal markers before anything reaches the store.
//!
//! Note:
//! - This is a best-effort filter, not an anonymity guarantee. The phone
//!   pattern is deliberately loose (2-4-4 digit grouping with optional
//!   separators): other groupings slip through, and any contiguous 10-digit
//!   run is redacted even when it is just an ID.
//! - No other moderation happens here.
use std::sync::LazyLock;

use regex::Regex;

pub const EMAIL_MARKER: &str = "[EMAIL REDACTED]";
pub const PHONE_MARKER: &str = "[PHONE REDACTED]";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("invalid email regex")
});

// Optional leading +, then 2-4-4 digits with optional single separators.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\+?[0-9]{2}[-. ]?[0-9]{4}[-. ]?[0-9]{4}").expect("invalid phone regex")
});

/// Redact identifying substrings. Pure; any input is accepted.
///
/// The email pass runs first so digits inside an address are gone before the
/// phone pass scans the text.
pub fn sanitize(input: &str) -> String {
    let without_emails = EMAIL_RE.replace_all(input, EMAIL_MARKER);
    PHONE_RE
        .replace_all(&without_emails, PHONE_MARKER)
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_email_addresses() {
        let out = sanitize("reach me at john.doe@example.com if you want to talk");
        assert_eq!(out, "reach me at [EMAIL REDACTED] if you want to talk");
        assert!(!out.contains("john.doe"));
    }

    #[test]
    fn redacts_phone_numbers_with_separators() {
        let out = sanitize("my number is +81-9012-3456, call any time");
        assert_eq!(out, "my number is [PHONE REDACTED], call any time");
    }

    #[test]
    fn redacts_bare_ten_digit_runs() {
        // Known false positive: a 10-digit ID matches the 2-4-4 grouping.
        let out = sanitize("employee badge 1234567890 was revoked");
        assert_eq!(out, "employee badge [PHONE REDACTED] was revoked");
    }

    #[test]
    fn leaves_other_digit_groupings_alone() {
        // 8 digits total, so the loose pattern does not fire.
        let out = sanitize("the 2024-2025 budget was cut again");
        assert_eq!(out, "the 2024-2025 budget was cut again");
    }

    #[test]
    fn passes_clean_text_through() {
        let text = "Nobody talks about burnout on my team.";
        assert_eq!(sanitize(text), text);
    }

    #[test]
    fn redacts_both_kinds_in_one_submission() {
        let out = sanitize("HR is hr.team@corp.io or 08.1234.5678 internally");
        assert_eq!(out, "HR is [EMAIL REDACTED] or [PHONE REDACTED] internally");
    }

    #[test]
    fn digits_inside_an_address_are_not_double_redacted() {
        let out = sanitize("it was sent from id1234567890@corp.io yesterday");
        assert_eq!(out, "it was sent from [EMAIL REDACTED] yesterday");
    }
}
