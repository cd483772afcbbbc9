use once_cell::sync::Lazy;
use regex::Regex;

// Exactly one "@" between a non-empty local part and a domain that
// contains at least one "." with text on both sides. No whitespace
// anywhere, no normalization of the input. Known-coarse pattern, kept
// as is: "user..name@domain.com" passes, "user@domain" does not.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub struct Email;

impl Email {
    pub fn apply(value: &str) -> bool {
        EMAIL_RE.is_match(value)
    }
}
