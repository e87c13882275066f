//! Field rules for the registration forms.
//!
//! Every function here is total over arbitrary string input: an invalid value
//! is reported as `false`, never as an error or a panic. Callers decide when to
//! check (submit, blur) and map a `false` to the message table in
//! [`super::messages`].

use regex::Regex;
use std::sync::LazyLock;

/// Number of digits in a national identity number.
pub const IDENTITY_NUMBER_LEN: usize = 10;

/// Number of digits in a mobile phone number.
pub const PHONE_LEN: usize = 10;

static IDENTITY_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("identity number pattern is valid"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^09[0-9]{8}$").expect("phone pattern is valid"));

/// Whitespace as ECMAScript `\s` defines it. Unicode `White_Space` differs:
/// it includes U+0085 and leaves out U+FEFF.
const JS_WHITESPACE: &str =
    r"\t\n\x{0B}\x{0C}\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

// Deliberately loose: local@domain.tld with no whitespace and a single '@'.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    let part = format!("[^{}@]+", JS_WHITESPACE);
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern is valid")
});

static HUMAN_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^[a-zA-ZáéíóúÁÉÍÓÚñÑ{}]{{2,50}}$", JS_WHITESPACE)).expect("name pattern is valid")
});

/// Same set as [`JS_WHITESPACE`], for character filters.
pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ' | '\u{A0}' | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

/// Keep only ASCII digits, capped at `max` of them.
fn digits_only(raw: &str, max: usize) -> String {
    raw.chars().filter(char::is_ascii_digit).take(max).collect()
}

/// True iff `value`, with whitespace and ASCII punctuation removed, is exactly
/// ten decimal digits. No checksum is applied.
pub fn validate_identity_number(value: &str) -> bool {
    let cleaned: String = value
        .chars()
        .filter(|c| !is_js_whitespace(*c) && !c.is_ascii_punctuation())
        .collect();
    IDENTITY_NUMBER_RE.is_match(&cleaned)
}

/// Live-typing normalization: digits only, at most ten of them.
pub fn format_identity_number(raw: &str) -> String {
    digits_only(raw, IDENTITY_NUMBER_LEN)
}

/// True iff `value` is a ten digit mobile number starting with `09`.
/// Spaces, `-`, `(` and `)` are ignored.
pub fn validate_phone(value: &str) -> bool {
    let cleaned: String = value
        .chars()
        .filter(|c| !is_js_whitespace(*c) && !matches!(*c, '-' | '(' | ')'))
        .collect();
    PHONE_RE.is_match(&cleaned)
}

/// Live-typing normalization: digits only, at most ten of them.
pub fn format_phone(raw: &str) -> String {
    digits_only(raw, PHONE_LEN)
}

/// Minimal `local@domain.tld` shape check. Not an RFC 5322 parser, and must not
/// become one: values accepted today have to stay accepted.
pub fn validate_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// 2 to 50 characters, letters (including accented vowels and ñ) and spaces only.
pub fn validate_human_name(value: &str) -> bool {
    HUMAN_NAME_RE.is_match(value)
}

/// At least one category must be picked.
pub fn validate_categories<S: AsRef<str>>(selected: &[S]) -> bool {
    selected.iter().any(|s| !is_blank(s.as_ref()))
}

/// Empty or whitespace-only, i.e. the "required" failure.
pub fn is_blank(value: &str) -> bool {
    value.chars().all(is_js_whitespace)
}
