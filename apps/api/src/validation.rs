//! Field-level validators shared by the user handlers.

use once_cell::sync::Lazy;
use regex::Regex;

/// Return true if the phone number carries an international country code:
/// a leading `+`, a 1-3 digit country code, then 1-14 digits.
pub fn check_phone_number(phone_number: &str) -> bool {
    static RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^\+\d{1,3}\d{1,14}$").expect("valid regex"));
    RE.is_match(phone_number)
}
