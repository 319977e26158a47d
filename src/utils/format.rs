use crate::form::{CALL_UP_PREFIX, PHONE_COUNTRY_CODE};

/// Case-insensitive substring match, used by roster search.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Normalize raw phone input toward the `+234XXXXXXXXXX` form.
///
/// Keeps digits and a leading plus, strips leading zeros and any bare or
/// plus-prefixed country code, then prefixes `+234`. Normalization never
/// rejects - length is checked later by section validation.
pub fn normalize_phone(input: &str) -> String {
    let kept: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    if kept.is_empty() || kept.starts_with(PHONE_COUNTRY_CODE) {
        return kept;
    }
    let rest = kept.trim_start_matches('0');
    let rest = rest
        .strip_prefix(PHONE_COUNTRY_CODE)
        .or_else(|| rest.strip_prefix("234"))
        .unwrap_or(rest);
    format!("{}{}", PHONE_COUNTRY_CODE, rest)
}

/// Normalize call-up number input so it carries the `NYSC/` prefix
/// exactly once. Empty input stays empty.
pub fn normalize_call_up(input: &str) -> String {
    if input.is_empty() || input.starts_with(CALL_UP_PREFIX) {
        return input.to_string();
    }
    let rest = input
        .strip_prefix("NYSC/")
        .or_else(|| input.strip_prefix("NYSC"))
        .unwrap_or(input);
    format!("{}{}", CALL_UP_PREFIX, rest)
}
