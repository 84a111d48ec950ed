//! Phone number normalization.
//!
//! Guest phone numbers arrive as free text from booking descriptions. This
//! module maps the common Romanian and German spellings onto the `+CC…` form
//! the WhatsApp API expects. It is a heuristic, not E.164 validation: a bare
//! ten digit number starting with `0` is always read as Romanian, even when it
//! could be a German mobile number.

/// Normalize a raw phone string into international form.
///
/// Rules are applied in order and the first match wins:
///
/// 1. whitespace, `-`, `(` and `)` are stripped
/// 2. `+40…` / `0040…` become `+40…`
/// 3. a ten character number starting with `0` becomes `+40` + the rest
/// 4. `+49…` / `0049…` become `+49…`
/// 5. `01…` with at least ten characters becomes `+49` + the rest
/// 6. anything else starting with `+` and holding at least ten digits is kept
///
/// Returns `None` when no rule matches.
pub fn normalize(raw: &str) -> Option<String> {
    let phone: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect();

    if phone.is_empty() {
        return None;
    }

    let len = phone.chars().count();

    // Romania
    if let Some(rest) = phone.strip_prefix("+40") {
        return Some(format!("+40{}", rest));
    }
    if let Some(rest) = phone.strip_prefix("0040") {
        return Some(format!("+40{}", rest));
    }
    if len == 10 {
        if let Some(rest) = phone.strip_prefix('0') {
            return Some(format!("+40{}", rest));
        }
    }

    // Germany
    if let Some(rest) = phone.strip_prefix("+49") {
        return Some(format!("+49{}", rest));
    }
    if let Some(rest) = phone.strip_prefix("0049") {
        return Some(format!("+49{}", rest));
    }
    if phone.starts_with("01") && len >= 10 {
        return Some(format!("+49{}", &phone[1..]));
    }

    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    if phone.starts_with('+') && digits >= 10 {
        return Some(phone);
    }

    None
}
