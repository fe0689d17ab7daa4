// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Phone-number checks for the two phone fields on the form.
//!
//! The step-1 contact phone must carry a country dial code and a subscriber
//! number whose digit count falls inside that country's range. The step-4
//! emergency phone is looser: it also accepts a bare digit string, and its
//! dial code is never checked against the country table. That asymmetry is
//! deliberate and matches the production form.

/// Digit-count rule for one country dial code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DialCodeRule {
    /// The dial code including the leading `+`.
    code: &'static str,
    /// Minimum subscriber digits for this code.
    min_digits: usize,
    /// Maximum subscriber digits for this code.
    max_digits: usize,
}

/// Subscriber digit ranges keyed by dial code. Codes not listed here fall
/// back to the 7–15 default.
const DIAL_CODE_RULES: &[DialCodeRule] = &[
    DialCodeRule { code: "+1", min_digits: 10, max_digits: 10 },
    DialCodeRule { code: "+34", min_digits: 9, max_digits: 9 },
    DialCodeRule { code: "+44", min_digits: 10, max_digits: 10 },
    DialCodeRule { code: "+49", min_digits: 10, max_digits: 11 },
    DialCodeRule { code: "+51", min_digits: 9, max_digits: 9 },
    DialCodeRule { code: "+52", min_digits: 10, max_digits: 10 },
    DialCodeRule { code: "+54", min_digits: 10, max_digits: 10 },
    DialCodeRule { code: "+55", min_digits: 10, max_digits: 11 },
    DialCodeRule { code: "+56", min_digits: 9, max_digits: 9 },
    DialCodeRule { code: "+57", min_digits: 10, max_digits: 10 },
    DialCodeRule { code: "+58", min_digits: 10, max_digits: 10 },
    DialCodeRule { code: "+506", min_digits: 8, max_digits: 8 },
    DialCodeRule { code: "+507", min_digits: 7, max_digits: 8 },
    DialCodeRule { code: "+591", min_digits: 8, max_digits: 8 },
    DialCodeRule { code: "+593", min_digits: 9, max_digits: 9 },
    DialCodeRule { code: "+595", min_digits: 9, max_digits: 9 },
];

/// Minimum subscriber digits when the dial code is unknown.
pub const DEFAULT_MIN_DIGITS: usize = 7;
/// Maximum subscriber digits when the dial code is unknown.
pub const DEFAULT_MAX_DIGITS: usize = 15;

/// Returns the `[min, max]` subscriber-digit range for a dial code
/// (including the leading `+`). Unknown codes get the default range.
#[must_use]
pub fn digit_range_for(dial_code: &str) -> (usize, usize) {
    DIAL_CODE_RULES
        .iter()
        .find(|rule| rule.code == dial_code)
        .map_or((DEFAULT_MIN_DIGITS, DEFAULT_MAX_DIGITS), |rule| {
            (rule.min_digits, rule.max_digits)
        })
}

/// Splits a raw phone string into its dial-code token and subscriber part.
///
/// The dial code must match `+` followed by 1 to 4 digits and be separated
/// from the subscriber number by whitespace. Returns `None` when the string
/// does not decompose that way.
#[must_use]
pub fn split_country_code(raw: &str) -> Option<(&str, &str)> {
    let trimmed: &str = raw.trim();
    let rest: &str = trimmed.strip_prefix('+')?;
    let digit_len: usize = rest.chars().take_while(char::is_ascii_digit).count();
    if !(1..=4).contains(&digit_len) {
        return None;
    }
    // +1 for the '+' prefix
    let (code, subscriber) = trimmed.split_at(digit_len + 1);
    let subscriber: &str = subscriber.trim_start();
    // Require an actual separator between code and subscriber
    if subscriber.len() == trimmed.len() - code.len() {
        return None;
    }
    if subscriber.is_empty() {
        return None;
    }
    Some((code, subscriber))
}

/// Counts the digits of a subscriber token, tolerating grouping spaces and
/// dashes. Returns `None` if any other character appears.
fn subscriber_digit_count(subscriber: &str) -> Option<usize> {
    let mut digits: usize = 0;
    for c in subscriber.chars() {
        if c.is_ascii_digit() {
            digits += 1;
        } else if c != ' ' && c != '-' {
            return None;
        }
    }
    Some(digits)
}

/// Checks the step-1 contact phone: `+<code> <subscriber>` where the
/// subscriber digit count falls inside the code's configured range.
#[must_use]
pub fn is_valid_contact_phone(raw: &str) -> bool {
    let Some((code, subscriber)) = split_country_code(raw) else {
        return false;
    };
    let Some(digits) = subscriber_digit_count(subscriber) else {
        return false;
    };
    let (min, max) = digit_range_for(code);
    (min..=max).contains(&digits)
}

/// Checks the step-4 emergency phone: either a bare 7–15 digit string or a
/// `+<code> <digits>` composite. The dial code is not cross-checked against
/// the country table here.
#[must_use]
pub fn is_valid_emergency_phone(raw: &str) -> bool {
    let trimmed: &str = raw.trim();
    if trimmed.starts_with('+') {
        let Some((_, subscriber)) = split_country_code(trimmed) else {
            return false;
        };
        subscriber_digit_count(subscriber)
            .is_some_and(|digits| (DEFAULT_MIN_DIGITS..=DEFAULT_MAX_DIGITS).contains(&digits))
    } else {
        !trimmed.is_empty()
            && trimmed.chars().all(|c| c.is_ascii_digit())
            && (DEFAULT_MIN_DIGITS..=DEFAULT_MAX_DIGITS).contains(&trimmed.len())
    }
}
