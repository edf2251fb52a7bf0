//! Tax identifier masking
//!
//! Personal tax identifiers are sensitive data and are never displayed in
//! full. This module provides the masking rule used everywhere an identifier
//! appears in output: statements, account listings, and error messages.

/// Mask a tax identifier for display
///
/// The input is left-padded with `'0'` to 11 characters, then formatted as
/// `AAA.***.BBB-**` where `AAA` is characters 0-2 and `BBB` is characters
/// 6-8 of the padded string.
///
/// This function never fails: malformed or short input is silently padded
/// rather than rejected. Input validation is a known gap carried over from
/// the original rules; callers that need a well-formed identifier must
/// validate before storing it.
///
/// # Examples
///
/// ```
/// use bank_teller::types::mask_tax_id;
///
/// assert_eq!(mask_tax_id("12345678901"), "123.***.789-**");
/// assert_eq!(mask_tax_id("1"), "000.***.000-**");
/// ```
pub fn mask_tax_id(raw: &str) -> String {
    let padded = format!("{:0>11}", raw);
    let chars: Vec<char> = padded.chars().collect();

    let head: String = chars[0..3].iter().collect();
    let mid: String = chars[6..9].iter().collect();

    format!("{}.***.{}-**", head, mid)
}
