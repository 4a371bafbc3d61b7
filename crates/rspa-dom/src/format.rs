// File: src/format.rs
// Purpose: Input value normalisation for numeric and card-number fields

/// Digits in a card number; longer input is truncated.
pub const CARD_NUMBER_DIGITS: usize = 16;

/// Separator used by [`format_card_number_with_dashes`].
pub const CARD_NUMBER_SEPARATOR: char = '-';

/// Keeps ASCII digits only.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Strips non-digits, then truncates to `limit` characters when given.
pub fn number_input_value(raw: &str, limit: Option<usize>) -> String {
    let digits = digits_only(raw);
    match limit {
        Some(limit) => digits.chars().take(limit).collect(),
        None => digits,
    }
}

/// Inserts `separator` after every run of four digits that is followed by
/// another digit: `"12345"` becomes `"1234-5"`, `"1234"` stays `"1234"`.
pub fn format_card_number(number: &str, separator: char) -> String {
    let mut out = String::with_capacity(number.len() + number.len() / 4);
    let mut run = 0;
    let mut chars = number.chars().peekable();
    while let Some(c) = chars.next() {
        out.push(c);
        if !c.is_ascii_digit() {
            run = 0;
            continue;
        }
        run += 1;
        if run == 4 && chars.peek().is_some_and(char::is_ascii_digit) {
            out.push(separator);
            run = 0;
        }
    }
    out
}

pub fn format_card_number_with_dashes(number: &str) -> String {
    format_card_number(number, CARD_NUMBER_SEPARATOR)
}

/// Live value for a card-number field: digits only, capped at
/// [`CARD_NUMBER_DIGITS`], grouped by four.
pub fn card_input_value(raw: &str) -> String {
    format_card_number_with_dashes(&number_input_value(raw, Some(CARD_NUMBER_DIGITS)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("4111111111111111", "4111-1111-1111-1111")]
    #[case("1234567812345678", "1234-5678-1234-5678")]
    #[case("", "")]
    #[case("123", "123")]
    #[case("1234", "1234")]
    #[case("41111", "4111-1")]
    #[case("12a34567", "12a3456-7")]
    fn test_format_card_number(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(format_card_number_with_dashes(input), expected);
    }

    #[rstest]
    #[case("12a3456", Some(4), "1234")]
    #[case("12a3456", None, "123456")]
    #[case("abc", Some(2), "")]
    #[case("9 8 7", Some(10), "987")]
    fn test_number_input_value(
        #[case] raw: &str,
        #[case] limit: Option<usize>,
        #[case] expected: &str,
    ) {
        assert_eq!(number_input_value(raw, limit), expected);
    }

    #[test]
    fn test_card_input_value_caps_digits() {
        assert_eq!(
            card_input_value("4111-1111-1111-1111-9999"),
            "4111-1111-1111-1111"
        );
        assert_eq!(card_input_value("4111 11"), "4111-11");
    }

    #[test]
    fn test_custom_separator() {
        assert_eq!(format_card_number("12345678", ' '), "1234 5678");
    }
}
