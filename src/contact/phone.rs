//! Brazilian phone masking: `(DD) DDDDD-DDDD` for mobile, shorter brackets
//! while the number is still being typed.

/// Area code plus a nine digit mobile number.
pub const MAX_DIGITS: usize = 11;

pub fn digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

pub fn format_phone(raw: &str) -> String {
    let digits: String = digits(raw).chars().take(MAX_DIGITS).collect();

    match digits.len() {
        0..=2 => digits,
        3..=7 => format!("({}) {}", &digits[..2], &digits[2..]),
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
    }
}

/// Landline (10) or mobile (11) with area code. Nothing else passes.
pub fn is_valid_phone(raw: &str) -> bool {
    matches!(digits(raw).len(), 10 | 11)
}

/// Last four digits only, for log lines.
pub fn redact(raw: &str) -> String {
    let digits = digits(raw);
    let tail = digits.len().saturating_sub(4);
    format!("***{}", &digits[tail..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn short_input_is_left_bare() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("1"), "1");
        assert_eq!(format_phone("11"), "11");
    }

    #[test]
    fn area_code_gets_parentheses() {
        assert_eq!(format_phone("119"), "(11) 9");
        assert_eq!(format_phone("1198765"), "(11) 98765");
    }

    #[test]
    fn exchange_is_split_after_seventh_digit() {
        assert_eq!(format_phone("11987654"), "(11) 98765-4");
        assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
        assert_eq!(format_phone("1133334444"), "(11) 33334-444");
    }

    #[test]
    fn extra_digits_are_ignored() {
        assert_eq!(format_phone("119876543219999"), "(11) 98765-4321");
    }

    #[test]
    fn pasted_punctuation_is_stripped() {
        assert_eq!(format_phone("+55 (11) 98765-4321"), "(55) 11987-6543");
        assert_eq!(format_phone("(11) 98765-4321"), "(11) 98765-4321");
        assert_eq!(format_phone("abc"), "");
    }

    #[test]
    fn validator_accepts_landline_and_mobile() {
        assert!(is_valid_phone("(11) 98765-4321"));
        assert!(is_valid_phone("1133334444"));
        assert!(!is_valid_phone("(11) 98765-432"));
        assert!(!is_valid_phone("119876543210"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn redact_keeps_last_four() {
        assert_eq!(redact("(11) 98765-4321"), "***4321");
        assert_eq!(redact("12"), "***12");
    }

    fn mask_for(digits: &str) -> String {
        match digits.len() {
            0..=2 => digits.to_string(),
            3..=7 => format!("({}) {}", &digits[..2], &digits[2..]),
            _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
        }
    }

    proptest! {
        #[test]
        fn digit_strings_match_their_mask(d in "[0-9]{0,11}") {
            prop_assert_eq!(format_phone(&d), mask_for(&d));
        }

        #[test]
        fn formatting_is_a_fixed_point(raw in ".{0,24}") {
            let once = format_phone(&raw);
            prop_assert_eq!(format_phone(&once), once);
        }

        #[test]
        fn output_never_exceeds_eleven_digits(raw in "[0-9a-z ()+-]{0,30}") {
            prop_assert!(digits(&format_phone(&raw)).len() <= MAX_DIGITS);
        }

        #[test]
        fn validating_formatted_input_matches_clamped_count(raw in "[0-9 .()-]{0,20}") {
            let count = digits(&raw).len().min(MAX_DIGITS);
            prop_assert_eq!(is_valid_phone(&format_phone(&raw)), count == 10 || count == 11);
        }
    }
}
