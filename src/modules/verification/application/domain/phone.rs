/// Masks a phone number for display.
///
/// Non-digits are dropped. Fewer than 6 digits: the input is returned as is.
/// Otherwise: first 4 digits, one `*` per hidden digit, last 2 digits.
pub fn mask_phone(phone: &str) -> String {
    let digits: Vec<char> = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() < 6 {
        return phone.to_string();
    }

    let head: String = digits[..4].iter().collect();
    let tail: String = digits[digits.len() - 2..].iter().collect();
    let hidden = "*".repeat(digits.len() - 6);

    format!("{head}{hidden}{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_formatted_russian_number() {
        assert_eq!(mask_phone("+7 (900) 123-45-67"), "7900*****67");
    }

    #[test]
    fn short_numbers_are_left_untouched() {
        assert_eq!(mask_phone("12345"), "12345");
        assert_eq!(mask_phone("+1 (2) 3"), "+1 (2) 3");
    }

    #[test]
    fn exactly_six_digits_hide_nothing() {
        assert_eq!(mask_phone("12-34-56"), "123456");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(mask_phone(""), "");
    }
}
