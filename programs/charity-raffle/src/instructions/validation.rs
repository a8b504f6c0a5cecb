use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{MAX_NAME_CHARS, MAX_NAME_LEN, MAX_PHONE_LEN, MIN_NAME_LEN, MIN_PHONE_LEN},
};

pub fn validate_name(name: &str) -> Result<()> {
    let trimmed = name.trim();
    require!(
        trimmed.chars().count() >= MIN_NAME_LEN
            && name.chars().count() <= MAX_NAME_CHARS
            && name.len() <= MAX_NAME_LEN,
        RaffleError::InvalidName
    );
    Ok(())
}

/// Strips spaces and `+` from a phone and checks what is left.
/// Phones are optional; when given they are 10 to 12 ASCII digits.
pub fn normalize_phone(phone: &str) -> Result<String> {
    let digits: String = phone.chars().filter(|c| *c != ' ' && *c != '+').collect();
    if digits.is_empty() {
        return Ok(digits);
    }
    require!(
        (MIN_PHONE_LEN..=MAX_PHONE_LEN).contains(&digits.len())
            && digits.bytes().all(|b| b.is_ascii_digit()),
        RaffleError::InvalidPhone
    );
    Ok(digits)
}

pub fn validate_text(text: &str, max_len: usize, error: RaffleError) -> Result<()> {
    if text.len() > max_len {
        return Err(error.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MAX_NOTE_LEN;

    #[test]
    fn names_need_three_to_fifty_characters() {
        assert!(validate_name("Bob").is_ok());
        assert!(validate_name(&"x".repeat(50)).is_ok());
        assert_eq!(
            validate_name("Al").unwrap_err(),
            RaffleError::InvalidName.into()
        );
        assert_eq!(
            validate_name("  Al  ").unwrap_err(),
            RaffleError::InvalidName.into()
        );
        assert_eq!(
            validate_name(&"x".repeat(51)).unwrap_err(),
            RaffleError::InvalidName.into()
        );
    }

    #[test]
    fn multibyte_names_are_counted_in_characters() {
        // Two bytes per letter.
        assert!(validate_name("Оля").is_ok());
        assert!(validate_name(&"ж".repeat(50)).is_ok());
        assert_eq!(
            validate_name(&"ж".repeat(51)).unwrap_err(),
            RaffleError::InvalidName.into()
        );
        // Four bytes per character, still within the reserved space.
        assert!(validate_name(&"🎁".repeat(50)).is_ok());
    }

    #[test]
    fn phones_are_optional_digits() {
        assert_eq!(normalize_phone("").unwrap(), "");
        assert_eq!(normalize_phone("0501234567").unwrap(), "0501234567");
        assert_eq!(normalize_phone("380501234567").unwrap(), "380501234567");
        assert_eq!(
            normalize_phone("050123456").unwrap_err(),
            RaffleError::InvalidPhone.into()
        );
        assert_eq!(
            normalize_phone("05012345ab").unwrap_err(),
            RaffleError::InvalidPhone.into()
        );
        assert_eq!(
            normalize_phone("380-50-123-45-67").unwrap_err(),
            RaffleError::InvalidPhone.into()
        );
    }

    #[test]
    fn phones_drop_spaces_and_plus() {
        assert_eq!(normalize_phone("+380501234567").unwrap(), "380501234567");
        assert_eq!(normalize_phone("+38 050 123 45 67").unwrap(), "380501234567");
        assert_eq!(normalize_phone(" + ").unwrap(), "");
    }

    #[test]
    fn text_length_is_capped() {
        assert!(validate_text(&"n".repeat(MAX_NOTE_LEN), MAX_NOTE_LEN, RaffleError::NoteTooLong).is_ok());
        assert_eq!(
            validate_text(&"n".repeat(MAX_NOTE_LEN + 1), MAX_NOTE_LEN, RaffleError::NoteTooLong)
                .unwrap_err(),
            RaffleError::NoteTooLong.into()
        );
    }
}
