use crate::api::types::Outcome;

/// The first-contact greeting the transmission encodes.
const TARGET_WORD: &str = "HELLO";

/// ASCII text to its 8-bit binary string, no separators.
pub fn encode_ascii(text: &str) -> String {
    text.bytes().map(|b| format!("{:08b}", b)).collect()
}

/// Number of binary digits a correct answer carries.
pub fn expected_bits() -> usize {
    TARGET_WORD.len() * 8
}

/// Whitespace-insensitive match against the encoded greeting.
pub fn check_binary(input: &str) -> Outcome {
    let stripped: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if stripped == encode_ascii(TARGET_WORD) {
        Outcome::Success
    } else {
        Outcome::Failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORRECT: &str = "0100100001000101010011000100110001001111";

    #[test]
    fn encoding_matches_the_known_answer() {
        assert_eq!(encode_ascii("HELLO"), CORRECT);
        assert_eq!(expected_bits(), 40);
    }

    #[test]
    fn exact_string_succeeds() {
        assert_eq!(check_binary(CORRECT), Outcome::Success);
    }

    #[test]
    fn interior_whitespace_is_ignored() {
        assert_eq!(
            check_binary("01001000 01000101 01001100 01001100 01001111"),
            Outcome::Success
        );
        assert_eq!(
            check_binary("01001000\n01000101\t010011000100110001001111"),
            Outcome::Success
        );
    }

    #[test]
    fn any_altered_bit_fails() {
        let mut flipped = CORRECT.to_string();
        flipped.replace_range(0..1, "1");
        assert_eq!(check_binary(&flipped), Outcome::Failure);
        assert_eq!(check_binary(""), Outcome::Failure);
        assert_eq!(check_binary("0100"), Outcome::Failure);
    }
}
