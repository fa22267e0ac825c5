use soroban_sdk::String;

use crate::errors::VotingError;

/// Upper bound on a proposal description, in bytes.
pub const MAX_DESCRIPTION_LEN: u32 = 256;

/// Rejects descriptions that are empty, whitespace only, or too long.
pub fn validate_description(description: &String) -> Result<(), VotingError> {
    let len = description.len();
    if len == 0 {
        return Err(VotingError::EmptyProposal);
    }
    if len > MAX_DESCRIPTION_LEN {
        return Err(VotingError::DescriptionTooLong);
    }

    let mut buf = [0u8; MAX_DESCRIPTION_LEN as usize];
    let bytes = &mut buf[..len as usize];
    description.copy_into_slice(bytes);
    let blank = match core::str::from_utf8(bytes) {
        Ok(text) => text.trim().is_empty(),
        Err(_) => false,
    };
    if blank {
        return Err(VotingError::EmptyProposal);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    #[test]
    fn accepts_regular_text() {
        let env = Env::default();
        let description = String::from_str(&env, "Proposal 1");
        assert_eq!(validate_description(&description), Ok(()));
    }

    #[test]
    fn rejects_empty_and_blank() {
        let env = Env::default();
        for text in ["", " ", "\t\n  ", "\u{3000}\u{00A0}", "\u{2003} \u{200A}"] {
            let description = String::from_str(&env, text);
            assert_eq!(
                validate_description(&description),
                Err(VotingError::EmptyProposal)
            );
        }
    }

    #[test]
    fn text_around_unicode_spaces_is_kept() {
        let env = Env::default();
        let description = String::from_str(&env, "\u{00A0}Budget vote\u{3000}");
        assert_eq!(validate_description(&description), Ok(()));
    }

    #[test]
    fn enforces_length_limit() {
        let env = Env::default();
        let at_limit = [b'a'; MAX_DESCRIPTION_LEN as usize];
        let over_limit = [b'a'; MAX_DESCRIPTION_LEN as usize + 1];

        let ok = String::from_bytes(&env, &at_limit);
        assert_eq!(validate_description(&ok), Ok(()));

        let too_long = String::from_bytes(&env, &over_limit);
        assert_eq!(
            validate_description(&too_long),
            Err(VotingError::DescriptionTooLong)
        );
    }
}
