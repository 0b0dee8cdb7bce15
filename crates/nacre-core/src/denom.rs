// crates/nacre-core/src/denom.rs
//
// Asset denomination format checker.
//
// A denomination identifies a token eligible for transfer or minting
// (e.g. "anacre", "ibc/27A6..."). The grammar follows the conventional
// chain asset format: a leading ASCII letter, then letters, digits, and
// the punctuation set `/ : . _ -`, with a total length of 2 to 128.

use crate::error::DenomError;

/// Minimum length of a valid denomination, in characters.
pub const MIN_DENOM_LEN: usize = 2;

/// Maximum length of a valid denomination, in characters.
pub const MAX_DENOM_LEN: usize = 128;

fn is_denom_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '/' | ':' | '.' | '_' | '-')
}

/// Check that a string is a well-formed asset denomination.
///
/// Valid denominations start with an ASCII letter, continue with ASCII
/// letters, digits, or `/ : . _ -`, and are 2 to 128 characters long.
/// The empty string and strings with a leading `/` are rejected.
///
/// # Errors
/// Returns a [`DenomError`] naming the violated rule and carrying the
/// offending string.
pub fn validate_denom(denom: &str) -> Result<(), DenomError> {
    if denom.is_empty() {
        return Err(DenomError::new(denom, "denom cannot be empty"));
    }
    let len = denom.chars().count();
    if len < MIN_DENOM_LEN || len > MAX_DENOM_LEN {
        return Err(DenomError::new(
            denom,
            "denom must be between 2 and 128 characters",
        ));
    }

    let mut chars = denom.chars();
    // Non-empty was checked above, so the first char exists.
    if !chars.next().is_some_and(|c| c.is_ascii_alphabetic()) {
        return Err(DenomError::new(denom, "denom must start with a letter"));
    }
    if !chars.all(is_denom_char) {
        return Err(DenomError::new(
            denom,
            "denom may only contain letters, digits, and '/', ':', '.', '_', '-'",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_denoms() {
        assert!(validate_denom("anacre").is_ok());
        assert!(validate_denom("uatom").is_ok());
        assert!(validate_denom("nacre").is_ok());
        // Two characters is the minimum.
        assert!(validate_denom("ab").is_ok());
    }

    #[test]
    fn test_accepts_path_and_punctuation_denoms() {
        assert!(validate_denom("ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2").is_ok());
        assert!(validate_denom("gamm/pool/1").is_ok());
        assert!(validate_denom("factory:nacre1abcd:shell").is_ok());
        assert!(validate_denom("wrapped.nacre_v2-beta").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        let err = validate_denom("").unwrap_err();
        assert_eq!(err.denom, "");
    }

    #[test]
    fn test_rejects_leading_slash() {
        let err = validate_denom("/anacre").unwrap_err();
        assert_eq!(err.denom, "/anacre");
    }

    #[test]
    fn test_rejects_leading_digit() {
        assert!(validate_denom("1nacre").is_err());
    }

    #[test]
    fn test_rejects_single_character() {
        assert!(validate_denom("a").is_err());
    }

    #[test]
    fn test_rejects_overlong() {
        let denom = format!("a{}", "b".repeat(MAX_DENOM_LEN));
        assert!(validate_denom(&denom).is_err());
        // Exactly at the cap is still fine.
        let denom = format!("a{}", "b".repeat(MAX_DENOM_LEN - 1));
        assert!(validate_denom(&denom).is_ok());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 128 characters but 129 bytes: the length gate passes and the
        // string is rejected for its non-ASCII character, not its size.
        let denom = format!("a{}é", "b".repeat(MAX_DENOM_LEN - 2));
        assert_eq!(denom.chars().count(), MAX_DENOM_LEN);
        let err = validate_denom(&denom).unwrap_err();
        assert_eq!(
            err.reason,
            "denom may only contain letters, digits, and '/', ':', '.', '_', '-'"
        );
    }

    #[test]
    fn test_rejects_forbidden_characters() {
        assert!(validate_denom("nacre$").is_err());
        assert!(validate_denom("na cre").is_err());
        assert!(validate_denom("nacré").is_err());
    }
}
