//! Offline checksum validation of KunaCodes.
//!
//! A KunaCode looks like `9bWsM-...-UAH-KCode`. The last two segments carry
//! the currency and a fixed suffix; the others are concatenated into the
//! checksummed body. The body's first character encodes, as an index into
//! [`KUNA_CODE_ALPHABET`], the sum of the indices of all following characters
//! modulo 58.
//!
//! Any single-character substitution in the body is detected. Edits of two or
//! more characters can cancel out modulo 58.

use crate::error::KunaError;

/// Base58 alphabet used by KunaCodes (no `0`, `O`, `I` or `l`).
pub const KUNA_CODE_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const BASE: usize = 58;

/// Segments after the body: currency and suffix.
const TRAILING_SEGMENTS: usize = 2;

fn alphabet_index(c: char) -> Option<usize> {
    KUNA_CODE_ALPHABET.find(c)
}

/// Validate the embedded checksum of a KunaCode.
///
/// Fails with [`KunaError::InvalidChecksum`] when the code has too few
/// segments, contains a character outside the alphabet, or the sum does not
/// match.
///
/// # Example
///
/// ```rust
/// use kuna_api_client::kuna_code::validate_kuna_code;
///
/// assert!(validate_kuna_code("not-a-code").is_err());
/// ```
pub fn validate_kuna_code(code: &str) -> Result<(), KunaError> {
    let segments: Vec<&str> = code.split('-').collect();
    if segments.len() <= TRAILING_SEGMENTS {
        return Err(KunaError::InvalidChecksum(format!(
            "{code}: expected at least {} segments",
            TRAILING_SEGMENTS + 1
        )));
    }
    let body: String = segments[..segments.len() - TRAILING_SEGMENTS].concat();

    let mut chars = body.chars();
    let Some(first) = chars.next() else {
        return Err(KunaError::InvalidChecksum(format!("{code}: empty body")));
    };

    let index = |c: char| {
        alphabet_index(c)
            .ok_or_else(|| KunaError::InvalidChecksum(format!("{code}: invalid character {c:?}")))
    };

    let expected = index(first)?;
    let mut sum = 0;
    for c in chars.rev() {
        sum = (sum + index(c)?) % BASE;
    }

    if sum == expected {
        Ok(())
    } else {
        Err(KunaError::InvalidChecksum(format!(
            "{code}: checksum {sum} does not match {expected}"
        )))
    }
}

/// Whether a KunaCode passes [`validate_kuna_code`].
pub fn is_valid_kuna_code(code: &str) -> bool {
    validate_kuna_code(code).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alphabet() -> Vec<char> {
        KUNA_CODE_ALPHABET.chars().collect()
    }

    /// Build a valid code around `payload` by prepending its checksum.
    fn make_code(payload: &str, tail: &str) -> String {
        let sum = payload.chars().map(|c| alphabet_index(c).unwrap()).sum::<usize>() % BASE;
        let checksum = alphabet()[sum];
        let body = format!("{checksum}{payload}");
        // Split the body into five-character groups like issued codes.
        let groups: Vec<String> = body
            .chars()
            .collect::<Vec<_>>()
            .chunks(5)
            .map(|c| c.iter().collect())
            .collect();
        format!("{}-{tail}", groups.join("-"))
    }

    #[test]
    fn test_alphabet_is_base58() {
        let chars = alphabet();
        assert_eq!(chars.len(), BASE);
        for c in ['0', 'O', 'I', 'l'] {
            assert!(!chars.contains(&c));
        }
    }

    #[test]
    fn test_valid_code() {
        let code = make_code("8ToKdWz3qRvP7sLm2nXc9FhJ4gBtYe6", "UAH-KCode");
        assert!(is_valid_kuna_code(&code), "{code}");
        assert!(validate_kuna_code(&code).is_ok());
    }

    #[test]
    fn test_trailing_segments_are_not_checksummed() {
        let payload = "Zx4pQ9mNcv2Rt";
        let a = make_code(payload, "UAH-KCode");
        let b = make_code(payload, "BTC-anything");
        assert!(is_valid_kuna_code(&a));
        assert!(is_valid_kuna_code(&b));
    }

    #[test]
    fn test_every_single_substitution_detected() {
        let code = make_code("8ToKdWz3qRvP7sLm2nXc9FhJ4gBtYe6", "UAH-KCode");
        let body_len = code.rsplitn(3, '-').nth(2).unwrap().len();

        let chars: Vec<char> = code.chars().collect();
        for pos in 0..body_len {
            if chars[pos] == '-' {
                continue;
            }
            for replacement in alphabet() {
                if replacement == chars[pos] {
                    continue;
                }
                let mut mutated = chars.clone();
                mutated[pos] = replacement;
                let mutated: String = mutated.into_iter().collect();
                assert!(
                    matches!(validate_kuna_code(&mutated), Err(KunaError::InvalidChecksum(_))),
                    "substitution at {pos} with {replacement} not detected: {mutated}"
                );
            }
        }
    }

    #[test]
    fn test_too_few_segments() {
        assert!(matches!(
            validate_kuna_code("UAH-KCode"),
            Err(KunaError::InvalidChecksum(_))
        ));
        assert!(!is_valid_kuna_code(""));
        assert!(!is_valid_kuna_code("-UAH-KCode"));
    }

    #[test]
    fn test_character_outside_alphabet() {
        // '0' is not part of base58.
        let err = validate_kuna_code("10000-UAH-KCode").unwrap_err();
        assert!(err.to_string().contains("invalid character"));
    }

    #[test]
    fn test_checksum_only_body() {
        // An empty payload sums to zero, encoded as '1'.
        assert!(is_valid_kuna_code("1-UAH-KCode"));
        assert!(!is_valid_kuna_code("2-UAH-KCode"));
    }
}
