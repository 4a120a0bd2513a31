/// Double-hash primitive behind every issued private key
use sha2::{Digest, Sha256, Sha512};
use subtle::ConstantTimeEq;

/// Compute `hex(sha256(sha512(data)))`.
///
/// # Arguments
/// * `data` - UTF-8 input (the raw credential, optionally with the salt appended)
///
/// # Returns
/// Lowercase hex digest, 64 characters
pub fn double_digest(data: &str) -> String {
    let inner = Sha512::digest(data.as_bytes());
    let outer = Sha256::digest(inner);
    hex::encode(outer)
}

/// Compare two hex-encoded keys in constant time.
///
/// Comparison is case-sensitive; issued keys are lowercase hex.
pub fn keys_match(expected: &str, provided: &str) -> bool {
    expected.as_bytes().ct_eq(provided.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_digest_known_answers() {
        // Vectors computed with an independent sha256(sha512(x)) implementation
        assert_eq!(
            double_digest(""),
            "001d686db504e20c792eaa07fe09224a45ff328e24a80072d04d16abc5c2b5d2"
        );
        assert_eq!(
            double_digest("hello"),
            "54663a69f14a1220be0b39c53e6926fd9f6094e027a8a4b0fb1d4ae0f50d5718"
        );
        assert_eq!(
            double_digest("YWNtZS9yb2NrZXQ="),
            "b83cab3a7b95bce109cb2e60819dace5132104bea22786faf0c2bf35f614c6b9"
        );
    }

    #[test]
    fn test_double_digest_is_deterministic() {
        let first = double_digest("YWNtZS9yb2NrZXQjYWxpY2U=");
        let second = double_digest("YWNtZS9yb2NrZXQjYWxpY2U=");

        // Same input should produce the same digest
        assert_eq!(first, second);

        // Digest should be 64 lowercase hex characters
        assert_eq!(first.len(), 64);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(first, first.to_lowercase());
    }

    #[test]
    fn test_double_digest_avalanche() {
        // A one-character change must produce an unrelated digest
        let a = double_digest("YWNtZS9yb2NrZXQ=alice");
        let b = double_digest("YWNtZS9yb2NrZXQ=alics");
        assert_ne!(a, b);
    }

    #[test]
    fn test_keys_match_rejects_tampering() {
        let key = double_digest("YWNtZS9yb2NrZXQ=");
        assert!(keys_match(&key, &key));

        // Flip the last hex character
        let mut tampered = key.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == '0' { '1' } else { '0' });
        assert!(!keys_match(&key, &tampered));

        // Comparison is case-sensitive
        assert!(!keys_match(&key, &key.to_uppercase()));

        // Different length is a mismatch, not a panic
        assert!(!keys_match(&key, &key[..32]));
    }
}
