/// Credential token format and salt schemes - base64 tokens carrying a
/// `name/project` identifier, bound to a user per the configured scheme
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use serde::{Deserialize, Serialize};

use super::digest::double_digest;
use crate::error::VerifyError;

/// Separates the identifier from the embedded salt inside a decoded token.
pub const SALT_DELIMITER: char = '#';

/// How the username salt enters the token and the key derivation.
///
/// The two schemes are incompatible on the wire: a token minted under one
/// never validates under the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SaltScheme {
    /// Current format. The decoded token is `name/project#user` and the
    /// private key is the double digest of the raw token alone.
    #[default]
    Embedded,
    /// Legacy format. The decoded token is `name/project` and the private
    /// key is the double digest of the raw token with the username appended.
    Appended,
}

impl SaltScheme {
    /// Parse a scheme tag from a config or environment string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "embedded" => Some(SaltScheme::Embedded),
            "appended" => Some(SaltScheme::Appended),
            _ => None,
        }
    }

    /// Recompute the private key expected for `credential` under this scheme.
    ///
    /// The input is the raw, still-encoded token; under [`SaltScheme::Appended`]
    /// the current username is concatenated before hashing.
    pub fn expected_key(&self, credential: &str, username_salt: &str) -> String {
        match self {
            SaltScheme::Embedded => double_digest(credential),
            SaltScheme::Appended => double_digest(&format!("{credential}{username_salt}")),
        }
    }

    /// Decode the credential and extract the `name/project` identifier.
    ///
    /// Under [`SaltScheme::Embedded`] the decoded token must contain the salt
    /// delimiter, and the trailing salt segment must equal the current
    /// username.
    pub fn decode_identifier(
        &self,
        credential: &str,
        username_salt: &str,
    ) -> Result<String, VerifyError> {
        let bytes = BASE64
            .decode(credential)
            .map_err(|e| VerifyError::MalformedCredential(format!("invalid base64: {e}")))?;
        let decoded = String::from_utf8(bytes).map_err(|_| {
            VerifyError::MalformedCredential("decoded token is not valid UTF-8".to_string())
        })?;

        match self {
            SaltScheme::Appended => Ok(decoded),
            SaltScheme::Embedded => {
                // Split at the last delimiter; the identifier itself may contain '#'
                let Some((identifier, issued_user)) = decoded.rsplit_once(SALT_DELIMITER) else {
                    return Err(VerifyError::MalformedCredential(format!(
                        "expected delimiter '{SALT_DELIMITER}' not found in decoded token"
                    )));
                };
                if issued_user != username_salt {
                    return Err(VerifyError::UserMismatch {
                        issued: issued_user.to_string(),
                        current: username_salt.to_string(),
                    });
                }
                Ok(identifier.to_string())
            }
        }
    }
}
