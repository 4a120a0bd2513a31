/// Failure kinds for license verification - one variant per user-facing
/// diagnostic, with the `Display` text doubling as the verdict message
use thiserror::Error;

/// A terminal verification failure. Nothing is retried internally.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// The current OS user could not be resolved.
    #[error("cannot determine current user: {0}")]
    Environment(String),

    /// A required configuration value is absent or empty.
    #[error("{0} not found in environment, .env file, or config file")]
    MissingConfig(&'static str),

    /// The allow-list URL argument was empty or blank.
    #[error("allow list URL cannot be empty")]
    EmptyListUrl,

    /// The recomputed private key does not match the configured one.
    #[error(
        "private key mismatch (verified using username salt '{salt}'); \
         run this software as the OS user the credential was issued to"
    )]
    KeyMismatch { salt: String },

    /// The credential failed to decode or parse.
    #[error("malformed credential: {0}")]
    MalformedCredential(String),

    /// The credential embeds a salt for a different OS user.
    #[error("credential was issued to user '{issued}' but current user is '{current}'")]
    UserMismatch { issued: String, current: String },

    /// The allow list could not be fetched.
    #[error("failed to fetch allow list from {url}: {cause}")]
    FetchFailed { url: String, cause: String },

    /// The identifier is not present in the fetched allow list.
    #[error("'{identifier}' was not found in the allow list at {url}")]
    NotAuthorized { identifier: String, url: String },
}
