/// The license verification procedure
use crate::config::Config;
use crate::error::VerifyError;

use super::allowlist::{AllowListSource, HttpAllowListSource, parse_entries};
use super::digest::keys_match;

/// Details of a successful verification.
#[derive(Debug)]
struct Verified {
    identifier: String,
    user: String,
}

impl Verified {
    fn message(&self) -> String {
        format!(
            "verification successful (user '{}', project '{}')",
            self.user, self.identifier
        )
    }
}

/// Final outcome of one verification run.
#[derive(Debug)]
pub struct Verdict {
    /// Whether the license is valid for this user and credential pair.
    pub valid: bool,
    /// Human-readable outcome, one distinct message per failure kind.
    pub message: String,
    /// Structured failure for programmatic branching; `None` when valid.
    pub error: Option<VerifyError>,
}

/// Runs the license check: key comparison, token decode, allow-list lookup.
///
/// Everything the check depends on is injected up front - the configuration
/// value object, the current username, and the allow-list source - so a run
/// is fully deterministic for fixed inputs and list contents.
pub struct Verifier<S = HttpAllowListSource> {
    config: Config,
    username_salt: String,
    source: S,
}

impl Verifier<HttpAllowListSource> {
    /// Build a verifier that fetches the allow list over HTTP.
    pub fn new(config: Config, username_salt: &str) -> Self {
        let source = HttpAllowListSource::new(config.fetch_timeout());
        Self::with_source(config, username_salt, source)
    }
}

impl<S: AllowListSource> Verifier<S> {
    /// Build a verifier with a custom allow-list source.
    pub fn with_source(config: Config, username_salt: &str, source: S) -> Self {
        Self {
            config,
            username_salt: username_salt.to_string(),
            source,
        }
    }

    /// Verify the credential against the allow list at `list_url`.
    ///
    /// Steps run in a fixed order and short-circuit with their own error
    /// kind: configured secrets present, URL non-empty, private key matches
    /// the recomputed one, token decodes, list fetches, identifier listed.
    /// One outbound read at most; nothing is retried or cached.
    pub fn verify(&self, list_url: &str) -> Verdict {
        match self.run(list_url) {
            Ok(verified) => Verdict {
                valid: true,
                message: verified.message(),
                error: None,
            },
            Err(e) => Verdict {
                valid: false,
                message: e.to_string(),
                error: Some(e),
            },
        }
    }

    fn run(&self, list_url: &str) -> Result<Verified, VerifyError> {
        self.config.validate()?;

        if list_url.trim().is_empty() {
            return Err(VerifyError::EmptyListUrl);
        }

        let scheme = self.config.scheme;
        let expected = scheme.expected_key(&self.config.pow, &self.username_salt);
        if !keys_match(&expected, &self.config.private_key) {
            return Err(VerifyError::KeyMismatch {
                salt: self.username_salt.clone(),
            });
        }

        let identifier = scheme.decode_identifier(&self.config.pow, &self.username_salt)?;

        let body = self.source.fetch(list_url)?;
        let entries = parse_entries(&body);
        if !entries.iter().any(|entry| entry == &identifier) {
            return Err(VerifyError::NotAuthorized {
                identifier,
                url: list_url.to_string(),
            });
        }

        Ok(Verified {
            identifier,
            user: self.username_salt.clone(),
        })
    }
}
