/// Current OS user resolution for the salt check
use std::env;

use crate::error::VerifyError;

/// Resolve the login name of the user running this process.
///
/// Reads `USER`, falling back to `USERNAME` on platforms that use it. The
/// value is only ever compared against the salt a credential was issued
/// with; it is not trusted for anything else.
///
/// # Returns
/// The login name, or [`VerifyError::Environment`] when neither variable
/// holds one - a credential salted with a garbage name must fail loudly
/// here rather than hash it.
pub fn current_username() -> Result<String, VerifyError> {
    pick_username(env::var("USER").ok(), env::var("USERNAME").ok())
        .ok_or_else(|| VerifyError::Environment("neither USER nor USERNAME is set".to_string()))
}

/// First non-empty candidate wins.
fn pick_username(primary: Option<String>, fallback: Option<String>) -> Option<String> {
    primary
        .filter(|name| !name.is_empty())
        .or_else(|| fallback.filter(|name| !name.is_empty()))
}
