//! Common-password guard.

use crate::corpus::CommonPasswordSet;
use secrecy::{ExposeSecret, SecretString};

/// Returns `true` when the password is an exact member of the corpus.
pub fn common_password_guard(password: &SecretString, common: &CommonPasswordSet) -> bool {
    common.contains(password.expose_secret())
}
