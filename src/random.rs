//! Random identifier generation

use rand::Rng;
use rand::distributions::Alphanumeric;

/// A random string of exactly `n` alphanumeric characters.
///
/// Drawn from the thread-local generator; suitable for identifiers and
/// nonces, not for secrets.
pub fn random(n: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(n)
        .map(char::from)
        .collect()
}
