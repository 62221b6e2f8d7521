//! PKCE (RFC 7636) helpers for the browser login.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

/// Verifier length; RFC 7636 allows 43 to 128 characters.
pub const CODE_VERIFIER_LEN: usize = 128;

/// `code_challenge_method` sent with the challenge.
pub const CHALLENGE_METHOD: &str = "S256";

/// A fresh verifier with the challenge derived from it.
///
/// The challenge goes into the authorization URL, the verifier stays local
/// until the code is exchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PkcePair {
    pub verifier: String,
    pub challenge: String,
}

impl PkcePair {
    pub fn generate() -> Self {
        let verifier = generate_code_verifier();
        let challenge = generate_code_challenge(&verifier);
        PkcePair {
            verifier,
            challenge,
        }
    }
}

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CODE_VERIFIER_LEN)
        .map(char::from)
        .collect()
}

/// Base64url (unpadded) SHA-256 of `verifier`.
pub fn generate_code_challenge(verifier: &str) -> String {
    URL_SAFE_NO_PAD.encode(Sha256::digest(verifier.as_bytes()))
}
