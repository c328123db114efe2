/*
[INPUT]:  Request payload fragment and merchant password
[OUTPUT]: Hex signature for the <merchant><signature> element
[POS]:    HTTP layer - request signing for every merchant endpoint
[UPDATE]: When changing signing algorithm or digest encoding
*/

use md5::{Digest, Md5};
use sha1::Sha1;

/// Signs request payloads with the merchant password
///
/// The bank verifies `sha1(hex(md5(payload ++ password)))`, both digests
/// lowercase hex. This is not HMAC.
#[derive(Clone)]
pub struct RequestSigner {
    password: String,
}

impl RequestSigner {
    /// Create a new request signer for the given merchant password
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }

    /// Sign a payload fragment exactly as it will appear inside `<data>`
    pub fn sign(&self, payload: &str) -> String {
        let mut md5 = Md5::new();
        md5.update(payload.as_bytes());
        md5.update(self.password.as_bytes());
        let inner = hex::encode(md5.finalize());

        hex::encode(Sha1::digest(inner.as_bytes()))
    }
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("abc", "secret", "e0a3a69f3bc309d3626d9a3849ddc758677d98a1")]
    #[case("", "secret", "f2ba704225c5c7ee676f3201ea256bf5779e6877")]
    #[case("<oper>cmt</oper>", "P1", "9e3d782b9609651c58511b18ad92ba97b0d6bcf1")]
    fn test_known_vectors(#[case] payload: &str, #[case] password: &str, #[case] expected: &str) {
        assert_eq!(RequestSigner::new(password).sign(payload), expected);
    }

    #[test]
    fn test_signature_shape_and_determinism() {
        let signer = RequestSigner::new("secret");
        let first = signer.sign("<oper>cmt</oper>");
        assert_eq!(first, signer.sign("<oper>cmt</oper>"));
        assert_eq!(first.len(), 40);
        assert!(first.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[rstest]
    #[case("abc", "secret", "abd", "secret")]
    #[case("abc", "secret", "abc", "secreT")]
    #[case("abc", "secret", "abc ", "secret")]
    fn test_signature_changes_with_inputs(
        #[case] payload_a: &str,
        #[case] password_a: &str,
        #[case] payload_b: &str,
        #[case] password_b: &str,
    ) {
        assert_ne!(
            RequestSigner::new(password_a).sign(payload_a),
            RequestSigner::new(password_b).sign(payload_b)
        );
    }

    #[test]
    fn test_debug_hides_password() {
        let rendered = format!("{:?}", RequestSigner::new("hunter2"));
        assert!(!rendered.contains("hunter2"));
    }
}
