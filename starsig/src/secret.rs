use curve25519_dalek::scalar::Scalar;
use zeroize::Zeroize;

/// A scalar that wipes its memory when dropped.
///
/// Party state in `musig` (and the ephemeral nonce in [`crate::sign_single`])
/// holds the private key and the per-session nonce in this wrapper so that
/// consuming or cancelling a session leaves no copy of the secret behind.
pub struct Secret(Scalar);

impl Secret {
    /// Wraps a scalar as a secret.
    pub fn new(scalar: Scalar) -> Self {
        Secret(scalar)
    }

    /// Returns the wrapped scalar.
    pub fn as_scalar(&self) -> &Scalar {
        &self.0
    }
}

impl Clone for Secret {
    fn clone(&self) -> Self {
        Secret(self.0)
    }
}

impl Drop for Secret {
    fn drop(&mut self) {
        let mut bytes = self.0.to_bytes();
        bytes.zeroize();
        self.0 = Scalar::zero();
    }
}
