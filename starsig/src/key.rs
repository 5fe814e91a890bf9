use curve25519_dalek::constants::RISTRETTO_BASEPOINT_POINT;
use curve25519_dalek::ristretto::{CompressedRistretto, RistrettoPoint};
use curve25519_dalek::scalar::Scalar;
use serde::{Deserialize, Serialize};

use super::errors::StarsigError;

/// A private key (aka "privkey") is a scalar in the Ristretto255 group.
pub type PrivateKey = Scalar;

/// Verification key (aka "pubkey") is a wrapper type around a Ristretto point
/// that lets the verifier check a signature. Construction always validates
/// the underlying compressed encoding, so a live `VerificationKey` is
/// guaranteed to decompress.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "CompressedRistretto", into = "CompressedRistretto")]
pub struct VerificationKey {
    point: RistrettoPoint,
    compressed: CompressedRistretto,
}

impl VerificationKey {
    /// Constructs a VerificationKey from a private key.
    pub fn from_secret(privkey: &PrivateKey) -> Self {
        Self::from(privkey * RISTRETTO_BASEPOINT_POINT)
    }

    /// Decodes a verification key from its compressed form, rejecting any
    /// encoding that does not decompress to a valid Ristretto point.
    pub fn from_compressed(p: CompressedRistretto) -> Result<Self, StarsigError> {
        let point = p.decompress().ok_or(StarsigError::InvalidPoint)?;
        Ok(VerificationKey {
            point,
            compressed: p,
        })
    }

    /// Returns the underlying group element.
    pub fn as_point(&self) -> &RistrettoPoint {
        &self.point
    }

    /// Returns the compressed encoding of this key.
    pub fn as_compressed(&self) -> &CompressedRistretto {
        &self.compressed
    }

    /// Returns the compressed encoding of this key.
    pub fn into_compressed(self) -> CompressedRistretto {
        self.compressed
    }

    /// Returns the 32-byte compressed encoding of this key.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.compressed.to_bytes()
    }
}

impl From<RistrettoPoint> for VerificationKey {
    fn from(point: RistrettoPoint) -> Self {
        VerificationKey {
            compressed: point.compress(),
            point,
        }
    }
}

impl core::convert::TryFrom<CompressedRistretto> for VerificationKey {
    type Error = StarsigError;
    fn try_from(p: CompressedRistretto) -> Result<Self, StarsigError> {
        Self::from_compressed(p)
    }
}

impl From<VerificationKey> for CompressedRistretto {
    fn from(key: VerificationKey) -> CompressedRistretto {
        key.compressed
    }
}
