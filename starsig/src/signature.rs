use curve25519_dalek::constants::RISTRETTO_BASEPOINT_POINT;
use curve25519_dalek::ristretto::CompressedRistretto;
use curve25519_dalek::scalar::Scalar;
use merlin::Transcript;
use subtle::ConstantTimeEq;

use super::errors::StarsigError;
use super::key::{PrivateKey, VerificationKey};
use super::secret::Secret;
use super::transcript::{build_rng, TranscriptProtocol};

/// A Schnorr signature over Ristretto255.
///
/// The same type and the same [`Signature::verify`] routine serve both the
/// single-signer case and the MuSig-aggregated case: an aggregated signature
/// is verified by passing the `Multikey`'s aggregated key as `pubkey`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// Aggregated nonce commitment `R = sum(R_i)` (or just `r*G` for a single signer).
    pub R: CompressedRistretto,
    /// Aggregated response `s = sum(s_i)` (or just `r + c*x` for a single signer).
    pub s: Scalar,
}

/// Signs `transcript` with a single private key, bypassing the multi-party
/// state machine entirely. The caller must have already absorbed the message
/// into `transcript` before calling this.
pub fn sign_single(transcript: &mut Transcript, privkey: PrivateKey) -> Signature {
    let privkey = Secret::new(privkey);
    let X = VerificationKey::from_secret(privkey.as_scalar());

    let mut rng = build_rng(transcript, b"x", privkey.as_scalar());
    // Ephemeral nonce keypair (r, R): r is random, R = r*G.
    let r = Secret::new(Scalar::random(&mut rng));
    let R = (RISTRETTO_BASEPOINT_POINT * r.as_scalar()).compress();

    transcript.starsig_domain_sep();
    transcript.append_point(b"X", X.as_compressed());
    transcript.append_point(b"R", &R);
    let c = transcript.challenge_scalar(b"c");

    let s = r.as_scalar() + c * privkey.as_scalar();

    Signature { R, s }
}

impl Signature {
    /// Verifies the signature over `transcript` against `pubkey`.
    ///
    /// `transcript` must be in the same state it was in when the signature
    /// (or, for an aggregated signature, the protocol session) began: the
    /// message has already been absorbed, but `X` and `R` have not.
    pub fn verify(
        &self,
        transcript: &mut Transcript,
        pubkey: VerificationKey,
    ) -> Result<(), StarsigError> {
        transcript.starsig_domain_sep();
        transcript.append_point(b"X", pubkey.as_compressed());
        transcript.append_point(b"R", &self.R);
        let c = transcript.challenge_scalar(b"c");

        let R = self.R.decompress().ok_or(StarsigError::InvalidPoint)?;

        // s*G == R + c*X, checked via a constant-time compressed-point
        // comparison so no branch depends on secret-derived data.
        let lhs = (RISTRETTO_BASEPOINT_POINT * self.s).compress();
        let rhs = (R + c * pubkey.as_point()).compress();
        if lhs.as_bytes().ct_eq(rhs.as_bytes()).unwrap_u8() == 1 {
            Ok(())
        } else {
            Err(StarsigError::BadSignature)
        }
    }
}
