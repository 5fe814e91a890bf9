use curve25519_dalek::ristretto::CompressedRistretto;
use curve25519_dalek::scalar::Scalar;
use merlin::Transcript;
use merlin::TranscriptRng;

/// Extension trait to the Merlin transcript API that fixes this protocol's
/// domain separation and adds typed scalar/point commit and challenge
/// operations on top of Merlin's raw byte-oriented API.
pub trait TranscriptProtocol {
    /// Commit a domain separator for the single-signer Schnorr protocol.
    fn starsig_domain_sep(&mut self);
    /// Commit a `scalar` with the given `label`.
    fn append_scalar(&mut self, label: &'static [u8], scalar: &Scalar);
    /// Commit a `point` with the given `label`.
    fn append_point(&mut self, label: &'static [u8], point: &CompressedRistretto);
    /// Compute a `label`ed challenge variable.
    fn challenge_scalar(&mut self, label: &'static [u8]) -> Scalar;
}

impl TranscriptProtocol for Transcript {
    fn starsig_domain_sep(&mut self) {
        self.append_message(b"dom-sep", b"starsig v1");
    }

    fn append_scalar(&mut self, label: &'static [u8], scalar: &Scalar) {
        self.append_message(label, scalar.as_bytes());
    }

    fn append_point(&mut self, label: &'static [u8], point: &CompressedRistretto) {
        self.append_message(label, point.as_bytes());
    }

    fn challenge_scalar(&mut self, label: &'static [u8]) -> Scalar {
        let mut buf = [0u8; 64];
        self.challenge_bytes(label, &mut buf);
        Scalar::from_bytes_mod_order_wide(&buf)
    }
}

/// Forks `transcript` into a per-call RNG by rekeying it with the `witness`
/// scalar under `label` and mixing in OS entropy, so that a fault-injection
/// attacker who can force the transcript's state can't also force the
/// generated nonce: the RNG remains uniform as long as either the transcript
/// state, the witness, or the OS entropy is unpredictable.
pub fn build_rng(transcript: &Transcript, label: &'static [u8], witness: &Scalar) -> TranscriptRng {
    transcript
        .build_rng()
        .rekey_with_witness_bytes(label, witness.as_bytes())
        .finalize(&mut rand::thread_rng())
}
