use curve25519_dalek::constants::RISTRETTO_BASEPOINT_POINT;
use curve25519_dalek::ristretto::{CompressedRistretto, RistrettoPoint};
use curve25519_dalek::scalar::Scalar;
use merlin::Transcript;
use starsig::{TranscriptProtocol, VerificationKey};
use subtle::ConstantTimeEq;

use super::MusigError;

/// A binding, hiding commitment to a counterparty's nonce commitment `R_i`,
/// broadcast in round 1 before `R_i` itself is revealed in round 2.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct NoncePrecommitment([u8; 32]);

/// A counterparty's revealed nonce commitment `R_i = r_i * G`.
#[derive(Copy, Clone, Debug)]
pub struct NonceCommitment(RistrettoPoint);

impl NonceCommitment {
    pub(crate) fn new(commitment: RistrettoPoint) -> Self {
        NonceCommitment(commitment)
    }

    pub(crate) fn compress(&self) -> CompressedRistretto {
        self.0.compress()
    }

    /// Computes the precommitment this nonce commitment would produce:
    /// `H(R_i)` via a freshly labeled transcript. Both the committer and the
    /// verifier of a precommitment call this same function, so the scheme is
    /// binding and hiding as long as the transcript's challenge output is.
    pub(crate) fn precommit(&self) -> NoncePrecommitment {
        let mut h = Transcript::new(b"Musig.nonce-precommitment");
        h.append_point(b"R", &self.compress());
        let mut precommitment = [0u8; 32];
        h.challenge_bytes(b"precommitment", &mut precommitment);
        NoncePrecommitment(precommitment)
    }

    pub(crate) fn sum(commitments: &[Self]) -> RistrettoPoint {
        commitments.iter().map(|R_i| R_i.0).sum()
    }
}

/// A peer about which nothing has been received yet this session.
pub struct Counterparty {
    position: usize,
    pubkey: VerificationKey,
}

/// A peer whose nonce precommitment has been recorded.
pub struct CounterpartyPrecommitted {
    precommitment: NoncePrecommitment,
    position: usize,
    pubkey: VerificationKey,
}

/// A peer whose nonce commitment has been recorded and checked against its
/// earlier precommitment.
pub struct CounterpartyCommitted {
    commitment: NonceCommitment,
    position: usize,
    pubkey: VerificationKey,
}

impl Counterparty {
    pub(crate) fn new(position: usize, pubkey: VerificationKey) -> Self {
        Counterparty { position, pubkey }
    }

    /// Records this peer's nonce precommitment.
    pub fn precommit_nonce(self, precommitment: NoncePrecommitment) -> CounterpartyPrecommitted {
        CounterpartyPrecommitted {
            precommitment,
            position: self.position,
            pubkey: self.pubkey,
        }
    }
}

impl CounterpartyPrecommitted {
    /// Checks `H(commitment) == precommitment` and, if it matches, records
    /// the revealed nonce commitment. A mismatch is equivocation: this peer
    /// broadcast a different `R_i` than the one it precommitted to in
    /// round 1.
    pub fn verify_nonce(
        self,
        commitment: NonceCommitment,
    ) -> Result<CounterpartyCommitted, MusigError> {
        let received = commitment.precommit();
        let equal = self.precommitment.0.ct_eq(&received.0);
        if equal.unwrap_u8() == 0 {
            return Err(MusigError::ShareError {
                index: self.position,
            });
        }

        Ok(CounterpartyCommitted {
            commitment,
            position: self.position,
            pubkey: self.pubkey,
        })
    }
}

impl CounterpartyCommitted {
    /// Checks this peer's signature share against the partial Schnorr
    /// equation `s_i*G == R_i + c_i*X_i`, where `c_i = c * a_i` has already
    /// been computed by the caller for this peer's position.
    pub fn verify_share(self, share: Scalar, c_i: Scalar) -> Result<Scalar, MusigError> {
        let S_i = share * RISTRETTO_BASEPOINT_POINT;
        if S_i != self.commitment.0 + c_i * self.pubkey.as_point() {
            return Err(MusigError::ShareError {
                index: self.position,
            });
        }
        Ok(share)
    }
}
