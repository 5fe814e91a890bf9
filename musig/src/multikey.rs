use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::scalar::Scalar;
use curve25519_dalek::traits::Identity;
use merlin::Transcript;
use starsig::{TranscriptProtocol, VerificationKey};

use super::MusigError;

/// An aggregated verification key together with the `<L>`-bound transcript
/// used to derive each component key's linear-combination factor.
///
/// Binding every factor to the whole ordered key list, rather than to the
/// key in isolation, is what makes aggregation resistant to rogue-key
/// attacks: an attacker who picks its own key last can't force the
/// combination to cancel the honest keys out, because its own factor
/// already depends on everyone else's key.
#[derive(Clone)]
pub struct Multikey {
    transcript: Transcript,
    aggregated_key: VerificationKey,
    public_keys: Vec<VerificationKey>,
}

// `Transcript` (merlin) implements neither `Debug` nor `PartialEq`, so these
// are written by hand rather than derived; they compare/print the same
// fields a derive would reach if it could reach `transcript`, since that
// field is wholly determined by `public_keys`.
impl std::fmt::Debug for Multikey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Multikey")
            .field("aggregated_key", &self.aggregated_key)
            .field("public_keys", &self.public_keys)
            .finish()
    }
}

impl PartialEq for Multikey {
    fn eq(&self, other: &Self) -> bool {
        self.aggregated_key == other.aggregated_key && self.public_keys == other.public_keys
    }
}

impl Multikey {
    /// Aggregates `pubkeys`, in the given order, into a single verification
    /// key. The order is significant: aggregating the same keys in a
    /// different order produces a different `<L>` and therefore a different
    /// aggregated key.
    pub fn aggregate(pubkeys: Vec<VerificationKey>) -> Result<Self, MusigError> {
        if pubkeys.is_empty() {
            return Err(MusigError::BadArguments);
        }

        // <L> = H(X_1 || X_2 || ... || X_n)
        let mut transcript = Transcript::new(b"MuSig.aggregated-key");
        for X in &pubkeys {
            transcript.append_point(b"X", X.as_compressed());
        }

        // aggregated_key = sum_i ( a_i * X_i )
        let mut aggregated_key = RistrettoPoint::identity();
        for X in &pubkeys {
            let a = Self::compute_factor(&transcript, X);
            aggregated_key += a * X.as_point();
        }

        Ok(Multikey {
            transcript,
            aggregated_key: VerificationKey::from(aggregated_key),
            public_keys: pubkeys,
        })
    }

    /// a_i = H(<L>, X_i). `<L>` is the transcript state from the aggregation
    /// step above, captured before any `a_i` is derived from it.
    fn compute_factor(transcript: &Transcript, key: &VerificationKey) -> Scalar {
        let mut t = transcript.clone();
        t.append_point(b"X", key.as_compressed());
        t.challenge_scalar(b"a_i")
    }

    /// Returns the per-key aggregation factor `a_i` for `key`. Pure: does
    /// not mutate the stored `<L>`-bound transcript, so it can be called any
    /// number of times and always returns the same scalar for the same key.
    pub fn factor_for_key(&self, key: &VerificationKey) -> Scalar {
        Self::compute_factor(&self.transcript, key)
    }

    /// Returns the aggregated verification key `A = sum(a_i * X_i)`.
    pub fn aggregated_key(&self) -> VerificationKey {
        self.aggregated_key
    }

    /// Number of component keys.
    pub fn len(&self) -> usize {
        self.public_keys.len()
    }

    /// Returns the component key at `index`, in aggregation order.
    pub fn key(&self, index: usize) -> VerificationKey {
        self.public_keys[index]
    }
}
