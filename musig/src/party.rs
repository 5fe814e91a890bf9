use curve25519_dalek::constants::RISTRETTO_BASEPOINT_POINT;
use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::scalar::Scalar;
use merlin::Transcript;
use starsig::{build_rng, Secret, Signature, TranscriptProtocol};

use super::counterparty::*;
use super::multikey::Multikey;
use super::MusigError;

/// Entry point to the multi-party signing protocol: a single signer's local
/// session state, freshly created and not yet bound to any party count.
pub struct Party {}

/// State of the party while awaiting nonce precommitments from the other
/// parties (round 1 of 3).
pub struct AwaitingPrecommitments<'t> {
    transcript: &'t mut Transcript,
    multikey: Multikey,
    position: usize,
    x_i: Secret,
    r_i: Secret,
    R_i: NonceCommitment,
    own_precommitment: NoncePrecommitment,
    counterparties: Vec<Counterparty>,
}

/// State of the party while awaiting nonce commitments from the other
/// parties (round 2 of 3).
pub struct AwaitingCommitments<'t> {
    transcript: &'t mut Transcript,
    multikey: Multikey,
    position: usize,
    x_i: Secret,
    r_i: Secret,
    counterparties: Vec<CounterpartyPrecommitted>,
}

/// State of the party while awaiting signature shares from the other parties
/// (round 3 of 3).
pub struct AwaitingShares {
    R: RistrettoPoint,
    counterparties: Vec<(CounterpartyCommitted, Scalar)>,
}

fn check_arity<T>(expected: usize, received: &[T]) -> Result<(), MusigError> {
    if received.len() != expected {
        return Err(MusigError::Arity {
            expected,
            got: received.len(),
        });
    }
    Ok(())
}

impl Party {
    /// Starts a new signing session for the key at `position` in
    /// `multikey`'s ordered key list. The message has already been absorbed
    /// into `transcript` by the caller; this call appends nothing to it yet,
    /// only forks an RNG from its current state to generate the local nonce.
    pub fn new<'t>(
        transcript: &'t mut Transcript,
        x_i: Scalar,
        multikey: Multikey,
        position: usize,
    ) -> Result<(AwaitingPrecommitments<'t>, NoncePrecommitment), MusigError> {
        if multikey.key(position) != starsig::VerificationKey::from_secret(&x_i) {
            return Err(MusigError::BadArguments);
        }

        let x_i = Secret::new(x_i);
        let mut rng = build_rng(transcript, b"x_i", x_i.as_scalar());

        // Ephemeral nonce keypair (r_i, R_i): r_i is random, R_i = r_i*G.
        let r_i = Secret::new(Scalar::random(&mut rng));
        let R_i = NonceCommitment::new(RISTRETTO_BASEPOINT_POINT * r_i.as_scalar());
        let precommitment = R_i.precommit();

        let counterparties = (0..multikey.len())
            .map(|i| Counterparty::new(i, multikey.key(i)))
            .collect();

        Ok((
            AwaitingPrecommitments {
                transcript,
                multikey,
                position,
                x_i,
                r_i,
                R_i,
                own_precommitment: precommitment,
                counterparties,
            },
            precommitment,
        ))
    }
}

impl<'t> AwaitingPrecommitments<'t> {
    /// Records every other party's nonce precommitment and reveals this
    /// party's own nonce commitment for round 2.
    ///
    /// Also checks that the broadcast batch's entry for this party's own
    /// position matches the precommitment this party generated in
    /// [`Party::new`] — redundant with the eventual per-peer check in
    /// [`AwaitingCommitments::receive_commitments`], but it catches a bad
    /// broadcast channel or caller bug a round earlier.
    pub fn receive_precommitments(
        self,
        nonce_precommitments: Vec<NoncePrecommitment>,
    ) -> Result<(AwaitingCommitments<'t>, NonceCommitment), MusigError> {
        check_arity(self.counterparties.len(), &nonce_precommitments)?;

        if nonce_precommitments[self.position] != self.own_precommitment {
            return Err(MusigError::BadArguments);
        }

        let counterparties = self
            .counterparties
            .into_iter()
            .zip(nonce_precommitments)
            .map(|(counterparty, precommitment)| counterparty.precommit_nonce(precommitment))
            .collect();

        Ok((
            AwaitingCommitments {
                transcript: self.transcript,
                multikey: self.multikey,
                position: self.position,
                x_i: self.x_i,
                r_i: self.r_i,
                counterparties,
            },
            self.R_i,
        ))
    }
}

impl<'t> AwaitingCommitments<'t> {
    /// Checks every other party's nonce commitment against its earlier
    /// precommitment, derives the aggregated nonce `R` and this party's
    /// per-party challenge `c_i = c * a_i`, and produces this party's
    /// signature share `s_i = r_i + c_i*x_i`.
    pub fn receive_commitments(
        mut self,
        nonce_commitments: Vec<NonceCommitment>,
    ) -> Result<(AwaitingShares, Scalar), MusigError> {
        check_arity(self.counterparties.len(), &nonce_commitments)?;

        // R = sum_i(R_i)
        let R = NonceCommitment::sum(&nonce_commitments);

        let counterparties = self
            .counterparties
            .into_iter()
            .zip(nonce_commitments)
            .map(|(counterparty, commitment)| counterparty.verify_nonce(commitment))
            .collect::<Result<Vec<_>, _>>()?;

        self.transcript.starsig_domain_sep();
        self.transcript
            .append_point(b"X", self.multikey.aggregated_key().as_compressed());
        self.transcript.append_point(b"R", &R.compress());
        let c = self.transcript.challenge_scalar(b"c");

        // c_i = c * a_i for every party, including this one, keyed by
        // position in the agreed key order.
        let challenges: Vec<Scalar> = (0..self.multikey.len())
            .map(|i| {
                let key = self.multikey.key(i);
                c * self.multikey.factor_for_key(&key)
            })
            .collect();

        // s_i = r_i + c_i*x_i
        let s_i = self.r_i.as_scalar() + challenges[self.position] * self.x_i.as_scalar();

        let counterparties = counterparties
            .into_iter()
            .zip(challenges)
            .collect();

        Ok((AwaitingShares { R, counterparties }, s_i))
    }
}

impl AwaitingShares {
    /// Assembles signature shares that are already known to be valid,
    /// skipping the per-share verification in [`Self::receive_shares`]. Only
    /// appropriate when every key is controlled by the caller, e.g. when one
    /// signer locally plays every party's role in a test or in a wallet that
    /// manages every cosigning key itself.
    pub fn receive_trusted_shares(self, shares: Vec<Scalar>) -> Signature {
        let s: Scalar = shares.into_iter().sum();
        Signature {
            s,
            R: self.R.compress(),
        }
    }

    /// Verifies every other party's signature share against its nonce
    /// commitment and aggregation factor, then sums all shares (including
    /// this party's own) into the final aggregated signature.
    pub fn receive_shares(self, shares: Vec<Scalar>) -> Result<Signature, MusigError> {
        check_arity(self.counterparties.len(), &shares)?;

        let s = self
            .counterparties
            .into_iter()
            .zip(shares)
            .map(|((counterparty, c_i), share)| counterparty.verify_share(share, c_i))
            .sum::<Result<_, _>>()?;

        Ok(Signature {
            s,
            R: self.R.compress(),
        })
    }
}
