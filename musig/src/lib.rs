#![deny(missing_docs)]
#![allow(non_snake_case)]
//! Interactive multi-party Schnorr signatures (MuSig) over Ristretto255.
//!
//! Builds on [`starsig`] for the Scalar/Point facade, the transcript
//! adapter, and single-signer Schnorr: this crate adds deterministic key
//! aggregation ([`Multikey`]) and the three-round precommit/commit/share
//! cosigning protocol ([`Party`] and [`Counterparty`]). Verification of
//! both single-signer and aggregated signatures is the same
//! `starsig::Signature::verify` call — an aggregated signature is
//! indistinguishable from a single-key one.

#[macro_use]
extern crate failure;

mod counterparty;
mod errors;
mod multikey;
mod party;


pub use self::counterparty::{
    Counterparty, CounterpartyCommitted, CounterpartyPrecommitted, NonceCommitment,
    NoncePrecommitment,
};
pub use self::errors::MusigError;
pub use self::multikey::Multikey;
pub use self::party::{AwaitingCommitments, AwaitingPrecommitments, AwaitingShares, Party};
