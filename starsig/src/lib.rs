#![deny(missing_docs)]
#![allow(non_snake_case)]
//! Single-signer Schnorr signatures over Ristretto255.
//!
//! This crate is the facade layer that the `musig` crate builds on: canonical
//! scalar/point types, a Merlin transcript adapter with this protocol's
//! domain separation, and the textbook single-key Schnorr sign/verify pair.
//! The aggregated multi-party protocol lives in the `musig` crate, which
//! reuses [`TranscriptProtocol`], [`VerificationKey`] and [`Signature`] from
//! here rather than redefining them.

#[macro_use]
extern crate failure;

mod errors;
mod key;
mod secret;
mod serialization;
mod signature;
mod transcript;

#[cfg(test)]
mod tests;

pub use self::errors::StarsigError;
pub use self::key::{PrivateKey, VerificationKey};
pub use self::secret::Secret;
pub use self::signature::{sign_single, Signature};
pub use self::transcript::{build_rng, TranscriptProtocol};

/// The Ristretto group scalar type.
pub type Scalar = curve25519_dalek::scalar::Scalar;
/// The Ristretto group element type.
pub type Point = curve25519_dalek::ristretto::RistrettoPoint;
/// The compressed (32-byte) encoding of a [`Point`].
pub type CompressedPoint = curve25519_dalek::ristretto::CompressedRistretto;
