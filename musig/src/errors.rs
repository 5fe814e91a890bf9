use starsig::StarsigError;

/// Represents an error in key aggregation, cosigning, or verification.
#[derive(Fail, Clone, Debug, Eq, PartialEq)]
pub enum MusigError {
    /// A compressed Ristretto point failed to decompress to a valid group element.
    #[fail(display = "Point decoding failed.")]
    InvalidPoint,

    /// A scalar encoding was not the canonical little-endian representative mod |G|.
    #[fail(display = "Scalar decoding failed.")]
    InvalidScalar,

    /// The Schnorr verification equation failed for the aggregated signature.
    #[fail(display = "Signature verification failed.")]
    BadSignature,

    /// The party at `index` (in the agreed `pubkeys` order) sent a nonce
    /// commitment that doesn't match its earlier precommitment, or a
    /// signature share that doesn't satisfy `s_i*G == R_i + c*a_i*X_i`.
    #[fail(display = "Party {} sent an invalid share or nonce commitment.", index)]
    ShareError {
        /// Position of the offending party in the agreed `pubkeys` order.
        index: usize,
    },

    /// A received message vector's length didn't match the party count.
    #[fail(
        display = "Expected {} messages for this session, got {}.",
        expected, got
    )]
    Arity {
        /// Number of parties in the session.
        expected: usize,
        /// Number of messages actually received.
        got: usize,
    },

    /// A function was called with bad arguments (e.g. an empty key list).
    #[fail(display = "Bad arguments.")]
    BadArguments,
}

impl From<StarsigError> for MusigError {
    fn from(e: StarsigError) -> Self {
        match e {
            StarsigError::InvalidPoint => MusigError::InvalidPoint,
            StarsigError::InvalidScalar => MusigError::InvalidScalar,
            StarsigError::BadSignature => MusigError::BadSignature,
        }
    }
}
