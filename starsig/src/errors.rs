/// Represents an error in single-signer signing or verification.
#[derive(Fail, Clone, Debug, Eq, PartialEq)]
pub enum StarsigError {
    /// A compressed Ristretto point failed to decompress to a valid group element.
    #[fail(display = "Point decoding failed.")]
    InvalidPoint,

    /// A scalar encoding was not the canonical little-endian representative mod |G|.
    #[fail(display = "Scalar decoding failed.")]
    InvalidScalar,

    /// The Schnorr verification equation `s*G == R + c*X` did not hold.
    #[fail(display = "Signature verification failed.")]
    BadSignature,
}
