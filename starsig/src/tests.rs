use super::{sign_single, Signature, StarsigError, VerificationKey};
use curve25519_dalek::ristretto::CompressedRistretto;
use curve25519_dalek::scalar::Scalar;
use merlin::Transcript;

fn transcript_with_message(message: &'static [u8]) -> Transcript {
    let mut t = Transcript::new(b"example transcript");
    t.append_message(b"msg", message);
    t
}

// Scenario S1: privkey = scalar(1), message = "hello".
#[test]
fn sign_and_verify_single() {
    let privkey = Scalar::from(1u64);
    let sig = sign_single(&mut transcript_with_message(b"hello"), privkey);

    let X = VerificationKey::from_secret(&privkey);
    assert!(sig.verify(&mut transcript_with_message(b"hello"), X).is_ok());
}

#[test]
fn flipped_s_bit_rejected() {
    let privkey = Scalar::from(1u64);
    let mut sig = sign_single(&mut transcript_with_message(b"hello"), privkey);
    let mut s_bytes = sig.s.to_bytes();
    s_bytes[0] ^= 1;
    sig.s = Scalar::from_bits(s_bytes);

    let X = VerificationKey::from_secret(&privkey);
    assert_eq!(
        sig.verify(&mut transcript_with_message(b"hello"), X),
        Err(StarsigError::BadSignature)
    );
}

#[test]
fn wrong_key_rejected() {
    let privkey = Scalar::from(1u64);
    let sig = sign_single(&mut transcript_with_message(b"hello"), privkey);

    let wrong_key = VerificationKey::from_secret(&Scalar::from(2u64));
    assert!(sig
        .verify(&mut transcript_with_message(b"hello"), wrong_key)
        .is_err());
}

#[test]
fn wrong_transcript_rejected() {
    let privkey = Scalar::from(1u64);
    let sig = sign_single(&mut transcript_with_message(b"hello"), privkey);

    let X = VerificationKey::from_secret(&privkey);
    assert!(sig
        .verify(&mut transcript_with_message(b"goodbye"), X)
        .is_err());
}

// Property 5: two signings of the same message with the same key produce
// different nonces (and therefore different R) with overwhelming probability.
#[test]
fn nonces_are_not_deterministic() {
    let privkey = Scalar::from(7u64);
    let sig1 = sign_single(&mut transcript_with_message(b"hello"), privkey);
    let sig2 = sign_single(&mut transcript_with_message(b"hello"), privkey);
    assert_ne!(sig1.R, sig2.R);
}

#[test]
fn signature_bytes_round_trip() {
    let privkey = Scalar::from(42u64);
    let sig = sign_single(&mut transcript_with_message(b"hello"), privkey);
    let decoded = Signature::from_bytes(sig.to_bytes()).unwrap();
    assert_eq!(sig, decoded);
}

// Scenario S6: a scalar equal to |G| is not a canonical encoding.
#[test]
fn non_canonical_scalar_rejected() {
    // |G| = 2^252 + 27742317777372353535851937790883648493, encoded little-endian.
    let l: [u8; 32] = [
        0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde,
        0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x10,
    ];
    let mut bytes = [0u8; 64];
    bytes[32..].copy_from_slice(&l);
    assert_eq!(
        Signature::from_bytes(&bytes[..]),
        Err(StarsigError::InvalidScalar)
    );
}

#[test]
fn non_canonical_point_rejected() {
    // All-one bytes is not a valid compressed Ristretto point.
    let mut bytes = [0xffu8; 64];
    bytes[32..].copy_from_slice(Scalar::one().as_bytes());
    assert_eq!(
        Signature::from_bytes(&bytes[..]),
        Err(StarsigError::InvalidPoint)
    );
}

#[test]
fn verification_key_rejects_bad_point() {
    let bad = CompressedRistretto([0xffu8; 32]);
    assert!(VerificationKey::from_compressed(bad).is_err());
}
