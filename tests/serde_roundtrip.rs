//! Exercises the optional `serde` feature: keys and ciphertexts are plain
//! data, so callers can pick any wire format. `bincode` stands in for
//! "some format" here.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rlwe_scheme::Scheme;

#[test]
fn public_key_round_trips_through_bincode() {
    let scheme = Scheme::new(64, 12289, 2.0).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let (pk, _) = scheme.keygen(&mut rng).unwrap();

    let encoded = bincode::serialize(&pk).unwrap();
    let decoded: rlwe_scheme::PublicKey = bincode::deserialize(&encoded).unwrap();
    assert_eq!(pk, decoded);
}

#[test]
fn private_key_and_ciphertext_round_trip_through_bincode() {
    let scheme = Scheme::new(64, 12289, 2.0).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(11);
    let (pk, sk) = scheme.keygen(&mut rng).unwrap();

    let message = scheme.encode_message("round trip me");
    let ciphertext = scheme.encrypt(&mut rng, &pk, &message).unwrap();

    let sk_bytes = bincode::serialize(&sk).unwrap();
    let sk_back: rlwe_scheme::PrivateKey = bincode::deserialize(&sk_bytes).unwrap();
    assert_eq!(sk, sk_back);

    let ct_bytes = bincode::serialize(&ciphertext).unwrap();
    let ct_back: rlwe_scheme::Ciphertext = bincode::deserialize(&ct_bytes).unwrap();
    assert_eq!(ciphertext, ct_back);

    let recovered = scheme.decrypt(&sk_back, &ct_back).unwrap();
    assert_eq!(scheme.decode_message(&recovered), "round trip me");
}
