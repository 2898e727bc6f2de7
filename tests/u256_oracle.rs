use num_bigint::BigUint;
use num_traits::{One, Zero};
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use uint256::primitives::U256;

fn modulus() -> BigUint {
    BigUint::one() << 256u32
}

fn to_big(v: U256) -> BigUint {
    BigUint::from_bytes_le(&v.to_le_bytes())
}

fn from_big(v: &BigUint) -> U256 {
    let reduced = v % modulus();
    let mut bytes = [0u8; 32];
    let le = reduced.to_bytes_le();
    bytes[..le.len()].copy_from_slice(&le);

    U256::from_le_bytes(bytes)
}

/// Random value with a random number of significant words, so that short
/// operands and carries into the top word are both exercised.
fn random_u256(rng: &mut ChaCha20Rng) -> U256 {
    let mut words = [0u32; 8];
    let len = rng.gen_range(0..=8);

    for w in words.iter_mut().take(len) {
        *w = rng.r#gen();
    }

    U256::from_words(words)
}

fn any_u256() -> impl Strategy<Value = U256> {
    any::<[u32; 8]>().prop_map(U256::from_words)
}

#[test]
fn u256_arith_matches_bigint_oracle() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x5eed_0256);
    let m = modulus();

    for _ in 0..500 {
        let a = random_u256(&mut rng);
        let b = random_u256(&mut rng);
        let (ba, bb) = (to_big(a), to_big(b));

        assert_eq!(to_big(a + b), (&ba + &bb) % &m);
        assert_eq!(to_big(a - b), (&ba + &m - &bb) % &m);
        assert_eq!(to_big(a * b), (&ba * &bb) % &m);
        assert_eq!(to_big(-a), (&m - &ba) % &m);
    }
}

#[test]
fn u256_shift_matches_bigint_oracle() {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let m = modulus();

    for _ in 0..500 {
        let a = random_u256(&mut rng);
        let s: u32 = rng.gen_range(0..256);

        assert_eq!(to_big(a << s), (to_big(a) << s) % &m);
    }
}

#[test]
fn u256_hex_matches_bigint_oracle() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);

    for _ in 0..200 {
        let a = random_u256(&mut rng);
        let expected = to_big(a).to_str_radix(16);

        assert_eq!(a.to_hex(), expected);
        assert_eq!(U256::from_hex(&expected), a);
        assert_eq!(from_big(&to_big(a)), a);
    }
}

proptest! {
    #[test]
    fn negate_is_additive_inverse(a in any_u256()) {
        prop_assert!((a + a.wrapping_neg()).is_zero());
    }

    #[test]
    fn sub_undoes_add(a in any_u256(), b in any_u256()) {
        prop_assert_eq!((a + b) - b, a);
    }

    #[test]
    fn hex_roundtrip_is_stable(a in any_u256()) {
        let hex = a.to_hex();

        prop_assert_eq!(U256::from_hex(&hex).to_hex(), hex.clone());
        prop_assert_eq!(hex.parse::<U256>(), Ok(a));
    }

    #[test]
    fn overlong_hex_uses_trailing_64(prefix in "[0-9a-f]{6}", a in any_u256()) {
        let tail = format!("{a:064x}");
        let long = format!("{prefix}{tail}");

        prop_assert_eq!(U256::from_hex(&long), U256::from_hex(&tail));
        prop_assert_eq!(U256::from_hex(&long), a);
    }

    #[test]
    fn lshift_moves_every_bit(a in any_u256(), s in 0u32..256) {
        let shifted = a << s;

        for i in 0..256u32 {
            let expected = i >= s && a.is_bit_set(i - s);
            prop_assert_eq!(shifted.is_bit_set(i), expected);
        }
    }

    #[test]
    fn mul_identities(a in any_u256()) {
        prop_assert!((a * U256::from_u32(0)).is_zero());
        prop_assert_eq!(a * U256::from_u32(1), a);
    }

    #[test]
    fn mul_matches_bigint(a in any_u256(), b in any_u256()) {
        let expected = (to_big(a) * to_big(b)) % modulus();
        prop_assert_eq!(to_big(a * b), expected);
    }

    #[test]
    fn lenient_parse_never_panics(s in "\\PC{0,80}") {
        let _ = U256::from_hex(&s);
        let _ = U256::try_from_hex(&s);
    }
}

#[test]
fn u256_zero_oracle() {
    assert!(to_big(U256::ZERO).is_zero());
    assert_eq!(to_big(U256::MAX), modulus() - BigUint::one());
}
