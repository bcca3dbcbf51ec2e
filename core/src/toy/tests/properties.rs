use std::num::NonZeroU64;

use proptest::prelude::*;

use crate::toy::{SumVerdict, ToyCiphertext, ToyPlaintext, ToySecret, check_sum, verify_sum};

proptest! {
    #[test]
    fn roundtrip_below_key(key in 1i64..1_000_000, p in 0i64..1_000_000, f in 1u64..=10) {
        let p: i64 = p % key;
        let sk: ToySecret = ToySecret::new(key).unwrap();
        let pt: ToyPlaintext = ToyPlaintext::new(p).unwrap();
        let ct: ToyCiphertext = ToyCiphertext::encrypt_with_blinding(&pt, &sk, NonZeroU64::new(f).unwrap());
        prop_assert_eq!(ct.value() % key as u128, p as u128);
        prop_assert_eq!(ct.decrypt(&sk), pt);
    }

    #[test]
    fn sum_is_exact_iff_no_overflow(
        key in 1i64..100_000,
        a in 0i64..100_000,
        b in 0i64..100_000,
        fa in 1u64..=10,
        fb in 1u64..=10,
    ) {
        let (a, b): (i64, i64) = (a % key, b % key);
        let sk: ToySecret = ToySecret::new(key).unwrap();
        let pa: ToyPlaintext = ToyPlaintext::new(a).unwrap();
        let pb: ToyPlaintext = ToyPlaintext::new(b).unwrap();
        let ct_a: ToyCiphertext = ToyCiphertext::encrypt_with_blinding(&pa, &sk, NonZeroU64::new(fa).unwrap());
        let ct_b: ToyCiphertext = ToyCiphertext::encrypt_with_blinding(&pb, &sk, NonZeroU64::new(fb).unwrap());
        let ct_sum: ToyCiphertext = ct_a.homomorphic_add(&ct_b).unwrap();

        let check = check_sum(&pa, &pb, &sk, &ct_sum);
        prop_assert_eq!(check.overflow_detected, a + b >= key);
        prop_assert_eq!(verify_sum(&pa, &pb, &sk, &ct_sum), a + b < key);
        prop_assert_ne!(check.verdict(), SumVerdict::Mismatch);
        prop_assert_eq!(check.correct, !check.overflow_detected);
    }

    #[test]
    fn addition_commutes_and_associates(x in any::<u64>(), y in any::<u64>(), z in any::<u64>()) {
        let (a, b, c) = (
            ToyCiphertext { value: x as u128 },
            ToyCiphertext { value: y as u128 },
            ToyCiphertext { value: z as u128 },
        );
        prop_assert_eq!(a.homomorphic_add(&b), b.homomorphic_add(&a));
        let left: ToyCiphertext = a.homomorphic_add(&b).unwrap().homomorphic_add(&c).unwrap();
        let right: ToyCiphertext = a.homomorphic_add(&b.homomorphic_add(&c).unwrap()).unwrap();
        prop_assert_eq!(left, right);
        prop_assert_eq!(ToyCiphertext::try_sum(&[a, b, c]).unwrap(), left);
    }
}
