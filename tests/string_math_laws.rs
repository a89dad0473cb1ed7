use std::cmp::Ordering;

use dnc_trace::string_math::{
    add_strings, checked_subtract_strings, compare_digit_strings, multiply_by_power_of_10,
    normalize_number_string, subtract_strings,
};
use num_bigint::BigUint;
use proptest::prelude::*;

fn big(s: &str) -> BigUint {
    s.parse::<BigUint>().expect("digit-string")
}

fn is_canonical(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) && (s == "0" || !s.starts_with('0'))
}

proptest! {
    #[test]
    fn normalize_is_idempotent(s in ".{0,40}") {
        let once = normalize_number_string(&s);
        prop_assert!(is_canonical(&once));
        prop_assert_eq!(normalize_number_string(&once), once);
    }

    #[test]
    fn add_matches_bignum(a in "[0-9]{1,50}", b in "[0-9]{1,50}") {
        let sum = add_strings(&a, &b);
        prop_assert!(is_canonical(&sum));
        prop_assert_eq!(big(&sum), big(&a) + big(&b));
    }

    #[test]
    fn subtract_undoes_add(a in "[0-9]{1,50}", b in "[0-9]{1,50}") {
        let (hi, lo) = if compare_digit_strings(&a, &b) == Ordering::Less { (b, a) } else { (a, b) };
        prop_assert_eq!(subtract_strings(&add_strings(&hi, &lo), &lo), normalize_number_string(&hi));
        let diff = subtract_strings(&hi, &lo);
        prop_assert!(is_canonical(&diff));
        prop_assert_eq!(big(&diff), big(&hi) - big(&lo));
    }

    #[test]
    fn checked_subtract_detects_negatives(a in "[0-9]{1,30}", b in "[0-9]{1,30}") {
        let expected = big(&a).cmp(&big(&b));
        prop_assert_eq!(compare_digit_strings(&a, &b), expected);
        prop_assert_eq!(checked_subtract_strings(&a, &b).is_some(), expected != Ordering::Less);
    }

    #[test]
    fn shift_matches_bignum(a in "[1-9][0-9]{0,20}", power in 0usize..30) {
        let shifted = multiply_by_power_of_10(&a, power);
        prop_assert_eq!(big(&shifted), big(&a) * BigUint::from(10u32).pow(power as u32));
    }
}

#[test]
fn zero_shift_stays_zero() {
    assert_eq!(multiply_by_power_of_10("0", 12), "0");
}
