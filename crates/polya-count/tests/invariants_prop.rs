use num_bigint::BigUint;
use polya_count::{partition_count, solution, FactorialTable, GcdTable, PartitionWeights};
use proptest::prelude::*;

proptest! {
    #[test]
    fn class_weights_total_n_factorial(n in 1usize..=12) {
        let factorials = FactorialTable::new(n).unwrap();
        let weights = PartitionWeights::enumerate(n, &factorials).unwrap();
        prop_assert_eq!(BigUint::from(weights.len()), partition_count(n));
        prop_assert_eq!(&weights.total_weight(), factorials.get(n).unwrap());
    }

    #[test]
    fn gcd_cells_divide_both_indices(max in 1usize..=24, i in 1usize..=24, j in 1usize..=24) {
        let table = GcdTable::new(max).unwrap();
        if i <= max && j <= max {
            let g = table.get(i, j).unwrap();
            prop_assert_eq!(i % g, 0);
            prop_assert_eq!(j % g, 0);
            prop_assert_eq!(g, table.get(j, i).unwrap());
        } else {
            prop_assert!(table.get(i, j).is_err());
        }
    }

    #[test]
    fn transposed_grid_has_same_count(width in 1i64..=7, height in 1i64..=7, size in 1i64..=12) {
        prop_assert_eq!(solution(width, height, size).unwrap(), solution(height, width, size).unwrap());
    }

    #[test]
    fn count_is_monotone_in_palette(width in 1i64..=6, height in 1i64..=6, size in 1i64..=19) {
        let smaller: BigUint = solution(width, height, size).unwrap().parse().unwrap();
        let larger: BigUint = solution(width, height, size + 1).unwrap().parse().unwrap();
        prop_assert!(smaller <= larger);
    }

    #[test]
    fn output_is_plain_decimal(width in 1i64..=8, height in 1i64..=8, size in 1i64..=20) {
        let value = solution(width, height, size).unwrap();
        prop_assert!(!value.is_empty());
        prop_assert!(value.bytes().all(|b| b.is_ascii_digit()));
        prop_assert!(!value.starts_with('0'));
    }
}
