use crate::domain::model::NumberList;

/// Sum of all numbers, accumulated left to right. Widened to `i128`, so any
/// list of `i64` values sums without overflow.
pub fn sum(numbers: &NumberList) -> i128 {
    numbers
        .as_slice()
        .iter()
        .fold(0i128, |acc, &n| acc + i128::from(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_empty_is_zero() {
        assert_eq!(sum(&NumberList::default()), 0);
    }

    #[test]
    fn test_sum_values() {
        assert_eq!(sum(&NumberList::from(vec![10, 20, 30])), 60);
        assert_eq!(sum(&NumberList::from(vec![-5, 5, 7])), 7);
    }

    #[test]
    fn test_sum_is_permutation_invariant() {
        let base = vec![3, -14, 15, 92, -65, 35, 0, 8];
        let expected = sum(&NumberList::from(base.clone()));

        let mut reversed = base.clone();
        reversed.reverse();
        assert_eq!(sum(&NumberList::from(reversed)), expected);

        for shift in 1..base.len() {
            let mut rotated = base.clone();
            rotated.rotate_left(shift);
            assert_eq!(sum(&NumberList::from(rotated)), expected);
        }

        let mut sorted = base;
        sorted.sort_unstable();
        assert_eq!(sum(&NumberList::from(sorted)), expected);
    }

    #[test]
    fn test_sum_does_not_overflow() {
        let list = NumberList::from(vec![i64::MAX, i64::MAX, i64::MIN]);
        assert_eq!(sum(&list), i128::from(i64::MAX) - 1);
    }
}
