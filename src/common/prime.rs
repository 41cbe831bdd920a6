//! Prime sizing for slot arrays.
//!
//! A prime capacity keeps the double hashing stride (at most eight) coprime to
//! the table length, so its probe sequence visits every slot.

/// Returns `true` if `n` is prime.
///
/// Zero, one and two are all treated as prime. A table asked for one slot is
/// therefore created with exactly one slot.
pub(crate) fn is_prime(n: usize) -> bool {
    if n <= 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut i = 3;
    // `i <= n / i` is `i * i <= n` without the overflow.
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Returns the smallest prime number that is greater than or equal to `n`.
pub(crate) fn next_prime(n: usize) -> usize {
    let mut candidate = n;
    while !is_prime(candidate) {
        candidate += 1;
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::{is_prime, next_prime};

    #[test]
    fn small_numbers() {
        let primes = (0..30).filter(|n| is_prime(*n)).collect::<Vec<_>>();
        assert_eq!(primes, [0, 1, 2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn squares_of_primes_are_not_prime() {
        for p in [3usize, 5, 7, 11, 101, 65_521] {
            assert!(is_prime(p));
            assert!(!is_prime(p * p), "{} squared", p);
        }
    }

    #[test]
    fn next_prime_rounds_up() {
        assert_eq!(next_prime(9), 11);
        assert_eq!(next_prime(10), 11);
        assert_eq!(next_prime(11), 11);
        assert_eq!(next_prime(13), 13);
        assert_eq!(next_prime(20), 23);
        assert_eq!(next_prime(46), 47);
        assert_eq!(next_prime(1000), 1009);
    }

    #[test]
    fn doubling_sequence() {
        // The capacities a table created with 20 slots goes through as it grows.
        let mut capacity = next_prime(20);
        let mut seen = vec![capacity];
        for _ in 0..4 {
            capacity = next_prime(capacity * 2);
            seen.push(capacity);
        }
        assert_eq!(seen, [23, 47, 97, 197, 397]);
    }

    #[test]
    fn large_prime() {
        // 2^31 - 1
        assert!(is_prime(2_147_483_647));
        assert!(!is_prime(2_147_483_649));
    }
}

// Verify that no overflow or panic occurs on the inputs a table can produce.
#[cfg(kani)]
mod kani {
    use super::{is_prime, next_prime};

    #[kani::proof]
    #[kani::unwind(40)]
    fn verify_is_prime() {
        let n: usize = kani::any();
        kani::assume(n < 1024);
        let _ = is_prime(n);
    }

    #[kani::proof]
    #[kani::unwind(40)]
    fn verify_next_prime() {
        let n: usize = kani::any();
        kani::assume(n < 256);
        let p = next_prime(n);
        assert!(p >= n);
        assert!(is_prime(p));
    }
}
