use super::DOUBLE_HASH_MAX_STRIDE;

use std::fmt::{self, Write};

// Subtracting 33 brings '!', the first printable non-space ASCII character,
// down to zero.
const CHAR_OFFSET: i32 = 33;

/// The two hashes of a key, computed in a single pass over the key's canonical
/// string form (its `Display` output).
///
/// The string is read as UTF-16 code units. Both hashes are seeded with the
/// first unit and then roll over every unit, including the first one again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct KeyDigest {
    primary: i32,
    secondary: i64,
}

impl KeyDigest {
    pub(crate) fn of<Q>(key: &Q) -> Self
    where
        Q: fmt::Display + ?Sized,
    {
        let mut state = DigestState::default();
        // DigestState never returns an error. A `Display` impl that reports one
        // anyway leaves the digest of what it wrote so far, which is still
        // deterministic.
        let _ = write!(state, "{key}");
        state.finish()
    }

    /// Returns the home slot of the key in a table with the given capacity.
    #[inline]
    pub(crate) fn index(&self, capacity: usize) -> usize {
        debug_assert!(capacity > 0);
        // Truncating remainder then absolute value, so negative hashes map to
        // the same slot as their magnitude.
        (self.primary as i64 % capacity as i64).unsigned_abs() as usize
    }

    /// Returns the double hashing step size, which is within `1..=8`.
    #[inline]
    pub(crate) fn stride(&self) -> usize {
        (DOUBLE_HASH_MAX_STRIDE - self.secondary.rem_euclid(DOUBLE_HASH_MAX_STRIDE)) as usize
    }
}

#[derive(Default)]
struct DigestState {
    started: bool,
    char_sum: i32,
    primary: i32,
    // Only `secondary mod 8` is ever used. 8 divides 2^64, so the wrapping
    // arithmetic below gives the same residue as an unbounded integer would.
    secondary: i64,
}

impl DigestState {
    fn update(&mut self, unit: u16) {
        let c = unit as i32 - CHAR_OFFSET;
        if !self.started {
            self.primary = c;
            self.secondary = c as i64;
            self.started = true;
        }

        self.char_sum = self.char_sum.wrapping_add(c);
        self.primary = self.primary.wrapping_add(c).wrapping_mul(31);
        self.primary = self.primary.wrapping_add(self.char_sum);

        self.secondary = self.secondary.wrapping_mul(31).wrapping_add(c as i64);
    }

    fn finish(self) -> KeyDigest {
        KeyDigest {
            primary: self.primary,
            secondary: self.secondary,
        }
    }
}

impl Write for DigestState {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for unit in s.encode_utf16() {
            self.update(unit);
        }
        Ok(())
    }
}
