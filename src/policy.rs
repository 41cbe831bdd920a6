use std::fmt;

#[derive(Clone, Debug)]
/// The policy of a hashtable.
pub struct Policy {
    probe_strategy: ProbeStrategy,
    max_load_factor: f64,
}

impl Policy {
    pub(crate) fn new(probe_strategy: ProbeStrategy, max_load_factor: f64) -> Self {
        Self {
            probe_strategy,
            max_load_factor,
        }
    }

    /// Returns the probe strategy used to resolve collisions.
    pub fn probe_strategy(&self) -> ProbeStrategy {
        self.probe_strategy
    }

    /// Returns the maximum load factor. The table grows before inserting a new
    /// key would take its load factor above this value.
    pub fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }
}

/// The collision resolution strategy of a hashtable.
///
/// When the home slot of a key is occupied by a different key, the table walks a
/// probe sequence until it finds the key or an empty slot. Each step moves from
/// the current slot `i` to:
///
/// - **Linear** (default): `i + 1`.
/// - **Quadratic**: `i + n²`, where `n` is the number of collisions so far.
/// - **DoubleHash**: `i + s`, where `s` is a second hash of the key within
///   `1..=8`.
///
/// All positions wrap around the capacity of the table. The strategy is fixed
/// when the table is built.
///
/// Note that the quadratic sequence does not visit every slot of a prime-sized
/// table. The table grows when an insertion cannot reach an empty slot, so this
/// only costs memory, but keep the max load factor at or below the default when
/// using it.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ProbeStrategy {
    #[default]
    Linear,
    Quadratic,
    DoubleHash,
}

impl ProbeStrategy {
    /// All strategies, in declaration order.
    pub const ALL: [ProbeStrategy; 3] = [Self::Linear, Self::Quadratic, Self::DoubleHash];
}

impl fmt::Debug for ProbeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeStrategy::Linear => write!(f, "ProbeStrategy::Linear"),
            ProbeStrategy::Quadratic => write!(f, "ProbeStrategy::Quadratic"),
            ProbeStrategy::DoubleHash => write!(f, "ProbeStrategy::DoubleHash"),
        }
    }
}
