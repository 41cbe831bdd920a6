use super::Hashtable;
use crate::{common, ProbeStrategy, TableError};

use std::{fmt::Display, marker::PhantomData};

/// Builds a [`Hashtable`][hashtable-struct] with various configuration knobs.
///
/// [hashtable-struct]: ./struct.Hashtable.html
///
/// # Examples
///
/// ```rust
/// use htable::{HashtableBuilder, ProbeStrategy};
///
/// let mut table = HashtableBuilder::new(100) // At least 100 slots (101)
///     // Resolve collisions with a second hash of the key.
///     .probe_strategy(ProbeStrategy::DoubleHash)
///     // Grow before the table gets more than half full.
///     .max_load_factor(0.5)
///     // Count colliding insertions.
///     .record_collisions(true)
///     // Create the table.
///     .build()?;
///
/// table.insert("pyjamas", 99)?;
/// assert_eq!(table.get(&"pyjamas"), Some(&99));
/// assert_eq!(table.capacity(), 101);
/// assert_eq!(table.collision_stats().map(|s| s.insert_count()), Some(1));
/// # Ok::<(), htable::TableError>(())
/// ```
///
#[must_use]
pub struct HashtableBuilder<T> {
    initial_capacity: usize,
    probe_strategy: ProbeStrategy,
    max_load_factor: f64,
    record_collisions: bool,
    table_type: PhantomData<T>,
}

impl<K, V> HashtableBuilder<Hashtable<K, V>>
where
    K: PartialEq + Display,
{
    /// Construct a new `HashtableBuilder` that will be used to build a
    /// `Hashtable` with at least `initial_capacity` slots. The capacity is rounded
    /// up to the next prime number.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            probe_strategy: ProbeStrategy::default(),
            max_load_factor: common::DEFAULT_MAX_LOAD_FACTOR,
            record_collisions: false,
            table_type: PhantomData,
        }
    }

    /// Builds a `Hashtable<K, V>`.
    ///
    /// # Errors
    ///
    /// - `TableError::InvalidCapacity` if the initial capacity is zero.
    /// - `TableError::InvalidLoadFactor` if the max load factor is not greater
    ///   than `0.0` and less than `1.0`.
    pub fn build(self) -> Result<Hashtable<K, V>, TableError> {
        if self.initial_capacity == 0 {
            return Err(TableError::InvalidCapacity(self.initial_capacity));
        }
        // Also rejects NaN.
        if !(self.max_load_factor > 0.0 && self.max_load_factor < 1.0) {
            return Err(TableError::InvalidLoadFactor(self.max_load_factor));
        }
        Ok(Hashtable::with_everything(
            self.initial_capacity,
            self.probe_strategy,
            self.max_load_factor,
            self.record_collisions,
        ))
    }
}

impl<T> HashtableBuilder<T> {
    /// Sets the probe strategy used to resolve collisions. The default is
    /// [`ProbeStrategy::Linear`][linear].
    ///
    /// [linear]: ./enum.ProbeStrategy.html#variant.Linear
    pub fn probe_strategy(self, probe_strategy: ProbeStrategy) -> Self {
        Self {
            probe_strategy,
            ..self
        }
    }

    /// Sets the max load factor of the table. The default is `0.6`.
    ///
    /// The table grows before an insertion of a new key would take its load
    /// factor above this value.
    pub fn max_load_factor(self, max_load_factor: f64) -> Self {
        Self {
            max_load_factor,
            ..self
        }
    }

    /// Enables or disables the collision statistics. Disabled by default.
    ///
    /// When enabled, the table counts its insertions, collisions, probe steps
    /// and resizes. Read them with
    /// [`Hashtable::collision_stats`][collision-stats].
    ///
    /// [collision-stats]: ./struct.Hashtable.html#method.collision_stats
    pub fn record_collisions(self, enabled: bool) -> Self {
        Self {
            record_collisions: enabled,
            ..self
        }
    }
}
