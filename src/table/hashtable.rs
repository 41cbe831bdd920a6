use super::{iter::Iter, probe::Probe, HashtableBuilder};
use crate::{
    common::{
        self,
        key_digest::KeyDigest,
        prime::next_prime,
    },
    CollisionStats, Policy, ProbeStrategy, TableError,
};

use std::{
    borrow::Borrow,
    fmt::{self, Debug, Display},
};

type Slot<K, V> = Option<(K, V)>;

/// An open-addressing hash table that is _not_ thread-safe.
///
/// `Hashtable` keeps its entries in a single slot array whose length (the
/// capacity) is always a prime number. Collisions are resolved by probing other
/// slots of the same array, using the [`ProbeStrategy`][probe-strategy] chosen
/// when the table was created. There is no deletion: once a key is inserted it
/// stays, and inserting it again overwrites its value.
///
/// [probe-strategy]: ./enum.ProbeStrategy.html
///
/// # Keys
///
/// A key can be of any type that implements `PartialEq` and `Display`. Both hash
/// functions of the table read the key's `Display` output, so keys that are
/// equal must also display the same. Lookups accept any borrowed form of the
/// key, such as `&str` for `String` keys, as long as it displays and compares
/// the same way as the owned key.
///
/// # Examples
///
/// ```rust
/// use htable::{Hashtable, ProbeStrategy};
///
/// // Create a table with at least 10 slots. 10 is rounded up to 11, the next
/// // prime number.
/// let mut table = Hashtable::with_probe_strategy(10, ProbeStrategy::DoubleHash)?;
/// assert_eq!(table.capacity(), 11);
///
/// table.insert("bananas".to_string(), 1)?;
/// table.insert("pyjamas".to_string(), 99)?;
/// // Inserting an existing key overwrites its value.
/// table.insert("bananas".to_string(), 2)?;
///
/// assert_eq!(table.get("bananas"), Some(&2));
/// assert_eq!(table.get("kedgeree"), None);
/// assert!(table.contains_key("pyjamas"));
/// assert_eq!(table.len(), 2);
/// # Ok::<(), htable::TableError>(())
/// ```
///
/// # Growth
///
/// Before an insertion of a new key would take the load factor (entries divided
/// by capacity) above the max load factor (0.6 by default), the table grows to
/// the smallest prime at least twice its current capacity and moves every entry
/// into the new slot array.
///
/// ```rust
/// use htable::Hashtable;
///
/// let mut table = Hashtable::new(20)?;
/// assert_eq!(table.capacity(), 23);
///
/// for i in 0..20 {
///     table.insert(i, i * 10)?;
/// }
/// assert_eq!(table.capacity(), 47);
/// assert!(table.load_factor() <= 0.6);
/// # Ok::<(), htable::TableError>(())
/// ```
pub struct Hashtable<K, V> {
    slots: Box<[Slot<K, V>]>,
    entry_count: usize,
    policy: Policy,
    collision_stats: Option<CollisionStats>,
}

// Where the probe sequence of a key stopped: at an empty slot, or at the slot
// already holding the key.
#[derive(Clone, Copy)]
struct SlotPosition {
    index: usize,
    extra_probes: usize,
}

impl<K, V> Hashtable<K, V>
where
    K: PartialEq + Display,
{
    /// Constructs a new `Hashtable<K, V>` with at least `capacity` slots, using
    /// linear probing.
    ///
    /// The capacity is rounded up to the next prime number. Returns
    /// `TableError::InvalidCapacity` if `capacity` is zero.
    ///
    /// To adjust other configuration knobs such as the max load factor, use the
    /// [`HashtableBuilder`][builder-struct].
    ///
    /// [builder-struct]: ./struct.HashtableBuilder.html
    pub fn new(capacity: usize) -> Result<Self, TableError> {
        Self::builder(capacity).build()
    }

    /// Constructs a new `Hashtable<K, V>` with at least `capacity` slots, using
    /// the given probe strategy.
    pub fn with_probe_strategy(
        capacity: usize,
        probe_strategy: ProbeStrategy,
    ) -> Result<Self, TableError> {
        Self::builder(capacity).probe_strategy(probe_strategy).build()
    }

    /// Returns a [`HashtableBuilder`][builder-struct], which can build a
    /// `Hashtable` with various configuration knobs.
    ///
    /// [builder-struct]: ./struct.HashtableBuilder.html
    pub fn builder(capacity: usize) -> HashtableBuilder<Hashtable<K, V>> {
        HashtableBuilder::new(capacity)
    }

    pub(crate) fn with_everything(
        capacity: usize,
        probe_strategy: ProbeStrategy,
        max_load_factor: f64,
        record_collisions: bool,
    ) -> Self {
        Self {
            slots: empty_slots(next_prime(capacity)),
            entry_count: 0,
            policy: Policy::new(probe_strategy, max_load_factor),
            collision_stats: record_collisions.then(CollisionStats::default),
        }
    }
}

//
// public
//
impl<K, V> Hashtable<K, V>
where
    K: PartialEq + Display,
{
    /// Returns a reference to the value corresponding to the key, or `None` if
    /// the key is not in the table.
    ///
    /// The key may be any borrowed form of the table's key type, but `Display` and
    /// `PartialEq` on the borrowed form _must_ match those for the key type.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: PartialEq + Display + ?Sized,
    {
        let digest = KeyDigest::of(key);
        let pos = self.find_slot(&digest, key)?;
        self.slots[pos.index].as_ref().map(|(_, v)| v)
    }

    /// Returns `true` if the table contains a value for the key.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: PartialEq + Display + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Inserts a key-value pair into the table.
    ///
    /// If the table has this key present, the value is overwritten in place.
    /// Otherwise the table may grow first to stay within its max load factor.
    ///
    /// # Errors
    ///
    /// Returns `TableError::ProbeSequenceExhausted` if the probe sequence of the
    /// key could not reach an empty slot even after the table grew several
    /// times. This cannot happen with linear probing.
    pub fn insert(&mut self, key: K, value: V) -> Result<(), TableError> {
        let digest = KeyDigest::of(&key);
        let mut growth_attempts = 0;

        loop {
            match self.find_slot(&digest, &key) {
                Some(pos) if self.slots[pos.index].is_some() => {
                    self.slots[pos.index] = Some((key, value));
                    self.record_insert(pos);
                    return Ok(());
                }
                Some(pos) if !self.exceeds_max_load(self.entry_count + 1) => {
                    self.slots[pos.index] = Some((key, value));
                    self.entry_count += 1;
                    self.record_insert(pos);
                    return Ok(());
                }
                Some(_) => self.resize()?,
                None => {
                    if growth_attempts >= common::MAX_GROWTH_ATTEMPTS {
                        return Err(self.exhausted_error());
                    }
                    growth_attempts += 1;
                    #[cfg(feature = "logging")]
                    log::warn!(
                        "No empty slot was reachable by the {:?} probe sequence at capacity {}. \
                        Growing the table",
                        self.policy.probe_strategy(),
                        self.capacity()
                    );
                    self.resize()?;
                }
            }
        }
    }

    /// Returns the string forms of all keys in the table.
    ///
    /// The order of the keys is unspecified.
    pub fn keys(&self) -> Vec<String> {
        self.slots
            .iter()
            .rev()
            .filter_map(|slot| slot.as_ref().map(|(k, _)| k.to_string()))
            .collect()
    }

    /// Creates an iterator visiting all key-value pairs in slot order. The
    /// iterator element type is `(&K, &V)`.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.slots.iter(), self.entry_count)
    }

    /// Returns the number of entries in the table.
    pub fn len(&self) -> usize {
        self.entry_count
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entry_count == 0
    }

    /// Returns the ratio of the number of entries to the capacity.
    pub fn load_factor(&self) -> f64 {
        self.entry_count as f64 / self.capacity() as f64
    }

    /// Returns the current number of slots. It changes when the table grows.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns a read-only table policy.
    pub fn policy(&self) -> Policy {
        self.policy.clone()
    }

    /// Returns a snapshot of the collision statistics, or `None` if the table
    /// was not built with
    /// [`HashtableBuilder::record_collisions`][record-collisions] enabled.
    ///
    /// [record-collisions]: ./struct.HashtableBuilder.html#method.record_collisions
    pub fn collision_stats(&self) -> Option<CollisionStats> {
        self.collision_stats.clone()
    }
}

//
// private
//
impl<K, V> Hashtable<K, V>
where
    K: PartialEq + Display,
{
    /// Walks the probe sequence of the key and returns the first slot that is
    /// either empty or holds the key. Returns `None` when the sequence ends
    /// without reaching such a slot.
    fn find_slot<Q>(&self, digest: &KeyDigest, key: &Q) -> Option<SlotPosition>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let probe = Probe::new(self.policy.probe_strategy(), digest, self.capacity());
        for (extra_probes, index) in probe.enumerate() {
            match &self.slots[index] {
                Some((k, _)) if k.borrow() != key => continue,
                _ => return Some(SlotPosition { index, extra_probes }),
            }
        }
        None
    }

    #[inline]
    fn exceeds_max_load(&self, entry_count: usize) -> bool {
        entry_count as f64 / self.capacity() as f64 > self.policy.max_load_factor()
    }

    /// Moves every entry into a new slot array whose capacity is the smallest
    /// prime at least twice the current one. If some entry cannot be placed, the
    /// next larger capacity is tried. Entries are placed in their old slot order.
    fn resize(&mut self) -> Result<(), TableError> {
        let old_capacity = self.capacity();
        let mut capacity = old_capacity;

        for _ in 0..common::MAX_GROWTH_ATTEMPTS {
            capacity = next_prime(capacity.saturating_mul(2));
            let Some(layout) = self.plan_layout(capacity) else {
                continue;
            };

            let mut old_slots = std::mem::replace(&mut self.slots, empty_slots(capacity));
            for (new_index, old_index) in layout.into_iter().enumerate() {
                if let Some(old_index) = old_index {
                    self.slots[new_index] = old_slots[old_index].take();
                }
            }

            if let Some(stats) = self.collision_stats.as_mut() {
                stats.record_resize();
            }

            #[cfg(feature = "logging")]
            log::debug!(
                "Resized the table from {} to {} slots ({} entries)",
                old_capacity,
                capacity,
                self.entry_count
            );

            return Ok(());
        }

        Err(TableError::ProbeSequenceExhausted {
            strategy: self.policy.probe_strategy(),
            capacity: old_capacity,
        })
    }

    /// Computes where each entry would land in a slot array of the given
    /// capacity, without moving anything. Each element of the returned vector is
    /// the old slot index of the entry placed there.
    fn plan_layout(&self, capacity: usize) -> Option<Vec<Option<usize>>> {
        let strategy = self.policy.probe_strategy();
        let mut layout = vec![None; capacity];

        for (old_index, slot) in self.slots.iter().enumerate() {
            if let Some((key, _)) = slot {
                // Keys are distinct, so the first empty slot is the target.
                let digest = KeyDigest::of(key);
                let target = Probe::new(strategy, &digest, capacity).find(|i| layout[*i].is_none())?;
                layout[target] = Some(old_index);
            }
        }

        Some(layout)
    }

    fn record_insert(&mut self, pos: SlotPosition) {
        if let Some(stats) = self.collision_stats.as_mut() {
            stats.record_insert(pos.extra_probes);
        }
    }

    fn exhausted_error(&self) -> TableError {
        TableError::ProbeSequenceExhausted {
            strategy: self.policy.probe_strategy(),
            capacity: self.capacity(),
        }
    }
}

impl<K, V> Debug for Hashtable<K, V>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.slots.iter().filter_map(|slot| slot.as_ref());
        f.debug_map()
            .entries(entries.map(|(k, v)| (k, v)))
            .finish()
    }
}

fn empty_slots<K, V>(capacity: usize) -> Box<[Slot<K, V>]> {
    (0..capacity).map(|_| None).collect()
}
