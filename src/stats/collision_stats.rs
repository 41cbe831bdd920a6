use std::fmt::{self, Debug};

/// Statistics about the collisions a hashtable ran into while inserting.
///
/// The counters are updated only when the table was built with
/// [`HashtableBuilder::record_collisions`][record-collisions] enabled, according
/// to the following rules:
///
/// - Every call to `insert` increments `insert_count`, whether it added a new
///   key or overwrote an existing one.
/// - When the home slot of the inserted key holds a different key,
///   `colliding_insert_count` is incremented once, no matter how many further
///   collisions the probe sequence runs into.
/// - Every probe step taken beyond the home slot adds one to
///   `extra_probe_count`.
/// - Every resize increments `resize_count`. Moving existing entries into the
///   new slot array is not counted as inserts.
///
/// [record-collisions]: ../struct.HashtableBuilder.html#method.record_collisions
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CollisionStats {
    insert_count: u64,
    colliding_insert_count: u64,
    extra_probe_count: u64,
    resize_count: u64,
}

impl Debug for CollisionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollisionStats")
            .field("insert_count", &self.insert_count)
            .field("colliding_insert_count", &self.colliding_insert_count)
            .field("collision_rate", &self.collision_rate())
            .field("extra_probe_count", &self.extra_probe_count)
            .field(
                "average_extra_probes",
                &self.average_extra_probes(),
            )
            .field("resize_count", &self.resize_count)
            .finish()
    }
}

impl CollisionStats {
    pub fn insert_count(&self) -> u64 {
        self.insert_count
    }

    pub fn colliding_insert_count(&self) -> u64 {
        self.colliding_insert_count
    }

    /// Returns the ratio of inserts that collided to all inserts, or `0.0` when
    /// nothing has been inserted yet.
    pub fn collision_rate(&self) -> f64 {
        if self.insert_count == 0 {
            0.0
        } else {
            self.colliding_insert_count as f64 / self.insert_count as f64
        }
    }

    pub fn extra_probe_count(&self) -> u64 {
        self.extra_probe_count
    }

    pub fn average_extra_probes(&self) -> f64 {
        if self.insert_count == 0 {
            0.0
        } else {
            self.extra_probe_count as f64 / self.insert_count as f64
        }
    }

    pub fn resize_count(&self) -> u64 {
        self.resize_count
    }

    pub(crate) fn record_insert(&mut self, extra_probes: usize) {
        self.insert_count = self.insert_count.saturating_add(1);
        if extra_probes > 0 {
            self.colliding_insert_count = self.colliding_insert_count.saturating_add(1);
            self.extra_probe_count = self
                .extra_probe_count
                .saturating_add(extra_probes as u64);
        }
    }

    pub(crate) fn record_resize(&mut self) {
        self.resize_count = self.resize_count.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::CollisionStats;

    #[test]
    fn rates_of_empty_stats() {
        let stats = CollisionStats::default();
        assert_eq!(stats.collision_rate(), 0.0);
        assert_eq!(stats.average_extra_probes(), 0.0);
    }

    #[test]
    fn record_inserts() {
        let mut stats = CollisionStats::default();
        stats.record_insert(0);
        stats.record_insert(3);
        stats.record_insert(1);
        stats.record_insert(0);
        stats.record_resize();

        assert_eq!(stats.insert_count(), 4);
        assert_eq!(stats.colliding_insert_count(), 2);
        assert_eq!(stats.extra_probe_count(), 4);
        assert_eq!(stats.resize_count(), 1);
        assert_eq!(stats.collision_rate(), 0.5);
        assert_eq!(stats.average_extra_probes(), 1.0);
    }
}
