//! Collision statistics of a hashtable.

mod collision_stats;

pub use collision_stats::CollisionStats;
