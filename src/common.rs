pub(crate) mod error;
pub(crate) mod key_digest;
pub(crate) mod prime;

/// The default maximum load factor. A table grows before an insertion of a new
/// key would take its load factor above this value.
pub(crate) const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.6;

/// The upper bound of the step size produced by the secondary hash.
pub(crate) const DOUBLE_HASH_MAX_STRIDE: i64 = 8;

/// How many times an insertion may force the table to grow after its probe
/// sequence failed to reach a free slot.
pub(crate) const MAX_GROWTH_ATTEMPTS: usize = 8;
