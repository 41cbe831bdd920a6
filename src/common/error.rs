use crate::ProbeStrategy;

/// The error type for constructing and inserting into a
/// [`Hashtable`][hashtable-struct].
///
/// [hashtable-struct]: ./struct.Hashtable.html
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// The requested initial capacity was zero.
    ///
    /// A table needs at least one slot. The capacity is rounded up to the next
    /// prime number, so any capacity of one or more is accepted.
    #[error("The initial capacity must be at least 1, but got {0}")]
    InvalidCapacity(usize),

    /// The configured maximum load factor is not within the open range
    /// `(0.0, 1.0)`.
    ///
    /// An open-addressing table must always keep at least one empty slot,
    /// otherwise lookups of missing keys could not terminate.
    #[error("The max load factor must be greater than 0.0 and less than 1.0, but got {0}")]
    InvalidLoadFactor(f64),

    /// An insertion could not reach a free slot through its probe sequence, even
    /// after the table grew several times.
    ///
    /// This can only happen with [`ProbeStrategy::Quadratic`][quadratic], whose
    /// probe sequence does not visit every slot, or with
    /// [`ProbeStrategy::DoubleHash`][double-hash] on a table with fewer than
    /// eight slots.
    ///
    /// [quadratic]: ./enum.ProbeStrategy.html#variant.Quadratic
    /// [double-hash]: ./enum.ProbeStrategy.html#variant.DoubleHash
    #[error(
        "No free slot was reachable by the {strategy:?} probe sequence \
    in a table with capacity {capacity}"
    )]
    ProbeSequenceExhausted {
        strategy: ProbeStrategy,
        capacity: usize,
    },
}
