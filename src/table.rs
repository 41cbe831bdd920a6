//! An open-addressing hash table that is _not_ thread-safe.

mod builder;
mod hashtable;
mod iter;
mod probe;

pub use builder::HashtableBuilder;
pub use hashtable::Hashtable;
pub use iter::Iter;
