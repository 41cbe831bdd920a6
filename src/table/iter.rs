use std::{iter::FusedIterator, slice};

/// An iterator over the entries of a [`Hashtable`][hashtable-struct], in slot
/// order.
///
/// [hashtable-struct]: ./struct.Hashtable.html
pub struct Iter<'i, K, V> {
    slots: slice::Iter<'i, Option<(K, V)>>,
    remaining: usize,
}

impl<'i, K, V> Iter<'i, K, V> {
    pub(crate) fn new(slots: slice::Iter<'i, Option<(K, V)>>, remaining: usize) -> Self {
        Self { slots, remaining }
    }
}

impl<'i, K, V> Iterator for Iter<'i, K, V> {
    type Item = (&'i K, &'i V);

    fn next(&mut self) -> Option<Self::Item> {
        let (k, v) = self.slots.by_ref().flatten().next()?;
        self.remaining -= 1;
        Some((k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'i, K, V> ExactSizeIterator for Iter<'i, K, V> {}

impl<'i, K, V> FusedIterator for Iter<'i, K, V> {}
