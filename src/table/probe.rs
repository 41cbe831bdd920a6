use crate::{common::key_digest::KeyDigest, ProbeStrategy};

/// The probe sequence of a key: the slot indexes an operation inspects, starting
/// from the home slot of the key.
///
/// The sequence yields at most `capacity` indexes. A lookup or insertion that
/// has not finished by then gives up instead of walking the table forever.
pub(crate) struct Probe {
    strategy: ProbeStrategy,
    capacity: usize,
    stride: usize,
    pos: usize,
    // The number of indexes yielded so far. When computing the next index this
    // is also the number of collisions seen.
    step: usize,
}

impl Probe {
    pub(crate) fn new(strategy: ProbeStrategy, digest: &KeyDigest, capacity: usize) -> Self {
        Self {
            strategy,
            capacity,
            stride: digest.stride(),
            pos: digest.index(capacity),
            step: 0,
        }
    }
}

impl Iterator for Probe {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.step >= self.capacity {
            return None;
        }
        if self.step > 0 {
            self.pos = next_location(
                self.strategy,
                self.pos,
                self.step,
                self.stride,
                self.capacity,
            );
        }
        self.step += 1;
        Some(self.pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.capacity - self.step;
        (remaining, Some(remaining))
    }
}

/// Returns the slot to inspect after a collision at `current`. `step` is the
/// 1-based number of collisions so far.
#[inline]
pub(crate) fn next_location(
    strategy: ProbeStrategy,
    current: usize,
    step: usize,
    stride: usize,
    capacity: usize,
) -> usize {
    let capacity = capacity as u128;
    let offset = match strategy {
        ProbeStrategy::Linear => 1,
        ProbeStrategy::DoubleHash => stride as u128,
        ProbeStrategy::Quadratic => {
            let step = step as u128 % capacity;
            step * step
        }
    };
    ((current as u128 + offset % capacity) % capacity) as usize
}
