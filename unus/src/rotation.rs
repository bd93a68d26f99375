use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn step(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    pub fn flip(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Whose turn it is, which way play moves, and how many upcoming turns each
/// seat has to sit out.
///
/// Skip counters are indexed by seat. A seat with a counter of `n` is passed
/// over the next `n` times rotation reaches it.
#[derive(Debug, Clone)]
pub struct Rotation {
    current: usize,
    direction: Direction,
    skips: Vec<u32>,
}

impl Rotation {
    pub fn new(players: usize) -> Self {
        assert!(players > 0, "rotation needs at least one seat");
        Self {
            current: 0,
            direction: Direction::Forward,
            skips: vec![0; players],
        }
    }

    pub fn len(&self) -> usize {
        self.skips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skips.is_empty()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn skip_count(&self, index: usize) -> u32 {
        self.skips[index]
    }

    pub fn skip_counts(&self) -> &[u32] {
        &self.skips
    }

    /// The seat that would play next, leaving every counter untouched.
    pub fn peek_next(&self) -> usize {
        // Walk a scratch copy so the answer always agrees with `next`, even
        // when every seat has a pending skip.
        let mut scratch = self.skips.clone();
        self.advance(&mut scratch)
    }

    /// Moves play on, consuming one skip from every seat stepped over.
    pub fn next(&mut self) -> usize {
        let mut skips = std::mem::take(&mut self.skips);
        let next = self.advance(&mut skips);
        self.skips = skips;
        debug!(from = self.current, to = next, "rotation advanced");
        self.current = next;
        next
    }

    /// Queues one more skip on `target`.
    ///
    /// Negative targets clamp to the seat count, then anything at or past the
    /// seat count wraps to seat 0. A negative target therefore lands on seat 0,
    /// not the last seat.
    pub fn skip(&mut self, target: isize) {
        let len = self.skips.len() as isize;
        let mut index = target;
        if index < 0 {
            index = len;
        }
        if index >= len {
            index = 0;
        }
        let index = index as usize;
        self.skips[index] += 1;
        debug!(requested = target, index, pending = self.skips[index], "skip queued");
    }

    pub fn reverse_direction(&mut self) {
        self.direction = self.direction.flip();
        debug!(direction = ?self.direction, "direction reversed");
    }

    fn advance(&self, skips: &mut [u32]) -> usize {
        let mut candidate = step(self.current, self.direction, skips.len());
        while skips[candidate] != 0 {
            skips[candidate] -= 1;
            candidate = step(candidate, self.direction, skips.len());
        }
        candidate
    }
}

fn step(index: usize, direction: Direction, len: usize) -> usize {
    let last = len - 1;
    match direction {
        Direction::Forward if index == last => 0,
        Direction::Forward => index + 1,
        Direction::Backward if index == 0 => last,
        Direction::Backward => index - 1,
    }
}
