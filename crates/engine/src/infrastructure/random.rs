//! Random implementations.

#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};

use uuid::Uuid;

use crate::infrastructure::ports::RandomPort;

/// System random - uses real randomness.
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPort for SystemRandom {
    fn gen_range(&self, min: i32, max: i32) -> i32 {
        use rand::Rng;
        if min >= max {
            return min;
        }
        rand::thread_rng().gen_range(min..=max)
    }

    fn gen_uuid(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Fixed random for testing - always returns the same values.
#[cfg(test)]
pub struct FixedRandom {
    pub value: i32,
    pub uuid: Uuid,
}

#[cfg(test)]
impl FixedRandom {
    pub fn new(value: i32) -> Self {
        Self {
            value,
            uuid: Uuid::nil(),
        }
    }
}

#[cfg(test)]
impl RandomPort for FixedRandom {
    fn gen_range(&self, min: i32, max: i32) -> i32 {
        self.value.clamp(min, max.max(min))
    }

    fn gen_uuid(&self) -> Uuid {
        self.uuid
    }
}

/// Replays a fixed list of values, wrapping around; ids stay fresh.
#[cfg(test)]
pub struct SequenceRandom {
    values: Vec<i32>,
    cursor: AtomicUsize,
}

#[cfg(test)]
impl SequenceRandom {
    pub fn new(values: Vec<i32>) -> Self {
        Self {
            values,
            cursor: AtomicUsize::new(0),
        }
    }
}

#[cfg(test)]
impl RandomPort for SequenceRandom {
    fn gen_range(&self, min: i32, max: i32) -> i32 {
        if self.values.is_empty() {
            return min;
        }
        let at = self.cursor.fetch_add(1, Ordering::Relaxed) % self.values.len();
        self.values[at].clamp(min, max.max(min))
    }

    fn gen_uuid(&self) -> Uuid {
        Uuid::new_v4()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_random_stays_in_bounds() {
        let random = SystemRandom::new();
        for _ in 0..200 {
            let v = random.gen_range(3, 7);
            assert!((3..=7).contains(&v));
        }
        assert_eq!(random.gen_range(5, 5), 5);
    }

    #[test]
    fn sequence_random_wraps_and_clamps() {
        let random = SequenceRandom::new(vec![1, 50, 2]);
        assert_eq!(random.gen_range(0, 10), 1);
        assert_eq!(random.gen_range(0, 10), 10);
        assert_eq!(random.gen_range(0, 10), 2);
        assert_eq!(random.gen_range(0, 10), 1);
    }
}
