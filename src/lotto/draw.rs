use std::collections::HashSet;

use rand::Rng;
use serde::Serialize;

use crate::lotto::ball::Ball;

pub const LOWEST_NUMBER: u8 = 1;
pub const HIGHEST_NUMBER: u8 = 45;
pub const NUMBERS_PER_DRAW: usize = 6;

/// Six distinct numbers in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Draw {
    numbers: [u8; NUMBERS_PER_DRAW],
}

impl Draw {
    pub fn numbers(&self) -> &[u8; NUMBERS_PER_DRAW] {
        &self.numbers
    }

    /// Numbers paired with their display colour.
    pub fn balls(&self) -> Vec<Ball> {
        self.numbers.iter().map(|&n| Ball::new(n)).collect()
    }
}

/// Draw six distinct numbers uniformly from `LOWEST_NUMBER..=HIGHEST_NUMBER`.
///
/// Samples with replacement and discards repeats until the set is full.
pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Draw {
    let mut picked: HashSet<u8> = HashSet::with_capacity(NUMBERS_PER_DRAW);
    let mut samples = 0usize;

    while picked.len() < NUMBERS_PER_DRAW {
        picked.insert(rng.gen_range(LOWEST_NUMBER..=HIGHEST_NUMBER));
        samples += 1;
    }

    let mut sorted: Vec<u8> = picked.into_iter().collect();
    sorted.sort_unstable();

    let mut numbers = [0u8; NUMBERS_PER_DRAW];
    numbers.copy_from_slice(&sorted);

    tracing::trace!(?numbers, samples, "numbers drawn");
    Draw { numbers }
}

/// Draw `count` independent sets.
pub fn draw_many<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Draw> {
    (0..count).map(|_| draw(rng)).collect()
}
