//! Random roll oracle.
//!
//! Every random decision in the core (attack and defence rolls, the Hobbit's
//! stumble, board placement) is drawn through [`Dice`]. Production code wraps a
//! `rand` generator in [`RngDice`]; tests and replays feed fixed rolls through
//! [`ScriptedDice`].

use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform random rolls.
pub trait Dice {
    /// Uniform roll in `[0, 1)`.
    fn unit(&mut self) -> f32;

    /// Uniform integer in `[0, bound)`. Returns 0 when `bound` is 0 or 1.
    fn below(&mut self, bound: u32) -> u32;

    /// Uniform integer in `[min, max]` inclusive.
    fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        min + self.below(max - min + 1)
    }
}

impl<D: Dice + ?Sized> Dice for &mut D {
    fn unit(&mut self) -> f32 {
        (**self).unit()
    }

    fn below(&mut self, bound: u32) -> u32 {
        (**self).below(bound)
    }
}

/// [`Dice`] backed by any `rand` generator.
#[derive(Clone, Debug)]
pub struct RngDice<R = StdRng> {
    rng: R,
}

impl<R: Rng> RngDice<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngDice<StdRng> {
    /// Reproducible dice for replays and simulations.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Dice seeded from the wall clock.
    pub fn from_clock() -> Self {
        Self::seeded(clock_seed())
    }
}

impl<R: Rng> Dice for RngDice<R> {
    fn unit(&mut self) -> f32 {
        self.rng.r#gen::<f32>()
    }

    fn below(&mut self, bound: u32) -> u32 {
        if bound <= 1 {
            return 0;
        }
        self.rng.gen_range(0..bound)
    }
}

/// Seed derived from the current wall-clock time (nanoseconds since the epoch).
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

/// Replays a fixed sequence of rolls.
///
/// Unit rolls and integer rolls are queued separately and consumed in order.
/// Once a queue runs dry every further roll from it returns zero.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    units: VecDeque<f32>,
    ints: VecDeque<u32>,
}

impl ScriptedDice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues unit rolls (attack and defence checks).
    pub fn with_units(mut self, rolls: impl IntoIterator<Item = f32>) -> Self {
        self.units.extend(rolls);
        self
    }

    /// Queues integer rolls (placement, stumble damage).
    pub fn with_ints(mut self, rolls: impl IntoIterator<Item = u32>) -> Self {
        self.ints.extend(rolls);
        self
    }

    /// True once every queued roll has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.units.is_empty() && self.ints.is_empty()
    }
}

impl Dice for ScriptedDice {
    fn unit(&mut self) -> f32 {
        self.units.pop_front().unwrap_or(0.0)
    }

    fn below(&mut self, bound: u32) -> u32 {
        let roll = self.ints.pop_front().unwrap_or(0);
        if bound <= 1 { 0 } else { roll % bound }
    }
}
