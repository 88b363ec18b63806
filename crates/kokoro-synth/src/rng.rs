//! Seeded random source for patient generation.
//!
//! A 32-bit xorshift over the signed view of the state. The arithmetic
//! right shift is part of the stream definition: generated fixtures depend
//! on it, so it must not be "fixed" into a logical shift. Not suitable for
//! anything security related.

/// Deterministic random stream. One instance per generated patient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRandom {
    state: u32,
}

impl SeededRandom {
    /// Multiplier turning a patient number into a seed.
    pub const PATIENT_SEED_MULTIPLIER: u32 = 31_337;

    /// Create a stream. A zero seed is remapped to 1, since zero is a fixed
    /// point of the recurrence.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// The stream used to generate patient `number`.
    pub fn for_patient(number: u32) -> Self {
        Self::new(number.wrapping_mul(Self::PATIENT_SEED_MULTIPLIER))
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        let mut x = self.state as i32;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x as u32;
        f64::from(self.state) / 4_294_967_296.0
    }

    /// Uniform integer in `[min, max]`, both ends inclusive.
    pub fn int_in_range(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min <= max);
        let span = f64::from(max - min + 1);
        (self.next_f64() * span).floor() as i32 + min
    }

    /// Uniformly chosen element.
    ///
    /// # Panics
    ///
    /// Panics if `items` is empty. Callers pass the fixed, non-empty tables
    /// in [`crate::tables`].
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let index = (self.next_f64() * items.len() as f64) as usize;
        &items[index.min(items.len() - 1)]
    }

    /// `true` with probability `p`.
    pub fn bernoulli(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}
