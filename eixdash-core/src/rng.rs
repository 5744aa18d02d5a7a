//! Seeded pseudo-random draws for reproducible panel data.
//!
//! The seed is derived from the content of a filter's canonical key, so two
//! field-wise equal filters always produce the same draw sequence. The
//! generator itself is a small linear congruential generator over modulus
//! 233280; its exact sequence is part of the panel-data contract, which is
//! why it is hand-rolled rather than delegated to `rand`.

/// Seed for a canonical filter key: the sum of its byte values.
pub fn key_seed(key: &str) -> u32 {
    key.bytes().map(u32::from).sum()
}

/// Deterministic generator yielding draws in `[0, 1)`.
#[derive(Debug, Clone)]
pub struct PanelRng {
    state: u64,
}

impl PanelRng {
    pub fn new(seed: u32) -> Self {
        Self { state: u64::from(seed) }
    }

    /// Generator seeded from a canonical filter key.
    pub fn from_key(key: &str) -> Self {
        Self::new(key_seed(key))
    }

    /// Next draw: advances `state = (state * 9301 + 49297) mod 233280` and
    /// returns `state / 233280`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * 9301 + 49297) % 233280;
        self.state as f64 / 233280.0
    }
}
