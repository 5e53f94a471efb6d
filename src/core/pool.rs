//! Fixed pools of secrets.
//!
//! Pools are immutable constants shared by every session. Drawing copies an
//! entry out; nothing ever mutates the pool itself.

use super::rng::GameRng;

/// An immutable, non-empty list of candidate secrets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SecretPool {
    entries: &'static [&'static str],
}

impl SecretPool {
    /// Wrap a static word list.
    ///
    /// # Panics
    ///
    /// Panics if `entries` is empty.
    #[must_use]
    pub const fn new(entries: &'static [&'static str]) -> Self {
        assert!(!entries.is_empty(), "Secret pool must not be empty");
        Self { entries }
    }

    /// Draw one entry uniformly at random.
    #[must_use]
    pub fn draw(&self, rng: &mut GameRng) -> &'static str {
        self.entries[rng.gen_range_usize(0..self.entries.len())]
    }

    /// All entries, in declaration order.
    #[must_use]
    pub fn entries(&self) -> &'static [&'static str] {
        self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; pools are non-empty by construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `word` is one of the entries.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains(&word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLORS: SecretPool = SecretPool::new(&["RED", "GREEN", "BLUE"]);

    #[test]
    fn test_draw_stays_in_pool() {
        let mut rng = GameRng::new(42);
        for _ in 0..50 {
            assert!(COLORS.contains(COLORS.draw(&mut rng)));
        }
    }

    #[test]
    fn test_draw_reaches_every_entry() {
        let mut rng = GameRng::new(1);
        let mut seen = rustc_hash::FxHashSet::default();
        for _ in 0..200 {
            seen.insert(COLORS.draw(&mut rng));
        }
        assert_eq!(seen.len(), COLORS.len());
    }
}
