//! RNG module - token sources for filling and refilling the grid
//!
//! Every fresh token placed on the board comes from a [`TokenSource`]. The
//! default source is [`SimpleRng`], a seeded LCG, so the same seed always
//! produces the same initial board and the same refills.
//!
//! [`TokenCycle`] replays a fixed list of tokens and is used for scripted
//! boards in tests and benchmarks.

use crate::types::Token;

/// Supplier of fresh tokens
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

impl<S: TokenSource + ?Sized> TokenSource for &mut S {
    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Low LCG bits have short periods; take the high half.
        (self.next_u32() >> 16) % max
    }

    /// Current internal state (reseeding with it continues the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl TokenSource for SimpleRng {
    fn next_token(&mut self) -> Token {
        let idx = self.next_range(Token::COUNT as u32) as usize;
        Token::ALL[idx]
    }
}

/// Replays a fixed token list forever
#[derive(Debug, Clone)]
pub struct TokenCycle {
    tokens: Vec<Token>,
    next: usize,
}

impl TokenCycle {
    /// Panics if `tokens` is empty.
    pub fn new(tokens: impl Into<Vec<Token>>) -> Self {
        let tokens = tokens.into();
        assert!(!tokens.is_empty(), "TokenCycle needs at least one token");
        Self { tokens, next: 0 }
    }

    /// A source that only ever yields `token`
    pub fn repeat(token: Token) -> Self {
        Self::new(vec![token])
    }

    /// Number of tokens handed out so far
    pub fn drawn(&self) -> usize {
        self.next
    }
}

impl TokenSource for TokenCycle {
    fn next_token(&mut self) -> Token {
        let token = self.tokens[self.next % self.tokens.len()];
        self.next += 1;
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut a = SimpleRng::new(0);
        let mut b = SimpleRng::new(1);
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn test_rng_yields_every_token_kind() {
        let mut rng = SimpleRng::new(7);
        let mut seen = [false; Token::COUNT];
        for _ in 0..500 {
            seen[rng.next_token().index()] = true;
        }
        assert!(seen.iter().all(|&s| s), "missing kinds: {:?}", seen);
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..1000 {
            assert!(rng.next_range(5) < 5);
        }
    }

    #[test]
    fn test_token_cycle_wraps() {
        let mut cycle = TokenCycle::new(vec![Token::Red, Token::Blue]);
        assert_eq!(cycle.next_token(), Token::Red);
        assert_eq!(cycle.next_token(), Token::Blue);
        assert_eq!(cycle.next_token(), Token::Red);
        assert_eq!(cycle.drawn(), 3);
    }

    #[test]
    fn test_borrowed_source_advances_owner() {
        fn draw<S: TokenSource>(mut source: S) -> Token {
            source.next_token()
        }

        let mut cycle = TokenCycle::new(vec![Token::Green, Token::Yellow]);
        assert_eq!(draw(&mut cycle), Token::Green);
        assert_eq!(cycle.next_token(), Token::Yellow);
    }
}
