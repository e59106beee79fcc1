//! Colosseum LCG
//!
//! The 32-bit linear congruential generator `s' = s * 0x343FD + 0x269EC3 (mod 2^32)`
//! shared by Colosseum and XD, together with an O(log n) jump-ahead.
//!
//! Jumping `n` steps is the affine map `s -> s * M^n + C * (M^(n-1) + ... + M^0)`.
//! Both terms are evaluated by halving `n`, so every jump length costs at most
//! ~64 multiplications.

use crate::constants::{LCG_INCREMENT, LCG_MULTIPLIER};

/// Advance a seed by one step
#[inline]
pub const fn advance(seed: u32) -> u32 {
    seed.wrapping_mul(LCG_MULTIPLIER).wrapping_add(LCG_INCREMENT)
}

/// Advance a seed by exactly `n` steps in O(log n)
///
/// `advance_by(seed, 0)` is the identity.
#[inline]
pub const fn advance_by(seed: u32, n: u32) -> u32 {
    LcgJump::new(n).apply(seed)
}

/// `base^exp (mod 2^32)` by binary exponentiation
pub const fn pow_mod32(mut base: u32, mut exp: u32) -> u32 {
    let mut result = 1u32;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result.wrapping_mul(base);
        }
        base = base.wrapping_mul(base);
        exp >>= 1;
    }
    result
}

/// `ratio^0 + ratio^1 + ... + ratio^(terms-1) (mod 2^32)`
pub const fn geometric_sum(ratio: u32, terms: u32) -> u32 {
    sum_and_power(ratio, terms).0
}

/// Returns `(sum of the first `terms` powers, ratio^terms)`
///
/// Even counts split in half: `S(2k) = S(k) * (1 + r^k)`.
/// Odd counts peel off the last term: `S(k + 1) = S(k) + r^k`.
const fn sum_and_power(ratio: u32, terms: u32) -> (u32, u32) {
    if terms == 0 {
        return (0, 1);
    }

    if terms & 1 == 1 {
        let (sum, power) = sum_and_power(ratio, terms - 1);
        return (sum.wrapping_add(power), power.wrapping_mul(ratio));
    }

    let (half_sum, half_power) = sum_and_power(ratio, terms / 2);
    (
        half_sum.wrapping_mul(half_power.wrapping_add(1)),
        half_power.wrapping_mul(half_power),
    )
}

/// Precomputed jump of a fixed number of steps
///
/// Hot loops build their jumps once (usually in a `const`) and apply them with
/// two multiply-adds per use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LcgJump {
    /// Multiplier term `M^steps`
    pub mult: u32,
    /// Additive term `C * (M^(steps-1) + ... + 1)`
    pub add: u32,
    /// Number of single steps this jump stands for
    pub steps: u32,
}

impl LcgJump {
    /// Jump of zero steps
    pub const IDENTITY: Self = Self {
        mult: 1,
        add: 0,
        steps: 0,
    };

    /// Build the jump for exactly `steps` single advances
    pub const fn new(steps: u32) -> Self {
        Self {
            mult: pow_mod32(LCG_MULTIPLIER, steps),
            add: geometric_sum(LCG_MULTIPLIER, steps).wrapping_mul(LCG_INCREMENT),
            steps,
        }
    }

    /// Apply the jump to a seed
    #[inline]
    pub const fn apply(self, seed: u32) -> u32 {
        seed.wrapping_mul(self.mult).wrapping_add(self.add)
    }
}

/// Generator instance with an advance counter
///
/// Every search attempt owns its own `Lcg`; derivation functions take it by
/// `&mut` and leave it exactly where the game would be afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lcg {
    seed: u32,
    advances: u64,
}

impl Lcg {
    /// Create a generator at `seed`
    pub const fn new(seed: u32) -> Self {
        Self { seed, advances: 0 }
    }

    /// Current state
    #[inline]
    pub const fn seed(&self) -> u32 {
        self.seed
    }

    /// Total single steps consumed since construction
    #[inline]
    pub const fn advances(&self) -> u64 {
        self.advances
    }

    /// Advance one step and return the new state
    #[inline]
    pub fn advance(&mut self) -> u32 {
        self.seed = advance(self.seed);
        self.advances += 1;
        self.seed
    }

    /// Advance one step and return the upper 16 bits of the new state
    #[inline]
    pub fn next_high(&mut self) -> u16 {
        (self.advance() >> 16) as u16
    }

    /// Advance `n` steps
    #[inline]
    pub fn advance_by(&mut self, n: u32) -> u32 {
        self.jump(LcgJump::new(n))
    }

    /// Apply a precomputed jump
    #[inline]
    pub fn jump(&mut self, jump: LcgJump) -> u32 {
        self.seed = jump.apply(self.seed);
        self.advances += jump.steps as u64;
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iterate(mut seed: u32, n: u32) -> u32 {
        for _ in 0..n {
            seed = advance(seed);
        }
        seed
    }

    #[test]
    fn test_advance_known_values() {
        assert_eq!(advance(0), 0x0026_9EC3);
        assert_eq!(advance(0x82DD_8E91), 0xFD1F_7710);
    }

    #[test]
    fn test_advance_by_zero_is_identity() {
        for seed in [0u32, 1, 0x82DD_8E91, u32::MAX] {
            assert_eq!(advance_by(seed, 0), seed);
        }
        assert_eq!(LcgJump::new(0), LcgJump::IDENTITY);
    }

    #[test]
    fn test_advance_by_matches_iteration_small() {
        let seed = 0x1234_5678;
        for n in 0..300 {
            assert_eq!(advance_by(seed, n), iterate(seed, n), "n = {}", n);
        }
    }

    #[test]
    fn test_advance_by_1000_from_zero() {
        assert_eq!(advance_by(0, 1000), 0xD252_C5A8);
        assert_eq!(iterate(0, 1000), 0xD252_C5A8);
    }

    #[test]
    fn test_pow_mod32() {
        assert_eq!(pow_mod32(LCG_MULTIPLIER, 0), 1);
        assert_eq!(pow_mod32(LCG_MULTIPLIER, 1), LCG_MULTIPLIER);
        assert_eq!(
            pow_mod32(LCG_MULTIPLIER, 3),
            LCG_MULTIPLIER
                .wrapping_mul(LCG_MULTIPLIER)
                .wrapping_mul(LCG_MULTIPLIER)
        );
    }

    #[test]
    fn test_geometric_sum_matches_naive() {
        let mut naive = 0u32;
        let mut power = 1u32;
        for terms in 0..200u32 {
            assert_eq!(geometric_sum(LCG_MULTIPLIER, terms), naive, "terms = {}", terms);
            naive = naive.wrapping_add(power);
            power = power.wrapping_mul(LCG_MULTIPLIER);
        }
    }

    #[test]
    fn test_sum_and_power_power_term() {
        for terms in [0u32, 1, 2, 7, 64, 1000, u32::MAX] {
            assert_eq!(
                sum_and_power(LCG_MULTIPLIER, terms).1,
                pow_mod32(LCG_MULTIPLIER, terms)
            );
        }
    }

    #[test]
    fn test_full_period_inverse() {
        // Full period 2^32: one more step after 2^32 - 1 returns to the start
        for seed in [0u32, 0xDEAD_BEEF, 0x82DD_8E91] {
            assert_eq!(advance(advance_by(seed, u32::MAX)), seed);
        }
    }

    #[test]
    fn test_lcg_counts_advances() {
        let mut rng = Lcg::new(0);
        rng.advance();
        rng.advance_by(1000);
        rng.jump(LcgJump::new(4));
        rng.next_high();
        assert_eq!(rng.advances(), 1006);
        assert_eq!(rng.seed(), iterate(0, 1006));
    }

    #[test]
    fn test_next_high() {
        let mut rng = Lcg::new(0x82DD_8E91);
        assert_eq!(rng.next_high(), 0xFD1F);
    }

    #[test]
    fn test_const_jump() {
        const JUMP: LcgJump = LcgJump::new(5);
        assert_eq!(JUMP.apply(42), iterate(42, 5));
        assert_eq!(JUMP.steps, 5);
    }
}
