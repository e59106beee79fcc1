use colo_rng::{Lcg, LcgJump, advance, advance_by};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn iterate(mut seed: u32, n: u64) -> u32 {
    for _ in 0..n {
        seed = advance(seed);
    }
    seed
}

#[test]
fn jump_matches_iteration() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    for _ in 0..32 {
        let seed: u32 = rng.r#gen();
        for n in [0u32, 1, 2, 3, 1000, 1 << 16] {
            assert_eq!(advance_by(seed, n), iterate(seed, n as u64), "seed {:08X} n {}", seed, n);
        }
    }
}

#[test]
fn jump_composes() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..1000 {
        let seed: u32 = rng.r#gen();
        let a: u32 = rng.gen_range(0..1 << 20);
        let b: u32 = rng.gen_range(0..1 << 20);
        assert_eq!(advance_by(advance_by(seed, a), b), advance_by(seed, a + b));
    }
}

#[test]
fn jump_half_period_twice_is_identity() {
    for seed in [0, 1, 0x82DD_8E91, u32::MAX] {
        let half = advance_by(seed, 1 << 31);
        assert_ne!(half, seed);
        assert_eq!(advance_by(half, 1 << 31), seed);
    }
}

#[test]
fn full_period_inverse() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1000 {
        let seed: u32 = rng.r#gen();
        assert_eq!(advance(advance_by(seed, u32::MAX)), seed);
        assert_eq!(advance_by(advance(seed), u32::MAX), seed);
    }
}

#[test]
fn known_jump_values() {
    assert_eq!(advance_by(0, 1000), 0xD252_C5A8);
    assert_eq!(advance(0x82DD_8E91), 0xFD1F_7710);
    assert_eq!(advance_by(0xDEAD_BEEF, 1 << 16), 0x0602_BEEF);
}

#[test]
fn precomputed_jump_matches_stateful_generator() {
    const JUMP: LcgJump = LcgJump::new(1_248_257);

    let mut rng = Lcg::new(0x82DD_8E91);
    rng.advance_by(1_248_257);
    assert_eq!(rng.seed(), JUMP.apply(0x82DD_8E91));
    assert_eq!(rng.seed(), 0xEF4B_E310);
    assert_eq!(rng.advances(), 1_248_257);
}

#[test]
#[ignore = "iterates 2^31 steps"]
fn jump_half_period_matches_iteration() {
    assert_eq!(advance_by(0x82DD_8E91, 1 << 31), iterate(0x82DD_8E91, 1 << 31));
}
