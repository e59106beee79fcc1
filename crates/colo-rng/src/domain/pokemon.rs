//! Pokemon value derivation
//!
//! Pure functions turning generator output into IVs, hidden power, PIDs,
//! gender, shininess and nature. Functions that read the generator take
//! `&mut Lcg` and consume exactly the advances the game consumes.

use crate::constants::{PID_RETRY_LIMIT, SHINY_THRESHOLD};
use crate::domain::lcg::Lcg;

// =============================================================================
// Stats and IVs
// =============================================================================

/// Stat identifiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    SpAttack,
    SpDefense,
    Speed,
}

/// Six individual values, each in 0..=31
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Ivs {
    pub hp: u8,
    pub atk: u8,
    pub def: u8,
    pub spa: u8,
    pub spd: u8,
    pub spe: u8,
}

impl Ivs {
    pub const fn new(hp: u8, atk: u8, def: u8, spa: u8, spd: u8, spe: u8) -> Self {
        Self {
            hp,
            atk,
            def,
            spa,
            spd,
            spe,
        }
    }

    /// Roll all six IVs (2 advances)
    ///
    /// First advance: HP / Attack / Defense. Second: Speed / Sp. Atk / Sp. Def.
    pub fn roll(rng: &mut Lcg) -> Self {
        let [hp, atk, def] = roll_ivs(rng);
        let [spe, spa, spd] = roll_ivs(rng);
        Self {
            hp,
            atk,
            def,
            spa,
            spd,
            spe,
        }
    }

    /// IV of the given stat
    pub const fn get(&self, stat: Stat) -> u8 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.atk,
            Stat::Defense => self.def,
            Stat::SpAttack => self.spa,
            Stat::SpDefense => self.spd,
            Stat::Speed => self.spe,
        }
    }
}

/// Roll three IVs from one advance
///
/// The fields sit in bits 16-20, 21-25 and 26-30 of the new state.
#[inline]
pub fn roll_ivs(rng: &mut Lcg) -> [u8; 3] {
    let seed = rng.advance();
    [
        ((seed >> 16) & 31) as u8,
        ((seed >> 21) & 31) as u8,
        ((seed >> 26) & 31) as u8,
    ]
}

// =============================================================================
// Hidden power
// =============================================================================

/// Hidden power types in index order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HiddenPowerType {
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Steel,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Dark,
}

impl HiddenPowerType {
    const ALL: [Self; 16] = [
        Self::Fighting,
        Self::Flying,
        Self::Poison,
        Self::Ground,
        Self::Rock,
        Self::Bug,
        Self::Ghost,
        Self::Steel,
        Self::Fire,
        Self::Water,
        Self::Grass,
        Self::Electric,
        Self::Psychic,
        Self::Ice,
        Self::Dragon,
        Self::Dark,
    ];

    /// Type for an index in 0..=15
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Hidden power type and base power
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HiddenPower {
    pub kind: HiddenPowerType,
    /// Base power in 30..=70
    pub power: u8,
}

/// Derive hidden power from the low two bits of each IV
///
/// Bit weights follow HP, Attack, Defense, Speed, Sp. Atk, Sp. Def
/// (1, 2, 4, 8, 16, 32).
pub fn hidden_power(ivs: &Ivs) -> HiddenPower {
    let ordered = [ivs.hp, ivs.atk, ivs.def, ivs.spe, ivs.spa, ivs.spd];

    let mut type_sum = 0u32;
    let mut power_sum = 0u32;
    for (i, iv) in ordered.iter().enumerate() {
        type_sum |= ((*iv as u32) & 1) << i;
        power_sum |= (((*iv as u32) >> 1) & 1) << i;
    }

    let type_index = (type_sum * 15 / 63) as u8;
    HiddenPower {
        // type_sum <= 63, so the index is at most 15
        kind: HiddenPowerType::ALL[type_index as usize],
        power: (power_sum * 40 / 63 + 30) as u8,
    }
}

// =============================================================================
// Nature
// =============================================================================

/// Natures in index order (`pid % 25`)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Nature {
    Hardy,
    Lonely,
    Brave,
    Adamant,
    Naughty,
    Bold,
    Docile,
    Relaxed,
    Impish,
    Lax,
    Timid,
    Hasty,
    Serious,
    Jolly,
    Naive,
    Modest,
    Mild,
    Quiet,
    Bashful,
    Rash,
    Calm,
    Gentle,
    Sassy,
    Careful,
    Quirky,
}

impl Nature {
    const ALL: [Self; 25] = [
        Self::Hardy,
        Self::Lonely,
        Self::Brave,
        Self::Adamant,
        Self::Naughty,
        Self::Bold,
        Self::Docile,
        Self::Relaxed,
        Self::Impish,
        Self::Lax,
        Self::Timid,
        Self::Hasty,
        Self::Serious,
        Self::Jolly,
        Self::Naive,
        Self::Modest,
        Self::Mild,
        Self::Quiet,
        Self::Bashful,
        Self::Rash,
        Self::Calm,
        Self::Gentle,
        Self::Sassy,
        Self::Careful,
        Self::Quirky,
    ];

    /// Stats affected by natures, in the order the index encodes them
    const AFFECTED: [Stat; 5] = [
        Stat::Attack,
        Stat::Defense,
        Stat::Speed,
        Stat::SpAttack,
        Stat::SpDefense,
    ];

    /// Nature for an index in 0..=24
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Nature of a PID
    pub fn from_pid(pid: u32) -> Self {
        Self::ALL[(pid % 25) as usize]
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stat raised by 10%, `None` for neutral natures
    pub fn raised_stat(self) -> Option<Stat> {
        let (up, down) = self.split();
        (up != down).then_some(Self::AFFECTED[up])
    }

    /// Stat lowered by 10%, `None` for neutral natures
    pub fn lowered_stat(self) -> Option<Stat> {
        let (up, down) = self.split();
        (up != down).then_some(Self::AFFECTED[down])
    }

    fn split(self) -> (usize, usize) {
        let i = self.index() as usize;
        (i / 5, i % 5)
    }
}

// =============================================================================
// PID, gender and shininess
// =============================================================================

/// Gender class of a PID
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Female iff `ratio > (pid & 0xFF)`
    ///
    /// Some references call the `ratio > (pid & 0xFF)` side "male-class"; in
    /// game terms it is the female side, and starters must land on `Male`.
    #[inline]
    pub const fn from_pid(ratio: u8, pid: u32) -> Self {
        if ratio as u32 > (pid & 0xFF) {
            Self::Female
        } else {
            Self::Male
        }
    }

    /// Whether some PID of this ratio has this gender
    pub const fn is_reachable(self, ratio: u8) -> bool {
        match self {
            Self::Male => true,
            Self::Female => ratio > 0,
        }
    }
}

/// Shininess predicate
#[inline]
pub const fn is_shiny(tid: u16, sid: u16, pid: u32) -> bool {
    ((tid as u32) ^ (sid as u32) ^ (pid & 0xFFFF) ^ (pid >> 16)) < SHINY_THRESHOLD
}

/// Trainer and secret IDs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TrainerId {
    pub tid: u16,
    pub sid: u16,
}

impl TrainerId {
    /// Draw TID then SID (2 advances)
    pub fn roll(rng: &mut Lcg) -> Self {
        let tid = rng.next_high();
        let sid = rng.next_high();
        Self { tid, sid }
    }

    #[inline]
    pub const fn is_shiny(&self, pid: u32) -> bool {
        is_shiny(self.tid, self.sid, pid)
    }
}

/// Assemble a PID from two advances, high half first
#[inline]
pub fn roll_pid(rng: &mut Lcg) -> u32 {
    let high = rng.next_high() as u32;
    let low = rng.next_high() as u32;
    (high << 16) | low
}

/// Result of a rejecting PID roll
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PidRoll {
    pub pid: u32,
    /// Candidates drawn, including the accepted one (2 advances each)
    pub attempts: u32,
}

impl PidRoll {
    /// Advances consumed by the roll
    pub const fn advances(&self) -> u32 {
        self.attempts * 2
    }
}

/// Roll PIDs until one has `gender` and is not shiny
///
/// Returns `None` only if [`PID_RETRY_LIMIT`] candidates were rejected, which
/// requires a gender the ratio can never produce.
pub fn generate_pid(
    rng: &mut Lcg,
    trainer: TrainerId,
    ratio: u8,
    gender: Gender,
) -> Option<PidRoll> {
    for attempts in 1..=PID_RETRY_LIMIT {
        let pid = roll_pid(rng);
        if Gender::from_pid(ratio, pid) != gender {
            continue;
        }
        if !trainer.is_shiny(pid) {
            return Some(PidRoll { pid, attempts });
        }
    }
    None
}

// =============================================================================
// Derived record
// =============================================================================

/// Values derived for one generated Pokemon
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pokemon {
    pub pid: u32,
    pub ivs: Ivs,
    pub hidden_power: HiddenPower,
    pub nature: Nature,
}

impl Pokemon {
    pub fn new(pid: u32, ivs: Ivs) -> Self {
        Self {
            pid,
            ivs,
            hidden_power: hidden_power(&ivs),
            nature: Nature::from_pid(pid),
        }
    }

    /// IVs, ability, then a rejecting PID (5 advances + 2 per rejected PID)
    pub fn roll_rejecting(
        rng: &mut Lcg,
        trainer: TrainerId,
        ratio: u8,
        gender: Gender,
    ) -> Option<Self> {
        let ivs = Ivs::roll(rng);
        rng.advance(); // ability
        let roll = generate_pid(rng, trainer, ratio, gender)?;
        Some(Self::new(roll.pid, ivs))
    }

    /// IVs, ability, then a single PID (5 advances)
    pub fn roll(rng: &mut Lcg) -> Self {
        let ivs = Ivs::roll(rng);
        rng.advance(); // ability
        let pid = roll_pid(rng);
        Self::new(pid, ivs)
    }

    pub fn gender(&self, ratio: u8) -> Gender {
        Gender::from_pid(ratio, self.pid)
    }
}
