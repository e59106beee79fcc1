//! Filter chains over derived Pokemon
//!
//! A chain is an ordered list of predicates evaluated with short-circuit;
//! the empty chain accepts everything.

use crate::domain::pokemon::{HiddenPowerType, Nature, Pokemon, Stat};

/// Single condition on a derived Pokemon
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Predicate {
    /// Nature equals
    Nature(Nature),
    /// IV of the stat is at least the value
    IvAtLeast(Stat, u8),
    /// IV of the stat is at most the value
    IvAtMost(Stat, u8),
    /// IV of the stat equals the value
    IvExactly(Stat, u8),
    /// IV floor that only applies when the nature lowers that stat
    IvAtLeastIfLowered(Stat, u8),
    /// Hidden power type equals
    HiddenPowerType(HiddenPowerType),
    /// Hidden power base power is at least the value
    HiddenPowerAtLeast(u8),
}

impl Predicate {
    #[inline]
    pub fn matches(&self, mon: &Pokemon) -> bool {
        match *self {
            Self::Nature(nature) => mon.nature == nature,
            Self::IvAtLeast(stat, min) => mon.ivs.get(stat) >= min,
            Self::IvAtMost(stat, max) => mon.ivs.get(stat) <= max,
            Self::IvExactly(stat, value) => mon.ivs.get(stat) == value,
            Self::IvAtLeastIfLowered(stat, min) => {
                mon.nature.lowered_stat() != Some(stat) || mon.ivs.get(stat) >= min
            }
            Self::HiddenPowerType(kind) => mon.hidden_power.kind == kind,
            Self::HiddenPowerAtLeast(min) => mon.hidden_power.power >= min,
        }
    }
}

/// Ordered predicate list
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterChain {
    predicates: Vec<Predicate>,
}

impl FilterChain {
    /// Chain accepting every Pokemon
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate
    pub fn with(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn nature(self, nature: Nature) -> Self {
        self.with(Predicate::Nature(nature))
    }

    pub fn iv_at_least(self, stat: Stat, min: u8) -> Self {
        self.with(Predicate::IvAtLeast(stat, min))
    }

    pub fn iv_exactly(self, stat: Stat, value: u8) -> Self {
        self.with(Predicate::IvExactly(stat, value))
    }

    pub fn hidden_power(self, kind: HiddenPowerType, min_power: u8) -> Self {
        self.with(Predicate::HiddenPowerType(kind))
            .with(Predicate::HiddenPowerAtLeast(min_power))
    }

    /// Evaluate every predicate in order, stopping at the first failure
    #[inline]
    pub fn matches(&self, mon: &Pokemon) -> bool {
        self.predicates.iter().all(|p| p.matches(mon))
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    // =========================================================================
    // Colosseum presets
    // =========================================================================

    /// Umbreon: 10+ Attack when the nature lowers Attack
    pub fn umbreon() -> Self {
        Self::new().with(Predicate::IvAtLeastIfLowered(Stat::Attack, 10))
    }

    /// Espeon: Rash, Hidden Power Grass 61+, HP 21+ / Atk 30+ / Def 26+ / SpA 30 / Spe 27+
    pub fn espeon() -> Self {
        Self::new()
            .nature(Nature::Rash)
            .hidden_power(HiddenPowerType::Grass, 61)
            .iv_at_least(Stat::Hp, 21)
            .iv_at_least(Stat::Attack, 30)
            .iv_at_least(Stat::Defense, 26)
            .iv_exactly(Stat::SpAttack, 30)
            .iv_at_least(Stat::Speed, 27)
    }

    /// Quilava: Naughty, HP 25+ / Atk 29+ / Def 24+ / SpA 30+ / Spe 24+
    pub fn quilava() -> Self {
        Self::new()
            .nature(Nature::Naughty)
            .iv_at_least(Stat::Hp, 25)
            .iv_at_least(Stat::Attack, 29)
            .iv_at_least(Stat::Defense, 24)
            .iv_at_least(Stat::SpAttack, 30)
            .iv_at_least(Stat::Speed, 24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pokemon::Ivs;

    fn mon_with(nature: Nature, ivs: Ivs) -> Pokemon {
        // pid % 25 == nature index
        Pokemon::new(nature.index() as u32, ivs)
    }

    #[test]
    fn test_empty_chain_accepts_all() {
        let chain = FilterChain::new();
        assert!(chain.is_empty());
        assert!(chain.matches(&mon_with(Nature::Hardy, Ivs::default())));
    }

    #[test]
    fn test_umbreon_filter() {
        let chain = FilterChain::umbreon();
        let weak = Ivs::new(31, 9, 31, 31, 31, 31);
        let strong = Ivs::new(31, 10, 31, 31, 31, 31);

        assert!(!chain.matches(&mon_with(Nature::Bold, weak)));
        assert!(!chain.matches(&mon_with(Nature::Calm, weak)));
        assert!(chain.matches(&mon_with(Nature::Bold, strong)));
        // Rash lowers Sp. Def, not Attack
        assert!(chain.matches(&mon_with(Nature::Rash, weak)));
    }

    #[test]
    fn test_espeon_filter() {
        let chain = FilterChain::espeon();
        let good = Ivs::new(31, 30, 31, 30, 31, 31);
        assert!(chain.matches(&mon_with(Nature::Rash, good)));
        assert!(!chain.matches(&mon_with(Nature::Modest, good)));

        // SpA must be exactly 30
        let spa31 = Ivs::new(31, 30, 31, 31, 31, 31);
        assert!(!chain.matches(&mon_with(Nature::Rash, spa31)));
    }

    #[test]
    fn test_quilava_filter() {
        let chain = FilterChain::quilava();
        let good = Ivs::new(25, 29, 24, 30, 0, 24);
        assert!(chain.matches(&mon_with(Nature::Naughty, good)));
        let slow = Ivs::new(25, 29, 24, 30, 0, 23);
        assert!(!chain.matches(&mon_with(Nature::Naughty, slow)));
    }

    #[test]
    fn test_iv_at_most() {
        let chain = FilterChain::new().with(Predicate::IvAtMost(Stat::Speed, 0));
        assert!(chain.matches(&mon_with(Nature::Brave, Ivs::new(31, 31, 31, 31, 31, 0))));
        assert!(!chain.matches(&mon_with(Nature::Brave, Ivs::new(31, 31, 31, 31, 31, 1))));
    }

    #[test]
    fn test_predicate_order_preserved() {
        let chain = FilterChain::espeon();
        assert_eq!(chain.predicates()[0], Predicate::Nature(Nature::Rash));
        assert_eq!(
            chain.predicates()[1],
            Predicate::HiddenPowerType(HiddenPowerType::Grass)
        );
    }
}
