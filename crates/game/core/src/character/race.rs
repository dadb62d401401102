//! Races and their fixed base statistics.

use crate::clock::TimeOfDay;

/// Playable and enemy races.
///
/// Parsing is ASCII-case-insensitive, so a shell can map a typed race name
/// straight to a race: `"orc".parse::<Race>()`.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Race {
    #[default]
    Human,
    Elf,
    Dwarf,
    Hobbit,
    Orc,
}

impl Race {
    pub const ALL: [Race; 5] = [Race::Human, Race::Elf, Race::Dwarf, Race::Hobbit, Race::Orc];

    /// Base statistics a fresh character of this race starts with.
    ///
    /// Orcs start in their day profile.
    pub const fn base_stats(self) -> BaseStats {
        match self {
            Race::Human => BaseStats::new(CombatProfile::new(30, 2.0 / 3.0, 20, 0.5), 60, 100),
            Race::Elf => BaseStats::new(CombatProfile::new(40, 1.0, 10, 0.25), 40, 70),
            Race::Dwarf => BaseStats::new(CombatProfile::new(30, 2.0 / 3.0, 20, 2.0 / 3.0), 50, 130),
            Race::Hobbit => {
                BaseStats::new(CombatProfile::new(25, 1.0 / 3.0, 20, 2.0 / 3.0), 70, 85)
            }
            Race::Orc => BaseStats::new(ORC_DAY, 50, 130),
        }
    }

    /// True for races whose base stats depend on the time of day.
    pub const fn follows_clock(self) -> bool {
        matches!(self, Race::Orc)
    }

    /// Combat profile for `time`, or `None` for races unaffected by the clock.
    pub const fn profile_at(self, time: TimeOfDay) -> Option<CombatProfile> {
        match (self, time) {
            (Race::Orc, TimeOfDay::Day) => Some(ORC_DAY),
            (Race::Orc, TimeOfDay::Night) => Some(ORC_NIGHT),
            _ => None,
        }
    }
}

/// Orc profile while the sun is up.
pub const ORC_DAY: CombatProfile = CombatProfile::new(25, 0.25, 10, 0.25);

/// Orc profile after dark.
pub const ORC_NIGHT: CombatProfile = CombatProfile::new(45, 1.0, 25, 0.5);

/// The four base stats that the day/night clock may overwrite.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatProfile {
    pub attack: i32,
    /// Probability in `[0, 1]` that an attack is attempted successfully.
    pub attack_chance: f32,
    pub defence: i32,
    /// Probability in `[0, 1]` that a defence succeeds.
    pub defence_chance: f32,
}

impl CombatProfile {
    pub const fn new(attack: i32, attack_chance: f32, defence: i32, defence_chance: f32) -> Self {
        Self {
            attack,
            attack_chance,
            defence,
            defence_chance,
        }
    }
}

/// Base statistics before any equipment is applied.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub combat: CombatProfile,
    pub health: i32,
    pub strength: i32,
}

impl BaseStats {
    pub const fn new(combat: CombatProfile, health: i32, strength: i32) -> Self {
        Self {
            combat,
            health,
            strength,
        }
    }
}
