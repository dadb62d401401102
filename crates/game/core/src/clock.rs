//! Day/night clock.
//!
//! The clock is world state, not character state: the engine derives the phase
//! from the number of commands taken and pushes transitions onto every Orc.

/// Phase of the day.
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
pub enum TimeOfDay {
    #[default]
    Day,
    Night,
}

impl TimeOfDay {
    pub const fn from_night(is_night: bool) -> Self {
        if is_night { Self::Night } else { Self::Day }
    }
}

/// Alternates `day_length` commands of day with `day_length` commands of night.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayNightCycle {
    day_length: u32,
}

impl DayNightCycle {
    /// A zero length is treated as 1 so the cycle always advances.
    pub const fn new(day_length: u32) -> Self {
        Self {
            day_length: if day_length == 0 { 1 } else { day_length },
        }
    }

    /// Phase after `commands` commands have been taken.
    pub const fn phase_at(&self, commands: u64) -> TimeOfDay {
        let period = self.day_length as u64 * 2;
        TimeOfDay::from_night(commands % period >= self.day_length as u64)
    }
}
