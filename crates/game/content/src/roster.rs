//! Enemy rosters.

use game_core::{Character, Race};

/// Name and race of one enemy.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemySpec {
    pub name: String,
    pub race: Race,
}

impl EnemySpec {
    pub fn new(name: impl Into<String>, race: Race) -> Self {
        Self {
            name: name.into(),
            race,
        }
    }

    pub fn build(&self) -> Character {
        Character::new(self.name.clone(), self.race)
    }
}

/// One enemy of every race.
pub fn default_roster() -> Vec<EnemySpec> {
    vec![
        EnemySpec::new("Bob", Race::Human),
        EnemySpec::new("Legolas", Race::Elf),
        EnemySpec::new("Gimli", Race::Dwarf),
        EnemySpec::new("Frodo", Race::Hobbit),
        EnemySpec::new("Azog", Race::Orc),
    ]
}

/// The default roster, built into characters at full health.
pub fn default_enemies() -> Vec<Character> {
    default_roster().iter().map(EnemySpec::build).collect()
}
