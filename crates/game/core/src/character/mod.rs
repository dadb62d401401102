//! Characters: base stats, equipment and derived totals.
//!
//! A [`Character`] stores only what cannot be recomputed: its race's base
//! stats (which the clock may overwrite for Orcs), current health and
//! equipment. Every total is derived on demand from the equipment, so there is
//! no cached value to fall out of sync when items change hands.

mod equipment;
mod error;
mod race;
mod view;

pub use equipment::{EquipSlot, Equipment};
pub use error::{DropError, EquipError};
pub use race::{BaseStats, CombatProfile, ORC_DAY, ORC_NIGHT, Race};
pub use view::{InventoryView, StatLine};

use crate::clock::TimeOfDay;
use crate::item::Item;

/// Outcome of a successful pickup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickedUp {
    pub slot: EquipSlot,
    pub item: String,
    /// Previous occupant of a single slot. Rings never replace anything.
    pub replaced: Option<Item>,
}

/// What to drop from a character's equipment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DropTarget {
    Weapon,
    Armor,
    Shield,
    /// 0-based position in the ring list.
    Ring(usize),
}

impl DropTarget {
    pub const fn slot(self) -> EquipSlot {
        match self {
            Self::Weapon => EquipSlot::Weapon,
            Self::Armor => EquipSlot::Armor,
            Self::Shield => EquipSlot::Shield,
            Self::Ring(_) => EquipSlot::Ring,
        }
    }
}

/// A combatant, either the player or an enemy.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    name: String,
    race: Race,
    base: BaseStats,
    current_health: i32,
    equipment: Equipment,
    /// `Some` only for races that follow the clock.
    time_of_day: Option<TimeOfDay>,
}

impl Character {
    /// Creates a character at full health with its race's default stats.
    pub fn new(name: impl Into<String>, race: Race) -> Self {
        let base = race.base_stats();
        Self {
            name: name.into(),
            race,
            base,
            current_health: base.health,
            equipment: Equipment::empty(),
            time_of_day: race.follows_clock().then_some(TimeOfDay::Day),
        }
    }

    /// Creates a character from a race name such as `"elf"` or `"Orc"`.
    pub fn from_race_name(
        name: impl Into<String>,
        race: &str,
    ) -> Result<Self, strum::ParseError> {
        Ok(Self::new(name, race.parse()?))
    }

    /// Overrides current health, clamped to `[0, total_health]`.
    pub fn with_current_health(mut self, health: i32) -> Self {
        self.current_health = health.clamp(0, self.total_health().max(0));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn race(&self) -> Race {
        self.race
    }

    pub fn base(&self) -> &BaseStats {
        &self.base
    }

    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }

    pub fn current_health(&self) -> i32 {
        self.current_health
    }

    /// Clock phase this character is tuned to; `None` for races that ignore it.
    pub fn time_of_day(&self) -> Option<TimeOfDay> {
        self.time_of_day
    }

    // ========================================================================
    // Derived stats
    // ========================================================================

    /// Base attack + weapon bonus - armour/shield penalties + ring strength.
    pub fn total_attack(&self) -> i32 {
        self.base.combat.attack + self.sum_modifiers(Item::attack_modifier)
    }

    /// Base defence + armour and shield bonuses.
    pub fn total_defence(&self) -> i32 {
        self.base.combat.defence + self.sum_modifiers(Item::defence_modifier)
    }

    /// Carrying capacity: base strength + ring strength bonuses.
    pub fn total_strength(&self) -> i32 {
        self.base.strength + self.sum_modifiers(Item::strength_modifier)
    }

    /// Health ceiling: base health + ring health deltas. May drop to zero or below.
    pub fn total_health(&self) -> i32 {
        self.base.health + self.sum_modifiers(Item::health_modifier)
    }

    pub fn current_weight(&self) -> i64 {
        self.equipment.weight()
    }

    pub fn attack_chance(&self) -> f32 {
        self.base.combat.attack_chance
    }

    pub fn defence_chance(&self) -> f32 {
        self.base.combat.defence_chance
    }

    fn sum_modifiers(&self, modifier: fn(&Item) -> i32) -> i32 {
        self.equipment.iter().map(modifier).sum()
    }

    /// Current health is zero or the health ceiling has collapsed.
    pub fn is_defeated(&self) -> bool {
        self.current_health <= 0 || self.total_health() <= 0
    }

    // ========================================================================
    // Equipment
    // ========================================================================

    /// Equips the item held in `source`.
    ///
    /// The item is moved out of `source` only on success; on any error
    /// `source` and the equipment are left exactly as they were. A weapon,
    /// armour or shield replaces the current occupant of its slot, which is
    /// returned in [`PickedUp::replaced`] for the caller to discard.
    pub fn pick_up(&mut self, source: &mut Option<Item>) -> Result<PickedUp, EquipError> {
        let candidate = source.as_ref().ok_or(EquipError::NothingToPickUp)?;

        let Some(slot) = EquipSlot::for_item(candidate) else {
            return Err(EquipError::NotEquippable {
                item: candidate.name.clone(),
            });
        };

        let carried = self.current_weight();
        let capacity = i64::from(self.total_strength());
        if carried + i64::from(candidate.weight) > capacity {
            return Err(EquipError::TooHeavy {
                item: candidate.name.clone(),
                weight: candidate.weight,
                carried,
                capacity,
            });
        }

        let Some(item) = source.take() else {
            return Err(EquipError::NothingToPickUp);
        };
        let name = item.name.clone();
        let replaced = match slot {
            EquipSlot::Weapon => self.equipment.equip_weapon(item),
            EquipSlot::Armor => self.equipment.equip_armor(item),
            EquipSlot::Shield => self.equipment.equip_shield(item),
            EquipSlot::Ring => {
                self.equipment.add_ring(item);
                None
            }
        };

        tracing::debug!(
            character = %self.name,
            item = %name,
            slot = %slot,
            weight = self.current_weight(),
            "item equipped"
        );

        Ok(PickedUp {
            slot,
            item: name,
            replaced,
        })
    }

    pub fn drop_weapon(&mut self) -> Result<Item, DropError> {
        self.equipment
            .unequip_weapon()
            .ok_or(DropError::NothingEquipped {
                slot: EquipSlot::Weapon,
            })
    }

    pub fn drop_armor(&mut self) -> Result<Item, DropError> {
        self.equipment
            .unequip_armor()
            .ok_or(DropError::NothingEquipped {
                slot: EquipSlot::Armor,
            })
    }

    pub fn drop_shield(&mut self) -> Result<Item, DropError> {
        self.equipment
            .unequip_shield()
            .ok_or(DropError::NothingEquipped {
                slot: EquipSlot::Shield,
            })
    }

    /// Removes the ring at 0-based `index`.
    ///
    /// Totals drop immediately; current health is left as is even if it now
    /// exceeds the lowered ceiling.
    pub fn drop_ring(&mut self, index: usize) -> Result<Item, DropError> {
        let count = self.equipment.rings.len();
        self.equipment
            .remove_ring(index)
            .ok_or(DropError::RingIndexOutOfRange { index, count })
    }

    pub fn drop(&mut self, target: DropTarget) -> Result<Item, DropError> {
        let dropped = match target {
            DropTarget::Weapon => self.drop_weapon(),
            DropTarget::Armor => self.drop_armor(),
            DropTarget::Shield => self.drop_shield(),
            DropTarget::Ring(index) => self.drop_ring(index),
        }?;
        tracing::debug!(character = %self.name, item = %dropped.name, "item dropped");
        Ok(dropped)
    }

    // ========================================================================
    // Day/night
    // ========================================================================

    /// Retunes the combat profile for `time`.
    ///
    /// Only clock-following races react; for everyone else this is a no-op.
    /// Equipment and current health are never touched. Returns true if the
    /// character switched phase.
    pub fn set_time_of_day(&mut self, time: TimeOfDay) -> bool {
        let Some(profile) = self.race.profile_at(time) else {
            return false;
        };
        self.base.combat = profile;
        let changed = self.time_of_day != Some(time);
        self.time_of_day = Some(time);
        changed
    }

    // ========================================================================
    // Health (combat only)
    // ========================================================================

    /// Lowers current health by `amount`, stopping at zero. Returns the loss.
    pub(crate) fn take_damage(&mut self, amount: i32) -> i32 {
        let before = self.current_health;
        self.current_health = (before - amount.max(0)).max(0);
        before - self.current_health
    }

    /// Raises current health by `amount`, stopping at the health ceiling.
    /// Returns the gain.
    pub(crate) fn heal(&mut self, amount: i32) -> i32 {
        let ceiling = self.total_health().max(0);
        let before = self.current_health;
        if before < ceiling {
            self.current_health = (before + amount.max(0)).min(ceiling);
        }
        self.current_health - before
    }

    /// Pulls current health back inside `[0, total_health]`.
    pub(crate) fn clamp_health(&mut self) {
        self.current_health = self.current_health.clamp(0, self.total_health().max(0));
    }

    // ========================================================================
    // Read accessors
    // ========================================================================

    pub fn stats(&self) -> StatLine {
        StatLine {
            name: self.name.clone(),
            race: self.race,
            attack: self.total_attack(),
            attack_chance: self.attack_chance(),
            defence: self.total_defence(),
            defence_chance: self.defence_chance(),
            health: self.total_health(),
            current_health: self.current_health,
            strength: self.total_strength(),
            weight: self.current_weight(),
            time_of_day: self.time_of_day,
        }
    }

    pub fn inventory_view(&self) -> InventoryView {
        InventoryView {
            weapon: self.equipment.weapon.clone(),
            armor: self.equipment.armor.clone(),
            shield: self.equipment.shield.clone(),
            rings: self.equipment.rings.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorSeverity, GameError};

    fn hand(item: Item) -> Option<Item> {
        Some(item)
    }

    #[test]
    fn totals_sum_equipment_modifiers() {
        let mut human = Character::new("Bob", Race::Human);
        human.pick_up(&mut hand(Item::weapon("Sword", 10, 10))).unwrap();
        human
            .pick_up(&mut hand(Item::armor("Plate Armor", 40, 10, 5)))
            .unwrap();
        human
            .pick_up(&mut hand(Item::shield("Small Shield", 10, 5, 0)))
            .unwrap();
        human
            .pick_up(&mut hand(Item::ring("Ring of Strength", 1, -10, 50)))
            .unwrap();

        // 30 + 10 - 5 - 0 + 50
        assert_eq!(human.total_attack(), 85);
        assert_eq!(human.total_defence(), 35);
        assert_eq!(human.total_strength(), 150);
        assert_eq!(human.total_health(), 50);
        assert_eq!(human.current_weight(), 61);
    }

    #[test]
    fn pickup_moves_the_item_out_of_its_source() {
        let mut elf = Character::new("Legolas", Race::Elf);
        let mut cell = Some(Item::weapon("Dagger", 5, 5));

        let picked = elf.pick_up(&mut cell).unwrap();

        assert!(cell.is_none());
        assert_eq!(picked.slot, EquipSlot::Weapon);
        assert_eq!(picked.item, "Dagger");
        assert!(picked.replaced.is_none());
    }

    #[test]
    fn overweight_pickup_is_rejected_without_side_effects() {
        let mut human = Character::new("Bob", Race::Human);
        human
            .pick_up(&mut hand(Item::armor("Plate Armor", 40, 10, 5)))
            .unwrap();
        human
            .pick_up(&mut hand(Item::shield("Large Shield", 30, 10, 5)))
            .unwrap();
        let before = human.clone();

        // 40 + 30 + 31 = 101 > 100
        let mut cell = Some(Item::weapon("Anvil", 31, 1));
        let err = human.pick_up(&mut cell).unwrap_err();

        assert!(matches!(err, EquipError::TooHeavy { carried: 70, capacity: 100, .. }));
        assert_eq!(err.severity(), ErrorSeverity::Recoverable);
        assert!(cell.is_some());
        assert_eq!(human, before);
    }

    #[test]
    fn exact_capacity_is_allowed() {
        let mut hobbit = Character::new("Frodo", Race::Hobbit);
        hobbit
            .pick_up(&mut hand(Item::armor("Mithril", 85, 5, 0)))
            .unwrap();
        assert_eq!(hobbit.current_weight(), i64::from(hobbit.total_strength()));
    }

    #[test]
    fn trinkets_cannot_be_equipped() {
        let mut dwarf = Character::new("Gimli", Race::Dwarf);
        let mut cell = Some(Item::trinket("Pebble", 1));

        let err = dwarf.pick_up(&mut cell).unwrap_err();

        assert_eq!(err.error_code(), "EQUIP_NOT_EQUIPPABLE");
        assert!(cell.is_some());
        assert!(dwarf.equipment().is_empty());
    }

    #[test]
    fn empty_source_reports_nothing_to_pick_up() {
        let mut dwarf = Character::new("Gimli", Race::Dwarf);
        assert_eq!(dwarf.pick_up(&mut None), Err(EquipError::NothingToPickUp));
    }

    #[test]
    fn replacing_a_slot_returns_the_old_item() {
        let mut human = Character::new("Bob", Race::Human);
        human.pick_up(&mut hand(Item::weapon("Dagger", 5, 5))).unwrap();
        let picked = human.pick_up(&mut hand(Item::weapon("Sword", 10, 10))).unwrap();

        assert_eq!(picked.replaced.map(|item| item.name).as_deref(), Some("Dagger"));
        assert_eq!(human.total_attack(), 40);
    }

    #[test]
    fn drops_report_empty_slots() {
        let mut human = Character::new("Bob", Race::Human);
        assert_eq!(
            human.drop_shield(),
            Err(DropError::NothingEquipped {
                slot: EquipSlot::Shield
            })
        );

        human.pick_up(&mut hand(Item::weapon("Sword", 10, 10))).unwrap();
        let sword = human.drop(DropTarget::Weapon).unwrap();
        assert_eq!(sword.name, "Sword");
        assert!(human.equipment().weapon.is_none());
    }

    #[test]
    fn ring_drop_lowers_ceilings_but_not_current_health() {
        let mut orc = Character::new("Azog", Race::Orc);
        orc.pick_up(&mut hand(Item::ring("Ring of Life", 1, 10, 0)))
            .unwrap();
        orc.heal(10);
        assert_eq!(orc.current_health(), 60);

        let err = orc.drop_ring(1).unwrap_err();
        assert_eq!(err, DropError::RingIndexOutOfRange { index: 1, count: 1 });

        orc.drop_ring(0).unwrap();
        assert_eq!(orc.total_health(), 50);
        assert_eq!(orc.current_health(), 60);
    }

    #[test]
    fn orc_day_night_round_trip_restores_day_profile() {
        let mut orc = Character::new("Azog", Race::Orc);
        orc.pick_up(&mut hand(Item::weapon("Sword", 10, 10))).unwrap();
        let day = *orc.base();

        assert!(orc.set_time_of_day(TimeOfDay::Night));
        assert_eq!(orc.base().combat, ORC_NIGHT);
        assert_eq!(orc.total_attack(), 55);
        assert_eq!(orc.current_health(), 50);

        assert!(orc.set_time_of_day(TimeOfDay::Day));
        assert_eq!(*orc.base(), day);
        assert!(!orc.set_time_of_day(TimeOfDay::Day));
    }

    #[test]
    fn other_races_ignore_the_clock() {
        let mut elf = Character::new("Legolas", Race::Elf);
        assert!(!elf.set_time_of_day(TimeOfDay::Night));
        assert_eq!(*elf.base(), Race::Elf.base_stats());
        assert_eq!(elf.time_of_day(), None);
    }

    #[test]
    fn health_helpers_stay_in_bounds() {
        let mut hobbit = Character::new("Frodo", Race::Hobbit);
        assert_eq!(hobbit.take_damage(100), 70);
        assert_eq!(hobbit.current_health(), 0);
        assert!(hobbit.is_defeated());

        assert_eq!(hobbit.heal(500), 70);
        assert_eq!(hobbit.heal(1), 0);
    }

    #[test]
    fn collapsed_health_ceiling_counts_as_defeat() {
        let mut elf = Character::new("Legolas", Race::Elf);
        for _ in 0..4 {
            elf.pick_up(&mut hand(Item::ring("Ring of Strength", 1, -10, 50)))
                .unwrap();
        }
        assert_eq!(elf.total_health(), 0);
        assert!(elf.is_defeated());
    }

    #[test]
    fn from_race_name_parses_the_race() {
        let orc = Character::from_race_name("Azog", "Orc").unwrap();
        assert_eq!(orc.race(), Race::Orc);
        assert_eq!(orc.time_of_day(), Some(TimeOfDay::Day));
        assert!(Character::from_race_name("Nobody", "troll").is_err());
    }
}
