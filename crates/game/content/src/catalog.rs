//! Standard item catalog.
//!
//! Items are handed out as fresh owned values because they are moved onto the
//! board and into equipment.

use game_core::Item;

/// Every item in the standard catalog.
///
/// | Item | Kind | Weight | Modifiers |
/// |---|---|---|---|
/// | Sword | Weapon | 10 | attack +10 |
/// | Dagger | Weapon | 5 | attack +5 |
/// | Plate Armor | Armor | 40 | defence +10, attack -5 |
/// | Leather Armor | Armor | 20 | defence +5 |
/// | Large Shield | Shield | 30 | defence +10, attack -5 |
/// | Small Shield | Shield | 10 | defence +5 |
/// | Ring of Life | Ring | 1 | health +10 |
/// | Ring of Strength | Ring | 1 | health -10, strength +50 |
pub fn standard_items() -> Vec<Item> {
    vec![
        Item::weapon("Sword", 10, 10),
        Item::weapon("Dagger", 5, 5),
        Item::armor("Plate Armor", 40, 10, 5),
        Item::armor("Leather Armor", 20, 5, 0),
        Item::shield("Large Shield", 30, 10, 5),
        Item::shield("Small Shield", 10, 5, 0),
        Item::ring("Ring of Life", 1, 10, 0),
        Item::ring("Ring of Strength", 1, -10, 50),
    ]
}

/// Looks up a catalog item by name, ignoring ASCII case.
pub fn find_item(name: &str) -> Option<Item> {
    standard_items()
        .into_iter()
        .find(|item| item.name.eq_ignore_ascii_case(name))
}

/// The six items a standard game scatters across the board.
pub fn starter_loot() -> Vec<Item> {
    [
        "Sword",
        "Dagger",
        "Leather Armor",
        "Plate Armor",
        "Ring of Life",
        "Ring of Strength",
    ]
    .into_iter()
    .filter_map(find_item)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::ItemCategory;

    #[test]
    fn catalog_covers_every_equippable_kind() {
        let items = standard_items();
        assert_eq!(items.len(), 8);
        for category in [
            ItemCategory::Weapon,
            ItemCategory::Armor,
            ItemCategory::Shield,
            ItemCategory::Ring,
        ] {
            assert_eq!(
                items.iter().filter(|item| item.category() == category).count(),
                2
            );
        }
    }

    #[test]
    fn lookup_ignores_case() {
        let ring = find_item("ring of strength").unwrap();
        assert_eq!(ring.strength_modifier(), 50);
        assert_eq!(ring.health_modifier(), -10);
        assert!(find_item("Excalibur").is_none());
    }

    #[test]
    fn starter_loot_has_no_shields() {
        let loot = starter_loot();
        assert_eq!(loot.len(), 6);
        assert!(loot.iter().all(|item| item.category() != ItemCategory::Shield));
    }
}
