//! Turn engine.
//!
//! [`GameWorld`] owns everything a running game needs: the board, the player,
//! the enemy roster, gold and the command counter. A shell feeds it one
//! [`Command`] at a time through [`GameWorld::execute`] and renders the
//! returned [`TurnReport`].
//!
//! Each command:
//! 1. is rejected once the game is over
//! 2. lifts the player marker off its cell
//! 3. runs (move, pick up, attack, drop, look, inventory)
//! 4. counts toward the day/night clock, retuning every Orc on a phase change
//! 5. puts the player marker back at the (possibly new) position

mod command;
mod errors;
mod events;

pub use command::{Command, parse_script};
pub use errors::{CommandError, ParseCommandError};
pub use events::{GameStatus, TurnEvent, TurnReport};

use crate::board::{Board, PopulateError};
use crate::character::{Character, DropTarget};
use crate::clock::{DayNightCycle, TimeOfDay};
use crate::combat::resolve_attack;
use crate::config::GameConfig;
use crate::dice::Dice;
use crate::ids::{Direction, EntityId, Position};
use crate::item::Item;

/// World state for one game.
#[derive(Clone, Debug)]
pub struct GameWorld {
    config: GameConfig,
    cycle: DayNightCycle,
    board: Board,
    player: Character,
    enemies: Vec<Character>,
    player_position: Position,
    gold: u32,
    commands_taken: u64,
    time_of_day: TimeOfDay,
    status: GameStatus,
}

impl GameWorld {
    /// Builds the board, scatters `enemies` and `items` across it and puts the
    /// player on the top-left cell.
    ///
    /// Enemy `i` of the roster is known on the board as [`EntityId::enemy(i)`](EntityId::enemy).
    pub fn new(
        config: GameConfig,
        player: Character,
        enemies: Vec<Character>,
        items: Vec<Item>,
        dice: &mut (impl Dice + ?Sized),
    ) -> Result<Self, PopulateError> {
        let mut board = Board::new(config.board_width, config.board_height)?;
        let ids: Vec<EntityId> = (0..enemies.len()).map(EntityId::enemy).collect();
        board.populate_with(&ids, items, dice)?;

        let cycle = DayNightCycle::new(config.day_length);
        let mut world = Self {
            config,
            cycle,
            board,
            player,
            enemies,
            player_position: Position::ORIGIN,
            gold: 0,
            commands_taken: 0,
            time_of_day: cycle.phase_at(0),
            status: GameStatus::Ongoing,
        };

        world.apply_time_of_day(world.time_of_day);
        if world.board.enemies_remaining() == 0 {
            world.status = GameStatus::Won;
        }
        world.place_player();

        tracing::info!(
            player = %world.player.name(),
            race = %world.player.race(),
            enemies = world.enemies.len(),
            width = world.config.board_width,
            height = world.config.board_height,
            "world created"
        );

        Ok(world)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self) -> &Character {
        &self.player
    }

    pub fn enemies(&self) -> &[Character] {
        &self.enemies
    }

    pub fn enemy(&self, id: EntityId) -> Option<&Character> {
        id.enemy_index().and_then(|index| self.enemies.get(index))
    }

    pub fn player_position(&self) -> Position {
        self.player_position
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn commands_taken(&self) -> u64 {
        self.commands_taken
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        self.time_of_day
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    // ========================================================================
    // Turn execution
    // ========================================================================

    /// Executes one command.
    pub fn execute(
        &mut self,
        command: Command,
        dice: &mut (impl Dice + ?Sized),
    ) -> Result<TurnReport, CommandError> {
        if self.status.is_over() {
            return Err(CommandError::GameOver {
                status: self.status,
            });
        }

        self.lift_player();

        let mut events = Vec::new();
        match command {
            Command::Move(direction) => self.move_player(direction, &mut events),
            Command::PickUp => self.pick_up(&mut events),
            Command::Attack => self.attack(dice, &mut events),
            Command::Drop(target) => self.drop(target, &mut events),
            Command::Look => {
                if let Some(cell) = self.board.cell_view(self.player_position) {
                    events.push(TurnEvent::Looked { cell });
                }
            }
            Command::Inventory => events.push(TurnEvent::InventoryChecked {
                inventory: self.player.inventory_view(),
                gold: self.gold,
            }),
        }

        self.commands_taken += 1;
        self.advance_clock(&mut events);
        self.place_player();

        tracing::debug!(
            %command,
            events = events.len(),
            status = %self.status,
            "command executed"
        );

        Ok(TurnReport {
            command,
            events,
            status: self.status,
            time_of_day: self.time_of_day,
            player_position: self.player_position,
        })
    }

    fn lift_player(&mut self) {
        if let Some(cell) = self.board.at_mut(self.player_position) {
            cell.player = None;
        }
    }

    fn place_player(&mut self) {
        if let Some(cell) = self.board.at_mut(self.player_position) {
            cell.player = Some(EntityId::PLAYER);
        }
    }

    fn move_player(&mut self, direction: Direction, events: &mut Vec<TurnEvent>) {
        let from = self.player_position;
        let Some(to) = from.step(direction, self.board.width(), self.board.height()) else {
            events.push(TurnEvent::EdgeReached { direction });
            return;
        };

        self.player_position = to;
        events.push(TurnEvent::Moved {
            direction,
            from,
            to,
        });

        let Some(cell) = self.board.at(to) else {
            return;
        };
        if let Some(enemy) = cell.enemy {
            if let Some(character) = self.enemy(enemy) {
                events.push(TurnEvent::EnemySpotted {
                    enemy,
                    stats: character.stats(),
                });
            }
        }
        if let Some(item) = &cell.item {
            events.push(TurnEvent::ItemSpotted { item: item.clone() });
        }
    }

    fn pick_up(&mut self, events: &mut Vec<TurnEvent>) {
        let mut empty = None;
        let source = match self.board.at_mut(self.player_position) {
            Some(cell) => &mut cell.item,
            None => &mut empty,
        };

        match self.player.pick_up(source) {
            Ok(picked) => events.push(TurnEvent::PickedUp {
                item: picked.item,
                slot: picked.slot,
                discarded: picked.replaced,
            }),
            Err(error) => {
                tracing::info!(%error, "pickup rejected");
                events.push(TurnEvent::PickupRejected { error });
            }
        }
    }

    fn attack(&mut self, dice: &mut (impl Dice + ?Sized), events: &mut Vec<TurnEvent>) {
        let position = self.player_position;
        let target = self.board.at(position).and_then(|cell| cell.enemy);
        let Some((id, enemy)) = target.and_then(|id| {
            id.enemy_index()
                .and_then(|index| self.enemies.get_mut(index))
                .map(|enemy| (id, enemy))
        }) else {
            events.push(TurnEvent::NoEnemyHere);
            return;
        };

        let result = resolve_attack(&self.player, enemy, dice);
        events.push(TurnEvent::Attack {
            attacker: EntityId::PLAYER,
            defender: id,
            result,
        });

        if result.defeated {
            if let Some(cell) = self.board.at_mut(position) {
                cell.enemy = None;
            }
            let gold = self.config.gold_per_kill;
            self.gold = self.gold.saturating_add(gold);
            tracing::info!(enemy = %enemy.name(), gold = self.gold, "enemy defeated");
            events.push(TurnEvent::EnemyDefeated {
                enemy: id,
                name: enemy.name().to_string(),
                gold,
            });

            if self.board.enemies_remaining() == 0 {
                tracing::info!(gold = self.gold, "all enemies defeated");
                self.status = GameStatus::Won;
                events.push(TurnEvent::Victory);
            }
            return;
        }

        let counter = resolve_attack(enemy, &mut self.player, dice);
        events.push(TurnEvent::Attack {
            attacker: id,
            defender: EntityId::PLAYER,
            result: counter,
        });

        if counter.defeated {
            tracing::info!(player = %self.player.name(), "player defeated");
            self.status = GameStatus::Lost;
            events.push(TurnEvent::PlayerDefeated);
        }
    }

    fn drop(&mut self, target: DropTarget, events: &mut Vec<TurnEvent>) {
        match self.player.drop(target) {
            Ok(item) => events.push(TurnEvent::Dropped { item }),
            Err(error) => {
                tracing::info!(%error, "drop rejected");
                events.push(TurnEvent::DropRejected { error });
            }
        }
    }

    // ========================================================================
    // Day/night
    // ========================================================================

    fn advance_clock(&mut self, events: &mut Vec<TurnEvent>) {
        let phase = self.cycle.phase_at(self.commands_taken);
        if phase == self.time_of_day {
            return;
        }

        self.time_of_day = phase;
        let orcs = self.apply_time_of_day(phase);
        tracing::info!(time = %phase, orcs, "time of day changed");
        events.push(TurnEvent::TimeChanged { time: phase, orcs });
    }

    /// Retunes the player and every enemy still on the board. Returns how many
    /// characters changed phase.
    fn apply_time_of_day(&mut self, time: TimeOfDay) -> usize {
        let mut changed = usize::from(self.player.set_time_of_day(time));
        for (_, id) in self.board.enemies() {
            let Some(enemy) = id.enemy_index().and_then(|index| self.enemies.get_mut(index))
            else {
                continue;
            };
            changed += usize::from(enemy.set_time_of_day(time));
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Race;
    use crate::combat::AttackOutcome;
    use crate::dice::ScriptedDice;

    /// A 3x3 world with one enemy at (0,1) and one item at (1,0).
    fn small_world(enemy: Race, item: Item) -> GameWorld {
        let config = GameConfig::new().with_board(3, 3);
        // Enemy at (0,1); item at (1,0).
        let mut placement = ScriptedDice::new().with_ints([0, 1, 1, 0]);
        GameWorld::new(
            config,
            Character::new("Hero", Race::Human),
            vec![Character::new("Foe", enemy)],
            vec![item],
            &mut placement,
        )
        .unwrap()
    }

    #[test]
    fn new_world_places_player_at_origin() {
        let world = small_world(Race::Human, Item::weapon("Sword", 10, 10));
        assert_eq!(world.player_position(), Position::ORIGIN);
        assert_eq!(world.board().render_rows()[0], "|#||*|| |");
        assert_eq!(world.board().render_rows()[1], "|+|| || |");
        assert_eq!(world.status(), GameStatus::Ongoing);
    }

    #[test]
    fn moving_off_the_board_reports_the_edge() {
        let mut world = small_world(Race::Human, Item::weapon("Sword", 10, 10));
        let report = world
            .execute(Command::Move(Direction::Up), &mut ScriptedDice::new())
            .unwrap();

        assert_eq!(
            report.events,
            vec![TurnEvent::EdgeReached {
                direction: Direction::Up
            }]
        );
        assert_eq!(world.player_position(), Position::ORIGIN);
        assert_eq!(world.commands_taken(), 1);
    }

    #[test]
    fn moving_onto_an_item_spots_it_and_pickup_moves_it() {
        let mut world = small_world(Race::Human, Item::weapon("Sword", 10, 10));
        let mut dice = ScriptedDice::new();

        let report = world.execute(Command::Move(Direction::Down), &mut dice).unwrap();
        assert!(matches!(report.events[1], TurnEvent::ItemSpotted { .. }));

        let report = world.execute(Command::PickUp, &mut dice).unwrap();
        assert!(matches!(report.events[0], TurnEvent::PickedUp { .. }));
        assert!(world.board().at(Position::new(1, 0)).unwrap().item.is_none());
        assert_eq!(world.player().total_attack(), 40);

        let report = world.execute(Command::PickUp, &mut dice).unwrap();
        assert_eq!(
            report.events,
            vec![TurnEvent::PickupRejected {
                error: crate::character::EquipError::NothingToPickUp
            }]
        );
    }

    #[test]
    fn rejected_pickup_leaves_the_item_on_the_board() {
        let mut world = small_world(Race::Human, Item::armor("Anvil", 101, 0, 0));
        let mut dice = ScriptedDice::new();
        world.execute(Command::Move(Direction::Down), &mut dice).unwrap();

        let report = world.execute(Command::PickUp, &mut dice).unwrap();

        assert!(matches!(report.events[0], TurnEvent::PickupRejected { .. }));
        assert!(world.board().at(Position::new(1, 0)).unwrap().item.is_some());
        assert!(world.player().equipment().is_empty());
    }

    #[test]
    fn defeating_the_last_enemy_wins() {
        let mut world = small_world(Race::Hobbit, Item::weapon("Sword", 10, 10));
        let mut dice = ScriptedDice::new();
        world.execute(Command::Move(Direction::Right), &mut dice).unwrap();

        // Human 30 vs hobbit defence 20: ten per clean hit, seven hits.
        let mut report = None;
        for _ in 0..7 {
            // Player hit lands, defence fails; counter-attack misses.
            let mut rolls = ScriptedDice::new().with_units([0.0, 0.99, 0.99]);
            report = Some(world.execute(Command::Attack, &mut rolls).unwrap());
        }
        let report = report.unwrap();

        assert_eq!(report.status, GameStatus::Won);
        assert!(report.events.contains(&TurnEvent::Victory));
        assert_eq!(world.gold(), 20);
        assert_eq!(world.board().enemies_remaining(), 0);
        assert_eq!(
            world.execute(Command::Look, &mut dice),
            Err(CommandError::GameOver {
                status: GameStatus::Won
            })
        );
    }

    #[test]
    fn surviving_enemy_counter_attacks() {
        let mut world = small_world(Race::Orc, Item::weapon("Sword", 10, 10));
        let mut dice = ScriptedDice::new().with_units([0.9, 0.0, 0.99]);
        world.execute(Command::Move(Direction::Right), &mut ScriptedDice::new()).unwrap();

        let report = world.execute(Command::Attack, &mut dice).unwrap();
        let outcomes: Vec<_> = report.attacks().map(|result| result.outcome).collect();

        // Player misses; the day Orc (25) hits the human (20) for 5.
        assert_eq!(
            outcomes,
            vec![AttackOutcome::Missed, AttackOutcome::Damaged { amount: 5 }]
        );
        assert_eq!(world.player().current_health(), 55);
    }

    #[test]
    fn attacking_an_empty_cell_reports_no_enemy() {
        let mut world = small_world(Race::Elf, Item::weapon("Sword", 10, 10));
        let report = world.execute(Command::Attack, &mut ScriptedDice::new()).unwrap();
        assert_eq!(report.events, vec![TurnEvent::NoEnemyHere]);
    }

    #[test]
    fn player_death_ends_the_game() {
        let config = GameConfig::new().with_board(2, 1);
        let mut placement = ScriptedDice::new().with_ints([0, 0]);
        let mut world = GameWorld::new(
            config,
            Character::new("Hero", Race::Hobbit).with_current_health(1),
            vec![Character::new("Brute", Race::Human)],
            Vec::new(),
            &mut placement,
        )
        .unwrap();

        // Hobbit misses, human hits for 30 - 20.
        let mut dice = ScriptedDice::new().with_units([0.9, 0.0, 0.99]);
        let report = world.execute(Command::Attack, &mut dice).unwrap();

        assert_eq!(report.status, GameStatus::Lost);
        assert_eq!(report.events.last(), Some(&TurnEvent::PlayerDefeated));
        assert!(world.is_over());
    }

    #[test]
    fn clock_retunes_orcs_including_the_player() {
        let config = GameConfig::new().with_board(3, 3).with_day_length(2);
        let mut placement = ScriptedDice::new().with_ints([2, 2]);
        let mut world = GameWorld::new(
            config,
            Character::new("Grom", Race::Orc),
            vec![Character::new("Azog", Race::Orc)],
            Vec::new(),
            &mut placement,
        )
        .unwrap();
        let mut dice = ScriptedDice::new();

        let first = world.execute(Command::Look, &mut dice).unwrap();
        assert!(!first.time_changed());

        let second = world.execute(Command::Look, &mut dice).unwrap();
        assert!(second.events.contains(&TurnEvent::TimeChanged {
            time: TimeOfDay::Night,
            orcs: 2
        }));
        assert_eq!(world.player().total_attack(), 45);
        assert_eq!(world.enemy(EntityId(1)).unwrap().total_attack(), 45);

        world.execute(Command::Inventory, &mut dice).unwrap();
        let fourth = world.execute(Command::Inventory, &mut dice).unwrap();
        assert_eq!(fourth.time_of_day, TimeOfDay::Day);
        assert_eq!(world.player().total_attack(), 25);
    }

    #[test]
    fn drop_commands_report_outcomes() {
        let mut world = small_world(Race::Elf, Item::ring("Ring of Life", 1, 10, 0));
        let mut dice = ScriptedDice::new();

        let report = world.execute(Command::Drop(DropTarget::Ring(0)), &mut dice).unwrap();
        assert!(matches!(report.events[0], TurnEvent::DropRejected { .. }));

        world.execute(Command::Move(Direction::Down), &mut dice).unwrap();
        world.execute(Command::PickUp, &mut dice).unwrap();
        let report = world.execute(Command::Drop(DropTarget::Ring(0)), &mut dice).unwrap();
        assert!(matches!(&report.events[0], TurnEvent::Dropped { item } if item.name == "Ring of Life"));
    }

    #[test]
    fn look_and_inventory_report_state() {
        let mut world = small_world(Race::Elf, Item::weapon("Sword", 10, 10));
        let mut dice = ScriptedDice::new();
        world.execute(Command::Move(Direction::Right), &mut dice).unwrap();

        let report = world.execute(Command::Look, &mut dice).unwrap();
        let TurnEvent::Looked { cell } = &report.events[0] else {
            panic!("expected a look event, got {:?}", report.events);
        };
        assert_eq!(cell.enemy, Some(EntityId(1)));

        let report = world.execute(Command::Inventory, &mut dice).unwrap();
        assert!(matches!(
            &report.events[0],
            TurnEvent::InventoryChecked { gold: 0, inventory } if inventory.is_empty()
        ));
    }

    #[test]
    fn gold_saturates_instead_of_overflowing() {
        let config = GameConfig::new().with_board(2, 1).with_gold_per_kill(u32::MAX);
        let mut placement = ScriptedDice::new().with_ints([0, 0, 0, 1]);
        let mut world = GameWorld::new(
            config,
            Character::new("Hero", Race::Elf),
            vec![
                Character::new("First", Race::Human).with_current_health(1),
                Character::new("Second", Race::Human).with_current_health(1),
            ],
            Vec::new(),
            &mut placement,
        )
        .unwrap();
        let mut dice = ScriptedDice::new();

        // Attack lands, defence fails; one hit finishes each enemy.
        let mut hit = ScriptedDice::new().with_units([0.0, 0.99]);
        world.execute(Command::Attack, &mut hit).unwrap();
        assert_eq!(world.gold(), u32::MAX);

        world.execute(Command::Move(Direction::Right), &mut dice).unwrap();
        let mut hit = ScriptedDice::new().with_units([0.0, 0.99]);
        let report = world.execute(Command::Attack, &mut hit).unwrap();

        assert_eq!(report.status, GameStatus::Won);
        assert_eq!(world.gold(), u32::MAX);
    }

    #[test]
    fn oversized_board_is_rejected_before_allocating() {
        let result = GameWorld::new(
            GameConfig::new().with_board(usize::MAX, usize::MAX),
            Character::new("Hero", Race::Human),
            Vec::new(),
            Vec::new(),
            &mut ScriptedDice::new(),
        );
        assert!(matches!(result, Err(PopulateError::TooLarge { .. })));
    }

    #[test]
    fn overfull_board_is_rejected() {
        let result = GameWorld::new(
            GameConfig::new().with_board(2, 2),
            Character::new("Hero", Race::Human),
            (0..3).map(|n| Character::new(format!("Foe {n}"), Race::Elf)).collect(),
            vec![Item::weapon("Sword", 10, 10), Item::weapon("Dagger", 5, 5)],
            &mut ScriptedDice::new(),
        );
        assert!(matches!(
            result,
            Err(PopulateError::InsufficientCapacity {
                free_cells: 4,
                required: 5
            })
        ));
    }
}
