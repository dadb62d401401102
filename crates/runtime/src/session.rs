//! Command-driven game session.
//!
//! The session owns the world and the dice. Each command is executed, every
//! resulting event is logged, and the report is handed back to the caller.

use game_content::{ItemLoader, RosterLoader, default_enemies, starter_loot};
use game_core::dice::clock_seed;
use game_core::{
    AttackOutcome, Character, Command, EntityId, GameStatus, GameWorld, RngDice, TimeOfDay, TurnEvent,
    TurnReport, parse_script,
};

use crate::config::RuntimeConfig;
use crate::error::Result;

/// Snapshot of a session after a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    pub commands_executed: usize,
    pub gold: u32,
    pub status: GameStatus,
    pub player_health: i32,
    pub player_max_health: i32,
    pub enemies_remaining: usize,
    pub time_of_day: TimeOfDay,
}

/// A running game.
pub struct Session {
    world: GameWorld,
    dice: RngDice,
    seed: u64,
}

impl Session {
    /// Builds a world from the configured roster and loot and places the player.
    pub fn start(config: RuntimeConfig) -> Result<Self> {
        let seed = config.seed.unwrap_or_else(clock_seed);
        let mut dice = RngDice::seeded(seed);

        let enemies = match &config.roster_path {
            Some(path) => RosterLoader::load_enemies(path)?,
            None => default_enemies(),
        };
        let items = match &config.items_path {
            Some(path) => ItemLoader::load(path)?,
            None => starter_loot(),
        };
        let player = Character::new(config.player_name, config.player_race);

        let world = GameWorld::new(config.game, player, enemies, items, &mut dice)?;
        tracing::info!(seed, "session started");

        Ok(Self { world, dice, seed })
    }

    pub fn world(&self) -> &GameWorld {
        &self.world
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Executes one command and logs what happened.
    pub fn execute(&mut self, command: Command) -> Result<TurnReport> {
        let report = self.world.execute(command, &mut self.dice)?;
        for event in &report.events {
            log_event(&self.world, event);
        }
        Ok(report)
    }

    /// Executes commands until they run out or the game ends.
    pub fn run_script(
        &mut self,
        commands: impl IntoIterator<Item = Command>,
    ) -> Result<SessionSummary> {
        let mut executed = 0;
        for command in commands {
            if self.world.is_over() {
                tracing::info!(%command, "game over, ignoring remaining commands");
                break;
            }
            self.execute(command)?;
            executed += 1;
        }

        let summary = self.summary(executed);
        tracing::info!(
            commands = summary.commands_executed,
            gold = summary.gold,
            status = %summary.status,
            "script finished"
        );
        Ok(summary)
    }

    /// Parses a compact script such as `"ddsjg"` and runs it.
    pub fn run_script_str(&mut self, script: &str) -> Result<SessionSummary> {
        let commands = parse_script(script)?;
        self.run_script(commands)
    }

    pub fn summary(&self, commands_executed: usize) -> SessionSummary {
        let player = self.world.player();
        SessionSummary {
            commands_executed,
            gold: self.world.gold(),
            status: self.world.status(),
            player_health: player.current_health(),
            player_max_health: player.total_health(),
            enemies_remaining: self.world.board().enemies_remaining(),
            time_of_day: self.world.time_of_day(),
        }
    }
}

fn character_name(world: &GameWorld, id: EntityId) -> &str {
    if id == EntityId::PLAYER {
        world.player().name()
    } else {
        world.enemy(id).map(Character::name).unwrap_or("?")
    }
}

fn log_event(world: &GameWorld, event: &TurnEvent) {
    let name = |id| character_name(world, id);

    match event {
        TurnEvent::Moved { to, .. } => tracing::debug!(%to, "moved"),
        TurnEvent::EdgeReached { direction } => {
            tracing::info!(%direction, "cannot move past the edge of the board")
        }
        TurnEvent::EnemySpotted { stats, .. } => tracing::info!(enemy = %stats, "enemy encountered"),
        TurnEvent::ItemSpotted { item } => tracing::info!(%item, "item found"),
        TurnEvent::PickedUp {
            item,
            slot,
            discarded,
        } => tracing::info!(
            item = %item,
            %slot,
            discarded = discarded.as_ref().map(|item| item.name.as_str()),
            "picked up"
        ),
        TurnEvent::PickupRejected { error } => tracing::info!(%error, "pickup failed"),
        TurnEvent::Attack {
            attacker,
            defender,
            result,
        } => {
            let (attacker, defender) = (name(*attacker), name(*defender));
            match result.outcome {
                AttackOutcome::Missed => tracing::info!(attacker, defender, "missed"),
                AttackOutcome::Defended(reaction) => {
                    tracing::info!(attacker, defender, ?reaction, "defended")
                }
                AttackOutcome::Blocked => tracing::info!(attacker, defender, "blocked"),
                AttackOutcome::Damaged { amount } => tracing::info!(
                    attacker,
                    defender,
                    amount,
                    health = result.defender_health,
                    "hit"
                ),
            }
        }
        TurnEvent::NoEnemyHere => tracing::info!("no enemy to attack"),
        TurnEvent::EnemyDefeated { name, gold, .. } => {
            tracing::info!(enemy = %name, gold, "enemy defeated")
        }
        TurnEvent::Dropped { item } => tracing::info!(item = %item.name, "dropped"),
        TurnEvent::DropRejected { error } => tracing::info!(%error, "drop failed"),
        TurnEvent::Looked { cell } => tracing::info!(
            position = %cell.position,
            enemy = cell.enemy.map(|id| character_name(world, id)),
            item = cell.item.as_ref().map(|item| item.name.as_str()),
            "look"
        ),
        TurnEvent::InventoryChecked { inventory, gold } => tracing::info!(
            weapon = inventory.weapon.as_ref().map(|item| item.name.as_str()),
            items = inventory.items().count(),
            gold,
            "inventory"
        ),
        TurnEvent::TimeChanged { time, orcs } => tracing::info!(%time, orcs, "time changed"),
        TurnEvent::Victory => tracing::info!("all enemies defeated"),
        TurnEvent::PlayerDefeated => tracing::warn!("player defeated"),
    }
}
