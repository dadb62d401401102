//! End-to-end sessions driven through the public runtime API.

use std::path::{Path, PathBuf};

use game_core::{
    Command, Direction, EntityId, GameStatus, PopulateError, Position, Race, TimeOfDay,
};
use runtime::{RuntimeConfig, RuntimeError, Session};

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// A session on a tiny board with a custom roster and item catalog.
fn tiny_session(
    dir: &Path,
    width: usize,
    height: usize,
    roster: &str,
    items: &str,
    player: Race,
) -> Session {
    let mut config = RuntimeConfig::default()
        .with_player("Tester", player)
        .with_board(width, height)
        .with_seed(2024);
    config.roster_path = Some(write(dir, "roster.ron", roster));
    config.items_path = Some(write(dir, "items.ron", items));
    Session::start(config).unwrap()
}

fn walk_to(target: Position) -> Vec<Command> {
    let mut commands = vec![Command::Move(Direction::Down); target.row];
    commands.extend(vec![Command::Move(Direction::Right); target.col]);
    commands
}

#[test]
fn duel_runs_until_someone_falls() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = tiny_session(
        dir.path(),
        1,
        2,
        r#"[(name: "Bob", race: Human)]"#,
        "(items: [])",
        Race::Elf,
    );

    let enemy_at = session
        .world()
        .board()
        .find_enemy(EntityId::enemy(0))
        .unwrap();
    let mut script = walk_to(enemy_at);
    script.extend([Command::Attack; 500]);

    let summary = session.run_script(script).unwrap();

    assert!(summary.status.is_over());
    assert!(summary.commands_executed < 500 + enemy_at.row);
    match summary.status {
        GameStatus::Won => {
            assert_eq!(summary.gold, 20);
            assert_eq!(summary.enemies_remaining, 0);
            assert!(summary.player_health > 0);
        }
        GameStatus::Lost => {
            assert_eq!(summary.gold, 0);
            assert_eq!(summary.player_health, 0);
            assert_eq!(summary.enemies_remaining, 1);
        }
        GameStatus::Ongoing => unreachable!(),
    }
}

#[test]
fn picked_up_item_leaves_the_board() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = tiny_session(
        dir.path(),
        2,
        1,
        r#"[(name: "Frodo", race: Hobbit)]"#,
        r#"(items: [(name: "Dagger", weight: 5, kind: Weapon((attack_bonus: 5)))])"#,
        Race::Dwarf,
    );

    let item_at = session
        .world()
        .board()
        .iter()
        .find(|(_, cell)| cell.item.is_some())
        .map(|(position, _)| position)
        .unwrap();
    let mut script = walk_to(item_at);
    script.push(Command::PickUp);

    session.run_script(script).unwrap();

    let world = session.world();
    assert!(world.board().at(item_at).unwrap().item.is_none());
    assert_eq!(world.player().total_attack(), 35);
    assert_eq!(
        world.player().equipment().weapon.as_ref().map(|item| item.name.as_str()),
        Some("Dagger")
    );
}

#[test]
fn orc_player_turns_with_the_clock() {
    let config = RuntimeConfig::default()
        .with_player("Grom", Race::Orc)
        .with_seed(11);
    let mut session = Session::start(config).unwrap();
    assert_eq!(session.world().player().total_attack(), 25);

    for turn in 1..=5 {
        let report = session.execute(Command::Look).unwrap();
        assert_eq!(report.time_changed(), turn == 5);
    }
    assert_eq!(session.world().time_of_day(), TimeOfDay::Night);
    assert_eq!(session.world().player().total_attack(), 45);

    let summary = session.run_script([Command::Inventory; 5]).unwrap();
    assert_eq!(summary.time_of_day, TimeOfDay::Day);
    assert_eq!(session.world().player().total_attack(), 25);
}

#[test]
fn config_file_shapes_the_board() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "game.toml",
        "board_width = 6\nboard_height = 4\ngold_per_kill = 50\n",
    );

    let config = RuntimeConfig::default()
        .with_seed(5)
        .with_config_file(&path)
        .unwrap();
    let session = Session::start(config).unwrap();

    let board = session.world().board();
    assert_eq!((board.width(), board.height()), (6, 4));
    assert_eq!(board.render_rows().len(), 4);
    assert_eq!(session.world().config().gold_per_kill, 50);
}

#[test]
fn board_too_small_for_the_content_is_rejected() {
    let config = RuntimeConfig::default().with_seed(5).with_board(3, 3);
    let err = Session::start(config).err().unwrap();

    assert!(matches!(
        err,
        RuntimeError::Setup(PopulateError::InsufficientCapacity {
            free_cells: 9,
            required: 11
        })
    ));
}
