//! Player commands and their single-key notation.
//!
//! | Key | Command |
//! |---|---|
//! | `w` `a` `s` `d` | move up, left, down, right |
//! | `g` | pick up the item on the current cell |
//! | `j` | attack the enemy on the current cell |
//! | `h1` `h2` `h3` | drop weapon, armour, shield |
//! | `h4:<n>` | drop the n-th ring (1-based) |
//! | `k` | look at the current cell |
//! | `l` | show inventory and gold |
//!
//! In a script `x` ends the script; whitespace, `,` and `;` separate keys.

use std::fmt;
use std::str::FromStr;

use crate::character::DropTarget;
use crate::ids::Direction;

use super::ParseCommandError;

/// A single player command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    Move(Direction),
    PickUp,
    Attack,
    Drop(DropTarget),
    Look,
    Inventory,
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let command = match key.as_str() {
            "" => return Err(ParseCommandError::Empty),
            "w" => Command::Move(Direction::Up),
            "a" => Command::Move(Direction::Left),
            "s" => Command::Move(Direction::Down),
            "d" => Command::Move(Direction::Right),
            "g" => Command::PickUp,
            "j" => Command::Attack,
            "k" => Command::Look,
            "l" => Command::Inventory,
            other => match other.strip_prefix('h') {
                Some(target) => Command::Drop(parse_drop_target(target)?),
                None => return Err(ParseCommandError::Unknown(s.trim().to_string())),
            },
        };
        Ok(command)
    }
}

fn parse_drop_target(target: &str) -> Result<DropTarget, ParseCommandError> {
    match target {
        "1" => Ok(DropTarget::Weapon),
        "2" => Ok(DropTarget::Armor),
        "3" => Ok(DropTarget::Shield),
        _ => {
            let Some(number) = target.strip_prefix("4:") else {
                return Err(ParseCommandError::InvalidDropTarget(target.to_string()));
            };
            match number.parse::<usize>() {
                Ok(n) if n >= 1 => Ok(DropTarget::Ring(n - 1)),
                _ => Err(ParseCommandError::InvalidRingNumber(number.to_string())),
            }
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Move(Direction::Up) => f.write_str("w"),
            Command::Move(Direction::Left) => f.write_str("a"),
            Command::Move(Direction::Down) => f.write_str("s"),
            Command::Move(Direction::Right) => f.write_str("d"),
            Command::PickUp => f.write_str("g"),
            Command::Attack => f.write_str("j"),
            Command::Drop(DropTarget::Weapon) => f.write_str("h1"),
            Command::Drop(DropTarget::Armor) => f.write_str("h2"),
            Command::Drop(DropTarget::Shield) => f.write_str("h3"),
            Command::Drop(DropTarget::Ring(index)) => write!(f, "h4:{}", index + 1),
            Command::Look => f.write_str("k"),
            Command::Inventory => f.write_str("l"),
        }
    }
}

/// Parses a compact command script such as `"ddsj g h4:1 k"`.
///
/// Parsing stops at the first `x`.
pub fn parse_script(script: &str) -> Result<Vec<Command>, ParseCommandError> {
    let mut commands = Vec::new();
    let mut chars = script.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        if ch.is_whitespace() || ch == ',' || ch == ';' {
            continue;
        }
        if ch.eq_ignore_ascii_case(&'x') {
            break;
        }

        let mut end = start + ch.len_utf8();
        if ch.eq_ignore_ascii_case(&'h') {
            // One slot digit; a ring slot may carry `:<n>`.
            if let Some((index, slot)) = chars.next_if(|&(_, slot)| slot.is_ascii_digit()) {
                end = index + 1;
                if slot == '4' && chars.next_if(|&(_, next)| next == ':').is_some() {
                    end += 1;
                    while let Some((index, _)) = chars.next_if(|&(_, digit)| digit.is_ascii_digit()) {
                        end = index + 1;
                    }
                }
            }
        }

        commands.push(script[start..end].parse::<Command>()?);
    }

    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_keys_parse() {
        assert_eq!("w".parse::<Command>(), Ok(Command::Move(Direction::Up)));
        assert_eq!("D".parse::<Command>(), Ok(Command::Move(Direction::Right)));
        assert_eq!(" j ".parse::<Command>(), Ok(Command::Attack));
        assert_eq!("l".parse::<Command>(), Ok(Command::Inventory));
        assert_eq!("q".parse::<Command>(), Err(ParseCommandError::Unknown("q".into())));
        assert_eq!("".parse::<Command>(), Err(ParseCommandError::Empty));
    }

    #[test]
    fn drop_targets_use_one_based_ring_numbers() {
        assert_eq!("h2".parse::<Command>(), Ok(Command::Drop(DropTarget::Armor)));
        assert_eq!("h4:1".parse::<Command>(), Ok(Command::Drop(DropTarget::Ring(0))));
        assert_eq!(
            "h4:0".parse::<Command>(),
            Err(ParseCommandError::InvalidRingNumber("0".into()))
        );
        assert_eq!(
            "h4".parse::<Command>(),
            Err(ParseCommandError::InvalidDropTarget("4".into()))
        );
        assert_eq!(
            "h9".parse::<Command>(),
            Err(ParseCommandError::InvalidDropTarget("9".into()))
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        let commands = [
            Command::Move(Direction::Left),
            Command::PickUp,
            Command::Drop(DropTarget::Shield),
            Command::Drop(DropTarget::Ring(2)),
            Command::Look,
        ];
        for command in commands {
            assert_eq!(command.to_string().parse::<Command>(), Ok(command));
        }
    }

    #[test]
    fn scripts_split_keys_and_stop_at_exit() {
        let commands = parse_script("ddsj g, h4:2h1 k x w").unwrap();
        assert_eq!(
            commands,
            vec![
                Command::Move(Direction::Right),
                Command::Move(Direction::Right),
                Command::Move(Direction::Down),
                Command::Attack,
                Command::PickUp,
                Command::Drop(DropTarget::Ring(1)),
                Command::Drop(DropTarget::Weapon),
                Command::Look,
            ]
        );
    }

    #[test]
    fn script_errors_name_the_bad_key() {
        assert_eq!(
            parse_script("dd?"),
            Err(ParseCommandError::Unknown("?".into()))
        );
        assert_eq!(
            parse_script("h"),
            Err(ParseCommandError::InvalidDropTarget(String::new()))
        );
    }
}
