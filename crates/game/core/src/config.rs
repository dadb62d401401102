/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Number of columns on the board.
    pub board_width: usize,

    /// Number of rows on the board.
    pub board_height: usize,

    /// Commands per half of the day/night cycle.
    /// Day for the first `day_length` commands of every `2 * day_length`.
    pub day_length: u32,

    /// Gold awarded for each defeated enemy.
    pub gold_per_kill: u32,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_BOARD_SIZE: usize = 12;
    pub const DEFAULT_DAY_LENGTH: u32 = 5;
    pub const DEFAULT_GOLD_PER_KILL: u32 = 20;

    pub fn new() -> Self {
        Self {
            board_width: Self::DEFAULT_BOARD_SIZE,
            board_height: Self::DEFAULT_BOARD_SIZE,
            day_length: Self::DEFAULT_DAY_LENGTH,
            gold_per_kill: Self::DEFAULT_GOLD_PER_KILL,
        }
    }

    pub fn with_board(mut self, width: usize, height: usize) -> Self {
        self.board_width = width;
        self.board_height = height;
        self
    }

    pub fn with_day_length(mut self, day_length: u32) -> Self {
        self.day_length = day_length;
        self
    }

    pub fn with_gold_per_kill(mut self, gold_per_kill: u32) -> Self {
        self.gold_per_kill = gold_per_kill;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
