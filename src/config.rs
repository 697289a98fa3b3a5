use crate::GridInt;

pub const BOARD_SIZE: u16 = 500;
pub const CELL_SIZE: u16 = 20;
/// Ticks between two snake moves.
pub const MOVE_CADENCE: u32 = 10;
pub const SCORE_MULTIPLIER: u32 = 10;

pub const HEADING: &str = "* SNAKE ARCADE *";

/// Environment variable naming the log file. Logging is off when unset.
pub const LOG_FILE_ENV: &str = "SNAKE_LOG_FILE";
/// Environment variable holding the log filter directive.
pub const LOG_FILTER_ENV: &str = "SNAKE_LOG";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub board_size: u16,
    pub cell_size: u16,
    pub cadence: u32,
    pub score_multiplier: u32,
}

impl Config {
    /// Number of rows (and columns) of the square grid, never below one.
    pub fn dimension(&self) -> GridInt {
        (self.board_size / self.cell_size.max(1)).max(1)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            board_size: BOARD_SIZE,
            cell_size: CELL_SIZE,
            cadence: MOVE_CADENCE,
            score_multiplier: SCORE_MULTIPLIER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_is_25_cells_wide() {
        assert_eq!(Config::default().dimension(), 25);
    }

    #[test]
    fn degenerate_sizes_still_give_one_cell() {
        let config = Config { board_size: 5, cell_size: 0, ..Config::default() };
        assert_eq!(config.dimension(), 5);

        let config = Config { board_size: 5, cell_size: 20, ..Config::default() };
        assert_eq!(config.dimension(), 1);
    }
}
