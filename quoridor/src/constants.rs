pub const NUM_PLAYERS: usize = 2;
pub const DEFAULT_BOARD_SIZE: usize = 9;
pub const DEFAULT_WALLS_PER_PLAYER: usize = 10;
pub const MAX_NUMBER_OF_MOVES: usize = 200;
pub const MIN_BOARD_SIZE: usize = 3;
pub const MAX_BOARD_SIZE: usize = 25;

pub const ASCII_LETTER_A: u8 = 97;
