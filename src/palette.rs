/// A 24-bit color, independent of whatever ends up drawing it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn hex(value: u32) -> Self {
        Rgb {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }
}

pub const CELL_COLOR_EVEN: Rgb = Rgb::hex(0x101416);
pub const CELL_COLOR_ODD: Rgb = Rgb::hex(0x000000);

pub const SNAKE_HEAD_COLOR: Rgb = Rgb::hex(0x4faf44);
pub const SNAKE_BODY_COLOR: Rgb = Rgb::hex(0x4faf44);
pub const FOOD_COLOR: Rgb = Rgb::hex(0xda2c38);

pub const FRAME_COLOR: Rgb = Rgb::hex(0xee4423);
pub const SCORE_COLOR: Rgb = Rgb::hex(0x2a3493);
pub const HEADING_COLOR: Rgb = Rgb::hex(0x4faf44);

pub const BACKGROUND_COLOR: Rgb = Rgb::hex(0x06090a);
pub const BACKGROUND_PATTERN_COLOR: Rgb = Rgb::hex(0x1f3a26);
pub const TEXT_COLOR: Rgb = Rgb::hex(0xd0d0d0);

/// Checkerboard base color for a cell at the given row and column.
pub fn terrain(row: u16, col: u16) -> Rgb {
    if (row + col) % 2 == 0 {
        CELL_COLOR_EVEN
    } else {
        CELL_COLOR_ODD
    }
}
