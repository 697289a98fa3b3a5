use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{poll, read, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, terminal};

use crate::layout::CellMetrics;
use crate::palette::{Rgb, BACKGROUND_COLOR, BACKGROUND_PATTERN_COLOR, TEXT_COLOR};
use crate::snake::Direction;
use crate::surface::{Cue, CuePlayer, Rect, Surface, Viewport};

/// A board cell is two characters wide so it looks roughly square.
pub const TERM_CELL: CellMetrics = CellMetrics { width: 2, height: 1, gap: 0 };

const BACKGROUND_CHAR: char = '·';

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Glyph {
    ch: char,
    fg: Rgb,
    bg: Rgb,
}

const BLANK: Glyph = Glyph { ch: ' ', fg: TEXT_COLOR, bg: Rgb { r: 0, g: 0, b: 0 } };

/// Double-buffered terminal drawing. Frames are composed in `screen` and
/// `present` only writes the glyphs that differ from what is on display.
pub struct TermSurface {
    width: u16,
    height: u16,
    stdout: Stdout,
    screen: Vec<Glyph>,
    shown: Vec<Option<Glyph>>,
    wipe: bool,
}

pub enum Input {
    Steer(Direction),
    Resize(u16, u16),
    Quit,
}

impl TermSurface {
    /// Takes over the terminal. It is handed back when the surface is dropped.
    pub fn open() -> Result<Self> {
        let (width, height) = terminal::size().context("Error reading terminal size")?;
        let mut surface = TermSurface {
            width,
            height,
            stdout: stdout(),
            screen: vec![],
            shown: vec![],
            wipe: true,
        };
        surface.resize((width, height));

        execute!(surface.stdout, EnterAlternateScreen).context("Error entering alt screen")?;
        terminal::enable_raw_mode().context("Error setting raw mode")?;
        execute!(surface.stdout, cursor::Hide, cursor::DisableBlinking)
            .context("Error hiding cursor")?;

        Ok(surface)
    }

    fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, ResetColor, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)?;
        Ok(())
    }

    fn put(&mut self, x: u16, y: u16, glyph: Glyph) {
        if x < self.width && y < self.height {
            let idx = self.width as usize * y as usize + x as usize;
            self.screen[idx] = glyph;
        }
    }

    /// Writes a character over whatever background is already there.
    fn put_char(&mut self, x: u16, y: u16, ch: char, fg: Rgb) {
        if x < self.width && y < self.height {
            let idx = self.width as usize * y as usize + x as usize;
            let bg = self.screen[idx].bg;
            self.screen[idx] = Glyph { ch, fg, bg };
        }
    }
}

impl Surface for TermSurface {
    fn viewport(&self) -> Viewport {
        (self.width, self.height)
    }

    fn resize(&mut self, (width, height): Viewport) {
        let len = width as usize * height as usize;
        self.width = width;
        self.height = height;
        self.screen = vec![BLANK; len];
        self.shown = vec![None; len];
        self.wipe = true;
    }

    fn clear(&mut self) -> Result<()> {
        for glyph in self.screen.iter_mut() {
            *glyph = BLANK;
        }
        Ok(())
    }

    fn fill_background(&mut self) -> Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let ch = if x % 6 == 0 && y % 3 == 0 { BACKGROUND_CHAR } else { ' ' };
                self.put(x, y, Glyph { ch, fg: BACKGROUND_PATTERN_COLOR, bg: BACKGROUND_COLOR });
            }
        }
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) -> Result<()> {
        let glyph = Glyph { ch: ' ', fg: color, bg: color };
        for y in rect.y..rect.y.saturating_add(rect.height) {
            for x in rect.x..rect.x.saturating_add(rect.width) {
                self.put(x, y, glyph);
            }
        }
        Ok(())
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgb) -> Result<()> {
        if rect.width < 2 || rect.height < 2 {
            return Ok(());
        }
        let (left, top) = (rect.x, rect.y);
        let right = rect.x.saturating_add(rect.width - 1);
        let bottom = rect.y.saturating_add(rect.height - 1);

        for x in left + 1..right {
            self.put_char(x, top, '─', color);
            self.put_char(x, bottom, '─', color);
        }
        for y in top + 1..bottom {
            self.put_char(left, y, '│', color);
            self.put_char(right, y, '│', color);
        }
        self.put_char(left, top, '┌', color);
        self.put_char(right, top, '┐', color);
        self.put_char(left, bottom, '└', color);
        self.put_char(right, bottom, '┘', color);
        Ok(())
    }

    fn text(&mut self, x: u16, y: u16, text: &str, color: Rgb) -> Result<()> {
        for (i, ch) in text.chars().enumerate() {
            self.put_char(x.saturating_add(i as u16), y, ch, color);
        }
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        if self.wipe {
            queue!(self.stdout, ResetColor, terminal::Clear(ClearType::All))?;
            self.wipe = false;
        }

        let width = self.width as usize;
        let mut cursor_at: Option<usize> = None;
        let mut colors: Option<(Rgb, Rgb)> = None;

        for (idx, glyph) in self.screen.iter().enumerate() {
            if self.shown[idx] == Some(*glyph) {
                continue;
            }

            if cursor_at != Some(idx) {
                queue!(self.stdout, cursor::MoveTo((idx % width) as u16, (idx / width) as u16))?;
            }
            if colors != Some((glyph.fg, glyph.bg)) {
                queue!(
                    self.stdout,
                    SetForegroundColor(to_color(glyph.fg)),
                    SetBackgroundColor(to_color(glyph.bg))
                )?;
                colors = Some((glyph.fg, glyph.bg));
            }
            queue!(self.stdout, Print(glyph.ch))?;

            self.shown[idx] = Some(*glyph);
            cursor_at = Some(idx + 1);
        }

        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for TermSurface {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            tracing::error!(error = %e, "could not restore the terminal");
        }
    }
}

/// Rings the terminal bell for the short cues. A terminal has no music
/// track, so the background loop is only logged.
pub struct TermBell {
    stdout: Stdout,
}

impl TermBell {
    pub fn new() -> Self {
        TermBell { stdout: stdout() }
    }
}

impl CuePlayer for TermBell {
    fn play(&mut self, cue: Cue) {
        match cue {
            Cue::Eat | Cue::GameOver => {
                if let Err(e) = execute!(self.stdout, Print('\x07')) {
                    tracing::warn!(?cue, error = %e, "could not ring the bell");
                }
            }
            Cue::BackgroundLoop => tracing::debug!("background loop requested, terminal has no music"),
        }
    }
}

/// Drains every pending terminal event without blocking.
pub fn read_input_queue() -> Result<Vec<Input>> {
    let mut inputs = vec![];

    while poll(Duration::from_millis(0))? {
        match read()? {
            Event::Key(key_ev) => {
                if let Some(input) = map_key(&key_ev) {
                    inputs.push(input);
                }
            }
            Event::Resize(w, h) => inputs.push(Input::Resize(w, h)),
            _ => {}
        }
    }

    Ok(inputs)
}

fn map_key(ev: &KeyEvent) -> Option<Input> {
    if is_ctrl_c(ev) {
        return Some(Input::Quit);
    }

    match ev.code {
        KeyCode::Char('w') | KeyCode::Up => Some(Input::Steer(Direction::Up)),
        KeyCode::Char('a') | KeyCode::Left => Some(Input::Steer(Direction::Left)),
        KeyCode::Char('s') | KeyCode::Down => Some(Input::Steer(Direction::Down)),
        KeyCode::Char('d') | KeyCode::Right => Some(Input::Steer(Direction::Right)),
        KeyCode::Esc | KeyCode::Char('q') => Some(Input::Quit),
        _ => None,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}

fn to_color(c: Rgb) -> Color {
    Color::Rgb { r: c.r, g: c.g, b: c.b }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent { code, modifiers: KeyModifiers::NONE }
    }

    #[test]
    fn arrows_and_wasd_steer() {
        assert!(matches!(map_key(&key(KeyCode::Up)), Some(Input::Steer(Direction::Up))));
        assert!(matches!(map_key(&key(KeyCode::Char('a'))), Some(Input::Steer(Direction::Left))));
        assert!(matches!(map_key(&key(KeyCode::Char('s'))), Some(Input::Steer(Direction::Down))));
        assert!(matches!(map_key(&key(KeyCode::Right)), Some(Input::Steer(Direction::Right))));
    }

    #[test]
    fn quit_keys() {
        let ctrl_c = KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL };
        assert!(matches!(map_key(&ctrl_c), Some(Input::Quit)));
        assert!(matches!(map_key(&key(KeyCode::Esc)), Some(Input::Quit)));
        assert!(matches!(map_key(&key(KeyCode::Char('q'))), Some(Input::Quit)));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert!(map_key(&key(KeyCode::Char('c'))).is_none());
        assert!(map_key(&key(KeyCode::Enter)).is_none());
        assert!(map_key(&key(KeyCode::F(5))).is_none());
    }

    #[test]
    fn converts_colors() {
        assert_eq!(to_color(Rgb::hex(0x4faf44)), Color::Rgb { r: 0x4f, g: 0xaf, b: 0x44 });
    }
}
