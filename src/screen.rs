//! Double-buffered screen rendering.
//!
//! All drawing goes into a back buffer of cells; `flush` diffs against the
//! front buffer and only emits escape sequences for cells that changed.
//! Coordinates are 0-based throughout.

use crate::terminal::{Color, CursorStyle, Terminal};
use std::io;

/// A single character cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::LightGray,
            bg: Color::Black,
        }
    }
}

impl Cell {
    pub fn new(ch: char, fg: Color, bg: Color) -> Self {
        Self { ch, fg, bg }
    }
}

#[derive(Clone, Copy)]
struct Clip {
    x: u16,
    y: u16,
    width: u16,
    height: u16,
}

/// Double-buffered cell screen with a clip stack.
pub struct Screen {
    width: u16,
    height: u16,
    front: Vec<Cell>,
    back: Vec<Cell>,
    clips: Vec<Clip>,
    cursor_row: u16,
    cursor_col: u16,
    cursor_visible: bool,
    cursor_style: CursorStyle,
}

impl Screen {
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            // '\0' cells never match real content, forcing the first flush
            // to paint everything.
            front: vec![Cell::new('\0', Color::Black, Color::Black); size],
            back: vec![Cell::default(); size],
            clips: Vec::new(),
            cursor_row: 0,
            cursor_col: 0,
            cursor_visible: false,
            cursor_style: CursorStyle::BlinkingUnderline,
        }
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        let size = width as usize * height as usize;
        self.width = width;
        self.height = height;
        self.front = vec![Cell::new('\0', Color::Black, Color::Black); size];
        self.back = vec![Cell::default(); size];
        self.clips.clear();
    }

    fn index(&self, row: u16, col: u16) -> Option<usize> {
        if row < self.height && col < self.width {
            Some(row as usize * self.width as usize + col as usize)
        } else {
            None
        }
    }

    fn clipped_out(&self, row: u16, col: u16) -> bool {
        match self.clips.last() {
            Some(c) => {
                row < c.y || row >= c.y + c.height || col < c.x || col >= c.x + c.width
            }
            None => false,
        }
    }

    /// Restrict subsequent drawing to the given region.
    pub fn push_clip(&mut self, x: u16, y: u16, width: u16, height: u16) {
        self.clips.push(Clip { x, y, width, height });
    }

    pub fn pop_clip(&mut self) {
        self.clips.pop();
    }

    /// Set a cell in the back buffer, honoring the active clip.
    pub fn set(&mut self, row: u16, col: u16, ch: char, fg: Color, bg: Color) {
        if self.clipped_out(row, col) {
            return;
        }
        if let Some(idx) = self.index(row, col) {
            self.back[idx] = Cell::new(ch, fg, bg);
        }
    }

    /// Get a back-buffer cell, for tests and widgets that read underneath.
    pub fn get(&self, row: u16, col: u16) -> Option<Cell> {
        self.index(row, col).map(|idx| self.back[idx])
    }

    pub fn write_str(&mut self, row: u16, col: u16, s: &str, fg: Color, bg: Color) {
        let mut c = col;
        for ch in s.chars() {
            if c >= self.width {
                break;
            }
            self.set(row, c, ch, fg, bg);
            c += 1;
        }
    }

    pub fn fill(&mut self, row: u16, col: u16, width: u16, height: u16, ch: char, fg: Color, bg: Color) {
        for r in row..row.saturating_add(height) {
            for c in col..col.saturating_add(width) {
                self.set(r, c, ch, fg, bg);
            }
        }
    }

    pub fn clear_with(&mut self, fg: Color, bg: Color) {
        self.back.fill(Cell::new(' ', fg, bg));
    }

    /// Draw a single-line box outline. The interior is left untouched;
    /// callers fill it first when they want a background.
    pub fn draw_box(&mut self, row: u16, col: u16, width: u16, height: u16, fg: Color, bg: Color) {
        if width < 2 || height < 2 {
            return;
        }

        self.set(row, col, '┌', fg, bg);
        self.set(row, col + width - 1, '┐', fg, bg);
        self.set(row + height - 1, col, '└', fg, bg);
        self.set(row + height - 1, col + width - 1, '┘', fg, bg);

        for c in 1..width - 1 {
            self.set(row, col + c, '─', fg, bg);
            self.set(row + height - 1, col + c, '─', fg, bg);
        }
        for r in 1..height - 1 {
            self.set(row + r, col, '│', fg, bg);
            self.set(row + r, col + width - 1, '│', fg, bg);
        }
    }

    /// Drop shadow below and to the right of a rectangle. Characters are
    /// preserved; only the colors darken.
    pub fn draw_shadow(&mut self, row: u16, col: u16, width: u16, height: u16) {
        for r in 1..=height {
            for c in 0..2u16 {
                self.darken(row + r, col + width + c);
            }
        }
        for c in 2..width + 2 {
            self.darken(row + height, col + c);
        }
    }

    /// Recolor every cell to a dimmed palette. Used as the full-viewport
    /// scrim behind an open dialog.
    pub fn dim_all(&mut self) {
        for cell in &mut self.back {
            cell.fg = Color::DarkGray;
            cell.bg = Color::Black;
        }
    }

    fn darken(&mut self, row: u16, col: u16) {
        if self.clipped_out(row, col) {
            return;
        }
        if let Some(idx) = self.index(row, col) {
            self.back[idx].fg = Color::DarkGray;
            self.back[idx].bg = Color::Black;
        }
    }

    pub fn set_cursor(&mut self, row: u16, col: u16) {
        self.cursor_row = row;
        self.cursor_col = col;
    }

    pub fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor_visible = visible;
    }

    pub fn set_cursor_style(&mut self, style: CursorStyle) {
        self.cursor_style = style;
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Emit changed cells to the terminal.
    pub fn flush(&mut self, term: &mut Terminal) -> io::Result<()> {
        let mut last_fg = None;
        let mut last_bg = None;
        let mut pen: Option<(u16, u16)> = None;

        for row in 0..self.height {
            for col in 0..self.width {
                let idx = row as usize * self.width as usize + col as usize;
                if self.front[idx] == self.back[idx] {
                    continue;
                }
                let cell = self.back[idx];

                // Move only when the pen isn't already one cell to the left.
                if pen != Some((row, col.wrapping_sub(1))) {
                    term.goto(row, col)?;
                }
                if last_fg != Some(cell.fg) || last_bg != Some(cell.bg) {
                    term.set_colors(cell.fg, cell.bg)?;
                    last_fg = Some(cell.fg);
                    last_bg = Some(cell.bg);
                }
                term.write_char(cell.ch)?;

                self.front[idx] = cell;
                pen = Some((row, col));
            }
        }

        if self.cursor_visible {
            term.goto(self.cursor_row, self.cursor_col)?;
            term.set_cursor_style(self.cursor_style)?;
            term.show_cursor()?;
        } else {
            term.hide_cursor()?;
        }

        term.flush()
    }

    /// Force a full repaint on the next flush.
    pub fn invalidate(&mut self) {
        for cell in &mut self.front {
            cell.ch = '\0';
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_round_trip() {
        let mut screen = Screen::new(10, 4);
        screen.set(2, 3, 'x', Color::White, Color::Blue);
        let cell = screen.get(2, 3).unwrap();
        assert_eq!(cell.ch, 'x');
        assert_eq!(cell.fg, Color::White);
        assert_eq!(cell.bg, Color::Blue);
    }

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut screen = Screen::new(5, 5);
        screen.set(5, 0, 'x', Color::White, Color::Black);
        screen.set(0, 5, 'x', Color::White, Color::Black);
        assert!(screen.get(5, 0).is_none());
    }

    #[test]
    fn clip_restricts_writes() {
        let mut screen = Screen::new(10, 10);
        screen.push_clip(2, 2, 3, 3);
        screen.set(0, 0, 'a', Color::White, Color::Black);
        screen.set(3, 3, 'b', Color::White, Color::Black);
        screen.pop_clip();
        assert_eq!(screen.get(0, 0).unwrap().ch, ' ');
        assert_eq!(screen.get(3, 3).unwrap().ch, 'b');
    }

    #[test]
    fn draw_box_outlines_without_touching_interior() {
        let mut screen = Screen::new(10, 6);
        screen.set(2, 2, 'x', Color::White, Color::Blue);
        screen.draw_box(1, 1, 5, 4, Color::Black, Color::LightGray);
        assert_eq!(screen.get(1, 1).unwrap().ch, '┌');
        assert_eq!(screen.get(1, 5).unwrap().ch, '┐');
        assert_eq!(screen.get(4, 1).unwrap().ch, '└');
        assert_eq!(screen.get(4, 5).unwrap().ch, '┘');
        assert_eq!(screen.get(1, 2).unwrap().ch, '─');
        assert_eq!(screen.get(2, 1).unwrap().ch, '│');
        assert_eq!(screen.get(2, 2).unwrap().ch, 'x');
    }

    #[test]
    fn shadow_preserves_characters() {
        let mut screen = Screen::new(20, 10);
        screen.set(3, 8, 'z', Color::White, Color::Blue);
        // Box at (1,1) size 6x2: shadow covers column 7-8 on rows 2-3.
        screen.draw_shadow(1, 1, 6, 2);
        let cell = screen.get(3, 8).unwrap();
        assert_eq!(cell.ch, 'z');
        assert_eq!(cell.fg, Color::DarkGray);
        assert_eq!(cell.bg, Color::Black);
    }

    #[test]
    fn dim_all_recolors_everything() {
        let mut screen = Screen::new(4, 2);
        screen.set(0, 0, 'q', Color::Yellow, Color::Blue);
        screen.dim_all();
        let cell = screen.get(0, 0).unwrap();
        assert_eq!(cell.ch, 'q');
        assert_eq!(cell.fg, Color::DarkGray);
    }
}
