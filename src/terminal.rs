//! Terminal handling with raw ANSI escape sequences.
//!
//! Raw mode is entered on construction and restored on drop, including the
//! early-return paths, so a crashed demo never leaves the user's shell in
//! mouse-reporting mode.

use std::io::{self, Read, Write};
use std::os::unix::io::AsRawFd;

/// 16-color text palette.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGray = 7,
    DarkGray = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    LightMagenta = 13,
    Yellow = 14,
    White = 15,
}

impl Color {
    /// ANSI SGR foreground code for this color (30-37 normal, 90-97 bright).
    pub fn fg_code(self) -> u8 {
        let n = self as u8;
        if n < 8 {
            30 + n
        } else {
            90 + (n - 8)
        }
    }

    /// ANSI SGR background code for this color (40-47 normal, 100-107 bright).
    pub fn bg_code(self) -> u8 {
        let n = self as u8;
        if n < 8 {
            40 + n
        } else {
            100 + (n - 8)
        }
    }
}

/// Cursor shape requested from the terminal via DECSCUSR.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorStyle {
    SteadyBlock,
    BlinkingUnderline,
    SteadyBar,
}

impl CursorStyle {
    fn decscusr(self) -> u8 {
        match self {
            CursorStyle::SteadyBlock => 2,
            CursorStyle::BlinkingUnderline => 3,
            CursorStyle::SteadyBar => 6,
        }
    }
}

/// Terminal state manager. Owns stdout and the saved termios settings.
pub struct Terminal {
    stdout: io::Stdout,
    width: u16,
    height: u16,
    /// Original termios, restored on drop.
    saved: Option<libc::termios>,
}

impl Terminal {
    /// Enter raw mode, enable SGR mouse button reporting, clear the screen.
    pub fn new() -> io::Result<Self> {
        let mut term = Self {
            stdout: io::stdout(),
            width: 80,
            height: 25,
            saved: None,
        };

        term.update_size();
        term.enable_raw_mode()?;

        term.write_raw("\x1b[?25l")?; // hide cursor
        term.write_raw("\x1b[?1002h")?; // button-event mouse tracking
        term.write_raw("\x1b[?1006h")?; // SGR extended mouse coordinates
        term.write_raw("\x1b[2J")?; // clear screen
        term.write_raw("\x1b[H")?; // home cursor
        term.flush()?;

        Ok(term)
    }

    /// Current terminal dimensions in character cells.
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Refresh dimensions from the tty.
    pub fn update_size(&mut self) {
        unsafe {
            let mut ws: libc::winsize = std::mem::zeroed();
            if libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut ws) == 0
                && ws.ws_col > 0
                && ws.ws_row > 0
            {
                self.width = ws.ws_col;
                self.height = ws.ws_row;
            }
        }
    }

    fn enable_raw_mode(&mut self) -> io::Result<()> {
        let fd = io::stdin().as_raw_fd();
        unsafe {
            let mut termios: libc::termios = std::mem::zeroed();
            if libc::tcgetattr(fd, &mut termios) != 0 {
                return Err(io::Error::last_os_error());
            }
            self.saved = Some(termios);

            termios.c_lflag &= !(libc::ECHO | libc::ICANON | libc::ISIG | libc::IEXTEN);
            termios.c_iflag &=
                !(libc::IXON | libc::ICRNL | libc::BRKINT | libc::INPCK | libc::ISTRIP);
            termios.c_oflag &= !libc::OPOST;
            termios.c_cflag |= libc::CS8;

            // VMIN=0/VTIME=1: reads return quickly but allow a complete
            // escape sequence to accumulate before a lone ESC is reported.
            termios.c_cc[libc::VMIN] = 0;
            termios.c_cc[libc::VTIME] = 1;

            if libc::tcsetattr(fd, libc::TCSAFLUSH, &termios) != 0 {
                return Err(io::Error::last_os_error());
            }
        }
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> io::Result<()> {
        if let Some(saved) = self.saved.take() {
            let fd = io::stdin().as_raw_fd();
            unsafe {
                if libc::tcsetattr(fd, libc::TCSAFLUSH, &saved) != 0 {
                    return Err(io::Error::last_os_error());
                }
            }
        }
        Ok(())
    }

    /// Read whatever bytes are currently available on stdin.
    ///
    /// Returns an empty vector when no input is pending.
    pub fn read_bytes(&mut self) -> io::Result<Vec<u8>> {
        let mut buf = [0u8; 256];
        let mut out = Vec::new();
        loop {
            match io::stdin().read(&mut buf) {
                Ok(0) => break,
                Ok(n) => {
                    out.extend_from_slice(&buf[..n]);
                    if n < buf.len() {
                        break;
                    }
                }
                Err(ref e) if e.kind() == io::ErrorKind::WouldBlock => break,
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(out)
    }

    /// Move the cursor to a 0-based cell position.
    pub fn goto(&mut self, row: u16, col: u16) -> io::Result<()> {
        write!(self.stdout, "\x1b[{};{}H", row + 1, col + 1)
    }

    /// Set the current foreground/background colors.
    pub fn set_colors(&mut self, fg: Color, bg: Color) -> io::Result<()> {
        write!(self.stdout, "\x1b[{};{}m", fg.fg_code(), bg.bg_code())
    }

    pub fn reset_colors(&mut self) -> io::Result<()> {
        self.write_raw("\x1b[0m")
    }

    pub fn write_char(&mut self, ch: char) -> io::Result<()> {
        let mut buf = [0u8; 4];
        self.stdout.write_all(ch.encode_utf8(&mut buf).as_bytes())
    }

    pub fn write_raw(&mut self, s: &str) -> io::Result<()> {
        self.stdout.write_all(s.as_bytes())
    }

    pub fn show_cursor(&mut self) -> io::Result<()> {
        self.write_raw("\x1b[?25h")
    }

    pub fn hide_cursor(&mut self) -> io::Result<()> {
        self.write_raw("\x1b[?25l")
    }

    pub fn set_cursor_style(&mut self, style: CursorStyle) -> io::Result<()> {
        write!(self.stdout, "\x1b[{} q", style.decscusr())
    }

    pub fn clear(&mut self) -> io::Result<()> {
        self.write_raw("\x1b[2J")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = self.write_raw("\x1b[?1006l");
        let _ = self.write_raw("\x1b[?1002l");
        let _ = self.write_raw("\x1b[0 q");
        let _ = self.show_cursor();
        let _ = self.reset_colors();
        let _ = self.clear();
        let _ = self.goto(0, 0);
        let _ = self.flush();
        let _ = self.disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sgr_codes_cover_normal_and_bright_ranges() {
        assert_eq!(Color::Black.fg_code(), 30);
        assert_eq!(Color::LightGray.fg_code(), 37);
        assert_eq!(Color::DarkGray.fg_code(), 90);
        assert_eq!(Color::White.fg_code(), 97);
        assert_eq!(Color::Blue.bg_code(), 44);
        assert_eq!(Color::Yellow.bg_code(), 106);
    }
}
