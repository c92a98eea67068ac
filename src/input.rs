//! Input event decoding.
//!
//! `InputParser` is a pure byte-stream decoder: the terminal layer feeds it
//! whatever bytes arrived and it yields complete events, keeping partial
//! escape sequences buffered across reads. A lone ESC is only reported once
//! `finish` confirms that no continuation bytes followed it.

/// Decoded input events routed through the widget system.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// Mouse button press.
    MouseDown { row: u16, col: u16 },
    /// Mouse button release.
    MouseUp { row: u16, col: u16 },
    /// Mouse wheel.
    ScrollUp { row: u16, col: u16 },
    ScrollDown { row: u16, col: u16 },
    /// Printable character.
    Char(char),
    /// Navigation.
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    /// Editing.
    Enter,
    Backspace,
    Delete,
    Tab,
    ShiftTab,
    Escape,
    /// Control chord (lowercase letter).
    Ctrl(char),
    /// Alt chord.
    Alt(char),
}

impl InputEvent {
    /// Mouse position carried by this event, if any.
    pub fn mouse_position(&self) -> Option<(u16, u16)> {
        match self {
            InputEvent::MouseDown { row, col }
            | InputEvent::MouseUp { row, col }
            | InputEvent::ScrollUp { row, col }
            | InputEvent::ScrollDown { row, col } => Some((*row, *col)),
            _ => None,
        }
    }

    pub fn is_scroll(&self) -> bool {
        matches!(self, InputEvent::ScrollUp { .. } | InputEvent::ScrollDown { .. })
    }
}

/// Incremental decoder for raw terminal bytes.
#[derive(Default)]
pub struct InputParser {
    pending: Vec<u8>,
}

impl InputParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append bytes and decode every complete event.
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<InputEvent> {
        self.pending.extend_from_slice(bytes);
        let mut events = Vec::new();

        loop {
            match Self::decode(&self.pending) {
                Decode::Event(event, used) => {
                    self.pending.drain(..used);
                    events.push(event);
                }
                Decode::Skip(used) => {
                    self.pending.drain(..used);
                }
                Decode::Incomplete | Decode::Empty => break,
            }
        }

        events
    }

    /// Flush a pending lone ESC once a read returned no further bytes.
    pub fn finish(&mut self) -> Option<InputEvent> {
        if self.pending == [0x1b] {
            self.pending.clear();
            Some(InputEvent::Escape)
        } else {
            None
        }
    }

    fn decode(buf: &[u8]) -> Decode {
        let Some(&first) = buf.first() else {
            return Decode::Empty;
        };

        match first {
            0x1b => Self::decode_escape(buf),
            b'\r' | b'\n' => Decode::Event(InputEvent::Enter, 1),
            b'\t' => Decode::Event(InputEvent::Tab, 1),
            0x7f | 0x08 => Decode::Event(InputEvent::Backspace, 1),
            0x01..=0x1a => {
                let letter = (first + 0x60) as char;
                Decode::Event(InputEvent::Ctrl(letter), 1)
            }
            0x00..=0x1f => Decode::Skip(1),
            _ => Self::decode_utf8(buf),
        }
    }

    fn decode_utf8(buf: &[u8]) -> Decode {
        let len = match buf[0] {
            b if b < 0x80 => 1,
            b if b & 0xe0 == 0xc0 => 2,
            b if b & 0xf0 == 0xe0 => 3,
            b if b & 0xf8 == 0xf0 => 4,
            _ => return Decode::Skip(1),
        };
        if buf.len() < len {
            return Decode::Incomplete;
        }
        match std::str::from_utf8(&buf[..len]) {
            Ok(s) => match s.chars().next() {
                Some(ch) => Decode::Event(InputEvent::Char(ch), len),
                None => Decode::Skip(len),
            },
            Err(_) => Decode::Skip(1),
        }
    }

    fn decode_escape(buf: &[u8]) -> Decode {
        let Some(&second) = buf.get(1) else {
            // Might be a lone Escape or the start of a sequence; wait.
            return Decode::Incomplete;
        };

        match second {
            b'[' => Self::decode_csi(buf),
            b'O' => {
                let Some(&third) = buf.get(2) else {
                    return Decode::Incomplete;
                };
                let event = match third {
                    b'A' => Some(InputEvent::Up),
                    b'B' => Some(InputEvent::Down),
                    b'C' => Some(InputEvent::Right),
                    b'D' => Some(InputEvent::Left),
                    b'H' => Some(InputEvent::Home),
                    b'F' => Some(InputEvent::End),
                    _ => None,
                };
                match event {
                    Some(e) => Decode::Event(e, 3),
                    None => Decode::Skip(3),
                }
            }
            0x1b => Decode::Event(InputEvent::Escape, 1),
            ch if ch.is_ascii_graphic() => {
                Decode::Event(InputEvent::Alt(ch.to_ascii_lowercase() as char), 2)
            }
            _ => Decode::Event(InputEvent::Escape, 1),
        }
    }

    fn decode_csi(buf: &[u8]) -> Decode {
        // buf starts with ESC [. Find the final byte (0x40-0x7e).
        let mut end = None;
        for (i, &b) in buf.iter().enumerate().skip(2) {
            if (0x40..=0x7e).contains(&b) {
                end = Some(i);
                break;
            }
        }
        let Some(end) = end else {
            return Decode::Incomplete;
        };
        let used = end + 1;
        let body = &buf[2..end];
        let final_byte = buf[end];

        if body.first() == Some(&b'<') {
            return Self::decode_sgr_mouse(&body[1..], final_byte, used);
        }

        let event = match final_byte {
            b'A' => Some(InputEvent::Up),
            b'B' => Some(InputEvent::Down),
            b'C' => Some(InputEvent::Right),
            b'D' => Some(InputEvent::Left),
            b'H' => Some(InputEvent::Home),
            b'F' => Some(InputEvent::End),
            b'Z' => Some(InputEvent::ShiftTab),
            b'~' => {
                let code: u16 = std::str::from_utf8(body)
                    .ok()
                    .and_then(|s| s.split(';').next().and_then(|p| p.parse().ok()))
                    .unwrap_or(0);
                match code {
                    1 | 7 => Some(InputEvent::Home),
                    3 => Some(InputEvent::Delete),
                    4 | 8 => Some(InputEvent::End),
                    _ => None,
                }
            }
            _ => None,
        };

        match event {
            Some(e) => Decode::Event(e, used),
            None => Decode::Skip(used),
        }
    }

    fn decode_sgr_mouse(body: &[u8], final_byte: u8, used: usize) -> Decode {
        let text = match std::str::from_utf8(body) {
            Ok(t) => t,
            Err(_) => return Decode::Skip(used),
        };
        let mut parts = text.split(';');
        let (Some(b), Some(x), Some(y)) = (
            parts.next().and_then(|p| p.parse::<u16>().ok()),
            parts.next().and_then(|p| p.parse::<u16>().ok()),
            parts.next().and_then(|p| p.parse::<u16>().ok()),
        ) else {
            return Decode::Skip(used);
        };

        // Terminal reports 1-based coordinates.
        let row = y.saturating_sub(1);
        let col = x.saturating_sub(1);

        if b & 64 != 0 {
            let event = if b & 1 == 0 {
                InputEvent::ScrollUp { row, col }
            } else {
                InputEvent::ScrollDown { row, col }
            };
            return Decode::Event(event, used);
        }

        if b & 32 != 0 {
            // Motion/drag reports are not routed anywhere.
            return Decode::Skip(used);
        }

        let event = match final_byte {
            b'M' => InputEvent::MouseDown { row, col },
            b'm' => InputEvent::MouseUp { row, col },
            _ => return Decode::Skip(used),
        };
        Decode::Event(event, used)
    }
}

enum Decode {
    Event(InputEvent, usize),
    Skip(usize),
    Incomplete,
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_characters_decode() {
        let mut parser = InputParser::new();
        let events = parser.feed(b"ab");
        assert_eq!(events, vec![InputEvent::Char('a'), InputEvent::Char('b')]);
    }

    #[test]
    fn utf8_split_across_feeds() {
        let mut parser = InputParser::new();
        let bytes = "é".as_bytes();
        assert!(parser.feed(&bytes[..1]).is_empty());
        assert_eq!(parser.feed(&bytes[1..]), vec![InputEvent::Char('é')]);
    }

    #[test]
    fn csi_arrow_keys() {
        let mut parser = InputParser::new();
        assert_eq!(parser.feed(b"\x1b[A"), vec![InputEvent::Up]);
        assert_eq!(parser.feed(b"\x1b[D"), vec![InputEvent::Left]);
        assert_eq!(parser.feed(b"\x1b[Z"), vec![InputEvent::ShiftTab]);
        assert_eq!(parser.feed(b"\x1b[3~"), vec![InputEvent::Delete]);
    }

    #[test]
    fn lone_escape_reported_only_after_finish() {
        let mut parser = InputParser::new();
        assert!(parser.feed(b"\x1b").is_empty());
        assert_eq!(parser.finish(), Some(InputEvent::Escape));
        assert_eq!(parser.finish(), None);
    }

    #[test]
    fn escape_then_bracket_is_not_two_events() {
        let mut parser = InputParser::new();
        assert!(parser.feed(b"\x1b").is_empty());
        assert_eq!(parser.feed(b"[B"), vec![InputEvent::Down]);
    }

    #[test]
    fn sgr_mouse_press_release_and_wheel() {
        let mut parser = InputParser::new();
        assert_eq!(
            parser.feed(b"\x1b[<0;5;3M"),
            vec![InputEvent::MouseDown { row: 2, col: 4 }]
        );
        assert_eq!(
            parser.feed(b"\x1b[<0;5;3m"),
            vec![InputEvent::MouseUp { row: 2, col: 4 }]
        );
        assert_eq!(
            parser.feed(b"\x1b[<64;1;1M"),
            vec![InputEvent::ScrollUp { row: 0, col: 0 }]
        );
        assert_eq!(
            parser.feed(b"\x1b[<65;2;2M"),
            vec![InputEvent::ScrollDown { row: 1, col: 1 }]
        );
    }

    #[test]
    fn mouse_motion_reports_are_dropped() {
        let mut parser = InputParser::new();
        assert!(parser.feed(b"\x1b[<32;5;5M").is_empty());
    }

    #[test]
    fn control_chords_decode_to_letters() {
        let mut parser = InputParser::new();
        assert_eq!(parser.feed(&[0x16]), vec![InputEvent::Ctrl('v')]);
        assert_eq!(parser.feed(&[0x03]), vec![InputEvent::Ctrl('c')]);
    }

    #[test]
    fn alt_chord_decodes() {
        let mut parser = InputParser::new();
        assert_eq!(parser.feed(b"\x1bq"), vec![InputEvent::Alt('q')]);
    }
}
