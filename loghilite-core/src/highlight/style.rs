//! SGR (Select Graphic Rendition) escape sequences.
//!
//! Painted spans are always closed with [`RESET`], so a span never leaks its
//! style into the surrounding text or past the end of a line.

pub const ESC: u8 = 0x1b;

/// `ESC[0m`
pub const RESET: &[u8] = b"\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Normal,
    Bold,
    Underline,
    Negative,
}

impl Style {
    pub fn code(self) -> u8 {
        match self {
            Style::Normal => 0,
            Style::Bold => 1,
            Style::Underline => 4,
            Style::Negative => 7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Reset,
}

impl Color {
    fn offset(self) -> u8 {
        match self {
            Color::Black => 0,
            Color::Red => 1,
            Color::Green => 2,
            Color::Yellow => 3,
            Color::Blue => 4,
            Color::Magenta => 5,
            Color::Cyan => 6,
            Color::White => 7,
            Color::Reset => 9,
        }
    }

    pub fn fg(self) -> u8 {
        30 + self.offset()
    }

    pub fn bg(self) -> u8 {
        40 + self.offset()
    }
}

/// An ordered list of SGR parameters, rendered as `ESC [ p1;p2;... m`.
///
/// Parameters keep the order they were added in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sgr {
    params: Vec<u8>,
}

impl Sgr {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(mut self, style: Style) -> Self {
        self.params.push(style.code());
        self
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.params.push(color.fg());
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.params.push(color.bg());
        self
    }

    pub fn params(&self) -> &[u8] {
        &self.params
    }

    /// Appends the set sequence, `text`, and a reset to `out`.
    pub fn paint_into(&self, text: &[u8], out: &mut Vec<u8>) {
        out.push(ESC);
        out.push(b'[');
        for (i, p) in self.params.iter().enumerate() {
            if i > 0 {
                out.push(b';');
            }
            out.extend_from_slice(p.to_string().as_bytes());
        }
        out.push(b'm');
        out.extend_from_slice(text);
        out.extend_from_slice(RESET);
    }

    pub fn paint(&self, text: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(text.len() + 16);
        self.paint_into(text, &mut out);
        out
    }
}

/// Removes every `ESC [ ... m` sequence from `input`.
pub fn strip_sgr(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    let mut i = 0;

    while i < input.len() {
        if input[i] == ESC && input.get(i + 1) == Some(&b'[') {
            let params = input[i + 2..]
                .iter()
                .position(|b| !(b.is_ascii_digit() || *b == b';'));

            if let Some(len) = params
                && input[i + 2 + len] == b'm'
            {
                i += 2 + len + 1;
                continue;
            }
        }

        out.push(input[i]);
        i += 1;
    }

    out
}
