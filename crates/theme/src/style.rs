//! Terminal and HTML styling primitives.
//!
//! # Styling
//!
//! - [`Color`]: Default, named (16 ANSI), indexed (256) and RGB
//! - [`Style`]: foreground plus the text attributes themes use
//! - [`Rgb`]: a 24-bit colour, rendered as `#RRGGBB` for CSS

use std::fmt;

/// SGR sequence that clears every attribute.
pub const RESET: &str = "\x1b[0m";

// =============================================================================
// Color Types
// =============================================================================

/// The 16 standard ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl NamedColor {
    /// Returns the SGR foreground code for this color (30-37, 90-97).
    pub const fn fg_code(self) -> u8 {
        match self {
            NamedColor::Black => 30,
            NamedColor::Red => 31,
            NamedColor::Green => 32,
            NamedColor::Yellow => 33,
            NamedColor::Blue => 34,
            NamedColor::Magenta => 35,
            NamedColor::Cyan => 36,
            NamedColor::White => 37,
            NamedColor::BrightBlack => 90,
            NamedColor::BrightRed => 91,
            NamedColor::BrightGreen => 92,
            NamedColor::BrightYellow => 93,
            NamedColor::BrightBlue => 94,
            NamedColor::BrightMagenta => 95,
            NamedColor::BrightCyan => 96,
            NamedColor::BrightWhite => 97,
        }
    }
}

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a packed `0xRRGGBB` literal.
    pub const fn hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Terminal color representation.
///
/// Supports all common terminal color modes:
/// - Default (let the terminal decide)
/// - Named ANSI colors (16 colors)
/// - Indexed (256-color palette)
/// - True color RGB (24-bit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Default foreground (terminal decides).
    #[default]
    Default,
    /// Named ANSI colors (0-15).
    Named(NamedColor),
    /// 256-color palette index.
    Indexed(u8),
    /// 24-bit RGB color.
    Rgb(Rgb),
}

// =============================================================================
// Style
// =============================================================================

/// Text attributes applied to a highlighted run in the terminal.
///
/// The default style is unstyled text. Its SGR sequence is [`RESET`], which
/// is what unknown capture tags open their runs with.
///
/// # Example
///
/// ```
/// use codetint_theme::{Color, NamedColor, Style};
///
/// let style = Style::fg(Color::Named(NamedColor::Red)).bold();
/// let mut out = Vec::new();
/// style.write_sgr(&mut out);
/// assert_eq!(out, b"\x1b[31;1m");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color.
    pub fg: Color,
    /// Bold weight.
    pub bold: bool,
    /// Italic slant.
    pub italic: bool,
    /// Single underline.
    pub underline: bool,
}

impl Style {
    /// Unstyled text.
    pub const PLAIN: Style = Style {
        fg: Color::Default,
        bold: false,
        italic: false,
        underline: false,
    };

    /// A style with only a foreground color.
    pub const fn fg(fg: Color) -> Self {
        Self {
            fg,
            bold: false,
            italic: false,
            underline: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Returns true if the style carries no color and no attributes.
    pub fn is_plain(&self) -> bool {
        *self == Style::PLAIN
    }

    /// Appends the SGR escape sequence that enables this style.
    ///
    /// The foreground comes first, then attributes, so an indexed bold color
    /// reads `\x1b[38;5;N;1m`. A plain style writes [`RESET`].
    pub fn write_sgr(&self, out: &mut Vec<u8>) {
        let mut codes: Vec<String> = Vec::with_capacity(4);

        match self.fg {
            Color::Default => {}
            Color::Named(named) => codes.push(named.fg_code().to_string()),
            Color::Indexed(index) => codes.push(format!("38;5;{index}")),
            Color::Rgb(rgb) => codes.push(format!("38;2;{};{};{}", rgb.r, rgb.g, rgb.b)),
        }
        if self.bold {
            codes.push("1".to_string());
        }
        if self.italic {
            codes.push("3".to_string());
        }
        if self.underline {
            codes.push("4".to_string());
        }

        if codes.is_empty() {
            out.extend_from_slice(RESET.as_bytes());
        } else {
            out.extend_from_slice(b"\x1b[");
            out.extend_from_slice(codes.join(";").as_bytes());
            out.push(b'm');
        }
    }
}
