//! Built-in color themes.
//!
//! A [`Theme`] holds, for each [`HighlightClass`], the terminal style and the
//! HTML color to use, plus the colors of the line-number gutter and the HTML
//! page. Themes are plain `static` data and are passed to renderers by
//! reference; there is no global "selected theme".

use crate::class::{classify, HighlightClass};
use crate::style::{Color, NamedColor, Rgb, Style};

/// How a single capture tag should be rendered under a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagStyle {
    /// Terminal style for the run.
    pub ansi: Style,
    /// HTML class, or `None` if the run should not be wrapped.
    pub class: Option<HighlightClass>,
    /// HTML color of `class` in this theme.
    pub color: Option<Rgb>,
}

impl TagStyle {
    /// The style unknown tags resolve to: a plain terminal run and no HTML
    /// class.
    pub const FALLBACK: TagStyle = TagStyle {
        ansi: Style::PLAIN,
        class: None,
        color: None,
    };
}

/// A named color theme.
#[derive(Debug)]
pub struct Theme {
    name: &'static str,
    /// Terminal styles, indexed by `HighlightClass::index`.
    ansi: [Style; HighlightClass::COUNT],
    /// HTML colors, indexed by `HighlightClass::index`.
    html: [Rgb; HighlightClass::COUNT],
    line_number: Style,
    line_number_html: Rgb,
    background: Rgb,
    foreground: Rgb,
}

impl Theme {
    /// Returns the theme's name as accepted by [`Theme::by_name`].
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Resolves a capture tag to its style under this theme.
    ///
    /// Never fails: tags that match no class get [`TagStyle::FALLBACK`].
    pub fn style_for_tag(&self, tag: &str) -> TagStyle {
        match classify(tag) {
            Some(classes) => TagStyle {
                ansi: self.ansi[classes.ansi.index()],
                class: Some(classes.html),
                color: Some(self.html[classes.html.index()]),
            },
            None => TagStyle::FALLBACK,
        }
    }

    /// Terminal style of a class.
    pub fn ansi_style(&self, class: HighlightClass) -> Style {
        self.ansi[class.index()]
    }

    /// HTML color of a class.
    pub fn html_color(&self, class: HighlightClass) -> Rgb {
        self.html[class.index()]
    }

    /// Terminal style of line-number labels.
    pub fn line_number_style(&self) -> Style {
        self.line_number
    }

    /// HTML color of line-number labels.
    pub fn line_number_color(&self) -> Rgb {
        self.line_number_html
    }

    /// HTML page background.
    pub fn background(&self) -> Rgb {
        self.background
    }

    /// HTML page default text color.
    pub fn foreground(&self) -> Rgb {
        self.foreground
    }

    /// Looks up a built-in theme by exact name.
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILTIN_THEMES.iter().find(|theme| theme.name == name)
    }

    /// All built-in themes, `default` first.
    pub fn all() -> &'static [Theme] {
        &BUILTIN_THEMES
    }

    /// The `default` theme.
    pub fn default_theme() -> &'static Theme {
        &BUILTIN_THEMES[0]
    }

    /// Names of all built-in themes.
    pub fn names() -> impl Iterator<Item = &'static str> {
        BUILTIN_THEMES.iter().map(|theme| theme.name)
    }
}

// Palette helpers. Palettes are listed in `HighlightClass::ALL` order:
// function.builtin, function, string, comment, keyword, keyword.control,
// type, variable, constant, literal.

const fn named(color: NamedColor) -> Style {
    Style::fg(Color::Named(color))
}

const fn indexed(index: u8) -> Style {
    Style::fg(Color::Indexed(index))
}

const fn hex(value: u32) -> Rgb {
    Rgb::hex(value)
}

const fn palette256(codes: [u8; HighlightClass::COUNT]) -> [Style; HighlightClass::COUNT] {
    let mut styles = [Style::PLAIN; HighlightClass::COUNT];
    let mut i = 0;
    while i < HighlightClass::COUNT {
        styles[i] = indexed(codes[i]);
        i += 1;
    }
    // keyword.control is the bold variant of its color in every 256-color theme.
    styles[HighlightClass::KeywordControl.index()] =
        styles[HighlightClass::KeywordControl.index()].bold();
    styles
}

const fn html_palette(colors: [u32; HighlightClass::COUNT]) -> [Rgb; HighlightClass::COUNT] {
    let mut out = [Rgb::new(0, 0, 0); HighlightClass::COUNT];
    let mut i = 0;
    while i < HighlightClass::COUNT {
        out[i] = hex(colors[i]);
        i += 1;
    }
    out
}

/// Name of the theme used when none is selected.
pub const DEFAULT_THEME: &str = "default";

/// The `default` theme, using the 16 standard terminal colors.
const DEFAULT: Theme = Theme {
    name: DEFAULT_THEME,
    ansi: [
        named(NamedColor::Magenta),
        named(NamedColor::Blue),
        named(NamedColor::Green),
        named(NamedColor::BrightBlack),
        named(NamedColor::Red),
        named(NamedColor::Red).bold(),
        named(NamedColor::Cyan),
        named(NamedColor::Yellow),
        named(NamedColor::Magenta).bold(),
        named(NamedColor::Green).bold(),
    ],
    html: html_palette([
        0xB28CFF, 0x66B2FF, 0x9CCC65, 0x7F7F7F, 0xCC7832, 0xCC7832, 0xDA70D6, 0xFFFFFF, 0x9C9CFF,
        0x6A8759,
    ]),
    line_number: named(NamedColor::BrightBlack),
    line_number_html: hex(0x7F7F7F),
    background: hex(0x1E1E1E),
    foreground: hex(0xD4D4D4),
};

/// Every built-in theme. `default` comes first.
pub static BUILTIN_THEMES: [Theme; 12] = [
    DEFAULT,
    Theme {
        name: "gruvbox",
        ansi: palette256([142, 109, 108, 245, 167, 167, 142, 223, 175, 208]),
        html: html_palette([
            0xA9B665, 0x89B482, 0xA9B665, 0x928374, 0xFE8019, 0xFE8019, 0xD3869B, 0xEBDBB2,
            0xD8A657, 0xFABD2F,
        ]),
        line_number: indexed(245),
        line_number_html: hex(0x928374),
        background: hex(0x282828),
        foreground: hex(0xEBDBB2),
    },
    Theme {
        name: "tokyonight-night",
        ansi: palette256([73, 110, 158, 102, 175, 175, 117, 188, 215, 215]),
        html: html_palette([
            0x7DCFFF, 0x7AA87B, 0x9ECCBB, 0x565F89, 0xBB9AFD, 0xBB9AFD, 0x73DACA, 0xC0CAF5,
            0xBB9AFD, 0xFF9E64,
        ]),
        line_number: indexed(102),
        line_number_html: hex(0x565F89),
        background: hex(0x1A1B26),
        foreground: hex(0xA9B1D6),
    },
    Theme {
        name: "tokyonight-storm",
        ansi: palette256([73, 75, 114, 102, 176, 176, 117, 188, 215, 215]),
        html: html_palette([
            0x7DCFFF, 0x7AA87B, 0x9ECCBB, 0x565F89, 0xBB9AFD, 0xBB9AFD, 0x73DACA, 0xC0CAF5,
            0xBB9AFD, 0xFF9E64,
        ]),
        line_number: indexed(102),
        line_number_html: hex(0x565F89),
        background: hex(0x24283B),
        foreground: hex(0xC0CAF5),
    },
    Theme {
        name: "catppuccin-mocha",
        ansi: palette256([117, 75, 114, 102, 176, 176, 117, 188, 215, 215]),
        html: html_palette([
            0x89B4FA, 0x89B4FA, 0xA6E3A1, 0x6C7086, 0xCBA6F7, 0xCBA6F7, 0xF5C2E7, 0xCDD6F4,
            0xF38BA8, 0xFAB387,
        ]),
        line_number: indexed(102),
        line_number_html: hex(0x6C7086),
        background: hex(0x1E1E2E),
        foreground: hex(0xCDD6F4),
    },
    Theme {
        name: "dracula",
        ansi: palette256([141, 117, 228, 102, 212, 212, 117, 255, 141, 215]),
        html: html_palette([
            0xBD93F9, 0x50FA7B, 0xF1FA8C, 0x6272A4, 0xFF79C6, 0xFF79C6, 0x8BE9FD, 0xF8F8F2,
            0xBD93F9, 0xFFB86C,
        ]),
        line_number: indexed(102),
        line_number_html: hex(0x6272A4),
        background: hex(0x282A36),
        foreground: hex(0xF8F8F2),
    },
    Theme {
        name: "nord",
        ansi: palette256([116, 81, 108, 59, 81, 81, 116, 188, 180, 209]),
        html: html_palette([
            0x88C0D0, 0x88C0D0, 0xA3BE8C, 0x4C566A, 0x81A1C1, 0x81A1C1, 0x8FBCBB, 0xD8DEE9,
            0xB48EAD, 0xD08770,
        ]),
        line_number: indexed(59),
        line_number_html: hex(0x4C566A),
        background: hex(0x2E3440),
        foreground: hex(0xD8DEE9),
    },
    Theme {
        name: "solarized-dark",
        ansi: palette256([37, 33, 37, 240, 64, 64, 136, 254, 125, 166]),
        html: html_palette([
            0x268BD2, 0x268BD2, 0x859900, 0x586E75, 0xCB4B16, 0xCB4B16, 0xB58900, 0x93A1A1,
            0x6C71C4, 0xDC322F,
        ]),
        line_number: indexed(240),
        line_number_html: hex(0x586E75),
        background: hex(0x002B36),
        foreground: hex(0x839496),
    },
    Theme {
        name: "solarized-light",
        ansi: palette256([37, 33, 37, 244, 64, 64, 136, 235, 125, 166]),
        html: html_palette([
            0x268BD2, 0x268BD2, 0x859900, 0x93A1A1, 0xCB4B16, 0xCB4B16, 0xB58900, 0x586E75,
            0x6C71C4, 0xDC322F,
        ]),
        line_number: indexed(244),
        line_number_html: hex(0x93A1A1),
        background: hex(0xFDF6E3),
        foreground: hex(0x586E75),
    },
    Theme {
        name: "one-dark",
        ansi: palette256([39, 75, 114, 59, 176, 176, 39, 145, 215, 215]),
        html: html_palette([
            0x61AFEF, 0x61AFEF, 0x98C379, 0x5C6370, 0xC678DD, 0xC678DD, 0xE5C07B, 0xABB2BF,
            0xD19A66, 0xE06C75,
        ]),
        line_number: indexed(59),
        line_number_html: hex(0x5C6370),
        background: hex(0x282C34),
        foreground: hex(0xABB2BF),
    },
    Theme {
        name: "monokai",
        ansi: palette256([81, 148, 186, 102, 197, 197, 81, 255, 141, 208]),
        html: html_palette([
            0xA6E22E, 0xA6E22E, 0xE6DB74, 0x75715E, 0xF92672, 0xF92672, 0x66D9EF, 0xF8F8F2,
            0xAE81FF, 0xFD971F,
        ]),
        line_number: indexed(102),
        line_number_html: hex(0x75715E),
        background: hex(0x272822),
        foreground: hex(0xF8F8F2),
    },
    Theme {
        name: "github-dark",
        ansi: palette256([117, 183, 150, 102, 204, 204, 117, 188, 117, 215]),
        html: html_palette([
            0x88B0EF, 0x88B0EF, 0x7BB97F, 0x6A737D, 0xD19A66, 0xD19A66, 0xE6C07B, 0xC0CAF5,
            0xD19A66, 0xF8F8F2,
        ]),
        line_number: indexed(102),
        line_number_html: hex(0x6A737D),
        background: hex(0x22272E),
        foreground: hex(0xADBAC7),
    },
];
