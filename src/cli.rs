//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use codetint_render::RenderOptions;
use codetint_syntax::Language;
use codetint_theme::{Theme, DEFAULT_THEME};

#[derive(Parser, Debug)]
#[command(name = "codetint")]
#[command(about = "Syntax-highlight a source file for the terminal or the browser")]
#[command(version)]
pub struct Cli {
    /// Source file to highlight
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Use an external highlight query instead of the bundled one
    #[arg(short, long, value_name = "FILE")]
    pub query: Option<PathBuf>,

    /// Color theme
    #[arg(
        short = 'c',
        long,
        value_name = "THEME",
        default_value = DEFAULT_THEME,
        value_parser = parse_theme
    )]
    pub theme: &'static Theme,

    /// Language, overriding detection from the file extension
    #[arg(short, long, value_name = "LANG", value_parser = parse_language)]
    pub language: Option<Language>,

    /// Write to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output HTML instead of ANSI colors
    #[arg(long)]
    pub html: bool,

    /// With --html, emit only the <pre><code> block
    #[arg(long, requires = "html")]
    pub fragment: bool,

    /// Show line numbers
    #[arg(short = 'n', long)]
    pub line_numbers: bool,

    /// Verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            html: self.html,
            line_numbers: self.line_numbers,
        }
    }
}

fn parse_theme(name: &str) -> Result<&'static Theme, String> {
    Theme::by_name(name).ok_or_else(|| {
        format!(
            "unknown theme '{name}' (available: {})",
            Theme::names().collect::<Vec<_>>().join(", ")
        )
    })
}

fn parse_language(name: &str) -> Result<Language, String> {
    Language::from_name(name).ok_or_else(|| {
        format!(
            "unsupported language '{name}' (available: {})",
            Language::names().collect::<Vec<_>>().join(", ")
        )
    })
}
