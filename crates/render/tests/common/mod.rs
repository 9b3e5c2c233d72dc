//! Helpers shared by the render integration tests.

#![allow(dead_code)]

use codetint_render::{render, Match, RenderOptions};
use codetint_theme::Theme;

/// Removes every `ESC [ ... m` sequence.
pub fn strip_ansi(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == 0x1b && bytes.get(i + 1) == Some(&b'[') {
            i += 2;
            while i < bytes.len() && bytes[i] != b'm' {
                i += 1;
            }
            i += 1;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    out
}

/// Removes tags and undoes `&amp;`, `&lt;` and `&gt;`.
///
/// Only valid for output where every literal `<` was escaped, which the
/// HTML backend guarantees.
pub fn strip_html(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'<' => {
                while i < bytes.len() && bytes[i] != b'>' {
                    i += 1;
                }
                i += 1;
            }
            b'&' => {
                let rest = &bytes[i..];
                let (byte, len) = if rest.starts_with(b"&amp;") {
                    (b'&', 5)
                } else if rest.starts_with(b"&lt;") {
                    (b'<', 4)
                } else if rest.starts_with(b"&gt;") {
                    (b'>', 4)
                } else {
                    (b'&', 1)
                };
                out.push(byte);
                i += len;
            }
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }
    out
}

/// Removes `<span class="line-number">...</span>` labels from HTML output.
pub fn strip_html_labels(html: &str) -> String {
    let open = "<span class=\"line-number\">";
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(at) = rest.find(open) {
        out.push_str(&rest[..at]);
        let after = &rest[at + open.len()..];
        match after.find("</span>") {
            Some(close) => rest = &after[close + "</span>".len()..],
            None => {
                rest = after;
                break;
            }
        }
    }
    out.push_str(rest);
    out
}

pub fn render_ansi(source: &[u8], matches: Vec<Match<'_>>, line_numbers: bool) -> Vec<u8> {
    let options = RenderOptions {
        html: false,
        line_numbers,
    };
    render(source, matches, Theme::default_theme(), &options)
}

pub fn render_html(source: &[u8], matches: Vec<Match<'_>>, line_numbers: bool) -> Vec<u8> {
    let options = RenderOptions {
        html: true,
        line_numbers,
    };
    render(source, matches, Theme::default_theme(), &options)
}
