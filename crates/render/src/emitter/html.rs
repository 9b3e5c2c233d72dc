//! HTML backend.

use codetint_theme::TagStyle;

use super::{pad_line_number, Emitter};

/// Appends `bytes` to `out` with `&`, `<` and `>` replaced by entities.
///
/// Every other byte, quotes included, is copied as-is.
pub fn escape_html(bytes: &[u8], out: &mut Vec<u8>) {
    let mut last = 0;
    for (i, byte) in bytes.iter().enumerate() {
        let entity: &[u8] = match byte {
            b'&' => b"&amp;",
            b'<' => b"&lt;",
            b'>' => b"&gt;",
            _ => continue,
        };
        out.extend_from_slice(&bytes[last..i]);
        out.extend_from_slice(entity);
        last = i + 1;
    }
    out.extend_from_slice(&bytes[last..]);
}

/// Writes styled runs as `<span class="…">…</span>`.
///
/// Runs whose tag has no HTML class are written without a wrapper. Colors
/// are left to the page stylesheet; see [`crate::HtmlDocument`].
#[derive(Default)]
pub struct HtmlEmitter {
    out: Vec<u8>,
    open_span: bool,
}

impl HtmlEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: Vec::with_capacity(capacity),
            open_span: false,
        }
    }
}

impl Emitter for HtmlEmitter {
    fn open(&mut self, style: &TagStyle) {
        if let Some(class) = style.class {
            self.out.extend_from_slice(b"<span class=\"");
            self.out.extend_from_slice(class.css_class().as_bytes());
            self.out.extend_from_slice(b"\">");
            self.open_span = true;
        }
    }

    fn close(&mut self) {
        if self.open_span {
            self.out.extend_from_slice(b"</span>");
            self.open_span = false;
        }
    }

    fn text(&mut self, bytes: &[u8]) {
        escape_html(bytes, &mut self.out);
    }

    fn line_label(&mut self, line: usize, width: usize) {
        self.out.extend_from_slice(b"<span class=\"line-number\">");
        self.out
            .extend_from_slice(pad_line_number(line, width).as_bytes());
        self.out.extend_from_slice(b"</span>");
    }

    fn finish(self) -> Vec<u8> {
        self.out
    }
}
