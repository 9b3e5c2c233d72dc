//! Standalone HTML pages around rendered output.
//!
//! The HTML backend only writes class names. The page produced here carries
//! the color rules for every built-in theme, scoped by a `theme-<name>` class
//! on `<body>`, so the reader can switch themes without re-rendering.

use codetint_theme::{HighlightClass, Theme};

const BASE_CSS: &str = "\
body { margin: 20px; font-family: 'JetBrains Mono', 'Fira Code', 'Consolas', monospace; }
pre { margin: 0; line-height: 1.4; white-space: pre-wrap; word-wrap: break-word; }
.controls { margin-bottom: 1em; }
.controls button { margin-right: 10px; padding: 8px 15px; }
.controls select { padding: 8px; border-radius: 4px; }
.code-container { border: 1px solid #333; padding: 10px; border-radius: 5px; overflow-x: auto; }
";

const SCRIPT: &str = "\
function copyCode() {
  const code = document.getElementById('code-content');
  if (!code) return;
  const copy = code.cloneNode(true);
  copy.querySelectorAll('.line-number').forEach(label => label.remove());
  const text = copy.textContent;
  if (navigator.clipboard && navigator.clipboard.writeText) {
    navigator.clipboard.writeText(text).catch(err => console.error('copy failed', err));
  } else {
    const area = document.createElement('textarea');
    area.value = text;
    document.body.appendChild(area);
    area.select();
    document.execCommand('copy');
    document.body.removeChild(area);
  }
}

function applyTheme(name) {
  document.body.className = 'theme-' + name;
  const select = document.getElementById('theme-select');
  if (select) select.value = name;
  localStorage.setItem('codetint-theme', name);
}

document.addEventListener('DOMContentLoaded', () => {
  const saved = localStorage.getItem('codetint-theme');
  if (saved && document.querySelector('#theme-select option[value=\"' + saved + '\"]')) {
    applyTheme(saved);
  }
});
";

/// Extra CSS declarations per class, on top of the color.
fn class_decoration(class: HighlightClass) -> &'static str {
    match class {
        HighlightClass::Comment => " font-style: italic;",
        HighlightClass::KeywordControl => " font-weight: bold;",
        _ => "",
    }
}

/// Wraps the HTML backend's output in a page or a bare code block.
#[derive(Debug, Clone, Copy)]
pub struct HtmlDocument<'t> {
    theme: &'t Theme,
    line_number_width: Option<usize>,
    fragment: bool,
}

impl<'t> HtmlDocument<'t> {
    /// A full page opening with `theme` selected.
    pub fn new(theme: &'t Theme) -> Self {
        Self {
            theme,
            line_number_width: None,
            fragment: false,
        }
    }

    /// Sizes the line-number gutter to `width` columns.
    pub fn with_line_numbers(mut self, width: usize) -> Self {
        self.line_number_width = Some(width);
        self
    }

    /// Emits only the `<pre><code>` block, without page or stylesheet.
    pub fn fragment(mut self, fragment: bool) -> Self {
        self.fragment = fragment;
        self
    }

    /// Returns `body` wrapped according to the settings.
    pub fn wrap(&self, body: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(body.len() + 8 * 1024);

        if self.fragment {
            out.extend_from_slice(b"<pre><code>");
            out.extend_from_slice(body);
            out.extend_from_slice(b"</code></pre>\n");
            return out;
        }

        out.extend_from_slice(self.head().as_bytes());
        out.extend_from_slice(body);
        out.extend_from_slice(b"</code></pre>\n</div>\n</body>\n</html>\n");
        out
    }

    fn head(&self) -> String {
        let mut head = String::from(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Highlighted Code</title>\n<style>\n",
        );
        head.push_str(BASE_CSS);
        head.push_str(&self.stylesheet());
        head.push_str("</style>\n<script>\n");
        head.push_str(SCRIPT);
        head.push_str("</script>\n</head>\n");

        head.push_str(&format!("<body class=\"theme-{}\">\n", self.theme.name()));
        head.push_str("<div class=\"controls\">\n");
        head.push_str("  <button onclick=\"copyCode()\">Copy Code</button>\n");
        head.push_str("  <label for=\"theme-select\">Theme:</label>\n");
        head.push_str(
            "  <select id=\"theme-select\" onchange=\"applyTheme(this.value)\">\n",
        );
        for name in Theme::names() {
            let selected = if name == self.theme.name() {
                " selected"
            } else {
                ""
            };
            head.push_str(&format!(
                "    <option value=\"{name}\"{selected}>{name}</option>\n"
            ));
        }
        head.push_str("  </select>\n</div>\n");
        head.push_str("<div class=\"code-container\">\n<pre><code id=\"code-content\">");
        head
    }

    /// Color rules for every built-in theme.
    fn stylesheet(&self) -> String {
        let mut css = String::new();

        if let Some(width) = self.line_number_width {
            css.push_str(&format!(
                ".line-number {{ display: inline-block; min-width: {width}ch; text-align: right; \
                 padding-right: 1em; margin-right: 1em; border-right: 1px solid #333; \
                 user-select: none; -webkit-user-select: none; }}\n"
            ));
        }

        for theme in Theme::all() {
            let scope = format!(".theme-{}", theme.name());
            css.push_str(&format!(
                "{scope} {{ background: {}; color: {}; }}\n",
                theme.background(),
                theme.foreground()
            ));
            for class in HighlightClass::ALL {
                css.push_str(&format!(
                    "{scope} .{} {{ color: {};{} }}\n",
                    class.css_class(),
                    theme.html_color(class),
                    class_decoration(class)
                ));
            }
            css.push_str(&format!(
                "{scope} .line-number {{ color: {}; }}\n",
                theme.line_number_color()
            ));
        }
        css
    }
}
