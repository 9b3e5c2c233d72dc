use codetint_render::{render, RenderOptions};
use codetint_syntax::{compile_query, default_query, parse, Language};
use codetint_theme::Theme;

fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn highlight(language: Language, source: &str, options: &RenderOptions) -> String {
    let tree = parse(language, source.as_bytes()).unwrap();
    let query = default_query(language).unwrap();
    let matches = query.run(&tree, source.as_bytes()).unwrap();
    let out = render(source.as_bytes(), matches, Theme::default_theme(), options);
    String::from_utf8(out).unwrap()
}

#[test]
fn test_python_scenario_end_to_end() {
    let source = "def f():\n    pass\n";
    let tree = parse(Language::Python, source.as_bytes()).unwrap();
    let query = compile_query(
        Language::Python,
        "\"def\" @keyword\n(function_definition name: (identifier) @function)",
    )
    .unwrap();
    let matches = query.run(&tree, source.as_bytes()).unwrap();
    let out = render(
        source.as_bytes(),
        matches,
        Theme::default_theme(),
        &RenderOptions::default(),
    );
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\x1b[31mdef\x1b[0m \x1b[34mf\x1b[0m():\n    pass\n"
    );
}

#[test]
fn test_every_language_renders_its_source_back() {
    let samples = [
        (Language::Python, "import os\n# hi\nprint(os.name)\n"),
        (Language::C, "#include <stdio.h>\nint main(void) { return 0; }\n"),
        (Language::Cpp, "template <typename T> T id(T x) { return x; }\n"),
        (Language::JavaScript, "const x = `a${1}`; // c\n"),
        (Language::TypeScript, "let n: number = 1 < 2 ? 3 : 4;\n"),
        (Language::Tsx, "const a = <div class=\"x\">&amp;</div>;\n"),
        (Language::Rust, "fn main() { println!(\"{}\", 1 << 2); }\n"),
        (Language::Go, "package main\nfunc main() {}\n"),
        (Language::Json, "{\"a\": [1, true, null]}\n"),
        (Language::Toml, "[package]\nname = \"x\"\n"),
        (Language::Html, "<p class=\"a\">x &lt; y</p>\n"),
        (Language::Css, "a > b { color: #fff; }\n"),
        (Language::Bash, "echo \"$HOME\" && ls > /dev/null\n"),
        (Language::Markdown, "# Title\n\n- item\n"),
    ];

    for (language, source) in samples {
        let ansi = highlight(language, source, &RenderOptions::default());
        assert_eq!(strip_ansi(&ansi), source, "{} output lost bytes", language);
    }
}

#[test]
fn test_rust_keywords_and_strings_are_styled() {
    let out = highlight(
        Language::Rust,
        "fn main() { let s = \"hi\"; }",
        &RenderOptions {
            html: true,
            line_numbers: false,
        },
    );
    assert!(out.contains("<span class=\"keyword\">fn</span>"), "{out}");
    assert!(out.contains("<span class=\"string\">\"hi\"</span>"), "{out}");
}

#[test]
fn test_multiline_comment_gets_labels() {
    let source = "/* a\n   b */\nint x;\n";
    let out = highlight(
        Language::C,
        source,
        &RenderOptions {
            html: true,
            line_numbers: true,
        },
    );
    assert_eq!(out.matches("class=\"line-number\"").count(), 3);
    assert!(out.contains("<span class=\"comment\">/* a\n<span class=\"line-number\">   2</span>   b */</span>"));
}
