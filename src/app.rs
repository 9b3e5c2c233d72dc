//! The driver: read, parse, query, render, write.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use codetint_render::{label_width, render_with_stats, HtmlDocument};
use codetint_syntax::{compile_query, default_query, parse, HighlightQuery, Language};

use crate::cli::Cli;

pub fn run(cli: &Cli) -> Result<()> {
    let source = fs::read(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;

    let language = match cli.language {
        Some(language) => language,
        None => Language::from_path(&cli.file).with_context(|| {
            format!(
                "cannot detect the language of {}; pass -l with one of: {}",
                cli.file.display(),
                Language::names().collect::<Vec<_>>().join(", ")
            )
        })?,
    };
    tracing::debug!(%language, file = %cli.file.display(), "selected language");

    let query = load_query(language, cli.query.as_deref())?;
    let tree = parse(language, &source)?;
    if tree.has_error() {
        tracing::warn!(file = %cli.file.display(), "source has syntax errors; highlighting may be partial");
    }
    let matches = query.run(&tree, &source)?;

    let options = cli.render_options();
    let (body, stats) = render_with_stats(&source, matches, cli.theme, &options);
    tracing::debug!(
        theme = cli.theme.name(),
        styled = stats.styled,
        line_labels = stats.line_labels,
        "rendered"
    );

    let output = if options.html {
        let mut document = HtmlDocument::new(cli.theme).fragment(cli.fragment);
        if options.line_numbers {
            document = document.with_line_numbers(label_width(&source));
        }
        document.wrap(&body)
    } else {
        body
    };

    write_output(cli.output.as_deref(), &output)
}

fn load_query(language: Language, path: Option<&Path>) -> Result<HighlightQuery> {
    let Some(path) = path else {
        return Ok(default_query(language)?);
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read query file {}", path.display()))?;
    let query = compile_query(language, &text)
        .with_context(|| format!("failed to compile query file {}", path.display()))?;
    Ok(query)
}

fn write_output(path: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(bytes)
                .and_then(|()| stdout.flush())
                .context("failed to write to stdout")
        }
    }
}
