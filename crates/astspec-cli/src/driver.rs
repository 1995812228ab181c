//! Compilation driver: read the declaration file, run the pipeline, write
//! the schema document.

use crate::args::CliArgs;
use anyhow::{Context, Result, bail};
use astspec_common::{Diagnostic, DiagnosticCategory};
use std::fs;

pub fn run(args: &CliArgs) -> Result<()> {
    let source_text = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let file_name = args.input.display().to_string();

    let (file, diagnostics) = astspec_parser::parse_source_file(file_name, source_text);
    if !diagnostics.is_empty() {
        report_diagnostics(&file.text, &diagnostics);
        bail!("found {} syntax error(s)", diagnostics.len());
    }

    let generated = astspec_emitter::generate(&file)?;
    if !generated.missing.is_empty() {
        tracing::warn!(
            count = generated.missing.len(),
            "output contains dangling references to missing declarations"
        );
    }

    let mut output = serde_json::to_string_pretty(&generated.document)
        .context("failed to serialize schema document")?;
    output.push('\n');
    fs::write(&args.out, output)
        .with_context(|| format!("failed to write {}", args.out.display()))?;

    tracing::info!(
        out = %args.out.display(),
        missing = generated.missing.len(),
        fallbacks = generated.fallbacks.len(),
        "schema written"
    );
    Ok(())
}

fn report_diagnostics(text: &str, diagnostics: &[Diagnostic]) {
    for diag in diagnostics {
        let (line, column) = line_and_column(text, diag.start);
        let severity = match diag.category {
            DiagnosticCategory::Warning => "warning",
            _ => "error",
        };
        eprintln!(
            "{file}({line},{column}): {severity} TS{code}: {message}",
            file = diag.file,
            code = diag.code,
            message = diag.message_text
        );
    }
}

/// 1-based line and column for a byte offset.
fn line_and_column(text: &str, offset: u32) -> (usize, usize) {
    let offset = (offset as usize).min(text.len());
    let before = &text[..offset];
    let line = before.bytes().filter(|&b| b == b'\n').count() + 1;
    let column = before
        .rfind('\n')
        .map_or(offset + 1, |newline| offset - newline);
    (line, column)
}
