use super::{exit_with_error, fetch_tags};
use crate::context::{AppContext, VerbosityLevel};
use crate::format::{self, Formattable, OutputFormat};
use libpushmi::actions;
use serde::Serialize;
use std::io::{self, Write};

/// Tags as printed by `list`; structured formats emit a bare sequence
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct TagListing<'a>(pub &'a [String]);

impl Formattable for TagListing<'_> {
    fn format_pretty(&self) -> String {
        self.0.join("\n")
    }
}

/// Write `tags` to `out`. Pretty output is one tag per line and nothing else.
pub fn write_listing<W: Write>(
    out: &mut W,
    tags: &[String],
    fmt: OutputFormat,
) -> Result<(), String> {
    if fmt == OutputFormat::Pretty {
        return actions::list(out, tags).map_err(|e| e.to_string());
    }

    let output = format::format_output(&TagListing(tags), fmt)?;
    writeln!(out, "{}", output.trim_end()).map_err(|e| e.to_string())
}

/// Handle the list command
pub fn handle_list(ctx: &AppContext, source: &str, fmt: OutputFormat) {
    let tags = match fetch_tags(ctx, source) {
        Ok(tags) => tags,
        Err(e) => exit_with_error(ctx, &e),
    };
    if tags.is_empty() {
        format::print(
            ctx,
            VerbosityLevel::Verbose,
            &format!("No tags found for {}", source),
        );
    }

    let result = write_listing(&mut io::stdout().lock(), &tags, fmt);
    if let Err(e) = result {
        format::error(ctx, &e);
        std::process::exit(1);
    }
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
