// crates/snippet_extractor/src/lib.rs

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use sha1::{Digest, Sha1};

/// Marker prefix identifying a snippet declaration line.
pub const SNIPPET_MARKER: &str = "!snippet ";

/// The declaration form reported when a line fails to parse.
const SNIPPET_FORM: &str = "!snippet file_path start_line num_lines sha1";

/// A parsed snippet declaration.
///
/// * `file_path` is evaluated relative to the current working directory.
/// * `start_line` is a 1-based inclusive line number.
/// * `num_lines` is a positive number of lines to include, starting at
///   `start_line`.
/// * `checksum` is the base64-encoded SHA-1 hash of the snippet
///   content, used to trigger an alert if the referenced lines change.
#[derive(Debug, PartialEq, Eq)]
pub struct SnippetDeclaration {
    pub file_path: String,
    pub start_line: usize,
    pub num_lines: usize,
    pub checksum: String,
}

/// Parses the space-separated fields of a snippet declaration, i.e. the
/// part of the declaration line after the `!snippet ` marker.
pub fn parse_snippet_declaration(line: &str) -> Result<SnippetDeclaration> {
    let parts: Vec<&str> = line.split(' ').collect();
    if parts.len() != 4 {
        bail!("snippet declarations should be of the form `{}`", SNIPPET_FORM);
    }

    let start_line = parts[1]
        .parse::<usize>()
        .ok()
        .filter(|&n| n > 0)
        .context("`start_line` must be greater than 0")?;

    let num_lines = parts[2]
        .parse::<usize>()
        .ok()
        .filter(|&n| n > 0)
        .context("`num_lines` must be greater than 0")?;

    Ok(SnippetDeclaration {
        file_path: parts[0].to_string(),
        start_line,
        num_lines,
        checksum: parts[3].to_string(),
    })
}

/// Reads `num_lines` lines from the file at `file_path`, starting at
/// the 1-based line number `start_line`. The returned snippet is
/// newline-terminated.
///
/// # Errors
///
/// Returns an error if the file can't be read or the requested range
/// runs past the end of the file.
pub fn read_snippet<P: AsRef<Path>>(
    file_path: P,
    start_line: usize,
    num_lines: usize,
) -> Result<String> {
    let path = file_path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("couldn't open snippet at '{}'", path.display()))?;
    let lines: Vec<&str> = content.lines().collect();

    if start_line == 0 {
        bail!("`start_line` must be greater than 0");
    }
    let start = start_line - 1;
    let end = start + num_lines;
    if end > lines.len() {
        bail!("`num_lines` is greater than the remaining number of lines");
    }

    let mut snippet = String::new();
    for line in &lines[start..end] {
        snippet.push_str(line);
        snippet.push('\n');
    }
    Ok(snippet)
}

/// Returns the base64-encoded SHA-1 digest of the snippet content.
pub fn snippet_checksum(snippet: &str) -> String {
    STANDARD.encode(Sha1::digest(snippet.as_bytes()))
}

/// Resolves a snippet declaration line (without its `!snippet ` marker)
/// to the content it references.
///
/// # Errors
///
/// Returns an error if the declaration fails to parse, the referenced
/// line range can't be read, or the declared checksum doesn't match the
/// content. Checksum verification is skipped when `skip_checksum` is
/// set.
pub fn resolve_snippet(declaration: &str, skip_checksum: bool) -> Result<String> {
    let decl = parse_snippet_declaration(declaration).context("couldn't parse snippet line")?;

    let snippet = read_snippet(&decl.file_path, decl.start_line, decl.num_lines)
        .context("couldn't get snippet")?;

    if !skip_checksum {
        let actual = snippet_checksum(&snippet);
        if decl.checksum != actual {
            bail!("checksum doesn't match actual value: {}", actual);
        }
    }

    Ok(snippet)
}
