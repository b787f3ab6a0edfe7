// crates/insert_snippets/src/lib.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use snippet_extractor::{resolve_snippet, SNIPPET_MARKER};

/// Renders the file at `file_path`, replacing every snippet declaration
/// with the snippet it references.
///
/// A declaration is a line starting with `!snippet `; all other lines
/// pass through unchanged. The first failing declaration aborts
/// rendering with an error prefixed by the file path and the 1-based
/// line number of the declaration.
pub fn render_file<P: AsRef<Path>>(file_path: P, skip_checksum: bool) -> Result<String> {
    let path = file_path.as_ref();
    let content =
        fs::read_to_string(path).with_context(|| format!("couldn't open '{}'", path.display()))?;

    let mut output = String::new();
    for (i, line) in content.lines().enumerate() {
        match line.strip_prefix(SNIPPET_MARKER) {
            Some(declaration) => {
                let snippet = resolve_snippet(declaration, skip_checksum)
                    .with_context(|| format!("{}:{}", path.display(), i + 1))?;
                output.push_str(&snippet);
            }
            None => {
                output.push_str(line);
                output.push('\n');
            }
        }
    }
    Ok(output)
}
