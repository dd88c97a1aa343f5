//! Structural insertion into marked blocks.
//!
//! A marked block (a reStructuredText `toctree` being the usual case) looks
//! like this:
//!
//! ```text
//! .. toctree::          <- marker line
//!     :maxdepth: 1      <- optional parameter lines
//!                       <- blank separator
//!     foo.bar           <- indented entries
//!     foo.baz
//!                       <- blank terminator (or end of the indented run)
//! ```
//!
//! [`BlockInsertion::apply`] inserts entries into the first such block at or
//! after an optional anchor line. Only lines in the entry run change; the
//! rest of the document is reproduced line by line.

use super::DomainError;

/// Marker line of a reStructuredText table of contents.
pub const TOCTREE_MARKER: &str = ".. toctree::";

const INDENT: &str = "    ";

/// How to insert entries into a marked block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockInsertion {
    marker: String,
    after: Option<String>,
    sort: bool,
}

impl BlockInsertion {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            after: None,
            sort: false,
        }
    }

    /// Insert into a `.. toctree::` block.
    pub fn toctree() -> Self {
        Self::new(TOCTREE_MARKER)
    }

    /// Re-sort the whole entry run after inserting.
    pub fn sorted(mut self) -> Self {
        self.sort = true;
        self
    }

    /// Only consider blocks at or after the first line containing `anchor`.
    pub fn after(mut self, anchor: impl Into<String>) -> Self {
        self.after = Some(anchor.into());
        self
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Return `content` with `entries` inserted into the marked block.
    ///
    /// # Errors
    ///
    /// [`DomainError::AnchorNotFound`] if an anchor was given and no line
    /// contains it; [`DomainError::MarkerNotFound`] if no marker line follows.
    pub fn apply<S: AsRef<str>>(&self, content: &str, entries: &[S]) -> Result<String, DomainError> {
        let mut lines: Vec<String> = content.lines().map(|l| l.trim_end().to_string()).collect();

        let offset = match &self.after {
            Some(anchor) => lines
                .iter()
                .position(|l| l.contains(anchor.as_str()))
                .ok_or_else(|| DomainError::AnchorNotFound {
                    anchor: anchor.clone(),
                })?,
            None => 0,
        };

        let marker = self.marker.trim();
        let marker_index = lines[offset..]
            .iter()
            .position(|l| l.trim() == marker)
            .map(|i| i + offset)
            .ok_or_else(|| DomainError::MarkerNotFound {
                marker: self.marker.clone(),
            })?;

        let start = match lines[marker_index..].iter().position(|l| l.is_empty()) {
            Some(i) => marker_index + i + 1,
            None => {
                lines.push(String::new());
                lines.len()
            }
        };

        let end = start
            + lines[start..]
                .iter()
                .take_while(|l| !l.is_empty() && l.starts_with(char::is_whitespace))
                .count();

        let mut block: Vec<String> = lines[start..end].to_vec();
        block.extend(
            entries
                .iter()
                .map(|e| format!("{INDENT}{}", e.as_ref().trim_start())),
        );
        if self.sort {
            block.sort();
        }

        let needs_separator = lines.get(end).is_some_and(|l| !l.is_empty());

        let mut out = String::with_capacity(content.len() + entries.len() * 32);
        let tail = lines.split_off(end);
        lines.truncate(start);
        for line in lines
            .iter()
            .chain(block.iter())
            .chain(needs_separator.then(String::new).iter())
            .chain(tail.iter())
        {
            out.push_str(line);
            out.push('\n');
        }
        Ok(out)
    }
}
