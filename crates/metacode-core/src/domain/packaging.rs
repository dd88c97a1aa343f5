//! Idempotent edits to packaging metadata.
//!
//! `setup.py` and `MANIFEST.in` are generated once and then owned by the
//! developer, so later features (the GUI subsystem) may only add lines.
//! Every edit here returns the content unchanged when the entry is already
//! present.

use super::DomainError;

const INSTALL_REQUIRES: &str = "install_requires=[";
const ENTRY_POINTS: &str = "entry_points={";

/// Add `requirement` to the `install_requires` list of a `setup.py`.
///
/// Only the list itself is searched and edited, whether it spans several
/// lines or sits on one (`install_requires=["numpy"],`).
pub fn add_requirement(setup_py: &str, requirement: &str) -> Result<String, DomainError> {
    let mut lines: Vec<String> = setup_py.lines().map(str::to_string).collect();
    let borrowed: Vec<&str> = lines.iter().map(String::as_str).collect();
    let start = find_line(&borrowed, INSTALL_REQUIRES)?;
    let open = lines[start].find(INSTALL_REQUIRES).map_or(0, |i| i + INSTALL_REQUIRES.len() - 1);
    let (end, close) = matching_bracket(&borrowed, start, open).ok_or_else(|| DomainError::MarkerNotFound {
        marker: format!("{INSTALL_REQUIRES} ... ]"),
    })?;

    let listed = |quote: char| format!("{quote}{requirement}{quote}");
    let in_list = |line: usize, text: &str| {
        let from = if line == start { open + 1 } else { 0 };
        let to = if line == end { close } else { text.len() };
        let text = &text[from..to];
        text.contains(&listed('"')) || text.contains(&listed('\''))
    };
    if borrowed[start..=end].iter().enumerate().any(|(i, l)| in_list(start + i, l)) {
        return Ok(setup_py.to_string());
    }

    let quoted = listed('"');
    let prefix_end = if end == start { open + 1 } else { 0 };
    let before_close = lines[end][prefix_end..close].trim_end().to_string();
    if !before_close.trim().is_empty() || end == start {
        // Entries share a line with the closing bracket.
        let separator = match before_close.trim() {
            "" => "",
            t if t.ends_with(',') => " ",
            _ => ", ",
        };
        let prefix = lines[end][..prefix_end].to_string();
        let suffix = lines[end][close..].to_string();
        lines[end] = format!("{prefix}{before_close}{separator}{quoted}{suffix}");
    } else {
        if let Some(last) = (start + 1..end).rev().find(|&i| !lines[i].trim().is_empty()) {
            if !lines[last].trim_end().ends_with(',') {
                lines[last] = format!("{},", lines[last].trim_end());
            }
        }
        let entry = format!("{}{quoted},", item_indent(&lines[start]));
        lines.insert(end, entry);
    }

    let borrowed: Vec<&str> = lines.iter().map(String::as_str).collect();
    Ok(join_lines(&borrowed, setup_py))
}

/// Register `entry` (e.g. `foo = foo.gui.app:main`) under `group` in the
/// `entry_points` of a `setup.py`, adding the block when it is missing.
pub fn add_entry_point(setup_py: &str, group: &str, entry: &str) -> Result<String, DomainError> {
    let quoted_entry = format!("\"{entry}\"");
    if setup_py.contains(&quoted_entry) {
        return Ok(setup_py.to_string());
    }

    let mut lines: Vec<String> = setup_py.lines().map(str::to_string).collect();
    let quoted_group = format!("\"{group}\": [");

    if let Some(index) = lines.iter().position(|l| l.contains(&quoted_group)) {
        let line = lines[index].replacen(&quoted_group, &format!("{quoted_group}{quoted_entry}, "), 1);
        lines[index] = line.replace(", ]", "]");
    } else if let Some(index) = lines.iter().position(|l| l.trim_start().starts_with(ENTRY_POINTS)) {
        let indent = item_indent(&lines[index]);
        lines.insert(index + 1, format!("{indent}{quoted_group}{quoted_entry}],"));
    } else {
        let borrowed: Vec<&str> = lines.iter().map(String::as_str).collect();
        let anchor = find_line(&borrowed, INSTALL_REQUIRES)?;
        let outer = leading_whitespace(&lines[anchor]).to_string();
        let inner = item_indent(&lines[anchor]);
        let block = [
            format!("{outer}{ENTRY_POINTS}"),
            format!("{inner}{quoted_group}{quoted_entry}],"),
            format!("{outer}}},"),
        ];
        lines.splice(anchor..anchor, block);
    }

    let borrowed: Vec<&str> = lines.iter().map(String::as_str).collect();
    Ok(join_lines(&borrowed, setup_py))
}

/// Append `line` to a `MANIFEST.in` unless it is already there.
pub fn ensure_manifest_line(manifest: &str, line: &str) -> String {
    if manifest.lines().any(|l| l.trim() == line.trim()) {
        return manifest.to_string();
    }
    let mut out = manifest.to_string();
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(line.trim());
    out.push('\n');
    out
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn find_line(lines: &[&str], prefix: &str) -> Result<usize, DomainError> {
    lines
        .iter()
        .position(|l| l.trim_start().starts_with(prefix))
        .ok_or_else(|| DomainError::AnchorNotFound {
            anchor: prefix.to_string(),
        })
}

/// Line and byte offset of the `]` closing the `[` at `lines[line][open]`.
/// Brackets inside string literals and comments are ignored.
fn matching_bracket(lines: &[&str], line: usize, open: usize) -> Option<(usize, usize)> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    for (index, text) in lines.iter().enumerate().skip(line) {
        let from = if index == line { open } else { 0 };
        for (offset, c) in text[from..].char_indices() {
            match (quote, c) {
                (Some(q), c) if c == q => quote = None,
                (Some(_), _) => {}
                (None, '"' | '\'') => quote = Some(c),
                (None, '#') => break,
                (None, '[') => depth += 1,
                (None, ']') => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return Some((index, from + offset));
                    }
                }
                _ => {}
            }
        }
        quote = None;
    }
    None
}

fn leading_whitespace(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}

fn item_indent(opening_line: &str) -> String {
    format!("{}    ", leading_whitespace(opening_line))
}

fn join_lines(lines: &[&str], original: &str) -> String {
    let mut out = lines.join("\n");
    if original.ends_with('\n') {
        out.push('\n');
    }
    out
}
