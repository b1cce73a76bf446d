//! Replace the body of a marker-delimited region in a text file.
//!
//! A region looks like:
//!
//! ```text
//! <summary><strong>Click Here to View</strong></summary>
//! - [coil](https://github.com/coil-kt/coil) 2.7.0 | Under Apache License 2.0
//! </details>
//! ```
//!
//! The head is the start marker plus the whitespace after it up to and
//! including a line break. The tail is a whitespace run that contains a line
//! break, followed by the end marker. Everything between head and tail is the
//! body, and only the body is ever rewritten.

use std::path::Path;

use crate::error::UpdateError;
use crate::models::FileOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Rewrite the file in place.
    Write,
    /// Compute the new content but leave the file untouched.
    Check,
}

/// Replace the region body in `path` with `lines` joined by `\n`.
///
/// A file without a matching region is left as it is; that is reported through
/// [`FileOutcome::marker_found`], not as an error.
pub fn update_file(
    path: &Path,
    lines: &[String],
    start_marker: &str,
    end_marker: &str,
    mode: WriteMode,
) -> Result<FileOutcome, UpdateError> {
    let content = std::fs::read_to_string(path).map_err(|e| UpdateError::from_io(path, e))?;
    let body = lines.join("\n");

    let (updated, marker_found) = match splice(&content, start_marker, end_marker, &body) {
        Some(updated) => (updated, true),
        None => (content.clone(), false),
    };
    let changed = updated != content;

    let written = mode == WriteMode::Write;
    if written {
        std::fs::write(path, &updated).map_err(|e| UpdateError::from_io(path, e))?;
    }

    Ok(FileOutcome {
        path: path.to_path_buf(),
        marker_found,
        changed,
        written,
    })
}

/// Return `content` with the first matching region's body replaced by `body`,
/// or `None` when no region matches.
pub fn splice(content: &str, start_marker: &str, end_marker: &str, body: &str) -> Option<String> {
    let (head_end, tail_start) = find_region(content, start_marker, end_marker)?;

    let mut out = String::with_capacity(head_end + body.len() + content.len() - tail_start);
    out.push_str(&content[..head_end]);
    out.push_str(body);
    out.push_str(&content[tail_start..]);
    Some(out)
}

/// Byte range `(head_end, tail_start)` of the body of the first matching region.
pub fn find_region(content: &str, start_marker: &str, end_marker: &str) -> Option<(usize, usize)> {
    let mut from = 0;
    while let Some(offset) = content[from..].find(start_marker) {
        let marker_at = from + offset;
        if let Some(region) = match_after_marker(content, marker_at + start_marker.len(), end_marker)
        {
            return Some(region);
        }
        from = marker_at + char_len_at(content, marker_at);
        if from > content.len() {
            break;
        }
    }
    None
}

/// Try every head length (last line break in the run first) for one start marker.
fn match_after_marker(content: &str, after_marker: usize, end_marker: &str) -> Option<(usize, usize)> {
    let run_end = whitespace_run_end(content, after_marker);
    let head_ends: Vec<usize> = content[after_marker..run_end]
        .match_indices('\n')
        .map(|(i, _)| after_marker + i + 1)
        .collect();

    head_ends
        .into_iter()
        .rev()
        .find_map(|head_end| find_tail(content, head_end, end_marker).map(|tail| (head_end, tail)))
}

/// Earliest position at or after `body_start` where a tail begins.
fn find_tail(content: &str, body_start: usize, end_marker: &str) -> Option<usize> {
    content[body_start..]
        .char_indices()
        .map(|(i, _)| body_start + i)
        .find(|&p| tail_matches_at(content, p, end_marker))
}

fn tail_matches_at(content: &str, p: usize, end_marker: &str) -> bool {
    let run_end = whitespace_run_end(content, p);
    let Some(first_break) = content[p..run_end].find('\n') else {
        return false;
    };

    // The end marker may begin anywhere in the run after its first line break.
    let mut q = p + first_break + 1;
    loop {
        if content[q..].starts_with(end_marker) {
            return true;
        }
        if q >= run_end {
            return false;
        }
        q += char_len_at(content, q);
    }
}

fn whitespace_run_end(content: &str, from: usize) -> usize {
    content[from..]
        .find(|c: char| !c.is_whitespace())
        .map_or(content.len(), |i| from + i)
}

fn char_len_at(content: &str, at: usize) -> usize {
    content[at..].chars().next().map_or(1, char::len_utf8)
}
