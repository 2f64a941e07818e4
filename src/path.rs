//! Directory/file-name splitting for Windows-style paths.
//!
//! Paths here are byte strings with `\` separators and an optional
//! `X:` drive prefix. Splitting walks the path with multi-byte-aware
//! stepping, so a trail byte that happens to be `0x5C` is never mistaken
//! for a separator, the classic pitfall of double-byte text.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::charset::ByteClassifier;

/// Byte offsets of the directory/file-name boundary in a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSplit {
    /// Length of the directory prefix, up to (not including) the last
    /// separator.
    pub dir_len: usize,
    /// Offset of the first byte of the file name.
    pub file_name_pos: usize,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// A `:` outside the drive prefix; embedded drive markers are not
    /// permitted.
    #[error("embedded drive separator ':' at byte {0}")]
    EmbeddedColon(usize),
}

/// Locate the directory/file-name boundary of `path`.
///
/// A `X:` drive prefix and one separator after it are skipped before
/// scanning; every further `\` moves the boundary. Both results are byte
/// offsets into `path`, and a path without separators reports the scan
/// start for both.
pub fn split_path<C: ByteClassifier>(path: &[u8], classifier: &C) -> Result<PathSplit, PathError> {
    let mut i = if path.len() >= 2 && path[1] == b':' {
        2
    } else {
        0
    };
    if path.get(i) == Some(&b'\\') {
        i += 1;
    }

    let mut dir_len = i;
    let mut file_name_pos = i;
    while i < path.len() {
        let b = path[i];
        let next = if classifier.is_lead_byte(b) {
            (i + 2).min(path.len())
        } else {
            i + 1
        };
        match b {
            b':' => {
                log::debug!("path split rejected: ':' at byte {i}");
                return Err(PathError::EmbeddedColon(i));
            }
            b'\\' => {
                dir_len = i;
                file_name_pos = next;
            }
            _ => {}
        }
        i = next;
    }

    Ok(PathSplit {
        dir_len,
        file_name_pos,
    })
}

/// File-name part of `path` as a subslice.
pub fn file_name<'a, C: ByteClassifier>(
    path: &'a [u8],
    classifier: &C,
) -> Result<&'a [u8], PathError> {
    let split = split_path(path, classifier)?;
    Ok(&path[split.file_name_pos..])
}

/// Directory part of `path` as a subslice, without the final separator.
pub fn dir_name<'a, C: ByteClassifier>(
    path: &'a [u8],
    classifier: &C,
) -> Result<&'a [u8], PathError> {
    let split = split_path(path, classifier)?;
    Ok(&path[..split.dir_len])
}

/// Append a `\` separator unless the path already ends with one.
pub fn append_trailing_slash<C: ByteClassifier>(path: &mut Vec<u8>, classifier: &C) {
    if !ends_with_separator(path, classifier) {
        path.push(b'\\');
    }
}

/// True when the final character (not merely the final byte) is `\`.
fn ends_with_separator<C: ByteClassifier>(path: &[u8], classifier: &C) -> bool {
    let mut i = 0;
    let mut last_is_sep = false;
    while i < path.len() {
        if classifier.is_lead_byte(path[i]) {
            i = (i + 2).min(path.len());
            last_is_sep = false;
        } else {
            last_is_sep = path[i] == b'\\';
            i += 1;
        }
    }
    last_is_sep
}

/// Strip separators from the end of the path, in place.
///
/// A `0x5C` that is really the trail byte of a two-byte character is left
/// alone.
pub fn trim_trailing_slashes<C: ByteClassifier>(path: &mut Vec<u8>, classifier: &C) {
    while let Some(&last) = path.last() {
        if last != b'\\' {
            break;
        }
        let len = path.len();
        if len >= 2 && classifier.is_lead_byte(path[len - 2]) {
            break;
        }
        path.pop();
    }
}
