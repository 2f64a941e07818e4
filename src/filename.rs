//! File name validation and cleanup.
//!
//! Derived file names (log files named after a session, download targets
//! taken from remote input) have to respect the host file system's rules:
//! no reserved device names, no control bytes, none of the characters the
//! shell and file APIs treat specially, and no trailing dot or space.
//! cf. <https://learn.microsoft.com/en-us/windows/win32/fileio/naming-a-file>
//!
//! Validation and repair are split: [`is_invalid_file_name`] is a pure
//! predicate for callers who want to reject, [`replace_invalid_file_name_chars`]
//! repairs in place for callers who want best effort. Both step over
//! two-byte characters as units, so a trail byte that happens to look like
//! `\` or `?` is never flagged.

use crate::charset::ByteClassifier;

/// Characters that may not appear in a file name.
pub const INVALID_FILE_NAME_CHARS: &[u8] = b"\\/:*?\"<>|";

/// Device-style names that can never be used as a file name, whatever the
/// extension. Matched against the whole name, ASCII case-insensitively.
pub const RESERVED_FILE_NAMES: &[&str] = &[
    "AUX", "CLOCK$", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8", "COM9",
    "CON", "CONFIG$", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
    "NUL", "PRN", ".", "..",
];

fn is_forbidden(byte: u8) -> bool {
    byte < 0x20 || INVALID_FILE_NAME_CHARS.contains(&byte)
}

/// True when `name` cannot be used as a file name.
///
/// A name is invalid when it equals a reserved device name, contains a
/// forbidden byte outside of two-byte characters, or ends in a dot or a
/// space. An empty name is the caller's concern and reports `false`.
pub fn is_invalid_file_name<C: ByteClassifier>(name: &[u8], classifier: &C) -> bool {
    for reserved in RESERVED_FILE_NAMES {
        if name.eq_ignore_ascii_case(reserved.as_bytes()) {
            return true;
        }
    }

    let mut i = 0;
    while i < name.len() {
        if classifier.is_lead_byte(name[i]) {
            i += 2;
            continue;
        }
        if is_forbidden(name[i]) {
            return true;
        }
        i += 1;
    }

    matches!(name.last().copied(), Some(b'.') | Some(b' '))
}

/// Replace every forbidden byte of `name` with `replacement`, in place.
///
/// When `replacement` is 0, or itself forbidden, offending bytes are
/// deleted instead. Two-byte characters are copied through untouched and
/// never inspected.
pub fn replace_invalid_file_name_chars<C: ByteClassifier>(
    name: &mut Vec<u8>,
    replacement: u8,
    classifier: &C,
) {
    let replacement = if replacement != 0 && is_forbidden(replacement) {
        log::debug!("replacement byte {replacement:#04x} is itself forbidden; deleting instead");
        0
    } else {
        replacement
    };

    let mut i = 0;
    let mut j = 0;
    while i < name.len() {
        let b = name[i];
        if classifier.is_lead_byte(b) {
            name[j] = b;
            j += 1;
            i += 1;
            if i < name.len() {
                name[j] = name[i];
                j += 1;
                i += 1;
            }
            continue;
        }
        if is_forbidden(b) {
            if replacement != 0 {
                name[j] = replacement;
                j += 1;
            }
        } else {
            name[j] = b;
            j += 1;
        }
        i += 1;
    }
    name.truncate(j);
}

/// Adjust `name` into plain file-name shape, in place.
///
/// A leading dot gets an underscore prefix (dot-names hide the stem), and
/// `default_ext` is appended when the name contains no dot at all. The
/// result is capped at `max_len` bytes.
pub fn fit_file_name(name: &mut Vec<u8>, max_len: usize, default_ext: Option<&[u8]>) {
    let had_dot = name.contains(&b'.');
    if name.first() == Some(&b'.') {
        name.insert(0, b'_');
    }
    if !had_dot {
        if let Some(ext) = default_ext {
            name.extend_from_slice(ext);
        }
    }
    name.truncate(max_len);
}

/// Wrap `name` in double quotes when it contains a space, so it survives
/// being embedded in a command line. Names without spaces are left alone.
pub fn quote_file_name(name: &mut Vec<u8>) {
    if name.is_empty() || !name.contains(&b' ') {
        return;
    }
    name.insert(0, b'"');
    name.push(b'"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::{ShiftJis, SingleByte};

    #[test]
    fn test_reserved_names_any_case() {
        assert!(is_invalid_file_name(b"com1", &SingleByte));
        assert!(is_invalid_file_name(b"COM1", &SingleByte));
        assert!(is_invalid_file_name(b"Com1", &SingleByte));
        assert!(is_invalid_file_name(b"nul", &SingleByte));
        assert!(is_invalid_file_name(b"Clock$", &SingleByte));
        assert!(is_invalid_file_name(b".", &SingleByte));
        assert!(is_invalid_file_name(b"..", &SingleByte));
    }

    #[test]
    fn test_reserved_match_is_whole_name_only() {
        assert!(!is_invalid_file_name(b"com10", &SingleByte));
        assert!(!is_invalid_file_name(b"con.txt", &SingleByte));
        assert!(!is_invalid_file_name(b"nulterm", &SingleByte));
    }

    #[test]
    fn test_forbidden_characters() {
        assert!(is_invalid_file_name(b"a*b", &SingleByte));
        assert!(is_invalid_file_name(b"what?", &SingleByte));
        assert!(is_invalid_file_name(b"pipe|name", &SingleByte));
        assert!(is_invalid_file_name(&[b'a', 0x01, b'b'], &SingleByte));
        assert!(!is_invalid_file_name(b"session-1.log", &SingleByte));
    }

    #[test]
    fn test_trailing_dot_or_space() {
        assert!(is_invalid_file_name(b"notes.", &SingleByte));
        assert!(is_invalid_file_name(b"notes. ", &SingleByte));
        assert!(!is_invalid_file_name(b"notes", &SingleByte));
        assert!(!is_invalid_file_name(b"", &SingleByte));
    }

    #[test]
    fn test_trail_byte_is_not_a_forbidden_character() {
        // 0x83 0x5C is a two-byte character whose trail byte looks like `\`.
        let name = [0x83, 0x5c, b'a'];
        assert!(!is_invalid_file_name(&name, &ShiftJis));
        assert!(is_invalid_file_name(&name, &SingleByte));
    }

    #[test]
    fn test_replace_with_byte() {
        let mut name = b"a*b?c".to_vec();
        replace_invalid_file_name_chars(&mut name, b'_', &SingleByte);
        assert_eq!(name, b"a_b_c");
    }

    #[test]
    fn test_replace_with_zero_deletes() {
        let mut name = b"a*b?c".to_vec();
        replace_invalid_file_name_chars(&mut name, 0, &SingleByte);
        assert_eq!(name, b"abc");
    }

    #[test]
    fn test_forbidden_replacement_deletes() {
        let mut name = b"a<b>c".to_vec();
        replace_invalid_file_name_chars(&mut name, b'*', &SingleByte);
        assert_eq!(name, b"abc");

        let mut name = b"a\x01b".to_vec();
        replace_invalid_file_name_chars(&mut name, 0x02, &SingleByte);
        assert_eq!(name, b"ab");
    }

    #[test]
    fn test_replace_keeps_two_byte_pairs() {
        let mut name = vec![0x83, 0x5c, b'*', 0x83, 0x5c];
        replace_invalid_file_name_chars(&mut name, b'_', &ShiftJis);
        assert_eq!(name, vec![0x83, 0x5c, b'_', 0x83, 0x5c]);

        let mut name = vec![0x83, 0x5c];
        replace_invalid_file_name_chars(&mut name, b'_', &SingleByte);
        assert_eq!(name, b"_");
    }

    #[test]
    fn test_fit_file_name_leading_dot() {
        let mut name = b".bashrc".to_vec();
        fit_file_name(&mut name, 64, None);
        assert_eq!(name, b"_.bashrc");
    }

    #[test]
    fn test_fit_file_name_default_extension() {
        let mut name = b"README".to_vec();
        fit_file_name(&mut name, 64, Some(b".txt"));
        assert_eq!(name, b"README.txt");

        let mut name = b"notes.md".to_vec();
        fit_file_name(&mut name, 64, Some(b".txt"));
        assert_eq!(name, b"notes.md");
    }

    #[test]
    fn test_fit_file_name_caps_length() {
        let mut name = b"longname".to_vec();
        fit_file_name(&mut name, 4, Some(b".txt"));
        assert_eq!(name, b"long");
    }

    #[test]
    fn test_quote_file_name() {
        let mut name = b"my file.log".to_vec();
        quote_file_name(&mut name);
        assert_eq!(name, b"\"my file.log\"");

        let mut name = b"plain.log".to_vec();
        quote_file_name(&mut name);
        assert_eq!(name, b"plain.log");

        let mut name = Vec::new();
        quote_file_name(&mut name);
        assert!(name.is_empty());
    }
}
