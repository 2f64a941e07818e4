//! Time-format template validation.
//!
//! Log file names may embed `strftime`-style conversion specifiers
//! (`session-%Y%m%d.log`). A malformed specifier makes the expansion
//! undefined, so templates are checked up front: [`is_invalid_time_format`]
//! for callers who reject, [`remove_invalid_specifiers`] for callers who
//! clean and carry on.

/// Conversion letters accepted after `%` (or `%#`) in a template.
pub const TIME_SPECIFIERS: &[u8] = b"aAbBcdHIjmMpSUwWxXyYzZ%";

/// Index of the conversion letter for the `%` at `i`, if well formed.
///
/// A `#` flag only counts when another byte follows it; `%#` at the end
/// of the template leaves the `#` itself as the (rejected) conversion.
fn specifier_end(template: &[u8], i: usize) -> Option<usize> {
    if i + 1 >= template.len() {
        // bare `%` at end of template
        return None;
    }
    let p = if template[i + 1] == b'#' && i + 2 < template.len() {
        i + 2
    } else {
        i + 1
    };
    if TIME_SPECIFIERS.contains(&template[p]) {
        Some(p)
    } else {
        None
    }
}

/// True when `template` contains a `%` sequence that is not a valid
/// conversion specifier. Ordinary bytes are always acceptable.
pub fn is_invalid_time_format(template: &[u8]) -> bool {
    let mut i = 0;
    while i < template.len() {
        if template[i] == b'%' {
            match specifier_end(template, i) {
                Some(p) => i = p,
                None => return true,
            }
        }
        i += 1;
    }
    false
}

/// Delete malformed `%` sequences from `template`, in place.
///
/// Well-formed `%[#]X` sequences and ordinary bytes are kept verbatim. A
/// malformed sequence loses the `%`, the optional `#`, and the offending
/// byte; a bare `%` at the end of the template is dropped.
pub fn remove_invalid_specifiers(template: &mut Vec<u8>) {
    let mut i = 0;
    let mut j = 0;
    while i < template.len() {
        if template[i] != b'%' {
            template[j] = template[i];
            j += 1;
            i += 1;
            continue;
        }
        match specifier_end(template, i) {
            Some(p) => {
                while i <= p {
                    template[j] = template[i];
                    j += 1;
                    i += 1;
                }
            }
            None => {
                i += 1;
                if i < template.len() && template[i] == b'#' {
                    i += 1;
                }
                if i < template.len() {
                    i += 1;
                }
            }
        }
    }
    template.truncate(j);
}
