//! Mochi Terminal Text Utilities
//!
//! Small, self-contained byte and text transforms shared by the terminal
//! and its macro layer:
//!
//! - `base64`: binary-to-text codec for pasting and logging binary data
//! - `escape`: reversible `$XX` hex escape for control bytes in macros
//! - `params`: quote-aware tokenizing and dequoting of command lines
//! - `filename`: file name validation and cleanup for derived log names
//! - `strftime`: validation of time-format file name templates
//! - `path`: directory/file-name splitting for Windows-style paths
//! - `charset`: the lead/trail byte classification the above consume
//!
//! Every transform is a pure function over caller-owned buffers: nothing
//! here allocates for codec output, writes past a destination's length, or
//! fails on malformed input. Output is truncated, dropped, or substituted
//! instead, and validators exist for callers who want hard rejection.
//! Multi-byte characters (as reported by a host-supplied
//! [`charset::ByteClassifier`]) are always stepped over as atomic units.

pub mod base64;
pub mod bounded;
pub mod charset;
pub mod escape;
pub mod filename;
pub mod params;
pub mod path;
pub mod strftime;

pub use bounded::BoundedWriter;
pub use charset::{ByteClassifier, ShiftJis, SingleByte};
pub use params::ParamScanner;
pub use path::{PathError, PathSplit};
