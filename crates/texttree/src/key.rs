//! Lookup key derivation.
//!
//! Keys are built from structured path segments rather than by slicing full
//! filesystem paths:
//! - `dir` is the root-relative directory with a trailing `/` (empty at the root)
//! - `stem` is the filename without its extension
//! - `extension` starts at the last `.` unless that `.` is the first character
//!
//! ## Examples
//!
//! ```text
//! dir = "a/", filename = "hello.txt"  -> stem key "a/hello",  full key "a/hello.txt"
//! dir = "",   filename = ".bashrc"    -> stem key ".bashrc",  full key ".bashrc"
//! dir = "b/", filename = "c"          -> directory key "b/c/"
//! ```

use memchr::memrchr;

/// Separator used in every key.
pub const KEY_SEPARATOR: char = '/';

/// Splits a filename into its stem and optional extension (including the dot).
pub fn split_extension(filename: &str) -> (&str, Option<&str>) {
    match memrchr(b'.', filename.as_bytes()) {
        Some(0) | None => (filename, None),
        Some(dot) => (&filename[..dot], Some(&filename[dot..])),
    }
}

/// The segments a file key is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyParts<'a> {
    pub dir: &'a str,
    pub filename: &'a str,
    pub stem: &'a str,
    pub extension: Option<&'a str>,
}

impl<'a> KeyParts<'a> {
    pub fn new(dir: &'a str, filename: &'a str) -> Self {
        let (stem, extension) = split_extension(filename);
        Self {
            dir,
            filename,
            stem,
            extension,
        }
    }

    /// Key without the extension, used when no sibling shares the stem.
    pub fn stem_key(&self) -> String {
        join(self.dir, self.stem)
    }

    /// Key with the full filename, used once a stem collision happened.
    pub fn full_key(&self) -> String {
        join(self.dir, self.filename)
    }
}

/// Key of a directory marker: `dir + name + "/"`.
pub fn directory_key(dir: &str, name: &str) -> String {
    let mut key = join(dir, name);
    key.push(KEY_SEPARATOR);
    key
}

/// Composes a sub-path lookup key: `sub + "/" + path`.
///
/// No normalization of duplicate or trailing separators is performed.
pub fn sub_key(sub: &str, path: &str) -> String {
    let mut key = String::with_capacity(sub.len() + 1 + path.len());
    key.push_str(sub);
    key.push(KEY_SEPARATOR);
    key.push_str(path);
    key
}

#[inline]
fn join(dir: &str, name: &str) -> String {
    let mut key = String::with_capacity(dir.len() + name.len() + 1);
    key.push_str(dir);
    key.push_str(name);
    key
}
