//! Directory classification.
//!
//! A collection tree has two kinds of directories: albums (leaves, holding
//! photos) and intermediate directories (branches, organizing albums). The
//! distinction is purely structural — a directory is an album iff it
//! contains no subdirectories. Descriptor files are never consulted, and
//! only a single level is examined.
//!
//! A completely empty directory therefore classifies as an album; it will
//! then fail resolution for lacking a descriptor. Deliberate: the rule is
//! "no subdirectories", not "has photos".

use std::fs;
use std::io;
use std::path::Path;

/// Decide whether `path` is an album (leaf) directory.
pub fn is_album(path: &Path) -> io::Result<bool> {
    for entry in fs::read_dir(path)? {
        if entry?.file_type()?.is_dir() {
            return Ok(false);
        }
    }
    Ok(true)
}
