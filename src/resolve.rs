//! Collection resolution — the tree walk.
//!
//! Orchestrates the other modules: parses the root's collection descriptor,
//! walks every subdirectory, classifies each as album or intermediate,
//! merges descriptors top-down, and emits one fully resolved
//! [`AlbumMetadata`] per album.
//!
//! ## Walk shape
//!
//! ```text
//! root/metadata.json            → CollectionDescriptor (required)
//! root/<dir>/                   → classify, parse, merge with root
//!   album:        emit, stop descending
//!   intermediate: keep merged fields as the parent for its children
//! ```
//!
//! Traversal uses an explicit worklist instead of recursion, so arbitrarily
//! deep hierarchies cannot overflow the stack. Resolved parent fields live
//! in an arena indexed by work items; one resolved parent is shared by all
//! of its children.
//!
//! ## Failure semantics
//!
//! Every error is fatal to the whole run — there is no partial output. The
//! single tolerated condition is a missing descriptor in an intermediate
//! directory, which inherits everything from its parent. A missing
//! descriptor in an album directory, malformed JSON, any validation
//! failure, or any other I/O failure aborts resolution, wrapped with the
//! offending path.
//!
//! After the walk, emitted paths are rewritten relative to the collection
//! root, the list is sorted by path bytes, and alias uniqueness is checked
//! once across the whole collection.

use crate::classify;
use crate::descriptor::{self, DescriptorError};
use crate::merge::merge;
use crate::types::{AlbumMetadata, CollectionDescriptor, CommonFields};
use log::{debug, trace};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the per-directory descriptor file.
pub const DESCRIPTOR_FILE: &str = "metadata.json";

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid descriptor in {path}: {source}")]
    Descriptor {
        path: PathBuf,
        #[source]
        source: DescriptorError,
    },
    #[error("missing {DESCRIPTOR_FILE} in media directory {0}")]
    MissingAlbumDescriptor(PathBuf),
    #[error("alias {alias:?} claimed by both {first:?} and {second:?}")]
    DuplicateAlias {
        alias: String,
        first: String,
        second: String,
    },
}

/// Outcome of a successful resolution run.
#[derive(Debug)]
pub struct Resolution {
    /// The collection descriptor parsed at the root.
    pub collection: CollectionDescriptor,
    /// One resolved record per album, sorted ascending by root-relative
    /// path (byte order).
    pub albums: Vec<AlbumMetadata>,
}

/// A directory awaiting a visit, tied to its resolved parent fields.
struct WorkItem {
    path: PathBuf,
    /// Index into the resolved-parent arena.
    parent: usize,
}

/// Resolve the metadata of the collection rooted at `root`.
///
/// Reads and validates the root's collection descriptor, then walks the
/// tree emitting one merged [`AlbumMetadata`] per album. A missing or
/// invalid root descriptor aborts before any subdirectory is visited.
pub fn resolve_collection(root: &Path) -> Result<Resolution, ResolveError> {
    debug!("resolving collection at {}", root.display());

    let root_file = root.join(DESCRIPTOR_FILE);
    let data = fs::read(&root_file).map_err(|e| io_error(&root_file, e))?;
    let collection = descriptor::parse_collection(&data)
        .map_err(|e| descriptor_error(root, e))?;

    // Arena of resolved parent fields. Slot 0 seeds the walk with the
    // root's own common fields.
    let mut parents: Vec<CommonFields> = vec![collection.common.clone()];
    let mut work: Vec<WorkItem> = subdirectories(root)?
        .into_iter()
        .map(|path| WorkItem { path, parent: 0 })
        .collect();

    let mut albums: Vec<AlbumMetadata> = Vec::new();
    while let Some(item) = work.pop() {
        trace!("visiting {}", item.path.display());
        let is_album = classify::is_album(&item.path).map_err(|e| io_error(&item.path, e))?;
        let own = read_node_descriptor(&item.path, is_album)?;
        let resolved = merge(&own, &parents[item.parent]);

        if is_album {
            let rel = item.path.strip_prefix(root).unwrap_or(&item.path);
            let mut album = resolved;
            album.path = rel.to_string_lossy().into_owned();
            debug!("resolved album {}", album.path);
            albums.push(album);
        } else {
            let parent = parents.len();
            parents.push(resolved.common);
            for path in subdirectories(&item.path)? {
                work.push(WorkItem { path, parent });
            }
        }
    }

    albums.sort_by(|a, b| a.path.cmp(&b.path));
    check_alias_uniqueness(&albums)?;

    debug!("resolved {} albums", albums.len());
    Ok(Resolution { collection, albums })
}

/// Read and parse a node's descriptor, honoring the one tolerated absence:
/// an intermediate directory without a descriptor inherits everything.
fn read_node_descriptor(dir: &Path, is_album: bool) -> Result<AlbumMetadata, ResolveError> {
    let file = dir.join(DESCRIPTOR_FILE);
    match fs::read(&file) {
        Ok(data) => {
            descriptor::parse_node(&data, is_album).map_err(|e| descriptor_error(dir, e))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            if is_album {
                Err(ResolveError::MissingAlbumDescriptor(dir.to_path_buf()))
            } else {
                Ok(AlbumMetadata::default())
            }
        }
        Err(e) => Err(io_error(&file, e)),
    }
}

/// List the immediate subdirectories of `path`, sorted by name.
fn subdirectories(path: &Path) -> Result<Vec<PathBuf>, ResolveError> {
    let mut dirs = Vec::new();
    let entries = fs::read_dir(path).map_err(|e| io_error(path, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_error(path, e))?;
        if entry.file_type().map_err(|e| io_error(path, e))?.is_dir() {
            dirs.push(entry.path());
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Every alias string must belong to at most one album collection-wide.
/// Checked once over the final emitted list.
fn check_alias_uniqueness(albums: &[AlbumMetadata]) -> Result<(), ResolveError> {
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for album in albums {
        for alias in &album.aliases {
            if let Some(first) = seen.insert(alias.as_str(), album.path.as_str()) {
                return Err(ResolveError::DuplicateAlias {
                    alias: alias.clone(),
                    first: first.to_string(),
                    second: album.path.clone(),
                });
            }
        }
    }
    Ok(())
}

fn io_error(path: &Path, source: io::Error) -> ResolveError {
    ResolveError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn descriptor_error(path: &Path, source: DescriptorError) -> ResolveError {
    ResolveError::Descriptor {
        path: path.to_path_buf(),
        source,
    }
}
