//! # Lightbox Meta
//!
//! Hierarchical metadata resolution for a photo-collection publishing tool.
//! Your filesystem is the data source: a collection is a directory tree,
//! leaf directories are albums holding photos, and every directory may
//! carry a `metadata.json` descriptor.
//!
//! # What resolution does
//!
//! ```text
//! collection/
//! ├── metadata.json          ← collection descriptor (required)
//! ├── travel/
//! │   ├── metadata.json      ← intermediate descriptor (optional)
//! │   ├── japan/
//! │   │   ├── metadata.json  ← album descriptor (required)
//! │   │   └── *.jpg
//! │   └── italy/ …
//! └── portraits/ …
//! ```
//!
//! [`resolve::resolve_collection`] parses and validates every descriptor,
//! merges each node with its ancestors top-down, and returns one fully
//! resolved [`types::AlbumMetadata`] per album, sorted by root-relative
//! path. Consumers (uploader, publisher, access layer) work from that flat
//! list and never re-read the tree.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Shared descriptor types and sort-order constants |
//! | [`descriptor`] | JSON parsing plus per-kind constraint validation |
//! | [`classify`] | Album vs. intermediate directory decision |
//! | [`merge`] | Field-level inheritance algebra |
//! | [`resolve`] | The tree walk: orchestration, ordering, alias check |
//!
//! # Design Decisions
//!
//! ## Inheritance, not templates
//!
//! Rather than requiring every album to spell out its full configuration,
//! descriptors inherit: `enabled` AND-combines (a disabled branch can never
//! be re-enabled below), tags and access credentials union, sort order is
//! override-if-unset, and filter rules concatenate nearest-first so an
//! album's own rules are consulted before anything inherited. The exact
//! algebra lives in [`merge`].
//!
//! ## Fail the whole run
//!
//! One malformed or misplaced descriptor anywhere in the tree aborts
//! resolution. Publishing half a collection silently is worse than
//! publishing nothing — the operator gets one error naming the offending
//! path instead of a mystery gap on the site. The single tolerated absence
//! is a missing descriptor in an intermediate directory, which simply
//! inherits everything.
//!
//! ## Worklist traversal
//!
//! The walk uses an explicit worklist with resolved-parent state in an
//! arena, not recursion. Deep hierarchies cannot overflow the stack, and
//! sibling subtrees are independent of one another — only the final
//! emitted list has a global order, applied in one sort at the end.

pub mod classify;
pub mod descriptor;
pub mod merge;
pub mod resolve;
pub mod types;
