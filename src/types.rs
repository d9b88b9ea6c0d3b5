//! Shared descriptor types.
//!
//! These types deserialize directly from `metadata.json` files and flow
//! through every stage of resolution (parse → merge → emit). A collection
//! descriptor exists only at the root; every other directory carries an
//! [`AlbumMetadata`] descriptor, whether it is an album (leaf) or an
//! intermediate organizing directory.
//!
//! [`CommonFields`] is embedded in both descriptor kinds and is the part
//! that inherits down the tree. Album-only fields never inherit.

use serde::{Deserialize, Serialize};

/// Valid `sort_order` values.
pub const SORT_ORDERS: &[&str] = &[
    "name",
    "name:reverse",
    "mtime",
    "mtime:reverse",
    "taken",
    "taken:reverse",
];

/// Sort order substituted at the collection root when none is given.
pub const DEFAULT_SORT_ORDER: &str = "taken";

/// Filter rule substituted at the collection root when none is given.
pub const DEFAULT_FILTER: &str = "include:.*";

/// Fields shared by every level of the collection hierarchy.
///
/// Each field has its own inheritance rule, applied by [`crate::merge`]:
/// `enabled` is AND-combined, `tags` and `access` are set-unioned,
/// `sort_order` is override-if-unset, and `filter` is ordered
/// concatenation (own rules first).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonFields {
    /// Whether publishing is enabled. A disabled ancestor disables every
    /// descendant regardless of what the descendant declares.
    pub enabled: bool,
    /// Free-form tags. Within an album a tag may use the `FILENAME:TAG`
    /// form to scope itself to a single photo.
    pub tags: Vec<String>,
    /// Photo display order, one of [`SORT_ORDERS`]. Empty below the root
    /// means "inherit"; the root defaults to [`DEFAULT_SORT_ORDER`].
    pub sort_order: String,
    /// Credentials granted read access. Empty means public.
    pub access: Vec<String>,
    /// Ordered `include:<pattern>` / `exclude:<pattern>` rules. The
    /// publisher evaluates these first-match against photo filenames;
    /// resolution only assembles the list.
    pub filter: Vec<String>,
}

impl Default for CommonFields {
    fn default() -> Self {
        Self {
            enabled: true,
            tags: Vec::new(),
            sort_order: String::new(),
            access: Vec::new(),
            filter: Vec::new(),
        }
    }
}

/// The root descriptor of a collection. Parsed exactly once per run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionDescriptor {
    #[serde(flatten)]
    pub common: CommonFields,
    /// Metadata format version. Required.
    pub version: String,
    /// Collection name. Required.
    pub name: String,
    /// Collection author.
    pub author: String,
    /// Base URL of the published collection,
    /// e.g. `https://janesmith.com/photos`. Required.
    pub url: String,
    /// Access code for the object-storage bucket. Required, opaque here.
    pub s3_access_code: String,
    /// Secret key for the object-storage bucket. Required, opaque here.
    pub s3_secret_key: String,
    /// Maximum photo display size (pixels of the longest side).
    /// 0 means unlimited.
    pub max_size: i64,
}

/// Descriptor of an album or intermediate directory.
///
/// Both node kinds share this shape; the parser enforces which fields are
/// legal for which kind. Only `common` participates in inheritance — the
/// album-only fields belong to the directory that declares them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlbumMetadata {
    #[serde(flatten)]
    pub common: CommonFields,
    /// Album title. Required in albums, forbidden elsewhere.
    pub title: String,
    /// Filename of the photo shown as the album cover.
    pub title_photo: String,
    /// Filename of the photo highlighted within the album.
    pub highlight_photo: String,
    /// Alternate paths for the album, relative to the collection root.
    /// An alias may be claimed by at most one album collection-wide.
    pub aliases: Vec<String>,
    /// Per-photo title overrides, `FILENAME:[LANG:]TITLE`.
    pub titles: Vec<String>,
    /// Per-photo caption overrides, `FILENAME:[LANG:]CAPTION`.
    pub captions: Vec<String>,
    /// Path relative to the collection root. Assigned during resolution
    /// for albums only; never read from the descriptor file.
    #[serde(skip_deserializing)]
    pub path: String,
}
