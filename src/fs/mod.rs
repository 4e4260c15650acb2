//! Filesystem metadata: mode bits, lstat records and identity lookups

pub mod identity;
pub mod metadata;
pub mod mode;

pub use identity::{CachedIdentity, IdentityResolver, SystemIdentity, UNKNOWN_IDENTITY};
pub use metadata::{link_target, EntryError, EntryMetadata};
pub use mode::{format_permissions, FileKind};
