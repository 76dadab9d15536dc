//! Domain logic - pure release rules independent of git and the filesystem

pub mod manifest;
pub mod prerelease;
pub mod release;
pub mod tag;
pub mod version;

pub use manifest::ManifestRecord;
pub use prerelease::{Identifier, PreRelease};
pub use release::ReleaseType;
pub use tag::{MessageTemplate, Tag};
pub use version::increment;
