//! Domain logic - pure version rules independent of git operations

pub mod record;
pub mod tag;
pub mod version;

pub use record::VersionRecord;
pub use tag::{rank_tags, split_tag_list, Interpretation, TagCandidate};
pub use version::VersionParts;
