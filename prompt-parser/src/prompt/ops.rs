//! Immutable tree operations
//!
//! Every operation borrows its input and returns a new tree; a caller
//! holding the old root never observes a change. Identifiers are carried
//! over wherever a node is conceptually "the same one edited", and freshly
//! generated only for structurally new nodes.

pub mod edit;
pub mod find;
pub mod optimize;
pub mod text;
pub mod update;

pub use edit::{insert, remove};
pub use find::{find_all, find_by_id};
pub use optimize::optimize;
pub use text::{merge_adjacent_text, split_text};
pub use update::{update, KindPatch, SegmentPatch};
