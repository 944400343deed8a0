//! Segment tree data model.
//!
//! A prompt is represented as a tree of [`Segment`] nodes. The four node
//! variants ([`SegmentKind`]) form a closed sum type, so consumers match
//! exhaustively instead of sprinkling runtime type guards. Construction goes
//! through the [`factory`] functions, which validate eagerly and hand out
//! fresh identifiers; the parser builds nodes the same way internally.

pub mod error;
pub mod factory;
pub mod id;
pub mod metadata;
pub mod segment;
pub mod weight;

pub use error::{ValidationError, ValidationResult};
pub use id::SegmentId;
pub use metadata::{deep_merge, Metadata};
pub use segment::{BracketKind, PresetMode, Segment, SegmentKind};
pub use weight::{display_value, MAX_BRACKET_LEVEL};
