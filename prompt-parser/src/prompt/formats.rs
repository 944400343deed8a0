//! Terminal-facing renderings of a segment tree

pub mod treeviz;

pub use treeviz::to_treeviz_str;
