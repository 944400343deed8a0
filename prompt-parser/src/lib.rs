//! # prompt-parser
//!
//! Parser, compiler and tree-editing engine for the prompt description
//! language used by image-generation front ends.
//!
//! The library is built around a single recursive value type, the
//! [`Segment`](prompt::ast::Segment) tree. Two inverse transformations connect
//! it to prompt text:
//!
//! - [`parse`](prompt::parsing::parse) reads prompt text into a tree and never
//!   fails: malformed spans degrade to literal text.
//! - [`compile`](prompt::compiling::compile) renders a tree back to prompt
//!   text, optionally resolving presets and inline alternations with a seeded
//!   random source so that resolution is reproducible.
//!
//! Editing happens through the pure tree operations in
//! [`ops`](prompt::ops): every operation returns a new tree and leaves its
//! input untouched.
//!
//! Layout follows `src/prompt/<concern>`: `ast` (the segment model and its
//! factory), `parsing`, `compiling`, `ops`, `random`, and `formats` for
//! terminal-facing renderings.

pub mod prompt;
