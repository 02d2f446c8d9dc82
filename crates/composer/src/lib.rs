//! Composer - ordered aggregation of rendered documents
//!
//! This crate provides:
//! - The [`Merge`] contract implemented by rendered-document handles
//! - [`RenderStack`], an insertion-ordered collection that collapses a
//!   contiguous range of documents into one by merging left to right
//!
//! The documents themselves are opaque: producing them and combining
//! two of them belong to the rendering collaborator. This crate only
//! sequences the merges.
//!
//! # Example
//!
//! ```ignore
//! use composer::{Merged, RenderStack};
//!
//! let stack: RenderStack<_> = pages.into_iter().collect();
//! match stack.merge_range(0..stack.len()) {
//!     Merged::Document(doc) => send(doc),
//!     Merged::Empty => {}
//! }
//! ```

mod merge;
mod stack;

pub use merge::Merge;
pub use stack::{Merged, RenderStack};
