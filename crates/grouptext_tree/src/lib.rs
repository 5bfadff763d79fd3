//! Grouptext tree model
//!
//! Data types for the grouptext pretty-printer: a [`Tree`] is either a
//! leaf of opaque text or a branch of ordered children framed by head,
//! tail and separator tokens ([`BranchInfo`]).
//!
//! Trees are assembled once and never mutated afterwards; a branch owns
//! its children exclusively, so a tree is a strict hierarchy with no
//! sharing and no cycles. Rendering lives in the `grouptext_fmt` crate;
//! this crate deliberately knows nothing about output.

mod tree;

pub use tree::{Branch, BranchInfo, Tree};
