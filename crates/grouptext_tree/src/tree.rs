//! Tree and branch types.
//!
//! A [`Tree`] is an explicit sum type: [`Leaf`](Tree::Leaf) for atomic
//! text, [`Branch`](Tree::Branch) for an ordered child list plus its
//! framing tokens. Consumers dispatch by matching on the variant.

use std::ops::Add;

/// A node in a grouped-text tree.
///
/// Construct leaves with [`Tree::leaf`] (or via `From` on string types)
/// and branches with [`Tree::branch`] or [`Tree::group`]. Equality and
/// printing are defined by rendering, not structurally, so this type
/// implements neither `PartialEq` nor `Display`.
#[derive(Debug, Clone)]
pub enum Tree {
    /// Atomic text, rendered verbatim.
    Leaf(String),
    /// Ordered children framed by head/tail/separator tokens.
    Branch(Branch),
}

impl Tree {
    /// Create a leaf from any string-ish value.
    pub fn leaf(text: impl Into<String>) -> Self {
        Tree::Leaf(text.into())
    }

    /// Create a branch from child trees and formatting tokens.
    pub fn branch(children: Vec<Tree>, info: BranchInfo) -> Self {
        Tree::Branch(Branch::new(children, info))
    }

    /// Create a branch from anything convertible to trees, so string
    /// literals can be listed directly alongside subtrees.
    ///
    /// ```
    /// use grouptext_tree::{BranchInfo, Tree};
    ///
    /// let tuple = Tree::group(["one", "two"], BranchInfo::delimited("(", ")", ","));
    /// ```
    pub fn group<I>(children: I, info: BranchInfo) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Tree>,
    {
        let children = children.into_iter().map(Into::into).collect();
        Tree::Branch(Branch::new(children, info))
    }
}

impl From<&str> for Tree {
    fn from(text: &str) -> Self {
        Tree::Leaf(text.to_owned())
    }
}

impl From<String> for Tree {
    fn from(text: String) -> Self {
        Tree::Leaf(text)
    }
}

impl From<Branch> for Tree {
    fn from(branch: Branch) -> Self {
        Tree::Branch(branch)
    }
}

/// Concatenation: `a + b` is a tokenless branch holding both operands
/// in order.
impl Add for Tree {
    type Output = Tree;

    fn add(self, rhs: Tree) -> Tree {
        Tree::branch(vec![self, rhs], BranchInfo::default())
    }
}

/// A branch node: ordered children plus their framing tokens.
///
/// Children are moved in at construction and owned exclusively; there is
/// no way to mutate a branch afterwards.
#[derive(Debug, Clone)]
pub struct Branch {
    children: Vec<Tree>,
    info: BranchInfo,
}

impl Branch {
    /// Create a branch from child trees and formatting tokens.
    pub fn new(children: Vec<Tree>, info: BranchInfo) -> Self {
        Branch { children, info }
    }

    /// The ordered children.
    pub fn children(&self) -> &[Tree] {
        &self.children
    }

    /// The framing tokens.
    pub fn info(&self) -> &BranchInfo {
        &self.info
    }
}

/// Formatting tokens attached to a branch.
///
/// Any token may be absent. An absent token contributes nothing to
/// output or width: it is skipped outright, never written as an empty
/// string with surrounding spacing.
#[derive(Debug, Clone, Default)]
pub struct BranchInfo {
    /// Token emitted before the first child, e.g. `"("`.
    pub head: Option<String>,
    /// Token emitted after the last child, e.g. `")"`.
    pub tail: Option<String>,
    /// Token emitted between consecutive children, e.g. `","`.
    pub separator: Option<String>,
    /// When true, the separator is also emitted after the last child.
    pub separator_is_terminator: bool,
}

impl BranchInfo {
    /// The common bracketed-list case: head, tail and separator at once.
    pub fn delimited(
        head: impl Into<String>,
        tail: impl Into<String>,
        separator: impl Into<String>,
    ) -> Self {
        BranchInfo {
            head: Some(head.into()),
            tail: Some(tail.into()),
            separator: Some(separator.into()),
            separator_is_terminator: false,
        }
    }

    /// Set whether the separator also terminates the last child.
    #[must_use]
    pub fn terminated(mut self, terminated: bool) -> Self {
        self.separator_is_terminator = terminated;
        self
    }
}

#[cfg(test)]
mod tests;
