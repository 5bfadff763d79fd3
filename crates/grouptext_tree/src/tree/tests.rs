//! Tests for tree construction.

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn leaf_holds_its_text() {
    let tree = Tree::leaf("text");
    assert!(matches!(tree, Tree::Leaf(ref s) if s == "text"));
}

#[test]
fn from_conversions_build_leaves() {
    let from_str: Tree = "a".into();
    let from_string: Tree = String::from("b").into();
    assert!(matches!(from_str, Tree::Leaf(ref s) if s == "a"));
    assert!(matches!(from_string, Tree::Leaf(ref s) if s == "b"));
}

#[test]
fn group_converts_items_in_order() {
    let tree = Tree::group(["a", "b", "c"], BranchInfo::default());
    let Tree::Branch(branch) = tree else {
        panic!("expected a branch");
    };
    assert_eq!(branch.children().len(), 3);
    assert!(matches!(branch.children()[0], Tree::Leaf(ref s) if s == "a"));
    assert!(matches!(branch.children()[2], Tree::Leaf(ref s) if s == "c"));
}

#[test]
fn add_concatenates_without_tokens() {
    let tree = Tree::from("a") + Tree::from("b");
    let Tree::Branch(branch) = tree else {
        panic!("expected a branch");
    };
    assert_eq!(branch.children().len(), 2);
    assert!(branch.info().head.is_none());
    assert!(branch.info().tail.is_none());
    assert!(branch.info().separator.is_none());
}

#[test]
fn delimited_sets_all_three_tokens() {
    let info = BranchInfo::delimited("(", ")", ",");
    assert_eq!(info.head.as_deref(), Some("("));
    assert_eq!(info.tail.as_deref(), Some(")"));
    assert_eq!(info.separator.as_deref(), Some(","));
    assert!(!info.separator_is_terminator);
}

#[test]
fn terminated_flags_the_separator() {
    let info = BranchInfo::delimited("(", ")", ",").terminated(true);
    assert!(info.separator_is_terminator);
}

#[test]
fn default_info_has_no_tokens() {
    let info = BranchInfo::default();
    assert!(info.head.is_none());
    assert!(info.tail.is_none());
    assert!(info.separator.is_none());
    assert!(!info.separator_is_terminator);
}
