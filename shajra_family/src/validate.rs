// Copyright 2025 the Shajra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural checks for untrusted trees.

use hashbrown::HashSet;

use crate::error::TreeError;
use crate::member::FamilyMember;

/// Deepest generation index accepted by [`validate`] and by the layout engine.
pub const MAX_DEPTH: usize = 128;

/// Checks the invariants an owned tree cannot enforce by construction.
///
/// - Every id is non-empty and appears once. A repeated id means the same
///   person hangs under two parents (or the input encodes a cycle).
/// - Every member has a non-blank English name.
/// - No member sits deeper than [`MAX_DEPTH`].
///
/// Members are checked in pre-order and the first defect wins.
pub fn validate(root: &FamilyMember) -> Result<(), TreeError> {
    let mut seen = HashSet::new();
    visit(root, 0, &mut seen)
}

fn visit<'a>(
    member: &'a FamilyMember,
    depth: usize,
    seen: &mut HashSet<&'a str>,
) -> Result<(), TreeError> {
    if depth > MAX_DEPTH {
        return Err(TreeError::TooDeep {
            max_depth: MAX_DEPTH,
        });
    }
    if member.id.is_empty() {
        return Err(TreeError::MissingId);
    }
    if !seen.insert(member.id.as_str()) {
        return Err(TreeError::DuplicateId {
            id: member.id.clone(),
        });
    }
    if member.name.english.trim().is_empty() {
        return Err(TreeError::MissingName {
            id: member.id.clone(),
        });
    }
    for child in &member.children {
        visit(child, depth + 1, seen)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo_tree;

    fn chain(len: usize) -> FamilyMember {
        let mut member = FamilyMember::new(format!("m{len}"), "Leaf");
        for i in (0..len).rev() {
            member = FamilyMember::new(format!("m{i}"), "Link").with_child(member);
        }
        member
    }

    #[test]
    fn demo_tree_is_valid() {
        assert_eq!(validate(&demo_tree()), Ok(()));
    }

    #[test]
    fn duplicate_across_branches_is_rejected() {
        let root = FamilyMember::new("root", "Root")
            .with_child(FamilyMember::new("a", "A").with_child(FamilyMember::new("x", "X")))
            .with_child(FamilyMember::new("b", "B").with_child(FamilyMember::new("x", "X")));
        assert_eq!(
            validate(&root),
            Err(TreeError::DuplicateId { id: "x".into() })
        );
    }

    #[test]
    fn child_repeating_root_id_is_rejected() {
        let root = FamilyMember::new("root", "Root").with_child(FamilyMember::new("root", "Again"));
        assert_eq!(
            validate(&root),
            Err(TreeError::DuplicateId { id: "root".into() })
        );
    }

    #[test]
    fn blank_name_and_empty_id_are_rejected() {
        let root = FamilyMember::new("root", "Root").with_child(FamilyMember::new("c", "   "));
        assert_eq!(
            validate(&root),
            Err(TreeError::MissingName { id: "c".into() })
        );

        let root = FamilyMember::new("", "Nameless id");
        assert_eq!(validate(&root), Err(TreeError::MissingId));
    }

    #[test]
    fn depth_limit_is_inclusive() {
        assert_eq!(validate(&chain(MAX_DEPTH)), Ok(()));
        assert_eq!(
            validate(&chain(MAX_DEPTH + 1)),
            Err(TreeError::TooDeep {
                max_depth: MAX_DEPTH
            })
        );
    }
}
