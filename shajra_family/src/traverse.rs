// Copyright 2025 the Shajra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat views over a member tree.

use crate::member::FamilyMember;

/// Pre-order iterator over a member tree: a member, then each child's full
/// subtree before the next sibling.
#[derive(Clone, Debug)]
pub struct Preorder<'a> {
    stack: Vec<&'a FamilyMember>,
}

impl<'a> Preorder<'a> {
    pub(crate) fn new(root: &'a FamilyMember) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a FamilyMember;

    fn next(&mut self) -> Option<Self::Item> {
        let member = self.stack.pop()?;
        self.stack.extend(member.children.iter().rev());
        Some(member)
    }
}

/// All members in pre-order, root first.
pub fn all_members(root: &FamilyMember) -> Vec<&FamilyMember> {
    root.preorder().collect()
}

/// Number of members in the tree, root included.
pub fn member_count(root: &FamilyMember) -> usize {
    root.preorder().count()
}

/// Finds the first member with the given id, in pre-order.
pub fn find_member<'a>(root: &'a FamilyMember, id: &str) -> Option<&'a FamilyMember> {
    root.preorder().find(|m| m.id == id)
}

/// Members whose English or native-script name contains `query`,
/// case-insensitively, in pre-order.
///
/// An empty query matches every member.
pub fn search_members<'a>(root: &'a FamilyMember, query: &str) -> Vec<&'a FamilyMember> {
    let needle = query.to_lowercase();
    root.preorder()
        .filter(|m| {
            m.name.english.to_lowercase().contains(&needle)
                || m
                    .name
                    .arabic
                    .as_deref()
                    .is_some_and(|a| a.to_lowercase().contains(&needle))
        })
        .collect()
}
