// Copyright 2025 the Shajra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The member tree itself.

use serde::{Deserialize, Serialize};

use crate::traverse::Preorder;

/// One person in the family tree.
///
/// A member exclusively owns its `children`. The tree position implies the
/// single parent; no back pointers are stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMember {
    /// Unique identifier within the tree.
    pub id: String,
    /// Display name.
    pub name: MemberName,
    /// Optional CSS-style display color, kept verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Optional free-form details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// Children in display order.
    #[serde(default)]
    pub children: Vec<FamilyMember>,
}

impl FamilyMember {
    /// Creates a leaf member with only an id and an English name.
    pub fn new(id: impl Into<String>, english: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: MemberName::new(english),
            color: None,
            metadata: None,
            children: Vec::new(),
        }
    }

    /// Sets the native-script name.
    #[must_use]
    pub fn with_arabic(mut self, arabic: impl Into<String>) -> Self {
        self.name.arabic = Some(arabic.into());
        self
    }

    /// Sets the display color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the metadata bag.
    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Appends a child, keeping insertion order.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Returns `true` if this member has no recorded children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Iterates this member and all descendants in pre-order.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder::new(self)
    }
}

/// A member's name in its primary (English) and optional native-script form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberName {
    /// Primary display name. Required.
    pub english: String,
    /// Native-script form, shown right-aligned in detail views.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arabic: Option<String>,
}

impl MemberName {
    /// Creates a name with only the English form.
    pub fn new(english: impl Into<String>) -> Self {
        Self {
            english: english.into(),
            arabic: None,
        }
    }
}

/// Optional biographical details. Every field is free text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Year of birth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<String>,
    /// Year of death.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_year: Option<String>,
    /// Place of residence or birth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Free-text notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Honorific title (kunyah).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kunyah: Option<String>,
}

impl Metadata {
    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        self.birth_year.is_none()
            && self.death_year.is_none()
            && self.location.is_none()
            && self.notes.is_none()
            && self.kunyah.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_preserves_child_order() {
        let root = FamilyMember::new("r", "Root")
            .with_child(FamilyMember::new("b", "B"))
            .with_child(FamilyMember::new("a", "A"));

        let ids: Vec<&str> = root.children.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
        assert!(!root.is_leaf());
        assert!(root.children[0].is_leaf());
    }

    #[test]
    fn metadata_is_empty_tracks_every_field() {
        let mut meta = Metadata::default();
        assert!(meta.is_empty());
        meta.kunyah = Some("Abu Malik".into());
        assert!(!meta.is_empty());
    }
}
