// Copyright 2025 the Shajra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The inspected member and the detail panel built from it.

use core::fmt;

use serde::Serialize;
use shajra_family::{FamilyMember, MemberName, Metadata};
use shajra_layout::NodePosition;

/// A member's own fields, detached from its subtree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDetails {
    /// Member id.
    pub id: String,
    /// Display name.
    pub name: MemberName,
    /// Display color, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Metadata bag, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl From<&FamilyMember> for MemberDetails {
    fn from(member: &FamilyMember) -> Self {
        Self {
            id: member.id.clone(),
            name: member.name.clone(),
            color: member.color.clone(),
            metadata: member.metadata.clone(),
        }
    }
}

/// The member currently shown in the detail panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedMember {
    /// Snapshot of the member's fields.
    pub member: MemberDetails,
    /// Depth from the root.
    pub generation: usize,
    /// Number of immediate children.
    pub children_count: usize,
}

impl SelectedMember {
    /// Captures a member and its layout position.
    #[must_use]
    pub fn new(member: &FamilyMember, position: &NodePosition) -> Self {
        Self {
            member: member.into(),
            generation: position.generation,
            children_count: position.child_count,
        }
    }

    /// Builds the detail panel for this selection.
    #[must_use]
    pub fn detail_panel(&self) -> DetailPanel {
        DetailPanel::new(self)
    }
}

/// One labelled line of the detail panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DetailRow {
    /// Heading, e.g. `"Birth"`.
    pub label: &'static str,
    /// Text under the heading.
    pub value: String,
}

/// View model of the detail panel.
///
/// The Children, Birth, Death, Honorific Title and Notes rows only appear
/// when the member has a metadata bag, and each optional row only when its
/// field is set. A member with no children gets a leaf note instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailPanel {
    /// English name.
    pub name: String,
    /// Native-script name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native_name: Option<String>,
    /// Detail rows in display order.
    pub rows: Vec<DetailRow>,
    /// Shown for members without children.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leaf_note: Option<String>,
}

impl DetailPanel {
    fn new(selected: &SelectedMember) -> Self {
        let member = &selected.member;
        let mut rows = Vec::new();

        if let Some(meta) = &member.metadata {
            let count = selected.children_count;
            rows.push(DetailRow {
                label: "Children",
                value: format!("{count} {}", if count == 1 { "child" } else { "children" }),
            });
            if let Some(birth) = &meta.birth_year {
                let value = match &meta.location {
                    Some(place) => format!("{birth} \u{2022} {place}"),
                    None => birth.clone(),
                };
                rows.push(DetailRow {
                    label: "Birth",
                    value,
                });
            }
            let simple = [
                ("Death", &meta.death_year),
                ("Honorific Title", &meta.kunyah),
                ("Notes", &meta.notes),
            ];
            for (label, field) in simple {
                if let Some(value) = field {
                    rows.push(DetailRow {
                        label,
                        value: value.clone(),
                    });
                }
            }
        }

        let leaf_note = (selected.children_count == 0).then(|| {
            let first = member.name.english.split(' ').next().unwrap_or_default();
            format!("{first} is a leaf node (no children recorded yet)")
        });

        Self {
            name: member.name.english.clone(),
            native_name: member.name.arabic.clone(),
            rows,
            leaf_note,
        }
    }

    /// Looks up a row by its heading.
    #[must_use]
    pub fn row(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|r| r.label == label)
            .map(|r| r.value.as_str())
    }
}

impl fmt::Display for DetailPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        if let Some(native) = &self.native_name {
            writeln!(f, "{native}")?;
        }
        for row in &self.rows {
            writeln!(f, "{}: {}", row.label, row.value)?;
        }
        if let Some(note) = &self.leaf_note {
            writeln!(f, "{note}")?;
        }
        Ok(())
    }
}
