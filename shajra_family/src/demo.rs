// Copyright 2025 the Shajra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The bundled demonstration family.

use crate::member::{FamilyMember, Metadata};

/// Per-generation display colors, warm and traditional, as CSS hex strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationColors {
    /// Deep emerald.
    pub ancestor: &'static str,
    /// Forest green.
    pub elder: &'static str,
    /// Sage green.
    pub parent: &'static str,
    /// Soft green.
    pub current: &'static str,
    /// Light green.
    pub younger: &'static str,
}

/// The palette used by [`demo_tree`].
pub const GENERATION_COLORS: GenerationColors = GenerationColors {
    ancestor: "#1e3c30",
    elder: "#2d5a52",
    parent: "#4a8b7f",
    current: "#7fb3a0",
    younger: "#b8d9cc",
};

fn meta(
    birth_year: &str,
    death_year: Option<&str>,
    kunyah: Option<&str>,
    location: &str,
    notes: Option<&str>,
) -> Metadata {
    Metadata {
        birth_year: Some(birth_year.into()),
        death_year: death_year.map(Into::into),
        location: Some(location.into()),
        notes: notes.map(Into::into),
        kunyah: kunyah.map(Into::into),
    }
}

/// Four generations, six members: Ahmad, his sons Muhammad, Omar and
/// Ibrahim, Muhammad's son Hasan, and Hasan's son Ali.
pub fn demo_tree() -> FamilyMember {
    let c = GENERATION_COLORS;

    let ali = FamilyMember::new("ali-1", "Ali ibn Hasan")
        .with_arabic("علي بن حسن")
        .with_color(c.younger)
        .with_metadata(meta("2010", None, None, "Beirut, Lebanon", None));

    let hasan = FamilyMember::new("hasan-1", "Hasan ibn Muhammad")
        .with_arabic("حسن بن محمد")
        .with_color(c.current)
        .with_metadata(meta(
            "1985",
            None,
            None,
            "Beirut, Lebanon",
            Some("Scholar of Islamic Studies"),
        ))
        .with_child(ali);

    let muhammad = FamilyMember::new("muhammad-1", "Muhammad ibn Ahmad")
        .with_arabic("محمد بن أحمد")
        .with_color(c.elder)
        .with_metadata(meta("1960", None, Some("Abu Hasan"), "Damascus, Syria", None))
        .with_child(hasan);

    let omar = FamilyMember::new("omar-1", "Omar ibn Ahmad")
        .with_arabic("عمر بن أحمد")
        .with_color(c.elder)
        .with_metadata(meta("1958", None, Some("Abu Ibrahim"), "Amman, Jordan", None));

    let ibrahim = FamilyMember::new("ibrahim-1", "Ibrahim ibn Ahmad")
        .with_arabic("إبراهيم بن أحمد")
        .with_color(c.elder)
        .with_metadata(meta("1963", None, Some("Abu Yousuf"), "Cairo, Egypt", None));

    FamilyMember::new("ahmad-1", "Ahmad ibn Muhammad")
        .with_arabic("أحمد بن محمد")
        .with_color(c.ancestor)
        .with_metadata(meta(
            "1935",
            Some("2010"),
            Some("Abu Malik"),
            "Damascus, Syria",
            None,
        ))
        .with_child(muhammad)
        .with_child(omar)
        .with_child(ibrahim)
}
