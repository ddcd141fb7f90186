// Copyright 2025 the Shajra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::Path;

use kurbo::{Point, Rect, Vec2};
use shajra_family::{FamilyMember, from_json_str, read_json_file, to_json_string, write_json_file};
use shajra_layout::{Layout, compute_layout};
use shajra_view2d::{CanvasTransform, Connector, PointerButton, Viewport, connectors};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::selection::SelectedMember;
use crate::stats::FamilyStats;
use crate::theme::ThemeMode;

/// The single owning controller for one open family tree.
///
/// A session holds the tree, its layout, the viewport, the current
/// selection, and the two display toggles (theme and stats panel). Renderers
/// read a [`Frame`] and feed input back through the pointer methods; nothing
/// else mutates this state.
///
/// The layout is rebuilt in full whenever the tree is replaced. Replacement
/// is atomic: the new tree is laid out before anything is swapped, so a
/// rejected tree leaves the session exactly as it was.
#[derive(Clone, Debug)]
pub struct Session {
    tree: FamilyMember,
    layout: Layout,
    viewport: Viewport,
    selection: Option<SelectedMember>,
    theme: ThemeMode,
    show_stats: bool,
}

/// Everything a renderer needs to draw one frame.
#[derive(Clone, Debug)]
pub struct Frame<'a> {
    /// The tree being shown.
    pub tree: &'a FamilyMember,
    /// Its layout.
    pub layout: &'a Layout,
    /// Parent-child curves in layout space.
    pub connectors: Vec<Connector>,
    /// Current pan and zoom.
    pub transform: CanvasTransform,
    /// View rectangle in device coordinates.
    pub view_rect: Rect,
    /// Id of the selected member, if any.
    pub selected: Option<&'a str>,
    /// Active palette.
    pub theme: ThemeMode,
}

impl Session {
    /// Opens `tree` in a view of the given size.
    pub fn new(tree: FamilyMember, view_rect: Rect) -> Result<Self> {
        let layout = compute_layout(&tree)?;
        Ok(Self {
            tree,
            layout,
            viewport: Viewport::new(view_rect),
            selection: None,
            theme: ThemeMode::default(),
            show_stats: false,
        })
    }

    /// The tree being shown.
    #[must_use]
    pub fn tree(&self) -> &FamilyMember {
        &self.tree
    }

    /// The current layout.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The viewport.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Replaces the tree after laying it out.
    ///
    /// On failure the previous tree, layout and selection stay in place.
    /// On success the selection is cleared and the view is kept.
    pub fn replace_tree(&mut self, tree: FamilyMember) -> Result<()> {
        let layout = match compute_layout(&tree) {
            Ok(layout) => layout,
            Err(err) => {
                warn!(%err, "rejected replacement tree");
                return Err(err.into());
            }
        };
        info!(members = layout.len(), root = %tree.id, "replaced family tree");
        self.tree = tree;
        self.layout = layout;
        self.selection = None;
        Ok(())
    }

    /// Imports a tree from JSON text, replacing the current one.
    ///
    /// Invalid JSON or a malformed tree fails without touching the session.
    pub fn import_json(&mut self, text: &str) -> Result<()> {
        let tree = from_json_str(text)?;
        self.replace_tree(tree)
    }

    /// Imports a tree from a JSON file, replacing the current one.
    pub fn import_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let tree = read_json_file(path)?;
        self.replace_tree(tree)
    }

    /// Exports the current tree as 2-space indented JSON.
    pub fn export_json(&self) -> Result<String> {
        Ok(to_json_string(&self.tree)?)
    }

    /// Exports the current tree to a JSON file.
    pub fn export_file(&self, path: impl AsRef<Path>) -> Result<()> {
        Ok(write_json_file(path, &self.tree)?)
    }

    /// The current selection.
    #[must_use]
    pub fn selection(&self) -> Option<&SelectedMember> {
        self.selection.as_ref()
    }

    /// Selects the member with the given id.
    pub fn select(&mut self, id: &str) -> Result<&SelectedMember> {
        let unknown = || Error::UnknownMember { id: id.to_owned() };
        let index = self.layout.get(id).ok_or_else(unknown)?.index;
        self.select_index(index).ok_or_else(unknown)
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    fn select_index(&mut self, index: usize) -> Option<&SelectedMember> {
        let position = self.layout.positions().get(index)?;
        // Layout and tree share pre-order, so the n-th member is the one.
        let member = self.tree.preorder().nth(index)?;
        self.selection = Some(SelectedMember::new(member, position));
        self.selection.as_ref()
    }

    /// Active theme.
    #[must_use]
    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// Sets the theme.
    pub fn set_theme(&mut self, theme: ThemeMode) {
        self.theme = theme;
    }

    /// Switches between light and dark.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Whether the stats panel is open.
    #[must_use]
    pub fn stats_visible(&self) -> bool {
        self.show_stats
    }

    /// Opens or closes the stats panel.
    pub fn toggle_stats(&mut self) -> bool {
        self.show_stats = !self.show_stats;
        self.show_stats
    }

    /// Statistics for the current tree.
    #[must_use]
    pub fn stats(&self) -> FamilyStats {
        FamilyStats::from_layout(&self.layout)
    }

    /// Forwards a button press to the viewport.
    pub fn pointer_down(&mut self, button: PointerButton, pt: Point) {
        self.viewport.pointer_down(&self.layout, button, pt);
    }

    /// Forwards pointer movement to the viewport.
    pub fn pointer_move(&mut self, pt: Point) -> Option<Vec2> {
        self.viewport.pointer_move(pt)
    }

    /// Forwards a button release; a completed click selects the node.
    pub fn pointer_up(&mut self, pt: Point) -> Option<&SelectedMember> {
        let index = self.viewport.pointer_up(&self.layout, pt)?;
        self.select_index(index)
    }

    /// Forwards the pointer leaving the surface.
    pub fn pointer_leave(&mut self) {
        self.viewport.pointer_leave();
    }

    /// Forwards a wheel event. Returns the new scale.
    pub fn wheel(&mut self, delta_y: f64) -> f64 {
        self.viewport.wheel(delta_y)
    }

    /// Zoom-in control.
    pub fn zoom_in(&mut self) -> f64 {
        self.viewport.zoom_in()
    }

    /// Zoom-out control.
    pub fn zoom_out(&mut self) -> f64 {
        self.viewport.zoom_out()
    }

    /// Reset-view control.
    pub fn reset_view(&mut self) {
        self.viewport.reset_zoom();
    }

    /// Resizes the view.
    pub fn resize(&mut self, view_rect: Rect) {
        self.viewport.set_view_rect(view_rect);
    }

    /// Snapshot of what to draw.
    #[must_use]
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            tree: &self.tree,
            layout: &self.layout,
            connectors: connectors(&self.tree, &self.layout),
            transform: self.viewport.transform(),
            view_rect: self.viewport.view_rect(),
            selected: self.selection.as_ref().map(|s| s.member.id.as_str()),
            theme: self.theme,
        }
    }
}
