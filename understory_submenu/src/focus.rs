// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus collaborator.

/// Focus queries and moves the trigger needs from its host.
///
/// `Node` is whatever identifies a focusable element in the host (a widget id,
/// a box tree node, ...). Containment is inclusive: a region contains itself.
pub trait MenuFocus {
    /// Identifier of a focusable element.
    type Node;

    /// Whether `node` is the trigger or inside it.
    fn trigger_contains(&self, node: &Self::Node) -> bool;

    /// Whether `node` is inside the open submenu.
    fn submenu_contains(&self, node: &Self::Node) -> bool;

    /// Whether `node` is inside the menu that owns the trigger.
    fn parent_menu_contains(&self, node: &Self::Node) -> bool;

    /// Whether the trigger currently has focus.
    fn is_trigger_focused(&self) -> bool;

    /// Whether focus is currently inside the submenu.
    ///
    /// Returns `false` when the submenu uses virtual focus driven from
    /// another element.
    fn is_focus_within_submenu(&self) -> bool;

    /// Move focus to the trigger.
    fn focus_trigger(&mut self);

    /// Move focus into the submenu.
    fn focus_submenu(&mut self);
}
