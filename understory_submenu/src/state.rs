// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu open state: the collaborator trait and a stack-based implementation.
//!
//! [`SubMenuState`] is all the trigger needs: whether its submenu is open, and
//! how to open it, close it, or close the whole menu.
//!
//! [`MenuTreeState`] is a ready-made owner of that state for a root menu and
//! its nested submenus. Open submenus form a stack of keys, one per level: the
//! submenu opened from an item of the root menu is level 0, a submenu opened
//! from inside that one is level 1, and so on.
//!
//! ```
//! use understory_submenu::{MenuTreeState, SubMenuState};
//!
//! let mut tree = MenuTreeState::new();
//! tree.open_root(None);
//! tree.submenu("share", 0).open(None);
//! tree.submenu("email", 1).open(None);
//! assert_eq!(tree.expanded_keys(), ["share", "email"]);
//!
//! // Opening a sibling at level 0 collapses everything below it.
//! tree.submenu("export", 0).open(None);
//! assert_eq!(tree.expanded_keys(), ["export"]);
//!
//! tree.submenu("export", 0).close_all();
//! assert!(!tree.is_root_open());
//! assert!(tree.expanded_keys().is_empty());
//! ```

use alloc::vec::Vec;

use crate::types::FocusStrategy;

/// Open/close operations for one submenu.
pub trait SubMenuState {
    /// Whether the submenu is open.
    fn is_open(&self) -> bool;

    /// Open the submenu, optionally moving focus into it.
    fn open(&mut self, focus_strategy: Option<FocusStrategy>);

    /// Close this submenu (and anything opened from it).
    fn close(&mut self);

    /// Close the whole menu, root included.
    fn close_all(&mut self);
}

/// Open state of a root menu and its nested submenus.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuTreeState<K> {
    root_open: bool,
    root_focus: Option<FocusStrategy>,
    expanded: Vec<K>,
    submenu_focus: Option<FocusStrategy>,
}

impl<K: Clone + PartialEq> MenuTreeState<K> {
    /// A closed menu.
    pub fn new() -> Self {
        Self {
            root_open: false,
            root_focus: None,
            expanded: Vec::new(),
            submenu_focus: None,
        }
    }

    /// Whether the root menu is open.
    pub fn is_root_open(&self) -> bool {
        self.root_open
    }

    /// Open the root menu.
    pub fn open_root(&mut self, focus_strategy: Option<FocusStrategy>) {
        self.root_open = true;
        self.root_focus = focus_strategy;
    }

    /// Focus strategy requested when the root menu opened.
    pub fn root_focus_strategy(&self) -> Option<FocusStrategy> {
        self.root_focus
    }

    /// Focus strategy requested by the most recently opened submenu.
    pub fn submenu_focus_strategy(&self) -> Option<FocusStrategy> {
        self.submenu_focus
    }

    /// Keys of the open submenus, outermost first.
    pub fn expanded_keys(&self) -> &[K] {
        &self.expanded
    }

    /// Whether the submenu for `key` is open at `level`.
    pub fn is_submenu_open(&self, key: &K, level: usize) -> bool {
        self.expanded.get(level) == Some(key)
    }

    /// Open the submenu for `key` at `level`, closing any deeper ones.
    ///
    /// Missing intermediate levels are not invented: opening at a level deeper
    /// than the current stack pushes onto the top.
    pub fn open_submenu(&mut self, key: K, level: usize, focus_strategy: Option<FocusStrategy>) {
        self.expanded.truncate(level);
        self.expanded.push(key);
        self.submenu_focus = focus_strategy;
    }

    /// Close the submenu for `key` at `level`, and every deeper one.
    ///
    /// Does nothing if a different submenu is open at that level.
    pub fn close_submenu(&mut self, key: &K, level: usize) {
        if self.is_submenu_open(key, level) {
            self.expanded.truncate(level);
        }
    }

    /// Close every submenu and the root menu.
    pub fn close_all(&mut self) {
        self.expanded.clear();
        self.root_open = false;
        self.root_focus = None;
        self.submenu_focus = None;
    }

    /// A [`SubMenuState`] view of the submenu for `key` at `level`.
    pub fn submenu(&mut self, key: K, level: usize) -> SubMenuTriggerState<'_, K> {
        SubMenuTriggerState {
            tree: self,
            key,
            level,
        }
    }
}

/// One submenu of a [`MenuTreeState`], addressed by key and level.
#[derive(Debug)]
pub struct SubMenuTriggerState<'a, K> {
    tree: &'a mut MenuTreeState<K>,
    key: K,
    level: usize,
}

impl<K> SubMenuTriggerState<'_, K> {
    /// Nesting level of this submenu.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Key of the item that opens this submenu.
    pub fn key(&self) -> &K {
        &self.key
    }
}

impl<K: Clone + PartialEq> SubMenuState for SubMenuTriggerState<'_, K> {
    fn is_open(&self) -> bool {
        self.tree.is_submenu_open(&self.key, self.level)
    }

    fn open(&mut self, focus_strategy: Option<FocusStrategy>) {
        self.tree
            .open_submenu(self.key.clone(), self.level, focus_strategy);
    }

    fn close(&mut self) {
        self.tree.close_submenu(&self.key, self.level);
    }

    fn close_all(&mut self) {
        self.tree.close_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn open_pushes_and_truncates() {
        let mut tree = MenuTreeState::new();
        tree.open_submenu(1_u32, 0, None);
        tree.open_submenu(2, 1, Some(FocusStrategy::First));
        assert_eq!(tree.expanded_keys(), &[1, 2]);
        assert_eq!(tree.submenu_focus_strategy(), Some(FocusStrategy::First));

        tree.open_submenu(3, 0, None);
        assert_eq!(tree.expanded_keys(), &[3]);
    }

    #[test]
    fn close_only_matches_own_level() {
        let mut tree = MenuTreeState::new();
        tree.open_submenu(1_u32, 0, None);
        tree.open_submenu(2, 1, None);
        tree.close_submenu(&2, 0);
        assert_eq!(tree.expanded_keys(), &[1, 2]);
        tree.close_submenu(&1, 0);
        assert!(tree.expanded_keys().is_empty());
    }

    #[test]
    fn close_all_closes_root() {
        let mut tree = MenuTreeState::new();
        tree.open_root(Some(FocusStrategy::Last));
        assert_eq!(tree.root_focus_strategy(), Some(FocusStrategy::Last));
        tree.open_submenu('a', 0, None);
        tree.open_submenu('b', 1, None);
        tree.close_all();
        assert!(!tree.is_root_open());
        assert_eq!(tree.expanded_keys(), &[] as &[char]);
    }

    #[test]
    fn trigger_view_tracks_its_slot() {
        let mut tree = MenuTreeState::new();
        assert!(!tree.submenu(7_u8, 0).is_open());
        tree.submenu(7, 0).open(None);
        assert!(tree.submenu(7, 0).is_open());
        assert!(!tree.submenu(7, 1).is_open());
        assert!(!tree.submenu(8, 0).is_open());

        let view = tree.submenu(9, 1);
        assert_eq!((view.level(), *view.key()), (1, 9));

        tree.submenu(9, 1).open(None);
        assert_eq!(tree.expanded_keys(), vec![7, 9].as_slice());
        tree.submenu(7, 0).close();
        assert!(tree.expanded_keys().is_empty());
    }
}
