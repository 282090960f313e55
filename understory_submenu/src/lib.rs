// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_submenu --heading-base-level=0

//! Understory Submenu: headless state for menu items that open submenus.
//!
//! A submenu trigger is a menu item that opens a nested menu. Deciding *when*
//! it opens and closes is fiddly: hovering should only open after a short
//! delay (so that sweeping the pointer across a menu does not flash every
//! submenu), keyboard and press input should open immediately, arrow keys
//! mirror under right-to-left layouts, and focus must not be lost to nothing
//! when the submenu is dismissed.
//!
//! - [`SubMenuTrigger`]: the controller. It owns only the pending hover-intent
//!   timer and translates input into calls on a [`SubMenuState`].
//! - [`SubMenuState`]: the menu collaborator (`is_open`, `open`, `close`,
//!   `close_all`). [`MenuTreeState`] implements it for a root menu with a stack
//!   of nested submenus.
//! - [`MenuFocus`]: the focus collaborator (containment tests and focus moves).
//!
//! The trigger never renders anything and never reads a clock: the host
//! forwards events with a monotonic millisecond timestamp and polls the
//! trigger when [`SubMenuTrigger::next_deadline`] is reached.
//!
//! ## States
//!
//! | From | Input | To |
//! |------|-------|----|
//! | Closed | hover enter | PendingOpen (timer armed) |
//! | PendingOpen | timer due ([`SubMenuTrigger::poll`]) | Open |
//! | PendingOpen | hover exit, unmount | Closed (timer canceled) |
//! | Closed, PendingOpen | opening arrow, press | Open (timer canceled) |
//! | Open | closing arrow | Closed |
//! | Open | Escape in the submenu | whole menu closed |
//! | Open | focus leaves trigger and submenu | Closed |
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_submenu::{MenuTreeState, SubMenuPhase, SubMenuTrigger};
//!
//! let mut menu = MenuTreeState::new();
//! menu.open_root(None);
//! let mut trigger = SubMenuTrigger::default();
//!
//! // Pointer enters the "Share" item at t = 1000 ms.
//! trigger.on_hover_change(true, 1_000, &menu.submenu("share", 0));
//! assert_eq!(trigger.next_deadline(), Some(1_200));
//!
//! // Nothing happens before the delay elapses.
//! assert!(!trigger.poll(1_100, &mut menu.submenu("share", 0)));
//! assert!(trigger.poll(1_200, &mut menu.submenu("share", 0)));
//! assert_eq!(trigger.phase(&menu.submenu("share", 0)), SubMenuPhase::Open);
//! assert_eq!(menu.expanded_keys(), ["share"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod focus;
mod state;
mod trigger;
mod types;

pub use focus::MenuFocus;
pub use state::{MenuTreeState, SubMenuState, SubMenuTriggerState};
pub use trigger::{DEFAULT_OPEN_DELAY, SubMenuConfig, SubMenuTrigger};
pub use types::{Direction, FocusStrategy, Key, PointerType, Propagation, SubMenuPhase};
