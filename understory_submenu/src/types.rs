// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input and output vocabulary of the submenu trigger.

/// Layout direction of the menu.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right: submenus open to the right.
    #[default]
    Ltr,
    /// Right to left: submenus open to the left.
    Rtl,
}

impl Direction {
    /// The arrow key that opens a submenu (points toward it).
    pub const fn open_key(self) -> Key {
        match self {
            Self::Ltr => Key::ArrowRight,
            Self::Rtl => Key::ArrowLeft,
        }
    }

    /// The arrow key that closes a submenu (points back at the parent).
    pub const fn close_key(self) -> Key {
        match self {
            Self::Ltr => Key::ArrowLeft,
            Self::Rtl => Key::ArrowRight,
        }
    }
}

/// Keys the trigger understands, plus a catch-all.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// `ArrowLeft`.
    ArrowLeft,
    /// `ArrowRight`.
    ArrowRight,
    /// `ArrowUp`.
    ArrowUp,
    /// `ArrowDown`.
    ArrowDown,
    /// `Home`.
    Home,
    /// `End`.
    End,
    /// `Enter`.
    Enter,
    /// The space bar.
    Space,
    /// `Tab`.
    Tab,
    /// `Escape`.
    Escape,
    /// A printable character, e.g. for typeahead.
    Character(char),
}

/// The kind of pointer behind a press.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerType {
    /// A mouse.
    Mouse,
    /// A pen or stylus.
    Pen,
    /// A touch screen.
    Touch,
    /// A keyboard activation (Enter/Space).
    Keyboard,
    /// An assistive technology activation.
    Virtual,
}

impl PointerType {
    /// Presses that open on press start and move focus into the submenu.
    pub const fn is_keyboard_like(self) -> bool {
        matches!(self, Self::Keyboard | Self::Virtual)
    }
}

/// Where focus goes when a submenu opens.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FocusStrategy {
    /// The first item.
    First,
    /// The last item.
    Last,
}

/// Whether a key event should keep propagating to outer handlers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Propagation {
    /// The trigger handled the key; stop here.
    Stop,
    /// Not handled; let the enclosing item or menu handle it.
    Continue,
}

/// Observable state of a submenu trigger.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SubMenuPhase {
    /// Closed, nothing pending.
    Closed,
    /// Closed, with a hover-intent open pending.
    PendingOpen,
    /// Open.
    Open,
}
