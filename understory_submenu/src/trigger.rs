// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The submenu trigger controller.
//!
//! ## Usage
//!
//! 1) Create a [`SubMenuTrigger`] per submenu-opening menu item.
//! 2) Forward hover changes, presses and key events of the trigger item to it,
//!    together with the menu's [`SubMenuState`].
//! 3) Forward key events of the open submenu to
//!    [`SubMenuTrigger::on_submenu_key_down`], and focus leaving the trigger or
//!    submenu to [`SubMenuTrigger::on_focus_leave`].
//! 4) Call [`SubMenuTrigger::poll`] when [`SubMenuTrigger::next_deadline`] is
//!    reached (or on every frame) so that hover-intent opens fire.
//! 5) Call [`SubMenuTrigger::unmount`] when the item goes away.
//!
//! Time is a monotonic millisecond counter supplied by the host.

use understory_timing::OneShot;

use crate::focus::MenuFocus;
use crate::state::SubMenuState;
use crate::types::{Direction, FocusStrategy, Key, PointerType, Propagation, SubMenuPhase};

/// Hover-intent delay before a hovered trigger opens its submenu, in ms.
pub const DEFAULT_OPEN_DELAY: u64 = 200;

/// Configuration of a [`SubMenuTrigger`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SubMenuConfig {
    /// Delay between hover-enter and opening, in ms.
    pub open_delay: u64,
    /// Layout direction; decides which arrow keys open and close.
    pub direction: Direction,
    /// A disabled trigger ignores all interaction.
    pub disabled: bool,
}

impl Default for SubMenuConfig {
    fn default() -> Self {
        Self {
            open_delay: DEFAULT_OPEN_DELAY,
            direction: Direction::Ltr,
            disabled: false,
        }
    }
}

impl SubMenuConfig {
    /// Use `direction`.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Use a custom hover-intent delay.
    pub fn with_open_delay(mut self, open_delay: u64) -> Self {
        self.open_delay = open_delay;
        self
    }

    /// Disable or enable the trigger.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Decides when a submenu opens and closes.
///
/// The open flag itself lives in the host's [`SubMenuState`]; the trigger owns
/// only the pending hover-intent timer. At most one open is ever pending, and
/// every path that opens, closes or tears down the trigger cancels it first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubMenuTrigger {
    config: SubMenuConfig,
    open_timer: OneShot,
    unmounted: bool,
}

impl SubMenuTrigger {
    /// Create a trigger.
    pub fn new(config: SubMenuConfig) -> Self {
        Self {
            config,
            open_timer: OneShot::new(),
            unmounted: false,
        }
    }

    /// The current configuration.
    pub fn config(&self) -> &SubMenuConfig {
        &self.config
    }

    /// Change the layout direction.
    pub fn set_direction(&mut self, direction: Direction) {
        self.config.direction = direction;
    }

    /// Disable or enable the trigger. Disabling cancels a pending open.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
        if disabled {
            self.cancel_open_timer();
        }
    }

    /// Whether a hover-intent open is pending.
    pub fn is_open_pending(&self) -> bool {
        self.open_timer.is_pending()
    }

    /// When the pending hover-intent open is due, if any.
    pub fn next_deadline(&self) -> Option<u64> {
        self.open_timer.deadline()
    }

    /// Combine the host's open flag with the pending timer.
    pub fn phase<S: SubMenuState>(&self, state: &S) -> SubMenuPhase {
        if state.is_open() {
            SubMenuPhase::Open
        } else if self.open_timer.is_pending() {
            SubMenuPhase::PendingOpen
        } else {
            SubMenuPhase::Closed
        }
    }

    /// The pointer entered (`true`) or left (`false`) the trigger.
    ///
    /// Entering a closed trigger arms the open timer unless one is already
    /// pending. Leaving cancels it.
    pub fn on_hover_change<S: SubMenuState>(&mut self, hovered: bool, now: u64, state: &S) {
        if !self.is_active() {
            return;
        }
        if hovered && !state.is_open() {
            if self.open_timer.arm(now, self.config.open_delay) {
                log::trace!("submenu open armed for {:?}", self.open_timer.deadline());
            }
        } else if !hovered && self.open_timer.cancel() {
            log::trace!("submenu open canceled by hover exit");
        }
    }

    /// Fire a due hover-intent open. Returns whether the submenu was opened.
    pub fn poll<S: SubMenuState>(&mut self, now: u64, state: &mut S) -> bool {
        if !self.open_timer.fire(now) {
            return false;
        }
        log::debug!("submenu opened after hover delay");
        state.open(None);
        true
    }

    /// A press started on the trigger.
    ///
    /// Keyboard and assistive technology presses open immediately and focus
    /// the first submenu item.
    pub fn on_press_start<S: SubMenuState>(&mut self, pointer: PointerType, state: &mut S) {
        if self.is_active() && pointer.is_keyboard_like() {
            self.open(state, Some(FocusStrategy::First));
        }
    }

    /// A press completed on the trigger.
    ///
    /// Mouse, pen and touch presses open immediately without moving focus.
    pub fn on_press<S: SubMenuState>(&mut self, pointer: PointerType, state: &mut S) {
        if self.is_active() && !pointer.is_keyboard_like() {
            self.open(state, None);
        }
    }

    /// A key was pressed while the trigger had focus.
    ///
    /// The opening arrow opens the submenu (focusing its first item) and moves
    /// focus into it. The closing arrow closes an open submenu. Everything
    /// else, including the closing arrow on a closed submenu, continues to the
    /// enclosing menu item.
    pub fn on_trigger_key_down<S: SubMenuState, F: MenuFocus>(
        &mut self,
        key: Key,
        state: &mut S,
        focus: &mut F,
    ) -> Propagation {
        if !self.is_active() {
            return Propagation::Continue;
        }
        if key == self.config.direction.open_key() {
            if !state.is_open() {
                self.open(state, Some(FocusStrategy::First));
            }
            if focus.is_trigger_focused() {
                focus.focus_submenu();
            }
            Propagation::Stop
        } else if key == self.config.direction.close_key() && state.is_open() {
            self.close(state);
            Propagation::Stop
        } else {
            Propagation::Continue
        }
    }

    /// A key was pressed inside the open submenu.
    ///
    /// The closing arrow closes this submenu and returns focus to the trigger.
    /// Escape closes the whole menu. Ignored while focus is not inside the
    /// submenu, since another element is then driving it.
    pub fn on_submenu_key_down<S: SubMenuState, F: MenuFocus>(
        &mut self,
        key: Key,
        state: &mut S,
        focus: &mut F,
    ) -> Propagation {
        if self.unmounted || !focus.is_focus_within_submenu() {
            return Propagation::Continue;
        }
        if key == self.config.direction.close_key() {
            self.close(state);
            focus.focus_trigger();
            Propagation::Stop
        } else if key == Key::Escape {
            self.cancel_open_timer();
            log::debug!("submenu escape closes the menu");
            state.close_all();
            Propagation::Stop
        } else {
            Propagation::Continue
        }
    }

    /// Focus left the trigger or the submenu, moving to `related` (`None` when
    /// focus left the window or went to nothing).
    ///
    /// If focus went somewhere outside both, the submenu closes. Focus then
    /// returns to the trigger unless it already landed in the parent menu.
    pub fn on_focus_leave<S: SubMenuState, F: MenuFocus>(
        &mut self,
        related: Option<&F::Node>,
        state: &mut S,
        focus: &mut F,
    ) {
        if self.unmounted || !state.is_open() {
            return;
        }
        if related
            .is_some_and(|node| focus.trigger_contains(node) || focus.submenu_contains(node))
        {
            return;
        }
        self.close(state);
        if !related.is_some_and(|node| focus.parent_menu_contains(node)) {
            focus.focus_trigger();
        }
    }

    /// The pointer went down outside the open submenu on `target`.
    ///
    /// Only interactions on the trigger itself close the submenu here; other
    /// outside interactions are the parent menu's business.
    pub fn on_interact_outside<S: SubMenuState, F: MenuFocus>(
        &mut self,
        target: &F::Node,
        state: &mut S,
        focus: &F,
    ) {
        if !self.unmounted && state.is_open() && focus.trigger_contains(target) {
            self.close(state);
        }
    }

    /// Tear the trigger down. Cancels any pending open; later events are ignored.
    pub fn unmount(&mut self) {
        if self.open_timer.cancel() {
            log::debug!("submenu trigger unmounted with a pending open");
        }
        self.unmounted = true;
    }

    fn is_active(&self) -> bool {
        !self.unmounted && !self.config.disabled
    }

    fn cancel_open_timer(&mut self) {
        if self.open_timer.cancel() {
            log::trace!("submenu open timer canceled");
        }
    }

    fn open<S: SubMenuState>(&mut self, state: &mut S, focus_strategy: Option<FocusStrategy>) {
        self.cancel_open_timer();
        log::trace!("submenu open ({focus_strategy:?})");
        state.open(focus_strategy);
    }

    fn close<S: SubMenuState>(&mut self, state: &mut S) {
        self.cancel_open_timer();
        log::trace!("submenu close");
        state.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Flag {
        open: bool,
        opened_with: Option<Option<FocusStrategy>>,
        closed_all: bool,
    }

    impl SubMenuState for Flag {
        fn is_open(&self) -> bool {
            self.open
        }
        fn open(&mut self, focus_strategy: Option<FocusStrategy>) {
            self.open = true;
            self.opened_with = Some(focus_strategy);
        }
        fn close(&mut self) {
            self.open = false;
        }
        fn close_all(&mut self) {
            self.open = false;
            self.closed_all = true;
        }
    }

    #[test]
    fn hover_arms_once() {
        let mut t = SubMenuTrigger::default();
        let mut s = Flag::default();
        t.on_hover_change(true, 0, &s);
        t.on_hover_change(true, 150, &s);
        assert_eq!(t.next_deadline(), Some(200));
        assert_eq!(t.phase(&s), SubMenuPhase::PendingOpen);
        assert!(!t.poll(199, &mut s));
        assert!(t.poll(200, &mut s));
        assert_eq!(s.opened_with, Some(None));
        assert_eq!(t.phase(&s), SubMenuPhase::Open);
        assert!(!t.poll(400, &mut s));
    }

    #[test]
    fn hover_on_open_submenu_does_not_arm() {
        let mut t = SubMenuTrigger::default();
        let s = Flag {
            open: true,
            ..Flag::default()
        };
        t.on_hover_change(true, 0, &s);
        assert!(!t.is_open_pending());
    }

    #[test]
    fn press_start_only_for_keyboard_like() {
        let mut t = SubMenuTrigger::default();
        let mut s = Flag::default();
        t.on_press_start(PointerType::Mouse, &mut s);
        assert!(!s.open);
        t.on_press_start(PointerType::Virtual, &mut s);
        assert_eq!(s.opened_with, Some(Some(FocusStrategy::First)));
    }

    #[test]
    fn press_cancels_pending_hover() {
        let mut t = SubMenuTrigger::default();
        let mut s = Flag::default();
        t.on_hover_change(true, 0, &s);
        t.on_press(PointerType::Touch, &mut s);
        assert!(s.open);
        assert_eq!(s.opened_with, Some(None));
        assert!(!t.is_open_pending());
    }

    #[test]
    fn disabling_cancels_and_blocks() {
        let mut t = SubMenuTrigger::default();
        let mut s = Flag::default();
        t.on_hover_change(true, 0, &s);
        t.set_disabled(true);
        assert!(!t.is_open_pending());
        t.on_hover_change(true, 10, &s);
        t.on_press(PointerType::Mouse, &mut s);
        assert!(!t.poll(1_000, &mut s));
        assert!(!s.open);
    }

    #[test]
    fn unmount_cancels() {
        let mut t = SubMenuTrigger::default();
        let mut s = Flag::default();
        t.on_hover_change(true, 0, &s);
        t.unmount();
        assert_eq!(t.next_deadline(), None);
        assert!(!t.poll(500, &mut s));
        t.on_hover_change(true, 600, &s);
        assert!(!t.is_open_pending());
    }

    #[test]
    fn custom_delay() {
        let mut t = SubMenuTrigger::new(SubMenuConfig::default().with_open_delay(50));
        let s = Flag::default();
        t.on_hover_change(true, 10, &s);
        assert_eq!(t.next_deadline(), Some(60));
    }
}
