// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controlled/uncontrolled value ownership.
//!
//! A widget value is either *uncontrolled* (the widget owns it and updates it
//! itself) or *controlled* (the host owns it; the widget only reports requested
//! changes and waits for the host to push the new value back with
//! [`ControlledValue::sync`]).
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use understory_color_area::ControlledValue;
//!
//! let seen = Rc::new(Cell::new(0));
//! let sink = seen.clone();
//! let mut v = ControlledValue::controlled(1).with_on_change(move |v: &i32| sink.set(*v));
//!
//! assert!(v.set(5));
//! assert_eq!(seen.get(), 5);
//! assert_eq!(*v.get(), 1); // the host has not accepted the change yet
//!
//! v.sync(5);
//! assert_eq!(*v.get(), 5);
//! ```

use core::fmt;

/// Change notifier invoked with the requested value.
pub type OnChange<T> = Box<dyn FnMut(&T)>;

/// A value that is either owned by the widget or by its host.
pub struct ControlledValue<T> {
    value: T,
    controlled: bool,
    on_change: Option<OnChange<T>>,
}

impl<T: fmt::Debug> fmt::Debug for ControlledValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlledValue")
            .field("value", &self.value)
            .field("controlled", &self.controlled)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl<T: Clone + PartialEq> ControlledValue<T> {
    /// A controlled value if `value` is given, otherwise uncontrolled starting at `default_value`.
    pub fn new(value: Option<T>, default_value: T) -> Self {
        match value {
            Some(value) => Self::controlled(value),
            None => Self::uncontrolled(default_value),
        }
    }

    /// A value owned by the host.
    pub fn controlled(value: T) -> Self {
        Self {
            value,
            controlled: true,
            on_change: None,
        }
    }

    /// A value owned by the widget.
    pub fn uncontrolled(default_value: T) -> Self {
        Self {
            value: default_value,
            controlled: false,
            on_change: None,
        }
    }

    /// Attach a change notifier.
    pub fn with_on_change(mut self, on_change: impl FnMut(&T) + 'static) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    /// Replace the change notifier.
    pub fn set_on_change(&mut self, on_change: Option<OnChange<T>>) {
        self.on_change = on_change;
    }

    /// The current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Whether the host owns the value.
    pub fn is_controlled(&self) -> bool {
        self.controlled
    }

    /// Request a new value.
    ///
    /// Does nothing and returns `false` if `value` equals the current value.
    /// Otherwise stores it (uncontrolled only), notifies, and returns `true`.
    pub fn set(&mut self, value: T) -> bool {
        if value == self.value {
            return false;
        }
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(&value);
        }
        if !self.controlled {
            self.value = value;
        }
        true
    }

    /// Accept a value pushed by the host, without notifying.
    pub fn sync(&mut self, value: T) {
        self.value = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<u8>>>, impl FnMut(&u8) + 'static) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        (log, move |v: &u8| sink.borrow_mut().push(*v))
    }

    #[test]
    fn uncontrolled_stores_and_notifies() {
        let (log, cb) = recorder();
        let mut v = ControlledValue::new(None, 1_u8).with_on_change(cb);
        assert!(!v.is_controlled());
        assert!(v.set(2));
        assert_eq!(*v.get(), 2);
        assert_eq!(*log.borrow(), [2]);
    }

    #[test]
    fn equal_values_are_ignored() {
        let (log, cb) = recorder();
        let mut v = ControlledValue::uncontrolled(3_u8).with_on_change(cb);
        assert!(!v.set(3));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn controlled_waits_for_sync() {
        let (log, cb) = recorder();
        let mut v = ControlledValue::new(Some(1_u8), 9).with_on_change(cb);
        assert!(v.is_controlled());
        assert!(v.set(4));
        assert!(v.set(4));
        assert_eq!(*v.get(), 1);
        assert_eq!(*log.borrow(), [4, 4]);
        v.sync(4);
        assert!(!v.set(4));
        assert_eq!(log.borrow().len(), 2);
    }
}
