//! Keyboard shortcuts for history navigation.
//!
//! Ctrl+Z / Cmd+Z undoes, Ctrl+Y / Cmd+Y redoes. Handlers are registered
//! against a [`ShortcutRegistry`] and stay active only while the returned
//! [`Subscription`] is alive, so a view that goes away takes its handlers
//! with it.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use crate::engine::{Action, DesignState};

/// A key press with the modifiers relevant to shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key: char,
    pub ctrl: bool,
    /// Cmd on macOS.
    pub meta: bool,
}

impl KeyEvent {
    #[must_use]
    pub const fn new(key: char) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
        }
    }

    #[must_use]
    pub const fn ctrl(key: char) -> Self {
        Self {
            key,
            ctrl: true,
            meta: false,
        }
    }

    #[must_use]
    pub const fn meta(key: char) -> Self {
        Self {
            key,
            ctrl: false,
            meta: true,
        }
    }
}

/// History shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shortcut {
    Undo,
    Redo,
}

impl Shortcut {
    /// Maps a key event to a shortcut. Either Ctrl or Cmd activates it and
    /// the letter is matched case-insensitively.
    #[must_use]
    pub fn from_event(event: KeyEvent) -> Option<Self> {
        if !(event.ctrl || event.meta) {
            return None;
        }
        match event.key.to_ascii_lowercase() {
            'z' => Some(Self::Undo),
            'y' => Some(Self::Redo),
            _ => None,
        }
    }

    #[must_use]
    pub fn action(self) -> Action {
        match self {
            Self::Undo => Action::Undo,
            Self::Redo => Action::Redo,
        }
    }
}

/// Result of feeding a key event to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyOutcome {
    /// At least one handler received the shortcut.
    pub handled: bool,
    /// The host should suppress its own handling of the key.
    pub default_prevented: bool,
}

type Handler = Box<dyn FnMut(Shortcut)>;

#[derive(Default)]
struct Handlers {
    next_id: u64,
    entries: BTreeMap<u64, Handler>,
    /// Subscriptions dropped while their handler was checked out by `dispatch`.
    dropped: Vec<u64>,
}

/// Dispatches shortcut key events to subscribed handlers.
#[derive(Clone, Default)]
pub struct ShortcutRegistry {
    inner: Rc<RefCell<Handlers>>,
}

impl std::fmt::Debug for ShortcutRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShortcutRegistry")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl ShortcutRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler`. It is removed when the returned guard drops.
    #[must_use = "the handler is unregistered as soon as the subscription is dropped"]
    pub fn subscribe(&self, handler: impl FnMut(Shortcut) + 'static) -> Subscription {
        let mut handlers = self.inner.borrow_mut();
        let id = handlers.next_id;
        handlers.next_id += 1;
        handlers.entries.insert(id, Box::new(handler));
        Subscription {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Feeds one key event to every live handler, in subscription order.
    ///
    /// Undo/redo keys always prevent the default, even when there is nothing
    /// to undo or redo.
    pub fn dispatch(&self, event: KeyEvent) -> KeyOutcome {
        let Some(shortcut) = Shortcut::from_event(event) else {
            return KeyOutcome::default();
        };

        // Handlers run outside the borrow so they may subscribe or drop
        // subscriptions themselves.
        let mut entries = std::mem::take(&mut self.inner.borrow_mut().entries);
        for handler in entries.values_mut() {
            handler(shortcut);
        }
        let handled = !entries.is_empty();
        let mut inner = self.inner.borrow_mut();
        let added = std::mem::replace(&mut inner.entries, entries);
        inner.entries.extend(added);
        for id in std::mem::take(&mut inner.dropped) {
            inner.entries.remove(&id);
        }

        KeyOutcome {
            handled,
            default_prevented: true,
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }
}

/// Keeps a handler registered; dropping it unregisters the handler.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Handlers>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.registry.upgrade() {
            if let Ok(mut handlers) = inner.try_borrow_mut() {
                if handlers.entries.remove(&self.id).is_none() {
                    handlers.dropped.push(self.id);
                }
            }
        }
    }
}

/// Routes undo/redo shortcuts to a shared design state.
#[must_use = "the binding is removed as soon as the subscription is dropped"]
pub fn bind_design_state(
    registry: &ShortcutRegistry,
    state: Rc<RefCell<DesignState>>,
) -> Subscription {
    registry.subscribe(move |shortcut| {
        state.borrow_mut().dispatch(shortcut.action());
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{IconRef, StyleModel};

    #[test]
    fn key_mapping() {
        assert_eq!(Shortcut::from_event(KeyEvent::ctrl('z')), Some(Shortcut::Undo));
        assert_eq!(Shortcut::from_event(KeyEvent::meta('Z')), Some(Shortcut::Undo));
        assert_eq!(Shortcut::from_event(KeyEvent::ctrl('y')), Some(Shortcut::Redo));
        assert_eq!(Shortcut::from_event(KeyEvent::meta('y')), Some(Shortcut::Redo));
        assert_eq!(Shortcut::from_event(KeyEvent::new('z')), None);
        assert_eq!(Shortcut::from_event(KeyEvent::ctrl('x')), None);
    }

    #[test]
    fn bound_state_undoes_and_redoes() {
        let registry = ShortcutRegistry::new();
        let state = Rc::new(RefCell::new(DesignState::new()));
        let _binding = bind_design_state(&registry, Rc::clone(&state));

        state
            .borrow_mut()
            .dispatch(Action::SetIcon(IconRef::from("Star")));

        let outcome = registry.dispatch(KeyEvent::ctrl('z'));
        assert!(outcome.handled);
        assert!(outcome.default_prevented);
        assert_eq!(state.borrow().present(), &StyleModel::default());

        registry.dispatch(KeyEvent::meta('y'));
        assert_eq!(
            state.borrow().present().icon_style().unwrap().icon,
            Some(IconRef::from("Star"))
        );
    }

    #[test]
    fn unavailable_undo_still_prevents_default() {
        let registry = ShortcutRegistry::new();
        let state = Rc::new(RefCell::new(DesignState::new()));
        let _binding = bind_design_state(&registry, state);

        let outcome = registry.dispatch(KeyEvent::ctrl('z'));
        assert!(outcome.default_prevented);
    }

    #[test]
    fn other_keys_pass_through() {
        let registry = ShortcutRegistry::new();
        let _sub = registry.subscribe(|_| panic!("should not be called"));
        assert_eq!(registry.dispatch(KeyEvent::ctrl('s')), KeyOutcome::default());
        assert_eq!(registry.dispatch(KeyEvent::new('z')), KeyOutcome::default());
    }

    #[test]
    fn dropping_subscription_unregisters() {
        let registry = ShortcutRegistry::new();
        let hits = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&hits);
        let sub = registry.subscribe(move |_| *counter.borrow_mut() += 1);
        assert_eq!(registry.listener_count(), 1);

        registry.dispatch(KeyEvent::ctrl('z'));
        drop(sub);
        assert_eq!(registry.listener_count(), 0);

        let outcome = registry.dispatch(KeyEvent::ctrl('z'));
        assert!(!outcome.handled);
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn handler_can_drop_its_own_subscription() {
        let registry = ShortcutRegistry::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::default();

        let inner_slot = Rc::clone(&slot);
        let sub = registry.subscribe(move |_| {
            inner_slot.borrow_mut().take();
        });
        *slot.borrow_mut() = Some(sub);

        assert!(registry.dispatch(KeyEvent::ctrl('y')).handled);
        assert_eq!(registry.listener_count(), 0);
    }

    #[test]
    fn subscription_outliving_registry_is_harmless() {
        let registry = ShortcutRegistry::new();
        let sub = registry.subscribe(|_| {});
        drop(registry);
        drop(sub);
    }
}
