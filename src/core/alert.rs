// Shared "security breached" flag.
//
// Other parts of the page raise or clear the flag; the particle renderer only
// reads it. Handles are cheap clones of one shared cell, and every `set`
// notifies the current subscribers with the new value.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Callback = Rc<dyn Fn(bool)>;

#[derive(Default)]
struct AlertInner {
    value: Cell<bool>,
    next_id: Cell<u64>,
    subscribers: RefCell<Vec<(u64, Callback)>>,
}

#[derive(Clone, Default)]
pub struct AlertFlag {
    inner: Rc<AlertInner>,
}

impl AlertFlag {
    pub fn new(initial: bool) -> Self {
        let flag = Self::default();
        flag.inner.value.set(initial);
        flag
    }

    #[inline]
    pub fn get(&self) -> bool {
        self.inner.value.get()
    }

    pub fn set(&self, value: bool) {
        self.inner.value.set(value);
        // Snapshot so callbacks may subscribe or unsubscribe re-entrantly
        let callbacks: Vec<Callback> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        for cb in callbacks {
            cb(value);
        }
    }

    /// Register `callback`; it stays registered until the returned
    /// `Subscription` is dropped or `unsubscribe`d.
    #[must_use = "dropping the Subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl Fn(bool) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .subscribers
            .borrow_mut()
            .push((id, Rc::new(callback)));
        Subscription {
            id,
            flag: Rc::downgrade(&self.inner),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }
}

impl std::fmt::Debug for AlertFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertFlag")
            .field("value", &self.get())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

pub struct Subscription {
    id: u64,
    flag: Weak<AlertInner>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.flag.upgrade() {
            inner
                .subscribers
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
    }
}
