use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use crate::{
    foundation::core::Progress,
    scroll::tracker::{ScrollState, ScrollTracker},
};

/// Single-threaded registry of scroll trackers.
///
/// The host calls [`ScrollHub::dispatch`] once per scroll or resize event; every live
/// subscription is recomputed exactly once and the result cached, so every reader within a
/// tick sees the same value.
#[derive(Clone, Default)]
pub struct ScrollHub {
    inner: Rc<RefCell<HubInner>>,
}

#[derive(Default)]
struct HubInner {
    slots: Vec<Option<Slot>>,
    free: Vec<usize>,
    next_id: u64,
    last_state: Option<ScrollState>,
    ticks: u64,
}

struct Slot {
    id: u64,
    tracker: ScrollTracker,
    progress: Progress,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct SlotKey {
    index: usize,
    id: u64,
}

impl HubInner {
    fn slot(&self, key: SlotKey) -> Option<&Slot> {
        self.slots
            .get(key.index)
            .and_then(Option::as_ref)
            .filter(|s| s.id == key.id)
    }

    fn slot_mut(&mut self, key: SlotKey) -> Option<&mut Slot> {
        self.slots
            .get_mut(key.index)
            .and_then(Option::as_mut)
            .filter(|s| s.id == key.id)
    }

    fn remove(&mut self, key: SlotKey) -> bool {
        if self.slot(key).is_none() {
            return false;
        }
        self.slots[key.index] = None;
        self.free.push(key.index);
        true
    }
}

impl ScrollHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tracker. The returned handle deregisters when dropped.
    ///
    /// If the hub has already seen a tick, the new subscription is primed from it.
    pub fn subscribe(&self, tracker: ScrollTracker) -> ScrollSubscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;

        let progress = inner
            .last_state
            .map_or(Progress::ZERO, |state| tracker.progress(&state));
        let slot = Slot {
            id,
            tracker,
            progress,
        };
        let index = match inner.free.pop() {
            Some(index) => {
                inner.slots[index] = Some(slot);
                index
            }
            None => {
                inner.slots.push(Some(slot));
                inner.slots.len() - 1
            }
        };
        tracing::debug!(index, id, "scroll subscription added");

        ScrollSubscription {
            hub: Rc::downgrade(&self.inner),
            key: SlotKey { index, id },
        }
    }

    /// Recompute every live subscription from one measured state.
    pub fn dispatch(&self, state: &ScrollState) {
        let mut inner = self.inner.borrow_mut();
        for slot in inner.slots.iter_mut().flatten() {
            slot.progress = slot.tracker.progress(state);
        }
        inner.last_state = Some(*state);
        inner.ticks += 1;
    }

    /// Swap the tracker behind a subscription (e.g. after a re-layout), recomputing it from the
    /// last dispatched state. Returns `false` if the subscription does not belong to this hub.
    pub fn retarget(&self, subscription: &ScrollSubscription, tracker: ScrollTracker) -> bool {
        if !Weak::ptr_eq(&subscription.hub, &Rc::downgrade(&self.inner)) {
            return false;
        }
        let mut inner = self.inner.borrow_mut();
        let last_state = inner.last_state;
        let Some(slot) = inner.slot_mut(subscription.key) else {
            return false;
        };
        slot.tracker = tracker;
        if let Some(state) = last_state {
            slot.progress = tracker.progress(&state);
        }
        true
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().slots.iter().flatten().count()
    }

    /// Number of dispatches so far.
    pub fn ticks(&self) -> u64 {
        self.inner.borrow().ticks
    }

    pub fn last_state(&self) -> Option<ScrollState> {
        self.inner.borrow().last_state
    }
}

impl std::fmt::Debug for ScrollHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollHub")
            .field("listeners", &self.listener_count())
            .field("ticks", &self.ticks())
            .finish()
    }
}

/// A live registration on a [`ScrollHub`].
#[derive(Debug)]
pub struct ScrollSubscription {
    hub: Weak<RefCell<HubInner>>,
    key: SlotKey,
}

impl ScrollSubscription {
    /// Progress cached by the most recent dispatch; `0` once the hub is gone.
    pub fn progress(&self) -> Progress {
        self.read(|slot| slot.progress).unwrap_or(Progress::ZERO)
    }

    pub fn tracker(&self) -> Option<ScrollTracker> {
        self.read(|slot| slot.tracker)
    }

    pub fn is_live(&self) -> bool {
        self.read(|_| ()).is_some()
    }

    fn read<R>(&self, f: impl FnOnce(&Slot) -> R) -> Option<R> {
        let hub = self.hub.upgrade()?;
        let inner = hub.borrow();
        inner.slot(self.key).map(f)
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.hub.upgrade()
            && inner.borrow_mut().remove(self.key)
        {
            tracing::debug!(index = self.key.index, id = self.key.id, "scroll subscription dropped");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/hub.rs"]
mod tests;
