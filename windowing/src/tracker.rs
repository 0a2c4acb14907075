use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use core::cell::{Cell, RefCell};
use core::fmt;

use crate::{OnChangeCallback, ScrollSnapshot};

/// Identity of a listener registered on a [`ScrollContainer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListenerId(pub u64);

/// The host's scrollable element.
///
/// The container owns native scrolling (including clamping to its content). It calls every
/// registered listener after its offset or viewport changes; listeners read the new state back
/// through `scroll_offset`/`viewport_height`.
///
/// Containers must not hold a borrow of their listener registry while invoking listeners: a
/// listener may add or remove listeners.
pub trait ScrollContainer {
    fn scroll_offset(&self) -> u64;

    fn viewport_height(&self) -> u32;

    /// Largest offset the container allows. Used only by [`ScrollPolicy::MinDelta`].
    fn max_scroll_offset(&self) -> u64 {
        u64::MAX
    }

    fn add_scroll_listener(&self, listener: Rc<dyn Fn()>) -> ListenerId;

    /// Returns `false` if `id` was not registered.
    fn remove_scroll_listener(&self, id: ListenerId) -> bool;
}

/// How scroll notifications are turned into published offsets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollPolicy {
    /// Publish every notification.
    #[default]
    Every,
    /// Drop notifications that move less than `n` units from the last published offset.
    ///
    /// Reaching offset 0, reaching the container's max offset, or a viewport change is always
    /// published.
    MinDelta(u64),
}

/// A scoped scroll subscription.
///
/// The listener is removed from the container when this guard is dropped (or released
/// explicitly). Release happens at most once; if the container is already gone there is
/// nothing to release.
pub struct ScrollSubscription {
    id: ListenerId,
    release: Option<Box<dyn FnOnce(ListenerId)>>,
}

impl ScrollSubscription {
    pub fn new<C: ScrollContainer + 'static>(container: &Rc<C>, listener: Rc<dyn Fn()>) -> Self {
        let id = container.add_scroll_listener(listener);
        let weak: Weak<C> = Rc::downgrade(container);
        Self {
            id,
            release: Some(Box::new(move |id| {
                if let Some(container) = weak.upgrade() {
                    let removed = container.remove_scroll_listener(id);
                    if !removed {
                        wwarn!(id = id.0, "ScrollSubscription: listener already removed");
                    }
                }
            })),
        }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Releases the subscription now instead of at drop.
    pub fn release(&mut self) {
        if let Some(release) = self.release.take() {
            wtrace!(id = self.id.0, "ScrollSubscription::release");
            release(self.id);
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for ScrollSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollSubscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

struct Shared {
    offset: Cell<u64>,
    viewport_height: Cell<u32>,
    revision: Cell<u64>,
    policy: Cell<ScrollPolicy>,
    on_change: RefCell<Option<OnChangeCallback>>,
}

impl Shared {
    fn snapshot(&self) -> ScrollSnapshot {
        ScrollSnapshot {
            offset: self.offset.get(),
            viewport_height: self.viewport_height.get(),
        }
    }

    fn accepts(&self, offset: u64, viewport_height: u32, max_offset: u64) -> bool {
        match self.policy.get() {
            ScrollPolicy::Every => true,
            ScrollPolicy::MinDelta(min) => {
                viewport_height != self.viewport_height.get()
                    || offset == 0
                    || offset >= max_offset
                    || offset.abs_diff(self.offset.get()) >= min
            }
        }
    }

    /// Returns `true` when the state was published.
    fn publish(&self, offset: u64, viewport_height: u32, max_offset: u64) -> bool {
        if !self.accepts(offset, viewport_height, max_offset) {
            wtrace!(offset, prev = self.offset.get(), "scroll notification dropped by policy");
            return false;
        }
        self.offset.set(offset);
        self.viewport_height.set(viewport_height);
        self.revision.set(self.revision.get().wrapping_add(1));
        wtrace!(offset, viewport_height, revision = self.revision.get(), "scroll published");

        // Clone out first: the callback may replace itself.
        let cb = self.on_change.borrow().clone();
        if let Some(cb) = cb {
            cb(self.snapshot());
        }
        true
    }
}

/// Bridges host scroll notifications into a single current scroll offset.
///
/// The tracker holds at most one [`ScrollSubscription`]. Attaching to a container releases the
/// previous subscription first, and dropping the tracker releases it too, so listeners never
/// leak across mount/unmount cycles.
pub struct ScrollTracker {
    shared: Rc<Shared>,
    subscription: Option<ScrollSubscription>,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self {
            shared: Rc::new(Shared {
                offset: Cell::new(0),
                viewport_height: Cell::new(0),
                revision: Cell::new(0),
                policy: Cell::new(ScrollPolicy::Every),
                on_change: RefCell::new(None),
            }),
            subscription: None,
        }
    }

    pub fn with_initial_offset(self, offset: u64) -> Self {
        self.shared.offset.set(offset);
        self
    }

    pub fn with_viewport_height(self, viewport_height: u32) -> Self {
        self.shared.viewport_height.set(viewport_height);
        self
    }

    pub fn with_policy(self, policy: ScrollPolicy) -> Self {
        self.shared.policy.set(policy);
        self
    }

    pub fn set_policy(&mut self, policy: ScrollPolicy) {
        self.shared.policy.set(policy);
    }

    pub fn policy(&self) -> ScrollPolicy {
        self.shared.policy.get()
    }

    pub fn set_on_change(&mut self, on_change: Option<impl Fn(ScrollSnapshot) + 'static>) {
        *self.shared.on_change.borrow_mut() = on_change.map(|f| -> OnChangeCallback { Rc::new(f) });
    }

    /// Subscribes to `container`, replacing any previous subscription.
    ///
    /// The container's current offset and viewport are published immediately.
    pub fn attach<C: ScrollContainer + 'static>(&mut self, container: &Rc<C>) {
        self.detach();

        let weak: Weak<C> = Rc::downgrade(container);
        let shared = Rc::clone(&self.shared);
        let listener: Rc<dyn Fn()> = Rc::new(move || {
            // Container dropped while notifying: nothing to read.
            let Some(container) = weak.upgrade() else {
                return;
            };
            shared.publish(
                container.scroll_offset(),
                container.viewport_height(),
                container.max_scroll_offset(),
            );
        });

        let subscription = ScrollSubscription::new(container, listener);
        wdebug!(id = subscription.id().0, "ScrollTracker::attach");
        self.subscription = Some(subscription);

        self.force_publish(container.scroll_offset(), container.viewport_height());
    }

    /// Like [`Self::attach`], but a missing container is a no-op rather than an error.
    ///
    /// With `None`, any previous subscription is released and the current offset is kept.
    pub fn attach_optional<C: ScrollContainer + 'static>(&mut self, container: Option<&Rc<C>>) {
        match container {
            Some(container) => self.attach(container),
            None => {
                wdebug!("ScrollTracker::attach_optional: no container yet");
                self.detach();
            }
        }
    }

    /// Releases the current subscription. Returns `false` if there was none.
    pub fn detach(&mut self) -> bool {
        match self.subscription.take() {
            Some(mut subscription) => {
                wdebug!(id = subscription.id().0, "ScrollTracker::detach");
                subscription.release();
                true
            }
            None => false,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn subscription_id(&self) -> Option<ListenerId> {
        self.subscription.as_ref().map(ScrollSubscription::id)
    }

    pub fn scroll_offset(&self) -> u64 {
        self.shared.offset.get()
    }

    pub fn viewport_height(&self) -> u32 {
        self.shared.viewport_height.get()
    }

    /// Incremented on every published update. Hosts compare it to skip redundant renders.
    pub fn revision(&self) -> u64 {
        self.shared.revision.get()
    }

    /// Feeds a scroll offset directly (for hosts without a [`ScrollContainer`]).
    ///
    /// Subject to the tracker's [`ScrollPolicy`]. Returns `true` when published.
    pub fn on_scroll(&mut self, offset: u64) -> bool {
        self.shared
            .publish(offset, self.shared.viewport_height.get(), u64::MAX)
    }

    /// Applies a viewport resize. Always published.
    pub fn set_viewport_height(&mut self, viewport_height: u32) {
        if viewport_height == self.shared.viewport_height.get() {
            return;
        }
        self.force_publish(self.shared.offset.get(), viewport_height);
    }

    pub fn snapshot(&self) -> ScrollSnapshot {
        self.shared.snapshot()
    }

    /// Restores a snapshot, bypassing the policy.
    pub fn restore(&mut self, snapshot: ScrollSnapshot) {
        self.force_publish(snapshot.offset, snapshot.viewport_height);
    }

    fn force_publish(&self, offset: u64, viewport_height: u32) {
        let policy = self.shared.policy.replace(ScrollPolicy::Every);
        self.shared.publish(offset, viewport_height, u64::MAX);
        self.shared.policy.set(policy);
    }
}

impl fmt::Debug for ScrollTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollTracker")
            .field("offset", &self.shared.offset.get())
            .field("viewport_height", &self.shared.viewport_height.get())
            .field("revision", &self.shared.revision.get())
            .field("policy", &self.shared.policy.get())
            .field("subscription", &self.subscription)
            .finish_non_exhaustive()
    }
}
