//! Observable values and change channels.
//!
//! A [`Field`] is a single value with a change channel. Writers that are also
//! listeners pass their own [`SubscriberId`] to [`Field::set_from`]; delivery
//! then skips that listener, so a change never echoes back to the side that
//! produced it. Everything here is single-threaded (`Rc`/`Cell`), matching the
//! UI thread that owns the config records.

use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

/// Identifies one listener on one channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Listener<E> = Rc<dyn Fn(&E)>;

struct Listeners<E> {
    next_id: Cell<u64>,
    slots: RefCell<SmallVec<[(SubscriberId, Listener<E>); 4]>>,
}

/// Synchronous notification channel.
///
/// Listeners run in subscription order on the calling thread before
/// [`Signal::emit`] returns. The listener list is snapshotted before delivery,
/// so listeners may subscribe, unsubscribe or write other fields while a
/// notification is in flight.
pub struct Signal<E> {
    listeners: Rc<Listeners<E>>,
}

impl<E: 'static> Signal<E> {
    pub fn new() -> Self {
        Self {
            listeners: Rc::new(Listeners {
                next_id: Cell::new(1),
                slots: RefCell::new(SmallVec::new()),
            }),
        }
    }

    /// Register a listener. It stays attached until the returned guard drops.
    #[must_use = "dropping the subscription detaches the listener"]
    pub fn subscribe(&self, listener: impl Fn(&E) + 'static) -> Subscription {
        let id = SubscriberId(self.listeners.next_id.get());
        self.listeners.next_id.set(id.0 + 1);
        self.listeners
            .slots
            .borrow_mut()
            .push((id, Rc::new(listener)));

        let weak: Weak<Listeners<E>> = Rc::downgrade(&self.listeners);
        Subscription {
            id,
            detach: Some(Box::new(move || {
                if let Some(listeners) = weak.upgrade() {
                    listeners.slots.borrow_mut().retain(|(sid, _)| *sid != id);
                }
            })),
        }
    }

    pub fn emit(&self, event: &E) {
        self.emit_from(event, None);
    }

    /// Deliver `event` to every listener except `origin`.
    pub fn emit_from(&self, event: &E, origin: Option<SubscriberId>) {
        let targets: SmallVec<[Listener<E>; 4]> = self
            .listeners
            .slots
            .borrow()
            .iter()
            .filter(|(id, _)| Some(*id) != origin)
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in targets {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.slots.borrow().len()
    }
}

impl<E: 'static> Default for Signal<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Signal<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("listeners", &self.listeners.slots.borrow().len())
            .finish()
    }
}

/// RAII guard for a listener registered on a [`Signal`] or [`Field`].
pub struct Subscription {
    id: SubscriberId,
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// The id to pass to [`Field::set_from`] to keep writes from echoing here.
    pub fn id(&self) -> SubscriberId {
        self.id
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Subscription").field(&self.id).finish()
    }
}

/// Payload delivered on a field's change channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Change<T> {
    pub value: T,
    pub previous: T,
    /// Listener that wrote the value, if the writer is itself subscribed.
    pub origin: Option<SubscriberId>,
}

/// Field handle shared between a binding and the other readers of a record.
pub type SharedField<T> = Rc<Field<T>>;

/// A value with a change channel that fires only on distinct writes.
pub struct Field<T> {
    value: Cell<T>,
    changed: Signal<Change<T>>,
}

impl<T: Copy + PartialEq + 'static> Field<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Cell::new(value),
            changed: Signal::new(),
        }
    }

    pub fn shared(value: T) -> SharedField<T> {
        Rc::new(Self::new(value))
    }

    #[inline]
    pub fn get(&self) -> T {
        self.value.get()
    }

    /// Store `value` and notify every listener. Returns `false` (and notifies
    /// nobody) when the value is unchanged. NaN counts as unchanged over NaN.
    pub fn set(&self, value: T) -> bool {
        self.write(value, None)
    }

    /// Like [`Field::set`], but the listener `origin` is not notified.
    pub fn set_from(&self, value: T, origin: SubscriberId) -> bool {
        self.write(value, Some(origin))
    }

    fn write(&self, value: T, origin: Option<SubscriberId>) -> bool {
        let previous = self.value.get();
        if same_value(&previous, &value) {
            return false;
        }
        self.value.set(value);
        self.changed.emit_from(
            &Change {
                value,
                previous,
                origin,
            },
            origin,
        );
        true
    }

    #[must_use = "dropping the subscription detaches the listener"]
    pub fn subscribe(&self, listener: impl Fn(&Change<T>) + 'static) -> Subscription {
        self.changed.subscribe(listener)
    }

    pub fn listener_count(&self) -> usize {
        self.changed.listener_count()
    }
}

impl<T: Copy + PartialEq + Default + 'static> Default for Field<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Field").field(&self.value.get()).finish()
    }
}

// `==`, except that two values which are each unequal to themselves (NaN)
// also count as the same.
#[inline]
#[allow(clippy::eq_op)]
fn same_value<T: PartialEq>(a: &T, b: &T) -> bool {
    a == b || (a != a && b != b)
}
