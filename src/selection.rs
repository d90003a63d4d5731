//! Mutually exclusive option groups mirroring a viewer-owned mode.
//!
//! The viewer's mode field is the source of truth. A [`SelectionGroup`] only
//! projects it onto its options and writes back through [`SelectionGroup::select`],
//! i.e. when the user picks an option. A mode the group does not offer leaves
//! the group with nothing selected.

use std::cell::Cell;
use std::rc::Rc;
use tso_config::{SharedField, Subscription};

/// Display side of a radio group / menu with checkmarks.
pub trait SelectionView<M> {
    fn show_selected(&self, selected: Option<M>);
}

/// Headless selection model.
#[derive(Debug)]
pub struct SelectionState<M: Copy> {
    selected: Cell<Option<M>>,
}

impl<M: Copy> Default for SelectionState<M> {
    fn default() -> Self {
        Self {
            selected: Cell::new(None),
        }
    }
}

impl<M: Copy> SelectionState<M> {
    pub fn selected(&self) -> Option<M> {
        self.selected.get()
    }
}

impl<M: Copy> SelectionView<M> for SelectionState<M> {
    fn show_selected(&self, selected: Option<M>) {
        self.selected.set(selected);
    }
}

pub struct SelectionGroup<M, V> {
    field: SharedField<M>,
    options: Rc<[M]>,
    view: Rc<V>,
    subscription: Subscription,
}

impl<M, V> SelectionGroup<M, V>
where
    M: Copy + PartialEq + std::fmt::Debug + 'static,
    V: SelectionView<M> + 'static,
{
    /// Mirror `field` onto `options`. The current mode is read once for the
    /// initial display; nothing is written back.
    pub fn bind(field: SharedField<M>, options: &[M], view: Rc<V>) -> Self {
        let options: Rc<[M]> = Rc::from(options);
        view.show_selected(project(&options, field.get()));

        let display = Rc::clone(&view);
        let offered = Rc::clone(&options);
        let subscription = field.subscribe(move |change| {
            display.show_selected(project(&offered, change.value));
        });
        Self {
            field,
            options,
            view,
            subscription,
        }
    }

    /// The user picked `mode`. Picking the active mode, or a mode this group
    /// does not offer, does nothing. Returns whether the viewer's mode changed.
    pub fn select(&self, mode: M) -> bool {
        if !self.options.contains(&mode) {
            log::warn!("[selection] {:?} is not an option of this group", mode);
            return false;
        }
        let changed = self.field.set_from(mode, self.subscription.id());
        if changed {
            log::debug!("[selection] -> {:?}", mode);
            self.view.show_selected(Some(mode));
        }
        changed
    }

    pub fn selected(&self) -> Option<M> {
        project(&self.options, self.field.get())
    }

    pub fn options(&self) -> &[M] {
        &self.options
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}

#[inline]
fn project<M: Copy + PartialEq>(options: &[M], mode: M) -> Option<M> {
    options.contains(&mode).then_some(mode)
}
