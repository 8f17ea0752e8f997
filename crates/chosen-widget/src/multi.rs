//! Multiple-selection Chosen value list box.

use std::hash::Hash;
use std::sync::Arc;

use chosen_core::Signal;
use parking_lot::RwLock;

use crate::error::{ChosenError, Result};
use crate::event::ChangeEvent;
use crate::list_box::{ChosenListBox, ListItem, StandardListBox};
use crate::options::ChosenOptions;
use crate::value_list_box::{ValueListBox, ValueListDelegate};

/// A Chosen list box holding any number of selected values.
///
/// Wraps a [`ValueListBox`] with a multiple-selection model: selected values
/// are kept in selection order, pushed into the widget after every structural
/// change, and values that leave the accepted set drop out of the selection.
/// User selection changes arrive through [`on_change`](Self::on_change) and
/// are announced on the [`value_changed`](Self::value_changed) signal with
/// the full selection.
pub struct MultipleChosenValueListBox<T, K> {
    base: ValueListBox<T, K>,
    selected: Arc<RwLock<Vec<T>>>,
    value_changed: Arc<Signal<Vec<T>>>,
}

struct MultiDelegate<T, K> {
    key_provider: Arc<dyn Fn(&T) -> K + Send + Sync>,
    render: Arc<dyn Fn(&T) -> String + Send + Sync>,
    selected: Arc<RwLock<Vec<T>>>,
    value_changed: Arc<Signal<Vec<T>>>,
}

impl<T, K> MultiDelegate<T, K> {
    fn key_of(&self, value: &T) -> K {
        (self.key_provider)(value)
    }
}

impl<T, K> ValueListDelegate<T> for MultiDelegate<T, K>
where
    T: Clone + Send + Sync + 'static,
    K: Eq + Hash + 'static,
{
    fn create_list_box(&self, options: ChosenOptions) -> Box<dyn ChosenListBox> {
        Box::new(StandardListBox::multiple(options))
    }

    fn render_item(&self, value: &T) -> ListItem {
        ListItem::new((self.render)(value))
    }

    fn value_selected(&mut self, value: &T) {
        let mut selected = self.selected.write();
        let key = self.key_of(value);

        if selected.iter().any(|current| self.key_of(current) == key) {
            return;
        }

        selected.push(value.clone());
        let snapshot = selected.clone();
        drop(selected);
        self.value_changed.emit(snapshot);
    }

    fn value_deselected(&mut self, value: &T) {
        let mut selected = self.selected.write();
        let key = self.key_of(value);
        let before = selected.len();
        selected.retain(|current| self.key_of(current) != key);

        if selected.len() != before {
            let snapshot = selected.clone();
            drop(selected);
            self.value_changed.emit(snapshot);
        }
    }

    fn sync_selection(&mut self, values: &[T], list_box: &mut dyn ChosenListBox) {
        let mut selected = self.selected.write();

        // Selected values that left the accepted set drop out silently.
        selected.retain(|current| {
            values.iter().any(|value| self.key_of(value) == self.key_of(current))
        });

        let selected_keys: Vec<K> = selected.iter().map(|current| self.key_of(current)).collect();
        for (index, value) in values.iter().enumerate() {
            let key = self.key_of(value);
            list_box.set_item_selected(index, selected_keys.contains(&key));
        }
    }
}

impl<T, K> MultipleChosenValueListBox<T, K>
where
    T: Clone + Send + Sync + 'static,
    K: Eq + Hash + 'static,
{
    /// Creates a multiple-select list box.
    ///
    /// `render` turns a value into its display text and `key_provider`
    /// extracts the identity key; both must be total and stable. The options
    /// are handed to the widget unmodified.
    pub fn new<R, P>(render: R, key_provider: P, options: ChosenOptions) -> Self
    where
        R: Fn(&T) -> String + Send + Sync + 'static,
        P: Fn(&T) -> K + Send + Sync + 'static,
    {
        let key_provider: Arc<dyn Fn(&T) -> K + Send + Sync> = Arc::new(key_provider);
        let selected = Arc::new(RwLock::new(Vec::new()));
        let value_changed = Arc::new(Signal::new());

        let delegate = MultiDelegate {
            key_provider: key_provider.clone(),
            render: Arc::new(render),
            selected: selected.clone(),
            value_changed: value_changed.clone(),
        };

        Self {
            base: ValueListBox::with_provider(key_provider, options, Box::new(delegate)),
            selected,
            value_changed,
        }
    }

    /// The currently selected values, in selection order.
    pub fn value(&self) -> Vec<T> {
        self.selected.read().clone()
    }

    /// Replaces the selection programmatically.
    ///
    /// Returns [`ChosenError::NotAccepted`] when any value is not part of the
    /// accepted values list; the selection is left untouched in that case.
    /// Programmatic changes do not emit [`value_changed`](Self::value_changed).
    pub fn set_value(&mut self, values: Vec<T>) -> Result<()> {
        for value in &values {
            if !self.base.is_accepted(value) {
                return Err(ChosenError::NotAccepted);
            }
        }

        *self.selected.write() = values;
        self.base.sync_selection();

        Ok(())
    }

    /// Signal emitted when the user selects or deselects a value.
    ///
    /// Carries the full selection after the change.
    pub fn value_changed(&self) -> &Signal<Vec<T>> {
        &self.value_changed
    }

    /// Handles a selection change event from the widget.
    pub fn on_change(&mut self, event: &ChangeEvent) {
        self.base.on_change(event);
    }

    /// Adds a value to the accepted values list. See [`ValueListBox::add_value`].
    pub fn add_value(&mut self, value: T) -> Result<()> {
        self.base.add_value(value)
    }

    /// Adds values with a single refresh. See [`ValueListBox::add_values`].
    pub fn add_values(&mut self, values: impl IntoIterator<Item = T>) -> Result<()> {
        self.base.add_values(values)
    }

    /// Whether a value with this value's key is accepted.
    pub fn is_accepted(&self, value: &T) -> bool {
        self.base.is_accepted(value)
    }

    /// Removes a value. A selected value that is removed drops out of the
    /// selection. See [`ValueListBox::remove_value`].
    pub fn remove_value(&mut self, value: &T) -> bool {
        self.base.remove_value(value)
    }

    /// Removes values with a single refresh. See [`ValueListBox::remove_values`].
    pub fn remove_values(&mut self, values_to_remove: &[T]) {
        self.base.remove_values(values_to_remove);
    }

    /// Replaces the accepted values list. Selected values that are still
    /// accepted keep their selection. See [`ValueListBox::set_acceptable_values`].
    pub fn set_acceptable_values(&mut self, values: impl IntoIterator<Item = T>) -> Result<()> {
        self.base.set_acceptable_values(values)
    }

    /// The accepted values, in display order.
    pub fn values(&self) -> &[T] {
        self.base.values()
    }

    /// The visual list box driven by this widget.
    pub fn list_box(&self) -> &dyn ChosenListBox {
        self.base.list_box()
    }

    /// Whether the widget accepts user interaction.
    pub fn is_enabled(&self) -> bool {
        self.base.is_enabled()
    }

    /// Enables or disables the widget.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.base.set_enabled(enabled);
    }

    /// The widget's position in the tab order.
    pub fn tab_index(&self) -> i32 {
        self.base.tab_index()
    }

    /// Sets the widget's position in the tab order.
    pub fn set_tab_index(&mut self, index: i32) {
        self.base.set_tab_index(index);
    }

    /// Gives or removes keyboard focus.
    pub fn set_focus(&mut self, focused: bool) {
        self.base.set_focus(focused);
    }
}
