//! Single-selection Chosen value list box.

use std::hash::Hash;
use std::sync::Arc;

use chosen_core::Signal;
use parking_lot::RwLock;

use crate::error::{ChosenError, Result};
use crate::event::ChangeEvent;
use crate::list_box::{ChosenListBox, ListItem, StandardListBox};
use crate::options::ChosenOptions;
use crate::value_list_box::{ValueListBox, ValueListDelegate};

/// A Chosen list box holding at most one selected value.
///
/// Wraps a [`ValueListBox`] with a single-selection model: the currently
/// selected value is kept alongside the accepted values list, pushed into the
/// widget after every structural change, and dropped automatically when the
/// value leaves the accepted set. User selection changes arrive through
/// [`on_change`](Self::on_change) and are announced on the
/// [`value_changed`](Self::value_changed) signal.
///
/// Deselection through the widget only happens when the options enable
/// `allow_single_deselect`.
pub struct ChosenValueListBox<T, K> {
    base: ValueListBox<T, K>,
    selected: Arc<RwLock<Option<T>>>,
    value_changed: Arc<Signal<Option<T>>>,
}

struct SingleDelegate<T, K> {
    key_provider: Arc<dyn Fn(&T) -> K + Send + Sync>,
    render: Arc<dyn Fn(&T) -> String + Send + Sync>,
    selected: Arc<RwLock<Option<T>>>,
    value_changed: Arc<Signal<Option<T>>>,
}

impl<T, K> ValueListDelegate<T> for SingleDelegate<T, K>
where
    T: Clone + Send + Sync + 'static,
    K: Eq + Hash + 'static,
{
    fn create_list_box(&self, options: ChosenOptions) -> Box<dyn ChosenListBox> {
        Box::new(StandardListBox::new(options))
    }

    fn render_item(&self, value: &T) -> ListItem {
        ListItem::new((self.render)(value))
    }

    fn value_selected(&mut self, value: &T) {
        *self.selected.write() = Some(value.clone());
        self.value_changed.emit(Some(value.clone()));
    }

    fn value_deselected(&mut self, value: &T) {
        let mut selected = self.selected.write();
        let key = (self.key_provider)(value);
        let matches = selected
            .as_ref()
            .is_some_and(|current| (self.key_provider)(current) == key);

        if matches {
            *selected = None;
            drop(selected);
            self.value_changed.emit(None);
        }
    }

    fn sync_selection(&mut self, values: &[T], list_box: &mut dyn ChosenListBox) {
        let mut selected = self.selected.write();
        let target_key = selected.as_ref().map(|value| (self.key_provider)(value));

        let mut found = false;
        for (index, value) in values.iter().enumerate() {
            let matches = target_key
                .as_ref()
                .is_some_and(|key| (self.key_provider)(value) == *key);
            list_box.set_item_selected(index, matches);
            if matches {
                found = true;
            }
        }

        // The selected value left the accepted set; drop it silently.
        if target_key.is_some() && !found {
            *selected = None;
        }
    }
}

impl<T, K> ChosenValueListBox<T, K>
where
    T: Clone + Send + Sync + 'static,
    K: Eq + Hash + 'static,
{
    /// Creates a single-select list box.
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
        let selected = Arc::new(RwLock::new(None));
        let value_changed = Arc::new(Signal::new());

        let delegate = SingleDelegate {
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

    /// The currently selected value, if any.
    pub fn value(&self) -> Option<T> {
        self.selected.read().clone()
    }

    /// Selects a value programmatically, or clears the selection with `None`.
    ///
    /// Returns [`ChosenError::NotAccepted`] when the value is not part of the
    /// accepted values list. Programmatic changes do not emit
    /// [`value_changed`](Self::value_changed).
    pub fn set_value(&mut self, value: Option<T>) -> Result<()> {
        if let Some(candidate) = &value {
            if !self.base.is_accepted(candidate) {
                return Err(ChosenError::NotAccepted);
            }
        }

        *self.selected.write() = value;
        self.base.sync_selection();

        Ok(())
    }

    /// Signal emitted when the user selects or deselects a value.
    ///
    /// Carries the new selection; `None` after a deselection.
    pub fn value_changed(&self) -> &Signal<Option<T>> {
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

    /// Removes a value. A selected value that is removed becomes deselected.
    /// See [`ValueListBox::remove_value`].
    pub fn remove_value(&mut self, value: &T) -> bool {
        self.base.remove_value(value)
    }

    /// Removes values with a single refresh. See [`ValueListBox::remove_values`].
    pub fn remove_values(&mut self, values_to_remove: &[T]) {
        self.base.remove_values(values_to_remove);
    }

    /// Replaces the accepted values list. The selection survives when its
    /// value is still accepted. See [`ValueListBox::set_acceptable_values`].
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

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;

    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Planet {
        id: u32,
        name: &'static str,
    }

    fn planet(id: u32, name: &'static str) -> Planet {
        Planet { id, name }
    }

    fn make_list_box(planets: Vec<Planet>) -> ChosenValueListBox<Planet, u32> {
        let mut list_box = ChosenValueListBox::new(
            |p: &Planet| p.name.to_string(),
            |p: &Planet| p.id,
            ChosenOptions::new(),
        );
        list_box.add_values(planets).unwrap();
        list_box
    }

    #[test]
    fn test_starts_unselected() {
        let list_box = make_list_box(vec![planet(1, "Mercury")]);
        assert_eq!(list_box.value(), None);
        assert!(list_box.list_box().selected_indices().is_empty());
    }

    #[test]
    fn test_user_selection_updates_value_and_emits() {
        let mut list_box = make_list_box(vec![planet(1, "Mercury"), planet(2, "Venus")]);

        let emissions = Arc::new(Mutex::new(Vec::new()));
        let emissions_clone = emissions.clone();
        list_box.value_changed().connect(move |value: &Option<Planet>| {
            emissions_clone.lock().push(value.clone());
        });

        list_box.on_change(&ChangeEvent::selection(1));

        assert_eq!(list_box.value(), Some(planet(2, "Venus")));
        assert_eq!(*emissions.lock(), vec![Some(planet(2, "Venus"))]);
    }

    #[test]
    fn test_user_deselection_clears_value() {
        let mut list_box = make_list_box(vec![planet(1, "Mercury"), planet(2, "Venus")]);
        list_box.set_value(Some(planet(2, "Venus"))).unwrap();

        let emissions = Arc::new(Mutex::new(Vec::new()));
        let emissions_clone = emissions.clone();
        list_box.value_changed().connect(move |value: &Option<Planet>| {
            emissions_clone.lock().push(value.clone());
        });

        list_box.on_change(&ChangeEvent::deselection(1));

        assert_eq!(list_box.value(), None);
        assert_eq!(*emissions.lock(), vec![None]);
    }

    #[test]
    fn test_deselection_of_other_value_is_ignored() {
        let mut list_box = make_list_box(vec![planet(1, "Mercury"), planet(2, "Venus")]);
        list_box.set_value(Some(planet(2, "Venus"))).unwrap();

        list_box.on_change(&ChangeEvent::deselection(0));

        assert_eq!(list_box.value(), Some(planet(2, "Venus")));
    }

    #[test]
    fn test_set_value_syncs_widget_position() {
        let mut list_box =
            make_list_box(vec![planet(1, "Mercury"), planet(2, "Venus"), planet(3, "Earth")]);

        list_box.set_value(Some(planet(3, "Earth"))).unwrap();
        assert_eq!(list_box.list_box().selected_indices(), vec![2]);

        list_box.set_value(Some(planet(1, "Mercury"))).unwrap();
        assert_eq!(list_box.list_box().selected_indices(), vec![0]);

        list_box.set_value(None).unwrap();
        assert!(list_box.list_box().selected_indices().is_empty());
    }

    #[test]
    fn test_set_value_rejects_unaccepted() {
        let mut list_box = make_list_box(vec![planet(1, "Mercury")]);

        let result = list_box.set_value(Some(planet(9, "Pluto")));

        assert_eq!(result, Err(ChosenError::NotAccepted));
        assert_eq!(list_box.value(), None);
    }

    #[test]
    fn test_removing_selected_value_deselects() {
        let mut list_box = make_list_box(vec![planet(1, "Mercury"), planet(2, "Venus")]);
        list_box.set_value(Some(planet(2, "Venus"))).unwrap();

        assert!(list_box.remove_value(&planet(2, "Venus")));

        assert_eq!(list_box.value(), None);
        assert!(list_box.list_box().selected_indices().is_empty());
    }

    #[test]
    fn test_selection_survives_unrelated_removal() {
        let mut list_box =
            make_list_box(vec![planet(1, "Mercury"), planet(2, "Venus"), planet(3, "Earth")]);
        list_box.set_value(Some(planet(3, "Earth"))).unwrap();

        // Earth shifts from position 2 to position 1.
        assert!(list_box.remove_value(&planet(1, "Mercury")));

        assert_eq!(list_box.value(), Some(planet(3, "Earth")));
        assert_eq!(list_box.list_box().selected_indices(), vec![1]);
    }

    #[test]
    fn test_set_acceptable_values_drops_missing_selection() {
        let mut list_box = make_list_box(vec![planet(1, "Mercury"), planet(2, "Venus")]);
        list_box.set_value(Some(planet(2, "Venus"))).unwrap();

        list_box
            .set_acceptable_values(vec![planet(1, "Mercury"), planet(3, "Earth")])
            .unwrap();

        assert_eq!(list_box.value(), None);
        assert!(list_box.list_box().selected_indices().is_empty());
    }

    #[test]
    fn test_set_acceptable_values_keeps_surviving_selection() {
        let mut list_box = make_list_box(vec![planet(1, "Mercury"), planet(2, "Venus")]);
        list_box.set_value(Some(planet(2, "Venus"))).unwrap();

        list_box
            .set_acceptable_values(vec![planet(2, "Venus"), planet(3, "Earth")])
            .unwrap();

        assert_eq!(list_box.value(), Some(planet(2, "Venus")));
        assert_eq!(list_box.list_box().selected_indices(), vec![0]);
    }
}
