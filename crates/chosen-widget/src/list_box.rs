//! The visual list box contract and an in-memory default implementation.
//!
//! [`ChosenListBox`] is the surface the value list adapter drives: it inserts
//! and removes items by position, pushes selection state, and triggers
//! refreshes. [`StandardListBox`] is the default implementation; it keeps the
//! item list, selection set, and widget state in memory and rebuilds its
//! visible results only when [`ChosenListBox::update`] is called, mirroring
//! the deferred-rebuild behavior of a rendered dropdown.

use std::collections::BTreeSet;

use chosen_core::Signal;

use crate::event::ChangeEvent;
use crate::options::ChosenOptions;

/// The rendering of a single value as a list box item.
///
/// Holds the display text and an optional style class the rendering backend
/// may attach to the item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    text: String,
    style_class: Option<String>,
}

impl ListItem {
    /// Creates a new item with the given display text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style_class: None,
        }
    }

    /// Creates a new item with text and a style class.
    pub fn with_style_class(text: impl Into<String>, style_class: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style_class: Some(style_class.into()),
        }
    }

    /// The item's display text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The item's style class, if any.
    pub fn style_class(&self) -> Option<&str> {
        self.style_class.as_deref()
    }
}

/// The visual list box driven by a value list adapter.
///
/// The adapter owns the list box exclusively while attached: no other code
/// may mutate the item list directly, or the adapter's key-to-position index
/// desynchronizes from the widget's actual items. Positions passed to the
/// mutating methods are always valid at the time of the call.
pub trait ChosenListBox: Send {
    /// Inserts an item at the given position, shifting later items up.
    fn insert_item(&mut self, index: usize, item: ListItem);

    /// Removes the item at the given position, shifting later items down.
    fn remove_item(&mut self, index: usize);

    /// Removes all items and clears the selection.
    ///
    /// Refreshes the visible results only when `update` is `true`; batch
    /// operations pass `false` and refresh once at the end.
    fn clear(&mut self, update: bool);

    /// Rebuilds the visible results from the current item list.
    fn update(&mut self);

    /// Number of items currently in the list box.
    fn item_count(&self) -> usize;

    /// Whether the list box accepts user interaction.
    fn is_enabled(&self) -> bool;

    /// Enables or disables user interaction.
    fn set_enabled(&mut self, enabled: bool);

    /// The list box's position in the tab order.
    fn tab_index(&self) -> i32;

    /// Sets the list box's position in the tab order.
    fn set_tab_index(&mut self, index: i32);

    /// Gives or removes keyboard focus.
    fn set_focus(&mut self, focused: bool);

    /// Marks the item at `index` as selected or deselected.
    ///
    /// This is the programmatic path used when pushing a selection model into
    /// the widget; it does not emit a change event.
    fn set_item_selected(&mut self, index: usize, selected: bool);

    /// Positions of the currently selected items, in ascending order.
    fn selected_indices(&self) -> Vec<usize>;

    /// The signal emitted on user-driven selection changes.
    fn change_event(&self) -> &Signal<ChangeEvent>;
}

/// In-memory Chosen list box.
///
/// Stands in for the rendered dropdown: items, selection, and focus state are
/// tracked directly, and the visible results list is rebuilt from the items
/// only on [`update`](ChosenListBox::update). User interaction is modeled by
/// [`toggle_result`](StandardListBox::toggle_result), which emits a
/// [`ChangeEvent`] on the change signal the way a click in the dropdown would.
pub struct StandardListBox {
    options: ChosenOptions,
    multiple: bool,
    items: Vec<ListItem>,
    selected: BTreeSet<usize>,
    results: Vec<String>,
    enabled: bool,
    tab_index: i32,
    focused: bool,
    change_event: Signal<ChangeEvent>,
}

impl StandardListBox {
    /// Creates a single-select list box with the given options.
    pub fn new(options: ChosenOptions) -> Self {
        Self::with_mode(options, false)
    }

    /// Creates a multiple-select list box with the given options.
    pub fn multiple(options: ChosenOptions) -> Self {
        Self::with_mode(options, true)
    }

    fn with_mode(options: ChosenOptions, multiple: bool) -> Self {
        Self {
            options,
            multiple,
            items: Vec::new(),
            selected: BTreeSet::new(),
            results: Vec::new(),
            enabled: true,
            tab_index: 0,
            focused: false,
            change_event: Signal::new(),
        }
    }

    /// Whether this list box supports multiple selection.
    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    /// The options this list box was created with.
    pub fn options(&self) -> &ChosenOptions {
        &self.options
    }

    /// The current item list.
    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    /// The visible results, as of the last refresh.
    pub fn results(&self) -> &[String] {
        &self.results
    }

    /// Whether the list box currently has keyboard focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Models a user activating the item at `index` in the dropdown.
    ///
    /// Selecting an already-selected item deselects it when the mode allows
    /// (always in multiple mode, gated on `allow_single_deselect` in single
    /// mode). In single mode a new selection replaces the previous one, and
    /// only the new selection is reported. Emits a [`ChangeEvent`] on the
    /// change signal for every effective change; disabled list boxes and
    /// out-of-range positions are ignored.
    pub fn toggle_result(&mut self, index: usize) {
        if !self.enabled || index >= self.items.len() {
            return;
        }

        if self.selected.contains(&index) {
            let deselectable = self.multiple || self.options.allow_single_deselect();
            if !deselectable {
                return;
            }
            self.selected.remove(&index);
            self.change_event.emit(ChangeEvent::deselection(index));
        } else {
            if self.multiple {
                if let Some(max) = self.options.max_selected_options() {
                    if self.selected.len() >= max {
                        tracing::debug!(
                            target: "chosen_widget::list_box",
                            max,
                            "selection limit reached, ignoring selection"
                        );
                        return;
                    }
                }
            } else {
                self.selected.clear();
            }
            self.selected.insert(index);
            self.change_event.emit(ChangeEvent::selection(index));
        }
    }
}

impl ChosenListBox for StandardListBox {
    fn insert_item(&mut self, index: usize, item: ListItem) {
        self.items.insert(index, item);
        self.selected = self
            .selected
            .iter()
            .map(|&s| if s >= index { s + 1 } else { s })
            .collect();
    }

    fn remove_item(&mut self, index: usize) {
        self.items.remove(index);
        self.selected = self
            .selected
            .iter()
            .filter(|&&s| s != index)
            .map(|&s| if s > index { s - 1 } else { s })
            .collect();
    }

    fn clear(&mut self, update: bool) {
        self.items.clear();
        self.selected.clear();
        if update {
            self.update();
        }
    }

    fn update(&mut self) {
        self.results = self.items.iter().map(|item| item.text().to_owned()).collect();
    }

    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn tab_index(&self) -> i32 {
        self.tab_index
    }

    fn set_tab_index(&mut self, index: i32) {
        self.tab_index = index;
    }

    fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn set_item_selected(&mut self, index: usize, selected: bool) {
        if index >= self.items.len() {
            return;
        }
        if selected {
            self.selected.insert(index);
        } else {
            self.selected.remove(&index);
        }
    }

    fn selected_indices(&self) -> Vec<usize> {
        self.selected.iter().copied().collect()
    }

    fn change_event(&self) -> &Signal<ChangeEvent> {
        &self.change_event
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;

    fn collect_events(list_box: &StandardListBox) -> Arc<Mutex<Vec<ChangeEvent>>> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let events_clone = events.clone();
        list_box.change_event().connect(move |&event| {
            events_clone.lock().push(event);
        });
        events
    }

    #[test]
    fn test_results_rebuilt_only_on_update() {
        let mut list_box = StandardListBox::new(ChosenOptions::new());
        list_box.insert_item(0, ListItem::new("Apple"));
        list_box.insert_item(1, ListItem::new("Banana"));

        assert_eq!(list_box.item_count(), 2);
        assert!(list_box.results().is_empty());

        list_box.update();
        assert_eq!(list_box.results(), ["Apple", "Banana"]);

        list_box.remove_item(0);
        assert_eq!(list_box.results(), ["Apple", "Banana"]);
        list_box.update();
        assert_eq!(list_box.results(), ["Banana"]);
    }

    #[test]
    fn test_clear_without_update_keeps_stale_results() {
        let mut list_box = StandardListBox::new(ChosenOptions::new());
        list_box.insert_item(0, ListItem::new("Apple"));
        list_box.update();

        list_box.clear(false);
        assert_eq!(list_box.item_count(), 0);
        assert_eq!(list_box.results(), ["Apple"]);

        list_box.update();
        assert!(list_box.results().is_empty());
    }

    #[test]
    fn test_selection_shifts_on_insert_and_remove() {
        let mut list_box = StandardListBox::multiple(ChosenOptions::new());
        for (i, text) in ["a", "b", "c"].iter().enumerate() {
            list_box.insert_item(i, ListItem::new(*text));
        }
        list_box.set_item_selected(1, true);
        list_box.set_item_selected(2, true);

        list_box.insert_item(0, ListItem::new("front"));
        assert_eq!(list_box.selected_indices(), vec![2, 3]);

        list_box.remove_item(2);
        assert_eq!(list_box.selected_indices(), vec![2]);
    }

    #[test]
    fn test_single_mode_toggle_replaces_selection() {
        let mut list_box = StandardListBox::new(ChosenOptions::new());
        for (i, text) in ["a", "b"].iter().enumerate() {
            list_box.insert_item(i, ListItem::new(*text));
        }
        let events = collect_events(&list_box);

        list_box.toggle_result(0);
        list_box.toggle_result(1);

        assert_eq!(list_box.selected_indices(), vec![1]);
        assert_eq!(
            *events.lock(),
            vec![ChangeEvent::selection(0), ChangeEvent::selection(1)]
        );
    }

    #[test]
    fn test_single_mode_deselect_requires_option() {
        let mut list_box = StandardListBox::new(ChosenOptions::new());
        list_box.insert_item(0, ListItem::new("a"));
        list_box.toggle_result(0);
        list_box.toggle_result(0);
        assert_eq!(list_box.selected_indices(), vec![0]);

        let mut list_box =
            StandardListBox::new(ChosenOptions::new().with_allow_single_deselect(true));
        list_box.insert_item(0, ListItem::new("a"));
        let events = collect_events(&list_box);
        list_box.toggle_result(0);
        list_box.toggle_result(0);
        assert!(list_box.selected_indices().is_empty());
        assert_eq!(
            *events.lock(),
            vec![ChangeEvent::selection(0), ChangeEvent::deselection(0)]
        );
    }

    #[test]
    fn test_multiple_mode_respects_max_selected() {
        let mut list_box =
            StandardListBox::multiple(ChosenOptions::new().with_max_selected_options(2));
        for (i, text) in ["a", "b", "c"].iter().enumerate() {
            list_box.insert_item(i, ListItem::new(*text));
        }

        list_box.toggle_result(0);
        list_box.toggle_result(1);
        list_box.toggle_result(2); // Over the limit, ignored
        assert_eq!(list_box.selected_indices(), vec![0, 1]);

        list_box.toggle_result(0); // Deselect frees a slot
        list_box.toggle_result(2);
        assert_eq!(list_box.selected_indices(), vec![1, 2]);
    }

    #[test]
    fn test_disabled_list_box_ignores_interaction() {
        let mut list_box = StandardListBox::new(ChosenOptions::new());
        list_box.insert_item(0, ListItem::new("a"));
        list_box.set_enabled(false);

        let events = collect_events(&list_box);
        list_box.toggle_result(0);

        assert!(list_box.selected_indices().is_empty());
        assert!(events.lock().is_empty());
    }

    #[test]
    fn test_widget_state_passthrough() {
        let mut list_box = StandardListBox::new(ChosenOptions::new());
        assert!(list_box.is_enabled());
        assert_eq!(list_box.tab_index(), 0);
        assert!(!list_box.is_focused());

        list_box.set_tab_index(3);
        list_box.set_focus(true);
        assert_eq!(list_box.tab_index(), 3);
        assert!(list_box.is_focused());
    }
}
