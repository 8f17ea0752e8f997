//! Generic value list adapter over a Chosen list box.
//!
//! [`ValueListBox`] owns an ordered list of typed values and keeps it
//! synchronized with the item list of a [`ChosenListBox`]. Value identity is
//! key-based: a key extractor injected at construction maps each value to a
//! key, and a key-to-position index enforces uniqueness and makes removals
//! cheap. Rendering and selection semantics are supplied by a
//! [`ValueListDelegate`], so the adapter stays generic over the value type
//! and presentation strategy.
//!
//! # Example
//!
//! ```
//! use chosen_widget::{ChosenOptions, ListItem, ValueListBox, ValueListDelegate};
//!
//! struct NameDelegate;
//!
//! impl ValueListDelegate<String> for NameDelegate {
//!     fn render_item(&self, value: &String) -> ListItem {
//!         ListItem::new(value.clone())
//!     }
//!     fn value_selected(&mut self, value: &String) {
//!         println!("selected {}", value);
//!     }
//!     fn value_deselected(&mut self, value: &String) {
//!         println!("deselected {}", value);
//!     }
//! }
//!
//! # fn main() -> chosen_widget::Result<()> {
//! let mut names = ValueListBox::new(
//!     |name: &String| name.clone(),
//!     ChosenOptions::new(),
//!     Box::new(NameDelegate),
//! );
//! names.add_values(vec!["Ada".to_string(), "Grace".to_string()])?;
//! assert!(names.is_accepted(&"Ada".to_string()));
//! # Ok(())
//! # }
//! ```

use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;
use std::sync::Arc;

use crate::error::{ChosenError, Result};
use crate::event::ChangeEvent;
use crate::list_box::{ChosenListBox, ListItem, StandardListBox};
use crate::options::ChosenOptions;

/// Presentation and selection strategy for a [`ValueListBox`].
///
/// The delegate supplies everything the adapter is generic over: how a value
/// renders as an item, which widget implementation to drive, what to do when
/// the user selects or deselects a value, and how to push the current
/// selection model back into the widget after a structural change.
pub trait ValueListDelegate<T>: Send {
    /// Creates the list box the adapter will drive, with the caller's options
    /// passed through unmodified.
    ///
    /// The default builds a single-select [`StandardListBox`].
    fn create_list_box(&self, options: ChosenOptions) -> Box<dyn ChosenListBox> {
        Box::new(StandardListBox::new(options))
    }

    /// Renders a value as a list box item.
    fn render_item(&self, value: &T) -> ListItem;

    /// Called when the user selects a value.
    fn value_selected(&mut self, value: &T);

    /// Called when the user deselects a value.
    fn value_deselected(&mut self, value: &T);

    /// Pushes the currently selected value(s) into the widget after a
    /// structural change.
    ///
    /// `values` is the accepted values list in display order; positions in
    /// the widget correspond one-to-one. The default does nothing, which
    /// suits delegates with no selection model of their own.
    fn sync_selection(&mut self, values: &[T], list_box: &mut dyn ChosenListBox) {
        let _ = (values, list_box);
    }
}

/// A list box over typed values with key-based identity.
///
/// The adapter owns the values, the key-to-position index, and the visual
/// list box. Every public operation leaves the three consistent: for each
/// accepted value, the index maps its key to its current position, and the
/// widget holds one item per value at the same position.
///
/// The widget's change signal delivers `(position, is_selection)` events for
/// user interaction; the host forwards them to [`on_change`](Self::on_change),
/// which resolves the position to a value and dispatches to the delegate.
pub struct ValueListBox<T, K> {
    key_provider: Arc<dyn Fn(&T) -> K + Send + Sync>,
    values: Vec<T>,
    key_to_index: HashMap<K, usize>,
    list_box: Box<dyn ChosenListBox>,
    delegate: Box<dyn ValueListDelegate<T>>,
}

impl<T, K> ValueListBox<T, K>
where
    K: Eq + Hash,
{
    /// Creates an adapter with the given key extractor, options, and delegate.
    ///
    /// The key extractor must be total and stable: the same value always
    /// yields the same key. The options are passed through unmodified to the
    /// delegate's widget constructor.
    pub fn new<P>(
        key_provider: P,
        options: ChosenOptions,
        delegate: Box<dyn ValueListDelegate<T>>,
    ) -> Self
    where
        P: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self::with_provider(Arc::new(key_provider), options, delegate)
    }

    /// Like [`new`](Self::new), but sharing an already-wrapped key extractor.
    pub fn with_provider(
        key_provider: Arc<dyn Fn(&T) -> K + Send + Sync>,
        options: ChosenOptions,
        delegate: Box<dyn ValueListDelegate<T>>,
    ) -> Self {
        let list_box = delegate.create_list_box(options);
        Self {
            key_provider,
            values: Vec::new(),
            key_to_index: HashMap::new(),
            list_box,
            delegate,
        }
    }

    /// Adds a value to the end of the accepted values list and refreshes the
    /// widget.
    ///
    /// Returns [`ChosenError::DuplicateKey`] without mutating anything if a
    /// value with the same key is already accepted. Use
    /// [`add_values`](Self::add_values) to add several values with a single
    /// refresh.
    pub fn add_value(&mut self, value: T) -> Result<()> {
        self.do_add_value(value)?;
        self.list_box.update();
        Ok(())
    }

    /// Adds values in input order, refreshing the widget exactly once at the
    /// end.
    ///
    /// Stops at the first duplicate key: values added before it remain
    /// accepted, no refresh is performed, and the error is returned.
    pub fn add_values(&mut self, values: impl IntoIterator<Item = T>) -> Result<()> {
        for value in values {
            self.do_add_value(value)?;
        }
        self.list_box.update();
        Ok(())
    }

    /// Whether a value with this value's key is currently accepted.
    pub fn is_accepted(&self, value: &T) -> bool {
        self.key_to_index.contains_key(&(self.key_provider)(value))
    }

    /// Removes the value with this value's key from the accepted values list.
    ///
    /// Returns `false` without touching any state when the key is not
    /// accepted. Otherwise the value leaves the sequence and the widget, the
    /// key-to-position index is rebuilt (every position after the removed one
    /// shifts down), the selection is re-synced, and the widget refreshes
    /// once. Use [`remove_values`](Self::remove_values) to remove several
    /// values without rebuilding the index per item.
    pub fn remove_value(&mut self, value: &T) -> bool {
        let key = (self.key_provider)(value);

        let Some(index) = self.key_to_index.remove(&key) else {
            return false;
        };

        self.values.remove(index);
        self.list_box.remove_item(index);

        self.update_after_removal();

        true
    }

    /// Removes every given value that is currently accepted, then rebuilds
    /// the index and refreshes the widget exactly once.
    ///
    /// Values whose key is not accepted are ignored, as are duplicate
    /// entries. When nothing resolves to a position this is a complete no-op:
    /// no index rebuild and no refresh.
    pub fn remove_values(&mut self, values_to_remove: &[T]) {
        // Positions must be removed in decreasing order; otherwise every
        // removal invalidates the remaining positions and the index would
        // need an O(n) repair per item.
        let mut indices_to_remove = BTreeSet::new();

        for value in values_to_remove {
            if let Some(&index) = self.key_to_index.get(&(self.key_provider)(value)) {
                indices_to_remove.insert(index);
            }
        }

        if indices_to_remove.is_empty() {
            return;
        }

        tracing::trace!(
            target: "chosen_widget::value_list_box",
            count = indices_to_remove.len(),
            "removing values in descending position order"
        );

        for &index in indices_to_remove.iter().rev() {
            self.values.remove(index);
            self.list_box.remove_item(index);
        }

        self.update_after_removal();
    }

    /// Replaces the entire accepted values list.
    ///
    /// Clears the sequence, the index, and the widget's items (without a
    /// per-item refresh), re-adds the given values in order, re-syncs the
    /// selection, and refreshes the widget once. Previously selected values
    /// that are no longer accepted end up deselected; the rest keep their
    /// selection through the delegate's re-sync.
    pub fn set_acceptable_values(&mut self, values: impl IntoIterator<Item = T>) -> Result<()> {
        self.values.clear();
        self.key_to_index.clear();
        self.list_box.clear(false);

        for value in values {
            self.do_add_value(value)?;
        }

        self.sync_selection();

        Ok(())
    }

    /// Handles a selection change event from the widget.
    ///
    /// Resolves the event's position to a value and dispatches to the
    /// delegate's [`value_selected`](ValueListDelegate::value_selected) or
    /// [`value_deselected`](ValueListDelegate::value_deselected) hook. The
    /// adapter's own state is never mutated here. The host is responsible for
    /// forwarding events from the widget's change signal to this method.
    pub fn on_change(&mut self, event: &ChangeEvent) {
        match self.values.get(event.index) {
            Some(value) => {
                if event.selection {
                    self.delegate.value_selected(value);
                } else {
                    self.delegate.value_deselected(value);
                }
            }
            None => {
                tracing::warn!(
                    target: "chosen_widget::value_list_box",
                    index = event.index,
                    value_count = self.values.len(),
                    "change event position out of range, ignoring"
                );
            }
        }
    }

    /// Re-syncs the delegate's selection model into the widget and refreshes.
    pub fn sync_selection(&mut self) {
        self.delegate.sync_selection(&self.values, self.list_box.as_mut());
        self.list_box.update();
    }

    /// The accepted values, in display order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// The visual list box driven by this adapter.
    ///
    /// Mutating the widget's item list behind the adapter's back
    /// desynchronizes the key-to-position index; the widget is exposed
    /// read-only for that reason.
    pub fn list_box(&self) -> &dyn ChosenListBox {
        self.list_box.as_ref()
    }

    /// Whether the widget accepts user interaction.
    pub fn is_enabled(&self) -> bool {
        self.list_box.is_enabled()
    }

    /// Enables or disables the widget.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.list_box.set_enabled(enabled);
    }

    /// The widget's position in the tab order.
    pub fn tab_index(&self) -> i32 {
        self.list_box.tab_index()
    }

    /// Sets the widget's position in the tab order.
    pub fn set_tab_index(&mut self, index: i32) {
        self.list_box.set_tab_index(index);
    }

    /// Gives or removes keyboard focus.
    pub fn set_focus(&mut self, focused: bool) {
        self.list_box.set_focus(focused);
    }

    fn do_add_value(&mut self, value: T) -> Result<()> {
        let key = (self.key_provider)(&value);

        if let Some(&existing_index) = self.key_to_index.get(&key) {
            return Err(ChosenError::duplicate_key(existing_index));
        }

        let index = self.values.len();
        let item = self.delegate.render_item(&value);

        self.key_to_index.insert(key, index);
        self.values.push(value);
        self.list_box.insert_item(index, item);

        Ok(())
    }

    fn update_after_removal(&mut self) {
        self.rebuild_index();
        self.sync_selection();
    }

    fn rebuild_index(&mut self) {
        self.key_to_index.clear();

        for (index, value) in self.values.iter().enumerate() {
            self.key_to_index.insert((self.key_provider)(value), index);
        }
    }
}
