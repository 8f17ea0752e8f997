//! Chosen-style value list box widgets.
//!
//! A value list box manages a typed collection of selectable values and keeps
//! it synchronized with a dropdown-style visual list widget. Value identity
//! is key-based: a key extractor injected at construction maps each value to
//! a unique key, and a key-to-position index keeps lookups and batch removals
//! cheap.
//!
//! The crate is layered the way the widgets compose:
//!
//! - [`ValueListBox`] - the generic adapter: values, index, and widget kept
//!   consistent across adds, removals, and wholesale replacement
//! - [`ValueListDelegate`] - the strategy supplying rendering, widget
//!   construction, and selection semantics
//! - [`ChosenListBox`] - the visual widget contract, with [`StandardListBox`]
//!   as the in-memory default implementation
//! - [`ChosenValueListBox`] / [`MultipleChosenValueListBox`] - ready-made
//!   single- and multiple-selection widgets over the adapter
//!
//! # Example
//!
//! ```
//! use chosen_widget::{ChosenOptions, ChosenValueListBox};
//!
//! #[derive(Clone)]
//! struct Fruit {
//!     id: u32,
//!     name: &'static str,
//! }
//!
//! fn main() -> chosen_widget::Result<()> {
//!     let mut fruits = ChosenValueListBox::new(
//!         |f: &Fruit| f.name.to_string(),
//!         |f: &Fruit| f.id,
//!         ChosenOptions::new().with_placeholder_text("Pick a fruit"),
//!     );
//!
//!     fruits.add_values(vec![
//!         Fruit { id: 1, name: "Apple" },
//!         Fruit { id: 2, name: "Banana" },
//!     ])?;
//!
//!     fruits.set_value(Some(Fruit { id: 2, name: "Banana" }))?;
//!     assert_eq!(fruits.value().map(|f| f.id), Some(2));
//!     Ok(())
//! }
//! ```

mod error;
mod event;
mod list_box;
mod multi;
mod options;
mod single;
mod value_list_box;

pub use chosen_core::{ConnectionId, Signal};
pub use error::{ChosenError, Result};
pub use event::ChangeEvent;
pub use list_box::{ChosenListBox, ListItem, StandardListBox};
pub use multi::MultipleChosenValueListBox;
pub use options::ChosenOptions;
pub use single::ChosenValueListBox;
pub use value_list_box::{ValueListBox, ValueListDelegate};
