//! Core systems for the Chosen widgets.
//!
//! This crate provides the signal/slot mechanism the widget layer uses for
//! change notification. Widgets own [`Signal`]s and emit them when their state
//! changes in response to user interaction; interested parties connect slots
//! (closures) to react.
//!
//! All dispatch is synchronous and runs in the emitting thread: widget state
//! is only ever mutated from the UI thread, in direct response to a method
//! call or a user-generated event, so there is no queued or cross-thread
//! invocation machinery here.
//!
//! # Example
//!
//! ```
//! use chosen_core::Signal;
//!
//! let text_changed = Signal::<String>::new();
//!
//! let conn_id = text_changed.connect(|text| {
//!     println!("Text changed to: {}", text);
//! });
//!
//! text_changed.emit("Hello, World!".to_string());
//!
//! text_changed.disconnect(conn_id);
//! ```

mod signal;

pub use signal::{ConnectionId, Signal};
