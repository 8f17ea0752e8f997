//! Change events delivered by the list box.

/// Notification payload for a user-driven selection change.
///
/// Carried on the list box's change signal; `index` addresses the affected
/// item by its position at the time of the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeEvent {
    /// Position of the affected item in the list box.
    pub index: usize,
    /// `true` when the item was selected, `false` when it was deselected.
    pub selection: bool,
}

impl ChangeEvent {
    /// A selection of the item at `index`.
    pub fn selection(index: usize) -> Self {
        Self {
            index,
            selection: true,
        }
    }

    /// A deselection of the item at `index`.
    pub fn deselection(index: usize) -> Self {
        Self {
            index,
            selection: false,
        }
    }
}
