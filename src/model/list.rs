/// The index of the item the user is acting on, or `None` when nothing
/// is selected (empty list, or a fresh session before any navigation).
///
/// Selection is not stored in the list itself: every engine operation in
/// [`crate::ops::list_ops`] takes the caller's current selection and returns
/// the one to adopt afterwards, so any front-end can apply it to whatever
/// cursor mechanism it uses.
pub type Selection = Option<usize>;

/// The single ordered to-do list.
///
/// Items are bare text; duplicates are allowed and distinguished only by
/// position. Display order is item order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<String>,
    /// Whether the list has unsaved changes
    dirty: bool,
}

impl TodoList {
    pub fn new() -> Self {
        TodoList::default()
    }

    /// Build a list from already-parsed items (snapshot load). Starts clean.
    pub fn from_items(items: Vec<String>) -> Self {
        TodoList {
            items,
            dirty: false,
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark as saved (called after a successful snapshot write).
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Mutable access for the engine operations. Anything that touches this
    /// is responsible for calling `mark_dirty`.
    pub(crate) fn items_mut(&mut self) -> &mut Vec<String> {
        &mut self.items
    }
}
