//! Reordering operations on the to-do list.
//!
//! Every operation takes the caller's current selection (or the index it
//! wants to act on) and returns the selection to adopt afterwards. An
//! invalid index — `None`, or out of range for the current list — is a
//! silent no-op: the list is left untouched and the input selection comes
//! back unchanged. Stale cursor state from a front-end must never be able
//! to crash a session.

use crate::model::list::{Selection, TodoList};

/// Insert a new item at the front of the list.
///
/// Blank input (empty or all-whitespace) is rejected and the list and
/// selection are unchanged. The snapshot format is line-based, so
/// multi-line input is folded into a single line before it is stored.
/// On success the new item is at index 0 and becomes the selection.
pub fn insert_front(list: &mut TodoList, selection: Selection, text: &str) -> Selection {
    if text.trim().is_empty() {
        return selection;
    }
    let item = if text.contains(['\n', '\r']) {
        text.split(['\n', '\r'])
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        text.to_string()
    };
    list.items_mut().insert(0, item);
    list.mark_dirty();
    Some(0)
}

/// Move the item at `index` to the top, preserving the relative order of
/// everything else. The moved item becomes the selection.
pub fn move_to_top(list: &mut TodoList, index: Selection) -> Selection {
    let Some(i) = valid_index(list, index) else {
        return index;
    };
    let item = list.items_mut().remove(i);
    list.items_mut().insert(0, item);
    list.mark_dirty();
    Some(0)
}

/// Move the item at `index` to the bottom, preserving the relative order of
/// everything else. The moved item becomes the selection.
pub fn move_to_bottom(list: &mut TodoList, index: Selection) -> Selection {
    let Some(i) = valid_index(list, index) else {
        return index;
    };
    let item = list.items_mut().remove(i);
    list.items_mut().push(item);
    list.mark_dirty();
    Some(list.len() - 1)
}

/// Swap the item at `index` with the one above it. No-op when the item is
/// already first. The moved item (now at `index - 1`) becomes the selection.
pub fn raise(list: &mut TodoList, index: Selection) -> Selection {
    let Some(i) = valid_index(list, index) else {
        return index;
    };
    if i == 0 {
        return index;
    }
    list.items_mut().swap(i, i - 1);
    list.mark_dirty();
    Some(i - 1)
}

/// Swap the item at `index` with the one below it. No-op when the item is
/// already last. The moved item (now at `index + 1`) becomes the selection.
pub fn lower(list: &mut TodoList, index: Selection) -> Selection {
    let Some(i) = valid_index(list, index) else {
        return index;
    };
    if i + 1 >= list.len() {
        return index;
    }
    list.items_mut().swap(i, i + 1);
    list.mark_dirty();
    Some(i + 1)
}

/// Remove the item at `index`.
///
/// The item that shifts into the freed slot becomes the selection, clamped
/// to the new last index when the last item was removed; `None` once the
/// list is empty.
pub fn remove(list: &mut TodoList, index: Selection) -> Selection {
    let Some(i) = valid_index(list, index) else {
        return index;
    };
    list.items_mut().remove(i);
    list.mark_dirty();
    if list.is_empty() {
        None
    } else {
        Some(i.min(list.len() - 1))
    }
}

fn valid_index(list: &TodoList, index: Selection) -> Option<usize> {
    match index {
        Some(i) if i < list.len() => Some(i),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TodoList {
        TodoList::from_items(vec!["A".into(), "B".into(), "C".into()])
    }

    fn items(list: &TodoList) -> Vec<&str> {
        list.items().iter().map(|s| s.as_str()).collect()
    }

    #[test]
    fn test_insert_front() {
        let mut list = sample();
        let sel = insert_front(&mut list, Some(2), "D");
        assert_eq!(items(&list), vec!["D", "A", "B", "C"]);
        assert_eq!(sel, Some(0));
        assert!(list.is_dirty());
    }

    #[test]
    fn test_insert_front_blank_rejected() {
        let mut list = TodoList::new();
        let sel = insert_front(&mut list, None, "");
        assert!(list.is_empty());
        assert_eq!(sel, None);
        assert!(!list.is_dirty());

        let sel = insert_front(&mut list, None, "   \t");
        assert!(list.is_empty());
        assert_eq!(sel, None);
    }

    #[test]
    fn test_insert_front_preserves_surrounding_whitespace() {
        // Only fully-blank input is rejected; padded text is kept verbatim
        let mut list = TodoList::new();
        insert_front(&mut list, None, "  padded  ");
        assert_eq!(items(&list), vec!["  padded  "]);
    }

    #[test]
    fn test_insert_front_folds_multiline_input() {
        // Items must stay newline-free or the saved snapshot would not load
        let mut list = TodoList::new();
        insert_front(&mut list, None, "first line\nsecond line");
        assert_eq!(items(&list), vec!["first line second line"]);

        insert_front(&mut list, None, "crlf\r\n  and indent\n\n");
        assert_eq!(list.items()[0], "crlf and indent");
    }

    #[test]
    fn test_move_to_top() {
        let mut list = sample();
        let sel = move_to_top(&mut list, Some(2));
        assert_eq!(items(&list), vec!["C", "A", "B"]);
        assert_eq!(sel, Some(0));
    }

    #[test]
    fn test_move_to_top_preserves_relative_order() {
        let mut list = TodoList::from_items(vec![
            "A".into(),
            "B".into(),
            "C".into(),
            "D".into(),
            "E".into(),
        ]);
        move_to_top(&mut list, Some(2));
        assert_eq!(items(&list), vec!["C", "A", "B", "D", "E"]);
    }

    #[test]
    fn test_move_to_bottom() {
        let mut list = sample();
        let sel = move_to_bottom(&mut list, Some(0));
        assert_eq!(items(&list), vec!["B", "C", "A"]);
        assert_eq!(sel, Some(2));
    }

    #[test]
    fn test_move_to_bottom_preserves_relative_order() {
        let mut list = TodoList::from_items(vec![
            "A".into(),
            "B".into(),
            "C".into(),
            "D".into(),
            "E".into(),
        ]);
        move_to_bottom(&mut list, Some(1));
        assert_eq!(items(&list), vec!["A", "C", "D", "E", "B"]);
    }

    #[test]
    fn test_raise() {
        let mut list = sample();
        let sel = raise(&mut list, Some(2));
        assert_eq!(items(&list), vec!["A", "C", "B"]);
        assert_eq!(sel, Some(1));
    }

    #[test]
    fn test_raise_first_is_noop() {
        let mut list = sample();
        let sel = raise(&mut list, Some(0));
        assert_eq!(items(&list), vec!["A", "B", "C"]);
        assert_eq!(sel, Some(0));
        assert!(!list.is_dirty());
    }

    #[test]
    fn test_lower() {
        let mut list = sample();
        let sel = lower(&mut list, Some(0));
        assert_eq!(items(&list), vec!["B", "A", "C"]);
        assert_eq!(sel, Some(1));
    }

    #[test]
    fn test_lower_last_is_noop() {
        let mut list = sample();
        let sel = lower(&mut list, Some(2));
        assert_eq!(items(&list), vec!["A", "B", "C"]);
        assert_eq!(sel, Some(2));
        assert!(!list.is_dirty());
    }

    #[test]
    fn test_raise_then_lower_is_involution() {
        let original = sample();
        for i in 1..original.len() {
            let mut list = original.clone();
            let sel = raise(&mut list, Some(i));
            assert_eq!(sel, Some(i - 1));
            let sel = lower(&mut list, sel);
            assert_eq!(list, original);
            assert_eq!(sel, Some(i));
        }
    }

    #[test]
    fn test_lower_then_raise_is_involution() {
        let original = sample();
        for i in 0..original.len() - 1 {
            let mut list = original.clone();
            let sel = lower(&mut list, Some(i));
            assert_eq!(sel, Some(i + 1));
            let sel = raise(&mut list, sel);
            assert_eq!(list, original);
            assert_eq!(sel, Some(i));
        }
    }

    #[test]
    fn test_remove() {
        let mut list = sample();
        let sel = remove(&mut list, Some(1));
        assert_eq!(items(&list), vec!["A", "C"]);
        // "C" shifted into the freed slot
        assert_eq!(sel, Some(1));
    }

    #[test]
    fn test_remove_last_clamps_selection() {
        let mut list = sample();
        let sel = remove(&mut list, Some(2));
        assert_eq!(items(&list), vec!["A", "B"]);
        assert_eq!(sel, Some(1));
    }

    #[test]
    fn test_remove_only_item_clears_selection() {
        let mut list = TodoList::from_items(vec!["A".into()]);
        let sel = remove(&mut list, Some(0));
        assert!(list.is_empty());
        assert_eq!(sel, None);
    }

    #[test]
    fn test_remove_duplicates_targets_position() {
        let mut list = TodoList::from_items(vec!["X".into(), "X".into(), "Y".into()]);
        remove(&mut list, Some(1));
        assert_eq!(items(&list), vec!["X", "Y"]);
    }

    #[test]
    fn test_out_of_range_is_noop_for_every_op() {
        let original = sample();
        let ops: Vec<fn(&mut TodoList, Selection) -> Selection> =
            vec![move_to_top, move_to_bottom, raise, lower, remove];
        for op in ops {
            for index in [None, Some(3), Some(100)] {
                let mut list = original.clone();
                let sel = op(&mut list, index);
                assert_eq!(list, original);
                assert_eq!(sel, index);
                assert!(!list.is_dirty());
            }
        }
    }

    #[test]
    fn test_ops_on_empty_list_are_noops() {
        let ops: Vec<fn(&mut TodoList, Selection) -> Selection> =
            vec![move_to_top, move_to_bottom, raise, lower, remove];
        for op in ops {
            let mut list = TodoList::new();
            let sel = op(&mut list, Some(0));
            assert!(list.is_empty());
            assert_eq!(sel, Some(0));
        }
    }

    #[test]
    fn test_single_item_moves_are_stable() {
        let mut list = TodoList::from_items(vec!["only".into()]);
        assert_eq!(move_to_top(&mut list, Some(0)), Some(0));
        assert_eq!(move_to_bottom(&mut list, Some(0)), Some(0));
        assert_eq!(items(&list), vec!["only"]);
    }

    #[test]
    fn test_returned_selection_always_in_bounds_after_mutation() {
        let mut list = sample();
        let sel = move_to_bottom(&mut list, Some(1));
        assert!(sel.unwrap() < list.len());
        let sel = move_to_top(&mut list, sel);
        assert!(sel.unwrap() < list.len());
        let sel = remove(&mut list, sel);
        assert!(sel.unwrap() < list.len());
    }
}
