use boardkit_domain::{BoardView, CardId, ListId};

/// Where a drag gesture ended, decided once at gesture-resolution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// Dropped on a list's empty area: insert at the front.
    OnList(ListId),
    /// Dropped on a sibling card: take that card's visible slot.
    OnCard(CardId),
    /// Dropped on the designated end-of-list area: append.
    OnListEnd(ListId),
}

/// A drop target resolved against the current mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedDrop {
    pub source_list_id: ListId,
    pub target_list_id: ListId,
    /// Index into the target list's visible order.
    pub position: usize,
}

/// Resolve a drag-end into source list, target list, and target slot.
///
/// Returns `None` when the gesture is a no-op: the dragged card is gone
/// from the mirror, the target no longer exists, or the card was dropped
/// onto itself.
pub fn resolve_drop(view: &BoardView, card_id: CardId, target: DropTarget) -> Option<ResolvedDrop> {
    let source_list_id = view.list_containing(card_id)?.id();

    let (target_list_id, position) = match target {
        DropTarget::OnList(list_id) => {
            view.list(list_id)?;
            (list_id, 0)
        }
        DropTarget::OnListEnd(list_id) => {
            let list = view.list(list_id)?;
            (list_id, list.cards.len())
        }
        DropTarget::OnCard(over_id) => {
            if over_id == card_id {
                return None;
            }
            let list = view.list_containing(over_id)?;
            (list.id(), list.index_of(over_id)?)
        }
    };

    Some(ResolvedDrop {
        source_list_id,
        target_list_id,
        position,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use boardkit_domain::{Board, Card, List, ListView};
    use uuid::Uuid;

    fn view_with(lists: &[(&str, &[&str])]) -> BoardView {
        let board = Board::new(Uuid::new_v4(), "Board".to_string());
        let mut view = BoardView::new(board.clone());
        for (i, (title, cards)) in lists.iter().enumerate() {
            let list = List::new(board.id, title.to_string(), i as i32);
            let mut list_view = ListView::new(list.clone());
            for (j, card_title) in cards.iter().enumerate() {
                list_view
                    .cards
                    .push(Card::new(list.id, card_title.to_string(), j as i32));
            }
            view.lists.push(list_view);
        }
        view
    }

    #[test]
    fn test_drop_on_list_end_appends() {
        let view = view_with(&[("L1", &["a", "b"]), ("L2", &["x"])]);
        let a = view.lists[0].cards[0].id;
        let l2 = view.lists[1].id();

        let resolved = resolve_drop(&view, a, DropTarget::OnListEnd(l2)).unwrap();
        assert_eq!(resolved.source_list_id, view.lists[0].id());
        assert_eq!(resolved.target_list_id, l2);
        assert_eq!(resolved.position, 1);
    }

    #[test]
    fn test_drop_on_list_container_inserts_at_front() {
        let view = view_with(&[("L1", &["a"]), ("L2", &["x", "y"])]);
        let a = view.lists[0].cards[0].id;
        let l2 = view.lists[1].id();

        let resolved = resolve_drop(&view, a, DropTarget::OnList(l2)).unwrap();
        assert_eq!(resolved.position, 0);
    }

    #[test]
    fn test_drop_on_card_takes_its_visible_slot() {
        let view = view_with(&[("L1", &["a", "b", "c"])]);
        let a = view.lists[0].cards[0].id;
        let c = view.lists[0].cards[2].id;

        let resolved = resolve_drop(&view, a, DropTarget::OnCard(c)).unwrap();
        assert_eq!(resolved.source_list_id, resolved.target_list_id);
        assert_eq!(resolved.position, 2);
    }

    #[test]
    fn test_drop_on_itself_is_noop() {
        let view = view_with(&[("L1", &["a", "b"])]);
        let a = view.lists[0].cards[0].id;
        assert!(resolve_drop(&view, a, DropTarget::OnCard(a)).is_none());
    }

    #[test]
    fn test_unknown_targets_resolve_to_none() {
        let view = view_with(&[("L1", &["a"])]);
        let a = view.lists[0].cards[0].id;

        assert!(resolve_drop(&view, a, DropTarget::OnList(Uuid::new_v4())).is_none());
        assert!(resolve_drop(&view, a, DropTarget::OnCard(Uuid::new_v4())).is_none());
        assert!(resolve_drop(&view, Uuid::new_v4(), DropTarget::OnList(view.lists[0].id())).is_none());
    }
}
