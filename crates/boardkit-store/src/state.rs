use boardkit_core::{BoardError, BoardResult};
use boardkit_domain::{
    Board, BoardId, BoardUpdate, Card, CardFilter, CardId, List, ListId, ListUpdate, UserId,
};
use serde::{Deserialize, Serialize};

use crate::traits::CardWrite;

/// Complete persisted state: plain entity vectors shared by every store
/// backend. All query helpers return rows ordered by `position`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreState {
    #[serde(default)]
    pub boards: Vec<Board>,
    #[serde(default)]
    pub lists: Vec<List>,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl StoreState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty() && self.lists.is_empty() && self.cards.is_empty()
    }

    // Boards

    pub fn board(&self, id: BoardId) -> Option<&Board> {
        self.boards.iter().find(|b| b.id == id)
    }

    pub fn boards_for_user(&self, owner: UserId) -> Vec<Board> {
        self.boards
            .iter()
            .filter(|b| b.owner_id == owner)
            .cloned()
            .collect()
    }

    pub fn update_board(&mut self, id: BoardId, updates: BoardUpdate) -> BoardResult<Board> {
        let board = self
            .boards
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| BoardError::NotFound(format!("Board {}", id)))?;
        board.update(updates);
        Ok(board.clone())
    }

    pub fn delete_board(&mut self, id: BoardId) -> BoardResult<()> {
        if !self.boards.iter().any(|b| b.id == id) {
            return Err(BoardError::NotFound(format!("Board {}", id)));
        }
        let list_ids: Vec<ListId> = self
            .lists
            .iter()
            .filter(|l| l.board_id == id)
            .map(|l| l.id)
            .collect();
        self.cards.retain(|c| !list_ids.contains(&c.list_id));
        self.lists.retain(|l| l.board_id != id);
        self.boards.retain(|b| b.id != id);
        Ok(())
    }

    // Lists

    pub fn list(&self, id: ListId) -> Option<&List> {
        self.lists.iter().find(|l| l.id == id)
    }

    pub fn lists_for_board(&self, board_id: BoardId) -> Vec<List> {
        let mut lists: Vec<List> = self
            .lists
            .iter()
            .filter(|l| l.board_id == board_id)
            .cloned()
            .collect();
        lists.sort_by_key(|l| l.position);
        lists
    }

    pub fn count_lists(&self, board_id: BoardId) -> usize {
        self.lists.iter().filter(|l| l.board_id == board_id).count()
    }

    pub fn update_list(&mut self, id: ListId, updates: ListUpdate) -> BoardResult<List> {
        let list = self
            .lists
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| BoardError::NotFound(format!("List {}", id)))?;
        list.update(updates);
        Ok(list.clone())
    }

    pub fn delete_list(&mut self, id: ListId) -> BoardResult<()> {
        if !self.lists.iter().any(|l| l.id == id) {
            return Err(BoardError::NotFound(format!("List {}", id)));
        }
        self.cards.retain(|c| c.list_id != id);
        self.lists.retain(|l| l.id != id);
        Ok(())
    }

    // Cards

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    fn matches(card: &Card, filter: &CardFilter) -> bool {
        if let Some(list_id) = filter.list_id {
            if card.list_id != list_id {
                return false;
            }
        }
        if let Some(archived) = filter.archived {
            if card.archived != archived {
                return false;
            }
        }
        if let Some(exclude) = filter.exclude {
            if card.id == exclude {
                return false;
            }
        }
        true
    }

    pub fn find_cards(&self, filter: CardFilter) -> Vec<Card> {
        let mut cards: Vec<Card> = self
            .cards
            .iter()
            .filter(|c| Self::matches(c, &filter))
            .cloned()
            .collect();
        cards.sort_by_key(|c| c.position);
        cards
    }

    pub fn count_cards(&self, filter: CardFilter) -> usize {
        self.cards
            .iter()
            .filter(|c| Self::matches(c, &filter))
            .count()
    }

    /// Apply a batch of card writes in order against this state.
    ///
    /// The batch is validated up front; a write referencing a missing card
    /// or list rejects the whole batch before any row changes. Backends
    /// still run this on a working copy so a commit is all-or-nothing even
    /// if validation rules grow.
    pub fn apply_writes(&mut self, writes: &[CardWrite]) -> BoardResult<()> {
        for write in writes {
            let id = write.card_id();
            if !self.cards.iter().any(|c| c.id == id) {
                return Err(BoardError::Transaction(format!("Card {} not found", id)));
            }
            if let CardWrite::MoveToList { list_id, .. } = write {
                if !self.lists.iter().any(|l| l.id == *list_id) {
                    return Err(BoardError::Transaction(format!("List {} not found", list_id)));
                }
            }
        }

        for write in writes {
            let id = write.card_id();
            if let Some(card) = self.cards.iter_mut().find(|c| c.id == id) {
                match write {
                    CardWrite::SetPosition { position, .. } => card.set_position(*position),
                    CardWrite::MoveToList {
                        list_id, position, ..
                    } => card.move_to_list(*list_id, *position),
                    CardWrite::SetArchived { archived, .. } => card.set_archived(*archived),
                    CardWrite::Update { updates, .. } => card.update(updates.clone()),
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boardkit_domain::FieldUpdate;
    use uuid::Uuid;

    fn state_with_list() -> (StoreState, ListId) {
        let mut state = StoreState::new();
        let board = Board::new(Uuid::new_v4(), "Board".to_string());
        let list = List::new(board.id, "Todo".to_string(), 0);
        let list_id = list.id;
        state.boards.push(board);
        state.lists.push(list);
        (state, list_id)
    }

    #[test]
    fn test_find_cards_ordered_and_filtered() {
        let (mut state, list_id) = state_with_list();
        let mut archived = Card::new(list_id, "archived".to_string(), 1);
        archived.archived = true;
        state.cards.push(Card::new(list_id, "b".to_string(), 2));
        state.cards.push(archived);
        state.cards.push(Card::new(list_id, "a".to_string(), 0));

        let active = state.find_cards(CardFilter::active_in(list_id));
        assert_eq!(active.len(), 2);
        assert_eq!(active[0].title, "a");
        assert_eq!(active[1].title, "b");
        assert_eq!(state.count_cards(CardFilter::active_in(list_id)), 2);
    }

    #[test]
    fn test_exclude_filter() {
        let (mut state, list_id) = state_with_list();
        let card = Card::new(list_id, "a".to_string(), 0);
        let excluded = card.id;
        state.cards.push(card);
        state.cards.push(Card::new(list_id, "b".to_string(), 1));

        let rest = state.find_cards(CardFilter::active_in(list_id).without(excluded));
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].title, "b");
    }

    #[test]
    fn test_apply_writes_rejects_unknown_card() {
        let (mut state, list_id) = state_with_list();
        state.cards.push(Card::new(list_id, "a".to_string(), 0));

        let err = state
            .apply_writes(&[CardWrite::SetPosition {
                id: Uuid::new_v4(),
                position: 1,
            }])
            .unwrap_err();
        assert!(matches!(err, BoardError::Transaction(_)));
    }

    #[test]
    fn test_apply_writes_updates_card() {
        let (mut state, list_id) = state_with_list();
        let card = Card::new(list_id, "a".to_string(), 0);
        let card_id = card.id;
        state.cards.push(card);

        state
            .apply_writes(&[CardWrite::Update {
                id: card_id,
                updates: boardkit_domain::CardUpdate {
                    description: FieldUpdate::Set("notes".to_string()),
                    ..Default::default()
                },
            }])
            .unwrap();
        assert_eq!(
            state.card(card_id).unwrap().description.as_deref(),
            Some("notes")
        );
    }

    #[test]
    fn test_delete_list_cascades_cards() {
        let (mut state, list_id) = state_with_list();
        state.cards.push(Card::new(list_id, "a".to_string(), 0));

        state.delete_list(list_id).unwrap();
        assert!(state.lists.is_empty());
        assert!(state.cards.is_empty());
    }

    #[test]
    fn test_delete_board_cascades_everything() {
        let (mut state, list_id) = state_with_list();
        let board_id = state.boards[0].id;
        state.cards.push(Card::new(list_id, "a".to_string(), 0));

        state.delete_board(board_id).unwrap();
        assert!(state.is_empty());
    }
}
