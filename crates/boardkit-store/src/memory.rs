use async_trait::async_trait;
use boardkit_core::{BoardError, BoardResult};
use boardkit_domain::{
    Board, BoardId, BoardUpdate, Card, CardFilter, CardId, List, ListId, ListUpdate, UserId,
};
use parking_lot::RwLock;

use crate::state::StoreState;
use crate::traits::{CardWrite, DataStore};

/// In-memory store backing the service in tests and embedded use.
///
/// `apply` stages the batch on a working copy of the state and swaps it in
/// only on success, so a rejected batch leaves every row untouched.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<StoreState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: StoreState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }

    /// Clone of the full current state, used by persisting wrappers.
    pub fn snapshot(&self) -> StoreState {
        self.state.read().clone()
    }
}

#[async_trait]
impl DataStore for MemoryStore {
    async fn board(&self, id: BoardId) -> BoardResult<Option<Board>> {
        Ok(self.state.read().board(id).cloned())
    }

    async fn boards_for_user(&self, owner: UserId) -> BoardResult<Vec<Board>> {
        Ok(self.state.read().boards_for_user(owner))
    }

    async fn insert_board(&self, board: Board) -> BoardResult<Board> {
        let mut state = self.state.write();
        state.boards.push(board.clone());
        Ok(board)
    }

    async fn update_board(&self, id: BoardId, updates: BoardUpdate) -> BoardResult<Board> {
        self.state.write().update_board(id, updates)
    }

    async fn delete_board(&self, id: BoardId) -> BoardResult<()> {
        self.state.write().delete_board(id)
    }

    async fn list(&self, id: ListId) -> BoardResult<Option<List>> {
        Ok(self.state.read().list(id).cloned())
    }

    async fn lists_for_board(&self, board_id: BoardId) -> BoardResult<Vec<List>> {
        Ok(self.state.read().lists_for_board(board_id))
    }

    async fn count_lists(&self, board_id: BoardId) -> BoardResult<usize> {
        Ok(self.state.read().count_lists(board_id))
    }

    async fn insert_list(&self, list: List) -> BoardResult<List> {
        let mut state = self.state.write();
        if !state.boards.iter().any(|b| b.id == list.board_id) {
            return Err(BoardError::NotFound(format!("Board {}", list.board_id)));
        }
        state.lists.push(list.clone());
        Ok(list)
    }

    async fn update_list(&self, id: ListId, updates: ListUpdate) -> BoardResult<List> {
        self.state.write().update_list(id, updates)
    }

    async fn delete_list(&self, id: ListId) -> BoardResult<()> {
        self.state.write().delete_list(id)
    }

    async fn card(&self, id: CardId) -> BoardResult<Option<Card>> {
        Ok(self.state.read().card(id).cloned())
    }

    async fn find_cards(&self, filter: CardFilter) -> BoardResult<Vec<Card>> {
        Ok(self.state.read().find_cards(filter))
    }

    async fn count_cards(&self, filter: CardFilter) -> BoardResult<usize> {
        Ok(self.state.read().count_cards(filter))
    }

    async fn insert_card(&self, card: Card) -> BoardResult<Card> {
        let mut state = self.state.write();
        if !state.lists.iter().any(|l| l.id == card.list_id) {
            return Err(BoardError::NotFound(format!("List {}", card.list_id)));
        }
        state.cards.push(card.clone());
        Ok(card)
    }

    async fn apply(&self, writes: Vec<CardWrite>) -> BoardResult<()> {
        let mut state = self.state.write();
        let mut staged = state.clone();
        staged.apply_writes(&writes)?;
        *state = staged;
        tracing::debug!("applied {} card writes", writes.len());
        Ok(())
    }
}
