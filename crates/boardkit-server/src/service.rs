use std::sync::Arc;

use async_trait::async_trait;
use boardkit_core::{BoardError, BoardResult};
use boardkit_domain::{
    Board, BoardId, BoardOperations, BoardUpdate, BoardView, Card, CardFilter, CardId, CardUpdate,
    List, ListId, ListUpdate, ListView, UserId,
};
use boardkit_store::{CardWrite, DataStore};

use crate::allocator;

/// Ownership-gated board operations over an abstract store.
///
/// Position changes go through the allocator planners and land via the
/// store's transactional `apply`, so every move either commits whole or
/// not at all. Boards belonging to another user report as not-found.
pub struct BoardService {
    store: Arc<dyn DataStore>,
}

impl BoardService {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self { store }
    }

    async fn owned_board(&self, user: UserId, id: BoardId) -> BoardResult<Board> {
        match self.store.board(id).await? {
            Some(board) if board.owner_id == user => Ok(board),
            _ => Err(BoardError::NotFound(format!("Board {}", id))),
        }
    }

    async fn owned_list(&self, user: UserId, id: ListId) -> BoardResult<List> {
        let list = self
            .store
            .list(id)
            .await?
            .ok_or_else(|| BoardError::NotFound(format!("List {}", id)))?;
        self.owned_board(user, list.board_id).await?;
        Ok(list)
    }

    async fn owned_card(&self, user: UserId, id: CardId) -> BoardResult<Card> {
        let card = self
            .store
            .card(id)
            .await?
            .ok_or_else(|| BoardError::NotFound(format!("Card {}", id)))?;
        self.owned_list(user, card.list_id).await?;
        Ok(card)
    }

    async fn refreshed_card(&self, id: CardId) -> BoardResult<Card> {
        self.store
            .card(id)
            .await?
            .ok_or_else(|| BoardError::Internal(format!("Card {} missing after write", id)))
    }
}

fn require_title(title: &str) -> BoardResult<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(BoardError::Validation("Title is required".to_string()));
    }
    Ok(trimmed.to_string())
}

#[async_trait]
impl BoardOperations for BoardService {
    async fn create_board(&self, user: UserId, title: String) -> BoardResult<Board> {
        let title = require_title(&title)?;
        let board = Board::new(user, title);
        tracing::info!("creating board {} for user {}", board.id, user);
        self.store.insert_board(board).await
    }

    async fn list_boards(&self, user: UserId) -> BoardResult<Vec<Board>> {
        self.store.boards_for_user(user).await
    }

    async fn get_board(&self, user: UserId, id: BoardId) -> BoardResult<BoardView> {
        let board = self.owned_board(user, id).await?;
        let mut view = BoardView::new(board);
        for list in self.store.lists_for_board(id).await? {
            let cards = self.store.find_cards(CardFilter::active_in(list.id)).await?;
            let mut list_view = ListView::new(list);
            list_view.cards = cards;
            view.lists.push(list_view);
        }
        Ok(view)
    }

    async fn update_board(
        &self,
        user: UserId,
        id: BoardId,
        updates: BoardUpdate,
    ) -> BoardResult<Board> {
        if let Some(title) = &updates.title {
            require_title(title)?;
        }
        self.owned_board(user, id).await?;
        self.store.update_board(id, updates).await
    }

    async fn delete_board(&self, user: UserId, id: BoardId) -> BoardResult<()> {
        self.owned_board(user, id).await?;
        tracing::info!("deleting board {}", id);
        self.store.delete_board(id).await
    }

    async fn create_list(
        &self,
        user: UserId,
        board_id: BoardId,
        title: String,
    ) -> BoardResult<ListView> {
        let title = require_title(&title)?;
        self.owned_board(user, board_id).await?;
        let position = self.store.count_lists(board_id).await? as i32;
        let list = self.store.insert_list(List::new(board_id, title, position)).await?;
        Ok(ListView::new(list))
    }

    async fn update_list(
        &self,
        user: UserId,
        id: ListId,
        updates: ListUpdate,
    ) -> BoardResult<List> {
        if let Some(title) = &updates.title {
            require_title(title)?;
        }
        self.owned_list(user, id).await?;
        self.store.update_list(id, updates).await
    }

    async fn delete_list(&self, user: UserId, id: ListId) -> BoardResult<()> {
        self.owned_list(user, id).await?;
        self.store.delete_list(id).await
    }

    async fn archive_all_in_list(&self, user: UserId, id: ListId) -> BoardResult<usize> {
        self.owned_list(user, id).await?;
        let active = self.store.find_cards(CardFilter::active_in(id)).await?;
        let count = active.len();
        if count > 0 {
            let writes = active
                .into_iter()
                .map(|c| CardWrite::SetArchived {
                    id: c.id,
                    archived: true,
                })
                .collect();
            self.store.apply(writes).await?;
        }
        tracing::info!("archived {} cards in list {}", count, id);
        Ok(count)
    }

    async fn create_card(
        &self,
        user: UserId,
        list_id: ListId,
        title: String,
        description: Option<String>,
    ) -> BoardResult<Card> {
        let title = require_title(&title)?;
        self.owned_list(user, list_id).await?;
        // Append at the end of the active sequence.
        let position = self.store.count_cards(CardFilter::active_in(list_id)).await? as i32;
        let mut card = Card::new(list_id, title, position);
        card.description = description;
        self.store.insert_card(card).await
    }

    async fn get_card(&self, user: UserId, id: CardId) -> BoardResult<Card> {
        self.owned_card(user, id).await
    }

    async fn update_card(
        &self,
        user: UserId,
        id: CardId,
        updates: CardUpdate,
    ) -> BoardResult<Card> {
        if let Some(title) = &updates.title {
            require_title(title)?;
        }
        self.owned_card(user, id).await?;
        self.store
            .apply(vec![CardWrite::Update { id, updates }])
            .await?;
        self.refreshed_card(id).await
    }

    async fn move_card(
        &self,
        user: UserId,
        id: CardId,
        list_id: ListId,
        position: i32,
    ) -> BoardResult<Card> {
        if position < 0 {
            return Err(BoardError::Validation(
                "Position must be non-negative".to_string(),
            ));
        }
        let card = self.owned_card(user, id).await?;
        if card.archived {
            return Err(BoardError::Validation(format!(
                "Card {} is archived and cannot be moved",
                id
            )));
        }
        let target_list = self.owned_list(user, list_id).await?;

        let writes = if card.list_id == target_list.id {
            let siblings = self
                .store
                .find_cards(CardFilter::active_in(card.list_id).without(card.id))
                .await?;
            allocator::plan_same_list_move(&siblings, &card, position)
        } else {
            let source_siblings = self
                .store
                .find_cards(CardFilter::active_in(card.list_id).without(card.id))
                .await?;
            let target_cards = self
                .store
                .find_cards(CardFilter::active_in(target_list.id))
                .await?;
            allocator::plan_cross_list_move(
                &source_siblings,
                &target_cards,
                &card,
                target_list.id,
                position,
            )
        };

        tracing::debug!(
            "moving card {} to list {} slot {} ({} writes)",
            id,
            list_id,
            position,
            writes.len()
        );
        if !writes.is_empty() {
            self.store.apply(writes).await?;
        }
        self.refreshed_card(id).await
    }

    async fn archive_card(&self, user: UserId, id: CardId) -> BoardResult<Card> {
        self.owned_card(user, id).await?;
        self.store
            .apply(vec![CardWrite::SetArchived { id, archived: true }])
            .await?;
        self.refreshed_card(id).await
    }
}
