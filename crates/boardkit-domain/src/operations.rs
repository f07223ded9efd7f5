use async_trait::async_trait;
use boardkit_core::BoardResult;

use crate::board::{Board, BoardId, BoardUpdate, UserId};
use crate::card::{Card, CardId, CardUpdate};
use crate::list::{List, ListId, ListUpdate};
use crate::view::{BoardView, ListView};

/// The full set of board operations, scoped to an acting user.
/// Every frontend consumes this trait and the service implements it;
/// adding a method here forces every implementation to add it.
///
/// Operations against boards the user does not own report not-found
/// rather than revealing that the board exists.
#[async_trait]
pub trait BoardOperations: Send + Sync {
    // Board operations
    async fn create_board(&self, user: UserId, title: String) -> BoardResult<Board>;
    async fn list_boards(&self, user: UserId) -> BoardResult<Vec<Board>>;
    /// Fetch a board as a nested view: lists ordered by position, each
    /// with its ordered, non-archived cards.
    async fn get_board(&self, user: UserId, id: BoardId) -> BoardResult<BoardView>;
    async fn update_board(
        &self,
        user: UserId,
        id: BoardId,
        updates: BoardUpdate,
    ) -> BoardResult<Board>;
    async fn delete_board(&self, user: UserId, id: BoardId) -> BoardResult<()>;

    // List operations
    async fn create_list(
        &self,
        user: UserId,
        board_id: BoardId,
        title: String,
    ) -> BoardResult<ListView>;
    async fn update_list(&self, user: UserId, id: ListId, updates: ListUpdate)
        -> BoardResult<List>;
    async fn delete_list(&self, user: UserId, id: ListId) -> BoardResult<()>;
    /// Archive every active card in the list. Returns the archived count.
    async fn archive_all_in_list(&self, user: UserId, id: ListId) -> BoardResult<usize>;

    // Card operations
    async fn create_card(
        &self,
        user: UserId,
        list_id: ListId,
        title: String,
        description: Option<String>,
    ) -> BoardResult<Card>;
    async fn get_card(&self, user: UserId, id: CardId) -> BoardResult<Card>;
    async fn update_card(&self, user: UserId, id: CardId, updates: CardUpdate)
        -> BoardResult<Card>;
    /// Move a card to `position` within `list_id`, shifting siblings so
    /// active positions stay gapless. Same-list and cross-list moves are
    /// both applied as a single transaction.
    async fn move_card(
        &self,
        user: UserId,
        id: CardId,
        list_id: ListId,
        position: i32,
    ) -> BoardResult<Card>;
    async fn archive_card(&self, user: UserId, id: CardId) -> BoardResult<Card>;
}
