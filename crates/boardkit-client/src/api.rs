use async_trait::async_trait;
use boardkit_core::BoardResult;
use boardkit_domain::{BoardId, BoardView, Card, CardId, CardUpdate, List, ListId, ListUpdate, ListView};
use serde::{Deserialize, Serialize};

/// Wire payload of a move request: the target list and the slot within
/// its visible order. Sent against a specific card id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCardRequest {
    pub list_id: ListId,
    pub position: i32,
}

/// Transport to the authoritative board service.
///
/// The session identity travels inside the implementation (a remote
/// transport carries it the way cookies do), so the synchronizer never
/// handles credentials. Any transport failure and any non-success
/// response surface as an error; implementations do not retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardApi: Send + Sync {
    async fn fetch_board(&self, id: BoardId) -> BoardResult<BoardView>;

    async fn move_card(&self, id: CardId, request: MoveCardRequest) -> BoardResult<Card>;
    async fn create_card(
        &self,
        list_id: ListId,
        title: String,
        description: Option<String>,
    ) -> BoardResult<Card>;
    async fn update_card(&self, id: CardId, updates: CardUpdate) -> BoardResult<Card>;
    async fn archive_card(&self, id: CardId) -> BoardResult<Card>;
    async fn archive_all_in_list(&self, list_id: ListId) -> BoardResult<usize>;

    async fn create_list(&self, board_id: BoardId, title: String) -> BoardResult<ListView>;
    async fn update_list(&self, id: ListId, updates: ListUpdate) -> BoardResult<List>;
    async fn delete_list(&self, id: ListId) -> BoardResult<()>;
}
