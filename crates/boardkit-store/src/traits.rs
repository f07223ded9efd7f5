use async_trait::async_trait;
use boardkit_core::BoardResult;
use boardkit_domain::{
    Board, BoardId, BoardUpdate, Card, CardFilter, CardId, CardUpdate, List, ListId, ListUpdate,
    UserId,
};

/// A single card write within a transactional batch.
///
/// Position reindexing touches many sibling rows at once; expressing each
/// touch as a value lets the whole move travel through [`DataStore::apply`]
/// as one all-or-nothing unit.
#[derive(Debug, Clone)]
pub enum CardWrite {
    SetPosition { id: CardId, position: i32 },
    MoveToList {
        id: CardId,
        list_id: ListId,
        position: i32,
    },
    SetArchived { id: CardId, archived: bool },
    Update { id: CardId, updates: CardUpdate },
}

impl CardWrite {
    pub fn card_id(&self) -> CardId {
        match self {
            CardWrite::SetPosition { id, .. }
            | CardWrite::MoveToList { id, .. }
            | CardWrite::SetArchived { id, .. }
            | CardWrite::Update { id, .. } => *id,
        }
    }
}

/// Abstract storage operations over boards, lists, and cards.
///
/// Queries that return multiple rows come back ordered by `position`
/// ascending. `apply` is the transaction primitive of the move protocol:
/// either every write in the batch lands or none do.
#[async_trait]
pub trait DataStore: Send + Sync {
    // Boards
    async fn board(&self, id: BoardId) -> BoardResult<Option<Board>>;
    async fn boards_for_user(&self, owner: UserId) -> BoardResult<Vec<Board>>;
    async fn insert_board(&self, board: Board) -> BoardResult<Board>;
    async fn update_board(&self, id: BoardId, updates: BoardUpdate) -> BoardResult<Board>;
    /// Delete a board and cascade to its lists and cards.
    async fn delete_board(&self, id: BoardId) -> BoardResult<()>;

    // Lists
    async fn list(&self, id: ListId) -> BoardResult<Option<List>>;
    async fn lists_for_board(&self, board_id: BoardId) -> BoardResult<Vec<List>>;
    async fn count_lists(&self, board_id: BoardId) -> BoardResult<usize>;
    async fn insert_list(&self, list: List) -> BoardResult<List>;
    async fn update_list(&self, id: ListId, updates: ListUpdate) -> BoardResult<List>;
    /// Delete a list and cascade to its cards.
    async fn delete_list(&self, id: ListId) -> BoardResult<()>;

    // Cards
    async fn card(&self, id: CardId) -> BoardResult<Option<Card>>;
    async fn find_cards(&self, filter: CardFilter) -> BoardResult<Vec<Card>>;
    async fn count_cards(&self, filter: CardFilter) -> BoardResult<usize>;
    async fn insert_card(&self, card: Card) -> BoardResult<Card>;

    /// Apply an ordered batch of card writes atomically. A batch that
    /// references a missing card is rejected without touching any row.
    async fn apply(&self, writes: Vec<CardWrite>) -> BoardResult<()>;
}
