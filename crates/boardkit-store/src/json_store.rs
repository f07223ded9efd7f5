use async_trait::async_trait;
use boardkit_core::{BoardError, BoardResult};
use boardkit_domain::{
    Board, BoardId, BoardUpdate, Card, CardFilter, CardId, List, ListId, ListUpdate, UserId,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::atomic_writer::AtomicWriter;
use crate::memory::MemoryStore;
use crate::state::StoreState;
use crate::traits::{CardWrite, DataStore};

const FORMAT_VERSION: u32 = 1;

/// Wrapper structure for the JSON file format
#[derive(Debug, Serialize, Deserialize)]
struct JsonEnvelope {
    version: u32,
    saved_at: DateTime<Utc>,
    state: StoreState,
}

/// JSON file-backed store: state lives in memory and the full envelope is
/// rewritten atomically after every mutation.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl JsonFileStore {
    /// Open a store at `path`, loading existing data when the file exists
    /// and starting empty otherwise.
    pub async fn open(path: impl AsRef<Path>) -> BoardResult<Self> {
        let path = path.as_ref().to_path_buf();
        let state = if path.exists() {
            let bytes = AtomicWriter::read_all(&path).await?;
            let envelope: JsonEnvelope = serde_json::from_slice(&bytes)
                .map_err(|e| BoardError::Serialization(e.to_string()))?;
            if envelope.version != FORMAT_VERSION {
                return Err(BoardError::Serialization(format!(
                    "Unsupported format version: {}",
                    envelope.version
                )));
            }
            tracing::info!("Loaded {} bytes from {}", bytes.len(), path.display());
            envelope.state
        } else {
            StoreState::new()
        };

        Ok(Self {
            path,
            inner: MemoryStore::with_state(state),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self) -> BoardResult<()> {
        let envelope = JsonEnvelope {
            version: FORMAT_VERSION,
            saved_at: Utc::now(),
            state: self.inner.snapshot(),
        };
        let bytes = serde_json::to_vec_pretty(&envelope)
            .map_err(|e| BoardError::Serialization(e.to_string()))?;
        AtomicWriter::write_atomic(&self.path, &bytes).await?;
        tracing::info!("Saved {} bytes to {}", bytes.len(), self.path.display());
        Ok(())
    }
}

#[async_trait]
impl DataStore for JsonFileStore {
    async fn board(&self, id: BoardId) -> BoardResult<Option<Board>> {
        self.inner.board(id).await
    }

    async fn boards_for_user(&self, owner: UserId) -> BoardResult<Vec<Board>> {
        self.inner.boards_for_user(owner).await
    }

    async fn insert_board(&self, board: Board) -> BoardResult<Board> {
        let board = self.inner.insert_board(board).await?;
        self.persist().await?;
        Ok(board)
    }

    async fn update_board(&self, id: BoardId, updates: BoardUpdate) -> BoardResult<Board> {
        let board = self.inner.update_board(id, updates).await?;
        self.persist().await?;
        Ok(board)
    }

    async fn delete_board(&self, id: BoardId) -> BoardResult<()> {
        self.inner.delete_board(id).await?;
        self.persist().await
    }

    async fn list(&self, id: ListId) -> BoardResult<Option<List>> {
        self.inner.list(id).await
    }

    async fn lists_for_board(&self, board_id: BoardId) -> BoardResult<Vec<List>> {
        self.inner.lists_for_board(board_id).await
    }

    async fn count_lists(&self, board_id: BoardId) -> BoardResult<usize> {
        self.inner.count_lists(board_id).await
    }

    async fn insert_list(&self, list: List) -> BoardResult<List> {
        let list = self.inner.insert_list(list).await?;
        self.persist().await?;
        Ok(list)
    }

    async fn update_list(&self, id: ListId, updates: ListUpdate) -> BoardResult<List> {
        let list = self.inner.update_list(id, updates).await?;
        self.persist().await?;
        Ok(list)
    }

    async fn delete_list(&self, id: ListId) -> BoardResult<()> {
        self.inner.delete_list(id).await?;
        self.persist().await
    }

    async fn card(&self, id: CardId) -> BoardResult<Option<Card>> {
        self.inner.card(id).await
    }

    async fn find_cards(&self, filter: CardFilter) -> BoardResult<Vec<Card>> {
        self.inner.find_cards(filter).await
    }

    async fn count_cards(&self, filter: CardFilter) -> BoardResult<usize> {
        self.inner.count_cards(filter).await
    }

    async fn insert_card(&self, card: Card) -> BoardResult<Card> {
        let card = self.inner.insert_card(card).await?;
        self.persist().await?;
        Ok(card)
    }

    async fn apply(&self, writes: Vec<CardWrite>) -> BoardResult<()> {
        self.inner.apply(writes).await?;
        self.persist().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_open_save_reload_roundtrip() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("boards.json");

        let board_id;
        let list_id;
        {
            let store = JsonFileStore::open(&file_path).await.unwrap();
            let board = Board::new(Uuid::new_v4(), "Board".to_string());
            board_id = board.id;
            store.insert_board(board).await.unwrap();
            let list = List::new(board_id, "Todo".to_string(), 0);
            list_id = list.id;
            store.insert_list(list).await.unwrap();
            store
                .insert_card(Card::new(list_id, "a".to_string(), 0))
                .await
                .unwrap();
        }
        assert!(file_path.exists());

        let reopened = JsonFileStore::open(&file_path).await.unwrap();
        assert!(reopened.board(board_id).await.unwrap().is_some());
        let cards = reopened
            .find_cards(CardFilter::active_in(list_id))
            .await
            .unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "a");
    }

    #[tokio::test]
    async fn test_open_rejects_unknown_version() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("boards.json");
        let bogus = serde_json::json!({
            "version": 99,
            "saved_at": Utc::now(),
            "state": { "boards": [], "lists": [], "cards": [] },
        });
        std::fs::write(&file_path, serde_json::to_vec(&bogus).unwrap()).unwrap();

        let err = JsonFileStore::open(&file_path).await.unwrap_err();
        assert!(matches!(err, BoardError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_open_missing_file_starts_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("new.json"))
            .await
            .unwrap();
        assert!(store
            .boards_for_user(Uuid::new_v4())
            .await
            .unwrap()
            .is_empty());
    }
}
