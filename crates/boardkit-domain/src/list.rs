use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::board::BoardId;

pub type ListId = Uuid;

/// An ordered container of cards on a board. `position` ranks the list
/// among its siblings on the same board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct List {
    pub id: ListId,
    pub board_id: BoardId,
    pub title: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl List {
    pub fn new(board_id: BoardId, title: String, position: i32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            board_id,
            title,
            position,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update_title(&mut self, title: String) {
        self.title = title;
        self.updated_at = Utc::now();
    }

    pub fn update(&mut self, updates: ListUpdate) {
        if let Some(title) = updates.title {
            self.update_title(title);
        }
    }
}

/// Partial update for a list.
#[derive(Debug, Clone, Default)]
pub struct ListUpdate {
    pub title: Option<String>,
}
