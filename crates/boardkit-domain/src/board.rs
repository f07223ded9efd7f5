use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type BoardId = Uuid;
pub type UserId = Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub owner_id: UserId,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Board {
    pub fn new(owner_id: UserId, title: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id,
            title,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update_title(&mut self, title: String) {
        self.title = title;
        self.updated_at = Utc::now();
    }

    pub fn update(&mut self, updates: BoardUpdate) {
        if let Some(title) = updates.title {
            self.update_title(title);
        }
    }
}

/// Partial update for a board.
#[derive(Debug, Clone, Default)]
pub struct BoardUpdate {
    pub title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_title_bumps_updated_at() {
        let owner = Uuid::new_v4();
        let mut board = Board::new(owner, "Project".to_string());
        let before = board.updated_at;

        board.update_title("Renamed".to_string());
        assert_eq!(board.title, "Renamed");
        assert!(board.updated_at >= before);
        assert_eq!(board.owner_id, owner);
    }

    #[test]
    fn test_update_noop_without_title() {
        let mut board = Board::new(Uuid::new_v4(), "Project".to_string());
        board.update(BoardUpdate::default());
        assert_eq!(board.title, "Project");
    }
}
