use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::field_update::FieldUpdate;
use crate::list::ListId;

pub type CardId = Uuid;

/// A task unit within a list.
///
/// `position` is the zero-based rank among the *active* (non-archived)
/// cards of the owning list. Archived cards keep their last position but
/// are excluded from ordering and from position bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub list_id: ListId,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub position: i32,
    #[serde(default)]
    pub archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Card {
    pub fn new(list_id: ListId, title: String, position: i32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            list_id,
            title,
            description: None,
            due_date: None,
            position,
            archived: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reassign the card to a list slot. The caller is responsible for
    /// shifting siblings so positions stay gapless.
    pub fn move_to_list(&mut self, list_id: ListId, position: i32) {
        self.list_id = list_id;
        self.position = position;
        self.updated_at = Utc::now();
    }

    pub fn set_position(&mut self, position: i32) {
        self.position = position;
        self.updated_at = Utc::now();
    }

    pub fn set_archived(&mut self, archived: bool) {
        self.archived = archived;
        self.updated_at = Utc::now();
    }

    pub fn update(&mut self, updates: CardUpdate) {
        if let Some(title) = updates.title {
            self.title = title;
        }
        updates.description.apply_to(&mut self.description);
        updates.due_date.apply_to(&mut self.due_date);
        if let Some(archived) = updates.archived {
            self.archived = archived;
        }
        self.updated_at = Utc::now();
    }
}

/// Partial update for a card. Optional entity fields use the three-state
/// [`FieldUpdate`] so a caller can distinguish "leave alone" from "clear".
#[derive(Debug, Clone, Default)]
pub struct CardUpdate {
    pub title: Option<String>,
    pub description: FieldUpdate<String>,
    pub due_date: FieldUpdate<DateTime<Utc>>,
    pub archived: Option<bool>,
}
