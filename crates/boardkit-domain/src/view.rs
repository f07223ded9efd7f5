use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::card::{Card, CardId};
use crate::list::{List, ListId};

/// A list together with its ordered, non-archived cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListView {
    #[serde(flatten)]
    pub list: List,
    pub cards: Vec<Card>,
}

impl ListView {
    pub fn new(list: List) -> Self {
        Self {
            list,
            cards: Vec::new(),
        }
    }

    pub fn id(&self) -> ListId {
        self.list.id
    }

    /// Index of a card within the visible (ordered) card array.
    pub fn index_of(&self, card_id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id == card_id)
    }
}

/// A board with its ordered lists, each carrying its ordered active cards.
/// This is the authoritative read model served to clients and the shape
/// the client mirror holds locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardView {
    #[serde(flatten)]
    pub board: Board,
    pub lists: Vec<ListView>,
}

impl BoardView {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            lists: Vec::new(),
        }
    }

    pub fn list(&self, id: ListId) -> Option<&ListView> {
        self.lists.iter().find(|l| l.id() == id)
    }

    pub fn list_mut(&mut self, id: ListId) -> Option<&mut ListView> {
        self.lists.iter_mut().find(|l| l.id() == id)
    }

    /// The list currently holding a card, if any.
    pub fn list_containing(&self, card_id: CardId) -> Option<&ListView> {
        self.lists
            .iter()
            .find(|l| l.cards.iter().any(|c| c.id == card_id))
    }

    pub fn card(&self, card_id: CardId) -> Option<&Card> {
        self.lists
            .iter()
            .flat_map(|l| l.cards.iter())
            .find(|c| c.id == card_id)
    }
}
