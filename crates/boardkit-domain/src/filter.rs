use crate::card::CardId;
use crate::list::ListId;

/// Filter options for card queries.
///
/// `exclude` removes a single card from the result set, used by the
/// position allocator to consider "every sibling except the moved card".
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CardFilter {
    pub list_id: Option<ListId>,
    pub archived: Option<bool>,
    pub exclude: Option<CardId>,
}

impl CardFilter {
    /// Active (non-archived) cards of one list.
    pub fn active_in(list_id: ListId) -> Self {
        Self {
            list_id: Some(list_id),
            archived: Some(false),
            exclude: None,
        }
    }

    pub fn without(mut self, card_id: CardId) -> Self {
        self.exclude = Some(card_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_active_in_excludes_archived() {
        let list_id = Uuid::new_v4();
        let filter = CardFilter::active_in(list_id);
        assert_eq!(filter.list_id, Some(list_id));
        assert_eq!(filter.archived, Some(false));
        assert!(filter.exclude.is_none());
    }

    #[test]
    fn test_without_sets_exclusion() {
        let card_id = Uuid::new_v4();
        let filter = CardFilter::default().without(card_id);
        assert_eq!(filter.exclude, Some(card_id));
    }
}
