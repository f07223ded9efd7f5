use boardkit_domain::{BoardView, Card, CardId, ListId, ListUpdate, ListView};

/// The client's in-memory copy of one board.
///
/// The mirror is exclusively owned by the synchronizer; every mutation is
/// a synchronous splice against the visible card arrays. Stored `position`
/// fields are not rewritten here — array order is the client's truth and
/// position bookkeeping is confirmed by the server out of band.
#[derive(Debug, Clone)]
pub struct BoardMirror {
    view: BoardView,
}

impl BoardMirror {
    pub fn new(view: BoardView) -> Self {
        Self { view }
    }

    pub fn view(&self) -> &BoardView {
        &self.view
    }

    /// Replace the whole mirror with a fresh authoritative snapshot.
    pub fn replace(&mut self, view: BoardView) {
        self.view = view;
    }

    /// Splice a card out of its current list and into `target_list_id` at
    /// `index` (clamped to the visible length), rewriting its local
    /// `list_id`. Returns false when card or target list is missing.
    pub fn apply_move(&mut self, card_id: CardId, target_list_id: ListId, index: usize) -> bool {
        if self.view.list(target_list_id).is_none() {
            return false;
        }
        let Some(mut card) = self.take_card(card_id) else {
            return false;
        };
        card.list_id = target_list_id;
        let target = self
            .view
            .list_mut(target_list_id)
            .expect("target list checked above");
        let index = index.min(target.cards.len());
        target.cards.insert(index, card);
        true
    }

    /// Append a provisional card while its create request is in flight.
    pub fn insert_provisional(&mut self, card: Card) -> bool {
        match self.view.list_mut(card.list_id) {
            Some(list) => {
                list.cards.push(card);
                true
            }
            None => false,
        }
    }

    /// Swap a card record in place, keeping its slot in the visible order.
    pub fn replace_card(&mut self, old_id: CardId, card: Card) -> bool {
        for list in &mut self.view.lists {
            if let Some(slot) = list.cards.iter_mut().find(|c| c.id == old_id) {
                *slot = card;
                return true;
            }
        }
        false
    }

    /// Remove a card from whichever list holds it.
    pub fn take_card(&mut self, card_id: CardId) -> Option<Card> {
        for list in &mut self.view.lists {
            if let Some(index) = list.index_of(card_id) {
                return Some(list.cards.remove(index));
            }
        }
        None
    }

    /// Empty a list's visible cards (bulk archive).
    pub fn clear_list(&mut self, list_id: ListId) {
        if let Some(list) = self.view.list_mut(list_id) {
            list.cards.clear();
        }
    }

    pub fn push_list(&mut self, list: ListView) {
        self.view.lists.push(list);
    }

    pub fn remove_list(&mut self, list_id: ListId) {
        self.view.lists.retain(|l| l.id() != list_id);
    }

    pub fn apply_list_update(&mut self, list_id: ListId, updates: ListUpdate) {
        if let Some(list) = self.view.list_mut(list_id) {
            list.list.update(updates);
        }
    }
}
