use std::sync::Arc;

use boardkit_core::{BoardError, BoardResult};
use boardkit_domain::{BoardId, BoardView, Card, CardId, CardUpdate, ListId, ListUpdate};

use crate::api::{BoardApi, MoveCardRequest};
use crate::drop_target::{resolve_drop, DropTarget, ResolvedDrop};
use crate::mirror::BoardMirror;

/// Handle for a dispatched mutation, used to detect responses that were
/// overtaken by a wholesale mirror replacement.
#[derive(Debug, Clone, Copy)]
pub struct PendingMutation {
    seq: u64,
}

/// Drives one board's mirror through the optimistic mutation protocol.
///
/// Mutations run on `&mut self`, so application to the mirror is
/// serialized by ownership. Each dispatched request carries a sequence
/// number; a rollback refetch records the sequence it replaced the mirror
/// at, and responses from earlier requests are dropped as stale instead of
/// being merged over the newer snapshot.
///
/// Drag moves and card adds are optimistic: the mirror changes before the
/// request is sent. Everything else touches the mirror only after a
/// successful response. On any move failure the whole mirror is replaced
/// by a fresh fetch; no partial rollback is attempted.
pub struct BoardSynchronizer {
    board_id: BoardId,
    api: Arc<dyn BoardApi>,
    mirror: BoardMirror,
    next_seq: u64,
    mirror_epoch: u64,
}

impl BoardSynchronizer {
    /// Fetch the board and start mirroring it.
    pub async fn connect(api: Arc<dyn BoardApi>, board_id: BoardId) -> BoardResult<Self> {
        let view = api.fetch_board(board_id).await?;
        Ok(Self {
            board_id,
            api,
            mirror: BoardMirror::new(view),
            next_seq: 0,
            mirror_epoch: 0,
        })
    }

    pub fn board_id(&self) -> BoardId {
        self.board_id
    }

    pub fn view(&self) -> &BoardView {
        self.mirror.view()
    }

    fn begin(&mut self) -> PendingMutation {
        self.next_seq += 1;
        PendingMutation { seq: self.next_seq }
    }

    fn is_stale(&self, pending: PendingMutation) -> bool {
        pending.seq <= self.mirror_epoch
    }

    /// Discard local state and replace the mirror with the authoritative
    /// board. Every request dispatched before this point becomes stale.
    pub async fn refetch(&mut self) -> BoardResult<()> {
        let view = self.api.fetch_board(self.board_id).await?;
        self.mirror.replace(view);
        self.mirror_epoch = self.next_seq;
        Ok(())
    }

    /// Full drag-end protocol: resolve, splice optimistically, dispatch,
    /// reconcile. An unresolvable drop (vanished card or target, or a
    /// card dropped on itself) is a no-op.
    pub async fn drag_end(&mut self, card_id: CardId, target: DropTarget) -> BoardResult<()> {
        let Some(resolved) = resolve_drop(self.mirror.view(), card_id, target) else {
            return Ok(());
        };
        let (pending, request) = self.begin_move(card_id, &resolved);
        let result = self.api.move_card(card_id, request).await;
        self.complete_move(card_id, pending, result).await
    }

    /// First half of a move: apply the optimistic splice and produce the
    /// wire request. Split out so a caller (or test) can interleave
    /// completions out of dispatch order, as network responses do.
    pub fn begin_move(
        &mut self,
        card_id: CardId,
        resolved: &ResolvedDrop,
    ) -> (PendingMutation, MoveCardRequest) {
        self.mirror
            .apply_move(card_id, resolved.target_list_id, resolved.position);
        let request = MoveCardRequest {
            list_id: resolved.target_list_id,
            position: resolved.position as i32,
        };
        (self.begin(), request)
    }

    /// Second half of a move: merge the canonical record on success, or
    /// roll the mirror back to the authoritative state on failure. The
    /// original error is surfaced after the rollback completes.
    pub async fn complete_move(
        &mut self,
        card_id: CardId,
        pending: PendingMutation,
        result: BoardResult<Card>,
    ) -> BoardResult<()> {
        match result {
            Ok(card) => {
                if !self.is_stale(pending) {
                    self.mirror.replace_card(card_id, card);
                }
                Ok(())
            }
            Err(err) => {
                tracing::warn!("move of card {} failed: {}; refetching board", card_id, err);
                self.refetch().await?;
                Err(err)
            }
        }
    }

    /// Optimistically append a card, swapping the provisional record for
    /// the canonical one when the server confirms.
    pub async fn add_card(
        &mut self,
        list_id: ListId,
        title: String,
        description: Option<String>,
    ) -> BoardResult<Card> {
        let visible_len = self
            .mirror
            .view()
            .list(list_id)
            .ok_or_else(|| BoardError::NotFound(format!("List {}", list_id)))?
            .cards
            .len();

        let mut provisional = Card::new(list_id, title.clone(), visible_len as i32);
        provisional.description = description.clone();
        let provisional_id = provisional.id;
        self.mirror.insert_provisional(provisional);
        let pending = self.begin();

        match self.api.create_card(list_id, title, description).await {
            Ok(card) => {
                if !self.is_stale(pending) {
                    self.mirror.replace_card(provisional_id, card.clone());
                }
                Ok(card)
            }
            Err(err) => {
                tracing::warn!("create card in list {} failed: {}", list_id, err);
                if !self.is_stale(pending) {
                    self.mirror.take_card(provisional_id);
                }
                Err(err)
            }
        }
    }

    /// Update a card; the mirror changes only once the server confirms.
    /// A card archived through update disappears from the visible board.
    pub async fn update_card(&mut self, id: CardId, updates: CardUpdate) -> BoardResult<Card> {
        let pending = self.begin();
        let card = self.api.update_card(id, updates).await?;
        if !self.is_stale(pending) {
            if card.archived {
                self.mirror.take_card(id);
            } else {
                self.mirror.replace_card(id, card.clone());
            }
        }
        Ok(card)
    }

    pub async fn archive_card(&mut self, id: CardId) -> BoardResult<()> {
        let pending = self.begin();
        self.api.archive_card(id).await?;
        if !self.is_stale(pending) {
            self.mirror.take_card(id);
        }
        Ok(())
    }

    pub async fn archive_all_in_list(&mut self, list_id: ListId) -> BoardResult<usize> {
        let pending = self.begin();
        let count = self.api.archive_all_in_list(list_id).await?;
        if !self.is_stale(pending) {
            self.mirror.clear_list(list_id);
        }
        Ok(count)
    }

    pub async fn add_list(&mut self, title: String) -> BoardResult<ListId> {
        let pending = self.begin();
        let list = self.api.create_list(self.board_id, title).await?;
        let id = list.id();
        if !self.is_stale(pending) {
            self.mirror.push_list(list);
        }
        Ok(id)
    }

    pub async fn rename_list(&mut self, id: ListId, title: String) -> BoardResult<()> {
        let pending = self.begin();
        let updates = ListUpdate { title: Some(title) };
        let list = self.api.update_list(id, updates).await?;
        if !self.is_stale(pending) {
            self.mirror
                .apply_list_update(id, ListUpdate { title: Some(list.title) });
        }
        Ok(())
    }

    pub async fn delete_list(&mut self, id: ListId) -> BoardResult<()> {
        let pending = self.begin();
        self.api.delete_list(id).await?;
        if !self.is_stale(pending) {
            self.mirror.remove_list(id);
        }
        Ok(())
    }
}
