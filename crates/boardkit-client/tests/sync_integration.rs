//! Drives the synchronizer against the real service and allocator,
//! checking that the optimistic mirror and the authoritative store agree
//! after confirmed moves and after rollbacks.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use boardkit_client::{BoardApi, BoardSynchronizer, DropTarget, MoveCardRequest};
use boardkit_core::{BoardError, BoardResult};
use boardkit_domain::{
    BoardId, BoardOperations, BoardView, Card, CardId, CardUpdate, List, ListId, ListUpdate,
    ListView, UserId,
};
use boardkit_server::BoardService;
use boardkit_store::MemoryStore;

/// In-process transport: the session user is bound at construction, the
/// way a cookie-carrying HTTP client binds one.
struct LocalApi {
    service: BoardService,
    user: UserId,
    fail_moves: AtomicBool,
}

#[async_trait]
impl BoardApi for LocalApi {
    async fn fetch_board(&self, id: BoardId) -> BoardResult<BoardView> {
        self.service.get_board(self.user, id).await
    }

    async fn move_card(&self, id: CardId, request: MoveCardRequest) -> BoardResult<Card> {
        if self.fail_moves.load(Ordering::SeqCst) {
            return Err(BoardError::Network("simulated outage".to_string()));
        }
        self.service
            .move_card(self.user, id, request.list_id, request.position)
            .await
    }

    async fn create_card(
        &self,
        list_id: ListId,
        title: String,
        description: Option<String>,
    ) -> BoardResult<Card> {
        self.service
            .create_card(self.user, list_id, title, description)
            .await
    }

    async fn update_card(&self, id: CardId, updates: CardUpdate) -> BoardResult<Card> {
        self.service.update_card(self.user, id, updates).await
    }

    async fn archive_card(&self, id: CardId) -> BoardResult<Card> {
        self.service.archive_card(self.user, id).await
    }

    async fn archive_all_in_list(&self, list_id: ListId) -> BoardResult<usize> {
        self.service.archive_all_in_list(self.user, list_id).await
    }

    async fn create_list(&self, board_id: BoardId, title: String) -> BoardResult<ListView> {
        self.service.create_list(self.user, board_id, title).await
    }

    async fn update_list(&self, id: ListId, updates: ListUpdate) -> BoardResult<List> {
        self.service.update_list(self.user, id, updates).await
    }

    async fn delete_list(&self, id: ListId) -> BoardResult<()> {
        self.service.delete_list(self.user, id).await
    }
}

async fn seeded_board(api: &LocalApi) -> (BoardId, Vec<ListId>) {
    let board = api
        .service
        .create_board(api.user, "Project".to_string())
        .await
        .unwrap();
    let mut lists = Vec::new();
    for (title, cards) in [("L1", vec!["T1", "T2", "T3"]), ("L2", vec!["U1"])] {
        let list = api
            .service
            .create_list(api.user, board.id, title.to_string())
            .await
            .unwrap();
        for card in cards {
            api.service
                .create_card(api.user, list.id(), card.to_string(), None)
                .await
                .unwrap();
        }
        lists.push(list.id());
    }
    (board.id, lists)
}

fn local_api() -> Arc<LocalApi> {
    Arc::new(LocalApi {
        service: BoardService::new(Arc::new(MemoryStore::new())),
        user: uuid::Uuid::new_v4(),
        fail_moves: AtomicBool::new(false),
    })
}

fn snapshot(view: &BoardView) -> Vec<Vec<(String, i32)>> {
    view.lists
        .iter()
        .map(|l| {
            l.cards
                .iter()
                .map(|c| (c.title.clone(), c.position))
                .collect()
        })
        .collect()
}

#[tokio::test]
async fn test_confirmed_drag_matches_authoritative_state() {
    let api = local_api();
    let (board_id, lists) = seeded_board(&api).await;

    let mut sync = BoardSynchronizer::connect(api.clone(), board_id).await.unwrap();
    let t1 = sync.view().lists[0].cards[0].id;

    // Drag T1 to the end of L2.
    sync.drag_end(t1, DropTarget::OnListEnd(lists[1])).await.unwrap();

    let mirror_titles: Vec<Vec<&str>> = sync
        .view()
        .lists
        .iter()
        .map(|l| l.cards.iter().map(|c| c.title.as_str()).collect())
        .collect();
    assert_eq!(mirror_titles, vec![vec!["T2", "T3"], vec!["U1", "T1"]]);

    // The authoritative view agrees, with dense positions.
    let canonical = api.service.get_board(api.user, board_id).await.unwrap();
    assert_eq!(
        snapshot(&canonical),
        vec![
            vec![("T2".to_string(), 0), ("T3".to_string(), 1)],
            vec![("U1".to_string(), 0), ("T1".to_string(), 1)],
        ]
    );
}

#[tokio::test]
async fn test_sequence_of_drags_keeps_positions_dense() {
    let api = local_api();
    let (board_id, lists) = seeded_board(&api).await;

    let mut sync = BoardSynchronizer::connect(api.clone(), board_id).await.unwrap();

    let t2 = sync.view().lists[0].cards[1].id;
    let u1 = sync.view().lists[1].cards[0].id;
    let t1 = sync.view().lists[0].cards[0].id;

    sync.drag_end(t2, DropTarget::OnList(lists[1])).await.unwrap();
    sync.drag_end(u1, DropTarget::OnCard(t1)).await.unwrap();
    sync.drag_end(t1, DropTarget::OnListEnd(lists[0])).await.unwrap();

    let canonical = api.service.get_board(api.user, board_id).await.unwrap();
    for list in &canonical.lists {
        for (expect, card) in list.cards.iter().enumerate() {
            assert_eq!(card.position, expect as i32, "gap in {}", list.list.title);
        }
    }

    // Mirror and authoritative state tell the same story.
    let mirror = sync.view();
    assert_eq!(snapshot(mirror), snapshot(&canonical));
}

#[tokio::test]
async fn test_failed_drag_recovers_to_pristine_state() {
    let api = local_api();
    let (board_id, lists) = seeded_board(&api).await;

    let mut sync = BoardSynchronizer::connect(api.clone(), board_id).await.unwrap();
    let before = snapshot(sync.view());
    let t3 = sync.view().lists[0].cards[2].id;

    api.fail_moves.store(true, Ordering::SeqCst);
    let err = sync
        .drag_end(t3, DropTarget::OnListEnd(lists[1]))
        .await
        .unwrap_err();
    assert!(matches!(err, BoardError::Network(_)));

    // After recovery the mirror equals a fresh fetch, as if the drag had
    // never been attempted.
    let canonical = api.service.get_board(api.user, board_id).await.unwrap();
    assert_eq!(snapshot(sync.view()), snapshot(&canonical));
    assert_eq!(snapshot(sync.view()), before);
}

#[tokio::test]
async fn test_add_card_through_synchronizer_appends() {
    let api = local_api();
    let (board_id, lists) = seeded_board(&api).await;

    let mut sync = BoardSynchronizer::connect(api.clone(), board_id).await.unwrap();
    let created = sync
        .add_card(lists[1], "U2".to_string(), Some("notes".to_string()))
        .await
        .unwrap();
    assert_eq!(created.position, 1);

    let canonical = api.service.get_board(api.user, board_id).await.unwrap();
    assert_eq!(snapshot(sync.view()), snapshot(&canonical));
}

#[tokio::test]
async fn test_archive_all_then_refetch_agrees() {
    let api = local_api();
    let (board_id, lists) = seeded_board(&api).await;

    let mut sync = BoardSynchronizer::connect(api.clone(), board_id).await.unwrap();
    let archived = sync.archive_all_in_list(lists[0]).await.unwrap();
    assert_eq!(archived, 3);
    assert!(sync.view().lists[0].cards.is_empty());

    let canonical = api.service.get_board(api.user, board_id).await.unwrap();
    assert_eq!(snapshot(sync.view()), snapshot(&canonical));
}
