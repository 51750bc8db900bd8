//! Card Move Resolution
//!
//! Turns a finished drag into at most one move request, then applies the
//! server's answer. Positions are never renumbered locally: after a move
//! succeeds the whole board is reloaded and the server's order wins.

use async_trait::async_trait;
use leptos_dragdrop::DropTarget;

use crate::api::{ApiClient, MoveCardArgs};
use crate::error::ApiResult;
use crate::models::BoardSnapshot;
use crate::notify::{Notify, Toast};

/// Where a dragged card should go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    pub card_id: String,
    pub target_list_id: String,
    pub new_position: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Server accepted the move and the snapshot now holds its state
    Moved,
    /// Server rejected the move; snapshot untouched
    Failed,
    /// Move went through but the follow-up reload did not; snapshot untouched
    ReloadFailed,
}

/// Server operations a move needs
#[async_trait(?Send)]
pub trait MoveBackend {
    async fn move_card(&self, board_id: &str, request: &MoveRequest) -> ApiResult<()>;
    async fn load_board(&self, board_id: &str) -> ApiResult<BoardSnapshot>;
}

#[async_trait(?Send)]
impl MoveBackend for ApiClient {
    async fn move_card(&self, board_id: &str, request: &MoveRequest) -> ApiResult<()> {
        let args = MoveCardArgs {
            target_list_id: &request.target_list_id,
            new_position: request.new_position,
        };
        ApiClient::move_card(self, board_id, &request.card_id, &args).await
    }

    async fn load_board(&self, board_id: &str) -> ApiResult<BoardSnapshot> {
        ApiClient::load_board(self, board_id).await
    }
}

/// Resolve a drop into a move, or `None` when nothing should be sent.
///
/// - no target, or the card dropped on itself: nothing
/// - on a list container: append (position = that list's current card count)
/// - on another card: take that card's list and position
/// - same list and position as now: nothing
pub fn resolve_move(snapshot: &BoardSnapshot, dragged_id: &str, target: Option<&DropTarget>) -> Option<MoveRequest> {
    let target = target?;
    if target.id() == dragged_id {
        return None;
    }
    let card = snapshot.cards.iter().find(|c| c.id == dragged_id)?;

    let (target_list_id, new_position) = match target {
        DropTarget::List(list_id) => {
            let list = snapshot.lists.iter().find(|l| l.id == *list_id)?;
            let count = snapshot.cards.iter().filter(|c| c.list_id == list.id).count();
            (list.id.clone(), count as i32)
        }
        DropTarget::Card(over_id) => {
            let over = snapshot.cards.iter().find(|c| c.id == *over_id)?;
            (over.list_id.clone(), over.position)
        }
    };

    if target_list_id == card.list_id && new_position == card.position {
        log::debug!("drop of {} is a no-op", dragged_id);
        return None;
    }

    Some(MoveRequest {
        card_id: card.id.clone(),
        target_list_id,
        new_position,
    })
}

/// Send one move, then reload once. On any failure the snapshot keeps its
/// pre-drag contents and exactly one error toast is raised.
pub async fn execute_move<B, N>(backend: &B, notifier: &N, snapshot: &mut BoardSnapshot, request: &MoveRequest) -> MoveOutcome
where
    B: MoveBackend + ?Sized,
    N: Notify + ?Sized,
{
    let board_id = snapshot.board.id.clone();

    if let Err(e) = backend.move_card(&board_id, request).await {
        log::error!("move of card {} failed: {}", request.card_id, e);
        notifier.notify(Toast::error("Could not move card."));
        return MoveOutcome::Failed;
    }

    match backend.load_board(&board_id).await {
        Ok(fresh) => {
            *snapshot = fresh;
            notifier.notify(Toast::success("Card moved", "Card has been moved successfully."));
            MoveOutcome::Moved
        }
        Err(e) => {
            log::error!("reload after move failed: {}", e);
            notifier.notify(Toast::error("Could not load board data."));
            MoveOutcome::ReloadFailed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::{Board, Card, List, Member};
    use crate::notify::ToastKind;
    use std::cell::{Cell, RefCell};

    fn card(id: &str, list: &str, position: i32) -> Card {
        Card {
            id: id.into(),
            title: format!("Card {}", id),
            description: None,
            priority: None,
            labels: vec![],
            assignees: vec![],
            due_date: None,
            position,
            list_id: list.into(),
            meta_data: None,
        }
    }

    fn list(id: &str, position: i32) -> List {
        List { id: id.into(), title: id.to_uppercase(), position, board_id: "b1".into() }
    }

    fn snapshot() -> BoardSnapshot {
        BoardSnapshot {
            board: Board {
                id: "b1".into(),
                title: "Sprint".into(),
                description: None,
                is_private: false,
                owner: Member { id: "u1".into(), name: "Ana".into(), email: "ana@example.com".into() },
                members: vec![],
                created_at: None,
            },
            lists: vec![list("todo", 0), list("doing", 1), list("done", 2)],
            cards: vec![
                card("a", "todo", 0),
                card("b", "todo", 1),
                card("c", "todo", 2),
                card("d", "doing", 0),
            ],
        }
    }

    struct MockBackend {
        fail_move: bool,
        fail_reload: bool,
        moves: RefCell<Vec<MoveRequest>>,
        reloads: Cell<usize>,
        reloaded: BoardSnapshot,
    }

    impl MockBackend {
        fn new(fail_move: bool, fail_reload: bool) -> Self {
            let mut reloaded = snapshot();
            reloaded.cards[0].list_id = "doing".into();
            Self { fail_move, fail_reload, moves: RefCell::new(vec![]), reloads: Cell::new(0), reloaded }
        }
    }

    #[async_trait(?Send)]
    impl MoveBackend for MockBackend {
        async fn move_card(&self, _board_id: &str, request: &MoveRequest) -> ApiResult<()> {
            self.moves.borrow_mut().push(request.clone());
            if self.fail_move {
                Err(ApiError::Status { status: 500, message: "boom".into() })
            } else {
                Ok(())
            }
        }

        async fn load_board(&self, _board_id: &str) -> ApiResult<BoardSnapshot> {
            self.reloads.set(self.reloads.get() + 1);
            if self.fail_reload {
                Err(ApiError::Unauthorized)
            } else {
                Ok(self.reloaded.clone())
            }
        }
    }

    #[derive(Default)]
    struct MockNotifier {
        toasts: RefCell<Vec<Toast>>,
    }

    impl Notify for MockNotifier {
        fn notify(&self, toast: Toast) {
            self.toasts.borrow_mut().push(toast);
        }
    }

    #[test]
    fn test_drop_on_own_position_is_noop() {
        let mut snap = snapshot();
        // Onto itself
        assert_eq!(resolve_move(&snap, "b", Some(&DropTarget::Card("b".into()))), None);
        // Nowhere
        assert_eq!(resolve_move(&snap, "a", None), None);

        // Alone in its list at the slot an append would give it
        snap.cards.push(card("e", "done", 1));
        assert_eq!(resolve_move(&snap, "e", Some(&DropTarget::List("done".into()))), None);
    }

    #[test]
    fn test_drop_on_own_list_counts_itself() {
        let snap = snapshot();
        // The list's card count includes the dragged card
        assert_eq!(
            resolve_move(&snap, "d", Some(&DropTarget::List("doing".into()))),
            Some(MoveRequest { card_id: "d".into(), target_list_id: "doing".into(), new_position: 1 })
        );
    }

    #[test]
    fn test_drop_on_list_appends() {
        let snap = snapshot();
        let req = resolve_move(&snap, "a", Some(&DropTarget::List("doing".into()))).unwrap();
        assert_eq!(req, MoveRequest { card_id: "a".into(), target_list_id: "doing".into(), new_position: 1 });

        let req = resolve_move(&snap, "d", Some(&DropTarget::List("done".into()))).unwrap();
        assert_eq!(req.target_list_id, "done");
        assert_eq!(req.new_position, 0);
    }

    #[test]
    fn test_drop_on_card_takes_its_place() {
        let snap = snapshot();
        let req = resolve_move(&snap, "d", Some(&DropTarget::Card("b".into()))).unwrap();
        assert_eq!(req.target_list_id, "todo");
        assert_eq!(req.new_position, 1);

        // Within the same list
        let req = resolve_move(&snap, "c", Some(&DropTarget::Card("a".into()))).unwrap();
        assert_eq!(req.target_list_id, "todo");
        assert_eq!(req.new_position, 0);
    }

    #[test]
    fn test_unknown_ids_resolve_to_nothing() {
        let snap = snapshot();
        assert_eq!(resolve_move(&snap, "zz", Some(&DropTarget::List("todo".into()))), None);
        assert_eq!(resolve_move(&snap, "a", Some(&DropTarget::List("archive".into()))), None);
        assert_eq!(resolve_move(&snap, "a", Some(&DropTarget::Card("zz".into()))), None);
    }

    #[tokio::test]
    async fn test_failed_move_keeps_state_and_notifies_once() {
        let backend = MockBackend::new(true, false);
        let notifier = MockNotifier::default();
        let mut snap = snapshot();
        let before = snap.clone();
        let req = resolve_move(&snap, "a", Some(&DropTarget::List("done".into()))).unwrap();

        let outcome = execute_move(&backend, &notifier, &mut snap, &req).await;

        assert_eq!(outcome, MoveOutcome::Failed);
        assert_eq!(snap, before);
        assert_eq!(backend.reloads.get(), 0);
        let toasts = notifier.toasts.borrow();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, ToastKind::Error);
    }

    #[tokio::test]
    async fn test_successful_move_reloads_once() {
        let backend = MockBackend::new(false, false);
        let notifier = MockNotifier::default();
        let mut snap = snapshot();
        let req = resolve_move(&snap, "a", Some(&DropTarget::Card("d".into()))).unwrap();

        let outcome = execute_move(&backend, &notifier, &mut snap, &req).await;

        assert_eq!(outcome, MoveOutcome::Moved);
        assert_eq!(backend.moves.borrow().as_slice(), &[req]);
        assert_eq!(backend.reloads.get(), 1);
        assert_eq!(snap, backend.reloaded);
        assert_eq!(notifier.toasts.borrow()[0].kind, ToastKind::Success);
    }

    #[tokio::test]
    async fn test_reload_failure_keeps_prior_state() {
        let backend = MockBackend::new(false, true);
        let notifier = MockNotifier::default();
        let mut snap = snapshot();
        let before = snap.clone();
        let req = resolve_move(&snap, "b", Some(&DropTarget::List("done".into()))).unwrap();

        let outcome = execute_move(&backend, &notifier, &mut snap, &req).await;

        assert_eq!(outcome, MoveOutcome::ReloadFailed);
        assert_eq!(snap, before);
        assert_eq!(notifier.toasts.borrow().len(), 1);
    }
}
