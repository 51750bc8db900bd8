//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Board, BoardSnapshot, Card, List};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Boards visible to the signed-in user (dashboard)
    pub boards: Vec<Board>,
    /// Whether `boards` has been fetched at least once this session
    pub boards_loaded: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Entities with a server-assigned id
pub trait HasId {
    fn id(&self) -> &str;
}

impl HasId for Board {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for List {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for Card {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Append unless an entity with the same id is already present
pub fn append_unique<T: HasId>(items: &mut Vec<T>, item: T) -> bool {
    if items.iter().any(|existing| existing.id() == item.id()) {
        return false;
    }
    items.push(item);
    true
}

// ========================
// Store Helper Functions
// ========================

/// Add a freshly created board to the dashboard
pub fn store_add_board(store: &AppStore, board: Board) {
    append_unique(&mut *store.boards().write(), board);
}

/// Replace a board in the store by ID
pub fn store_update_board(store: &AppStore, updated: Board) {
    if let Some(board) = store.boards().write().iter_mut().find(|b| b.id == updated.id) {
        *board = updated;
    }
}

/// Remove a board from the store by ID
pub fn store_remove_board(store: &AppStore, board_id: &str) {
    store.boards().write().retain(|b| b.id != board_id);
}

/// Drop everything that belongs to the previous user
pub fn store_reset(store: &AppStore) {
    store.boards().write().clear();
    store.boards_loaded().set(false);
}

// ========================
// Board Snapshot Helpers
// ========================

impl BoardSnapshot {
    /// Show a newly created list without refetching the board
    pub fn add_list(&mut self, list: List) -> bool {
        append_unique(&mut self.lists, list)
    }

    /// Show a newly created card without refetching the board
    pub fn add_card(&mut self, card: Card) -> bool {
        append_unique(&mut self.cards, card)
    }

    pub fn remove_list(&mut self, list_id: &str) {
        self.lists.retain(|l| l.id != list_id);
        self.cards.retain(|c| c.list_id != list_id);
    }

    pub fn rename_list(&mut self, updated: List) {
        if let Some(list) = self.lists.iter_mut().find(|l| l.id == updated.id) {
            *list = updated;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Member;

    fn board(id: &str) -> Board {
        Board {
            id: id.into(),
            title: format!("Board {}", id),
            description: None,
            is_private: false,
            owner: Member { id: "u1".into(), name: "Ana".into(), email: String::new() },
            members: vec![],
            created_at: None,
        }
    }

    fn snapshot() -> BoardSnapshot {
        BoardSnapshot {
            board: board("b1"),
            lists: vec![List { id: "l1".into(), title: "To Do".into(), position: 0, board_id: "b1".into() }],
            cards: vec![],
        }
    }

    #[test]
    fn test_append_unique_appends_at_end() {
        let mut boards = vec![board("b1")];
        assert!(append_unique(&mut boards, board("b2")));
        assert_eq!(boards.last().unwrap().id, "b2");
        // Same id twice is ignored
        assert!(!append_unique(&mut boards, board("b2")));
        assert_eq!(boards.len(), 2);
    }

    #[test]
    fn test_snapshot_add_list_and_card() {
        let mut snap = snapshot();
        assert!(snap.add_list(List { id: "l2".into(), title: "Done".into(), position: 1, board_id: "b1".into() }));
        assert_eq!(snap.lists.len(), 2);

        let card = Card {
            id: "c1".into(),
            title: "Only a title".into(),
            description: None,
            priority: None,
            labels: vec![],
            assignees: vec![],
            due_date: None,
            position: 0,
            list_id: "l2".into(),
            meta_data: None,
        };
        assert!(snap.add_card(card));
        assert_eq!(snap.cards_in("l2").len(), 1);
    }

    #[test]
    fn test_remove_list_drops_its_cards() {
        let mut snap = snapshot();
        snap.cards.push(Card {
            id: "c1".into(),
            title: "t".into(),
            description: None,
            priority: None,
            labels: vec![],
            assignees: vec![],
            due_date: None,
            position: 0,
            list_id: "l1".into(),
            meta_data: None,
        });
        snap.remove_list("l1");
        assert!(snap.lists.is_empty());
        assert!(snap.cards.is_empty());
    }
}
