//! Frontend Models
//!
//! Data structures matching API payloads.
//!
//! The API is not consistent about identifier fields: documents may carry
//! `id` or `_id`, and references may be `listId`/`list` or `boardId`/`board`.
//! Aliases fold them into one field here so nothing downstream has to care.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A user as embedded in boards and cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_private: bool,
    pub owner: Member,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub position: i32,
    #[serde(alias = "board", default)]
    pub board_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[serde(alias = "Low", alias = "LOW")]
    Low,
    #[serde(alias = "Medium", alias = "MEDIUM")]
    Medium,
    #[serde(alias = "High", alias = "HIGH")]
    High,
    #[serde(alias = "Urgent", alias = "URGENT")]
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Priority::Low, Priority::Medium, Priority::High, Priority::Urgent];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub assignees: Vec<Member>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub position: i32,
    #[serde(alias = "list")]
    pub list_id: String,
    #[serde(default)]
    pub meta_data: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DueDateSuggestion {
    pub card_id: String,
    pub suggested_due: String,
    pub reason: String,
    pub card_title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveSuggestion {
    pub card_id: String,
    pub suggested_list_id: String,
    pub reason: String,
    pub card_title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRef {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedGroup {
    pub cards: Vec<CardRef>,
    pub reason: String,
}

/// Server-computed suggestions for a board (read-only)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(default)]
    pub due_date_suggestions: Vec<DueDateSuggestion>,
    #[serde(default)]
    pub move_suggestions: Vec<MoveSuggestion>,
    #[serde(default)]
    pub related_groups: Vec<RelatedGroup>,
}

impl Recommendation {
    pub fn is_empty(&self) -> bool {
        self.due_date_suggestions.is_empty()
            && self.move_suggestions.is_empty()
            && self.related_groups.is_empty()
    }
}

/// Signed-in user plus bearer token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: Member,
}

/// Everything the board view renders, loaded together
#[derive(Debug, Clone, PartialEq)]
pub struct BoardSnapshot {
    pub board: Board,
    pub lists: Vec<List>,
    pub cards: Vec<Card>,
}

impl BoardSnapshot {
    /// Cards of one list in display order
    pub fn cards_in(&self, list_id: &str) -> Vec<Card> {
        let mut cards: Vec<Card> = self.cards.iter().filter(|c| c.list_id == list_id).cloned().collect();
        cards.sort_by_key(|c| c.position);
        cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_card_accepts_mongo_style_ids() {
        let card: Card = serde_json::from_value(json!({
            "_id": "c1",
            "title": "Write docs",
            "priority": "High",
            "position": 2,
            "list": "l1"
        }))
        .unwrap();
        assert_eq!(card.id, "c1");
        assert_eq!(card.list_id, "l1");
        assert_eq!(card.priority, Some(Priority::High));
        assert!(card.labels.is_empty());
    }

    #[test]
    fn test_card_serializes_canonical_names() {
        let card: Card = serde_json::from_value(json!({
            "id": "c1", "title": "t", "listId": "l1", "dueDate": "2024-05-01", "metaData": {"points": 3}
        }))
        .unwrap();
        let out = serde_json::to_value(&card).unwrap();
        assert_eq!(out["listId"], "l1");
        assert_eq!(out["dueDate"], "2024-05-01");
        assert_eq!(out["metaData"]["points"], 3);
        assert!(out.get("_id").is_none());
    }

    #[test]
    fn test_board_with_embedded_owner() {
        let board: Board = serde_json::from_value(json!({
            "_id": "b1",
            "title": "Roadmap",
            "isPrivate": true,
            "owner": {"_id": "u1", "name": "Ana", "email": "ana@example.com"},
            "createdAt": "2024-01-01T00:00:00.000Z"
        }))
        .unwrap();
        assert!(board.is_private);
        assert_eq!(board.owner.id, "u1");
        assert!(board.members.is_empty());
    }

    #[test]
    fn test_partial_recommendation() {
        let rec: Recommendation = serde_json::from_value(json!({
            "moveSuggestions": [
                {"cardId": "c1", "suggestedListId": "l2", "reason": "Done", "cardTitle": "Ship"}
            ]
        }))
        .unwrap();
        assert!(!rec.is_empty());
        assert!(rec.due_date_suggestions.is_empty());
        assert!(Recommendation::default().is_empty());
    }

    #[test]
    fn test_priority_wire_format() {
        let p: Priority = serde_json::from_value(json!("URGENT")).unwrap();
        assert_eq!(p, Priority::Urgent);
        assert_eq!(serde_json::to_value(Priority::High).unwrap(), json!("high"));
        assert!(serde_json::from_value::<Priority>(json!("later")).is_err());
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn test_cards_in_sorted_by_position() {
        let card = |id: &str, list: &str, position: i32| Card {
            id: id.into(),
            title: id.into(),
            description: None,
            priority: None,
            labels: vec![],
            assignees: vec![],
            due_date: None,
            position,
            list_id: list.into(),
            meta_data: None,
        };
        let snapshot = BoardSnapshot {
            board: Board {
                id: "b".into(),
                title: "B".into(),
                description: None,
                is_private: false,
                owner: Member { id: "u".into(), name: "U".into(), email: String::new() },
                members: vec![],
                created_at: None,
            },
            lists: vec![],
            cards: vec![card("c2", "l1", 1), card("c3", "l2", 0), card("c1", "l1", 0)],
        };
        let ids: Vec<String> = snapshot.cards_in("l1").into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["c1", "c2"]);
    }
}
