//! Card Endpoints
//!
//! Card CRUD plus the dedicated move operation.

use reqwest::Method;
use serde::Serialize;

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::{Card, Priority};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct CreateCardArgs<'a> {
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    pub priority: Priority,
}

/// Full edit from the card detail dialog
///
/// `dueDate` is always sent so that `null` clears it.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCardArgs {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: Option<String>,
    pub labels: Vec<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MoveCardArgs<'a> {
    pub target_list_id: &'a str,
    pub new_position: i32,
}

// ========================
// Endpoints
// ========================

impl ApiClient {
    pub async fn create_card(&self, board_id: &str, list_id: &str, args: &CreateCardArgs<'_>) -> ApiResult<Card> {
        self.fetch(self.request(Method::POST, &["card", board_id, list_id, "cards"]).json(args), "card").await
    }

    pub async fn list_cards(&self, board_id: &str) -> ApiResult<Vec<Card>> {
        self.fetch(self.request(Method::GET, &["card", board_id, "cards"]), "cards").await
    }

    pub async fn update_card(&self, board_id: &str, card_id: &str, args: &UpdateCardArgs) -> ApiResult<Card> {
        self.fetch(self.request(Method::PUT, &["card", board_id, "cards", card_id]).json(args), "card").await
    }

    pub async fn move_card(&self, board_id: &str, card_id: &str, args: &MoveCardArgs<'_>) -> ApiResult<()> {
        log::info!("move card={} -> list={} pos={}", card_id, args.target_list_id, args.new_position);
        self.send(self.request(Method::POST, &["card", board_id, "cards", card_id, "move"]).json(args)).await
    }

    pub async fn delete_card(&self, board_id: &str, card_id: &str) -> ApiResult<()> {
        self.send(self.request(Method::DELETE, &["card", board_id, "cards", card_id])).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_move_payload_shape() {
        let args = MoveCardArgs { target_list_id: "l2", new_position: 3 };
        assert_eq!(serde_json::to_value(&args).unwrap(), json!({"targetListId": "l2", "newPosition": 3}));
    }

    #[test]
    fn test_update_sends_null_due_date() {
        let args = UpdateCardArgs {
            title: "Fix login".into(),
            description: String::new(),
            priority: Priority::Urgent,
            due_date: None,
            labels: vec!["bug".into()],
        };
        let value = serde_json::to_value(&args).unwrap();
        assert_eq!(value["priority"], "urgent");
        assert!(value["dueDate"].is_null());
        assert_eq!(value["labels"], json!(["bug"]));
    }

    #[test]
    fn test_create_card_omits_empty_description() {
        let args = CreateCardArgs { title: "New", description: None, priority: Priority::Medium };
        assert_eq!(serde_json::to_value(&args).unwrap(), json!({"title": "New", "priority": "medium"}));
    }
}
