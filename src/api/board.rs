//! Board Endpoints
//!
//! CRUD for boards, member invitation, and the combined board snapshot load.

use reqwest::Method;
use serde::Serialize;

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::{Board, BoardSnapshot};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBoardArgs<'a> {
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    pub is_private: bool,
}

#[derive(Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBoardArgs<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
}

#[derive(Serialize)]
struct InviteArgs<'a> {
    email: &'a str,
}

// ========================
// Endpoints
// ========================

impl ApiClient {
    pub async fn create_board(&self, args: &CreateBoardArgs<'_>) -> ApiResult<Board> {
        self.fetch(self.request(Method::POST, &["board", "boards"]).json(args), "board").await
    }

    pub async fn list_boards(&self) -> ApiResult<Vec<Board>> {
        self.fetch(self.request(Method::GET, &["board", "boards"]), "boards").await
    }

    pub async fn get_board(&self, board_id: &str) -> ApiResult<Board> {
        self.fetch(self.request(Method::GET, &["board", "boards", board_id]), "board").await
    }

    pub async fn update_board(&self, board_id: &str, args: &UpdateBoardArgs<'_>) -> ApiResult<Board> {
        self.fetch(self.request(Method::PUT, &["board", "boards", board_id]).json(args), "board").await
    }

    pub async fn delete_board(&self, board_id: &str) -> ApiResult<()> {
        self.send(self.request(Method::DELETE, &["board", "boards", board_id])).await
    }

    pub async fn invite_member(&self, board_id: &str, email: &str) -> ApiResult<()> {
        let builder = self.request(Method::POST, &["board", "boards", board_id, "members"]);
        self.send(builder.json(&InviteArgs { email })).await
    }

    /// Board, lists and cards fetched concurrently; fails if any one fails
    pub async fn load_board(&self, board_id: &str) -> ApiResult<BoardSnapshot> {
        let (board, lists, cards) = futures::try_join!(
            self.get_board(board_id),
            self.list_lists(board_id),
            self.list_cards(board_id),
        )?;
        log::debug!("loaded board {}: {} lists, {} cards", board_id, lists.len(), cards.len());
        Ok(BoardSnapshot { board, lists, cards })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_board_payload() {
        let args = CreateBoardArgs { title: "Launch", description: None, is_private: true };
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            serde_json::json!({"title": "Launch", "isPrivate": true})
        );
    }

    #[test]
    fn test_update_board_sends_only_changed_fields() {
        let args = UpdateBoardArgs { title: Some("Renamed"), ..Default::default() };
        assert_eq!(serde_json::to_value(&args).unwrap(), serde_json::json!({"title": "Renamed"}));
    }
}
