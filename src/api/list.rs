//! List Endpoints

use reqwest::Method;
use serde::Serialize;

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::List;

#[derive(Serialize)]
pub struct CreateListArgs<'a> {
    pub title: &'a str,
}

#[derive(Serialize, Default)]
pub struct UpdateListArgs<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
}

impl ApiClient {
    pub async fn create_list(&self, board_id: &str, args: &CreateListArgs<'_>) -> ApiResult<List> {
        self.fetch(self.request(Method::POST, &["list", "boards", board_id, "lists"]).json(args), "list").await
    }

    pub async fn list_lists(&self, board_id: &str) -> ApiResult<Vec<List>> {
        self.fetch(self.request(Method::GET, &["list", "boards", board_id, "lists"]), "lists").await
    }

    pub async fn update_list(&self, board_id: &str, list_id: &str, args: &UpdateListArgs<'_>) -> ApiResult<List> {
        self.fetch(self.request(Method::PUT, &["list", board_id, "lists", list_id]).json(args), "list").await
    }

    pub async fn delete_list(&self, board_id: &str, list_id: &str) -> ApiResult<()> {
        self.send(self.request(Method::DELETE, &["list", board_id, "lists", list_id])).await
    }
}
