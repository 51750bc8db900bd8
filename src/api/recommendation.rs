//! Recommendation Endpoint (read-only)

use reqwest::Method;

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::Recommendation;

impl ApiClient {
    pub async fn get_recommendations(&self, board_id: &str) -> ApiResult<Recommendation> {
        let builder = self.request(Method::GET, &["recommendations", "boards", board_id, "recommendations"]);
        self.fetch(builder, "recommendations").await
    }
}
