//! Auth Endpoints
//!
//! Registration and sign-in. Token lifetime is the server's business.

use reqwest::Method;
use serde::Serialize;

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::Session;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct RegisterArgs<'a> {
    pub email: &'a str,
    pub name: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct LoginArgs<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

// ========================
// Endpoints
// ========================

impl ApiClient {
    pub async fn register(&self, args: &RegisterArgs<'_>) -> ApiResult<()> {
        self.send(self.request(Method::POST, &["auth", "register"]).json(args)).await
    }

    pub async fn login(&self, args: &LoginArgs<'_>) -> ApiResult<Session> {
        self.fetch(self.request(Method::POST, &["auth", "login"]).json(args), "session").await
    }
}
