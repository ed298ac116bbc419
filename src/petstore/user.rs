use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, ApiResponse};

/// Marker the login endpoint embeds in its plain-text session message.
pub const LOGIN_SESSION_MARKER: &str = "logged in user session";

/// Users are addressed by `username`, not by numeric id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,

    pub username: String,

    pub first_name: String,

    pub last_name: String,

    pub email: String,

    pub password: String,

    pub phone: String,
}

impl User {
    /// The suite's canonical user payload.
    pub fn sample() -> Self {
        Self {
            id: 54321,
            username: "testuser".to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: "test@example.com".to_string(),
            password: "123456".to_string(),
            phone: "123-456-7890".to_string(),
        }
    }

    /// The canonical user with its contact fields changed.
    pub fn sample_update() -> Self {
        Self {
            id: 54321,
            username: "testuser".to_string(),
            first_name: "Updated".to_string(),
            last_name: "User".to_string(),
            email: "updated@example.com".to_string(),
            password: "654321".to_string(),
            phone: "098-765-4321".to_string(),
        }
    }
}

/// Endpoint bindings for the User family.
pub struct UserApi<'a> {
    client: &'a ApiClient,
}

impl<'a> UserApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /user`.
    pub fn create(&self, user: &User) -> Result<ApiResponse> {
        self.client.post_json("/user", user)
    }

    /// `GET /user/{username}`.
    pub fn get(&self, username: &str) -> Result<ApiResponse> {
        self.client.get(&user_path(username))
    }

    /// `PUT /user/{username}` - the path names the user being replaced.
    pub fn update(&self, username: &str, user: &User) -> Result<ApiResponse> {
        self.client.put_json(&user_path(username), user)
    }

    /// `DELETE /user/{username}`.
    pub fn delete(&self, username: &str) -> Result<ApiResponse> {
        self.client.delete(&user_path(username))
    }

    /// `GET /user/login?username&password`.
    ///
    /// The response body is a plain string, not a structured record; success
    /// is judged on the status code plus the [`LOGIN_SESSION_MARKER`]
    /// substring.
    pub fn login(&self, username: &str, password: &str) -> Result<ApiResponse> {
        self.client
            .get_with_query("/user/login", &[("username", username), ("password", password)])
    }
}

/// Usernames land in the path; encode anything outside the unreserved set.
fn user_path(username: &str) -> String {
    format!("/user/{}", urlencoding::encode(username))
}
