//! Contract implementations for the three Petstore resource families.
//!
//! Each family supplies one HTTP call per step plus the spot-checks the
//! suite has always made: identifying fields echo the create payload,
//! update responses reflect the requested change.

use anyhow::Result;
use serde_json::json;

use crate::client::{ApiClient, ApiResponse};
use crate::contract::CrudContract;
use crate::petstore::{Order, Pet, PetApi, StoreApi, User, UserApi, MISSING_ID};

/// Pet family: full five-point contract.
pub struct PetContract {
    payload: Pet,
    update: Pet,
}

impl Default for PetContract {
    fn default() -> Self {
        Self {
            payload: Pet::sample(),
            update: Pet::sample_update(),
        }
    }
}

impl CrudContract for PetContract {
    fn family(&self) -> &'static str {
        "pet"
    }

    fn create(&self, client: &ApiClient) -> Result<ApiResponse> {
        PetApi::new(client).create(&self.payload)
    }

    fn read(&self, client: &ApiClient) -> Result<ApiResponse> {
        PetApi::new(client).get(self.payload.id)
    }

    fn read_missing(&self, client: &ApiClient) -> Result<ApiResponse> {
        PetApi::new(client).get(MISSING_ID)
    }

    fn update(&self, client: &ApiClient) -> Option<Result<ApiResponse>> {
        Some(PetApi::new(client).update(&self.update))
    }

    fn delete(&self, client: &ApiClient) -> Result<ApiResponse> {
        PetApi::new(client).delete(self.payload.id)
    }

    fn read_checks(&self) -> Vec<(&'static str, serde_json::Value)> {
        vec![
            ("id", json!(self.payload.id)),
            ("name", json!(self.payload.name)),
        ]
    }

    fn update_checks(&self) -> Vec<(&'static str, serde_json::Value)> {
        vec![
            ("name", json!(self.update.name)),
            ("status", json!(self.update.status)),
        ]
    }
}

/// User family: addressed by username rather than numeric id.
pub struct UserContract {
    payload: User,
    update: User,
}

impl Default for UserContract {
    fn default() -> Self {
        Self {
            payload: User::sample(),
            update: User::sample_update(),
        }
    }
}

impl CrudContract for UserContract {
    fn family(&self) -> &'static str {
        "user"
    }

    fn create(&self, client: &ApiClient) -> Result<ApiResponse> {
        UserApi::new(client).create(&self.payload)
    }

    fn read(&self, client: &ApiClient) -> Result<ApiResponse> {
        UserApi::new(client).get(&self.payload.username)
    }

    fn read_missing(&self, client: &ApiClient) -> Result<ApiResponse> {
        // A username as unlikely to exist as the numeric sentinel.
        UserApi::new(client).get(&format!("no-such-user-{MISSING_ID}"))
    }

    fn update(&self, client: &ApiClient) -> Option<Result<ApiResponse>> {
        Some(UserApi::new(client).update(&self.payload.username, &self.update))
    }

    fn delete(&self, client: &ApiClient) -> Result<ApiResponse> {
        UserApi::new(client).delete(&self.payload.username)
    }

    fn read_checks(&self) -> Vec<(&'static str, serde_json::Value)> {
        vec![("username", json!(self.payload.username))]
    }
}

/// Order family: no update endpoint, so that step records a skip.
pub struct OrderContract {
    payload: Order,
}

impl Default for OrderContract {
    fn default() -> Self {
        Self {
            payload: Order::sample(),
        }
    }
}

impl CrudContract for OrderContract {
    fn family(&self) -> &'static str {
        "order"
    }

    fn create(&self, client: &ApiClient) -> Result<ApiResponse> {
        StoreApi::new(client).create_order(&self.payload)
    }

    fn read(&self, client: &ApiClient) -> Result<ApiResponse> {
        StoreApi::new(client).get_order(self.payload.id)
    }

    fn read_missing(&self, client: &ApiClient) -> Result<ApiResponse> {
        StoreApi::new(client).get_order(MISSING_ID)
    }

    fn update(&self, _client: &ApiClient) -> Option<Result<ApiResponse>> {
        None
    }

    fn delete(&self, client: &ApiClient) -> Result<ApiResponse> {
        StoreApi::new(client).delete_order(self.payload.id)
    }

    fn read_checks(&self) -> Vec<(&'static str, serde_json::Value)> {
        vec![
            ("id", json!(self.payload.id)),
            ("petId", json!(self.payload.pet_id)),
        ]
    }
}
