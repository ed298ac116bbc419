use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, ApiResponse};

/// Pet lifecycle status as the service spells it on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    Available,
    Pending,
    Sold,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pet {
    pub id: i64,

    pub name: String,

    pub status: PetStatus,
}

impl Pet {
    /// The suite's canonical pet payload.
    pub fn sample() -> Self {
        Self {
            id: 12345,
            name: "TestDog".to_string(),
            status: PetStatus::Available,
        }
    }

    /// The canonical pet with its mutable fields changed.
    pub fn sample_update() -> Self {
        Self {
            id: 12345,
            name: "UpdatedDog".to_string(),
            status: PetStatus::Sold,
        }
    }
}

/// Endpoint bindings for the Pet family.
pub struct PetApi<'a> {
    client: &'a ApiClient,
}

impl<'a> PetApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /pet` - create or replace a pet.
    pub fn create(&self, pet: &Pet) -> Result<ApiResponse> {
        self.client.post_json("/pet", pet)
    }

    /// `GET /pet/{petId}`.
    pub fn get(&self, id: i64) -> Result<ApiResponse> {
        self.client.get(&format!("/pet/{id}"))
    }

    /// `PUT /pet` - the pet carries its own identifier.
    pub fn update(&self, pet: &Pet) -> Result<ApiResponse> {
        self.client.put_json("/pet", pet)
    }

    /// `DELETE /pet/{petId}`.
    pub fn delete(&self, id: i64) -> Result<ApiResponse> {
        self.client.delete(&format!("/pet/{id}"))
    }
}
