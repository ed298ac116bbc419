use std::collections::BTreeMap;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, ApiResponse};

/// Order lifecycle status as spelled on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Placed,
    Approved,
    Delivered,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,

    pub pet_id: i64,

    pub quantity: i32,

    pub ship_date: DateTime<Utc>,

    pub status: OrderStatus,

    pub complete: bool,
}

impl Order {
    /// The suite's canonical order payload, referencing the canonical pet.
    pub fn sample() -> Self {
        Self {
            id: 98765,
            pet_id: 12345,
            quantity: 1,
            ship_date: sample_ship_date(),
            status: OrderStatus::Placed,
            complete: false,
        }
    }
}

fn sample_ship_date() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-04-08T10:00:00Z")
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

/// Endpoint bindings for the Store family: orders plus the inventory view.
pub struct StoreApi<'a> {
    client: &'a ApiClient,
}

impl<'a> StoreApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /store/order`.
    pub fn create_order(&self, order: &Order) -> Result<ApiResponse> {
        self.client.post_json("/store/order", order)
    }

    /// `GET /store/order/{orderId}`.
    pub fn get_order(&self, id: i64) -> Result<ApiResponse> {
        self.client.get(&format!("/store/order/{id}"))
    }

    /// `DELETE /store/order/{orderId}`.
    pub fn delete_order(&self, id: i64) -> Result<ApiResponse> {
        self.client.delete(&format!("/store/order/{id}"))
    }

    /// `GET /store/inventory`.
    pub fn inventory(&self) -> Result<ApiResponse> {
        self.client.get("/store/inventory")
    }

    /// Inventory parsed as the status → count mapping.
    ///
    /// The mapping's specific counts are never part of the contract - the
    /// shared demo instance is mutated by every other client - only its
    /// shape is.
    pub fn inventory_counts(&self) -> Result<BTreeMap<String, i64>> {
        self.inventory()?.json()
    }
}
