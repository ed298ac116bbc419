//! # Fixture Module
//!
//! Scoped fixtures that build prerequisite remote state for dependent tests.
//!
//! ## Overview
//!
//! A fixture issues the create request on construction, ignores its result
//! (a failed create simply lets the dependent test fail at its own
//! assertion, which is where the useful message is), and yields the
//! identifier the dependent test addresses.
//!
//! Unlike the suite this harness replaces, fixtures here are guards: the
//! entity is deleted when the fixture drops, on every exit path including
//! assertion failure and panic. Teardown is best-effort - the remote
//! service owns entity lifecycle and may already have reset the state - so
//! a failed delete is logged and never panics.

use crate::client::ApiClient;
use crate::petstore::{Order, Pet, PetApi, StoreApi, User, UserApi};

/// A pet created remotely for the lifetime of the guard.
pub struct PetFixture<'a> {
    client: &'a ApiClient,
    id: i64,
}

impl<'a> PetFixture<'a> {
    /// Create the canonical sample pet.
    pub fn create(client: &'a ApiClient) -> Self {
        Self::create_with(client, &Pet::sample())
    }

    /// Create a specific pet payload.
    pub fn create_with(client: &'a ApiClient, pet: &Pet) -> Self {
        if let Err(err) = PetApi::new(client).create(pet) {
            tracing::debug!(id = pet.id, error = %format!("{err:#}"), "pet fixture create failed");
        }
        Self {
            client,
            id: pet.id,
        }
    }

    /// Identifier dependent tests address the pet by.
    pub fn id(&self) -> i64 {
        self.id
    }
}

impl Drop for PetFixture<'_> {
    fn drop(&mut self) {
        if let Err(err) = PetApi::new(self.client).delete(self.id) {
            tracing::warn!(id = self.id, error = %format!("{err:#}"), "pet fixture teardown failed");
        }
    }
}

/// A user created remotely for the lifetime of the guard.
pub struct UserFixture<'a> {
    client: &'a ApiClient,
    username: String,
}

impl<'a> UserFixture<'a> {
    pub fn create(client: &'a ApiClient) -> Self {
        Self::create_with(client, &User::sample())
    }

    pub fn create_with(client: &'a ApiClient, user: &User) -> Self {
        if let Err(err) = UserApi::new(client).create(user) {
            tracing::debug!(
                username = %user.username,
                error = %format!("{err:#}"),
                "user fixture create failed"
            );
        }
        Self {
            client,
            username: user.username.clone(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl Drop for UserFixture<'_> {
    fn drop(&mut self) {
        if let Err(err) = UserApi::new(self.client).delete(&self.username) {
            tracing::warn!(
                username = %self.username,
                error = %format!("{err:#}"),
                "user fixture teardown failed"
            );
        }
    }
}

/// An order created remotely for the lifetime of the guard.
pub struct OrderFixture<'a> {
    client: &'a ApiClient,
    id: i64,
}

impl<'a> OrderFixture<'a> {
    pub fn create(client: &'a ApiClient) -> Self {
        Self::create_with(client, &Order::sample())
    }

    pub fn create_with(client: &'a ApiClient, order: &Order) -> Self {
        if let Err(err) = StoreApi::new(client).create_order(order) {
            tracing::debug!(id = order.id, error = %format!("{err:#}"), "order fixture create failed");
        }
        Self {
            client,
            id: order.id,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }
}

impl Drop for OrderFixture<'_> {
    fn drop(&mut self) {
        if let Err(err) = StoreApi::new(self.client).delete_order(self.id) {
            tracing::warn!(id = self.id, error = %format!("{err:#}"), "order fixture teardown failed");
        }
    }
}
