//! # Petstore Module
//!
//! Typed endpoint bindings for the Swagger Petstore demo API - the worked
//! example this harness ships with. Three resource families, each a flat
//! record sent and received as JSON:
//!
//! - [`pet`] - `POST /pet`, `GET /pet/{petId}`, `PUT /pet`,
//!   `DELETE /pet/{petId}`
//! - [`user`] - `POST /user`, `GET/PUT/DELETE /user/{username}`, plus the
//!   `GET /user/login` special case
//! - [`store`] - `POST /store/order`, `GET/DELETE /store/order/{orderId}`,
//!   plus `GET /store/inventory`
//!
//! The remote service is the sole source of truth for entity lifecycle; the
//! bindings here only shape requests and hand back responses.

pub mod contracts;
pub mod pet;
pub mod store;
pub mod user;

pub use contracts::{OrderContract, PetContract, UserContract};
pub use pet::{Pet, PetApi, PetStatus};
pub use store::{Order, OrderStatus, StoreApi};
pub use user::{User, UserApi};

/// Identifier chosen to never collide with any created fixture; the two
/// read-missing operations address it and expect 404.
pub const MISSING_ID: i64 = 99_999;
