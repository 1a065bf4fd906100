//! QuickCart Core - Cart and catalog types.
//!
//! This crate provides the types shared by the QuickCart components:
//! - `storefront` - Server-rendered shop with the cart drawer
//! - `integration-tests` - End-to-end tests against the storefront router
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no network access,
//! no HTTP handlers. The storefront owns all I/O.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs, prices, and catalog records
//! - [`cart`] - Immutable cart snapshots and the add/remove/clear reducer
//! - [`store`] - The process-local cart container
//! - [`catalog`] - The three-state catalog load result

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod store;
pub mod types;

pub use cart::{Cart, CartEntry, total_items};
pub use catalog::CatalogState;
pub use store::CartStore;
pub use types::*;
