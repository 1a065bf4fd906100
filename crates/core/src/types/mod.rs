//! Core types for QuickCart.
//!
//! This module provides type-safe wrappers for catalog data.

pub mod id;
pub mod price;
pub mod product;

pub use id::*;
pub use price::{Price, PriceError, format_amount};
pub use product::Product;
