//! # caja-core: Pure Business Logic for Caja POS
//!
//! This crate is the **heart** of the Caja POS client. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Caja POS Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Web Client (frontend)                       │   │
//! │  │    Product UI ──► Cart UI ──► Payment Form ──► Receipt UI      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ generated TS bindings                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ caja-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   card    │  │   types   │  │ validation│                  │   │
//! │  │   │  brand    │  │  Product  │  │   rules   │                  │   │
//! │  │   │  Luhn     │  │   Sale    │  │  checks   │                  │   │
//! │  │   │  expiry   │  │  CartItem │  │           │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │          API client layer (HTTP, auth headers, routes)          │   │
//! │  │                  — external, out of scope here —                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`card`] - Payment-card input validation and display formatting
//! - [`types`] - Domain types (Product, CartItem, Sale, NewSale)
//! - [`validation`] - Business rule validation for form input
//! - [`error`] - Typed validation errors
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input =
//!    same output. The one time-dependent check (card expiry) takes the
//!    date as a parameter.
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64)
//! 4. **Total card checks**: Malformed card input yields `false`/`unknown`,
//!    never an error
//!
//! ## Example Usage
//!
//! ```rust
//! use caja_core::card::{detect_brand, is_valid_cvv, mask_card_number, CardBrand};
//!
//! let brand = detect_brand("4111 1111 1111 1111");
//! assert_eq!(brand, CardBrand::Visa);
//! assert!(is_valid_cvv("123", brand));
//! assert_eq!(mask_card_number("4111 1111 1111 1111"), "**** **** **** 1111");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod card;
pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use caja_core::CardBrand` instead of
// `use caja_core::card::CardBrand`

pub use card::{CardBrand, CardVerdict};
pub use error::{ValidationError, ValidationResult};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single item in a sale line
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10)
pub const MAX_ITEM_QUANTITY: i64 = 999;
