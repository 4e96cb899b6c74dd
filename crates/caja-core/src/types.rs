//! # Domain Types
//!
//! Core domain types shared between the Rust core and the web client.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    CartItem     │   │      Sale       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │──►│  product        │──►│  items          │       │
//! │  │  name           │   │  quantity       │   │  total_cents    │       │
//! │  │  price_cents    │   │  subtotal_cents │   │  payment_method │       │
//! │  │  stock          │   └─────────────────┘   │  status         │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! │                                                                         │
//! │  NewSale: what the form submits to POST /sales (line refs + client     │
//! │  capture fields), distinct from the Sale the API returns.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Integer Money
//! Prices and totals are cents (`i64`), never floats. The UI converts to
//! a display currency at the last moment; everything upstream stays exact.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Payment Method
// =============================================================================

/// How a sale was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash payment.
    Cash,
    /// Card payment (validated locally by the card module, charged by the
    /// external terminal/gateway).
    Card,
    /// Bank transfer.
    Transfer,
}

// =============================================================================
// Sale Status
// =============================================================================

/// The status of a sale transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SaleStatus {
    /// Sale has been paid and finalized.
    Completed,
    /// Sale recorded but payment not yet confirmed.
    Pending,
    /// Sale was cancelled.
    Cancelled,
}

impl Default for SaleStatus {
    fn default() -> Self {
        SaleStatus::Pending
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Backend-assigned identifier.
    pub id: i64,

    /// Display name shown in search results and on receipts.
    pub name: String,

    /// Optional description for product details.
    pub description: Option<String>,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Current stock level.
    pub stock: i64,

    /// Optional category for filtering.
    pub category: Option<String>,

    /// Barcode (EAN-13, UPC-A, etc.).
    pub barcode: Option<String>,

    /// Optional image URL.
    pub image: Option<String>,
}

impl Product {
    /// Checks whether the requested quantity can be served from stock.
    pub fn in_stock(&self, quantity: i64) -> bool {
        quantity > 0 && self.stock >= quantity
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// A product plus quantity in the cart, with its precomputed line total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    pub product: Product,
    pub quantity: i64,
    /// Line total in cents (unit price × quantity).
    pub subtotal_cents: i64,
}

impl CartItem {
    /// Builds a cart line, computing the subtotal from the product price.
    pub fn new(product: Product, quantity: i64) -> Self {
        let subtotal_cents = product.price_cents.saturating_mul(quantity);
        CartItem {
            product,
            quantity,
            subtotal_cents,
        }
    }
}

// =============================================================================
// Sale
// =============================================================================

/// A sale as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Sale {
    pub id: i64,
    pub items: Vec<CartItem>,
    pub total_cents: i64,
    #[ts(as = "String")]
    pub date: DateTime<Utc>,
    pub payment_method: PaymentMethod,
    pub status: SaleStatus,
    /// Registered customer, when the sale is tied to an account.
    pub customer_id: Option<i64>,
    pub client_name: Option<String>,
    pub client_document_id: Option<String>,
    pub client_contact: Option<String>,
}

// =============================================================================
// New Sale (submission payload)
// =============================================================================

/// One line of a sale submission: a product reference and quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SaleLine {
    pub product_id: i64,
    pub quantity: i64,
}

/// What the checkout form submits to create a sale.
///
/// Client capture fields are required here (walk-in sales record who
/// bought), while `customer_id` links an existing account when known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewSale {
    pub items: Vec<SaleLine>,
    pub payment_method: PaymentMethod,
    pub client_name: String,
    pub client_document_id: String,
    pub client_contact: String,
    pub customer_id: Option<i64>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price_cents: i64, stock: i64) -> Product {
        Product {
            id: 1,
            name: "Café molido 500g".to_string(),
            description: None,
            price_cents,
            stock,
            category: Some("abarrotes".to_string()),
            barcode: None,
            image: None,
        }
    }

    #[test]
    fn test_in_stock() {
        let p = product(1099, 3);
        assert!(p.in_stock(1));
        assert!(p.in_stock(3));
        assert!(!p.in_stock(4));
        assert!(!p.in_stock(0));
        assert!(!p.in_stock(-1));
    }

    #[test]
    fn test_cart_item_subtotal() {
        let item = CartItem::new(product(1099, 10), 3);
        assert_eq!(item.subtotal_cents, 3297);
    }

    #[test]
    fn test_sale_status_default() {
        assert_eq!(SaleStatus::default(), SaleStatus::Pending);
    }

    #[test]
    fn test_payment_method_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Transfer).unwrap(),
            r#""transfer""#
        );
        assert_eq!(
            serde_json::from_str::<SaleStatus>(r#""cancelled""#).unwrap(),
            SaleStatus::Cancelled
        );
    }

    #[test]
    fn test_new_sale_round_trips_json() {
        let dto = NewSale {
            items: vec![SaleLine {
                product_id: 7,
                quantity: 2,
            }],
            payment_method: PaymentMethod::Card,
            client_name: "Ana Pérez".to_string(),
            client_document_id: "1102345678".to_string(),
            client_contact: "ana@example.com".to_string(),
            customer_id: None,
        };

        let json = serde_json::to_string(&dto).unwrap();
        let back: NewSale = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dto);
    }
}
