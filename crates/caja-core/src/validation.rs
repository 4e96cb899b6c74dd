//! # Validation Module
//!
//! Business-rule validation for form input, run before any request leaves
//! the client.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form field (per keystroke)                                   │
//! │  ├── card module: brand, Luhn, CVV, expiry, display formatting         │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (on submit)                                      │
//! │  ├── Field-level business rules with typed reasons                     │
//! │  └── Composite checks (e.g. a NewSale as a whole)                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Backend API (out of scope here)                              │
//! │  └── Authoritative constraints                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use caja_core::validation::{validate_product_name, validate_quantity};
//!
//! assert!(validate_product_name("Café molido 500g").is_ok());
//! assert!(validate_quantity(5).is_ok());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::NewSale;
use crate::MAX_ITEM_QUANTITY;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates the client name captured on a sale.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 120 characters
pub fn validate_client_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "client_name".to_string(),
        });
    }

    if name.chars().count() > 120 {
        return Err(ValidationError::TooLong {
            field: "client_name".to_string(),
            max: 120,
        });
    }

    Ok(())
}

/// Validates the client document id (cédula/RUC-style identifier).
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 20 characters
/// - Digits and hyphens only
pub fn validate_client_document(document: &str) -> ValidationResult<()> {
    let document = document.trim();

    if document.is_empty() {
        return Err(ValidationError::Required {
            field: "client_document_id".to_string(),
        });
    }

    if document.chars().count() > 20 {
        return Err(ValidationError::TooLong {
            field: "client_document_id".to_string(),
            max: 20,
        });
    }

    if !document.chars().all(|c| c.is_ascii_digit() || c == '-') {
        return Err(ValidationError::InvalidFormat {
            field: "client_document_id".to_string(),
            reason: "must contain only digits and hyphens".to_string(),
        });
    }

    Ok(())
}

/// Validates a product search query.
///
/// ## Rules
/// - Can be empty (returns all/default results)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > 100 {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: 100,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a stock level.
///
/// ## Rules
/// - Must be non-negative (>= 0); this client never submits negative stock
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Validates a sale submission as a whole.
///
/// ## Rules
/// - At least one line item
/// - Every line quantity passes [`validate_quantity`]
/// - Client name and document pass their field validators
pub fn validate_new_sale(sale: &NewSale) -> ValidationResult<()> {
    if sale.items.is_empty() {
        return Err(ValidationError::Empty {
            field: "items".to_string(),
        });
    }

    for line in &sale.items {
        validate_quantity(line.quantity)?;
    }

    validate_client_name(&sale.client_name)?;
    validate_client_document(&sale.client_document_id)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
