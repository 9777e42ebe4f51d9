//! # Receipts
//!
//! Audit record of a completed sale. The original hardware has no printer;
//! this is the machine's own log of what it sold and what it paid back,
//! which the console app dumps as JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vendo_core::{Money, Product};

/// A completed sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    /// Unique identifier (UUID v4).
    pub id: Uuid,

    /// Name of the product sold.
    pub product_name: String,

    /// The product's price at the time of sale.
    pub price: Money,

    /// Total the customer had inserted when the sale committed.
    pub paid: Money,

    /// Change paid out (`paid - price`).
    pub change: Money,

    /// When the sale completed.
    pub completed_at: DateTime<Utc>,
}

impl Receipt {
    /// Records a sale that just committed.
    pub fn new(product: &Product, paid: Money, change: Money) -> Self {
        Receipt {
            id: Uuid::new_v4(),
            product_name: product.name.clone(),
            price: product.price,
            paid,
            change,
            completed_at: Utc::now(),
        }
    }
}
