use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Asset document stored in the `assets` collection
///
/// # Invariants
/// - `quantity` never goes below zero; the request flow decrements it with
///   a conditional update that is a no-op at zero
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub asset_name: String,
    pub category: String,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
}

/// Partial update merged into an asset document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
}

impl AssetUpdate {
    /// True if the request carried no fields to merge
    pub fn is_empty(&self) -> bool {
        self.asset_name.is_none()
            && self.category.is_none()
            && self.quantity.is_none()
            && self.product_type.is_none()
            && self.added_date.is_none()
            && self.user_email.is_none()
    }
}

/// Stock filter for asset listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    #[serde(rename = "available")]
    Available,
    #[serde(rename = "out-of-stock")]
    OutOfStock,
}

impl StockStatus {
    /// Whether an asset with the given quantity matches this status
    pub fn matches(&self, quantity: i64) -> bool {
        match self {
            StockStatus::Available => quantity > 0,
            StockStatus::OutOfStock => quantity == 0,
        }
    }
}

/// Quantity sort direction for asset listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "low-to-high")]
    LowToHigh,
    #[serde(rename = "high-to-low")]
    HighToLow,
}

/// Query parameters accepted by the asset listing endpoint
///
/// All filters are optional and combine conjunctively. `search` is a
/// case-insensitive substring match on the asset name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetFilter {
    pub search: Option<String>,
    pub stock_status: Option<StockStatus>,
    pub category: Option<String>,
    pub sort_order: Option<SortOrder>,
}
