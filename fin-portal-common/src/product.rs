use serde::{Deserialize, Serialize};

/// Product record returned by the recommendation and search endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub pid: i64,
    pub bid: i64,
    pub business_name: String,
    pub product_name: String,
    pub category: String,
    pub price: f64,
    pub popularity: f64,
    pub geo_demand: String,
}
