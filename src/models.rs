use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub userid: i64,
    pub first_name: String,
    pub last_name: String,
    pub birthday: String,
    #[serde(default)]
    pub marital_status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub first_name: String,
    pub last_name: String,
}

/// Body of `POST /api/add`. Every field is optional here so that missing
/// values surface as validation errors instead of deserialization failures.
#[derive(Debug, Default, Deserialize)]
pub struct AddCostRequest {
    pub description: Option<String>,
    pub category: Option<String>,
    pub userid: Option<i64>,
    pub sum: Option<f64>,
    pub date: Option<String>,
}

/// A validated cost, ready to be written to the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCost {
    pub description: String,
    pub category: String,
    pub userid: i64,
    pub sum: f64,
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostEntry {
    pub description: String,
    pub category: String,
    pub userid: i64,
    pub sum: f64,
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportItem {
    pub sum: f64,
    pub description: String,
    pub day: u32,
}

/// One `{ "<category>": [items] }` object of a monthly report.
pub type CategoryCosts = BTreeMap<String, Vec<ReportItem>>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyReport {
    pub userid: i64,
    pub year: i32,
    pub month: u32,
    pub costs: Vec<CategoryCosts>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserDetails {
    pub userid: i64,
    pub first_name: String,
    pub last_name: String,
    pub birthday: String,
    pub marital_status: String,
    pub total: f64,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
