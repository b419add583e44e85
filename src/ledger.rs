use chrono::{DateTime, Datelike, NaiveDate};

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::{AddCostRequest, CategoryCosts, NewCost, ReportItem};

/// Turns an add-cost body into a storable cost. Entries without an explicit
/// `date` are stamped with `today`.
pub fn validate_cost(
    request: AddCostRequest,
    config: &AppConfig,
    today: NaiveDate,
) -> Result<NewCost, ApiError> {
    let description = required_text(request.description, "description")?;
    let category = required_text(request.category, "category")?;
    let userid = request.userid.ok_or_else(|| missing_field("userid"))?;
    let sum = request.sum.ok_or_else(|| missing_field("sum"))?;

    if !sum.is_finite() || sum <= 0.0 {
        return Err(ApiError::Validation(format!(
            "sum must be a positive number, got {sum}"
        )));
    }
    if !config.is_known_category(&category) {
        return Err(ApiError::Validation(format!(
            "Unknown category '{category}', expected one of: {}",
            config.categories.join(", ")
        )));
    }

    let date = match request.date.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => parse_date(value)?,
        _ => today,
    };

    Ok(NewCost {
        description,
        category,
        userid,
        sum,
        year: date.year(),
        month: date.month(),
        day: date.day(),
    })
}

pub fn validate_period(year: Option<i32>, month: Option<u32>) -> Result<(i32, u32), ApiError> {
    let (Some(year), Some(month)) = (year, month) else {
        return Err(ApiError::Validation("Missing or invalid query parameters".into()));
    };
    if !(1..=12).contains(&month) {
        return Err(ApiError::Validation(format!(
            "month must be between 1 and 12, got {month}"
        )));
    }
    Ok((year, month))
}

/// Groups report rows by category. Every configured category gets an entry,
/// in configured order; categories no longer configured follow in the order
/// they first appear.
pub fn group_by_category(
    categories: &[String],
    rows: Vec<(String, ReportItem)>,
) -> Vec<CategoryCosts> {
    let mut groups: Vec<(String, Vec<ReportItem>)> = categories
        .iter()
        .map(|name| (name.clone(), Vec::new()))
        .collect();

    for (category, item) in rows {
        match groups.iter_mut().find(|(name, _)| *name == category) {
            Some((_, items)) => items.push(item),
            None => groups.push((category, vec![item])),
        }
    }

    groups
        .into_iter()
        .map(|(name, items)| CategoryCosts::from([(name, items)]))
        .collect()
}

fn parse_date(value: &str) -> Result<NaiveDate, ApiError> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(value)
        .map(|stamp| stamp.date_naive())
        .map_err(|_| ApiError::Validation(format!("Invalid date: {value}")))
}

fn required_text(value: Option<String>, field: &str) -> Result<String, ApiError> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or_else(|| missing_field(field))
}

fn missing_field(field: &str) -> ApiError {
    ApiError::Validation(format!("Missing required field: {field}"))
}
