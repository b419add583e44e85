use chrono::Local;
use rocket::http::Status;
use rocket::request::Request;
use rocket::serde::json::{self, Json};
use rocket::{Catcher, Route, State};
use rusqlite::TransactionBehavior;

use crate::config::AppConfig;
use crate::db::{self, DbPool};
use crate::error::ApiError;
use crate::ledger;
use crate::models::{
    AddCostRequest, CostEntry, ErrorBody, MonthlyReport, TeamMember, UserDetails,
};

type ApiResult<T> = Result<Json<T>, ApiError>;

#[post("/add", data = "<body>")]
fn add_cost(
    pool: &State<DbPool>,
    config: &State<AppConfig>,
    body: Result<Json<AddCostRequest>, json::Error<'_>>,
) -> ApiResult<CostEntry> {
    let request = body
        .map_err(|err| ApiError::Validation(format!("Invalid request body: {err}")))?
        .into_inner();
    let cost = ledger::validate_cost(request, config, Local::now().date_naive())?;

    let mut conn = pool.get()?;
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    if !db::user_exists(&tx, cost.userid)? {
        return Err(ApiError::UnknownUser(cost.userid));
    }
    let id = db::insert_cost(&tx, &cost)?;
    tx.commit()?;

    log::info!(
        "recorded cost #{id} for user {}: {} {} ({}-{:02}-{:02})",
        cost.userid,
        cost.category,
        cost.sum,
        cost.year,
        cost.month,
        cost.day
    );

    Ok(Json(CostEntry {
        description: cost.description,
        category: cost.category,
        userid: cost.userid,
        sum: cost.sum,
        year: cost.year,
        month: cost.month,
        day: cost.day,
    }))
}

#[get("/report?<id>&<year>&<month>")]
fn monthly_report(
    pool: &State<DbPool>,
    config: &State<AppConfig>,
    id: Option<i64>,
    year: Option<i32>,
    month: Option<u32>,
) -> ApiResult<MonthlyReport> {
    let userid =
        id.ok_or_else(|| ApiError::Validation("Missing or invalid query parameters".into()))?;
    let (year, month) = ledger::validate_period(year, month)?;

    let conn = pool.get()?;
    let rows = db::month_costs(&conn, userid, year, month)?;

    Ok(Json(MonthlyReport {
        userid,
        year,
        month,
        costs: ledger::group_by_category(&config.categories, rows),
    }))
}

#[get("/users/<id>")]
fn user_details(pool: &State<DbPool>, id: i64) -> ApiResult<UserDetails> {
    let conn = pool.get()?;
    let user = db::user_by_id(&conn, id)?.ok_or(ApiError::UserNotFound(id))?;
    let total = db::total_for_user(&conn, id)?;

    Ok(Json(UserDetails {
        userid: user.userid,
        first_name: user.first_name,
        last_name: user.last_name,
        birthday: user.birthday,
        marital_status: user.marital_status,
        total,
    }))
}

#[get("/about")]
fn about(config: &State<AppConfig>) -> Json<Vec<TeamMember>> {
    Json(config.team.clone())
}

#[catch(404)]
fn not_found(req: &Request<'_>) -> Json<ErrorBody> {
    log::warn!("no endpoint for {} {}", req.method(), req.uri());
    Json(ErrorBody {
        error: "API endpoint not found".into(),
    })
}

#[catch(default)]
fn default_catcher(status: Status, req: &Request<'_>) -> (Status, Json<ErrorBody>) {
    log::warn!("{} {} failed with {}", req.method(), req.uri(), status);
    let error = status.reason().unwrap_or("Internal Server Error").to_string();
    (status, Json(ErrorBody { error }))
}

pub fn api_routes() -> Vec<Route> {
    routes![add_cost, monthly_report, user_details, about]
}

pub fn catchers() -> Vec<Catcher> {
    catchers![not_found, default_catcher]
}
