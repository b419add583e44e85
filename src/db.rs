use std::path::Path;

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{Connection, Result, params};

use crate::models::{NewCost, ReportItem, User};

pub type DbPool = Pool<SqliteConnectionManager>;

pub fn init_db(path: &Path) -> std::result::Result<DbPool, r2d2::Error> {
    let manager = SqliteConnectionManager::file(path)
        .with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"));
    Pool::new(manager)
}

pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            userid INTEGER PRIMARY KEY,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            birthday TEXT NOT NULL,
            marital_status TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS costs (
            id INTEGER PRIMARY KEY,
            description TEXT NOT NULL,
            category TEXT NOT NULL,
            userid INTEGER NOT NULL,
            sum REAL NOT NULL,
            year INTEGER NOT NULL,
            month INTEGER NOT NULL CHECK(month BETWEEN 1 AND 12),
            day INTEGER NOT NULL CHECK(day BETWEEN 1 AND 31),
            FOREIGN KEY(userid) REFERENCES users(userid)
        );

        CREATE INDEX IF NOT EXISTS costs_by_period ON costs (userid, year, month);
        ",
    )
}

/// Inserts configured users that are not stored yet. Existing rows are left
/// untouched. Returns how many users were added.
pub fn seed_users(conn: &Connection, users: &[User]) -> Result<usize> {
    let mut stmt = conn.prepare(
        "
        INSERT OR IGNORE INTO users (userid, first_name, last_name, birthday, marital_status)
        VALUES (?1, ?2, ?3, ?4, ?5)
        ",
    )?;
    let mut added = 0;
    for user in users {
        added += stmt.execute(params![
            user.userid,
            user.first_name,
            user.last_name,
            user.birthday,
            user.marital_status
        ])?;
    }
    Ok(added)
}

pub fn user_exists(conn: &Connection, userid: i64) -> Result<bool> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM users WHERE userid = ?1)",
        params![userid],
        |row| row.get::<_, i64>(0),
    )
    .map(|value| value == 1)
}

pub fn user_by_id(conn: &Connection, userid: i64) -> Result<Option<User>> {
    let mut stmt = conn.prepare(
        "
        SELECT userid, first_name, last_name, birthday, marital_status
        FROM users
        WHERE userid = ?1
        ",
    )?;
    let mut rows = stmt.query(params![userid])?;
    if let Some(row) = rows.next()? {
        Ok(Some(User {
            userid: row.get(0)?,
            first_name: row.get(1)?,
            last_name: row.get(2)?,
            birthday: row.get(3)?,
            marital_status: row.get(4)?,
        }))
    } else {
        Ok(None)
    }
}

pub fn insert_cost(conn: &Connection, cost: &NewCost) -> Result<i64> {
    conn.execute(
        "
        INSERT INTO costs (description, category, userid, sum, year, month, day)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        ",
        params![
            cost.description,
            cost.category,
            cost.userid,
            cost.sum,
            cost.year,
            cost.month,
            cost.day
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn total_for_user(conn: &Connection, userid: i64) -> Result<f64> {
    conn.query_row(
        "SELECT COALESCE(SUM(sum), 0.0) FROM costs WHERE userid = ?1",
        params![userid],
        |row| row.get(0),
    )
}

/// Costs of one user in one month as `(category, item)` rows, ordered by day
/// and then by insertion.
pub fn month_costs(
    conn: &Connection,
    userid: i64,
    year: i32,
    month: u32,
) -> Result<Vec<(String, ReportItem)>> {
    let mut stmt = conn.prepare(
        "
        SELECT category, sum, description, day
        FROM costs
        WHERE userid = ?1 AND year = ?2 AND month = ?3
        ORDER BY day, id
        ",
    )?;
    let rows = stmt.query_map(params![userid, year, month], |row| {
        Ok((
            row.get(0)?,
            ReportItem {
                sum: row.get(1)?,
                description: row.get(2)?,
                day: row.get(3)?,
            },
        ))
    })?;

    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}
