//! Shared fixtures for integration tests
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::PathBuf;
use std::str::FromStr;

use marketplace_server::db;

pub const HARRY: i64 = 1;
pub const MR_ROBOT: i64 = 2;
pub const JOHN: i64 = 5;
pub const LINUS: i64 = 6;
pub const ALAN: i64 = 7;

/// Terminated, Harry -> John
pub const TERMINATED_CONTRACT: i64 = 1;
/// In progress, Harry -> Linus
pub const HARRY_LINUS_CONTRACT: i64 = 2;
/// In progress, Mr Robot -> Linus
pub const ROBOT_LINUS_CONTRACT: i64 = 3;
/// New, Mr Robot -> Alan
pub const NEW_CONTRACT: i64 = 4;

/// Helper to create an in-memory database with the schema applied
pub async fn setup_test_db() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid sqlite url")
        .foreign_keys(true);

    // One connection that never expires, otherwise the in-memory database
    // would be dropped with it.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("Failed to open in-memory database");

    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// File-backed database with a multi-connection pool, removed on drop.
///
/// Unlike `setup_test_db`, transactions on this pool run side by side.
pub struct FileDb {
    pub pool: SqlitePool,
    path: PathBuf,
}

impl Drop for FileDb {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
        let _ = std::fs::remove_file(self.path.with_extension("sqlite3-journal"));
    }
}

pub async fn setup_file_db() -> FileDb {
    let path = std::env::temp_dir().join(format!("marketplace-{}.sqlite3", uuid::Uuid::new_v4()));
    let options = SqliteConnectOptions::new()
        .filename(&path)
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .expect("Failed to open file database");

    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    FileDb { pool, path }
}

/// Helper to create a database seeded with the standard fixture
pub async fn seeded_db() -> SqlitePool {
    let pool = setup_test_db().await;
    seed(&pool).await;
    pool
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

pub async fn insert_profile(
    pool: &SqlitePool,
    id: i64,
    first_name: &str,
    last_name: &str,
    profession: &str,
    balance: f64,
    profile_type: &str,
) {
    sqlx::query(
        "INSERT INTO profiles (id, first_name, last_name, profession, balance, type) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(first_name)
    .bind(last_name)
    .bind(profession)
    .bind(balance)
    .bind(profile_type)
    .execute(pool)
    .await
    .expect("insert profile");
}

pub async fn insert_contract(
    pool: &SqlitePool,
    id: i64,
    client_id: i64,
    contractor_id: i64,
    status: &str,
) {
    sqlx::query(
        "INSERT INTO contracts (id, terms, status, client_id, contractor_id) VALUES (?, 'bla bla bla', ?, ?, ?)",
    )
    .bind(id)
    .bind(status)
    .bind(client_id)
    .bind(contractor_id)
    .execute(pool)
    .await
    .expect("insert contract");
}

pub async fn insert_job(
    pool: &SqlitePool,
    id: i64,
    contract_id: i64,
    price: f64,
    paid: Option<bool>,
    payment_date: Option<DateTime<Utc>>,
) {
    sqlx::query(
        "INSERT INTO jobs (id, description, price, paid, payment_date, contract_id) VALUES (?, 'work', ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(price)
    .bind(paid)
    .bind(payment_date)
    .bind(contract_id)
    .execute(pool)
    .await
    .expect("insert job");
}

pub async fn balance_of(pool: &SqlitePool, profile_id: i64) -> f64 {
    sqlx::query_scalar::<_, f64>("SELECT balance FROM profiles WHERE id = ?")
        .bind(profile_id)
        .fetch_one(pool)
        .await
        .expect("profile balance")
}

pub async fn seed(pool: &SqlitePool) {
    insert_profile(pool, HARRY, "Harry", "Potter", "Wizard", 1150.0, "client").await;
    insert_profile(pool, MR_ROBOT, "Mr", "Robot", "Hacker", 231.11, "client").await;
    insert_profile(pool, JOHN, "John", "Lenon", "Musician", 64.0, "contractor").await;
    insert_profile(pool, LINUS, "Linus", "Torvalds", "Programmer", 1214.0, "contractor").await;
    insert_profile(pool, ALAN, "Alan", "Turing", "Programmer", 22.0, "contractor").await;

    insert_contract(pool, TERMINATED_CONTRACT, HARRY, JOHN, "terminated").await;
    insert_contract(pool, HARRY_LINUS_CONTRACT, HARRY, LINUS, "in_progress").await;
    insert_contract(pool, ROBOT_LINUS_CONTRACT, MR_ROBOT, LINUS, "in_progress").await;
    insert_contract(pool, NEW_CONTRACT, MR_ROBOT, ALAN, "new").await;

    // Unpaid
    insert_job(pool, 1, TERMINATED_CONTRACT, 200.0, None, None).await;
    insert_job(pool, 2, HARRY_LINUS_CONTRACT, 201.0, None, None).await;
    insert_job(pool, 3, ROBOT_LINUS_CONTRACT, 202.0, None, None).await;
    insert_job(pool, 4, NEW_CONTRACT, 200.0, None, None).await;

    // Paid
    insert_job(pool, 5, HARRY_LINUS_CONTRACT, 121.0, Some(true), Some(at(2020, 8, 15, 19, 11))).await;
    insert_job(pool, 6, ROBOT_LINUS_CONTRACT, 2020.0, Some(true), Some(at(2020, 8, 14, 23, 11))).await;
    insert_job(pool, 7, TERMINATED_CONTRACT, 21.0, Some(true), Some(at(2020, 8, 17, 19, 11))).await;
}
