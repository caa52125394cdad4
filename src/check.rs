use sqlx::mysql::MySqlConnection;

use crate::config::DbConfig;
use crate::db::{self, TRANSACTION_TABLE, USER_PROFILE_TABLE};
use crate::error::CheckError;
use crate::models::report::{CheckReport, TableCount};

/// Connects, counts both tables, and closes the connection whether or not the counts succeed.
pub async fn run(config: &DbConfig) -> Result<CheckReport, CheckError> {
    let conn = db::establish_connection(config).await?;
    tracing::debug!("Connected to {}", config.target());

    count_and_close(conn, [USER_PROFILE_TABLE, TRANSACTION_TABLE]).await
}

async fn count_and_close(
    mut conn: MySqlConnection,
    tables: [&'static str; 2],
) -> Result<CheckReport, CheckError> {
    let result = count_tables(&mut conn, tables).await;
    db::close_connection(conn).await;

    result.map_err(CheckError::from)
}

async fn count_tables(
    conn: &mut MySqlConnection,
    [users_table, transactions_table]: [&'static str; 2],
) -> Result<CheckReport, sqlx::Error> {
    let users = db::count_rows(conn, users_table).await?;
    let transactions = db::count_rows(conn, transactions_table).await?;

    Ok(CheckReport {
        users: TableCount { table: users_table, count: users },
        transactions: TableCount { table: transactions_table, count: transactions },
    })
}
