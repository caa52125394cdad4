use sqlx::mysql::MySqlConnection;
use sqlx::{ConnectOptions, Connection};

use crate::config::DbConfig;

pub const USER_PROFILE_TABLE: &str = "SIMFraudUserProfile";
pub const TRANSACTION_TABLE: &str = "SIMFraudTransaction";

/// Opens a single connection; the check never needs more than one.
pub async fn establish_connection(config: &DbConfig) -> Result<MySqlConnection, sqlx::Error> {
    tracing::debug!("connecting to {}", config.target());

    let conn = config.connect_options().connect().await?;
    Ok(conn)
}

/// `table` must be one of the fixed table constants above.
pub async fn count_rows(
    conn: &mut MySqlConnection,
    table: &'static str,
) -> Result<i64, sqlx::Error> {
    let sql = format!("SELECT COUNT(*) FROM {}", table);
    let count: i64 = sqlx::query_scalar(&sql).fetch_one(&mut *conn).await?;

    tracing::debug!("{} rows in {}", count, table);
    Ok(count)
}

pub async fn close_connection(conn: MySqlConnection) {
    if let Err(e) = conn.close().await {
        tracing::warn!("Failed to close connection cleanly: {}", e);
    }
}
