use sqlx::mysql::MySqlDatabaseError;

/// Why a connectivity check failed.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("access denied: {0}")]
    Authentication(String),

    #[error("unknown database: {0}")]
    UnknownDatabase(String),

    #[error("missing table: {0}")]
    MissingTable(String),

    #[error("server unreachable: {0}")]
    Network(String),

    #[error("query failed: {0}")]
    Query(String),

    #[error("{0}")]
    Other(String),
}

impl CheckError {
    /// Maps a MySQL server error number onto a failure kind. Transport failures never arrive as
    /// server errors; sqlx surfaces them as `Error::Io` or `Error::Tls`.
    pub fn from_mysql_number(number: u16, message: String) -> Self {
        match number {
            // ER_DBACCESS_DENIED_ERROR, ER_ACCESS_DENIED_ERROR, ER_ACCESS_DENIED_NO_PASSWORD_ERROR
            1044 | 1045 | 1698 => CheckError::Authentication(message),
            // ER_BAD_DB_ERROR
            1049 => CheckError::UnknownDatabase(message),
            // ER_NO_SUCH_TABLE
            1146 => CheckError::MissingTable(message),
            _ => CheckError::Query(message),
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            CheckError::Authentication(_) => {
                "Check DB_USER and DB_PASSWORD (environment or .env file)."
            }
            CheckError::UnknownDatabase(_) => {
                "Check that DB_NAME exists on the server (default: simfraud_db)."
            }
            CheckError::MissingTable(_) => {
                "The SIMFraud tables are missing from DB_NAME. Load the schema first."
            }
            CheckError::Network(_) => {
                "Ensure the MySQL server is running and reachable at DB_HOST:DB_PORT."
            }
            CheckError::Query(_) | CheckError::Other(_) => {
                "Verify DB_HOST, DB_PORT, DB_USER, DB_PASSWORD and DB_NAME, then retry."
            }
        }
    }
}

impl From<sqlx::Error> for CheckError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Database(db_err) => {
                match db_err.try_downcast_ref::<MySqlDatabaseError>() {
                    Some(mysql) => {
                        CheckError::from_mysql_number(mysql.number(), mysql.message().to_string())
                    }
                    None => CheckError::Query(db_err.message().to_string()),
                }
            }
            sqlx::Error::Io(io_err) => CheckError::Network(io_err.to_string()),
            sqlx::Error::Tls(tls_err) => CheckError::Network(tls_err.to_string()),
            other => CheckError::Other(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn access_denied_is_authentication() {
        let err = CheckError::from_mysql_number(
            1045,
            "Access denied for user 'root'@'localhost'".into(),
        );
        assert!(matches!(err, CheckError::Authentication(_)));
        assert!(err.hint().contains("DB_PASSWORD"));
    }

    #[test]
    fn bad_database_is_unknown_database() {
        let err = CheckError::from_mysql_number(1049, "Unknown database 'simfraud_db'".into());
        assert!(matches!(err, CheckError::UnknownDatabase(_)));
        assert!(err.hint().contains("DB_NAME"));
    }

    #[test]
    fn no_such_table_is_missing_table() {
        let err = CheckError::from_mysql_number(
            1146,
            "Table 'simfraud_db.SIMFraudTransaction' doesn't exist".into(),
        );
        assert!(matches!(err, CheckError::MissingTable(_)));
    }

    #[test]
    fn unrecognised_server_error_is_query() {
        let err = CheckError::from_mysql_number(
            1064,
            "You have an error in your SQL syntax".into(),
        );
        assert!(matches!(err, CheckError::Query(_)));
        assert_eq!(err.to_string(), "query failed: You have an error in your SQL syntax");
    }

    #[test]
    fn io_error_is_network() {
        let io_err = io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused");
        let err = CheckError::from(sqlx::Error::Io(io_err));
        assert!(matches!(err, CheckError::Network(_)));
        assert!(err.hint().contains("DB_HOST"));
    }

    #[test]
    fn protocol_error_is_other() {
        let err = CheckError::from(sqlx::Error::Protocol("unexpected packet".into()));
        assert!(matches!(err, CheckError::Other(_)));
    }
}
