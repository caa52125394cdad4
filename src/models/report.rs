use crate::error::CheckError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCount {
    pub table: &'static str,
    pub count: i64,
}

/// Outcome of a successful check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub users: TableCount,
    pub transactions: TableCount,
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Connected to MySQL database successfully!")?;
        writeln!(f, "   Current User Count ({}): {}", self.users.table, self.users.count)?;
        write!(
            f,
            "   Transaction Count ({}): {}",
            self.transactions.table, self.transactions.count
        )
    }
}

pub fn failure_message(err: &CheckError) -> String {
    format!("Connection Failed: {}\n\nTip: {}", err, err.hint())
}
