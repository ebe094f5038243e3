use std::fmt;

use derive_new::new;

use super::LogicalOperator;
use crate::catalog::TableDescriptor;

/// Everything a create-table-as-select statement carries.
#[derive(new, Debug, Clone)]
pub struct CreateTableAsInfo {
    /// The table to create, its schema is derived from the query
    pub(crate) descriptor: TableDescriptor,
    /// The query whose rows populate the table
    pub(crate) query: Box<LogicalOperator>,
    /// Succeed without doing anything when the table already exists
    pub(crate) allow_existing: bool,
}

impl fmt::Display for CreateTableAsInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let identifier = self.descriptor.identifier();
        write!(
            f,
            "CreateTableAsSelect [Database: {}, TableName: {}, InsertIntoTable]",
            identifier.database(),
            identifier.table()
        )
    }
}
