use std::fmt;

use derive_new::new;

use super::{CatalogError, DEFAULT_DATABASE};

/// Fully qualified name of a table, unique within a catalog.
#[derive(new, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableIdentifier {
    pub(crate) database: String,
    pub(crate) table: String,
}

impl TableIdentifier {
    /// Parses `table` or `database.table`, the former resolving into the default database.
    pub fn parse(name: &str) -> Result<Self, CatalogError> {
        let parts = name.split('.').map(str::trim).collect::<Vec<_>>();
        if parts.iter().any(|p| p.is_empty()) {
            return Err(CatalogError::InvalidIdentifier(name.to_string()));
        }
        match parts.as_slice() {
            [table] => Ok(Self::new(DEFAULT_DATABASE.to_string(), table.to_string())),
            [database, table] => Ok(Self::new(database.to_string(), table.to_string())),
            _ => Err(CatalogError::InvalidIdentifier(name.to_string())),
        }
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn table(&self) -> &str {
        &self.table
    }
}

impl fmt::Display for TableIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.database, self.table)
    }
}

/// Storage hints of a table. Unset entries are filled with the text format defaults when the
/// table is created by a query.
#[derive(new, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StorageFormat {
    pub(crate) input_format: Option<String>,
    pub(crate) output_format: Option<String>,
    pub(crate) serde: Option<String>,
}

impl StorageFormat {
    pub fn input_format(&self) -> Option<&str> {
        self.input_format.as_deref()
    }

    pub fn output_format(&self) -> Option<&str> {
        self.output_format.as_deref()
    }

    pub fn serde(&self) -> Option<&str> {
        self.serde.as_deref()
    }
}

/// A column of a table as the metastore records it
#[derive(new, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnDefinition {
    /// The name of the column
    pub(crate) name: String,
    /// The metastore type name of the column, e.g. `int` or `decimal(10,2)`
    pub(crate) ty: String,
    pub(crate) comment: Option<String>,
}

impl ColumnDefinition {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

/// Describes a table to be registered in the catalog.
#[derive(new, Debug, Clone, PartialEq, Eq)]
pub struct TableDescriptor {
    pub(crate) identifier: TableIdentifier,
    pub(crate) storage: StorageFormat,
    /// May be left empty by the caller when the schema is derived from a query.
    pub(crate) schema: Vec<ColumnDefinition>,
}

impl TableDescriptor {
    /// A descriptor with no storage hints and no schema.
    pub fn for_identifier(identifier: TableIdentifier) -> Self {
        Self::new(identifier, StorageFormat::default(), vec![])
    }

    pub fn identifier(&self) -> &TableIdentifier {
        &self.identifier
    }

    pub fn storage(&self) -> &StorageFormat {
        &self.storage
    }

    pub fn schema(&self) -> &[ColumnDefinition] {
        &self.schema
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("t1", "default", "t1")]
    #[test_case("db1.t1", "db1", "t1")]
    #[test_case(" db1 . t1 ", "db1", "t1"; "padded")]
    fn parse_identifier(name: &str, database: &str, table: &str) {
        let identifier = TableIdentifier::parse(name).unwrap();
        assert_eq!(identifier.database(), database);
        assert_eq!(identifier.table(), table);
    }

    #[test_case("")]
    #[test_case("db1.")]
    #[test_case("a.b.c")]
    fn parse_invalid_identifier(name: &str) {
        assert_eq!(
            TableIdentifier::parse(name),
            Err(CatalogError::InvalidIdentifier(name.to_string()))
        );
    }

    #[test]
    fn identifier_display() {
        let identifier = TableIdentifier::new("db1".to_string(), "t1".to_string());
        assert_eq!(identifier.to_string(), "db1.t1");
    }
}
