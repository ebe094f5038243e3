use std::collections::HashMap;

use arrow::datatypes::{Field, Schema, SchemaRef};
use derive_new::new;
use strum_macros::AsRefStr;

use super::{ColumnDefinition, StorageFormat, TableIdentifier};
use crate::planner::{Attribute, LogicalOperator};
use crate::types::{LogicalType, TypeError};

/// A catalog-resolved relation. Only `Metastore` relations can be written to.
#[derive(Debug, Clone, AsRefStr)]
pub enum RelationHandle {
    Metastore(MetastoreRelation),
    View(ViewRelation),
}

impl RelationHandle {
    pub fn identifier(&self) -> &TableIdentifier {
        match self {
            RelationHandle::Metastore(r) => &r.identifier,
            RelationHandle::View(r) => &r.identifier,
        }
    }
}

/// A table registered in the metastore, usable as an insert target.
#[derive(new, Debug, Clone, PartialEq, Eq)]
pub struct MetastoreRelation {
    /// The object identifier of the catalog entry
    pub(crate) oid: usize,
    pub(crate) identifier: TableIdentifier,
    pub(crate) storage: StorageFormat,
    pub(crate) columns: Vec<ColumnDefinition>,
}

impl MetastoreRelation {
    pub fn identifier(&self) -> &TableIdentifier {
        &self.identifier
    }

    pub fn columns(&self) -> &[ColumnDefinition] {
        &self.columns
    }

    pub fn output(&self) -> Result<Vec<Attribute>, TypeError> {
        self.columns
            .iter()
            .map(|col| -> Result<Attribute, TypeError> {
                let ty = LogicalType::from_metastore_type(&col.ty)?;
                Ok(Attribute::new(col.name.clone(), ty))
            })
            .collect()
    }

    pub fn arrow_schema(&self) -> Result<SchemaRef, TypeError> {
        let fields = self
            .output()?
            .into_iter()
            .map(|attr| Field::new(attr.name.as_str(), attr.ty.into(), true))
            .collect::<Vec<_>>();
        Ok(SchemaRef::new(Schema::new_with_metadata(
            fields,
            HashMap::new(),
        )))
    }
}

#[derive(new, Debug, Clone)]
pub struct ViewRelation {
    pub(crate) oid: usize,
    pub(crate) identifier: TableIdentifier,
    pub(crate) query: Box<LogicalOperator>,
}
