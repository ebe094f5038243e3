use derive_new::new;

use super::CatalogEntryBase;
use crate::catalog::{TableIdentifier, ViewRelation};
use crate::planner::LogicalOperator;

#[derive(new, Clone, Debug)]
pub struct ViewCatalogEntry {
    pub(crate) base: CatalogEntryBase,
    pub(crate) database_base: CatalogEntryBase,
    /// The query the view expands to
    pub(crate) query: LogicalOperator,
}

impl ViewCatalogEntry {
    pub fn to_relation(&self) -> ViewRelation {
        ViewRelation::new(
            self.base.oid,
            TableIdentifier::new(self.database_base.name.clone(), self.base.name.clone()),
            Box::new(self.query.clone()),
        )
    }
}
