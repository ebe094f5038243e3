use crate::catalog::ColumnDefinition;
use crate::planner::Attribute;
use crate::types::TypeError;

pub struct SchemaInferencer;

impl SchemaInferencer {
    /// Column definitions for a query's output, in output order. Names are copied verbatim
    /// and types converted to their metastore names; comments are left empty.
    pub fn infer(output: &[Attribute]) -> Result<Vec<ColumnDefinition>, TypeError> {
        output
            .iter()
            .map(|attr| -> Result<ColumnDefinition, TypeError> {
                Ok(ColumnDefinition::new(
                    attr.name.clone(),
                    attr.ty.to_metastore_type()?,
                    None,
                ))
            })
            .collect()
    }
}
