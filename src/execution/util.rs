use std::collections::HashMap;

use arrow::compute;
use arrow::datatypes::{Field, Schema, SchemaRef};
use arrow::record_batch::RecordBatch;

use super::ExecutorError;
use crate::planner::Attribute;

pub struct SchemaUtil;

impl SchemaUtil {
    pub fn new_schema_ref(attrs: &[Attribute]) -> SchemaRef {
        let fields = attrs
            .iter()
            .map(|attr| Field::new(attr.name.as_str(), attr.ty.clone().into(), true))
            .collect::<Vec<_>>();
        SchemaRef::new(Schema::new_with_metadata(fields, HashMap::new()))
    }

    /// Casts every column of `batch` to the type of the same position in `schema`.
    pub fn cast_batch(
        batch: &RecordBatch,
        schema: &SchemaRef,
    ) -> Result<RecordBatch, ExecutorError> {
        if batch.num_columns() != schema.fields().len() {
            return Err(ExecutorError::InternalError(format!(
                "batch has {} columns, schema expects {}",
                batch.num_columns(),
                schema.fields().len()
            )));
        }
        let columns = batch
            .columns()
            .iter()
            .zip(schema.fields().iter())
            .map(|(column, field)| compute::cast(column, field.data_type()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RecordBatch::try_new(schema.clone(), columns)?)
    }
}
