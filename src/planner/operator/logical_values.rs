use arrow::record_batch::RecordBatch;

use super::{Attribute, LogicalOperatorBase};
use crate::planner::PlannerError;
use crate::types::LogicalType;

/// Constant rows held in memory.
#[derive(Debug, Clone)]
pub struct LogicalValues {
    pub(crate) base: LogicalOperatorBase,
    pub(crate) batches: Vec<RecordBatch>,
}

impl LogicalValues {
    pub fn try_new(
        output: Vec<Attribute>,
        batches: Vec<RecordBatch>,
    ) -> Result<Self, PlannerError> {
        if let Some(attr) = output.iter().find(|attr| attr.ty == LogicalType::Invalid) {
            return Err(PlannerError::UnresolvedColumnType(attr.name.clone()));
        }
        for batch in batches.iter() {
            if batch.num_columns() != output.len() {
                return Err(PlannerError::ColumnCountMismatch {
                    expected: output.len(),
                    actual: batch.num_columns(),
                });
            }
        }
        Ok(Self {
            base: LogicalOperatorBase::new(vec![], output),
            batches,
        })
    }
}
