use arrow::record_batch::RecordBatch;
use async_stream::try_stream;
use derive_new::new;
use futures::StreamExt;

use super::BoxedExecutor;
use crate::execution::{ExecutorError, SchemaUtil};
use crate::planner::LogicalProjection;

#[derive(new)]
pub struct Projection {
    pub(crate) plan: LogicalProjection,
    pub(crate) child: BoxedExecutor,
}

impl Projection {
    pub fn execute(self) -> BoxedExecutor {
        let schema = SchemaUtil::new_schema_ref(&self.plan.base.output);
        let indices = self
            .plan
            .columns
            .iter()
            .map(|col| col.index)
            .collect::<Vec<_>>();
        let mut child = self.child;
        try_stream! {
            while let Some(batch) = child.next().await {
                let batch = batch?;
                let columns = indices
                    .iter()
                    .map(|idx| {
                        batch.columns().get(*idx).cloned().ok_or_else(|| {
                            ExecutorError::InternalError(format!(
                                "projection index {} out of range",
                                idx
                            ))
                        })
                    })
                    .collect::<Result<Vec<_>, ExecutorError>>()?;
                yield RecordBatch::try_new(schema.clone(), columns)?;
            }
        }
        .boxed()
    }
}
