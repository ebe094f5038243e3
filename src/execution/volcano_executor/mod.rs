mod insert;
mod limit;
mod projection;
mod table_scan;
mod values_scan;

use std::sync::Arc;

use arrow::record_batch::RecordBatch;
use async_trait::async_trait;
use derive_new::new;
use futures::stream::BoxStream;
use futures::{StreamExt, TryStreamExt};
pub use insert::*;
pub use limit::*;
use log::debug;
pub use projection::*;
pub use table_scan::*;
pub use values_scan::*;

use super::{ExecutorError, InsertExecutor};
use crate::catalog::MetastoreRelation;
use crate::planner::LogicalOperator;
use crate::storage::LocalStorage;

pub type BoxedExecutor = BoxStream<'static, Result<RecordBatch, ExecutorError>>;

/// Pull-based executor over [`LocalStorage`].
#[derive(new)]
pub struct VolcanoExecutor {
    storage: Arc<LocalStorage>,
}

impl VolcanoExecutor {
    fn build(&self, plan: LogicalOperator) -> BoxedExecutor {
        match plan {
            LogicalOperator::LogicalValues(op) => ValuesScan::new(op).execute(),
            LogicalOperator::LogicalGet(op) => TableScan::new(op).execute(self.storage.clone()),
            LogicalOperator::LogicalProjection(mut op) => {
                let child = self.build_child(&mut op.base.children);
                Projection::new(op, child).execute()
            }
            LogicalOperator::LogicalLimit(mut op) => {
                let child = self.build_child(&mut op.base.children);
                Limit::new(op, child).execute()
            }
        }
    }

    fn build_child(&self, children: &mut Vec<LogicalOperator>) -> BoxedExecutor {
        match children.pop() {
            Some(child) => self.build(child),
            None => futures::stream::once(async {
                Err(ExecutorError::InternalError(
                    "operator is missing its input".to_string(),
                ))
            })
            .boxed(),
        }
    }

    pub async fn try_execute(
        &self,
        plan: LogicalOperator,
    ) -> Result<Vec<RecordBatch>, ExecutorError> {
        let mut output = Vec::new();
        let mut volcano_executor = self.build(plan);
        while let Some(batch) = volcano_executor.try_next().await? {
            output.push(batch);
        }
        Ok(output)
    }
}

#[async_trait]
impl InsertExecutor for VolcanoExecutor {
    async fn insert_into(
        &self,
        target: &MetastoreRelation,
        source: &LogicalOperator,
        overwrite: bool,
    ) -> Result<(), ExecutorError> {
        let child = self.build(source.clone());
        let rows = Insert::new(target.clone(), overwrite, child)
            .execute(&self.storage)
            .await?;
        debug!(
            "inserted {} rows into {} (overwrite: {})",
            rows, target.identifier, overwrite
        );
        Ok(())
    }
}
