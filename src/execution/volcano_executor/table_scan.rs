use std::sync::Arc;

use arrow::record_batch::RecordBatch;
use async_stream::try_stream;
use derive_new::new;
use futures::StreamExt;

use super::BoxedExecutor;
use crate::execution::SchemaUtil;
use crate::planner::LogicalGet;
use crate::storage::LocalStorage;

#[derive(new)]
pub struct TableScan {
    pub(crate) plan: LogicalGet,
}

impl TableScan {
    pub fn execute(self, storage: Arc<LocalStorage>) -> BoxedExecutor {
        let schema = SchemaUtil::new_schema_ref(&self.plan.base.output);
        let mut reader = LocalStorage::create_reader(&self.plan.relation.identifier);
        try_stream! {
            while let Some(batch) = reader.next_batch(&storage)? {
                let columns = batch.columns().to_vec();
                yield RecordBatch::try_new(schema.clone(), columns)?;
            }
        }
        .boxed()
    }
}
