use async_stream::try_stream;
use derive_new::new;
use futures::StreamExt;

use super::BoxedExecutor;
use crate::execution::SchemaUtil;
use crate::planner::LogicalValues;

#[derive(new)]
pub struct ValuesScan {
    pub(crate) plan: LogicalValues,
}

impl ValuesScan {
    pub fn execute(self) -> BoxedExecutor {
        let schema = SchemaUtil::new_schema_ref(&self.plan.base.output);
        let batches = self.plan.batches;
        try_stream! {
            for batch in batches {
                yield SchemaUtil::cast_batch(&batch, &schema)?;
            }
        }
        .boxed()
    }
}
