use async_stream::try_stream;
use derive_new::new;
use futures::StreamExt;

use super::BoxedExecutor;
use crate::planner::LogicalLimit;

#[derive(new)]
pub struct Limit {
    pub(crate) plan: LogicalLimit,
    pub(crate) child: BoxedExecutor,
}

impl Limit {
    pub fn execute(self) -> BoxedExecutor {
        let limit = self.plan.limit;
        let offset_val = self.plan.offset.unwrap_or(0);
        let mut child = self.child;
        try_stream! {
            if limit == Some(0) {
                return;
            }

            let mut returned_count: u64 = 0;
            // the end index of the whole returned rows
            let total_end = limit.map_or(u64::MAX, |l| offset_val.saturating_add(l));

            while let Some(batch) = child.next().await {
                let batch = batch?;

                let cardinality = batch.num_rows() as u64;

                let start = returned_count.max(offset_val) - returned_count;
                // the min of both matches limit semantics, relative to the current batch
                let end = total_end.min(returned_count + cardinality) - returned_count;

                returned_count += cardinality;

                // example: offset=1000, limit=2, cardinality=100
                // start = 0.max(1000)-0 = 1000
                // end = (1000+2).min(0+100)-0 = 100
                // start > end, skip this batch.
                if start >= end {
                    continue;
                }

                if (start..end) == (0..cardinality) {
                    yield batch;
                } else {
                    yield batch.slice(start as usize, (end - start) as usize);
                }

                // returned_count grows by whole batches, so it can pass total_end
                // example: offset=1, limit=4, cardinality=6, data=[(0..6)]
                if returned_count >= total_end {
                    break;
                }
            }
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use std::ops::Range;
    use std::sync::Arc;

    use arrow::array::Int32Array;
    use arrow::datatypes::{DataType, Field, Schema};
    use arrow::record_batch::RecordBatch;
    use futures::TryStreamExt;
    use itertools::Itertools;
    use test_case::test_case;

    use super::*;
    use crate::planner::{Attribute, LogicalOperator, LogicalValues};
    use crate::types::LogicalType;

    #[test_case(&[(0..6)], Some(4), Some(1), &[(1..5)])]
    #[test_case(&[(0..6)], Some(10), Some(0), &[(0..6)])]
    #[test_case(&[(0..6)], Some(0), Some(10), &[])]
    #[test_case(&[(0..6)], None, Some(2), &[(2..6)])]
    #[test_case(&[(0..2), (2..4), (4..6)], Some(4), Some(1), &[(1..2),(2..4),(4..5)])]
    #[test_case(&[(0..2), (2..4), (4..6)], Some(2), Some(1), &[(1..2),(2..3)])]
    #[test_case(&[(0..2), (2..4), (4..6)], Some(0), Some(3), &[])]
    #[test_case(&[(0..2), (2..4), (4..6)], None, Some(3), &[(3..4),(4..6)])]
    #[tokio::test]
    async fn limit(
        inputs: &'static [Range<i32>],
        limit: Option<u64>,
        offset: Option<u64>,
        outputs: &'static [Range<i32>],
    ) {
        let values = LogicalValues::try_new(
            vec![Attribute::new("a".to_string(), LogicalType::Integer)],
            vec![],
        )
        .unwrap();
        let executor = Limit {
            plan: LogicalLimit::new(LogicalOperator::LogicalValues(values), limit, offset),
            child: futures::stream::iter(inputs.iter().map(range_to_chunk).map(Ok)).boxed(),
        };
        let actual = executor.execute().try_collect::<Vec<_>>().await.unwrap();
        let outputs = outputs.iter().map(range_to_chunk).collect_vec();
        assert_eq!(actual, outputs);
    }

    fn range_to_chunk(range: &Range<i32>) -> RecordBatch {
        let schema = Arc::new(Schema::new(vec![Field::new("a", DataType::Int32, true)]));
        let data: Vec<_> = range.clone().collect();
        RecordBatch::try_new(schema, vec![Arc::new(Int32Array::from(data))]).unwrap()
    }
}
