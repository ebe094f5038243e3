use derive_new::new;
use futures::TryStreamExt;

use super::BoxedExecutor;
use crate::catalog::MetastoreRelation;
use crate::execution::{ExecutorError, SchemaUtil};
use crate::storage::LocalStorage;

#[derive(new)]
pub struct Insert {
    pub(crate) target: MetastoreRelation,
    pub(crate) overwrite: bool,
    pub(crate) child: BoxedExecutor,
}

impl Insert {
    /// Drains the child, casting every batch to the target schema, and only then writes to
    /// storage. Returns the number of rows written.
    pub async fn execute(self, storage: &LocalStorage) -> Result<usize, ExecutorError> {
        let schema = self.target.arrow_schema()?;
        let mut child = self.child;
        let mut batches = vec![];
        let mut rows = 0;
        while let Some(batch) = child.try_next().await? {
            if batch.num_columns() != schema.fields().len() {
                return Err(ExecutorError::ColumnCountMismatch {
                    table: self.target.identifier.to_string(),
                    expected: schema.fields().len(),
                    actual: batch.num_columns(),
                });
            }
            rows += batch.num_rows();
            batches.push(SchemaUtil::cast_batch(&batch, &schema)?);
        }

        if self.overwrite {
            storage.overwrite(&self.target.identifier, batches)?;
        } else {
            storage.append(&self.target.identifier, batches)?;
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use arrow::array::{Int32Array, Int64Array, StringArray};
    use arrow::datatypes::{DataType, Field, Schema};
    use arrow::record_batch::RecordBatch;
    use futures::StreamExt;

    use super::*;
    use crate::catalog::{ColumnDefinition, StorageFormat, TableIdentifier};

    fn target() -> MetastoreRelation {
        MetastoreRelation::new(
            1,
            TableIdentifier::new("default".to_string(), "t1".to_string()),
            StorageFormat::default(),
            vec![
                ColumnDefinition::new("a".to_string(), "bigint".to_string(), None),
                ColumnDefinition::new("b".to_string(), "string".to_string(), None),
            ],
        )
    }

    fn batch(ids: Vec<i32>, names: Vec<&str>) -> RecordBatch {
        let schema = Arc::new(Schema::new(vec![
            Field::new("x", DataType::Int32, false),
            Field::new("y", DataType::Utf8, false),
        ]));
        RecordBatch::try_new(
            schema,
            vec![
                Arc::new(Int32Array::from(ids)),
                Arc::new(StringArray::from(names)),
            ],
        )
        .unwrap()
    }

    fn child(batches: Vec<RecordBatch>) -> BoxedExecutor {
        futures::stream::iter(batches.into_iter().map(Ok)).boxed()
    }

    #[tokio::test]
    async fn insert_casts_to_target_schema() {
        let storage = LocalStorage::default();
        let insert = Insert::new(target(), true, child(vec![batch(vec![1, 2], vec!["x", "y"])]));
        assert_eq!(insert.execute(&storage).await.unwrap(), 2);

        let mut reader = LocalStorage::create_reader(&target().identifier);
        let stored = reader.next_batch(&storage).unwrap().unwrap();
        assert_eq!(stored.schema(), target().arrow_schema().unwrap());
        assert_eq!(
            stored
                .column(0)
                .as_any()
                .downcast_ref::<Int64Array>()
                .unwrap()
                .values()
                .to_vec(),
            vec![1i64, 2]
        );
    }

    #[tokio::test]
    async fn overwrite_and_append() {
        let storage = LocalStorage::default();
        let identifier = target().identifier;
        Insert::new(target(), true, child(vec![batch(vec![1], vec!["x"])]))
            .execute(&storage)
            .await
            .unwrap();
        Insert::new(target(), false, child(vec![batch(vec![2, 3], vec!["y", "z"])]))
            .execute(&storage)
            .await
            .unwrap();
        assert_eq!(storage.num_rows(&identifier).unwrap(), 3);

        Insert::new(target(), true, child(vec![batch(vec![4], vec!["w"])]))
            .execute(&storage)
            .await
            .unwrap();
        assert_eq!(storage.num_rows(&identifier).unwrap(), 1);
    }

    #[tokio::test]
    async fn column_count_mismatch_writes_nothing() {
        let storage = LocalStorage::default();
        let schema = Arc::new(Schema::new(vec![Field::new("x", DataType::Int32, false)]));
        let narrow =
            RecordBatch::try_new(schema, vec![Arc::new(Int32Array::from(vec![1]))]).unwrap();
        let insert = Insert::new(
            target(),
            true,
            child(vec![batch(vec![1], vec!["x"]), narrow]),
        );
        assert!(matches!(
            insert.execute(&storage).await,
            Err(ExecutorError::ColumnCountMismatch {
                expected: 2,
                actual: 1,
                ..
            })
        ));
        assert_eq!(storage.num_rows(&target().identifier).unwrap(), 0);
    }
}
