use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use arrow::compute;
use arrow::record_batch::RecordBatch;
use derive_new::new;

use super::StorageError;
use crate::catalog::TableIdentifier;

const STORAGE_BATCH_SIZE: usize = 1024;

/// Used as in-memory storage
#[derive(Default)]
pub struct LocalStorage {
    table_manager: RwLock<LocalTableManager>,
}

impl LocalStorage {
    fn read(&self) -> Result<RwLockReadGuard<'_, LocalTableManager>, StorageError> {
        self.table_manager
            .try_read()
            .map_err(|_| StorageError::StorageLocked)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, LocalTableManager>, StorageError> {
        self.table_manager
            .try_write()
            .map_err(|_| StorageError::StorageLocked)
    }

    pub fn append(
        &self,
        table: &TableIdentifier,
        batches: Vec<RecordBatch>,
    ) -> Result<(), StorageError> {
        let mut manager = self.write()?;
        let storage = manager.init_storage(table);
        for batch in batches {
            storage.append(batch)?;
        }
        Ok(())
    }

    /// Replaces all data of the table with `batches`.
    pub fn overwrite(
        &self,
        table: &TableIdentifier,
        batches: Vec<RecordBatch>,
    ) -> Result<(), StorageError> {
        let mut storage = LocalTableStorage::default();
        for batch in batches {
            storage.append(batch)?;
        }
        self.write()?.table_storage.insert(table.clone(), storage);
        Ok(())
    }

    pub fn num_rows(&self, table: &TableIdentifier) -> Result<usize, StorageError> {
        Ok(self
            .read()?
            .table_storage
            .get(table)
            .map(|s| s.data.iter().map(|b| b.num_rows()).sum())
            .unwrap_or(0))
    }

    pub fn create_reader(table: &TableIdentifier) -> LocalStorageReader {
        LocalStorageReader::new(table.clone())
    }
}

#[derive(new, Debug, Clone)]
pub struct LocalStorageReader {
    table: TableIdentifier,
    #[new(default)]
    current_batch_cursor: usize,
}

impl LocalStorageReader {
    /// A table that was registered but never written reads as empty.
    pub fn next_batch(
        &mut self,
        storage: &LocalStorage,
    ) -> Result<Option<RecordBatch>, StorageError> {
        let batch = storage
            .read()?
            .fetch_table_batch(&self.table, self.current_batch_cursor);
        self.current_batch_cursor += 1;
        Ok(batch)
    }
}

#[derive(Default)]
struct LocalTableManager {
    table_storage: HashMap<TableIdentifier, LocalTableStorage>,
}

impl LocalTableManager {
    fn init_storage(&mut self, table: &TableIdentifier) -> &mut LocalTableStorage {
        self.table_storage.entry(table.clone()).or_default()
    }

    fn fetch_table_batch(&self, table: &TableIdentifier, batch_idx: usize) -> Option<RecordBatch> {
        self.table_storage
            .get(table)
            .and_then(|s| s.fetch_batch(batch_idx))
    }
}

#[derive(Default)]
struct LocalTableStorage {
    data: Vec<RecordBatch>,
}

impl LocalTableStorage {
    fn append(&mut self, batch: RecordBatch) -> Result<(), StorageError> {
        if batch.num_rows() == 0 {
            return Ok(());
        }
        if let Some(last_batch) = self.data.last_mut() {
            let remaining_count = STORAGE_BATCH_SIZE.saturating_sub(last_batch.num_rows());
            if remaining_count > 0 {
                // need to merge current batch into last unfull batch
                let appended_batch = batch.slice(0, remaining_count.min(batch.num_rows()));
                *last_batch = compute::concat_batches(
                    &last_batch.schema(),
                    &[last_batch.clone(), appended_batch],
                )?;

                if batch.num_rows() > remaining_count {
                    // need a new batch
                    let new_batch =
                        batch.slice(remaining_count, batch.num_rows() - remaining_count);
                    self.data.push(new_batch);
                }
                return Ok(());
            }
        }
        self.data.push(batch);
        Ok(())
    }

    fn fetch_batch(&self, batch_idx: usize) -> Option<RecordBatch> {
        self.data.get(batch_idx).cloned()
    }
}

#[cfg(test)]
mod tests {
    use std::ops::Range;
    use std::sync::Arc;

    use arrow::array::Int32Array;
    use arrow::datatypes::{DataType, Field, Schema};
    use test_case::test_case;

    use super::*;

    fn range_to_chunk(range: Range<i32>) -> RecordBatch {
        let schema = Arc::new(Schema::new(vec![Field::new("a", DataType::Int32, true)]));
        let data: Vec<_> = range.collect();
        RecordBatch::try_new(schema, vec![Arc::new(Int32Array::from(data))]).unwrap()
    }

    fn read_all(storage: &LocalStorage, table: &TableIdentifier) -> Vec<RecordBatch> {
        let mut reader = LocalStorage::create_reader(table);
        let mut batches = vec![];
        while let Some(batch) = reader.next_batch(storage).unwrap() {
            batches.push(batch);
        }
        batches
    }

    fn table() -> TableIdentifier {
        TableIdentifier::new("default".to_string(), "t1".to_string())
    }

    #[test_case(&[(0..10)], &[10])]
    #[test_case(&[(0..10), (10..20)], &[20])]
    #[test_case(&[(0..1000), (1000..1100)], &[1024, 76])]
    #[test_case(&[(0..3000)], &[3000])]
    #[test_case(&[(0..0), (0..5)], &[5])]
    fn append_merges_batches(inputs: &[Range<i32>], batch_rows: &[usize]) {
        let storage = LocalStorage::default();
        let batches = inputs.iter().cloned().map(range_to_chunk).collect();
        storage.append(&table(), batches).unwrap();
        let rows = read_all(&storage, &table())
            .iter()
            .map(|b| b.num_rows())
            .collect::<Vec<_>>();
        assert_eq!(rows, batch_rows);
    }

    #[test]
    fn overwrite_replaces_data() {
        let storage = LocalStorage::default();
        storage.append(&table(), vec![range_to_chunk(0..10)]).unwrap();
        storage
            .overwrite(&table(), vec![range_to_chunk(0..3)])
            .unwrap();
        assert_eq!(storage.num_rows(&table()).unwrap(), 3);
        assert_eq!(read_all(&storage, &table()), vec![range_to_chunk(0..3)]);
    }

    #[test]
    fn unknown_table_is_empty() {
        let storage = LocalStorage::default();
        assert!(read_all(&storage, &table()).is_empty());
        assert_eq!(storage.num_rows(&table()).unwrap(), 0);
    }
}
