use std::sync::Arc;

use anyhow::Result;
use arrow::array::{ArrayRef, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use sqlrs_ctas::catalog::{TableDescriptor, TableIdentifier};
use sqlrs_ctas::planner::{
    Attribute, ColumnRef, CreateTableAsInfo, LogicalOperator, LogicalProjection, LogicalValues,
};
use sqlrs_ctas::types::LogicalType;
use sqlrs_ctas::util::pretty_batches;
use sqlrs_ctas::{ClientContext, DatabaseInstance};

fn employees() -> Result<LogicalOperator> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("id", DataType::Int64, false),
        Field::new("first_name", DataType::Utf8, false),
        Field::new("last_name", DataType::Utf8, false),
    ]));
    let batch = RecordBatch::try_new(
        schema,
        vec![
            Arc::new(Int64Array::from(vec![1, 2, 3])) as ArrayRef,
            Arc::new(StringArray::from(vec!["Bill", "Gregg", "John"])) as ArrayRef,
            Arc::new(StringArray::from(vec!["Hopkins", "Langford", "Travis"])) as ArrayRef,
        ],
    )?;
    let output = vec![
        Attribute::new("id".to_string(), LogicalType::Bigint),
        Attribute::new("first_name".to_string(), LogicalType::Varchar),
        Attribute::new("last_name".to_string(), LogicalType::Varchar),
    ];
    Ok(LogicalOperator::LogicalValues(LogicalValues::try_new(
        output,
        vec![batch],
    )?))
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let db = Arc::new(DatabaseInstance::default());
    let ctx = ClientContext::new(db);

    // 1. create table employee as select * from (values ...)
    let employee = TableIdentifier::parse("employee")?;
    ctx.create_table_as(CreateTableAsInfo::new(
        TableDescriptor::for_identifier(employee.clone()),
        Box::new(employees()?),
        false,
    ))
    .await?;

    // 2. create table names as select first_name as name from employee
    let names = TableIdentifier::parse("names")?;
    let query = LogicalProjection::try_new(
        ctx.table(&employee).await?,
        vec![ColumnRef::new(1, Some("name".to_string()))],
    )?;
    ctx.create_table_as(CreateTableAsInfo::new(
        TableDescriptor::for_identifier(names.clone()),
        Box::new(LogicalOperator::LogicalProjection(query)),
        true,
    ))
    .await?;

    // 3. collect result
    let output = ctx.query(ctx.table(&names).await?).await?;
    pretty_batches(&output);
    Ok(())
}
