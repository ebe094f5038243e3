use super::{LogicalOperator, LogicalOperatorBase};

#[derive(Debug, Clone)]
pub struct LogicalLimit {
    pub(crate) base: LogicalOperatorBase,
    pub(crate) limit: Option<u64>,
    pub(crate) offset: Option<u64>,
}

impl LogicalLimit {
    pub fn new(child: LogicalOperator, limit: Option<u64>, offset: Option<u64>) -> Self {
        let output = child.output().to_vec();
        Self {
            base: LogicalOperatorBase::new(vec![child], output),
            limit,
            offset,
        }
    }
}
