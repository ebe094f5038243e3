mod logical_get;
mod logical_limit;
mod logical_projection;
mod logical_values;

use derive_new::new;
pub use logical_get::*;
pub use logical_limit::*;
pub use logical_projection::*;
pub use logical_values::*;

use crate::types::LogicalType;

/// A named, typed column produced by a logical operator.
#[derive(new, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attribute {
    pub(crate) name: String,
    pub(crate) ty: LogicalType,
}

impl Attribute {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &LogicalType {
        &self.ty
    }
}

#[derive(new, Default, Debug, Clone)]
pub struct LogicalOperatorBase {
    pub(crate) children: Vec<LogicalOperator>,
    /// The columns returned by this logical operator.
    pub(crate) output: Vec<Attribute>,
}

#[derive(Debug, Clone)]
pub enum LogicalOperator {
    LogicalValues(LogicalValues),
    LogicalGet(LogicalGet),
    LogicalProjection(LogicalProjection),
    LogicalLimit(LogicalLimit),
}

impl LogicalOperator {
    /// The ordered output columns of the plan.
    pub fn output(&self) -> &[Attribute] {
        match self {
            LogicalOperator::LogicalValues(op) => &op.base.output,
            LogicalOperator::LogicalGet(op) => &op.base.output,
            LogicalOperator::LogicalProjection(op) => &op.base.output,
            LogicalOperator::LogicalLimit(op) => &op.base.output,
        }
    }
}
