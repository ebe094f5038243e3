use derive_new::new;

use super::{Attribute, LogicalOperator, LogicalOperatorBase};
use crate::planner::PlannerError;

/// Reference to a child column, optionally renamed.
#[derive(new, Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    pub(crate) index: usize,
    pub(crate) alias: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LogicalProjection {
    pub(crate) base: LogicalOperatorBase,
    pub(crate) columns: Vec<ColumnRef>,
}

impl LogicalProjection {
    pub fn try_new(
        child: LogicalOperator,
        columns: Vec<ColumnRef>,
    ) -> Result<Self, PlannerError> {
        let input = child.output();
        let output = columns
            .iter()
            .map(|col| -> Result<Attribute, PlannerError> {
                let attr = input
                    .get(col.index)
                    .ok_or(PlannerError::ColumnIndexOutOfRange {
                        index: col.index,
                        len: input.len(),
                    })?;
                let name = col.alias.clone().unwrap_or_else(|| attr.name.clone());
                Ok(Attribute::new(name, attr.ty.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            base: LogicalOperatorBase::new(vec![child], output),
            columns,
        })
    }
}
