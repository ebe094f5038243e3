use super::LogicalOperatorBase;
use crate::catalog::MetastoreRelation;
use crate::planner::PlannerError;

/// Scans every row of a metastore table.
#[derive(Debug, Clone)]
pub struct LogicalGet {
    pub(crate) base: LogicalOperatorBase,
    pub(crate) relation: MetastoreRelation,
}

impl LogicalGet {
    pub fn try_new(relation: MetastoreRelation) -> Result<Self, PlannerError> {
        let output = relation.output()?;
        Ok(Self {
            base: LogicalOperatorBase::new(vec![], output),
            relation,
        })
    }
}
