use crate::commands::{CmdResult, DimensionInfo, Session};
use crate::config::FacetzConfig;
use crate::error::Result;
use crate::model::Dimension;

/// Dimensions in declared order, with their effective fields and value counts.
pub fn run<D: Dimension>(session: &Session<D>, config: &FacetzConfig) -> Result<CmdResult> {
    let dimensions = D::ALL
        .iter()
        .map(|&d| DimensionInfo {
            name: d.name(),
            field: config.field_for(d),
            values: session.filter().index().values(d).len(),
        })
        .collect();
    Ok(CmdResult::default().with_dimensions(dimensions))
}
