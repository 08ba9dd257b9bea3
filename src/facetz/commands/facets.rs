use crate::commands::{CmdResult, Session};
use crate::error::Result;
use crate::model::Dimension;

pub fn run<D: Dimension>(session: &Session<D>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_facets(session.filter().views()))
}
