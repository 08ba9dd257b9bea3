use crate::commands::{CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::model::Dimension;

pub fn run<D: Dimension>(session: &mut Session<D>) -> Result<CmdResult> {
    let active = session.filter().selection().iter().count();
    session.filter_mut().clear_all();

    let mut result = CmdResult::default().with_facets(session.filter().views());
    result.add_message(CmdMessage::info(format!("Cleared {} selection(s)", active)));
    Ok(result)
}
