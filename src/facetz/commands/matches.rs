use crate::commands::{CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::model::{Dimension, ItemView};

/// Items agreeing with every active selection, in catalog order.
pub fn run<D: Dimension>(session: &Session<D>) -> Result<CmdResult> {
    let selection = session.filter().selection();
    let matched: Vec<ItemView> = session
        .items()
        .iter()
        .enumerate()
        .filter(|(_, item)| selection.matches(item))
        .map(|(pos, item)| ItemView::new(pos, item))
        .collect();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "{} of {} items match",
        matched.len(),
        session.items().len()
    )));
    Ok(result.with_matched_items(matched))
}
