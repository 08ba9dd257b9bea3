use crate::commands::{CmdMessage, CmdResult};
use crate::config::FacetzConfig;
use crate::error::Result;
use crate::model::Dimension;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run<D: Dimension>(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = FacetzConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config.entries::<D>()))
        }
        ConfigAction::ShowKey(key) => {
            let config = FacetzConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get::<D>(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = FacetzConfig::load(dir)?;
            if let Err(e) = config.set::<D>(&key, &value) {
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::error(e.to_string()));
                return Ok(result);
            }
            config.save(dir)?;
            let mut result = CmdResult::default().with_config(config.entries::<D>());
            result.add_message(CmdMessage::success(format!("{} set to {}", key, value)));
            Ok(result)
        }
    }
}
