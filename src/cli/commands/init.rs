use std::{fs, path::Path};

use anyhow::Result;

use super::{CommandResult, CommandSummary, InitSummary, helper::finish};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write a default config file into the working directory.
pub fn init() -> Result<CommandResult> {
    Ok(finish(
        CommandSummary::Init(init_in(Path::new("."))?),
        Vec::new(),
        0,
        0,
    ))
}

fn init_in(dir: &Path) -> Result<InitSummary> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Ok(InitSummary {
            created: false,
            error: Some(format!("{} already exists", CONFIG_FILE_NAME)),
        });
    }

    fs::write(&config_path, default_config_json()?)?;
    Ok(InitSummary {
        created: true,
        error: None,
    })
}
