use std::path::PathBuf;

use anyhow::Result;
use once_cell::sync::OnceCell;

use crate::competitions::{self, CompetitionRecord};
use crate::config::Config;
use crate::xg::ModelParams;

/// Read-only process-wide data: the competitions dataset and the xG model.
/// Both files are static, so each is read once on first use and memoized
/// for the process lifetime.
#[derive(Debug)]
pub struct DataStore {
    competitions_path: PathBuf,
    model_path: PathBuf,
    competitions: OnceCell<Vec<CompetitionRecord>>,
    model: OnceCell<ModelParams>,
}

impl DataStore {
    pub fn new(config: &Config) -> Self {
        Self {
            competitions_path: config.competitions_path.clone(),
            model_path: config.model_path.clone(),
            competitions: OnceCell::new(),
            model: OnceCell::new(),
        }
    }

    pub fn competitions(&self) -> Result<&[CompetitionRecord]> {
        let records = self
            .competitions
            .get_or_try_init(|| competitions::load_competitions(&self.competitions_path))?;
        Ok(records.as_slice())
    }

    pub fn model(&self) -> Result<&ModelParams> {
        self.model
            .get_or_try_init(|| ModelParams::load(&self.model_path))
    }
}
