use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use crate::i18n::Catalogs;

#[derive(Clone, Debug)]
pub struct AppState {
    pub catalogs: Catalogs,
    pub assets_dir: PathBuf,
}

impl AppState {
    pub async fn new(locale_dir: Option<&Path>, assets_dir: PathBuf) -> Result<Self> {
        let catalogs = match locale_dir {
            Some(dir) => Catalogs::load_dir(dir).await?,
            None => Catalogs::default(),
        };
        info!(languages = ?catalogs.languages(), "message catalogs ready");

        Ok(Self {
            catalogs,
            assets_dir,
        })
    }
}
