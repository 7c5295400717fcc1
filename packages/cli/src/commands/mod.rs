pub mod export;
pub mod layout;
pub mod reports;

pub use export::{export, ExportArgs};
pub use layout::{add, move_element, remove, sample_layout, AddArgs, MoveArgs, RemoveArgs, SampleLayoutArgs};
pub use reports::{create, delete, list, show, CreateArgs, DeleteArgs, ListArgs, ShowArgs};

use crate::config::Config;
use folio_client::{ClientConfig, ReportsClient};

/// Shared state handed to every command
pub struct Context {
    pub cwd: String,
    pub config: Config,
    pub client: ReportsClient,
}

impl Context {
    pub fn new(cwd: String, config: Config, api_url: Option<&str>) -> Self {
        let client = ReportsClient::new(ClientConfig::new(config.resolve_api_url(api_url)));
        Self {
            cwd,
            config,
            client,
        }
    }
}
