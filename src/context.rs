use std::sync::Arc;

use crate::config::Config;
use crate::encoding::{BlobEncoder, DefaultBlobEncoder};
use crate::urls::{ApiUrls, UrlBuilder};

/// Everything a query needs beyond the repository itself.
///
/// Built once at startup and handed to every entry point; nothing here is
/// read from global state.
#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    pub urls: Arc<dyn UrlBuilder>,
    pub encoder: Arc<dyn BlobEncoder>,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        let urls = Arc::new(ApiUrls::new(&config.base_url));
        Self {
            config,
            urls,
            encoder: Arc::new(DefaultBlobEncoder),
        }
    }
}

pub type SharedContext = Arc<AppContext>;
