use std::sync::Arc;

use crate::config::Config;
use crate::parser::extractor::{SkillExtractor, TitleCaseExtractor};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable extractor. Default: TitleCaseExtractor.
    pub extractor: Arc<dyn SkillExtractor>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            config,
            extractor: Arc::new(TitleCaseExtractor),
        }
    }
}
