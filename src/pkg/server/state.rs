use std::sync::Arc;

use crate::pkg::internal::ai::generate::CompletionClient;
use crate::{conf::settings, prelude::Result};

#[derive(Clone)]
pub struct AppState {
    pub ai_client: Arc<CompletionClient>,
}

impl AppState {
    pub fn new() -> Result<AppState> {
        let ai = CompletionClient::new(&settings.ai_endpoint, &settings.ai_key, &settings.ai_model)?;
        Ok(AppState {
            ai_client: Arc::new(ai),
        })
    }
}
