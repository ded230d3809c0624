use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::document_service::DocumentService;
use crate::services::mail_service::Mailer;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub mailer: Arc<dyn Mailer>,
    pub documents: DocumentService,
}

impl AppState {
    pub fn new(config: AppConfig, mailer: Arc<dyn Mailer>) -> Self {
        AppState {
            config: Arc::new(config),
            mailer,
            documents: DocumentService::new(),
        }
    }
}
