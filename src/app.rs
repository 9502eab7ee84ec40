use crate::errors::ToolError;
use crate::services::api_config::ApiConfig;
use crate::services::dispatcher::Dispatcher;
use crate::services::logger::Logger;
use crate::services::tool_registry::ToolRegistry;
use crate::services::transport::{BearerTokenSigner, HttpTransport, ReqwestTransport};
use serde_json::json;
use std::sync::Arc;

pub struct App {
    pub logger: Logger,
    pub config: ApiConfig,
    pub dispatcher: Arc<Dispatcher>,
    pub registry: ToolRegistry,
}

impl App {
    pub fn initialize(config: ApiConfig, logger: Logger) -> Result<Self, ToolError> {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()), logger)
    }

    /// Wires the registry around an arbitrary transport. A bearer signer is
    /// installed only when a token is configured.
    pub fn with_transport(
        config: ApiConfig,
        transport: Arc<dyn HttpTransport>,
        logger: Logger,
    ) -> Result<Self, ToolError> {
        let mut dispatcher = Dispatcher::new(config.base_url.clone(), transport)
            .with_logger(logger.child("dispatch"));
        if let Some(token) = &config.token {
            dispatcher = dispatcher.with_signer(Arc::new(BearerTokenSigner::new(token.clone())));
        }
        let dispatcher = Arc::new(dispatcher);
        let registry = ToolRegistry::new(dispatcher.clone())?;

        logger.info(
            "registry tools wired",
            Some(&json!({
                "base_url": config.base_url,
                "tools": registry.len(),
                "auth": config.token.is_some(),
            })),
        );

        Ok(Self {
            logger,
            config,
            dispatcher,
            registry,
        })
    }
}
