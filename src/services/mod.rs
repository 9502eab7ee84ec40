pub mod api_config;
pub mod dispatcher;
pub mod logger;
pub mod tool_registry;
pub mod transport;
