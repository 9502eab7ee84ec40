use clap::Parser;
use registry_mcp::app::App;
use registry_mcp::errors::ToolError;
use registry_mcp::mcp::catalog::tool_catalog;
use registry_mcp::services::api_config::ApiConfig;
use registry_mcp::services::logger::{LogLevel, Logger};

#[derive(Debug, Parser)]
#[command(name = "registry-mcp", version, about = "API registry tools over MCP stdio")]
struct Args {
    /// Registry REST endpoint; falls back to REGISTRY_API_BASE_URL.
    #[arg(long)]
    base_url: Option<String>,

    /// Print every tool name and exit.
    #[arg(long)]
    list_tools: bool,

    /// error, warn, info or debug; falls back to REGISTRY_MCP_LOG_LEVEL.
    #[arg(long)]
    log_level: Option<LogLevel>,
}

async fn serve(base_url: Option<&str>, logger: Logger) -> Result<(), ToolError> {
    let config = ApiConfig::resolve(base_url, None)?;
    let app = App::initialize(config, logger)?;
    registry_mcp::mcp::server::run_stdio(app).await
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if args.list_tools {
        for tool in tool_catalog() {
            println!("{}", tool.name);
        }
        return;
    }

    let mut logger = Logger::new("registry-mcp");
    if let Some(level) = args.log_level {
        logger = logger.with_level(level);
    }

    if let Err(err) = serve(args.base_url.as_deref(), logger).await {
        match &err.hint {
            Some(hint) => eprintln!("registry-mcp: {} ({})", err, hint),
            None => eprintln!("registry-mcp: {}", err),
        }
        std::process::exit(1);
    }
}
