use clap::Parser;
use htmx_todo_lib::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();
    let config = ServerConfig::parse();
    htmx_todo_lib::run(config).await
}
