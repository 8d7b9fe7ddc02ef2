use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "htmx-todo", version, about = "Server-rendered todo list")]
pub struct ServerConfig {
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// JSON file holding every todo.
    #[arg(long, env = "TODO_DB_PATH", default_value = "db.json")]
    pub db_path: PathBuf,

    /// Artificial delay before answering a create, in milliseconds.
    #[arg(long, env = "TODO_CREATE_DELAY_MS", default_value_t = 0)]
    pub create_delay_ms: u64,

    /// Write rolling JSON logs here instead of stdout.
    #[arg(long, env = "TODO_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn create_delay(&self) -> Duration {
        Duration::from_millis(self.create_delay_ms)
    }
}
