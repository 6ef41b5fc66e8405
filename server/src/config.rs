//! Command-line and environment configuration.
//!
//! ```bash
//! todo-server --port 9000 --static-dir ./static
//! PORT=9000 HOST=127.0.0.1 todo-server
//! ```

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server")]
#[command(about = "In-memory todo list API with a static web client")]
#[command(version)]
pub struct Config {
    /// Interface to listen on
    #[arg(long, default_value = "0.0.0.0", env = "HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "PORT")]
    pub port: u16,

    /// Directory served for every path outside `/api`
    #[arg(long, default_value = "./static", env = "STATIC_DIR")]
    pub static_dir: PathBuf,
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_flags_win() {
        let config = Config::try_parse_from([
            "todo-server",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--static-dir",
            "/srv/todo",
        ])
        .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
        assert_eq!(config.static_dir, PathBuf::from("/srv/todo"));
    }

    #[test]
    fn rejects_non_numeric_port() {
        assert!(Config::try_parse_from(["todo-server", "--port", "http"]).is_err());
    }
}
