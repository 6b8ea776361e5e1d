use anyhow::{Context, Result};
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Server configuration, built once at startup and shared with every handler
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: "127.0.0.1")
    pub host: String,

    /// Bind port (default: 8080)
    pub port: u16,

    /// Directory served under `/static` (default: "static")
    pub static_root: PathBuf,

    /// Directory uploaded files are written to (default: "static/uploads")
    pub uploads_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            static_root: PathBuf::from("static"),
            uploads_dir: PathBuf::from("static").join("uploads"),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            host: env::var("HOST").unwrap_or(default.host),

            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.port),

            static_root: env::var("STATIC_ROOT")
                .map(PathBuf::from)
                .unwrap_or(default.static_root),

            uploads_dir: env::var("UPLOADS_DIR")
                .map(PathBuf::from)
                .unwrap_or(default.uploads_dir),
        }
    }

    /// Config rooted somewhere other than the working directory, uploads under `<root>/uploads`
    pub fn with_static_root(root: impl Into<PathBuf>) -> Self {
        let static_root = root.into();
        Self {
            uploads_dir: static_root.join("uploads"),
            static_root,
            ..Self::default()
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .with_context(|| format!("Invalid HOST '{}'", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
