use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Runtime configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP/WebSocket listener binds to.
    pub addr: SocketAddr,
    /// Directory the endpoint application bundle is served from.
    pub assets_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        let assets_dir = env::var("ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("public"));

        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], port)),
            assets_dir,
        }
    }
}
