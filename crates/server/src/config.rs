//! Server configuration.
//!
//! Every option can come from a command-line flag or an environment
//! variable; flags win.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Args;

/// Port the movie API listens on by default
pub const DEFAULT_PORT: u16 = 3022;

#[derive(Args, Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "MOVIES_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "MOVIES_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// JSON dataset to serve instead of the bundled one
    #[arg(long, env = "MOVIES_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Directory of static assets served for unknown paths
    #[arg(long, env = "MOVIES_PUBLIC_DIR", default_value = "public")]
    pub public_dir: PathBuf,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            data_file: None,
            public_dir: PathBuf::from("public"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        config: ServerConfig,
    }

    #[test]
    fn test_defaults_match_clap_defaults() {
        let cli = TestCli::try_parse_from(["test"]).unwrap();
        assert_eq!(cli.config, ServerConfig::default());
    }

    #[test]
    fn test_flags() {
        let cli = TestCli::try_parse_from([
            "test",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--data-file",
            "movies.json",
        ])
        .unwrap();

        assert_eq!(cli.config.bind_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(cli.config.data_file, Some(PathBuf::from("movies.json")));
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(TestCli::try_parse_from(["test", "--port", "99999"]).is_err());
    }
}
