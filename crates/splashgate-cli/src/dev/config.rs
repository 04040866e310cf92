//! Development server configuration.
//!
//! Resolves the bind address from `server.*` settings and `dev` flags.

use crate::cli::DevArgs;
use crate::config::SplashConfig;
use crate::error::{ConfigError, Result};
use crate::ui;
use std::net::{IpAddr, Ipv4Addr, SocketAddr, TcpListener};
use std::path::PathBuf;

/// How many ports past the requested one are tried when it is taken.
const PORT_SEARCH_RANGE: u16 = 10;

/// Development server configuration.
#[derive(Debug, Clone)]
pub struct DevConfig {
    /// Project configuration (flags already applied)
    pub base: SplashConfig,

    /// Server socket address (IP + port)
    pub addr: SocketAddr,

    /// Directory served as static files
    pub root: PathBuf,
}

impl DevConfig {
    /// Apply `dev` flags to the loaded configuration and pick the address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the host is not an IP address
    /// or no port in range can be bound.
    pub fn from_args(mut base: SplashConfig, args: &DevArgs) -> Result<Self> {
        if let Some(port) = args.port {
            base.server.port = port;
        }
        if let Some(host) = &args.host {
            base.server.host = host.clone();
        }
        if args.strict_port {
            base.server.strict_port = true;
        } else if args.no_strict_port {
            base.server.strict_port = false;
        }

        let ip = parse_host(&base.server.host)?;
        let addr = Self::find_available_port(ip, base.server.port, base.server.strict_port)?;
        let root = base.root.clone();

        Ok(Self { base, addr, root })
    }

    /// Find an available port starting from the requested port.
    ///
    /// With `strict` set only the requested port is tried. Otherwise the next
    /// ports (up to +10) are probed and the first free one wins.
    fn find_available_port(ip: IpAddr, requested_port: u16, strict: bool) -> Result<SocketAddr> {
        if requested_port != 0 && requested_port < 1024 {
            ui::warning(&format!(
                "Port {} is in privileged range, may require root access",
                requested_port
            ));
        }

        let addr = SocketAddr::new(ip, requested_port);
        if TcpListener::bind(addr).is_ok() {
            return Ok(addr);
        }

        if strict {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                value: requested_port.to_string(),
                hint: "The port is in use. Free it, pick another with --port, or pass --no-strict-port".to_string(),
            }
            .into());
        }

        for offset in 1..=PORT_SEARCH_RANGE {
            let Some(port) = requested_port.checked_add(offset) else {
                break;
            };
            let addr = SocketAddr::new(ip, port);
            if TcpListener::bind(addr).is_ok() {
                ui::warning(&format!(
                    "Port {} is busy, using port {} instead",
                    requested_port, port
                ));
                return Ok(addr);
            }
        }

        Err(ConfigError::InvalidValue {
            field: "server.port".to_string(),
            value: requested_port.to_string(),
            hint: format!(
                "Ports {}-{} are all in use. Try a different port range.",
                requested_port,
                requested_port.saturating_add(PORT_SEARCH_RANGE)
            ),
        }
        .into())
    }

    /// Get the server URL as a string.
    pub fn server_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

fn parse_host(host: &str) -> Result<IpAddr> {
    if host.eq_ignore_ascii_case("localhost") {
        return Ok(IpAddr::V4(Ipv4Addr::LOCALHOST));
    }

    host.parse().map_err(|_| {
        ConfigError::InvalidValue {
            field: "server.host".to_string(),
            value: host.to_string(),
            hint: "Use an IP address such as 127.0.0.1 or 0.0.0.0, or \"localhost\"".to_string(),
        }
        .into()
    })
}
