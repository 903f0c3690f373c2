use anyhow::{anyhow, Error};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

const DEFAULT_IP: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 8080;

/// Where the server build listens. Resolved the same way the Dioxus server
/// resolves `IP` and `PORT`, so the startup log matches the real bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteConfig {
    pub ip: IpAddr,
    pub port: u16,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            ip: DEFAULT_IP,
            port: DEFAULT_PORT,
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> (Self, Vec<Error>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Parse `IP` and `PORT` through `lookup`. A value that does not parse
    /// keeps that variable's default and is reported in the returned errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<Error>) {
        let mut config = Self::default();
        let mut errors = Vec::new();

        if let Some(ip) = parse_var(&lookup, "IP", &mut errors) {
            config.ip = ip;
        }
        if let Some(port) = parse_var(&lookup, "PORT", &mut errors) {
            config.port = port;
        }

        (config, errors)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.ip, self.port)
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    errors: &mut Vec<Error>,
) -> Option<T> {
    let value = lookup(key)?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            errors.push(anyhow!("invalid {key} value {value:?}"));
            None
        }
    }
}
