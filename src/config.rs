use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_PATH: &str = "data/records.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub data_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}

impl Config {
    /// Reads `APP_BIND_ADDR`, `PORT` and `APP_DATA_PATH`; unparsable values keep the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(addr) = lookup("APP_BIND_ADDR").and_then(|value| value.parse().ok()) {
            config.bind_addr = addr;
        }
        if let Some(port) = lookup("PORT").and_then(|value| value.parse().ok()) {
            config.port = port;
        }
        if let Some(path) = lookup("APP_DATA_PATH").filter(|value| !value.trim().is_empty()) {
            config.data_path = PathBuf::from(path);
        }

        config
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_path, PathBuf::from("data/records.json"));
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn overrides_and_bad_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "not-a-port"),
            ("APP_DATA_PATH", "/tmp/habits.json"),
            ("APP_BIND_ADDR", "127.0.0.1"),
        ]));
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_path, PathBuf::from("/tmp/habits.json"));
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
    }
}
