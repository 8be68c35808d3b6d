use murmur_db::client::PoolConfig;
use serde::Deserialize;
use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    time::Duration,
};

/// Settings read from the process environment (and `.env`).
#[derive(Clone, Eq, PartialEq, Debug, Hash, Deserialize)]
pub struct Config {
    pub database_url: String,
    #[serde(default = "default_server_address")]
    pub server_address: IpAddr,
    #[serde(default = "default_server_port")]
    pub server_port: u16,
    #[serde(default = "default_max_connections")]
    pub database_max_connections: u32,
    #[serde(default = "default_timeout_secs")]
    pub database_acquire_timeout_secs: u64,
    #[serde(default = "default_timeout_secs")]
    pub database_statement_timeout_secs: u64,
}

fn default_server_address() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_server_port() -> u16 {
    3000
}

fn default_max_connections() -> u32 {
    10
}

fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    #[must_use]
    pub fn socket_address(&self) -> SocketAddr {
        SocketAddr::new(self.server_address, self.server_port)
    }

    #[must_use]
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig {
            database_url: self.database_url.clone(),
            max_connections: self.database_max_connections,
            acquire_timeout: Duration::from_secs(self.database_acquire_timeout_secs),
            statement_timeout: Duration::from_secs(self.database_statement_timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use std::{net::SocketAddr, time::Duration};

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect()
    }

    #[test]
    fn defaults() {
        let config: Config =
            envy::from_iter(vars(&[("DATABASE_URL", "postgres://localhost/murmur")])).unwrap();

        assert_eq!(config.database_url, "postgres://localhost/murmur");
        assert_eq!(
            config.socket_address(),
            "0.0.0.0:3000".parse::<SocketAddr>().unwrap()
        );

        let pool = config.pool_config();
        assert_eq!(pool.max_connections, 10);
        assert_eq!(pool.acquire_timeout, Duration::from_secs(30));
        assert_eq!(pool.statement_timeout, Duration::from_secs(30));
    }

    #[test]
    fn overrides() {
        let config: Config = envy::from_iter(vars(&[
            ("DATABASE_URL", "postgres://db/murmur"),
            ("SERVER_ADDRESS", "127.0.0.1"),
            ("SERVER_PORT", "8080"),
            ("DATABASE_MAX_CONNECTIONS", "3"),
            ("DATABASE_ACQUIRE_TIMEOUT_SECS", "5"),
            ("DATABASE_STATEMENT_TIMEOUT_SECS", "2"),
        ]))
        .unwrap();

        assert_eq!(
            config.socket_address(),
            "127.0.0.1:8080".parse::<SocketAddr>().unwrap()
        );

        let pool = config.pool_config();
        assert_eq!(pool.max_connections, 3);
        assert_eq!(pool.acquire_timeout, Duration::from_secs(5));
        assert_eq!(pool.statement_timeout, Duration::from_secs(2));
    }

    #[test]
    fn database_url_is_required() {
        assert!(envy::from_iter::<_, Config>(vars(&[("SERVER_PORT", "3000")])).is_err());
    }
}
