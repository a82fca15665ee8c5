use super::errors::ConfigError;
use crate::IpPreference;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Arguments of the `prefer` directive, whitespace separated.
    /// Exactly one of `ipv4` or `ipv6` is valid.
    #[serde(default)]
    pub prefer: String,
}

impl DnsConfig {
    pub fn preference(&self) -> Result<IpPreference, ConfigError> {
        let args: Vec<&str> = self.prefer.split_whitespace().collect();
        IpPreference::from_args(&args)
    }
}
