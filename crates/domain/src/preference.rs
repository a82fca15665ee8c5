use crate::config::ConfigError;
use crate::RecordType;
use std::fmt;
use std::str::FromStr;

/// Address family a server prefers to hand out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpPreference {
    Ipv4,
    Ipv6,
}

impl IpPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            IpPreference::Ipv4 => "ipv4",
            IpPreference::Ipv6 => "ipv6",
        }
    }

    pub fn preferred_type(&self) -> RecordType {
        match self {
            IpPreference::Ipv4 => RecordType::A,
            IpPreference::Ipv6 => RecordType::AAAA,
        }
    }

    pub fn is_preferred(&self, record_type: RecordType) -> bool {
        self.preferred_type() == record_type
    }

    /// Validate the arguments that follow the `prefer` directive.
    ///
    /// Exactly one argument, `ipv4` or `ipv6`, is accepted.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, ConfigError> {
        match args {
            [version] => version.as_ref().parse(),
            _ => Err(ConfigError::ArgumentCount(args.len())),
        }
    }
}

impl FromStr for IpPreference {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ipv4" => Ok(IpPreference::Ipv4),
            "ipv6" => Ok(IpPreference::Ipv6),
            other => Err(ConfigError::InvalidPreference(other.to_string())),
        }
    }
}

impl fmt::Display for IpPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
