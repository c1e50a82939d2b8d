/// Version URI of JSON Feed 1.0.
pub const VERSION_1: &str = "https://jsonfeed.org/version/1";

/// Version URI of JSON Feed 1.1.
pub const VERSION_1_1: &str = "https://jsonfeed.org/version/1.1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    V1,
    V1_1,
}

impl Version {
    pub fn as_str(&self) -> &'static str {
        match self {
            Version::V1 => VERSION_1,
            Version::V1_1 => VERSION_1_1,
        }
    }
}

impl std::str::FromStr for Version {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Some publishers use plain http or a trailing slash
        let normalized = s
            .trim()
            .trim_end_matches('/')
            .replacen("http://", "https://", 1);

        match normalized.as_str() {
            VERSION_1 => Ok(Version::V1),
            VERSION_1_1 => Ok(Version::V1_1),
            _ => Err(format!("Unknown JSON Feed version: {}", s)),
        }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
