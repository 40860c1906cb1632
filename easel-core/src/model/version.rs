use std::fmt;

/// `"<major>.<minor>"` protocol version. Tokens compare numerically,
/// so `"10.0"` sorts above `"9.0"`. Unparsable tokens count as zero.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
}

impl Version {
    pub fn new(major: u64, minor: u64) -> Self {
        Self { major, minor }
    }

    pub fn parse(s: &str) -> Self {
        let mut tokens = s.splitn(2, '.');
        let major = tokens
            .next()
            .and_then(|t| t.trim().parse().ok())
            .unwrap_or(0);
        let minor = tokens
            .next()
            .and_then(|t| t.trim().parse().ok())
            .unwrap_or(0);
        Self { major, minor }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
