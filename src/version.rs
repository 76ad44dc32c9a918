//! Dotted numeric versions embedded in artifact file names.
use std::{cmp::Ordering, fmt, str::FromStr};

use crate::error::VersionError;

/// A `major.minor.patch` version compared numerically, component by component.
///
/// Missing trailing components count as `0`, so `1.2` and `1.2.0` are equal.
/// Components past the third are kept and take part in comparisons.
#[derive(Debug, Clone)]
pub struct Version {
    components: Vec<u64>,
}

impl Version {
    /// Builds a version from an explicit triple.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            components: vec![major, minor, patch],
        }
    }

    pub fn major(&self) -> u64 {
        self.component(0)
    }

    pub fn minor(&self) -> u64 {
        self.component(1)
    }

    pub fn patch(&self) -> u64 {
        self.component(2)
    }

    fn component(&self, index: usize) -> u64 {
        self.components.get(index).copied().unwrap_or(0)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut components = Vec::new();
        for (index, part) in raw.split('.').enumerate() {
            if part.is_empty() {
                return Err(VersionError::EmptyComponent(index));
            }
            if !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(VersionError::NonNumeric(part.to_string()));
            }
            let value = part
                .parse::<u64>()
                .map_err(|_| VersionError::Overflow(part.to_string()))?;
            components.push(value);
        }

        Ok(Self { components })
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        (0..len)
            .map(|i| self.component(i).cmp(&other.component(i)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for Version {}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> =
            self.components.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", rendered.join("."))
    }
}
