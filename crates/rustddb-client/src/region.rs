//! Service deployment regions.

use std::fmt;

/// The regions the service is deployed in.
///
/// The client treats a region purely as an opaque discriminator passed
/// through to the transport; mapping a region to an endpoint (and signing
/// scope) is the transport implementor's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// US East (Northern Virginia).
    UsEast1,
    /// US West (Northern California).
    UsWest1,
    /// US West (Oregon).
    UsWest2,
    /// EU (Ireland).
    EuWest1,
    /// Asia Pacific (Singapore).
    ApSoutheast1,
    /// Asia Pacific (Tokyo).
    ApNortheast1,
}

impl Region {
    /// Returns the canonical region identifier.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UsEast1 => "us-east-1",
            Self::UsWest1 => "us-west-1",
            Self::UsWest2 => "us-west-2",
            Self::EuWest1 => "eu-west-1",
            Self::ApSoutheast1 => "ap-southeast-1",
            Self::ApNortheast1 => "ap-northeast-1",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_format_region_identifiers() {
        assert_eq!(Region::UsEast1.as_str(), "us-east-1");
        assert_eq!(Region::EuWest1.to_string(), "eu-west-1");
        assert_eq!(Region::ApNortheast1.as_str(), "ap-northeast-1");
    }
}
