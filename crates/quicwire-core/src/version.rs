//! Protocol version tags.
//!
//! Versions are carried as 32-bit tags during negotiation. The frame codec
//! takes the negotiated version on every encode call so frame layouts can
//! change between versions; the current regular frames encode identically
//! across all supported versions.

use std::fmt;

/// A wire protocol version tag.
#[derive(Copy, Clone, Debug, PartialOrd, Ord, PartialEq, Eq)]
pub struct ProtocolVersion(u32);

/// Versions this implementation can speak, newest first.
pub const SUPPORTED_VERSIONS: [ProtocolVersion; 2] = [ProtocolVersion::V2, ProtocolVersion::V1];

impl ProtocolVersion {
    /// The initial public wire version.
    pub const V1: ProtocolVersion = ProtocolVersion(1);
    /// The current wire version.
    pub const V2: ProtocolVersion = ProtocolVersion(2);

    /// Builds a version from its negotiation tag.
    pub fn from_u32(tag: u32) -> ProtocolVersion {
        ProtocolVersion(tag)
    }

    /// Returns the negotiation tag.
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns true if this implementation can speak the version.
    pub fn is_supported(self) -> bool {
        SUPPORTED_VERSIONS.contains(&self)
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "v{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_versions() {
        assert!(ProtocolVersion::V1.is_supported());
        assert!(ProtocolVersion::V2.is_supported());
        assert!(!ProtocolVersion::from_u32(99).is_supported());
    }

    #[test]
    fn test_tag_round_trip() {
        let version = ProtocolVersion::from_u32(2);
        assert_eq!(version, ProtocolVersion::V2);
        assert_eq!(version.as_u32(), 2);
        assert_eq!(version.to_string(), "v2");
    }
}
