//! Field-level validators shared by every resource schema
//!
//! Scalar constraints (charset pattern, maximum length, numeric range) are
//! enforced here; record-level rules live with the individual schemas.

use std::ops::RangeInclusive;

use regex::Regex;

use crate::address::IpAddress;
use crate::error::{SharedResult, ValidationError};

/// Charset for profile object names.
pub const PROFILE_NAME_PATTERN: &str = r"^[0-9a-zA-Z._\- ]+$";
/// Charset for folder/snippet/device references.
pub const CONTAINER_PATTERN: &str = r"^[a-zA-Z\d\-_. ]+$";
/// Tunnel interface names: the physical `tunnel` or a unit `tunnel.N`.
pub const TUNNEL_NAME_PATTERN: &str = r"^tunnel(\.[1-9][0-9]{0,3})?$";
/// VLAN interface names: `vlan.N` (tag range checked separately).
pub const VLAN_NAME_PATTERN: &str = r"^vlan\.[1-9][0-9]{0,3}$";

/// Maximum length for profile object names.
pub const PROFILE_NAME_MAX: usize = 31;
/// Maximum length for interface object names.
pub const INTERFACE_NAME_MAX: usize = 63;
/// Maximum length for container references.
pub const CONTAINER_MAX: usize = 64;
/// Maximum length for comments.
pub const COMMENT_MAX: usize = 1023;

/// Valid VLAN tag range.
pub const VLAN_TAG_RANGE: RangeInclusive<u64> = 1..=4094;

/// Field validator holding the compiled charset patterns.
pub struct FieldValidator {
    profile_name_regex: Regex,
    container_regex: Regex,
    tunnel_name_regex: Regex,
    vlan_name_regex: Regex,
}

impl FieldValidator {
    pub fn new() -> Self {
        Self {
            profile_name_regex: Regex::new(PROFILE_NAME_PATTERN).unwrap(),
            container_regex: Regex::new(CONTAINER_PATTERN).unwrap(),
            tunnel_name_regex: Regex::new(TUNNEL_NAME_PATTERN).unwrap(),
            vlan_name_regex: Regex::new(VLAN_NAME_PATTERN).unwrap(),
        }
    }

    /// Validate a profile object name (max 31 characters).
    pub fn validate_profile_name(&self, field: &str, value: &str) -> SharedResult<()> {
        validate_length(field, value, PROFILE_NAME_MAX)?;
        check_pattern(field, value, &self.profile_name_regex, PROFILE_NAME_PATTERN)
    }

    /// Validate a by-name reference to another profile object (same
    /// constraints as profile names).
    pub fn validate_reference(&self, field: &str, value: &str) -> SharedResult<()> {
        self.validate_profile_name(field, value)
    }

    /// Validate a by-name reference to an interface (same charset, but the
    /// longer interface name limit applies).
    pub fn validate_interface_reference(&self, field: &str, value: &str) -> SharedResult<()> {
        validate_length(field, value, INTERFACE_NAME_MAX)?;
        check_pattern(field, value, &self.profile_name_regex, PROFILE_NAME_PATTERN)
    }

    /// Validate a folder/snippet/device reference (max 64 characters).
    pub fn validate_container(&self, field: &str, value: &str) -> SharedResult<()> {
        validate_length(field, value, CONTAINER_MAX)?;
        check_pattern(field, value, &self.container_regex, CONTAINER_PATTERN)
    }

    /// Validate a tunnel interface name.
    pub fn validate_tunnel_name(&self, field: &str, value: &str) -> SharedResult<()> {
        validate_length(field, value, INTERFACE_NAME_MAX)?;
        check_pattern(field, value, &self.tunnel_name_regex, TUNNEL_NAME_PATTERN)
    }

    /// Validate a VLAN interface name, including the numeric tag range.
    pub fn validate_vlan_name(&self, field: &str, value: &str) -> SharedResult<()> {
        validate_length(field, value, INTERFACE_NAME_MAX)?;
        check_pattern(field, value, &self.vlan_name_regex, VLAN_NAME_PATTERN)?;

        // The pattern guarantees a `vlan.<digits>` shape with at most four
        // digits, so the tag always parses; it may still exceed 4094.
        if let Some((_, tag)) = value.split_once('.') {
            if let Ok(tag) = tag.parse::<u64>() {
                validate_range(field, tag, &VLAN_TAG_RANGE)?;
            }
        }
        Ok(())
    }

    /// Validate an IP address string, with an optional prefix length.
    pub fn validate_ip(&self, field: &str, value: &str) -> SharedResult<()> {
        value
            .parse::<IpAddress>()
            .map_err(|_| unsupported(field, value))?;
        Ok(())
    }

    /// Validate a plain host IP address (no prefix allowed).
    pub fn validate_host_ip(&self, field: &str, value: &str) -> SharedResult<()> {
        let addr = value
            .parse::<IpAddress>()
            .map_err(|_| unsupported(field, value))?;
        if addr.is_prefixed() {
            return Err(unsupported(field, value));
        }
        Ok(())
    }

    /// Validate a MAC address string.
    pub fn validate_mac(&self, field: &str, value: &str) -> SharedResult<()> {
        value
            .parse::<crate::address::MacAddr>()
            .map_err(|_| unsupported(field, value))?;
        Ok(())
    }

    /// Validate a free-form comment (length only).
    pub fn validate_comment(&self, field: &str, value: &str) -> SharedResult<()> {
        validate_length(field, value, COMMENT_MAX)
    }
}

impl Default for FieldValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Check a maximum length constraint. Limits are in characters, not bytes,
/// so multibyte text near the limit is not over-counted.
pub fn validate_length(field: &str, value: &str, max: usize) -> SharedResult<()> {
    if value.chars().count() > max {
        return Err(ValidationError::Length {
            field: field.to_string(),
            max,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Check an inclusive numeric range constraint.
pub fn validate_range(field: &str, value: u64, range: &RangeInclusive<u64>) -> SharedResult<()> {
    if !range.contains(&value) {
        return Err(ValidationError::Range {
            field: field.to_string(),
            min: *range.start(),
            max: *range.end(),
            value,
        });
    }
    Ok(())
}

fn check_pattern(
    field: &str,
    value: &str,
    regex: &Regex,
    pattern: &'static str,
) -> SharedResult<()> {
    if !regex.is_match(value) {
        return Err(ValidationError::Pattern {
            field: field.to_string(),
            pattern,
            value: value.to_string(),
        });
    }
    Ok(())
}

fn unsupported(field: &str, value: &str) -> ValidationError {
    ValidationError::Unsupported {
        field: field.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_names() {
        let v = FieldValidator::new();
        assert!(v.validate_profile_name("name", "example-ike-crypto").is_ok());
        assert!(v.validate_profile_name("name", "Profile 1.2_a").is_ok());

        assert!(v.validate_profile_name("name", "bad@name").is_err());
        assert!(v.validate_profile_name("name", "").is_err());
        assert!(v
            .validate_profile_name("name", &"x".repeat(PROFILE_NAME_MAX + 1))
            .is_err());
    }

    #[test]
    fn tunnel_names() {
        let v = FieldValidator::new();
        assert!(v.validate_tunnel_name("name", "tunnel").is_ok());
        assert!(v.validate_tunnel_name("name", "tunnel.1").is_ok());
        assert!(v.validate_tunnel_name("name", "tunnel.9999").is_ok());

        assert!(v.validate_tunnel_name("name", "tunnel.0").is_err());
        assert!(v.validate_tunnel_name("name", "tunnel.10000").is_err());
        assert!(v.validate_tunnel_name("name", "eth0").is_err());
    }

    #[test]
    fn vlan_names() {
        let v = FieldValidator::new();
        assert!(v.validate_vlan_name("name", "vlan.1").is_ok());
        assert!(v.validate_vlan_name("name", "vlan.4094").is_ok());

        assert!(v.validate_vlan_name("name", "vlan.0").is_err());
        assert!(v.validate_vlan_name("name", "vlan.4095").is_err());
        assert!(v.validate_vlan_name("name", "vlan").is_err());
        assert!(v.validate_vlan_name("name", "vlan.abc").is_err());
    }

    #[test]
    fn host_ip_rejects_prefix() {
        let v = FieldValidator::new();
        assert!(v.validate_host_ip("arp[0].name", "10.0.0.1").is_ok());
        assert!(v.validate_host_ip("arp[0].name", "10.0.0.1/24").is_err());
        assert!(v.validate_ip("ip[0]", "10.0.0.1/24").is_ok());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 1023 two-byte characters exceed the limit in bytes but not in
        // characters.
        assert!(validate_length("comment", &"é".repeat(COMMENT_MAX), COMMENT_MAX).is_ok());
        assert!(validate_length("comment", &"é".repeat(COMMENT_MAX + 1), COMMENT_MAX).is_err());
    }

    #[test]
    fn interface_references_use_interface_limit() {
        let v = FieldValidator::new();
        let long = "a".repeat(INTERFACE_NAME_MAX);
        assert!(v.validate_interface_reference("interface", &long).is_ok());
        assert!(v.validate_reference("profile", &long).is_err());
        assert!(v
            .validate_interface_reference("interface", &format!("{long}a"))
            .is_err());
        assert!(v.validate_interface_reference("interface", "bad@name").is_err());
    }

    #[test]
    fn range_errors_carry_bounds() {
        let err = validate_range("mtu", 100, &(576..=9216)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Range {
                field: "mtu".to_string(),
                min: 576,
                max: 9216,
                value: 100,
            }
        );
    }
}
