//! Tunnel interface schemas

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use scm_shared_types::{ContainerScope, FieldValidator, SharedResult};

use crate::ConfigObject;

/// Valid MTU range for logical interfaces.
pub const MTU_RANGE: RangeInclusive<u64> = 576..=9216;

/// Outbound payload for tunnel interface creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TunnelInterfaceCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtu: Option<u16>,
    #[serde(
        rename = "interface-management-profile",
        alias = "interface_management_profile",
        skip_serializing_if = "Option::is_none"
    )]
    pub interface_management_profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
}

impl TunnelInterfaceCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
            ip: None,
            mtu: None,
            interface_management_profile: None,
            folder: None,
            snippet: None,
            device: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_ip(mut self, address: impl Into<String>) -> Self {
        self.ip.get_or_insert_with(Vec::new).push(address.into());
        self
    }

    pub fn with_mtu(mut self, mtu: u16) -> Self {
        self.mtu = Some(mtu);
        self
    }

    pub fn with_management_profile(mut self, profile: impl Into<String>) -> Self {
        self.interface_management_profile = Some(profile.into());
        self
    }

    pub fn with_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = Some(folder.into());
        self
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }

    pub fn with_device(mut self, device: impl Into<String>) -> Self {
        self.device = Some(device.into());
        self
    }
}

fn validate_fields(
    v: &FieldValidator,
    name: &str,
    comment: &Option<String>,
    ip: &Option<Vec<String>>,
    mtu: Option<u16>,
    management_profile: &Option<String>,
) -> SharedResult<()> {
    v.validate_tunnel_name("name", name)?;
    if let Some(comment) = comment {
        v.validate_comment("comment", comment)?;
    }
    if let Some(addresses) = ip {
        for (index, address) in addresses.iter().enumerate() {
            v.validate_ip(&format!("ip[{}]", index), address)?;
        }
    }
    if let Some(mtu) = mtu {
        scm_shared_types::validate::validate_range("mtu", u64::from(mtu), &MTU_RANGE)?;
    }
    if let Some(profile) = management_profile {
        v.validate_reference("interface-management-profile", profile)?;
    }
    Ok(())
}

impl ConfigObject for TunnelInterfaceCreate {
    const RESOURCE: &'static str = "tunnel-interface";

    fn validate(&self) -> SharedResult<()> {
        let v = FieldValidator::new();
        validate_fields(
            &v,
            &self.name,
            &self.comment,
            &self.ip,
            self.mtu,
            &self.interface_management_profile,
        )?;
        let scope = ContainerScope {
            folder: &self.folder,
            snippet: &self.snippet,
            device: &self.device,
        };
        scope.validate_fields(&v)?;
        scope.validate_exclusive(Self::RESOURCE)
    }
}

/// Outbound payload for tunnel interface modification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TunnelInterfaceUpdate {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtu: Option<u16>,
    #[serde(
        rename = "interface-management-profile",
        alias = "interface_management_profile",
        skip_serializing_if = "Option::is_none"
    )]
    pub interface_management_profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
}

impl TunnelInterfaceUpdate {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            comment: None,
            ip: None,
            mtu: None,
            interface_management_profile: None,
            folder: None,
            snippet: None,
            device: None,
        }
    }

    pub fn with_ip(mut self, address: impl Into<String>) -> Self {
        self.ip.get_or_insert_with(Vec::new).push(address.into());
        self
    }

    pub fn with_mtu(mut self, mtu: u16) -> Self {
        self.mtu = Some(mtu);
        self
    }
}

impl ConfigObject for TunnelInterfaceUpdate {
    const RESOURCE: &'static str = "tunnel-interface";

    fn validate(&self) -> SharedResult<()> {
        let v = FieldValidator::new();
        validate_fields(
            &v,
            &self.name,
            &self.comment,
            &self.ip,
            self.mtu,
            &self.interface_management_profile,
        )?;
        ContainerScope {
            folder: &self.folder,
            snippet: &self.snippet,
            device: &self.device,
        }
        .validate_fields(&v)
    }
}

/// Inbound tunnel interface record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TunnelInterfaceResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtu: Option<u16>,
    #[serde(
        rename = "interface-management-profile",
        alias = "interface_management_profile",
        skip_serializing_if = "Option::is_none"
    )]
    pub interface_management_profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
}

impl ConfigObject for TunnelInterfaceResponse {
    const RESOURCE: &'static str = "tunnel-interface";

    fn validate(&self) -> SharedResult<()> {
        let v = FieldValidator::new();
        validate_fields(
            &v,
            &self.name,
            &self.comment,
            &self.ip,
            self.mtu,
            &self.interface_management_profile,
        )?;
        ContainerScope {
            folder: &self.folder,
            snippet: &self.snippet,
            device: &self.device,
        }
        .validate_fields(&v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scm_shared_types::ValidationError;
    use serde_json::json;

    #[test]
    fn create_valid_tunnel() {
        let tunnel = TunnelInterfaceCreate::new("tunnel.42")
            .with_comment("site-to-site uplink")
            .with_ip("10.10.10.1/30")
            .with_mtu(1400)
            .with_management_profile("mgmt-allow-ping")
            .with_folder("Remote-Sites");

        let payload = tunnel.to_payload().unwrap();
        assert_eq!(payload["name"], json!("tunnel.42"));
        assert_eq!(payload["interface-management-profile"], json!("mgmt-allow-ping"));
        assert!(!payload.contains_key("id"));
    }

    #[test]
    fn bad_names_rejected() {
        for name in ["tunnel.0", "tunnel.10000", "vlan.5", "eth0"] {
            let tunnel = TunnelInterfaceCreate::new(name).with_folder("Remote-Sites");
            assert!(tunnel.validate().is_err(), "accepted {name}");
        }
        // The bare physical interface is allowed.
        let tunnel = TunnelInterfaceCreate::new("tunnel").with_folder("Remote-Sites");
        assert!(tunnel.validate().is_ok());
    }

    #[test]
    fn mtu_bounds() {
        let base = || TunnelInterfaceCreate::new("tunnel.1").with_folder("Shared");
        assert!(base().with_mtu(575).validate().is_err());
        assert!(base().with_mtu(576).validate().is_ok());
        assert!(base().with_mtu(9216).validate().is_ok());

        match base().with_mtu(575).validate().unwrap_err() {
            ValidationError::Range { field, min, max, value } => {
                assert_eq!(field, "mtu");
                assert_eq!((min, max, value), (576, 9216, 575));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn update_accepts_snake_alias() {
        let payload = json!({
            "id": "a7f5c1de-63c4-4a30-8f1c-77c6a1efc0b1",
            "name": "tunnel.7",
            "interface_management_profile": "mgmt-allow-ping"
        });
        let update =
            TunnelInterfaceUpdate::from_payload(payload.as_object().unwrap().clone()).unwrap();
        assert_eq!(
            update.interface_management_profile.as_deref(),
            Some("mgmt-allow-ping")
        );
    }

    #[test]
    fn response_round_trip_ignores_extras() {
        let payload = json!({
            "id": "a7f5c1de-63c4-4a30-8f1c-77c6a1efc0b1",
            "name": "tunnel.7",
            "ip": ["172.16.0.1/30"],
            "mtu": 1400,
            "folder": "Remote-Sites",
            "foo": "bar"
        });
        let response =
            TunnelInterfaceResponse::from_payload(payload.as_object().unwrap().clone()).unwrap();
        let reparsed =
            TunnelInterfaceResponse::from_payload(response.to_payload().unwrap()).unwrap();
        assert_eq!(response, reparsed);
        assert!(!response.to_payload().unwrap().contains_key("foo"));
    }
}
