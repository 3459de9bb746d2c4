//! VLAN interface schemas
//!
//! A VLAN interface carries either a static address list or a DHCP client
//! configuration, never both. Both absent means the interface is simply
//! unconfigured for addressing.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use scm_shared_types::{ContainerScope, FieldValidator, SharedResult, ValidationError};

use crate::tunnel_interface::MTU_RANGE;
use crate::ConfigObject;

pub const DEFAULT_ROUTE_METRIC_RANGE: RangeInclusive<u64> = 1..=65535;
pub const DDNS_UPDATE_INTERVAL_RANGE: RangeInclusive<u64> = 1..=30;
pub const HOSTNAME_MAX: usize = 64;
pub const DDNS_HOSTNAME_MAX: usize = 255;
pub const DDNS_VENDOR_MAX: usize = 127;

/// Hostname advertisement inside a DHCP client configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SendHostname {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
}

/// DHCP client configuration for an interface.
///
/// Nested records reject unknown keys in every variant: a typoed nested
/// key in a Create/Update payload must not be silently dropped, and server
/// additions arrive at the resource level, not inside sub-records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DhcpClient {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
    #[serde(
        rename = "create-default-route",
        alias = "create_default_route",
        skip_serializing_if = "Option::is_none"
    )]
    pub create_default_route: Option<bool>,
    #[serde(
        rename = "default-route-metric",
        alias = "default_route_metric",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_route_metric: Option<u16>,
    #[serde(
        rename = "send-hostname",
        alias = "send_hostname",
        skip_serializing_if = "Option::is_none"
    )]
    pub send_hostname: Option<SendHostname>,
}

impl DhcpClient {
    pub fn new() -> Self {
        Self {
            enable: None,
            create_default_route: None,
            default_route_metric: None,
            send_hostname: None,
        }
    }

    pub fn with_enable(mut self, enabled: bool) -> Self {
        self.enable = Some(enabled);
        self
    }

    pub fn with_default_route(mut self, create: bool) -> Self {
        self.create_default_route = Some(create);
        self
    }

    pub fn with_default_route_metric(mut self, metric: u16) -> Self {
        self.default_route_metric = Some(metric);
        self
    }

    fn validate(&self, field: &str) -> SharedResult<()> {
        if let Some(metric) = self.default_route_metric {
            scm_shared_types::validate::validate_range(
                &format!("{}.default-route-metric", field),
                u64::from(metric),
                &DEFAULT_ROUTE_METRIC_RANGE,
            )?;
        }
        if let Some(send) = &self.send_hostname {
            if let Some(hostname) = &send.hostname {
                scm_shared_types::validate::validate_length(
                    &format!("{}.send-hostname.hostname", field),
                    hostname,
                    HOSTNAME_MAX,
                )?;
            }
        }
        Ok(())
    }
}

impl Default for DhcpClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Static ARP entry: an IP address with an optional hardware address and
/// egress interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArpEntry {
    /// The protocol address, a plain IP without prefix.
    pub name: String,
    #[serde(
        rename = "hw-address",
        alias = "hw_address",
        skip_serializing_if = "Option::is_none"
    )]
    pub hw_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface: Option<String>,
}

impl ArpEntry {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            name: address.into(),
            hw_address: None,
            interface: None,
        }
    }

    pub fn with_hw_address(mut self, mac: impl Into<String>) -> Self {
        self.hw_address = Some(mac.into());
        self
    }

    pub fn with_interface(mut self, interface: impl Into<String>) -> Self {
        self.interface = Some(interface.into());
        self
    }

    fn validate(&self, v: &FieldValidator, field: &str) -> SharedResult<()> {
        v.validate_host_ip(&format!("{}.name", field), &self.name)?;
        if let Some(mac) = &self.hw_address {
            v.validate_mac(&format!("{}.hw-address", field), mac)?;
        }
        if let Some(interface) = &self.interface {
            v.validate_interface_reference(&format!("{}.interface", field), interface)?;
        }
        Ok(())
    }
}

/// Dynamic DNS registration settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DdnsConfig {
    #[serde(
        rename = "ddns-enabled",
        alias = "ddns_enabled",
        skip_serializing_if = "Option::is_none"
    )]
    pub ddns_enabled: Option<bool>,
    #[serde(
        rename = "ddns-hostname",
        alias = "ddns_hostname",
        skip_serializing_if = "Option::is_none"
    )]
    pub ddns_hostname: Option<String>,
    #[serde(
        rename = "ddns-update-interval",
        alias = "ddns_update_interval",
        skip_serializing_if = "Option::is_none"
    )]
    pub ddns_update_interval: Option<u8>,
    #[serde(
        rename = "ddns-vendor",
        alias = "ddns_vendor",
        skip_serializing_if = "Option::is_none"
    )]
    pub ddns_vendor: Option<String>,
    #[serde(
        rename = "ddns-cert-profile",
        alias = "ddns_cert_profile",
        skip_serializing_if = "Option::is_none"
    )]
    pub ddns_cert_profile: Option<String>,
    #[serde(
        rename = "ddns-ip",
        alias = "ddns_ip",
        skip_serializing_if = "Option::is_none"
    )]
    pub ddns_ip: Option<Vec<String>>,
}

impl DdnsConfig {
    fn validate(&self, v: &FieldValidator, field: &str) -> SharedResult<()> {
        if let Some(hostname) = &self.ddns_hostname {
            scm_shared_types::validate::validate_length(
                &format!("{}.ddns-hostname", field),
                hostname,
                DDNS_HOSTNAME_MAX,
            )?;
        }
        if let Some(interval) = self.ddns_update_interval {
            scm_shared_types::validate::validate_range(
                &format!("{}.ddns-update-interval", field),
                u64::from(interval),
                &DDNS_UPDATE_INTERVAL_RANGE,
            )?;
        }
        if let Some(vendor) = &self.ddns_vendor {
            scm_shared_types::validate::validate_length(
                &format!("{}.ddns-vendor", field),
                vendor,
                DDNS_VENDOR_MAX,
            )?;
        }
        if let Some(profile) = &self.ddns_cert_profile {
            v.validate_reference(&format!("{}.ddns-cert-profile", field), profile)?;
        }
        if let Some(addresses) = &self.ddns_ip {
            for (index, address) in addresses.iter().enumerate() {
                v.validate_host_ip(&format!("{}.ddns-ip[{}]", field, index), address)?;
            }
        }
        Ok(())
    }
}

/// Outbound payload for VLAN interface creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VlanInterfaceCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<Vec<String>>,
    #[serde(
        rename = "dhcp-client",
        alias = "dhcp_client",
        skip_serializing_if = "Option::is_none"
    )]
    pub dhcp_client: Option<DhcpClient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arp: Option<Vec<ArpEntry>>,
    #[serde(
        rename = "ddns-config",
        alias = "ddns_config",
        skip_serializing_if = "Option::is_none"
    )]
    pub ddns_config: Option<DdnsConfig>,
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

impl VlanInterfaceCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
            ip: None,
            dhcp_client: None,
            arp: None,
            ddns_config: None,
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

    pub fn with_dhcp_client(mut self, dhcp_client: DhcpClient) -> Self {
        self.dhcp_client = Some(dhcp_client);
        self
    }

    pub fn with_arp_entry(mut self, entry: ArpEntry) -> Self {
        self.arp.get_or_insert_with(Vec::new).push(entry);
        self
    }

    pub fn with_ddns_config(mut self, ddns: DdnsConfig) -> Self {
        self.ddns_config = Some(ddns);
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

#[allow(clippy::too_many_arguments)]
fn validate_fields(
    v: &FieldValidator,
    name: &str,
    comment: &Option<String>,
    ip: &Option<Vec<String>>,
    dhcp_client: &Option<DhcpClient>,
    arp: &Option<Vec<ArpEntry>>,
    ddns_config: &Option<DdnsConfig>,
    mtu: Option<u16>,
    management_profile: &Option<String>,
) -> SharedResult<()> {
    v.validate_vlan_name("name", name)?;
    if let Some(comment) = comment {
        v.validate_comment("comment", comment)?;
    }
    if let Some(addresses) = ip {
        for (index, address) in addresses.iter().enumerate() {
            v.validate_ip(&format!("ip[{}]", index), address)?;
        }
    }
    if let Some(dhcp) = dhcp_client {
        dhcp.validate("dhcp-client")?;
    }
    if let Some(entries) = arp {
        for (index, entry) in entries.iter().enumerate() {
            entry.validate(v, &format!("arp[{}]", index))?;
        }
    }
    if let Some(ddns) = ddns_config {
        ddns.validate(v, "ddns-config")?;
    }
    if let Some(mtu) = mtu {
        scm_shared_types::validate::validate_range("mtu", u64::from(mtu), &MTU_RANGE)?;
    }
    if let Some(profile) = management_profile {
        v.validate_reference("interface-management-profile", profile)?;
    }
    Ok(())
}

fn validate_address_mode(
    resource: &'static str,
    ip: &Option<Vec<String>>,
    dhcp_client: &Option<DhcpClient>,
) -> SharedResult<()> {
    let has_static = ip.as_ref().map_or(false, |addresses| !addresses.is_empty());
    if has_static && dhcp_client.is_some() {
        return Err(ValidationError::AddressMode { resource });
    }
    Ok(())
}

impl ConfigObject for VlanInterfaceCreate {
    const RESOURCE: &'static str = "vlan-interface";

    fn validate(&self) -> SharedResult<()> {
        let v = FieldValidator::new();
        validate_fields(
            &v,
            &self.name,
            &self.comment,
            &self.ip,
            &self.dhcp_client,
            &self.arp,
            &self.ddns_config,
            self.mtu,
            &self.interface_management_profile,
        )?;
        validate_address_mode(Self::RESOURCE, &self.ip, &self.dhcp_client)?;
        let scope = ContainerScope {
            folder: &self.folder,
            snippet: &self.snippet,
            device: &self.device,
        };
        scope.validate_fields(&v)?;
        scope.validate_exclusive(Self::RESOURCE)
    }
}

/// Outbound payload for VLAN interface modification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VlanInterfaceUpdate {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<Vec<String>>,
    #[serde(
        rename = "dhcp-client",
        alias = "dhcp_client",
        skip_serializing_if = "Option::is_none"
    )]
    pub dhcp_client: Option<DhcpClient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arp: Option<Vec<ArpEntry>>,
    #[serde(
        rename = "ddns-config",
        alias = "ddns_config",
        skip_serializing_if = "Option::is_none"
    )]
    pub ddns_config: Option<DdnsConfig>,
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

impl VlanInterfaceUpdate {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            comment: None,
            ip: None,
            dhcp_client: None,
            arp: None,
            ddns_config: None,
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

    pub fn with_dhcp_client(mut self, dhcp_client: DhcpClient) -> Self {
        self.dhcp_client = Some(dhcp_client);
        self
    }

    pub fn with_mtu(mut self, mtu: u16) -> Self {
        self.mtu = Some(mtu);
        self
    }
}

impl ConfigObject for VlanInterfaceUpdate {
    const RESOURCE: &'static str = "vlan-interface";

    fn validate(&self) -> SharedResult<()> {
        let v = FieldValidator::new();
        validate_fields(
            &v,
            &self.name,
            &self.comment,
            &self.ip,
            &self.dhcp_client,
            &self.arp,
            &self.ddns_config,
            self.mtu,
            &self.interface_management_profile,
        )?;
        validate_address_mode(Self::RESOURCE, &self.ip, &self.dhcp_client)?;
        ContainerScope {
            folder: &self.folder,
            snippet: &self.snippet,
            device: &self.device,
        }
        .validate_fields(&v)
    }
}

/// Inbound VLAN interface record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VlanInterfaceResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<Vec<String>>,
    #[serde(
        rename = "dhcp-client",
        alias = "dhcp_client",
        skip_serializing_if = "Option::is_none"
    )]
    pub dhcp_client: Option<DhcpClient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arp: Option<Vec<ArpEntry>>,
    #[serde(
        rename = "ddns-config",
        alias = "ddns_config",
        skip_serializing_if = "Option::is_none"
    )]
    pub ddns_config: Option<DdnsConfig>,
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

impl ConfigObject for VlanInterfaceResponse {
    const RESOURCE: &'static str = "vlan-interface";

    fn validate(&self) -> SharedResult<()> {
        let v = FieldValidator::new();
        validate_fields(
            &v,
            &self.name,
            &self.comment,
            &self.ip,
            &self.dhcp_client,
            &self.arp,
            &self.ddns_config,
            self.mtu,
            &self.interface_management_profile,
        )?;
        validate_address_mode(Self::RESOURCE, &self.ip, &self.dhcp_client)?;
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
    use serde_json::json;

    #[test]
    fn static_and_dhcp_are_mutually_exclusive() {
        let vlan = VlanInterfaceCreate::new("vlan.100")
            .with_ip("192.168.100.1/24")
            .with_dhcp_client(DhcpClient::new().with_enable(true))
            .with_folder("Branch");

        assert_eq!(
            vlan.validate().unwrap_err(),
            ValidationError::AddressMode {
                resource: "vlan-interface"
            }
        );
    }

    #[test]
    fn both_addressing_modes_absent_is_fine() {
        let vlan = VlanInterfaceCreate::new("vlan.100").with_folder("Branch");
        assert!(vlan.validate().is_ok());
    }

    #[test]
    fn dhcp_only_is_fine() {
        let vlan = VlanInterfaceCreate::new("vlan.100")
            .with_dhcp_client(
                DhcpClient::new()
                    .with_enable(true)
                    .with_default_route(true)
                    .with_default_route_metric(10),
            )
            .with_folder("Branch");
        assert!(vlan.validate().is_ok());

        let payload = vlan.to_payload().unwrap();
        assert_eq!(
            payload["dhcp-client"],
            json!({
                "enable": true,
                "create-default-route": true,
                "default-route-metric": 10
            })
        );
    }

    #[test]
    fn arp_entries_validated_with_nested_paths() {
        let vlan = VlanInterfaceCreate::new("vlan.100")
            .with_ip("192.168.100.1/24")
            .with_arp_entry(ArpEntry::new("192.168.100.5").with_hw_address("not-a-mac"))
            .with_folder("Branch");

        match vlan.validate().unwrap_err() {
            ValidationError::Unsupported { field, value } => {
                assert_eq!(field, "arp[0].hw-address");
                assert_eq!(value, "not-a-mac");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn arp_name_must_be_plain_ip() {
        let vlan = VlanInterfaceCreate::new("vlan.100")
            .with_arp_entry(ArpEntry::new("192.168.100.5/24"))
            .with_folder("Branch");
        assert!(vlan.validate().is_err());

        let ok = VlanInterfaceCreate::new("vlan.100")
            .with_arp_entry(
                ArpEntry::new("192.168.100.5")
                    .with_hw_address("aa:bb:cc:dd:ee:ff")
                    .with_interface("vlan.100"),
            )
            .with_folder("Branch");
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn vlan_tag_bounds() {
        assert!(VlanInterfaceCreate::new("vlan.4094")
            .with_folder("Branch")
            .validate()
            .is_ok());
        assert!(VlanInterfaceCreate::new("vlan.4095")
            .with_folder("Branch")
            .validate()
            .is_err());
        assert!(VlanInterfaceCreate::new("vlan.0")
            .with_folder("Branch")
            .validate()
            .is_err());
    }

    #[test]
    fn ddns_config_bounds() {
        let ddns = DdnsConfig {
            ddns_enabled: Some(true),
            ddns_hostname: Some("branch-fw.example.net".to_string()),
            ddns_update_interval: Some(31),
            ddns_vendor: Some("Palo Alto Networks DDNS".to_string()),
            ddns_cert_profile: None,
            ddns_ip: None,
        };
        let vlan = VlanInterfaceCreate::new("vlan.100")
            .with_ddns_config(ddns.clone())
            .with_folder("Branch");
        match vlan.validate().unwrap_err() {
            ValidationError::Range { field, .. } => {
                assert_eq!(field, "ddns-config.ddns-update-interval");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let mut ddns = ddns;
        ddns.ddns_update_interval = Some(7);
        let vlan = VlanInterfaceCreate::new("vlan.100")
            .with_ddns_config(ddns)
            .with_folder("Branch");
        assert!(vlan.validate().is_ok());
    }

    #[test]
    fn response_round_trip() {
        let payload = json!({
            "id": "0d5c9f6e-2b11-4be6-8a6f-3a2d1c0b9e8f",
            "name": "vlan.100",
            "comment": "branch user segment",
            "dhcp-client": {
                "enable": true,
                "send-hostname": { "enable": true, "hostname": "branch-fw" }
            },
            "arp": [
                { "name": "192.168.100.5", "hw-address": "aa:bb:cc:dd:ee:ff" }
            ],
            "mtu": 1500,
            "interface-management-profile": "mgmt-allow-ping",
            "folder": "Branch",
            "new-server-field": 42
        });
        let response =
            VlanInterfaceResponse::from_payload(payload.as_object().unwrap().clone()).unwrap();
        let reparsed =
            VlanInterfaceResponse::from_payload(response.to_payload().unwrap()).unwrap();
        assert_eq!(response, reparsed);
        assert!(!response.to_payload().unwrap().contains_key("new-server-field"));
    }

    #[test]
    fn nested_typo_rejected_on_create() {
        let payload = json!({
            "name": "vlan.100",
            "folder": "Branch",
            "dhcp-client": { "create_default_rout": true }
        });
        assert!(
            VlanInterfaceCreate::from_payload(payload.as_object().unwrap().clone()).is_err()
        );

        let payload = json!({
            "name": "vlan.100",
            "folder": "Branch",
            "arp": [{ "name": "192.168.100.5", "hw-addres": "aa:bb:cc:dd:ee:ff" }]
        });
        assert!(
            VlanInterfaceCreate::from_payload(payload.as_object().unwrap().clone()).is_err()
        );
    }

    #[test]
    fn arp_interface_uses_interface_name_limit() {
        // 32 characters: over the profile-name limit, within the interface
        // name limit.
        let long_name = "a".repeat(32);
        let vlan = VlanInterfaceCreate::new("vlan.100")
            .with_arp_entry(ArpEntry::new("192.168.100.5").with_interface(&long_name))
            .with_folder("Branch");
        assert!(vlan.validate().is_ok());
    }

    #[test]
    fn create_rejects_unknown_keys() {
        let payload = json!({
            "name": "vlan.100",
            "folder": "Branch",
            "bogus": true
        });
        assert!(
            VlanInterfaceCreate::from_payload(payload.as_object().unwrap().clone()).is_err()
        );
    }

    #[test]
    fn update_carries_id_and_skips_container_arity() {
        let update = VlanInterfaceUpdate::new(
            Uuid::parse_str("0d5c9f6e-2b11-4be6-8a6f-3a2d1c0b9e8f").unwrap(),
            "vlan.100",
        )
        .with_ip("192.168.100.1/24")
        .with_mtu(1500);

        assert!(update.validate().is_ok());
        let payload = update.to_payload().unwrap();
        assert!(payload.contains_key("id"));
        assert!(!payload.contains_key("folder"));
    }
}
