//! Interface management profile schemas
//!
//! Service toggles default to "unset" (omitted on the wire), never to
//! `false`, so partial updates leave untouched services alone.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use scm_shared_types::{ContainerScope, FieldValidator, SharedResult};

use crate::ConfigObject;

/// Outbound payload for interface management profile creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InterfaceManagementProfileCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub https: Option<bool>,
    #[serde(
        rename = "http-ocsp",
        alias = "http_ocsp",
        skip_serializing_if = "Option::is_none"
    )]
    pub http_ocsp: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ping: Option<bool>,
    #[serde(
        rename = "response-pages",
        alias = "response_pages",
        skip_serializing_if = "Option::is_none"
    )]
    pub response_pages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snmp: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telnet: Option<bool>,
    #[serde(
        rename = "userid-service",
        alias = "userid_service",
        skip_serializing_if = "Option::is_none"
    )]
    pub userid_service: Option<bool>,
    #[serde(
        rename = "userid-syslog-listener-ssl",
        alias = "userid_syslog_listener_ssl",
        skip_serializing_if = "Option::is_none"
    )]
    pub userid_syslog_listener_ssl: Option<bool>,
    #[serde(
        rename = "userid-syslog-listener-udp",
        alias = "userid_syslog_listener_udp",
        skip_serializing_if = "Option::is_none"
    )]
    pub userid_syslog_listener_udp: Option<bool>,
    #[serde(
        rename = "permitted-ip",
        alias = "permitted_ip",
        skip_serializing_if = "Option::is_none"
    )]
    pub permitted_ip: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
}

impl InterfaceManagementProfileCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            http: None,
            https: None,
            http_ocsp: None,
            ping: None,
            response_pages: None,
            snmp: None,
            ssh: None,
            telnet: None,
            userid_service: None,
            userid_syslog_listener_ssl: None,
            userid_syslog_listener_udp: None,
            permitted_ip: None,
            folder: None,
            snippet: None,
            device: None,
        }
    }

    pub fn with_http(mut self, enabled: bool) -> Self {
        self.http = Some(enabled);
        self
    }

    pub fn with_https(mut self, enabled: bool) -> Self {
        self.https = Some(enabled);
        self
    }

    pub fn with_ping(mut self, enabled: bool) -> Self {
        self.ping = Some(enabled);
        self
    }

    pub fn with_ssh(mut self, enabled: bool) -> Self {
        self.ssh = Some(enabled);
        self
    }

    pub fn with_snmp(mut self, enabled: bool) -> Self {
        self.snmp = Some(enabled);
        self
    }

    pub fn with_permitted_ip(mut self, address: impl Into<String>) -> Self {
        self.permitted_ip.get_or_insert_with(Vec::new).push(address.into());
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
    permitted_ip: &Option<Vec<String>>,
) -> SharedResult<()> {
    v.validate_profile_name("name", name)?;
    if let Some(permitted) = permitted_ip {
        for (index, address) in permitted.iter().enumerate() {
            v.validate_ip(&format!("permitted-ip[{}]", index), address)?;
        }
    }
    Ok(())
}

impl ConfigObject for InterfaceManagementProfileCreate {
    const RESOURCE: &'static str = "interface-management-profile";

    fn validate(&self) -> SharedResult<()> {
        let v = FieldValidator::new();
        validate_fields(&v, &self.name, &self.permitted_ip)?;
        let scope = ContainerScope {
            folder: &self.folder,
            snippet: &self.snippet,
            device: &self.device,
        };
        scope.validate_fields(&v)?;
        scope.validate_exclusive(Self::RESOURCE)
    }
}

/// Outbound payload for interface management profile modification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InterfaceManagementProfileUpdate {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub https: Option<bool>,
    #[serde(
        rename = "http-ocsp",
        alias = "http_ocsp",
        skip_serializing_if = "Option::is_none"
    )]
    pub http_ocsp: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ping: Option<bool>,
    #[serde(
        rename = "response-pages",
        alias = "response_pages",
        skip_serializing_if = "Option::is_none"
    )]
    pub response_pages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snmp: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telnet: Option<bool>,
    #[serde(
        rename = "userid-service",
        alias = "userid_service",
        skip_serializing_if = "Option::is_none"
    )]
    pub userid_service: Option<bool>,
    #[serde(
        rename = "userid-syslog-listener-ssl",
        alias = "userid_syslog_listener_ssl",
        skip_serializing_if = "Option::is_none"
    )]
    pub userid_syslog_listener_ssl: Option<bool>,
    #[serde(
        rename = "userid-syslog-listener-udp",
        alias = "userid_syslog_listener_udp",
        skip_serializing_if = "Option::is_none"
    )]
    pub userid_syslog_listener_udp: Option<bool>,
    #[serde(
        rename = "permitted-ip",
        alias = "permitted_ip",
        skip_serializing_if = "Option::is_none"
    )]
    pub permitted_ip: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
}

impl InterfaceManagementProfileUpdate {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            http: None,
            https: None,
            http_ocsp: None,
            ping: None,
            response_pages: None,
            snmp: None,
            ssh: None,
            telnet: None,
            userid_service: None,
            userid_syslog_listener_ssl: None,
            userid_syslog_listener_udp: None,
            permitted_ip: None,
            folder: None,
            snippet: None,
            device: None,
        }
    }

    pub fn with_ssh(mut self, enabled: bool) -> Self {
        self.ssh = Some(enabled);
        self
    }

    pub fn with_permitted_ip(mut self, address: impl Into<String>) -> Self {
        self.permitted_ip.get_or_insert_with(Vec::new).push(address.into());
        self
    }
}

impl ConfigObject for InterfaceManagementProfileUpdate {
    const RESOURCE: &'static str = "interface-management-profile";

    fn validate(&self) -> SharedResult<()> {
        let v = FieldValidator::new();
        validate_fields(&v, &self.name, &self.permitted_ip)?;
        ContainerScope {
            folder: &self.folder,
            snippet: &self.snippet,
            device: &self.device,
        }
        .validate_fields(&v)
    }
}

/// Inbound interface management profile record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceManagementProfileResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub https: Option<bool>,
    #[serde(
        rename = "http-ocsp",
        alias = "http_ocsp",
        skip_serializing_if = "Option::is_none"
    )]
    pub http_ocsp: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ping: Option<bool>,
    #[serde(
        rename = "response-pages",
        alias = "response_pages",
        skip_serializing_if = "Option::is_none"
    )]
    pub response_pages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snmp: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telnet: Option<bool>,
    #[serde(
        rename = "userid-service",
        alias = "userid_service",
        skip_serializing_if = "Option::is_none"
    )]
    pub userid_service: Option<bool>,
    #[serde(
        rename = "userid-syslog-listener-ssl",
        alias = "userid_syslog_listener_ssl",
        skip_serializing_if = "Option::is_none"
    )]
    pub userid_syslog_listener_ssl: Option<bool>,
    #[serde(
        rename = "userid-syslog-listener-udp",
        alias = "userid_syslog_listener_udp",
        skip_serializing_if = "Option::is_none"
    )]
    pub userid_syslog_listener_udp: Option<bool>,
    #[serde(
        rename = "permitted-ip",
        alias = "permitted_ip",
        skip_serializing_if = "Option::is_none"
    )]
    pub permitted_ip: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
}

impl ConfigObject for InterfaceManagementProfileResponse {
    const RESOURCE: &'static str = "interface-management-profile";

    fn validate(&self) -> SharedResult<()> {
        let v = FieldValidator::new();
        validate_fields(&v, &self.name, &self.permitted_ip)?;
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
    fn toggles_are_unset_by_default() {
        let profile = InterfaceManagementProfileCreate::new("mgmt-allow-ssh")
            .with_ssh(true)
            .with_ping(true)
            .with_folder("Shared");

        let payload = profile.to_payload().unwrap();
        let mut keys: Vec<&str> = payload.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["folder", "name", "ping", "ssh"]);
        // Unset is omitted, not serialized as false.
        assert!(!payload.contains_key("https"));
    }

    #[test]
    fn kebab_aliases_on_the_wire() {
        let mut profile = InterfaceManagementProfileCreate::new("mgmt-ocsp").with_folder("Shared");
        profile.http_ocsp = Some(true);
        profile.userid_service = Some(false);

        let payload = profile.to_payload().unwrap();
        assert_eq!(payload["http-ocsp"], json!(true));
        assert_eq!(payload["userid-service"], json!(false));
        assert!(!payload.contains_key("http_ocsp"));
    }

    #[test]
    fn accepts_attribute_name_or_alias_case_sensitively() {
        let payload = json!({
            "name": "mgmt-profile",
            "http_ocsp": true,
            "response-pages": false,
            "folder": "Shared"
        });
        let profile = InterfaceManagementProfileCreate::from_payload(
            payload.as_object().unwrap().clone(),
        )
        .unwrap();
        assert_eq!(profile.http_ocsp, Some(true));
        assert_eq!(profile.response_pages, Some(false));

        // Case differences are not tolerated.
        let bad = json!({
            "name": "mgmt-profile",
            "HTTP-OCSP": true,
            "folder": "Shared"
        });
        assert!(
            InterfaceManagementProfileCreate::from_payload(bad.as_object().unwrap().clone())
                .is_err()
        );
    }

    #[test]
    fn permitted_ip_entries_validated_with_index() {
        let profile = InterfaceManagementProfileCreate::new("mgmt-profile")
            .with_permitted_ip("192.168.1.0/24")
            .with_permitted_ip("not-an-ip")
            .with_folder("Shared");

        match profile.validate().unwrap_err() {
            ValidationError::Unsupported { field, value } => {
                assert_eq!(field, "permitted-ip[1]");
                assert_eq!(value, "not-an-ip");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn response_round_trip() {
        let payload = json!({
            "id": "5e0b6f3a-9c5f-4c85-9a6f-2a1d2e3f4a5b",
            "name": "mgmt-profile",
            "ssh": true,
            "http-ocsp": false,
            "permitted-ip": ["10.1.1.1"],
            "folder": "Shared",
            "server-side-extra": {"ignored": true}
        });
        let response = InterfaceManagementProfileResponse::from_payload(
            payload.as_object().unwrap().clone(),
        )
        .unwrap();
        let reparsed = InterfaceManagementProfileResponse::from_payload(
            response.to_payload().unwrap(),
        )
        .unwrap();
        assert_eq!(response, reparsed);
    }
}
