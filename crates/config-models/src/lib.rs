//! SCM Configuration Models
//!
//! Typed request/response schemas for the configuration objects of the
//! remote SCM management API. Each resource comes in three variants: a
//! Create payload (no identity, unknown wire keys rejected), an Update
//! payload (identity required, unknown wire keys rejected) and a Response
//! record (identity required, unknown wire keys tolerated so that
//! server-side additions do not break older clients).
//!
//! The transport layer exchanges plain string-keyed mappings with this
//! crate via [`ConfigObject::to_payload`] and [`ConfigObject::from_payload`].

pub mod error;
pub mod ike_crypto;
pub mod interface_management;
pub mod tunnel_interface;
pub mod vlan_interface;

pub use error::SchemaError;
pub use ike_crypto::{
    DhGroup, EncryptionAlgorithm, HashAlgorithm, IkeCryptoProfileCreate, IkeCryptoProfileResponse,
    IkeCryptoProfileUpdate, Lifetime,
};
pub use interface_management::{
    InterfaceManagementProfileCreate, InterfaceManagementProfileResponse,
    InterfaceManagementProfileUpdate,
};
pub use tunnel_interface::{TunnelInterfaceCreate, TunnelInterfaceResponse, TunnelInterfaceUpdate};
pub use vlan_interface::{
    ArpEntry, DdnsConfig, DhcpClient, SendHostname, VlanInterfaceCreate, VlanInterfaceResponse,
    VlanInterfaceUpdate,
};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use scm_shared_types::SharedResult;

/// Result type for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Contract between a schema record and the transport layer.
///
/// Field-level constraints run before record-level rules in every
/// `validate` implementation, so cross-field checks can assume
/// individually well-formed fields.
pub trait ConfigObject: Serialize + DeserializeOwned {
    /// Resource label used in record-level error reporting.
    const RESOURCE: &'static str;

    /// Run field-level then record-level validation.
    fn validate(&self) -> SharedResult<()>;

    /// Serialize into an outbound wire mapping.
    ///
    /// The record is validated first; fields left unset are omitted from
    /// the mapping, and declared wire aliases are applied.
    fn to_payload(&self) -> Result<Map<String, Value>> {
        self.validate()?;
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(SchemaError::Payload(json_kind(&other))),
        }
    }

    /// Parse one decoded wire mapping into a validated record.
    ///
    /// Unknown keys are rejected for Create/Update payloads and ignored for
    /// Response records; matched values undergo the same validation as any
    /// other construction path.
    fn from_payload(payload: Map<String, Value>) -> Result<Self> {
        log::debug!("parsing {} payload ({} keys)", Self::RESOURCE, payload.len());
        let record: Self = serde_json::from_value(Value::Object(payload))?;
        record.validate()?;
        Ok(record)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
