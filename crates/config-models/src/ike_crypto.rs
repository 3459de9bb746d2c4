//! IKE crypto profile schemas
//!
//! Algorithm vocabularies are closed sets: the tokens below must match the
//! remote service's accepted values exactly, so unknown tokens fail at the
//! type boundary rather than deep in business logic.

use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use scm_shared_types::{ContainerScope, FieldValidator, SharedResult, ValidationError};

use crate::ConfigObject;

/// Authentication hash algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HashAlgorithm {
    #[serde(rename = "md5")]
    Md5,
    #[serde(rename = "sha1")]
    Sha1,
    #[serde(rename = "sha256")]
    Sha256,
    #[serde(rename = "sha384")]
    Sha384,
    #[serde(rename = "sha512")]
    Sha512,
}

impl FromStr for HashAlgorithm {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "md5" => Ok(HashAlgorithm::Md5),
            "sha1" => Ok(HashAlgorithm::Sha1),
            "sha256" => Ok(HashAlgorithm::Sha256),
            "sha384" => Ok(HashAlgorithm::Sha384),
            "sha512" => Ok(HashAlgorithm::Sha512),
            other => Err(ValidationError::Unsupported {
                field: "hash".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
        };
        write!(f, "{}", token)
    }
}

/// Encryption algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncryptionAlgorithm {
    #[serde(rename = "des")]
    Des,
    #[serde(rename = "3des")]
    TripleDes,
    #[serde(rename = "aes-128-cbc")]
    Aes128Cbc,
    #[serde(rename = "aes-192-cbc")]
    Aes192Cbc,
    #[serde(rename = "aes-256-cbc")]
    Aes256Cbc,
    #[serde(rename = "aes-128-gcm")]
    Aes128Gcm,
    #[serde(rename = "aes-256-gcm")]
    Aes256Gcm,
}

impl FromStr for EncryptionAlgorithm {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "des" => Ok(EncryptionAlgorithm::Des),
            "3des" => Ok(EncryptionAlgorithm::TripleDes),
            "aes-128-cbc" => Ok(EncryptionAlgorithm::Aes128Cbc),
            "aes-192-cbc" => Ok(EncryptionAlgorithm::Aes192Cbc),
            "aes-256-cbc" => Ok(EncryptionAlgorithm::Aes256Cbc),
            "aes-128-gcm" => Ok(EncryptionAlgorithm::Aes128Gcm),
            "aes-256-gcm" => Ok(EncryptionAlgorithm::Aes256Gcm),
            other => Err(ValidationError::Unsupported {
                field: "encryption".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for EncryptionAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            EncryptionAlgorithm::Des => "des",
            EncryptionAlgorithm::TripleDes => "3des",
            EncryptionAlgorithm::Aes128Cbc => "aes-128-cbc",
            EncryptionAlgorithm::Aes192Cbc => "aes-192-cbc",
            EncryptionAlgorithm::Aes256Cbc => "aes-256-cbc",
            EncryptionAlgorithm::Aes128Gcm => "aes-128-gcm",
            EncryptionAlgorithm::Aes256Gcm => "aes-256-gcm",
        };
        write!(f, "{}", token)
    }
}

/// Diffie-Hellman groups for key exchange negotiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DhGroup {
    #[serde(rename = "group1")]
    Group1,
    #[serde(rename = "group2")]
    Group2,
    #[serde(rename = "group5")]
    Group5,
    #[serde(rename = "group14")]
    Group14,
    #[serde(rename = "group19")]
    Group19,
    #[serde(rename = "group20")]
    Group20,
}

impl FromStr for DhGroup {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "group1" => Ok(DhGroup::Group1),
            "group2" => Ok(DhGroup::Group2),
            "group5" => Ok(DhGroup::Group5),
            "group14" => Ok(DhGroup::Group14),
            "group19" => Ok(DhGroup::Group19),
            "group20" => Ok(DhGroup::Group20),
            other => Err(ValidationError::Unsupported {
                field: "dh_group".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for DhGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            DhGroup::Group1 => "group1",
            DhGroup::Group2 => "group2",
            DhGroup::Group5 => "group5",
            DhGroup::Group14 => "group14",
            DhGroup::Group19 => "group19",
            DhGroup::Group20 => "group20",
        };
        write!(f, "{}", token)
    }
}

pub const LIFETIME_SECONDS_RANGE: RangeInclusive<u64> = 180..=65535;
pub const LIFETIME_MINUTES_RANGE: RangeInclusive<u64> = 3..=65535;
pub const LIFETIME_HOURS_RANGE: RangeInclusive<u64> = 1..=65535;
pub const LIFETIME_DAYS_RANGE: RangeInclusive<u64> = 1..=365;

/// Security-association lifetime: exactly one time unit is selected.
///
/// Wire form is externally tagged, e.g. `{"hours": 8}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifetime {
    #[serde(rename = "seconds")]
    Seconds(u32),
    #[serde(rename = "minutes")]
    Minutes(u32),
    #[serde(rename = "hours")]
    Hours(u32),
    #[serde(rename = "days")]
    Days(u32),
}

impl Lifetime {
    pub fn validate(&self) -> SharedResult<()> {
        use scm_shared_types::validate::validate_range;
        match self {
            Lifetime::Seconds(value) => {
                validate_range("lifetime.seconds", u64::from(*value), &LIFETIME_SECONDS_RANGE)
            }
            Lifetime::Minutes(value) => {
                validate_range("lifetime.minutes", u64::from(*value), &LIFETIME_MINUTES_RANGE)
            }
            Lifetime::Hours(value) => {
                validate_range("lifetime.hours", u64::from(*value), &LIFETIME_HOURS_RANGE)
            }
            Lifetime::Days(value) => {
                validate_range("lifetime.days", u64::from(*value), &LIFETIME_DAYS_RANGE)
            }
        }
    }
}

/// IKEv2 SA reauthentication interval multiplier range.
pub const AUTH_MULTIPLE_RANGE: RangeInclusive<u64> = 0..=50;

/// Outbound payload for IKE crypto profile creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IkeCryptoProfileCreate {
    pub name: String,
    pub hash: Vec<HashAlgorithm>,
    pub encryption: Vec<EncryptionAlgorithm>,
    pub dh_group: Vec<DhGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifetime: Option<Lifetime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_multiple: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
}

impl IkeCryptoProfileCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hash: Vec::new(),
            encryption: Vec::new(),
            dh_group: Vec::new(),
            lifetime: None,
            authentication_multiple: None,
            folder: None,
            snippet: None,
            device: None,
        }
    }

    pub fn with_hash(mut self, hash: HashAlgorithm) -> Self {
        self.hash.push(hash);
        self
    }

    pub fn with_encryption(mut self, encryption: EncryptionAlgorithm) -> Self {
        self.encryption.push(encryption);
        self
    }

    pub fn with_dh_group(mut self, group: DhGroup) -> Self {
        self.dh_group.push(group);
        self
    }

    pub fn with_lifetime(mut self, lifetime: Lifetime) -> Self {
        self.lifetime = Some(lifetime);
        self
    }

    pub fn with_authentication_multiple(mut self, multiple: u8) -> Self {
        self.authentication_multiple = Some(multiple);
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

impl ConfigObject for IkeCryptoProfileCreate {
    const RESOURCE: &'static str = "ike-crypto-profile";

    fn validate(&self) -> SharedResult<()> {
        let v = FieldValidator::new();
        v.validate_profile_name("name", &self.name)?;
        if let Some(lifetime) = &self.lifetime {
            lifetime.validate()?;
        }
        if let Some(multiple) = self.authentication_multiple {
            scm_shared_types::validate::validate_range(
                "authentication_multiple",
                u64::from(multiple),
                &AUTH_MULTIPLE_RANGE,
            )?;
        }
        let scope = ContainerScope {
            folder: &self.folder,
            snippet: &self.snippet,
            device: &self.device,
        };
        scope.validate_fields(&v)?;
        scope.validate_exclusive(Self::RESOURCE)
    }
}

/// Outbound payload for IKE crypto profile modification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IkeCryptoProfileUpdate {
    pub id: Uuid,
    pub name: String,
    pub hash: Vec<HashAlgorithm>,
    pub encryption: Vec<EncryptionAlgorithm>,
    pub dh_group: Vec<DhGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifetime: Option<Lifetime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_multiple: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
}

impl IkeCryptoProfileUpdate {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hash: Vec::new(),
            encryption: Vec::new(),
            dh_group: Vec::new(),
            lifetime: None,
            authentication_multiple: None,
            folder: None,
            snippet: None,
            device: None,
        }
    }

    pub fn with_hash(mut self, hash: HashAlgorithm) -> Self {
        self.hash.push(hash);
        self
    }

    pub fn with_encryption(mut self, encryption: EncryptionAlgorithm) -> Self {
        self.encryption.push(encryption);
        self
    }

    pub fn with_dh_group(mut self, group: DhGroup) -> Self {
        self.dh_group.push(group);
        self
    }

    pub fn with_lifetime(mut self, lifetime: Lifetime) -> Self {
        self.lifetime = Some(lifetime);
        self
    }
}

impl ConfigObject for IkeCryptoProfileUpdate {
    const RESOURCE: &'static str = "ike-crypto-profile";

    // Container arity is deliberately not re-enforced here: partial updates
    // may omit the container references.
    fn validate(&self) -> SharedResult<()> {
        let v = FieldValidator::new();
        v.validate_profile_name("name", &self.name)?;
        if let Some(lifetime) = &self.lifetime {
            lifetime.validate()?;
        }
        if let Some(multiple) = self.authentication_multiple {
            scm_shared_types::validate::validate_range(
                "authentication_multiple",
                u64::from(multiple),
                &AUTH_MULTIPLE_RANGE,
            )?;
        }
        let scope = ContainerScope {
            folder: &self.folder,
            snippet: &self.snippet,
            device: &self.device,
        };
        scope.validate_fields(&v)
    }
}

/// Inbound IKE crypto profile record.
///
/// Unknown wire keys are silently dropped so server-side additions do not
/// break older clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IkeCryptoProfileResponse {
    pub id: Uuid,
    pub name: String,
    pub hash: Vec<HashAlgorithm>,
    pub encryption: Vec<EncryptionAlgorithm>,
    pub dh_group: Vec<DhGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifetime: Option<Lifetime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_multiple: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
}

impl ConfigObject for IkeCryptoProfileResponse {
    const RESOURCE: &'static str = "ike-crypto-profile";

    fn validate(&self) -> SharedResult<()> {
        let v = FieldValidator::new();
        v.validate_profile_name("name", &self.name)?;
        if let Some(lifetime) = &self.lifetime {
            lifetime.validate()?;
        }
        if let Some(multiple) = self.authentication_multiple {
            scm_shared_types::validate::validate_range(
                "authentication_multiple",
                u64::from(multiple),
                &AUTH_MULTIPLE_RANGE,
            )?;
        }
        let scope = ContainerScope {
            folder: &self.folder,
            snippet: &self.snippet,
            device: &self.device,
        };
        scope.validate_fields(&v)
    }
}
