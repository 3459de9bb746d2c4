//! Container reference handling (folder / snippet / device)
//!
//! Every configuration object lives in exactly one container. The arity
//! rule is enforced on Create payloads only; Update and Response payloads
//! keep the per-field constraints but may omit the references entirely.

use crate::error::{SharedResult, ValidationError};
use crate::validate::FieldValidator;

/// Borrowed view over a record's container reference fields.
pub struct ContainerScope<'a> {
    pub folder: &'a Option<String>,
    pub snippet: &'a Option<String>,
    pub device: &'a Option<String>,
}

impl ContainerScope<'_> {
    /// Field-level checks on whichever references are present.
    pub fn validate_fields(&self, v: &FieldValidator) -> SharedResult<()> {
        for (field, value) in [
            ("folder", self.folder),
            ("snippet", self.snippet),
            ("device", self.device),
        ] {
            if let Some(value) = value {
                v.validate_container(field, value)?;
            }
        }
        Ok(())
    }

    /// Create-only arity rule: exactly one reference must be set.
    pub fn validate_exclusive(&self, resource: &'static str) -> SharedResult<()> {
        let count = [self.folder, self.snippet, self.device]
            .iter()
            .filter(|value| value.is_some())
            .count();
        if count != 1 {
            return Err(ValidationError::ContainerScope { resource, count });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope<'a>(
        folder: &'a Option<String>,
        snippet: &'a Option<String>,
        device: &'a Option<String>,
    ) -> ContainerScope<'a> {
        ContainerScope {
            folder,
            snippet,
            device,
        }
    }

    #[test]
    fn exactly_one_passes() {
        let folder = Some("Shared".to_string());
        let none = None;
        assert!(scope(&folder, &none, &none).validate_exclusive("test").is_ok());
    }

    #[test]
    fn zero_or_two_fail() {
        let folder = Some("Shared".to_string());
        let device = Some("fw-01".to_string());
        let none = None;

        let err = scope(&none, &none, &none)
            .validate_exclusive("test")
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::ContainerScope {
                resource: "test",
                count: 0
            }
        );

        let err = scope(&folder, &none, &device)
            .validate_exclusive("test")
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::ContainerScope {
                resource: "test",
                count: 2
            }
        );
    }

    #[test]
    fn field_charset_checked() {
        let v = FieldValidator::new();
        let bad = Some("no/slashes".to_string());
        let none = None;
        assert!(scope(&bad, &none, &none).validate_fields(&v).is_err());

        let good = Some("Example-Folder".to_string());
        assert!(scope(&good, &none, &none).validate_fields(&v).is_ok());
    }
}
