//! IKE crypto profile usage example
//!
//! This example demonstrates how to build IKE crypto profile payloads:
//! - Creating a profile with the builder API
//! - Validating and serializing into a request payload
//! - Parsing a server response, including unknown fields

use anyhow::Result;
use scm_config_models::{
    ConfigObject, DhGroup, EncryptionAlgorithm, HashAlgorithm, IkeCryptoProfileCreate,
    IkeCryptoProfileResponse, Lifetime,
};
use serde_json::json;

fn main() -> Result<()> {
    env_logger::init();

    println!("=== IKE Crypto Profile Usage Example ===\n");

    // 1. Build a create request
    println!("1. Building create request...");
    let create = IkeCryptoProfileCreate::new("branch-ike-crypto")
        .with_hash(HashAlgorithm::Sha256)
        .with_encryption(EncryptionAlgorithm::Aes256Gcm)
        .with_dh_group(DhGroup::Group20)
        .with_lifetime(Lifetime::Hours(8))
        .with_folder("Branch Offices");

    let payload = create.to_payload()?;
    println!("   ✓ Request payload:");
    println!("{}\n", serde_json::to_string_pretty(&payload)?);

    // 2. Demonstrate a validation failure
    println!("2. Validating a bad profile...");
    let bad = IkeCryptoProfileCreate::new("branch-ike-crypto")
        .with_hash(HashAlgorithm::Sha256)
        .with_lifetime(Lifetime::Seconds(60))
        .with_folder("Branch Offices");
    match bad.to_payload() {
        Ok(_) => println!("   ✗ unexpected success"),
        Err(err) => println!("   ✓ rejected: {err}\n"),
    }

    // 3. Parse a server response carrying fields we do not model
    println!("3. Parsing server response...");
    let response_body = json!({
        "id": "3f1c2a9e-8d44-4c1b-a6f0-5e7b2d9c0a11",
        "name": "branch-ike-crypto",
        "hash": ["sha256"],
        "encryption": ["aes-256-gcm"],
        "dh_group": ["group20"],
        "lifetime": { "hours": 8 },
        "folder": "Branch Offices",
        "created_by": "api-gateway"
    });
    let response =
        IkeCryptoProfileResponse::from_payload(response_body.as_object().unwrap().clone())?;
    println!("   ✓ Parsed profile '{}' (id {})", response.name, response.id);

    println!("\n=== Example completed ===");
    Ok(())
}
