//! VLAN interface usage example
//!
//! This example demonstrates VLAN interface payload handling:
//! - Static addressing with ARP entries
//! - DHCP client addressing
//! - The static/DHCP exclusivity rule

use anyhow::Result;
use scm_config_models::{ArpEntry, ConfigObject, DhcpClient, VlanInterfaceCreate};

fn main() -> Result<()> {
    env_logger::init();

    println!("=== VLAN Interface Usage Example ===\n");

    // 1. Statically addressed VLAN with a pinned ARP neighbor
    println!("1. Building statically addressed VLAN...");
    let static_vlan = VlanInterfaceCreate::new("vlan.100")
        .with_comment("branch user segment")
        .with_ip("192.168.100.1/24")
        .with_arp_entry(
            ArpEntry::new("192.168.100.5").with_hw_address("aa:bb:cc:dd:ee:ff"),
        )
        .with_mtu(1500)
        .with_management_profile("mgmt-allow-ping")
        .with_folder("Branch Offices");

    let payload = static_vlan.to_payload()?;
    println!("   ✓ Request payload:");
    println!("{}\n", serde_json::to_string_pretty(&payload)?);

    // 2. DHCP-addressed VLAN
    println!("2. Building DHCP-addressed VLAN...");
    let dhcp_vlan = VlanInterfaceCreate::new("vlan.200")
        .with_dhcp_client(
            DhcpClient::new()
                .with_enable(true)
                .with_default_route(true)
                .with_default_route_metric(10),
        )
        .with_folder("Branch Offices");
    println!(
        "   ✓ Request payload:\n{}\n",
        serde_json::to_string_pretty(&dhcp_vlan.to_payload()?)?
    );

    // 3. Mixing both addressing modes is rejected
    println!("3. Mixing static and DHCP addressing...");
    let mixed = VlanInterfaceCreate::new("vlan.300")
        .with_ip("10.0.30.1/24")
        .with_dhcp_client(DhcpClient::new().with_enable(true))
        .with_folder("Branch Offices");
    match mixed.to_payload() {
        Ok(_) => println!("   ✗ unexpected success"),
        Err(err) => println!("   ✓ rejected: {err}"),
    }

    println!("\n=== Example completed ===");
    Ok(())
}
