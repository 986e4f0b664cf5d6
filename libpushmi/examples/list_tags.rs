//! Lists the tags of an image using the high-level API.
//!
//! Run with: cargo run --example list_tags -- quay.io/coreos/etcd

use libpushmi::Pushmi;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let reference = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "gcr.io/google-containers/pause".to_string());

    let pushmi = Pushmi::builder().build()?;

    match pushmi.tags(&reference) {
        Ok(tags) => {
            println!("✓ Found {} tags for {}:\n", tags.len(), reference);
            for tag in tags.iter().take(20) {
                println!("  - {}", tag);
            }
            if tags.len() > 20 {
                println!("  ... and {} more", tags.len() - 20);
            }
        }
        Err(e) => {
            eprintln!("✗ Failed to list tags: {}", e);
            eprintln!(
                "  Supported registries: {}",
                libpushmi::RegistryAdapter::supported().join(", ")
            );
        }
    }

    Ok(())
}
