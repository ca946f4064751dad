//! Reptoid Rust SDK - Workspace Workflow Example
//!
//! Walks one account through:
//! 1. Create a workspace
//! 2. Write and read back a file
//! 3. Initialise git and inspect status
//! 4. List linked GitHub repositories
//! 5. Remove the workspace
//!
//! Reads `REPTOID_ACCESS_TOKEN`, `REPTOID_API_HOST` and `REPTOID_ACCOUNT_ID`.

use std::env;

use reptoid::{Error, ReptoidClient};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Reptoid Rust SDK Example ===\n");

    let client = ReptoidClient::from_env()?;
    let account_id = env::var("REPTOID_ACCOUNT_ID").unwrap_or_else(|_| "demo-account".to_string());
    let account = client.account(&account_id);
    println!("API host: {}", client.credentials().api_host());

    // Step 1: Create workspace
    println!("\n1. Creating workspace...");
    let workspace = account
        .workspaces()
        .create(Some(json!({ "name": "sdk-example" })))
        .await?;
    println!("   Workspace ID: {}", workspace.id);
    let handle = account.workspace(&workspace.id);

    // Step 2: Write and read a file
    println!("\n2. Writing README.md...");
    let readme = handle.file("README.md");
    readme.write("# Hello from the Reptoid SDK\n").await?;
    let content = readme.read().await?;
    println!("   Read back {} bytes", content.content.len());

    // Step 3: Git
    println!("\n3. Initialising git...");
    handle.git().init().await?;
    println!("   Status: {}", handle.git().status().await?);

    // Step 4: GitHub
    println!("\n4. Linked GitHub repositories...");
    match account.github().repos().await {
        Ok(repos) => {
            for repo in &repos {
                println!("   - {}", repo.full_name.as_deref().unwrap_or("<unnamed>"));
            }
            if repos.is_empty() {
                println!("   (none)");
            }
        }
        Err(Error::Server(e)) => println!("   Skipped: {}", e.reason()),
        Err(e) => return Err(e.into()),
    }

    // Step 5: Clean up
    println!("\n5. Removing workspace...");
    handle.remove().await?;
    println!("   Done.");

    Ok(())
}
