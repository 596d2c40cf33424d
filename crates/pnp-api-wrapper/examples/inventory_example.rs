/*
[INPUT]:  PNP_ENDPOINT / PNP_API_KEY environment variables
[OUTPUT]: Printed inventory of servers, providers, groups, networks and users
[POS]:    Examples - read-only tour of every registry
[UPDATE]: When adding registries or list endpoints
*/

use pnp_api_wrapper::*;
use tracing_subscriber::EnvFilter;

/// Example: list everything a deployment knows about
///
/// Run with `PNP_ENDPOINT=https://host:9100 PNP_API_KEY=... cargo run --example inventory_example`.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== PNP Inventory Example ===\n");

    let settings = match Settings::from_env() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to load settings: {}", e);
            return;
        }
    };

    let client = match PnpClient::from_settings(&settings, ClientConfig::default()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ Client created for {}\n", settings.endpoint);

    match client.servers.list_servers().await {
        Ok(servers) => {
            for server in servers {
                println!("server {} -> {}", server.id, server.ip);
            }
        }
        Err(e) => println!("✗ Error listing servers: {}", e),
    }

    match client.proxy_providers.list_proxy_providers(true).await {
        Ok(providers) => {
            for provider in providers {
                let groups = provider.proxy_groups.map(|g| g.len()).unwrap_or(0);
                println!("provider {} '{}' ({} groups)", provider.id, provider.name, groups);
                match client
                    .proxy_providers
                    .get_proxy_provider_bandwidth_usage(&provider.id, TimePeriod::Month, None, None)
                    .await
                {
                    Ok(gb) => println!("  {:.2} GB this month", gb),
                    Err(e) => println!("  ✗ Error: {}", e),
                }
            }
        }
        Err(e) => println!("✗ Error listing providers: {}", e),
    }

    match client.proxy_networks.list_proxy_networks(None).await {
        Ok(networks) => {
            for network in networks {
                println!("network {} '{}' -> {} providers", network.id, network.name, network.proxy_providers.len());
            }
        }
        Err(e) => println!("✗ Error listing networks: {}", e),
    }

    match client.users.get_users().await {
        Ok(users) => println!("{} users", users.len()),
        Err(e) => println!("✗ Error listing users: {}", e),
    }

    match client.license.get_authorized_domains().await {
        Ok(domains) => println!("authorized domains: {:?}", domains),
        Err(e) => println!("✗ Error listing domains: {}", e),
    }

    println!("\n✓ Inventory example complete");
}
