//! The scripted walk through a node's RPC methods, split into independent groups.
//! A failing group is reported and the remaining groups still run.

use crate::client::RpcClient;
use crate::error::{Error, Result};
use crate::metadata;
use crate::response::{error_of, hex_quantity, is_truthy, result_of, truncate};
use serde_json::Value;
use std::fmt;
use tracing::{error, info, warn};

/// How much of the metadata response gets printed.
const METADATA_PREVIEW_CHARS: usize = 200;

/// The block height looked up by the chain group.
const SAMPLE_BLOCK_HEIGHT: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Basic,
    Chain,
    State,
}

impl Group {
    pub const ALL: [Group; 3] = [Group::Basic, Group::Chain, Group::State];

    pub fn name(self) -> &'static str {
        match self {
            Group::Basic => "Basic RPC Methods",
            Group::Chain => "Chain Methods",
            Group::State => "State Methods",
        }
    }

    pub async fn run(self, client: &RpcClient) -> Result<()> {
        match self {
            Group::Basic => basic_methods(client).await,
            Group::Chain => chain_methods(client).await,
            Group::State => state_methods(client).await,
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `system_*` methods and the latest header.
pub async fn basic_methods(client: &RpcClient) -> Result<()> {
    println!("RPC_URL: {}", client.config().url());
    println!("User: {}", client.config().user());

    let chain = client.call("system_chain", ()).await?;
    println!("system_chain: {}", chain);

    let version = client.call("system_version", ()).await?;
    println!("system_version: {}", version);

    let health = client.call("system_health", ()).await?;
    println!("system_health: {}", pretty(&health));

    let header = client.call("chain_getHeader", ()).await?;
    println!("chain_getHeader: {}", pretty(&header));
    if let Some(number) = result_of(&header)
        .and_then(|h| h.get("number"))
        .and_then(hex_quantity)
    {
        println!("Latest block number: {}", number);
    }

    Ok(())
}

/// Latest block hash, the block it names, and the hash at a fixed height.
pub async fn chain_methods(client: &RpcClient) -> Result<()> {
    let latest_hash = client.call("chain_getBlockHash", ()).await?;
    println!("Latest block hash: {}", latest_hash);

    if !latest_hash.is_object() {
        return Err(Error::NotAnObject {
            method: "chain_getBlockHash".to_owned(),
            body: latest_hash.to_string(),
        });
    }
    match result_of(&latest_hash).filter(|hash| is_truthy(hash)) {
        Some(hash) => {
            let block = client.call("chain_getBlock", vec![hash.clone()]).await?;
            println!("Latest block: {}", pretty(&block));
        }
        None => match error_of(&latest_hash) {
            Some(err) => warn!(%err, "chain_getBlockHash returned an error; skipping chain_getBlock"),
            None => warn!("chain_getBlockHash returned no hash; skipping chain_getBlock"),
        },
    }

    let hash_at_height = client
        .call("chain_getBlockHash", (SAMPLE_BLOCK_HEIGHT,))
        .await?;
    println!(
        "Block hash at height {}: {}",
        SAMPLE_BLOCK_HEIGHT, hash_at_height
    );

    Ok(())
}

/// Runtime version and (a preview of) the metadata.
pub async fn state_methods(client: &RpcClient) -> Result<()> {
    let runtime = client.call("state_getRuntimeVersion", ()).await?;
    println!("Runtime version: {}", pretty(&runtime));

    let metadata = client.call("state_getMetadata", ()).await?;
    let printed = metadata.to_string();
    println!(
        "Metadata (truncated): {}...",
        truncate(&printed, METADATA_PREVIEW_CHARS)
    );

    if let Some(metadata_hex) = result_of(&metadata).and_then(Value::as_str) {
        match metadata::summarize(metadata_hex) {
            Ok(summary) => println!(
                "Metadata: V{} ({} bytes SCALE encoded)",
                summary.version, summary.len
            ),
            Err(e) => warn!("could not read metadata prefix: {}", e),
        }
    }

    Ok(())
}

/// Outcome of every group that was run, in order.
#[derive(Debug, Default)]
pub struct Report {
    outcomes: Vec<(Group, Result<()>)>,
}

impl Report {
    pub fn outcomes(&self) -> &[(Group, Result<()>)] {
        &self.outcomes
    }

    pub fn success(&self) -> bool {
        self.outcomes.iter().all(|(_, outcome)| outcome.is_ok())
    }

    pub fn failed(&self) -> impl Iterator<Item = Group> + '_ {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| outcome.is_err())
            .map(|(group, _)| *group)
    }

    /// 0 if every group succeeded, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.success() {
            0
        } else {
            1
        }
    }
}

/// Run each group in turn, carrying on past failures.
pub async fn run_groups(client: &RpcClient, groups: &[Group]) -> Report {
    let mut report = Report::default();
    for (i, group) in groups.iter().copied().enumerate() {
        if i > 0 {
            println!();
        }
        println!("=== {} ===", group);

        let outcome = group.run(client).await;
        match &outcome {
            Ok(()) => info!(%group, "group finished"),
            Err(e) => error!(%group, "Error: {}", e),
        }
        report.outcomes.push((group, outcome));
    }
    report
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
