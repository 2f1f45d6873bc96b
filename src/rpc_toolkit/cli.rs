use crate::client::RpcClient;
use crate::config::{RpcConfig, DEFAULT_RPC_URL};
use crate::error::Result;
use crate::groups::{run_groups, Group, Report};
use anyhow::Context;
use clap::Parser;
use std::time::Duration;

/// Connection settings shared by every binary. Each flag falls back to its
/// environment variable.
#[derive(Parser, Debug)]
#[clap(version, about = "Make JSON-RPC calls to an Autonomys/Subspace node")]
pub struct RpcArgs {
    /// HTTP(S) endpoint of the node
    #[clap(long, env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub url: String,

    /// Basic auth username
    #[clap(long, env = "RPC_USER", hide_env_values = true)]
    pub user: Option<String>,

    /// Basic auth password
    #[clap(long, env = "RPC_PASS", hide_env_values = true)]
    pub pass: Option<String>,

    /// Seconds to wait for each response
    #[clap(long, env = "RPC_TIMEOUT_SECS", default_value_t = 60)]
    pub timeout_secs: u64,
}

impl RpcArgs {
    pub fn into_config(self) -> Result<RpcConfig> {
        RpcConfig::new(&self.url, self.user, self.pass)?
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

/// Parse the command line, then run `groups` against the configured node and
/// print a summary. Configuration problems, including malformed flags, are returned
/// before any request is made; `--help` and `--version` print and exit as usual.
pub async fn run(groups: &[Group]) -> anyhow::Result<Report> {
    let args = match RpcArgs::try_parse() {
        Ok(args) => args,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => return Err(e).context("invalid command line arguments"),
    };
    let config = args
        .into_config()
        .context("invalid RPC configuration")?;
    let client = RpcClient::new(config)?;

    let report = run_groups(&client, groups).await;
    if report.success() {
        println!("\nAll groups passed");
    } else {
        let failed: Vec<_> = report.failed().map(Group::name).collect();
        println!("\nSome groups failed: {}", failed.join(", "));
    }
    Ok(report)
}
