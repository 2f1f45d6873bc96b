/*!
Helpers for talking to an Autonomys/Subspace node over JSON-RPC 2.0 via HTTP(S),
authenticating with Basic credentials. Responses come back as plain
[`serde_json::Value`]s; nothing checks their shape.

```no_run
# async fn example() -> anyhow::Result<()> {
use rpc_toolkit::{RpcClient, RpcConfig};

let config = RpcConfig::new(
    "https://rpc.anoncenomics.com",
    Some("user".into()),
    Some("pass".into()),
)?;
let client = RpcClient::new(config)?;
let hash = client.call("chain_getBlockHash", (1000,)).await?;
println!("{}", hash);
# Ok(())
# }
```
*/

pub mod cli;
mod client;
mod config;
mod error;
pub mod groups;
mod logging;
pub mod metadata;
mod request;
pub mod response;

pub use client::RpcClient;
pub use config::{RpcConfig, DEFAULT_RPC_URL, DEFAULT_TIMEOUT};
pub use error::{Error, Result};
pub use groups::{run_groups, Group, Report};
pub use logging::init_logging;
pub use request::{Request, RpcParams, JSONRPC_VERSION, REQUEST_ID};
