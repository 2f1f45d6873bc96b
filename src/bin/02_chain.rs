/*!
Fetch the hash of the latest block, then the block itself by passing that hash as a
parameter, and finally the hash of the block at height 1000.

```
RPC_USER=me RPC_PASS=secret cargo run --bin 02_chain
```
*/

use rpc_toolkit::{cli, Group};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    rpc_toolkit::init_logging();
    let report = cli::run(&[Group::Chain]).await?;
    std::process::exit(report.exit_code());
}
