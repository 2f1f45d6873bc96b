/*!
Ask for the runtime version and the chain metadata. The metadata is a hex string of
SCALE encoded bytes; we only print the start of it, plus the metadata version read from
its prefix.

```
RPC_USER=me RPC_PASS=secret cargo run --bin 03_state
```
*/

use rpc_toolkit::{cli, Group};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    rpc_toolkit::init_logging();
    let report = cli::run(&[Group::State]).await?;
    std::process::exit(report.exit_code());
}
