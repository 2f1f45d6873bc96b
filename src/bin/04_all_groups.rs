/*!
Run every group of calls (basic, chain, state) one after another. A failing group is
reported and doesn't stop the rest; the exit code is 1 if any of them failed.

```
RPC_USER=me RPC_PASS=secret cargo run --bin 04_all_groups
```
*/

use rpc_toolkit::{cli, Group};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    rpc_toolkit::init_logging();
    println!("Autonomys/Subspace RPC Client (Rust)");
    println!("{}", "=".repeat(50));

    let report = cli::run(&Group::ALL).await?;
    std::process::exit(report.exit_code());
}
