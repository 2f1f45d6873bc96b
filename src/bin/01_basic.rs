/*!
The simplest requests we can make to a node: which chain it's on, what version it runs,
how healthy it thinks it is, and the header of its latest block.

Requests are JSON-RPC 2.0 over HTTP(S), authenticated with Basic credentials taken from
`RPC_USER` and `RPC_PASS` (and `RPC_URL` if you aren't using the default endpoint).

```
RPC_USER=me RPC_PASS=secret cargo run --bin 01_basic
```
*/

use rpc_toolkit::{cli, Group};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    rpc_toolkit::init_logging();
    let report = cli::run(&[Group::Basic]).await?;
    std::process::exit(report.exit_code());
}
