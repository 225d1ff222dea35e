use clawkit_cli::{FinderCli, exit_with_error, parse_args};

#[tokio::main]
async fn main() {
    let cli: FinderCli = parse_args();

    if let Err(e) = cli.run().await {
        exit_with_error(&e);
    }
}
