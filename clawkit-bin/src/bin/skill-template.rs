use clawkit_cli::{TemplateCli, exit_with_error, parse_args};

fn main() {
    let cli: TemplateCli = parse_args();

    if let Err(e) = cli.run() {
        exit_with_error(&e);
    }
}
