use clap::Parser;
use restprobe::cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    restprobe::init_tracing();
    let cli = Cli::parse();
    run(cli)
}
