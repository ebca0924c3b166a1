use basic_aligner::cli::{run, Cli};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Cli::parse();
    let r = run(&args)?;
    r.print();
    Ok(())
}
