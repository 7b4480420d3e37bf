use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = phrasegen::cli::Cli::parse();
    phrasegen::run(cli)
}
