pub mod cli;
pub mod fetch;
pub mod generate;
pub mod manifest;
pub mod naming;
pub mod phrases;
pub mod store;

use anyhow::Context;
use cli::Cli;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use store::AudioStore;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    setup_tracing(cli.verbose);

    let store = AudioStore::new(cli.out_dir.clone());

    if cli.manifest_only {
        return write_manifest(&store);
    }

    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupt_flag = Arc::clone(&interrupted);
    ctrlc::set_handler(move || {
        interrupt_flag.store(true, Ordering::SeqCst);
    })
    .context("install interrupt handler")?;

    let endpoint = cli
        .endpoint
        .unwrap_or_else(|| fetch::DEFAULT_ENDPOINT.to_string());
    let client = fetch::TtsClient::new(endpoint, cli.lang).context("build tts client")?;

    println!(
        "Generating {} audio files into {}",
        phrases::PHRASES.len(),
        store.dir().display()
    );

    let summary = generate::run_batch(
        phrases::PHRASES,
        &client,
        &store,
        Duration::from_millis(cli.delay_ms),
        &interrupted,
    )?;

    if summary.interrupted {
        println!("Interrupted; files written so far remain valid");
    }
    println!(
        "Complete: {}/{} audio files present",
        summary.succeeded, summary.total
    );

    // Regenerated even after an interrupt so the manifest always matches
    // whatever is actually on disk.
    write_manifest(&store)
}

fn write_manifest(store: &AudioStore) -> anyhow::Result<()> {
    let manifest = manifest::scan(store, phrases::PHRASES);
    let path = manifest::write(&manifest, store).context("write manifest")?;
    println!(
        "Wrote {} ({} entries)",
        path.display(),
        manifest.phrases.len()
    );
    Ok(())
}

fn setup_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
