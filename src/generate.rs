use crate::fetch::TtsClient;
use crate::naming;
use crate::store::AudioStore;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

const PREVIEW_CHARS: usize = 50;

#[derive(Debug)]
pub struct RunSummary {
    pub succeeded: usize,
    pub total: usize,
    pub interrupted: bool,
}

/// Sequentially processes every phrase: skip if the file exists, otherwise
/// fetch and write. Per-phrase failures are logged and skipped; only output
/// directory setup can abort the run. A set interrupt flag stops the loop
/// before the next phrase, leaving already-written files valid.
pub fn run_batch(
    phrases: &[&str],
    client: &TtsClient,
    store: &AudioStore,
    delay: Duration,
    interrupted: &AtomicBool,
) -> anyhow::Result<RunSummary> {
    store.ensure_dir()?;

    let total = phrases.len();
    let mut succeeded = 0;
    let mut was_interrupted = false;

    for (index, phrase) in phrases.iter().enumerate() {
        if interrupted.load(Ordering::SeqCst) {
            was_interrupted = true;
            break;
        }

        let filename = naming::audio_filename(index, phrase);
        println!("[{:2}/{}] {}", index + 1, total, preview(phrase));
        println!("    -> {filename}");

        if store.contains(&filename) {
            println!("    exists, skipping");
            succeeded += 1;
            continue;
        }

        match fetch_one(client, store, phrase, &filename) {
            Ok(size) => {
                println!("    saved ({size} bytes)");
                succeeded += 1;
            }
            Err(err) => {
                tracing::warn!(index, error = ?err, "phrase failed; continuing");
                println!("    error: {err:#}");
            }
        }

        // Pause after every fetch attempt so the endpoint is not hammered;
        // skips reach `continue` above and never wait.
        thread::sleep(delay);
    }

    Ok(RunSummary {
        succeeded,
        total,
        interrupted: was_interrupted,
    })
}

fn fetch_one(
    client: &TtsClient,
    store: &AudioStore,
    phrase: &str,
    filename: &str,
) -> anyhow::Result<usize> {
    let bytes = client.fetch(phrase)?;
    store.put(filename, &bytes)?;
    Ok(bytes.len())
}

fn preview(phrase: &str) -> String {
    if phrase.chars().count() <= PREVIEW_CHARS {
        return phrase.to_string();
    }
    let head: String = phrase.chars().take(PREVIEW_CHARS).collect();
    format!("{head}...")
}
