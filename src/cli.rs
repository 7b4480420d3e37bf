use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "phrasegen",
    version,
    about = "Generates MP3 audio for the fixed phrase set and writes a manifest"
)]
pub struct Cli {
    #[arg(long, default_value = "audio", help = "Directory for generated MP3 files")]
    pub out_dir: PathBuf,

    #[arg(long, default_value = "en-gb", help = "Target language/locale for synthesis")]
    pub lang: String,

    #[arg(long, default_value_t = 500, help = "Pause between network fetches, in milliseconds")]
    pub delay_ms: u64,

    #[arg(long, help = "Skip fetching; rebuild manifest.json from files already on disk")]
    pub manifest_only: bool,

    #[arg(long, hide = true, help = "Override the TTS endpoint URL")]
    pub endpoint: Option<String>,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,
}
