use clap::Parser;

#[derive(Parser)]
#[command(name = "ytsum", about = "YouTube transcript summarizer", version)]
pub struct Cli {
    /// YouTube video URL or video ID (prompts interactively if omitted)
    pub url: Option<String>,

    /// Transcript language code to use, skipping the interactive menu
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Gemini model for summarization
    #[arg(long)]
    pub model: Option<String>,

    /// Word-count target for the summary
    #[arg(long)]
    pub word_limit: Option<u32>,

    /// Show resolution and selection details
    #[arg(short, long)]
    pub verbose: bool,
}
