use clap::Parser;
use wordbook_config::{Config, Layout, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "wordbook", about = "Look up English words in the Free Dictionary API")]
pub struct Cli {
    /// Look up a single word, print the result and exit
    #[arg(long)]
    pub word: Option<String>,

    /// Result layout: list or book
    #[arg(long, value_enum)]
    pub layout: Option<Layout>,

    /// Output format: text or html
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl Cli {
    /// Flags win over environment
    pub fn apply(&self, config: &mut Config) {
        if let Some(layout) = self.layout {
            config.ui.layout = layout;
        }
        if let Some(format) = self.format {
            config.ui.format = format;
        }
    }
}
