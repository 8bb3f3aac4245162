use models::DocumentId;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "docdesk", version, about = "Upload, list, analyze and delete documents")]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Document service base URL (overrides DOCDESK_BASE_URL and the config file)"
    )]
    pub base_url: Option<String>,
    #[arg(long, global = true, help = "Also write logs to docdesk.log in this directory")]
    pub log_dir: Option<PathBuf>,
    #[arg(short, long, global = true, help = "Log debug output")]
    pub verbose: bool,
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload a file
    Upload {
        path: PathBuf,
        #[arg(long, help = "Skip the local file type and size check")]
        no_check: bool,
    },
    /// List uploaded documents
    List,
    /// Run category detection on a document
    Analyze { id: DocumentId },
    /// Delete a document
    Delete { id: DocumentId },
    /// Show the view registered for an application path
    Open {
        #[arg(default_value = "/")]
        path: String,
    },
}
