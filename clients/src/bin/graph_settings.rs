//! `protege-graph-settings`: Reads and stores entity graph settings.
//!
//! **Usage:**
//! ```text
//! protege-graph-settings show  --project <id> [--user <name>]
//! protege-graph-settings save  --project <id> [--user <name>] --file <settings.json>
//! protege-graph-settings edges --project <id> [--user <name>] --ontology <doc.json>
//! ```
//!
//! Settings are kept under the configured settings directory. `show`
//! prints the user's settings, else the project default, else the built-in
//! default. `edges` prints the entity graph edges those settings let
//! through.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use protege_clients::{logging, ClientConfig};
use protege_owl::Ontology;
use protege_viz::{
    edges, DocumentSettingsRepository, EntityGraphSettings, EntityGraphSettingsRepository,
    ProjectId, ProjectUserEntityGraphSettings, UserId,
};

/// Manage per-project and per-user entity graph settings.
#[derive(Parser)]
#[command(
    name = "protege-graph-settings",
    about = "Read and store entity graph settings"
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Settings directory (overrides the config file).
    #[arg(long, global = true)]
    settings_dir: Option<PathBuf>,

    /// Configuration file (default: ./protege.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(ClapArgs)]
struct Owner {
    /// Project identifier.
    #[arg(long)]
    project: String,

    /// User name; omit for the project default.
    #[arg(long)]
    user: Option<String>,
}

impl Owner {
    fn ids(&self) -> (ProjectId, Option<UserId>) {
        (
            ProjectId::new(&self.project),
            self.user.as_deref().map(|u| UserId::new(u)),
        )
    }
}

#[derive(Subcommand)]
enum Command {
    /// Print the effective settings as JSON.
    Show(Owner),
    /// Store settings read from a JSON file.
    Save {
        #[command(flatten)]
        owner: Owner,
        /// `EntityGraphSettings` JSON document.
        #[arg(long)]
        file: PathBuf,
    },
    /// Print the edges of an ontology that pass the effective settings.
    Edges {
        #[command(flatten)]
        owner: Owner,
        /// Ontology document (JSON).
        #[arg(long)]
        ontology: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = ClientConfig::load(args.config.as_deref())?.with_overrides(
        None,
        None,
        args.settings_dir,
    );
    logging::init(config.log_filter());

    let dir = config.settings_dir();
    let repository = DocumentSettingsRepository::in_directory(&dir)
        .with_context(|| format!("opening settings under {}", dir.display()))?;
    repository.ensure_indexes()?;

    match args.command {
        Command::Show(owner) => {
            let (project, user) = owner.ids();
            let found = repository.settings_for_user_or_project_default(&project, user.as_ref())?;
            println!("{}", serde_json::to_string_pretty(&found)?);
        }
        Command::Save { owner, file } => {
            let text = fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let settings: EntityGraphSettings = serde_json::from_str(&text)
                .with_context(|| format!("parsing {}", file.display()))?;
            let (project_id, user_id) = owner.ids();
            repository.save_settings(&ProjectUserEntityGraphSettings {
                project_id,
                user_id,
                settings,
            })?;
            println!("saved");
        }
        Command::Edges { owner, ontology } => {
            let (project, user) = owner.ids();
            let record = repository.settings_for_user_or_project_default(&project, user.as_ref())?;
            let ontology = Ontology::from_path(&ontology)
                .with_context(|| format!("loading {}", ontology.display()))?;
            let all = edges(&ontology);
            for edge in record.settings.filter_edges(&all) {
                println!("{edge}");
            }
        }
    }
    Ok(())
}
