//! `protege-frame`: Prints the frame of an entity in an ontology document.
//!
//! **Usage:**
//! ```text
//! protege-frame --ontology <doc.json> --subject <iri> [--kind <kind>]
//!               [--format text|json] [--axioms] [--mode strict|lax]
//!               [--lang <tag>] [--config <protege.toml>]
//! ```
//!
//! Without `--kind` every entity carrying the IRI is printed, so a punned
//! IRI shows one frame per entity kind.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use protege_clients::{logging, ClientConfig};
use protege_frame::{AxiomPropertyValueTranslator, Frame, LabelRenderer, Mode};
use protege_owl::{EntitiesInSignatureIndex, Entity, EntityType, Iri, Ontology, SignatureIndex};

/// Entity kinds accepted by `--kind`.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    Class,
    ObjectProperty,
    DataProperty,
    AnnotationProperty,
    Individual,
    Datatype,
}

impl From<Kind> for EntityType {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Class => EntityType::Class,
            Kind::ObjectProperty => EntityType::ObjectProperty,
            Kind::DataProperty => EntityType::DataProperty,
            Kind::AnnotationProperty => EntityType::AnnotationProperty,
            Kind::Individual => EntityType::NamedIndividual,
            Kind::Datatype => EntityType::Datatype,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ModeArg {
    #[default]
    Strict,
    Lax,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Strict => Mode::Strict,
            ModeArg::Lax => Mode::Lax,
        }
    }
}

/// Print the property values of an entity.
#[derive(Parser)]
#[command(
    name = "protege-frame",
    about = "Print the frame of an entity in an OWL ontology document"
)]
struct Args {
    /// Ontology document (JSON).
    #[arg(long)]
    ontology: PathBuf,

    /// IRI of the subject entity.
    #[arg(long)]
    subject: String,

    /// Entity kind of the subject (default: every kind carrying the IRI).
    #[arg(long, value_enum)]
    kind: Option<Kind>,

    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    format: Format,

    /// Also print the axioms the frame writes back.
    #[arg(long)]
    axioms: bool,

    /// Write-back mode used with `--axioms`.
    #[arg(long, value_enum, default_value_t)]
    mode: ModeArg,

    /// Preferred label language (overrides the config file).
    #[arg(long)]
    lang: Option<String>,

    /// Log filter (overrides the config file; `RUST_LOG` wins over both).
    #[arg(long)]
    log_filter: Option<String>,

    /// Configuration file (default: ./protege.toml if present).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn subjects(args: &Args, index: &SignatureIndex) -> Result<Vec<Entity>> {
    let iri = Iri::new(&args.subject);
    if let Some(kind) = args.kind {
        return Ok(vec![EntityType::from(kind).entity(iri)]);
    }
    let found: Vec<Entity> = index.entities_in_signature(&iri).into_iter().collect();
    if found.is_empty() {
        bail!("{} names no entity in the ontology; pass --kind to force one", args.subject);
    }
    Ok(found)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = ClientConfig::load(args.config.as_deref())?.with_overrides(
        args.log_filter.clone(),
        args.lang.clone(),
        None,
    );
    logging::init(config.log_filter());

    let ontology = Ontology::from_path(&args.ontology)
        .with_context(|| format!("loading {}", args.ontology.display()))?;
    let index = SignatureIndex::new(&ontology);
    let subjects = subjects(&args, &index)?;
    let translator = AxiomPropertyValueTranslator::new(
        LabelRenderer::with_language(&ontology, config.label_language.as_deref()),
        index,
    );
    let frames: Vec<Frame> = subjects
        .iter()
        .map(|subject| Frame::build(subject, &ontology, &translator))
        .collect();

    match args.format {
        Format::Json => {
            let document = if args.axioms {
                let mode = Mode::from(args.mode);
                serde_json::json!({
                    "frames": frames,
                    "axioms": frames
                        .iter()
                        .map(|frame| {
                            frame
                                .to_axioms(&translator, mode)
                                .iter()
                                .map(ToString::to_string)
                                .collect::<Vec<_>>()
                        })
                        .collect::<Vec<_>>(),
                })
            } else {
                serde_json::json!({ "frames": frames })
            };
            println!("{}", serde_json::to_string_pretty(&document)?);
        }
        Format::Text => {
            for frame in &frames {
                println!(
                    "{} <{}> ({})",
                    frame.subject.browser_text,
                    frame.subject.entity.iri(),
                    frame.subject.entity.entity_type().keyword()
                );
                for value in &frame.property_values {
                    println!("    {value}");
                }
                if args.axioms {
                    println!("  axioms:");
                    for axiom in frame.to_axioms(&translator, args.mode.into()) {
                        println!("    {axiom}");
                    }
                }
            }
        }
    }
    Ok(())
}
