#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # gradebook
//!
//! Loads the subject list and prints a student's record for the scores given
//! on the command line, eg.
//!
//! `gradebook report --name "John Smith" Math:4:80 Math:3:75 English:5:90`

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use bpaf::*;
use dotenvy::dotenv;
use gradebook::{CatalogConfig, GradebookConfig, MissingSource, ScoreEntry, SubjectCatalog};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Where to load subjects from; overrides the environment.
#[derive(Debug, Clone)]
struct CatalogArgs {
    /// Subject file path
    file:   Option<PathBuf>,
    /// Fail when the subject file is missing
    strict: bool,
}

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Print the subject list
    Subjects(CatalogArgs),
    /// Record scores and print the resulting report
    Report {
        /// Subject source
        catalog: CatalogArgs,
        /// Student name
        name:    Option<String>,
        /// Print JSON instead of a table
        json:    bool,
        /// Entries to record, in order
        scores:  Vec<ScoreEntry>,
    },
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses the subject source flags
    fn catalog_args() -> impl Parser<CatalogArgs> {
        let file = long("file")
            .short('f')
            .help("CSV file whose first row lists the subjects")
            .argument::<PathBuf>("PATH")
            .optional();
        let strict = long("strict")
            .help("Fail if the subject file does not exist")
            .switch();
        construct!(CatalogArgs { file, strict })
    }

    let subjects = construct!(Cmd::Subjects(catalog_args()))
        .to_options()
        .command("subjects")
        .help("Print the subjects a student can be graded in");

    let report = {
        let catalog = catalog_args();
        let name = long("name")
            .short('n')
            .help("Student name, eg. \"John Smith\"")
            .argument::<String>("NAME")
            .optional();
        let json = long("json").help("Print the report as JSON").switch();
        let scores = positional::<ScoreEntry>("SCORE")
            .help("Score entry as SUBJECT:GRADE:RESULT, eg. Math:4:80")
            .many();
        construct!(Cmd::Report {
            catalog,
            name,
            json,
            scores
        })
        .to_options()
        .command("report")
        .help("Record scores and print the student's report")
    };

    let cmd = construct!([subjects, report]);

    cmd.to_options()
        .descr("Keeps a student's grades and test results")
        .run()
}

/// Resolves the catalog config from the environment and command-line flags.
fn catalog_config(args: &CatalogArgs) -> CatalogConfig {
    let mut config = GradebookConfig::from_env().catalog().clone();
    if let Some(file) = &args.file {
        config = config.with_path(file);
    }
    if args.strict {
        config = config.with_missing_source(MissingSource::Error);
    }
    config
}

/// Loads the catalog described by `args`.
fn load_catalog(args: &CatalogArgs) -> Result<SubjectCatalog> {
    let config = catalog_config(args);
    SubjectCatalog::from_config(&config)
        .with_context(|| format!("Failed to load subjects from {}", config.path().display()))
}

fn main() -> Result<()> {
    dotenv().ok();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    match options() {
        Cmd::Subjects(args) => {
            let catalog = load_catalog(&args)?;
            if catalog.is_empty() {
                tracing::info!("No subjects available");
            }
            for subject in &catalog {
                println!("{subject}");
            }
        }
        Cmd::Report {
            catalog,
            name,
            json,
            scores,
        } => {
            let catalog = Arc::new(load_catalog(&catalog)?);
            let mut student = gradebook::enroll()
                .catalog(catalog)
                .maybe_name(name)
                .build()?;

            for entry in &scores {
                student
                    .add_entry(entry)
                    .with_context(|| format!("Could not record `{entry}`"))?;
            }

            let report = student.report();
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{report}");
            }
        }
    };

    Ok(())
}
