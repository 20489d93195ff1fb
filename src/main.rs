//! readmegen — regenerate the function reference in a library's README.
//!
//! Reads the function catalog, pulls each function's `///` docs out of its
//! source file, renders a summary table plus one section per function, and
//! splices the result into the README between the `| Function` table header
//! and the `# FAQ` anchor.
//!
//! With no arguments it runs on fixed paths relative to the working directory:
//! `functions/catalog.json`, `functions/*.rs` and `README.md`.

mod builder;
mod catalog;
mod extract;
mod model;
mod render;
mod splice;

use anyhow::{bail, Context, Result};
use clap::Parser;
use splice::Splice;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "readmegen",
    about = "Generate the function table and reference sections of a README from doc comments"
)]
struct Cli {
    /// README to update in place
    #[arg(long, default_value = "README.md")]
    readme: PathBuf,

    /// Directory holding the source files named in the catalog
    #[arg(long, default_value = "functions")]
    source_dir: PathBuf,

    /// Function catalog (JSON)
    #[arg(long, default_value = "functions/catalog.json")]
    catalog: PathBuf,

    /// Text that ends the generated region
    #[arg(long, default_value = splice::DEFAULT_ANCHOR)]
    anchor: String,

    /// Do not write; fail if the README is out of date
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let catalog = catalog::Catalog::load(&cli.catalog)?;
    let records = builder::build_records(&catalog, &cli.source_dir)?;
    let content = render::render(&records);

    let readme = fs::read_to_string(&cli.readme)
        .with_context(|| format!("failed to read {}", cli.readme.display()))?;

    let updated = match splice::splice(&readme, &content, &cli.anchor) {
        Splice::Replaced(updated) => updated,
        Splice::MissingHeader => bail!(
            "no line starting with `| {}` in {}",
            render::table::NAME_TITLE,
            cli.readme.display()
        ),
        Splice::MissingAnchor => bail!(
            "no `{}` anchor after the function table in {}",
            cli.anchor,
            cli.readme.display()
        ),
    };

    if cli.check {
        if updated != readme {
            bail!("{} is out of date; rerun readmegen", cli.readme.display());
        }
        info!(readme = %cli.readme.display(), "up to date");
        return Ok(());
    }

    fs::write(&cli.readme, &updated)
        .with_context(|| format!("failed to write {}", cli.readme.display()))?;
    info!(
        readme = %cli.readme.display(),
        functions = records.len(),
        "updated"
    );

    Ok(())
}
