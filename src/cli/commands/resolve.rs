use super::{load_taxonomy, TaxonomyArgs};
use crate::cli::output::*;
use crate::core::resolver::BatchResolver;
use crate::utils::format::format_count;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub taxonomy: TaxonomyArgs,

    /// Input rows of `accession<TAB>taxon:<tax_id>`
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output rows of `accession<TAB>tax=...`
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn run(args: ResolveArgs) -> Result<()> {
    let mut config = args.taxonomy.effective_config()?;
    if let Some(input) = args.input {
        config.batch.input = input;
    }
    if let Some(output) = args.output {
        config.batch.output = output;
    }

    if !config.batch.input.exists() {
        return Err(crate::TaxolineError::NotFound(format!(
            "input file {}",
            config.batch.input.display()
        ))
        .into());
    }

    section_header("Lineage Resolution");
    info(&format!(
        "Taxonomy: {} + {} (root {})",
        config.taxonomy.nodes.display(),
        config.taxonomy.names.display(),
        config.taxonomy.root_id
    ));

    let taxonomy = load_taxonomy(&config)?;
    success(&format!(
        "Loaded {} nodes and {} scientific names",
        format_count(taxonomy.node_count()),
        format_count(taxonomy.name_count())
    ));

    let report = BatchResolver::new(&taxonomy).run(&config.batch.input, &config.batch.output)?;

    tree_item(false, "Rows read", Some(format_count(report.lines_read).as_str()));
    tree_item(false, "Resolved", Some(format_count(report.resolved).as_str()));
    tree_item(true, "Skipped", Some(format_count(report.skipped.len()).as_str()));

    if report.skipped.is_empty() {
        success(&format!("Wrote {}", config.batch.output.display()));
        return Ok(());
    }

    let table = skip_summary_table(&report);
    println!("{}", table);

    warning(&format!(
        "Wrote {} with {} row(s) skipped",
        config.batch.output.display(),
        report.skipped.len()
    ));
    Ok(())
}
