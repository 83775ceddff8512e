use super::{load_taxonomy, TaxonomyArgs};
use crate::bio::lineage::project;
use crate::cli::output::*;
use anyhow::Result;
use clap::Args;
use serde::Serialize;

#[derive(Args)]
pub struct LineageArgs {
    /// Taxonomy ID to resolve (e.g. 9627)
    #[arg(value_name = "TAX_ID")]
    pub tax_id: String,

    #[command(flatten)]
    pub taxonomy: TaxonomyArgs,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct LineageReport<'a> {
    tax_id: &'a str,
    root_id: &'a str,
    lineage: &'a [crate::bio::taxonomy::LineageEntry],
    label: String,
}

pub fn run(args: LineageArgs) -> Result<()> {
    let config = args.taxonomy.effective_config()?;
    let taxonomy = load_taxonomy(&config)?;

    if !taxonomy.contains(&args.tax_id) {
        return Err(crate::TaxolineError::NotFound(format!(
            "tax ID {} in {}",
            args.tax_id,
            config.taxonomy.nodes.display()
        ))
        .into());
    }

    let lineage = taxonomy.resolve(&args.tax_id);
    let fixed = project(&lineage);
    let label = fixed.to_string();

    if args.json {
        let report = LineageReport {
            tax_id: &args.tax_id,
            root_id: taxonomy.root_id(),
            lineage: &lineage,
            label,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    section_header(&format!("Lineage of {}", args.tax_id));
    if lineage.is_empty() {
        empty("No named ancestors");
    }
    for (i, entry) in lineage.iter().enumerate() {
        tree_item(i == lineage.len() - 1, &entry.rank, Some(entry.name.as_str()));
    }
    if !lineage.is_empty() && fixed.is_empty() {
        warning("None of the ancestors carries a kingdom..species rank");
    }
    println!("\n{}", label);
    Ok(())
}
