use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use hide_cod_admin::services::{catalog, customization};
use hide_cod_admin::{AdminConfig, AllowList};

#[derive(Parser)]
#[command(
    name = "hide-cod-admin",
    about = "Admin helpers for the hide-COD payment customization"
)]
struct Cli {
    /// Directory holding config.toml (defaults apply when the file is absent)
    #[arg(long, default_value = ".")]
    config_root: PathBuf,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Evaluate a checkout input JSON file through the function
    Run {
        /// Path to a RunInput JSON document
        #[arg(long)]
        input: String,
    },
    /// Render the metafield mutation that persists an allow-list
    RenderConfig {
        /// Customization id (bare handle or full gid)
        #[arg(long)]
        id: String,
        /// Cities for the allow-list (repeat or comma-separate)
        #[arg(long, value_delimiter = ',')]
        cities: Vec<String>,
    },
    /// Render the discovery + creation requests for a new rule
    RenderCreate {
        /// Function id from a prior discovery response; omit to render the
        /// discovery query instead
        #[arg(long)]
        function_id: Option<String>,
    },
    /// Suggest catalog cities for a query
    Suggest { query: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = AdminConfig::load(&cli.config_root)?;
    match cli.cmd {
        Cmd::Run { input } => run_input(&input),
        Cmd::RenderConfig { id, cities } => render_config(&cfg, &id, &cities),
        Cmd::RenderCreate { function_id } => render_create(&cfg, function_id.as_deref()),
        Cmd::Suggest { query } => suggest(&cfg, &query),
    }
}

fn run_input(path: &str) -> Result<()> {
    let text = fs::read_to_string(path).with_context(|| format!("reading input file {path}"))?;
    let result = hide_cod_function::run_function_json(&text)
        .with_context(|| format!("decoding input file {path}"))?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn render_config(cfg: &AdminConfig, id: &str, cities: &[String]) -> Result<()> {
    let allow_list = AllowList::from_cities(cities);
    let request = customization::update_configuration_request(&cfg.metafield, id, &allow_list);
    println!("{}", serde_json::to_string_pretty(&request)?);
    Ok(())
}

fn render_create(cfg: &AdminConfig, function_id: Option<&str>) -> Result<()> {
    let request = match function_id {
        Some(fid) => customization::create_customization_request(&cfg.customization, fid),
        None => customization::list_functions_request(&cfg.customization),
    };
    println!("{}", serde_json::to_string_pretty(&request)?);
    Ok(())
}

fn suggest(cfg: &AdminConfig, query: &str) -> Result<()> {
    for city in catalog::suggestions_with(&cfg.catalog.extra_cities, query) {
        println!("{city}");
    }
    if let Some(catalog::CityEntry::New(city)) = catalog::resolve(query) {
        println!("add: \"{city}\"");
    }
    Ok(())
}
