use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};

use mst_trace::Graph;
use mst_trace::config::MstConfig;
use mst_trace::graph::io::read_records;
use mst_trace::options::{Options, OptionsError, Selection};
use mst_trace::report::{ComparisonReport, RunReport};

fn main() -> Result<()> {
    if std::env::var("MST_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("MST_LOG")
            .write_style("MST_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    // Flags from MST_FLAGS come first so the command line can override them.
    let mut flags = shellwords::split(&std::env::var("MST_FLAGS").unwrap_or_default())
        .context("Failed to split MST_FLAGS")?;
    for (i, arg) in std::env::args_os().enumerate().skip(1) {
        let arg = arg
            .into_string()
            .map_err(|arg| anyhow!("Argument {i} is not valid Unicode: {arg:?}"))?;
        flags.push(arg);
    }

    let options = match Options::parse_from_args(&flags) {
        Ok(options) => options,
        Err(OptionsError::Clap(e)) => e.exit(),
        Err(e) => return Err(e.into()),
    };
    log::debug!("mst options: {:?}", options);

    let config_path = options
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from("mst.toml"));
    let config = MstConfig::load_from_file(&config_path)?;
    log::debug!("mst config: {:?}", config);

    let input = options.input()?;
    let format = options.input_format().with_context(|| {
        format!(
            "Cannot tell the format of {:?}, only JSON and RON are read; pass -f json or -f ron",
            input
        )
    })?;
    let records = read_records(input, format)
        .with_context(|| format!("Failed to read input graph: {:?}", input))?;
    let graph = Graph::from_records(&records)
        .with_context(|| format!("Failed to load input graph: {:?}", input))?;
    graph.log_summary();

    let selection = options.selection.unwrap_or(config.algorithm);
    let record_steps = config.record_steps && !options.no_steps;
    let output = options.output.clone().unwrap_or(config.output);

    match selection {
        Selection::Single(algorithm) => {
            let report = RunReport::record(algorithm, &graph, record_steps);
            print!("{}", report);
            report
                .save_to_file(&output)
                .with_context(|| format!("Failed to write report: {}", output))?;
        }
        Selection::All => {
            let report = ComparisonReport::record(&graph, record_steps);
            print!("{}", report);
            report
                .save_to_file(&output)
                .with_context(|| format!("Failed to write report: {}", output))?;
        }
    }
    log::info!("report written to {}", output);
    Ok(())
}
