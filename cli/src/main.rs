mod cli;
mod output;

use arcmarks::config::Config;
use arcmarks::error::Result;
use arcmarks::export::{
    ChromeExporter, EdgeExporter, FirefoxExporter, HtmlExporter, JsonExporter, SafariExporter,
    TreeExporter,
};
use arcmarks::tree::BookmarkTree;
use arcmarks::{sidebar, spaces, tree};
use log::{debug, info};
use std::process::ExitCode;

const DEFAULT_OUTPUT_BASE: &str = "arc-bookmarks";

fn main() -> ExitCode {
    let args = cli::Cli::parse_args();

    // Initialize logger
    output::logger::init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::logger::critical(&err.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &cli::Cli) -> Result<()> {
    let cfg = Config::load();

    let output_base = args
        .output
        .clone()
        .or_else(|| cfg.output.clone())
        .unwrap_or_else(|| DEFAULT_OUTPUT_BASE.to_string());

    let sidebar_path = match &cfg.sidebar_path {
        Some(path) => path.clone(),
        None => sidebar::locate()?,
    };
    let document = sidebar::load(&sidebar_path)?;
    let container = document.data_container()?;

    let names = spaces::resolve_spaces(&container.spaces);
    let bookmarks = tree::build_tree(&names.pinned, &container.items);

    write_export(&HtmlExporter, &bookmarks, "HTML", &format!("{output_base}.html"))?;
    write_export(&JsonExporter, &bookmarks, "JSON", &format!("{output_base}.json"))?;
    write_export(
        &FirefoxExporter,
        &bookmarks,
        "JSON",
        &format!("{output_base}.firefox.json"),
    )?;
    write_export(
        &ChromeExporter,
        &bookmarks,
        "JSON",
        &format!("{output_base}.chrome.json"),
    )?;
    write_export(
        &EdgeExporter,
        &bookmarks,
        "JSON",
        &format!("{output_base}.edge.json"),
    )?;
    write_export(
        &SafariExporter,
        &bookmarks,
        "JSON",
        &format!("{output_base}.safari.json"),
    )?;

    info!("Done!");
    Ok(())
}

fn write_export(
    exporter: &dyn TreeExporter,
    bookmarks: &BookmarkTree,
    label: &str,
    path: &str,
) -> Result<()> {
    info!("Writing {}...", label);
    let contents = exporter.render(bookmarks)?;
    std::fs::write(path, contents)?;
    debug!("{} written to {}", label, path);
    Ok(())
}
