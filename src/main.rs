//! termfolio - A Personal Portfolio for the Terminal
//!
//! Renders a single-page portfolio with a markdown blog and an embedded
//! command interpreter.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Arg, Command};

use termfolio::config::Settings;
use termfolio::content::{ContentSource, DiskSource, MemorySource};
use termfolio::ui;
use termfolio::{Application, Language};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging for development
    env_logger::init();

    // Parse command-line arguments
    let matches = Command::new("termfolio")
        .version(termfolio::VERSION)
        .about("A personal portfolio for the terminal")
        .long_about(
            "termfolio renders a single-page portfolio in the terminal: markdown blog, \
             skill sheet, experience timeline and an embedded command interpreter. \
             Press ` to open the terminal and type help.",
        )
        .arg(
            Arg::new("content-dir")
                .help("Directory holding posts/<lang>/*.md (defaults to ./content)")
                .index(1),
        )
        .arg(
            Arg::new("lang")
                .long("lang")
                .value_name("CODE")
                .help("UI language for this run: en or es"),
        )
        .get_matches();

    let mut settings = Settings::load();

    if let Some(code) = matches.get_one::<String>("lang") {
        match Language::from_code(code) {
            Some(language) => settings.language = language,
            None => anyhow::bail!("Unsupported language code: {code} (expected en or es)"),
        }
    }

    let cli_dir = matches.get_one::<String>("content-dir").map(PathBuf::from);
    let source = resolve_content_source(cli_dir, &settings)?;

    // Assemble the application before touching the screen so startup errors
    // print normally.
    let app = Application::new(settings, source).await?;

    ui::install_panic_hook();
    let mut terminal = ui::init()?;
    let run_result = app.run(&mut terminal).await;
    if let Err(e) = ui::restore() {
        log::error!("failed to restore the terminal: {e}");
    }
    run_result?;

    Ok(())
}

/// Pick where posts come from. Explicitly named directories must exist;
/// only the implicit `./content` default may fall back to the posts
/// compiled into the binary.
fn resolve_content_source(
    cli_dir: Option<PathBuf>,
    settings: &Settings,
) -> Result<Arc<dyn ContentSource>> {
    if let Some(dir) = cli_dir {
        if !dir.exists() {
            anyhow::bail!("Content directory does not exist: {}", dir.display());
        }
        return Ok(Arc::new(DiskSource::new(&dir)?));
    }

    if let Some(dir) = &settings.content_dir {
        if !dir.exists() {
            anyhow::bail!(
                "Configured content directory does not exist: {}",
                dir.display()
            );
        }
        return Ok(Arc::new(DiskSource::new(dir)?));
    }

    let default_dir = PathBuf::from("content");
    if default_dir.is_dir() {
        return Ok(Arc::new(DiskSource::new(&default_dir)?));
    }

    log::info!("no content directory found, serving the embedded posts");
    Ok(Arc::new(MemorySource::embedded()))
}
