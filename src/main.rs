//! hexgrid - headless driver for the hex grid engine
//!
//! Loads a file, applies cursor/selection/edit messages through `update`,
//! and prints the grid as text or JSON.

use anyhow::{Context, Result};
use clap::Parser;

use hexgrid::cli::CliArgs;
use hexgrid::commands::Cmd;
use hexgrid::config::HexConfig;
use hexgrid::dump::{render_text, StateDump};
use hexgrid::model::HexModel;
use hexgrid::update::update;

fn main() -> Result<()> {
    hexgrid::tracing::init();

    let args = CliArgs::parse();
    let config = HexConfig::load();

    let data = std::fs::read(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    tracing::info!(path = %args.file.display(), len = data.len(), "loaded file");

    let mut model = HexModel::with_config(data, &config);

    for msg in args.messages() {
        if let Some(cmd) = update(&mut model, msg) {
            perform(cmd)?;
        }
    }

    if args.json {
        println!("{}", StateDump::from_model(&model).to_json()?);
    } else {
        print!("{}", render_text(&model.editor));
    }

    if let Some(output) = &args.output {
        std::fs::write(output, model.data())
            .with_context(|| format!("Failed to write {}", output.display()))?;
        tracing::info!(path = %output.display(), "wrote edited bytes");
    }

    Ok(())
}

/// Execute side effects requested by `update`
///
/// There is no window, so redraw and scroll requests are only logged.
fn perform(cmd: Cmd) -> Result<()> {
    for cmd in cmd.flatten() {
        match cmd {
            Cmd::CopyToClipboard(text) => {
                let mut clipboard =
                    arboard::Clipboard::new().context("Failed to open the system clipboard")?;
                clipboard
                    .set_text(text)
                    .context("Failed to copy to the system clipboard")?;
            }
            other => tracing::trace!(?other, "command ignored without a window"),
        }
    }
    Ok(())
}
