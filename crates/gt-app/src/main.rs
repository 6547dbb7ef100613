use anyhow::Result;
use clap::Parser;
use gt_render::{CrosstermInput, RatatuiSink};

pub mod cli;
pub mod pipeline;
pub mod player;
pub mod signals;

use player::{PlaybackContext, Player};

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Charger la config (défauts ← fichier ← flags)
    let config = pipeline::resolve_config(&cli)?;

    // 4. SIGINT / SIGTERM → canal, installé avant tout export sur disque
    let interrupts = signals::install_interrupt_handler()?;

    // 5. Décoder le GIF (+ export sans fond) : toute erreur est fatale avant l'init du terminal
    let prepared = pipeline::prepare_image(&cli.gif, &config)?;
    if pipeline::interrupted_before_playback(&interrupts, prepared.export.as_deref()) {
        return Ok(());
    }

    // 6. Géométrie du terminal, figée pour toute la lecture
    let term = gt_render::terminal::discover();

    // 7. Initialiser le terminal ratatui
    let terminal = ratatui::init();
    let sink = RatatuiSink::new(terminal, term.columns, term.rows);

    // 8. Boucle de lecture
    let ctx = PlaybackContext {
        image: &prepared.image,
        terminal: term,
        config: &config,
    };
    let result = Player::new(ctx, sink, CrosstermInput, interrupts).run();

    // 9. Restaurer le terminal (TOUJOURS, même en cas d'erreur)
    ratatui::restore();

    // 10. Supprimer l'export temporaire
    pipeline::cleanup(prepared.export.as_deref());

    let reason = result?;
    log::info!("Fin : {reason:?}");
    Ok(())
}
