use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gt_core::config::PlaybackConfig;
use gt_core::frame::AnimatedImage;
use gt_palette::background::suppress_background;
use gt_palette::dominant_color;

use crate::cli::Cli;

/// Animation prête à jouer, et fichier exporté à supprimer en sortie.
pub struct Prepared {
    pub image: AnimatedImage,
    pub export: Option<PathBuf>,
}

/// Resolve config: defaults ← `--config` ← CLI flags.
///
/// # Errors
/// Returns an error if the config file cannot be read or parsed.
pub fn resolve_config(cli: &Cli) -> Result<PlaybackConfig> {
    let mut config = match cli.config {
        Some(ref path) => gt_core::config::load_config(path)?,
        None => PlaybackConfig::default(),
    };
    cli.apply_overrides(&mut config);
    config.clamp_all();
    Ok(config)
}

/// Charge le GIF et, si demandé, le remplace par sa copie sans fond.
///
/// # Errors
/// Returns an error if the GIF cannot be loaded, or if the background-free
/// copy cannot be written or read back.
pub fn prepare_image(path: &Path, config: &PlaybackConfig) -> Result<Prepared> {
    let image = gt_source::load(path).with_context(|| format!("Impossible de charger {}", path.display()))?;

    if !config.remove_background {
        return Ok(Prepared {
            image,
            export: None,
        });
    }

    if same_file(&config.output, path) {
        anyhow::bail!(
            "Le fichier de sortie {} écraserait la source",
            config.output.display()
        );
    }

    let image = export_without_background(image, &config.output)?;
    Ok(Prepared {
        image,
        export: Some(config.output.clone()),
    })
}

/// Supprime la couleur dominante, exporte la copie et la relit.
///
/// # Errors
/// Returns an error if the export or the re-decode fails; a half-written
/// export is removed before returning.
pub fn export_without_background(mut image: AnimatedImage, out: &Path) -> Result<AnimatedImage> {
    let dominant = dominant_color(&image);
    suppress_background(&mut image, dominant);

    if let Err(e) = gt_source::save(&image, out) {
        cleanup(Some(out));
        return Err(e).with_context(|| format!("Export impossible vers {}", out.display()));
    }

    match gt_source::load(out) {
        Ok(reloaded) => Ok(reloaded),
        Err(e) => {
            cleanup(Some(out));
            Err(e).with_context(|| format!("Relecture impossible de {}", out.display()))
        }
    }
}

/// Vrai si les deux chemins désignent le même fichier.
///
/// Comparaison canonique quand les deux existent, brute sinon.
fn same_file(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Consomme un SIGINT/SIGTERM reçu pendant la préparation.
///
/// Le gestionnaire est installé avant l'export : un signal arrivé pendant
/// l'écriture ou la relecture est retenu dans le canal, puis traité ici
/// avant l'init du terminal, avec le même nettoyage qu'en fin de lecture.
pub fn interrupted_before_playback(interrupts: &flume::Receiver<()>, export: Option<&Path>) -> bool {
    if interrupts.try_recv().is_err() {
        return false;
    }
    log::info!("Interruption reçue avant la lecture");
    cleanup(export);
    true
}

/// Nettoyage best-effort à l'arrêt : un échec est journalisé, jamais fatal.
pub fn cleanup(export: Option<&Path>) {
    let Some(path) = export else {
        return;
    };
    match std::fs::remove_file(path) {
        Ok(()) => log::info!("Fichier temporaire supprimé : {}", path.display()),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => log::warn!("Suppression de {} impossible : {e}", path.display()),
    }
}
