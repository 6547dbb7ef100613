use std::path::PathBuf;

use clap::Parser;
use gt_core::config::PlaybackConfig;

/// gifterm : lecture de GIF animés dans le terminal, en 256 couleurs.
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = None,
    after_help = "Quitter l'animation : <Esc> ou 'q'."
)]
pub struct Cli {
    /// Fichier GIF à afficher.
    pub gif: PathBuf,

    /// Fichier de configuration TOML (section [playback]).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Vitesse de l'animation : délai entre deux frames, en ms.
    #[arg(long, allow_negative_numbers = true)]
    pub delay: Option<i64>,

    /// Caractère unicode utilisé comme bloc de cellule.
    #[arg(long)]
    pub cell: Option<char>,

    /// Nombre de boucles complètes de l'animation (infini par défaut).
    #[arg(long = "loop")]
    pub loop_count: Option<u64>,

    /// Supprimer la couleur de fond (couleur dominante).
    #[arg(long, default_value_t = false)]
    pub rb: bool,

    /// GIF créé sans la couleur de fond (avec --rb). Supprimé en sortie.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Cube 256 couleurs standard, sans le décalage +1 historique.
    #[arg(long, default_value_t = false)]
    pub exact_palette: bool,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Applique les options explicites de la ligne de commande sur la config.
    pub fn apply_overrides(&self, config: &mut PlaybackConfig) {
        if let Some(delay) = self.delay {
            config.frame_delay_ms = delay;
        }
        if let Some(glyph) = self.cell {
            config.glyph = glyph;
        }
        if let Some(count) = self.loop_count {
            config.loop_count = Some(count);
        }
        if self.rb {
            config.remove_background = true;
        }
        if let Some(ref out) = self.out {
            config.output.clone_from(out);
        }
        if self.exact_palette {
            config.legacy_palette_offset = false;
        }
    }
}
