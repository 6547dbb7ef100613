use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Glyphe demi-bloc inférieur : fg = moitié basse, bg = moitié haute.
pub const DEFAULT_GLYPH: char = '▄';

/// Délai par défaut entre deux frames (ms).
pub const DEFAULT_FRAME_DELAY_MS: i64 = 120;

/// Réglages de lecture transmis par la CLI.
///
/// Chargés depuis la section `[playback]` du TOML ; chaque champ a une valeur par défaut.
///
/// # Example
/// ```
/// use gt_core::config::PlaybackConfig;
/// let config = PlaybackConfig::default();
/// assert_eq!(config.frame_delay_ms, 120);
/// assert_eq!(config.loop_count, None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackConfig {
    /// Intervalle de cadence par frame, en ms. Ramené à 1 si ≤ 0.
    pub frame_delay_ms: i64,
    /// Caractère dessiné dans chaque cellule.
    pub glyph: char,
    /// Nombre de cycles complets de l'animation. `None` = boucle infinie.
    pub loop_count: Option<u64>,
    /// Supprimer la couleur dominante (fond) et rejouer la copie exportée.
    pub remove_background: bool,
    /// Chemin du GIF exporté sans fond.
    pub output: PathBuf,
    /// Conserver le décalage `+1` historique des index du cube 6×6×6.
    pub legacy_palette_offset: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
            glyph: DEFAULT_GLYPH,
            loop_count: None,
            remove_background: false,
            output: PathBuf::from("output.gif"),
            legacy_palette_offset: true,
        }
    }
}

impl PlaybackConfig {
    /// Clamp all numeric fields to their valid ranges.
    /// Called after TOML deserialization and CLI overrides.
    pub fn clamp_all(&mut self) {
        self.frame_delay_ms = self.frame_delay_ms.max(1);
    }

    /// Intervalle unique de cadence d'une frame.
    ///
    /// # Example
    /// ```
    /// use gt_core::config::PlaybackConfig;
    /// use std::time::Duration;
    /// let config = PlaybackConfig { frame_delay_ms: -5, ..Default::default() };
    /// assert_eq!(config.frame_interval(), Duration::from_millis(1));
    /// ```
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms.max(1).unsigned_abs())
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    playback: Option<PlaybackSection>,
}

/// Playback section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct PlaybackSection {
    frame_delay_ms: Option<i64>,
    glyph: Option<char>,
    loop_count: Option<u64>,
    remove_background: Option<bool>,
    output: Option<PathBuf>,
    legacy_palette_offset: Option<bool>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use gt_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("gifterm.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<PlaybackConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Erreur de parsing TOML dans {}", path.display()))
}

/// Parse TOML content over the defaults.
///
/// # Errors
/// Returns an error if the content is not valid TOML for the config schema.
pub fn parse_config(content: &str) -> Result<PlaybackConfig> {
    let file: ConfigFile = toml::from_str(content)?;
    let mut config = PlaybackConfig::default();

    if let Some(p) = file.playback {
        if let Some(v) = p.frame_delay_ms {
            config.frame_delay_ms = v;
        }
        if let Some(v) = p.glyph {
            config.glyph = v;
        }
        if let Some(v) = p.loop_count {
            config.loop_count = Some(v);
        }
        if let Some(v) = p.remove_background {
            config.remove_background = v;
        }
        if let Some(v) = p.output {
            config.output = v;
        }
        if let Some(v) = p.legacy_palette_offset {
            config.legacy_palette_offset = v;
        }
    } else {
        log::debug!("Pas de section [playback], valeurs par défaut");
    }

    config.clamp_all();
    Ok(config)
}
