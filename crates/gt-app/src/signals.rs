use anyhow::{Context, Result};

/// Installe le gestionnaire SIGINT/SIGTERM.
///
/// Le signal est déposé dans un canal que la boucle de lecture consulte à
/// chaque frontière de frame ; il passe par le même chemin d'arrêt et de
/// nettoyage que la touche `q`.
///
/// # Errors
/// Returns an error if a handler is already installed for this process.
pub fn install_interrupt_handler() -> Result<flume::Receiver<()>> {
    let (tx, rx) = flume::bounded(1);
    ctrlc::set_handler(move || {
        // canal plein : un arrêt est déjà en attente
        let _ = tx.try_send(());
    })
    .context("Impossible d'installer le gestionnaire de signaux")?;
    Ok(rx)
}
