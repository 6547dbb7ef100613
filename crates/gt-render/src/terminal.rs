use crossterm::terminal;
use gt_core::terminal::TerminalInfo;

/// Résout la taille du terminal une fois, avant la lecture.
///
/// Ordre : `window_size()` (colonnes, lignes et pixels) → `size()`
/// (ratio par défaut) → 80×24.
#[must_use]
pub fn discover() -> TerminalInfo {
    match terminal::window_size() {
        Ok(ws) if ws.columns > 0 && ws.rows > 0 => {
            let info = TerminalInfo::from_window(ws.columns, ws.rows, ws.width, ws.height);
            log::info!(
                "Terminal {}×{} ({}×{} px), ratio {:.3}",
                info.columns,
                info.rows,
                ws.width,
                ws.height,
                info.ratio
            );
            return info;
        }
        Ok(_) => log::debug!("window_size() sans dimensions, repli sur size()"),
        Err(e) => log::debug!("window_size() indisponible : {e}"),
    }

    match terminal::size() {
        Ok((columns, rows)) if columns > 0 && rows > 0 => TerminalInfo::from_window(columns, rows, 0, 0),
        _ => {
            log::warn!("Taille du terminal inconnue, utilisation de 80×24");
            TerminalInfo::default()
        }
    }
}
