//! src/app/persistance.rs
//!
//! Stockage clé-valeur des préférences via `eframe::Storage`
//! (fichier en natif, localStorage en web).
//!
//! Lecture tolérante : une valeur illisible retombe sur le défaut, jamais d’erreur.

use eframe::Storage;

use super::etat::AppCalc;
use super::historique::EntreeHistorique;

pub const CLE_THEME: &str = "calculator-theme";
pub const CLE_HISTORIQUE: &str = "calculator-history";
pub const CLE_MEMOIRE: &str = "calculator-memory";
pub const CLE_MODE_SCIENTIFIQUE: &str = "calculator-scientific-mode";

/// Restaure thème, mode scientifique, mémoire et historique.
pub fn charger(app: &mut AppCalc, storage: &dyn Storage) {
    app.theme_sombre = storage.get_string(CLE_THEME).as_deref() == Some("dark");
    app.mode_scientifique =
        storage.get_string(CLE_MODE_SCIENTIFIQUE).as_deref() == Some("true");

    if let Some(txt) = storage.get_string(CLE_MEMOIRE) {
        app.memoire = match txt.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => {
                log::warn!("mémoire illisible {txt:?}, remise à 0");
                0.0
            }
        };
    }

    if let Some(json) = storage.get_string(CLE_HISTORIQUE) {
        match serde_json::from_str::<Vec<EntreeHistorique>>(&json) {
            Ok(entrees) => app.historique.remplacer(entrees),
            Err(e) => {
                log::warn!("historique illisible, ignoré : {e}");
                app.historique.vider();
            }
        }
    }
}

/// Écrit les quatre clés.
pub fn sauver(app: &AppCalc, storage: &mut dyn Storage) {
    let theme = if app.theme_sombre { "dark" } else { "light" };
    storage.set_string(CLE_THEME, theme.to_string());
    storage.set_string(CLE_MODE_SCIENTIFIQUE, app.mode_scientifique.to_string());
    storage.set_string(CLE_MEMOIRE, app.memoire.to_string());

    match serde_json::to_string(app.historique.entrees()) {
        Ok(json) => storage.set_string(CLE_HISTORIQUE, json),
        Err(e) => log::warn!("historique non sauvegardé : {e}"),
    }
}
