//! src/app/reglages.rs
//!
//! Réglages d’une session (pas de singleton global : chaque AppCalc a les siens).

use std::time::Duration;

use super::historique::HISTORIQUE_MAX;
use crate::noyau::LONGUEUR_MAX;

/// Durée d’affichage d’une notification.
const DUREE_NOTIFICATION: Duration = Duration::from_millis(3000);

/// Garde-fous : bornes des réglages (anti-abus / anti-gel).
const LONGUEUR_MAX_ABSOLUE: usize = 200;
const HISTORIQUE_MAX_ABSOLU: usize = 100;

#[derive(Clone, Debug, PartialEq)]
pub struct Reglages {
    /// Longueur maximale de l’expression (en caractères).
    pub longueur_max: usize,
    /// Nombre d’entrées d’historique conservées.
    pub historique_max: usize,
    pub duree_notification: Duration,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            longueur_max: LONGUEUR_MAX,
            historique_max: HISTORIQUE_MAX,
            duree_notification: DUREE_NOTIFICATION,
        }
    }
}

impl Reglages {
    pub fn avec_longueur_max(mut self, n: usize) -> Self {
        self.longueur_max = n.clamp(1, LONGUEUR_MAX_ABSOLUE);
        self
    }

    pub fn avec_historique_max(mut self, n: usize) -> Self {
        self.historique_max = n.clamp(1, HISTORIQUE_MAX_ABSOLU);
        self
    }
}
