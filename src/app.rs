// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (état, historique, persistance, réglages, vue)
// - Ré-exporter AppCalc (pour main.rs)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Adapter le clavier egui vers `Touche` (l’état ne connaît pas egui)

pub mod etat;
pub mod historique;
pub mod persistance;
pub mod reglages;
pub mod vue;

// Ré-export pratique : `use calculatrice_postfixe::app::AppCalc;`
pub use etat::{AppCalc, Touche};

use std::time::Duration;

use eframe::egui;

/// Sauvegarde périodique (préférences, mémoire, historique).
const INTERVALLE_SAUVEGARDE: Duration = Duration::from_secs(5);

impl AppCalc {
    /// Session restaurée depuis le stockage eframe (s’il existe).
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self::default();
        if let Some(storage) = cc.storage {
            persistance::charger(&mut app, storage);
        }
        app
    }

    /// Clavier global : chiffres, opérateurs, Enter/=, Escape/Delete, Backspace, ( ).
    fn clavier(&mut self, ctx: &egui::Context) {
        // un champ texte (import JSON) a le focus : on ne vole pas la frappe
        if ctx.wants_keyboard_input() {
            return;
        }

        let touches: Vec<Touche> =
            ctx.input(|i| i.events.iter().filter_map(touche_depuis_evenement).collect());

        for t in touches {
            self.appliquer_touche(t);
        }
    }

    /// Vide la file de notifications vers le bandeau ; le dernier message gagne.
    fn rafraichir_toast(&mut self, ctx: &egui::Context) {
        let maintenant = ctx.input(|i| i.time);

        while let Some(msg) = self.prochaine_notification() {
            let fin = maintenant + self.reglages.duree_notification.as_secs_f64();
            self.toast = Some((msg, fin));
        }

        if let Some((_, fin)) = &self.toast {
            if maintenant >= *fin {
                self.toast = None;
            } else {
                ctx.request_repaint_after(Duration::from_secs_f64(fin - maintenant));
            }
        }
    }
}

fn touche_depuis_evenement(ev: &egui::Event) -> Option<Touche> {
    match ev {
        egui::Event::Text(t) => {
            let mut chars = t.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Touche::depuis_caractere(c),
                _ => None,
            }
        }
        egui::Event::Key {
            key, pressed: true, ..
        } => match key {
            egui::Key::Enter => Some(Touche::Egal),
            egui::Key::Escape | egui::Key::Delete => Some(Touche::ToutEffacer),
            egui::Key::Backspace => Some(Touche::Retour),
            _ => None,
        },
        _ => None,
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(if self.theme_sombre {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        self.clavier(ctx);
        self.rafraichir_toast(ctx);

        if let Some((msg, _)) = self.toast.clone() {
            egui::TopBottomPanel::bottom("notification").show(ctx, |ui| {
                ui.add_space(4.0);
                ui.label(egui::RichText::new(msg).strong());
                ui.add_space(4.0);
            });
        }

        if self.historique_ouvert {
            egui::SidePanel::right("panneau_historique")
                .resizable(false)
                .min_width(240.0)
                .show(ctx, |ui| {
                    self.ui_historique(ui);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        persistance::sauver(self, storage);
    }

    fn auto_save_interval(&self) -> Duration {
        INTERVALLE_SAUVEGARDE
    }
}
