// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Gros boutons (tactile), clavier géré dans app.rs
// - Historique en panneau latéral : rappel, vider, export/import JSON
//
// Note :
// - La vue ne calcule rien : chaque bouton appelle une méthode de etat.rs.
// - Export = JSON copié dans le presse-papiers ; import = JSON collé dans un champ.

use eframe::egui;

use super::etat::{ActionMemoire, AppCalc, Touche};
use crate::noyau::format::format_nombre;
use crate::noyau::scientifique::Fonction;

/// Pavé principal, ligne par ligne.
const PAVE: &[&[(&str, Touche)]] = &[
    &[
        ("C", Touche::ToutEffacer),
        ("CE", Touche::Retour),
        ("%", Touche::Operateur('%')),
        ("÷", Touche::Operateur('÷')),
    ],
    &[
        ("7", Touche::Chiffre('7')),
        ("8", Touche::Chiffre('8')),
        ("9", Touche::Chiffre('9')),
        ("×", Touche::Operateur('×')),
    ],
    &[
        ("4", Touche::Chiffre('4')),
        ("5", Touche::Chiffre('5')),
        ("6", Touche::Chiffre('6')),
        ("-", Touche::Operateur('-')),
    ],
    &[
        ("1", Touche::Chiffre('1')),
        ("2", Touche::Chiffre('2')),
        ("3", Touche::Chiffre('3')),
        ("+", Touche::Operateur('+')),
    ],
    &[
        ("±", Touche::Signe),
        ("0", Touche::Chiffre('0')),
        (".", Touche::Point),
        ("=", Touche::Egal),
    ],
    &[("(", Touche::Parenthese('(')), (")", Touche::Parenthese(')'))],
];

const MEMOIRE: [(&str, &str, ActionMemoire); 4] = [
    ("MC", "Effacer la mémoire", ActionMemoire::Effacer),
    ("MR", "Rappeler la mémoire", ActionMemoire::Rappeler),
    ("M+", "Ajouter le résultat à la mémoire", ActionMemoire::Ajouter),
    ("M-", "Retirer le résultat de la mémoire", ActionMemoire::Soustraire),
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_barre(ui);

                ui.add_space(6.0);
                self.ui_ecran(ui);
                ui.add_space(8.0);

                if self.mode_scientifique {
                    self.ui_scientifique(ui);
                    ui.add_space(6.0);
                }

                self.ui_memoire(ui);
                ui.add_space(6.0);

                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_barre(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            let theme = if self.theme_sombre {
                "Mode sombre"
            } else {
                "Mode clair"
            };
            if ui.button(theme).on_hover_text("Changer de thème").clicked() {
                self.basculer_theme();
            }

            let sci = if self.mode_scientifique {
                "Scientifique : ON"
            } else {
                "Scientifique : OFF"
            };
            if ui.button(sci).clicked() {
                self.basculer_mode_scientifique();
            }

            let libelle = format!("Historique ({})", self.historique.len());
            if ui.button(libelle).clicked() {
                self.historique_ouvert = !self.historique_ouvert;
            }
        });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // expression (ligne du haut)
                    let expr = if self.expression.is_empty() {
                        " "
                    } else {
                        self.expression.as_str()
                    };
                    ui.monospace(expr);

                    // résultat (rouge si erreur)
                    let couleur = if self.en_erreur {
                        ui.visuals().error_fg_color
                    } else {
                        ui.visuals().strong_text_color()
                    };
                    ui.label(
                        egui::RichText::new(self.resultat.as_str())
                            .monospace()
                            .size(32.0)
                            .color(couleur),
                    );

                    // indicateur mémoire
                    if self.memoire != 0.0 {
                        ui.small(format!("M : {}", format_nombre(self.memoire)));
                    }
                });
            });
    }

    fn ui_scientifique(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for f in Fonction::TOUTES {
                let resp = ui
                    .add_sized([56.0, 30.0], egui::Button::new(f.libelle()))
                    .on_hover_text(f.nom());
                if resp.clicked() {
                    self.fonction_scientifique(f);
                }
            }
        });
    }

    fn ui_memoire(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for (label, tip, action) in MEMOIRE {
                let resp = ui
                    .add_sized([46.0, 28.0], egui::Button::new(label))
                    .on_hover_text(tip);
                if resp.clicked() {
                    self.memoire(action);
                }
            }

            ui.separator();

            let copier = ui
                .add_sized([64.0, 28.0], egui::Button::new("Copier"))
                .on_hover_text("Copier le résultat");
            if copier.clicked() {
                ui.ctx().copy_text(self.resultat.clone());
                self.notifier("Résultat copié dans le presse-papiers");
            }
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for &(label, touche) in *ligne {
                        let resp = ui.add_sized(
                            [64.0, 44.0],
                            egui::Button::new(egui::RichText::new(label).size(20.0)),
                        );
                        if resp.clicked() {
                            self.appliquer_touche(touche);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Normalisée", &self.demarche.normalisee);
                Self::champ_demarche(ui, "Jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "Postfixe", &self.demarche.postfixe);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.monospace(contenu);
            });
    }

    /// Panneau latéral : liste (clic = rappel), vider, export/import JSON.
    pub fn ui_historique(&mut self, ui: &mut egui::Ui) {
        ui.heading("Historique");
        ui.small(format!(
            "{} / {} calculs",
            self.historique.len(),
            self.historique.capacite()
        ));

        ui.horizontal(|ui| {
            if ui.button("Vider").clicked() {
                self.vider_historique();
            }
            let exporter = ui
                .button("Exporter")
                .on_hover_text("Copie l’historique (JSON) dans le presse-papiers");
            if exporter.clicked() {
                if let Some(json) = self.exporter_historique() {
                    ui.ctx().copy_text(json);
                    self.notifier("Historique copié (JSON)");
                }
            }
        });

        ui.separator();

        let mut rappel = None;
        if self.historique.is_empty() {
            ui.weak("Aucun calcul pour l’instant");
        } else {
            egui::ScrollArea::vertical()
                .max_height(360.0)
                .show(ui, |ui| {
                    for (i, e) in self.historique.entrees().iter().enumerate() {
                        let texte = format!("{}\n= {}", e.expression, format_nombre(e.resultat));
                        let resp = ui
                            .add(egui::Button::new(egui::RichText::new(texte).monospace()))
                            .on_hover_text(e.horodatage.as_str());
                        if resp.clicked() {
                            rappel = Some(i);
                        }
                    }
                });
        }
        if let Some(i) = rappel {
            self.rappeler_historique(i);
        }

        ui.separator();

        ui.label("Importer (coller un JSON) :");
        ui.add(
            egui::TextEdit::multiline(&mut self.texte_import)
                .desired_rows(4)
                .desired_width(f32::INFINITY)
                .code_editor(),
        );
        if ui.button("Importer").clicked() {
            let texte = std::mem::take(&mut self.texte_import);
            self.importer_historique(&texte);
        }
    }
}
