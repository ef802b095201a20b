//! src/app/etat.rs
//!
//! État d’une session de calculatrice (sans vue).
//!
//! Rôle : accumuler la saisie dans une expression, appeler le noyau sur `=`,
//! tenir résultat / mémoire / historique / préférences.
//!
//! Contrats :
//! - Une session = une valeur `AppCalc` (aucun état global) : plusieurs
//!   instances ne se voient jamais.
//! - Une évaluation ratée n’efface RIEN : l’expression reste là pour correction.
//! - Les messages utilisateur passent par la file de notifications (la vue les affiche).

use std::collections::VecDeque;

use super::historique::{EntreeHistorique, Historique};
use super::reglages::Reglages;
use crate::noyau::format::{format_nombre, nettoie};
use crate::noyau::scientifique::{self, Fonction};
use crate::noyau::{eval_expression_bornee, Demarche, ErreurEval};

/// Texte affiché à la place du résultat après un échec.
pub const RESULTAT_ERREUR: &str = "Erreur";

/// Saisies qui referment le littéral courant (drapeau décimal remis à faux).
const OPERATEURS_SAISIE: [char; 7] = ['+', '-', '×', '÷', '*', '/', '%'];

const MSG_LONGUEUR_MAX: &str = "Longueur maximale atteinte";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionMemoire {
    Effacer,
    Rappeler,
    Ajouter,
    Soustraire,
}

/// Interface d’appel directe, indépendante de toute boîte à outils UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(char),
    Operateur(char),
    Parenthese(char),
    Point,
    Egal,
    Signe,
    ToutEffacer,
    Retour,
}

impl Touche {
    /// Caractère tapé -> touche (`*` et `x` donnent `×`, `/` donne `÷`).
    pub fn depuis_caractere(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Touche::Chiffre(c)),
            '+' | '-' | '%' => Some(Touche::Operateur(c)),
            '*' | 'x' | '×' => Some(Touche::Operateur('×')),
            '/' | '÷' => Some(Touche::Operateur('÷')),
            '(' | ')' => Some(Touche::Parenthese(c)),
            '.' => Some(Touche::Point),
            '=' => Some(Touche::Egal),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub expression: String,

    // --- sorties ---
    pub resultat: String, // texte affiché ("0", "10.5", "Erreur")
    /// Valeur numérique affichée (None après une erreur) : opérande de ±, M+/M-, √...
    pub dernier_resultat: Option<f64>,
    pub en_erreur: bool,
    pub demarche: Demarche,

    // --- mémoire + historique ---
    pub memoire: f64,
    pub historique: Historique,

    // --- préférences (persistées) ---
    pub theme_sombre: bool,
    pub mode_scientifique: bool,

    // --- drapeaux de saisie ---
    pub nouvelle_expression: bool,
    pub decimale_saisie: bool,

    // --- paramètres ---
    pub reglages: Reglages,

    // --- UX (vue) ---
    pub historique_ouvert: bool,
    pub texte_import: String,
    pub toast: Option<(String, f64)>, // (message, instant de fin en secondes egui)

    notifications: VecDeque<String>,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::avec_reglages(Reglages::default())
    }
}

impl AppCalc {
    pub fn avec_reglages(reglages: Reglages) -> Self {
        Self {
            expression: String::new(),
            resultat: "0".to_string(),
            dernier_resultat: Some(0.0),
            en_erreur: false,
            demarche: Demarche::default(),
            memoire: 0.0,
            historique: Historique::new(reglages.historique_max),
            theme_sombre: false,
            mode_scientifique: false,
            nouvelle_expression: true,
            decimale_saisie: false,
            reglages,
            historique_ouvert: false,
            texte_import: String::new(),
            toast: None,
            notifications: VecDeque::new(),
        }
    }

    /* ------------------------ Saisie ------------------------ */

    /// Ajoute une saisie (un caractère, ou une expression rappelée de l’historique).
    pub fn ajouter(&mut self, saisie: &str) {
        if saisie.is_empty() {
            return;
        }

        if self.nouvelle_expression {
            self.expression.clear();
            self.nouvelle_expression = false;
            self.decimale_saisie = false;
        }

        // un seul point par littéral
        let precedent = self.expression.chars().last();
        if saisie == "." && self.decimale_saisie && precedent.is_some_and(|c| c.is_ascii_digit())
        {
            return;
        }

        let longueur = self.expression.chars().count() + saisie.chars().count();
        if longueur > self.reglages.longueur_max {
            self.notifier(MSG_LONGUEUR_MAX);
            return;
        }

        self.expression.push_str(saisie);

        let mut chars = saisie.chars();
        match (chars.next(), chars.next()) {
            (Some('.'), None) => self.decimale_saisie = true,
            (Some(c), None) if OPERATEURS_SAISIE.contains(&c) => self.decimale_saisie = false,
            (Some(_), None) => {}
            // plusieurs caractères : on relit le littéral final
            _ => self.decimale_saisie = litteral_final(&self.expression).contains('.'),
        }
    }

    /// `=` : évalue l’expression courante.
    ///
    /// Succès : résultat affiché + entrée d’historique + prochaine saisie repart de zéro.
    /// Échec : "Erreur" + notification, expression intacte.
    pub fn calculer(&mut self) {
        if self.expression.trim().is_empty() {
            self.afficher_resultat(0.0);
            return;
        }

        match eval_expression_bornee(&self.expression, self.reglages.longueur_max) {
            Ok((v, demarche)) => {
                self.afficher_resultat(v);
                self.demarche = demarche;
                self.historique
                    .ajouter(EntreeHistorique::maintenant(self.expression.clone(), v));
                self.nouvelle_expression = true;
            }
            Err(e) => {
                log::warn!("évaluation refusée {:?} : {e}", self.expression);
                self.resultat = RESULTAT_ERREUR.to_string();
                self.dernier_resultat = None;
                self.en_erreur = true;
                self.demarche = Demarche::default();
                self.notifier(e.to_string());
            }
        }
    }

    /// C : tout effacer.
    pub fn effacer_tout(&mut self) {
        self.expression.clear();
        self.afficher_resultat(0.0);
        self.nouvelle_expression = true;
        self.decimale_saisie = false;
    }

    /// CE / ⌫ : retire le dernier caractère (ou tout, si un résultat frais est affiché).
    pub fn effacer_entree(&mut self) {
        if self.nouvelle_expression {
            self.effacer_tout();
            return;
        }

        self.expression.pop();
        self.decimale_saisie = litteral_final(&self.expression).contains('.');

        if self.expression.is_empty() {
            self.afficher_resultat(0.0);
            self.nouvelle_expression = true;
        }
    }

    /// ± : négation du résultat frais, sinon du dernier nombre de l’expression.
    pub fn basculer_signe(&mut self) {
        if self.nouvelle_expression {
            if let Some(v) = self.valeur_affichee().filter(|v| *v != 0.0) {
                self.afficher_resultat(-v);
                return;
            }
        }

        if self.expression.is_empty() {
            return;
        }

        let bascule = bascule_signe_expression(&self.expression);
        if bascule.chars().count() > self.reglages.longueur_max {
            self.notifier(MSG_LONGUEUR_MAX);
            return;
        }

        self.expression = bascule;
        self.nouvelle_expression = false;
    }

    /// Point d’entrée unique pour clavier / boutons.
    pub fn appliquer_touche(&mut self, touche: Touche) {
        match touche {
            Touche::Chiffre(c) | Touche::Operateur(c) | Touche::Parenthese(c) => {
                self.ajouter(c.encode_utf8(&mut [0; 4]))
            }
            Touche::Point => self.ajouter("."),
            Touche::Egal => self.calculer(),
            Touche::Signe => self.basculer_signe(),
            Touche::ToutEffacer => self.effacer_tout(),
            Touche::Retour => self.effacer_entree(),
        }
    }

    /* ------------------------ Mémoire + fonctions ------------------------ */

    /// MC / MR / M+ / M- sur le résultat affiché.
    pub fn memoire(&mut self, action: ActionMemoire) {
        let Some(courant) = self.valeur_affichee() else {
            let e = ErreurEval::ValeurInvalide("opération mémoire impossible".into());
            self.notifier(e.to_string());
            return;
        };

        match action {
            ActionMemoire::Effacer => {
                self.memoire = 0.0;
                self.notifier("Mémoire effacée");
            }
            ActionMemoire::Rappeler => {
                let v = self.memoire;
                self.expression = format_nombre(v);
                self.afficher_resultat(v);
                self.nouvelle_expression = true;
            }
            ActionMemoire::Ajouter => {
                self.memoire = nettoie(self.memoire + courant);
                self.notifier(format!("{} ajouté à la mémoire", format_nombre(courant)));
            }
            ActionMemoire::Soustraire => {
                self.memoire = nettoie(self.memoire - courant);
                self.notifier(format!("{} retiré de la mémoire", format_nombre(courant)));
            }
        }

        log::info!("mémoire {action:?} : {}", self.memoire);
    }

    /// √, x², sin, cos, tan, log sur le résultat affiché.
    pub fn fonction_scientifique(&mut self, f: Fonction) {
        let Some(x) = self.valeur_affichee() else {
            let e = ErreurEval::ValeurInvalide("le résultat affiché n’est pas un nombre".into());
            self.notifier(e.to_string());
            return;
        };

        match scientifique::applique(f, x) {
            Ok(v) => {
                self.afficher_resultat(v);
                self.nouvelle_expression = true;
                let expression = format!("{}({})", f.nom(), format_nombre(x));
                self.historique
                    .ajouter(EntreeHistorique::maintenant(expression, v));
            }
            Err(e) => self.notifier(e.to_string()),
        }
    }

    /* ------------------------ Préférences ------------------------ */

    pub fn basculer_theme(&mut self) {
        self.theme_sombre = !self.theme_sombre;
    }

    pub fn basculer_mode_scientifique(&mut self) {
        self.mode_scientifique = !self.mode_scientifique;
    }

    /* ------------------------ Historique ------------------------ */

    pub fn vider_historique(&mut self) {
        self.historique.vider();
    }

    /// Rappel d’une entrée : son expression est ajoutée à la saisie.
    pub fn rappeler_historique(&mut self, index: usize) {
        if let Some(e) = self.historique.entrees().get(index) {
            let expression = e.expression.clone();
            self.ajouter(&expression);
        }
    }

    /// JSON de l’historique (None + notification si la sérialisation échoue).
    pub fn exporter_historique(&mut self) -> Option<String> {
        match self.historique.exporter_json() {
            Ok(json) => {
                log::info!("historique exporté ({} entrées)", self.historique.len());
                Some(json)
            }
            Err(e) => {
                self.notifier(e.to_string());
                None
            }
        }
    }

    pub fn importer_historique(&mut self, texte: &str) {
        match self.historique.importer_json(texte) {
            Ok(n) => {
                log::info!("historique importé ({n} entrées)");
                self.notifier(format!("Historique importé ({n} entrées)"));
            }
            Err(e) => {
                log::warn!("import d’historique refusé : {e}");
                self.notifier(e.to_string());
            }
        }
    }

    /* ------------------------ Notifications ------------------------ */

    pub fn notifier(&mut self, msg: impl Into<String>) {
        self.notifications.push_back(msg.into());
    }

    /// Prochain message à afficher (la vue vide la file).
    pub fn prochaine_notification(&mut self) -> Option<String> {
        self.notifications.pop_front()
    }

    /* ------------------------ Utilitaires ------------------------ */

    fn afficher_resultat(&mut self, v: f64) {
        self.resultat = format_nombre(v);
        self.dernier_resultat = Some(v);
        self.en_erreur = false;
    }

    /// Résultat affiché, s’il est un nombre fini.
    fn valeur_affichee(&self) -> Option<f64> {
        self.dernier_resultat.filter(|v| v.is_finite())
    }
}

/// Littéral numérique final (chiffres et points), éventuellement vide.
fn litteral_final(s: &str) -> &str {
    let debut = s
        .trim_end_matches(|c: char| c.is_ascii_digit() || c == '.')
        .len();
    &s[debut..]
}

/// Si `expr` est exactement un groupe `(…)`, renvoie l’intérieur.
fn interieur_groupe(expr: &str) -> Option<&str> {
    let interieur = expr.strip_prefix('(')?.strip_suffix(')')?;

    // la '(' initiale doit se refermer sur la ')' finale
    let mut solde = 0i32;
    for c in interieur.chars() {
        match c {
            '(' => solde += 1,
            ')' => {
                solde -= 1;
                if solde < 0 {
                    return None;
                }
            }
            _ => {}
        }
    }
    (solde == 0).then_some(interieur)
}

/// `(-(…))` -> `(…)`, `(-L)` -> `L`.
///
/// Un autre groupe comme `(-5+3)` n’est pas l’opposé de `5+3` : None.
fn oppose_de_groupe_negatif(expr: &str) -> Option<&str> {
    let reste = interieur_groupe(expr)?.strip_prefix('-')?;
    let litteral = !reste.is_empty() && litteral_final(reste) == reste;
    (litteral || interieur_groupe(reste).is_some()).then_some(reste)
}

/// Négation textuelle de la fin de l’expression :
/// - `(-(…))` ou `(-L)`      -> `(…)` ou `L`
/// - `…(-L)`                 -> `…L`
/// - `L`                     -> `-L`
/// - `-L`                    -> `L`
/// - `…L`                    -> `…(-L)`
/// - sans nombre final       -> `(-(…))` (le moins unaire ne prend qu’un terme)
pub fn bascule_signe_expression(expr: &str) -> String {
    if let Some(oppose) = oppose_de_groupe_negatif(expr) {
        return oppose.to_string();
    }

    if let Some(sans) = expr.strip_suffix(')') {
        let lit = litteral_final(sans);
        let avant = &sans[..sans.len() - lit.len()];
        if let (false, Some(prefixe)) = (lit.is_empty(), avant.strip_suffix("(-")) {
            return format!("{prefixe}{lit}");
        }
    }

    let lit = litteral_final(expr);
    if lit.is_empty() {
        return if interieur_groupe(expr).is_some() {
            format!("(-{expr})")
        } else {
            format!("(-({expr}))")
        };
    }

    let avant = &expr[..expr.len() - lit.len()];
    match avant {
        "" => format!("-{lit}"),
        "-" => lit.to_string(),
        _ => format!("{avant}(-{lit})"),
    }
}
