//! src/app/historique.rs
//!
//! Historique des calculs : liste bornée, la plus récente en tête.
//!
//! Format JSON (export/import/stockage) : tableau d’objets
//! `{ "expression": ..., "result": ..., "timestamp": ... }`.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Nombre d’entrées conservées par défaut.
pub const HISTORIQUE_MAX: usize = 10;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntreeHistorique {
    pub expression: String,
    #[serde(rename = "result")]
    pub resultat: f64,
    #[serde(rename = "timestamp")]
    pub horodatage: String,
}

impl EntreeHistorique {
    /// Entrée horodatée maintenant (UTC).
    pub fn maintenant(expression: impl Into<String>, resultat: f64) -> Self {
        Self {
            expression: expression.into(),
            resultat,
            horodatage: horodatage(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ErreurHistorique {
    #[error("Erreur de lecture du fichier : {0}")]
    Lecture(#[from] serde_json::Error),

    #[error("Format de fichier invalide")]
    FormatInvalide,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Historique {
    entrees: Vec<EntreeHistorique>,
    capacite: usize,
}

impl Default for Historique {
    fn default() -> Self {
        Self::new(HISTORIQUE_MAX)
    }
}

impl Historique {
    pub fn new(capacite: usize) -> Self {
        Self {
            entrees: Vec::with_capacity(capacite),
            capacite,
        }
    }

    /// Les plus récentes d’abord.
    pub fn entrees(&self) -> &[EntreeHistorique] {
        &self.entrees
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }

    pub fn capacite(&self) -> usize {
        self.capacite
    }

    /// Ajoute en tête ; la plus ancienne sort au-delà de la capacité.
    pub fn ajouter(&mut self, entree: EntreeHistorique) {
        self.entrees.insert(0, entree);
        self.entrees.truncate(self.capacite);
    }

    pub fn vider(&mut self) {
        self.entrees.clear();
    }

    /// Remplace le contenu (tronqué à la capacité).
    pub fn remplacer(&mut self, mut entrees: Vec<EntreeHistorique>) {
        entrees.truncate(self.capacite);
        self.entrees = entrees;
    }

    /* ------------------------ JSON ------------------------ */

    /// JSON indenté (2 espaces).
    pub fn exporter_json(&self) -> Result<String, ErreurHistorique> {
        Ok(serde_json::to_string_pretty(&self.entrees)?)
    }

    /// Accepte seulement un tableau JSON ; garde les `capacite` premiers
    /// éléments et remplace l’historique. Renvoie le nombre d’entrées importées.
    ///
    /// En cas d’erreur, l’historique courant est intact.
    pub fn importer_json(&mut self, texte: &str) -> Result<usize, ErreurHistorique> {
        let valeur: serde_json::Value = serde_json::from_str(texte)?;
        let serde_json::Value::Array(elements) = valeur else {
            return Err(ErreurHistorique::FormatInvalide);
        };

        let entrees = elements
            .into_iter()
            .take(self.capacite)
            .map(serde_json::from_value)
            .collect::<Result<Vec<EntreeHistorique>, _>>()?;

        let n = entrees.len();
        self.entrees = entrees;
        Ok(n)
    }
}

/// Horodatage RFC 3339 (UTC), vide si le formatage échoue.
pub fn horodatage() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entree(expression: &str, resultat: f64) -> EntreeHistorique {
        EntreeHistorique {
            expression: expression.to_string(),
            resultat,
            horodatage: "2026-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn plus_recente_en_tete_et_capacite() {
        let mut h = Historique::new(3);
        for i in 0..5 {
            h.ajouter(entree(&format!("{i}+0"), i as f64));
        }
        let exprs: Vec<&str> = h.entrees().iter().map(|e| e.expression.as_str()).collect();
        assert_eq!(exprs, ["4+0", "3+0", "2+0"]);
    }

    #[test]
    fn json_noms_de_champs() {
        let mut h = Historique::default();
        h.ajouter(entree("3+4", 7.0));
        let json = h.exporter_json().unwrap();
        assert!(json.contains("\"expression\": \"3+4\""));
        assert!(json.contains("\"result\": 7.0"));
        assert!(json.contains("\"timestamp\": \"2026-01-01T00:00:00Z\""));
    }

    #[test]
    fn export_puis_import() {
        let mut h = Historique::default();
        h.ajouter(entree("1+1", 2.0));
        h.ajouter(entree("2×3", 6.0));
        let json = h.exporter_json().unwrap();

        let mut autre = Historique::default();
        assert_eq!(autre.importer_json(&json).unwrap(), 2);
        assert_eq!(autre, h);
    }

    #[test]
    fn import_tronque_a_la_capacite() {
        let elements: Vec<String> = (0..15)
            .map(|i| format!(r#"{{"expression":"{i}","result":{i},"timestamp":""}}"#))
            .collect();
        let json = format!("[{}]", elements.join(","));

        let mut h = Historique::default();
        assert_eq!(h.importer_json(&json).unwrap(), 10);
        assert_eq!(h.entrees()[0].expression, "0");
        assert_eq!(h.entrees()[9].expression, "9");
    }

    #[test]
    fn import_refuse_un_non_tableau() {
        let mut h = Historique::default();
        h.ajouter(entree("1+1", 2.0));

        assert!(matches!(
            h.importer_json(r#"{"expression":"1"}"#),
            Err(ErreurHistorique::FormatInvalide)
        ));
        assert!(matches!(
            h.importer_json("pas du json"),
            Err(ErreurHistorique::Lecture(_))
        ));
        assert!(matches!(
            h.importer_json(r#"[{"expression":1}]"#),
            Err(ErreurHistorique::Lecture(_))
        ));
        // intact après les échecs
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn horodatage_rfc3339() {
        let t = horodatage();
        assert!(t.ends_with('Z'), "{t}");
        assert_eq!(t.as_bytes().get(10), Some(&b'T'));
    }
}
