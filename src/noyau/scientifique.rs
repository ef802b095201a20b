// src/noyau/scientifique.rs
//
// Fonctions scientifiques appliquées au résultat affiché.
// Angles en DEGRÉS (sin/cos/tan), log en base 10.

use super::erreur::{Cause, ErreurEval};
use super::format::nettoie;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Racine,
    Carre,
    Sin,
    Cos,
    Tan,
    Log,
}

impl Fonction {
    /// Ordre d’affichage des boutons.
    pub const TOUTES: [Fonction; 6] = [
        Fonction::Racine,
        Fonction::Carre,
        Fonction::Sin,
        Fonction::Cos,
        Fonction::Tan,
        Fonction::Log,
    ];

    /// Nom stable (historique : "sqrt(9)", "power(3)", ...).
    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Racine => "sqrt",
            Fonction::Carre => "power",
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Log => "log",
        }
    }

    /// Libellé de bouton.
    pub fn libelle(self) -> &'static str {
        match self {
            Fonction::Racine => "√x",
            Fonction::Carre => "x²",
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Log => "log",
        }
    }
}

/// Applique `f` à `x`, résultat nettoyé (quasi-zéro + 10 décimales).
pub fn applique(f: Fonction, x: f64) -> Result<f64, ErreurEval> {
    if !x.is_finite() {
        return Err(ErreurEval::ValeurInvalide("valeur non finie".into()));
    }

    let brut = match f {
        Fonction::Racine => {
            if x < 0.0 {
                return Err(ErreurEval::ValeurInvalide(
                    "racine d’un nombre négatif".into(),
                ));
            }
            x.sqrt()
        }
        Fonction::Carre => x * x,
        Fonction::Sin => x.to_radians().sin(),
        Fonction::Cos => x.to_radians().cos(),
        Fonction::Tan => x.to_radians().tan(),
        Fonction::Log => {
            if x <= 0.0 {
                return Err(ErreurEval::ValeurInvalide(
                    "logarithme d’un nombre non positif".into(),
                ));
            }
            x.log10()
        }
    };

    if !brut.is_finite() {
        return Err(Cause::NonFini.into());
    }
    Ok(nettoie(brut))
}
