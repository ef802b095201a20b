//! Noyau d’évaluation (f64)
//!
//! Organisation interne :
//! - erreur.rs        : taxonomie des échecs (thiserror)
//! - validation.rs    : rejets structurels, avant tout parsing
//! - normalise.rs     : réécritures × ÷ → * /, n% → (n/100), ± → *-1
//! - jetons.rs        : tokenisation
//! - rpn.rs           : shunting-yard + réduction du postfixe
//! - format.rs        : quasi-zéro, arrondi 10 décimales, affichage
//! - eval.rs          : pipeline complet
//! - scientifique.rs  : √, x², sin/cos/tan (degrés), log10

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod normalise;
pub mod rpn;
pub mod scientifique;
pub mod validation;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreur::ErreurEval;
pub use eval::{eval_expression, eval_expression_bornee, Demarche, LONGUEUR_MAX};
