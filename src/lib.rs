//! Calculatrice postfixe
//!
//! - `noyau` : évaluateur pur (validation -> normalisation -> jetons ->
//!   shunting-yard -> pile), réutilisable sans UI.
//! - `app`   : session egui (saisie, mémoire, historique, préférences persistées).

pub mod app;
pub mod noyau;
