// src/noyau/erreur.rs
//
// Taxonomie des échecs du noyau.
// Le texte (Display) est celui montré à l’utilisateur dans les notifications.

use thiserror::Error;

/// Échec d’une évaluation (pipeline, fonctions scientifiques, mémoire).
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ErreurEval {
    /// Rejet structurel par le validateur : aucune évaluation tentée.
    #[error("Expression invalide")]
    ExpressionInvalide,

    /// Opérande droit d’une division exactement nul.
    #[error("Division par zéro")]
    DivisionParZero,

    /// Tout autre échec pendant jetons -> postfixe -> pile.
    #[error("Erreur d’évaluation : {0}")]
    Evaluation(#[source] Cause),

    /// Opérande non fini, ou hors domaine (√ négatif, log ≤ 0).
    #[error("Valeur invalide : {0}")]
    ValeurInvalide(String),
}

/// Cause interne d’une `ErreurEval::Evaluation`.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Cause {
    #[error("nombre invalide {0:?}")]
    NombreInvalide(String),

    #[error("symbole inattendu '{0}'")]
    SymboleInattendu(char),

    #[error("opérande manquant pour '{0}'")]
    OperandeManquant(char),

    #[error("{0} valeurs restantes sur la pile")]
    PileNonUnitaire(usize),

    #[error("résultat non fini")]
    NonFini,
}

impl From<Cause> for ErreurEval {
    fn from(cause: Cause) -> Self {
        ErreurEval::Evaluation(cause)
    }
}
