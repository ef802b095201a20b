//! Noyau — évaluation (pipeline réel)
//!
//! validation -> normalisation (× ÷ % ±) -> jetons -> postfixe -> pile -> nettoyage
//!
//! Fonctions pures : aucune donnée retenue entre deux appels, partage libre
//! entre sessions.

use super::erreur::{Cause, ErreurEval};
use super::format::nettoie;
use super::jetons::{format_jetons, tokenize};
use super::normalise::normalise;
use super::rpn::{eval_postfix, format_postfixe, to_postfix};
use super::validation::est_valide;

/// Longueur maximale d’une expression (en caractères).
pub const LONGUEUR_MAX: usize = 20;

/// Trace d’une évaluation réussie (panneau “Démarche”).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Demarche {
    pub normalisee: String,
    pub jetons: String,
    pub postfixe: String,
}

/// API publique : évalue une expression avec la longueur maximale par défaut.
///
/// - vide (après trim) => 0, sans erreur
/// - rejet du validateur => `ExpressionInvalide`
/// - division par zéro => `DivisionParZero`
/// - autre échec => `Evaluation(cause)`
pub fn eval_expression(expr: &str) -> Result<f64, ErreurEval> {
    eval_expression_bornee(expr, LONGUEUR_MAX).map(|(v, _)| v)
}

/// Comme `eval_expression`, avec une longueur maximale choisie par l’appelant,
/// et la démarche en plus.
pub fn eval_expression_bornee(
    expr: &str,
    longueur_max: usize,
) -> Result<(f64, Demarche), ErreurEval> {
    if expr.trim().is_empty() {
        return Ok((0.0, Demarche::default()));
    }

    if !est_valide(expr, longueur_max) {
        return Err(ErreurEval::ExpressionInvalide);
    }

    let normalisee = normalise(expr);
    let jetons = tokenize(&normalisee);
    let postfixe = to_postfix(&jetons)?;
    let brut = eval_postfix(&postfixe)?;

    // x % 0 donne NaN : ce n’est pas un résultat
    if !brut.is_finite() {
        return Err(Cause::NonFini.into());
    }

    let demarche = Demarche {
        normalisee,
        jetons: format_jetons(&jetons),
        postfixe: format_postfixe(&postfixe),
    };
    log::debug!(
        "eval {expr:?} : jetons [{}] postfixe [{}] = {brut}",
        demarche.jetons,
        demarche.postfixe
    );

    Ok((nettoie(brut), demarche))
}
