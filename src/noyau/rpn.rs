// src/noyau/rpn.rs
//
// Shunting-yard -> postfixe -> valeur
// Objectif:
// - Convertir une suite de Jeton en postfixe (RPN)
// - Puis réduire le postfixe avec une pile de f64
//
// Règles:
// - Précédence : + - => 1 ; × * ÷ / => 2 ; % => 3
// - Associativité gauche : à précédence égale, l’opérateur déjà empilé sort d’abord
// - Signe unaire (en début, après '(' ou après un opérateur) :
//    - '-' devient Oppose, préfixe, plus prioritaire que tout opérateur binaire
//    - '+' est ignoré
// - ')' sans '(' : on vide la pile, sans erreur (l’équilibre relève du validateur)

use super::erreur::{Cause, ErreurEval};
use super::jetons::Jeton;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Modulo,
    /// Moins unaire (préfixe).
    Oppose,
}

impl Operateur {
    /// Table de précédence binaire : `× *` et `÷ /` sont synonymes.
    pub fn depuis_symbole(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '*' | '×' => Some(Operateur::Fois),
            '/' | '÷' => Some(Operateur::Divise),
            '%' => Some(Operateur::Modulo),
            _ => None,
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Operateur::Plus | Operateur::Moins => 1,
            Operateur::Fois | Operateur::Divise => 2,
            Operateur::Modulo => 3,
            Operateur::Oppose => 4,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
            Operateur::Modulo => '%',
            Operateur::Oppose => '±',
        }
    }
}

/// Élément d’une séquence postfixe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Postfixe {
    Nombre(f64),
    Op(Operateur),
}

/// Pile d’opérateurs du shunting-yard.
#[derive(Clone, Copy, Debug)]
enum Empile {
    Op(Operateur),
    ParOuvrante,
}

/// Convertit une suite de jetons en postfixe.
///
/// Exemple:
///   jetons:   [2, +, 3, *, 4]
///   postfixe: [2, 3, 4, *, +]
pub fn to_postfix(jetons: &[Jeton]) -> Result<Vec<Postfixe>, ErreurEval> {
    let mut out: Vec<Postfixe> = Vec::with_capacity(jetons.len());
    let mut ops: Vec<Empile> = Vec::new();

    // “valeur” = un nombre ou une parenthèse fermée.
    // Sert à détecter le signe unaire.
    let mut prev_was_value = false;

    for jeton in jetons {
        match jeton {
            Jeton::Litteral(txt) => {
                let v: f64 = txt
                    .parse()
                    .map_err(|_| Cause::NombreInvalide(txt.clone()))?;
                out.push(Postfixe::Nombre(v));
                prev_was_value = true;
            }

            Jeton::Symbole('(') => {
                ops.push(Empile::ParOuvrante);
                prev_was_value = false;
            }

            Jeton::Symbole(')') => {
                // dépile jusqu’à '(' (jetée, jamais émise)
                while let Some(top) = ops.pop() {
                    match top {
                        Empile::ParOuvrante => break,
                        Empile::Op(op) => out.push(Postfixe::Op(op)),
                    }
                }
                prev_was_value = true;
            }

            Jeton::Symbole(c) => {
                let op = Operateur::depuis_symbole(*c).ok_or(Cause::SymboleInattendu(*c))?;

                if !prev_was_value {
                    match op {
                        // plus unaire : neutre
                        Operateur::Plus => continue,
                        // moins unaire : préfixe, ne fait rien sortir
                        Operateur::Moins => {
                            ops.push(Empile::Op(Operateur::Oppose));
                            continue;
                        }
                        _ => {}
                    }
                }

                // dépile tant que le sommet n’est pas '(' et que sa précédence est >=
                while let Some(&Empile::Op(top)) = ops.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    out.push(Postfixe::Op(top));
                    ops.pop();
                }

                ops.push(Empile::Op(op));
                prev_was_value = false;
            }
        }
    }

    // vide la pile ops (une '(' orpheline est simplement jetée)
    while let Some(top) = ops.pop() {
        if let Empile::Op(op) = top {
            out.push(Postfixe::Op(op));
        }
    }

    Ok(out)
}

/// Réduit un postfixe à une seule valeur.
///
/// Opérande gauche = la valeur empilée en premier.
pub fn eval_postfix(postfixe: &[Postfixe]) -> Result<f64, ErreurEval> {
    let mut pile: Vec<f64> = Vec::with_capacity(postfixe.len());

    for p in postfixe {
        match *p {
            Postfixe::Nombre(v) => pile.push(v),

            Postfixe::Op(Operateur::Oppose) => {
                let a = pile.pop().ok_or(Cause::OperandeManquant('±'))?;
                pile.push(-a);
            }

            Postfixe::Op(op) => {
                let manquant = Cause::OperandeManquant(op.symbole());
                let b = pile.pop().ok_or_else(|| manquant.clone())?;
                let a = pile.pop().ok_or(manquant)?;
                pile.push(applique(op, a, b)?);
            }
        }
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        _ => Err(Cause::PileNonUnitaire(pile.len()).into()),
    }
}

fn applique(op: Operateur, a: f64, b: f64) -> Result<f64, ErreurEval> {
    match op {
        Operateur::Plus => Ok(a + b),
        Operateur::Moins => Ok(a - b),
        Operateur::Fois => Ok(a * b),
        Operateur::Divise => {
            if b == 0.0 {
                return Err(ErreurEval::DivisionParZero);
            }
            Ok(a / b)
        }
        // reste natif : signe du dividende
        Operateur::Modulo => Ok(a % b),
        Operateur::Oppose => Ok(-b),
    }
}

/// Format utilitaire (“démarche”) : postfixe en texte.
pub fn format_postfixe(postfixe: &[Postfixe]) -> String {
    postfixe
        .iter()
        .map(|p| match p {
            Postfixe::Nombre(v) => format!("{v}"),
            Postfixe::Op(op) => op.symbole().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
