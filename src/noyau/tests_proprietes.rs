//! Tests de propriétés : pipeline complet contre une évaluation de référence.
//!
//! But : balayer beaucoup d’expressions sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - expressions bornées à LONGUEUR_MAX caractères
//! - budget temps global
//! - référence indépendante : deux passes (× ÷ puis + -), gauche à droite

use std::time::{Duration, Instant};

use super::erreur::ErreurEval;
use super::format::format_nombre;
use super::validation::est_valide;
use super::{eval_expression, LONGUEUR_MAX};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération (bornée) ------------------------ */

const OPS: [char; 6] = ['+', '-', '×', '÷', '*', '/'];

/// Suite "n op n op n ..." ; diviseurs jamais nuls.
fn gen_expr(rng: &mut Rng) -> (String, Vec<f64>, Vec<char>) {
    let termes = 2 + rng.pick(4) as usize;
    let mut s = String::new();
    let mut nombres = Vec::with_capacity(termes);
    let mut ops = Vec::with_capacity(termes - 1);

    for i in 0..termes {
        if i > 0 {
            let op = OPS[rng.pick(OPS.len() as u32) as usize];
            s.push(op);
            ops.push(op);
        }
        let apres_division = matches!(ops.last(), Some('÷') | Some('/'));
        let n = if apres_division {
            1 + rng.pick(99)
        } else {
            rng.pick(100)
        };
        // un nombre sur trois porte une décimale
        let txt = if rng.pick(3) == 0 {
            format!("{n}.{}", 1 + rng.pick(9))
        } else {
            n.to_string()
        };
        nombres.push(txt.parse().unwrap_or(0.0));
        s.push_str(&txt);
    }

    (s, nombres, ops)
}

/// Référence : × ÷ d’abord, puis + -, toujours de gauche à droite.
fn reference(nombres: &[f64], ops: &[char]) -> f64 {
    let mut termes = vec![nombres[0]];
    let mut additifs = Vec::new();

    for (op, &n) in ops.iter().zip(&nombres[1..]) {
        match op {
            '×' | '*' => {
                if let Some(t) = termes.last_mut() {
                    *t *= n;
                }
            }
            '÷' | '/' => {
                if let Some(t) = termes.last_mut() {
                    *t /= n;
                }
            }
            _ => {
                additifs.push(*op);
                termes.push(n);
            }
        }
    }

    let mut acc = termes[0];
    for (op, t) in additifs.iter().zip(&termes[1..]) {
        if *op == '+' {
            acc += t;
        } else {
            acc -= t;
        }
    }
    acc
}

/* ------------------------ Tests ------------------------ */

#[test]
fn proprietes_precedence_contre_reference() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut vus = 0usize;
    for _ in 0..400 {
        budget(t0, max);

        let (expr, nombres, ops) = gen_expr(&mut rng);
        if expr.chars().count() > LONGUEUR_MAX {
            continue;
        }

        let attendu = reference(&nombres, &ops);
        let obtenu = eval_expression(&expr).unwrap_or_else(|e| panic!("{expr:?}: {e}"));
        let tolerance = 1e-10_f64.max(attendu.abs() * 1e-15);
        assert!(
            (obtenu - attendu).abs() <= tolerance + 1e-10,
            "{expr:?} = {obtenu}, attendu {attendu}"
        );
        vus += 1;
    }

    assert!(vus > 100, "trop peu d’expressions testées: {vus}");
}

#[test]
fn proprietes_idempotence_du_resultat_affiche() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);
    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let (expr, _, _) = gen_expr(&mut rng);
        if expr.chars().count() > LONGUEUR_MAX {
            continue;
        }
        let v = eval_expression(&expr).unwrap_or_else(|e| panic!("{expr:?}: {e}"));

        // le texte affiché, réévalué, redonne la même valeur
        let affiche = format_nombre(v);
        if affiche.chars().count() > LONGUEUR_MAX {
            continue;
        }
        let w = eval_expression(&affiche).unwrap_or_else(|e| panic!("{affiche:?}: {e}"));
        assert_eq!(v, w, "{expr:?} -> {affiche:?}");
    }
}

#[test]
fn proprietes_equilibre_des_parentheses() {
    let alphabet = ['(', ')', '1', '+'];
    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..2000 {
        let n = 1 + rng.pick(10) as usize;
        let s: String = (0..n)
            .map(|_| alphabet[rng.pick(alphabet.len() as u32) as usize])
            .collect();
        if !est_valide(&s, LONGUEUR_MAX) {
            continue;
        }

        let mut solde = 0i32;
        for c in s.chars() {
            match c {
                '(' => solde += 1,
                ')' => solde -= 1,
                _ => {}
            }
            assert!(solde >= 0, "solde négatif accepté: {s:?}");
        }
        assert_eq!(solde, 0, "parenthèses non équilibrées acceptées: {s:?}");
    }
}

#[test]
fn proprietes_cas_de_reference() {
    assert_eq!(eval_expression("3+4"), Ok(7.0));
    assert_eq!(eval_expression("7"), Ok(7.0));
    assert_eq!(eval_expression("50%+10"), Ok(10.5));
    assert_eq!(eval_expression("2+3×4"), Ok(14.0));
    assert_eq!(eval_expression("2×3+4"), Ok(10.0));
    assert_eq!(eval_expression("10-2-3"), Ok(5.0));
    assert_eq!(eval_expression("8/0"), Err(ErreurEval::DivisionParZero));
    assert_eq!(eval_expression("8÷0"), Err(ErreurEval::DivisionParZero));
    for s in ["5++3", "5.5.5", "(5+3", "5+"] {
        assert_eq!(eval_expression(s), Err(ErreurEval::ExpressionInvalide), "{s:?}");
    }
}
