// src/noyau/validation.rs
//
// Validateur structurel : s’exécute AVANT toute réécriture ou tokenisation.
// Aucune allocation au-delà du Vec<char>, aucun effet de bord.

/// Opérateurs binaires interdits en séquence (`++`, `+-`, `××`, `//`, ...).
/// `%` n’en fait pas partie : `5%+3` reste valide.
const OPERATEURS_ENCHAINES: [char; 6] = ['+', '-', '×', '÷', '*', '/'];

/// Caractères interdits en toute fin d’expression.
const FINS_INTERDITES: [char; 8] = ['+', '-', '×', '÷', '*', '/', '%', '('];

/// Vrai si l’expression passe toutes les règles :
/// - longueur (en caractères) ≤ `longueur_max`
/// - parenthèses équilibrées, jamais de solde négatif
/// - pas deux opérateurs consécutifs
/// - pas de littéral à double point décimal (`1.2.3`)
/// - pas de fin sur un opérateur ou une parenthèse ouvrante
pub fn est_valide(expr: &str, longueur_max: usize) -> bool {
    let chars: Vec<char> = expr.chars().collect();

    chars.len() <= longueur_max
        && parentheses_equilibrees(&chars)
        && !operateurs_doubles(&chars)
        && !decimale_double(&chars)
        && !fin_ouverte(&chars)
}

fn parentheses_equilibrees(chars: &[char]) -> bool {
    let mut solde: i64 = 0;
    for &c in chars {
        match c {
            '(' => solde += 1,
            ')' => {
                solde -= 1;
                if solde < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    solde == 0
}

fn operateurs_doubles(chars: &[char]) -> bool {
    chars
        .windows(2)
        .any(|w| OPERATEURS_ENCHAINES.contains(&w[0]) && OPERATEURS_ENCHAINES.contains(&w[1]))
}

/// Motif : chiffre(s) '.' chiffre(s) '.'
fn decimale_double(chars: &[char]) -> bool {
    for (i, &c) in chars.iter().enumerate() {
        if c != '.' || i == 0 || !chars[i - 1].is_ascii_digit() {
            continue;
        }
        let mut k = i + 1;
        while k < chars.len() && chars[k].is_ascii_digit() {
            k += 1;
        }
        if k > i + 1 && k < chars.len() && chars[k] == '.' {
            return true;
        }
    }
    false
}

fn fin_ouverte(chars: &[char]) -> bool {
    chars.last().is_some_and(|c| FINS_INTERDITES.contains(c))
}

#[cfg(test)]
mod tests {
    use super::est_valide;

    const MAX: usize = 20;

    #[test]
    fn accepte_expressions_simples() {
        for s in ["5+3", "2×3+4", "(1+2)÷3", "50%+10", "12.5*2", "-5", "3±", "(2+3)%4", ""] {
            assert!(est_valide(s, MAX), "devrait être valide: {s:?}");
        }
    }

    #[test]
    fn longueur_max() {
        let vingt = "1".repeat(20);
        let vingt_et_un = "1".repeat(21);
        assert!(est_valide(&vingt, MAX));
        assert!(!est_valide(&vingt_et_un, MAX));

        // longueur en caractères, pas en octets
        let symboles = "1×".repeat(9) + "1";
        assert_eq!(symboles.chars().count(), 19);
        assert!(est_valide(&symboles, MAX));
    }

    #[test]
    fn parentheses() {
        assert!(!est_valide("(5+3", MAX));
        assert!(!est_valide("5+3)", MAX));
        assert!(!est_valide(")5+3(", MAX));
        assert!(est_valide("((5))", MAX));
    }

    #[test]
    fn operateurs_enchaines() {
        for s in ["5++3", "5--3", "5**3", "5//3", "5××3", "5÷÷3", "5+-3", "5×-3"] {
            assert!(!est_valide(s, MAX), "devrait être rejeté: {s:?}");
        }
        // séparés par un espace : la règle ne voit pas de séquence
        assert!(est_valide("5+ -3", MAX));
    }

    #[test]
    fn double_decimale() {
        assert!(!est_valide("5.5.5", MAX));
        assert!(!est_valide("1+22.33.4", MAX));
        assert!(est_valide("5.5+5.5", MAX));
    }

    #[test]
    fn fin_sur_operateur() {
        for s in ["5+", "5-", "5×", "5÷", "5*", "5/", "5%", "5+("] {
            assert!(!est_valide(s, MAX), "devrait être rejeté: {s:?}");
        }
    }
}
