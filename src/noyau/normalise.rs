// src/noyau/normalise.rs
//
// Réécritures textuelles appliquées après validation, avant tokenisation :
// - × -> *, ÷ -> /
// - <nombre>% -> (<nombre>/100)
// - ± -> *-1
//
// Règle du pourcentage : seul un `%` collé à un littéral numérique est un
// pourcentage. Tout autre `%` (après `)` ou après un pourcentage déjà réécrit)
// reste l’opérateur reste-de-division.

/// Applique les trois réécritures, dans cet ordre.
pub fn normalise(expr: &str) -> String {
    let s: String = expr
        .chars()
        .map(|c| match c {
            '×' => '*',
            '÷' => '/',
            c => c,
        })
        .collect();

    reecrit_pourcentages(&s).replace('±', "*-1")
}

/// `50%` -> `(50/100)`, `12.5%` -> `(12.5/100)`.
///
/// Littéral reconnu : chiffres, éventuellement suivis de `.chiffres`,
/// immédiatement avant le `%`.
fn reecrit_pourcentages(s: &str) -> String {
    let mut out: Vec<char> = Vec::with_capacity(s.len() + 8);

    for c in s.chars() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let debut = match debut_litteral_pourcent(&out) {
            Some(d) => d,
            None => {
                out.push('%');
                continue;
            }
        };

        let litteral: String = out.drain(debut..).collect();
        out.push('(');
        out.extend(litteral.chars());
        out.extend("/100)".chars());
    }

    out.into_iter().collect()
}

/// Indice de début du littéral qui précède un `%`, ou None si le `%`
/// ne suit pas un chiffre.
fn debut_litteral_pourcent(out: &[char]) -> Option<usize> {
    let mut j = out.len();
    while j > 0 && out[j - 1].is_ascii_digit() {
        j -= 1;
    }
    if j == out.len() {
        return None;
    }

    // partie fractionnaire : "<chiffres>.<chiffres>"
    if j >= 2 && out[j - 1] == '.' && out[j - 2].is_ascii_digit() {
        let mut k = j - 1;
        while k > 0 && out[k - 1].is_ascii_digit() {
            k -= 1;
        }
        return Some(k);
    }

    Some(j)
}

#[cfg(test)]
mod tests {
    use super::normalise;

    #[test]
    fn symboles_unicode() {
        assert_eq!(normalise("2×3÷4"), "2*3/4");
    }

    #[test]
    fn pourcentages() {
        assert_eq!(normalise("50%+10"), "(50/100)+10");
        assert_eq!(normalise("12.5%"), "(12.5/100)");
        assert_eq!(normalise("200×15%"), "200*(15/100)");
        assert_eq!(normalise("1+2%-3%"), "1+(2/100)-(3/100)");
    }

    #[test]
    fn pourcent_sans_litteral_reste_modulo() {
        assert_eq!(normalise("(2+3)%4"), "(2+3)%4");
        assert_eq!(normalise("5%%3"), "(5/100)%3");
    }

    #[test]
    fn point_sans_chiffre_avant() {
        // ".5%" : seul "5" est un littéral complet pour la règle
        assert_eq!(normalise(".5%"), ".(5/100)");
    }

    #[test]
    fn bascule_de_signe() {
        assert_eq!(normalise("5±"), "5*-1");
        assert_eq!(normalise("(2+3)±"), "(2+3)*-1");
    }
}
