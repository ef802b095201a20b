// src/noyau/jetons.rs

/// Jeton brut, avant interprétation par le shunting-yard.
#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    /// Suite de chiffres et de points, non encore convertie (ex: "12.5").
    Litteral(String),

    /// Tout autre caractère : opérateur, parenthèse, ou symbole inconnu.
    Symbole(char),
}

/// Tokenize une chaîne normalisée en un seul passage.
/// - chiffres et '.' s’accumulent dans le littéral courant
/// - tout autre caractère vide le littéral puis devient un Symbole
/// - les espaces vident le littéral et sont ignorés
///
/// Aucune validation ici : le validateur passe avant.
pub fn tokenize(s: &str) -> Vec<Jeton> {
    let mut out = Vec::new();
    let mut litteral = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() || c == '.' {
            litteral.push(c);
            continue;
        }

        if !litteral.is_empty() {
            out.push(Jeton::Litteral(std::mem::take(&mut litteral)));
        }

        if !c.is_whitespace() {
            out.push(Jeton::Symbole(c));
        }
    }

    if !litteral.is_empty() {
        out.push(Jeton::Litteral(litteral));
    }

    out
}

/// Format utilitaire (“démarche”) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .map(|j| match j {
            Jeton::Litteral(s) => s.clone(),
            Jeton::Symbole(c) => c.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
