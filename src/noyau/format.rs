// src/noyau/format.rs
//
// Nettoyage numérique + affichage.

/// En dessous (en valeur absolue), un résultat est ramené à 0.
pub const SEUIL_ZERO: f64 = 1e-10;

/// Arrondi appliqué à tout résultat (bruit binaire des flottants).
pub const DECIMALES: usize = 10;

/* ------------------------ Nettoyage ------------------------ */

/// |x| < 1e-10 => 0 ; sinon arrondi à 10 décimales.
///
/// L’arrondi passe par l’écriture décimale exacte (`{:.10}`) puis relecture,
/// ce qui évite le débordement de `x * 1e10` sur les grandes valeurs.
pub fn nettoie(x: f64) -> f64 {
    if x.abs() < SEUIL_ZERO {
        return 0.0;
    }
    format!("{:.*}", DECIMALES, x).parse().unwrap_or(x)
}

/* ------------------------ Affichage ------------------------ */

/// Plus courte écriture décimale fidèle (zéros finaux supprimés).
/// Jamais de "-0".
pub fn format_nombre(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    format!("{x}")
}
