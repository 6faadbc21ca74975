// src/noyau/format.rs
//
// Texte <-> nombres : substitution des variables, affichage, lecture des champs.

/// Décimal le plus court qui relit la même valeur, jamais d’exposant.
/// -0 s’affiche "0".
///
/// NaN / inf sortent tels quels ("NaN", "inf") : côté formule, le contrôle
/// post-substitution les refuse.
pub fn format_nombre(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    format!("{x}")
}

/// Deux décimales fixes (affichage de beta).
pub fn format_fixe_2(x: f64) -> String {
    format!("{x:.2}")
}

/// Lecture d’un champ du formulaire : vide, illisible ou non fini => 0.
pub fn lire_nombre(s: &str) -> f64 {
    match s.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}
