// src/noyau/derives.rs
//
// Valeurs dérivées du formulaire (page “Assessment”).

use super::variables::Variables;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Derives {
    /// A5 + A20
    pub alpha: f64,
    /// A15 / A7 ; None si A7 == 0 (affiché "-" + avertissement)
    pub beta: Option<f64>,
    /// A13 * A12
    pub charlie: f64,
}

pub fn calculer_derives(vars: &Variables) -> Derives {
    let beta = if vars.a7 == 0.0 {
        None
    } else {
        Some(vars.a15 / vars.a7)
    };

    Derives {
        alpha: vars.a5 + vars.a20,
        beta,
        charlie: vars.a13 * vars.a12,
    }
}
