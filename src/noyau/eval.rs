//! Noyau — calcul arithmétique générique
//!
//! tokenize -> RPN -> f64
//!
//! Entrée attendue : chiffres, '.', espaces, ( ) et + - * / seulement.
//! Aucune variable, aucune fonction. Sans état (réentrant).

use super::erreur::ErreurCalcul;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{eval_rpn, to_rpn};

/// Trace du calcul (panneau “Démarche”).
#[derive(Default, Clone, Debug, PartialEq)]
pub struct DemarcheCalcul {
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue un texte arithmétique en f64 (IEEE-754, pas d’arrondi).
pub fn evaluer_arithmetique(texte: &str) -> Result<f64, ErreurCalcul> {
    evaluer_arithmetique_detaillee(texte).map(|(v, _)| v)
}

/// Idem + démarche (jetons, RPN).
pub fn evaluer_arithmetique_detaillee(
    texte: &str,
) -> Result<(f64, DemarcheCalcul), ErreurCalcul> {
    // 1) Jetons
    let jetons = tokenize(texte)?;

    // 2) RPN (+ contrôle de grammaire)
    let rpn = to_rpn(&jetons)?;

    // 3) Pile
    let v = eval_rpn(&rpn)?;

    let d = DemarcheCalcul {
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
    };
    Ok((v, d))
}
