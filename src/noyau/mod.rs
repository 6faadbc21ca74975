//! Noyau — formulaire A5..A20 + formule restreinte
//!
//! Organisation interne :
//! - variables.rs : les six entrées nommées (A5, A7, A12, A13, A15, A20)
//! - derives.rs   : alpha / beta / charlie
//! - formule.rs   : validation + substitution de la formule utilisateur
//! - eval.rs      : calcul arithmétique générique (jetons -> RPN -> f64)
//! - jetons.rs    : tokenisation
//! - rpn.rs       : shunting-yard + pile
//! - format.rs    : nombres <-> texte
//! - erreur.rs    : ErreurFormule / ErreurCalcul

pub mod derives;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod formule;
pub mod jetons;
pub mod rpn;
pub mod variables;

#[cfg(test)]
mod tests_formule;


// API publique minimale
pub use derives::{calculer_derives, Derives};
pub use erreur::{ErreurFormule, GenreErreur};
pub use formule::{evaluer_formule, evaluer_formule_detaillee, Demarche};
pub use variables::{Variable, Variables};
