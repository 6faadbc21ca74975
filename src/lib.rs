//! Calculatrice formule — formulaire A5..A20 + formule restreinte
//!
//! - `noyau` : variables, dérivées, formule restreinte, calcul arithmétique (sans UI)
//! - `app`   : formulaire egui (natif + web)

pub mod app;
pub mod noyau;

pub use app::AppFormulaire;
pub use noyau::{evaluer_formule, ErreurFormule, GenreErreur, Variable, Variables};
