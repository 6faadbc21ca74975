// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
// - ErreurCalcul  : échec du calcul arithmétique pur (jetons / RPN)
// - ErreurFormule : échec d’une étape de la formule restreinte (A5, A7, ...)
//
// Le Display de ErreurFormule EST le message montré à l’utilisateur.

use thiserror::Error;

/// Erreurs du calculateur arithmétique (texte déjà nettoyé : chiffres, . + - * / ( )).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide: {0:?}")]
    NombreInvalide(String),

    /// Jeton à une place où la grammaire ne l’accepte pas (ex: "5 5", "2(3)", "*4").
    #[error("jeton inattendu: '{0}'")]
    JetonInattendu(String),

    #[error("expression incomplète")]
    ExpressionIncomplete,

    #[error("parenthèses non fermées")]
    ParenthesesNonFermees,

    #[error("parenthèse fermante sans ouvrante")]
    ParentheseOrpheline,

    #[error("expression vide")]
    ExpressionVide,
}

/// Genre d’erreur (sans données), pour les appelants qui ne font que brancher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenreErreur {
    EntreeVide,
    AucuneVariable,
    CaractereInterdit,
    VariableInconnue,
    ParenthesesDesequilibrees,
    ContenuResiduel,
    ExpressionMalformee,
    ResultatNonFini,
}

/// Échecs de `evaluer_formule`, un variant par étape du pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurFormule {
    #[error("Enter a formula using A-values (e.g. A5 + A20)")]
    EntreeVide,

    #[error("Formula must use at least one variable: {noms}.", noms = noms_autorises())]
    AucuneVariable,

    #[error("Character '{0}' is not allowed. Only {noms} and + - * / ( ) are allowed.", noms = noms_autorises())]
    CaractereInterdit(char),

    #[error("Invalid variable \"{jeton}\". Allowed: {noms}.", noms = noms_autorises())]
    VariableInconnue { jeton: String },

    #[error("Parentheses are not balanced.")]
    ParenthesesDesequilibrees,

    /// Garde-fou après substitution (nom collé à un chiffre, valeur NaN, ...).
    #[error("Formula contains invalid content.")]
    ContenuResiduel,

    #[error("Invalid formula format.")]
    ExpressionMalformee(#[source] ErreurCalcul),

    #[error("Result is not a valid number (maybe divide by zero?).")]
    ResultatNonFini,
}

impl ErreurFormule {
    pub fn genre(&self) -> GenreErreur {
        match self {
            ErreurFormule::EntreeVide => GenreErreur::EntreeVide,
            ErreurFormule::AucuneVariable => GenreErreur::AucuneVariable,
            ErreurFormule::CaractereInterdit(_) => GenreErreur::CaractereInterdit,
            ErreurFormule::VariableInconnue { .. } => GenreErreur::VariableInconnue,
            ErreurFormule::ParenthesesDesequilibrees => GenreErreur::ParenthesesDesequilibrees,
            ErreurFormule::ContenuResiduel => GenreErreur::ContenuResiduel,
            ErreurFormule::ExpressionMalformee(_) => GenreErreur::ExpressionMalformee,
            ErreurFormule::ResultatNonFini => GenreErreur::ResultatNonFini,
        }
    }
}

/// "A5, A7, A12, A13, A15, A20"
fn noms_autorises() -> String {
    super::variables::Variable::TOUTES
        .iter()
        .map(|v| v.nom())
        .collect::<Vec<_>>()
        .join(", ")
}
