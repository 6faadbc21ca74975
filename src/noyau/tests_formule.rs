//! Tests formule (campagne) : une case par étape du pipeline + propriétés.
//!
//! Notes :
//! - Arrondi : demi loin de zéro (`f64::round`). Un arrondi “demi vers +∞”
//!   donnerait -0.12 pour -0.125 ; ici -0.13 (voir `arrondi_negatif_loin_de_zero`).
//! - Les cas “contenu résiduel” viennent de noms collés (2A5, A5A7) que la
//!   substitution en mot entier ne touche pas, ou d’une valeur NaN.

use pretty_assertions::assert_eq;
use rstest::rstest;

use super::erreur::{ErreurFormule, GenreErreur};
use super::variables::{Variable, Variables};
use super::{evaluer_formule, evaluer_formule_detaillee};

fn vars_exemple() -> Variables {
    Variables::default()
}

fn genre(formule: &str, vars: &Variables) -> GenreErreur {
    match evaluer_formule(formule, vars) {
        Ok(v) => panic!("formule={formule:?} attendue en erreur, obtenu Ok({v})"),
        Err(e) => e.genre(),
    }
}

fn ok(formule: &str, vars: &Variables) -> f64 {
    evaluer_formule(formule, vars).unwrap_or_else(|e| panic!("formule={formule:?} err={e}"))
}

/* ------------------------ Succès ------------------------ */

#[rstest]
#[case("A5 + A20", 25.0)]
#[case("a5+a20", 25.0)]
#[case("A12", 12.0)]
#[case("A15 / A7", 2.14)]
#[case("(A5 + A7) * A12", 144.0)]
#[case("A5 + A7 * A12", 89.0)]
#[case("-A5 * A7", -35.0)]
#[case("A20 - -A5", 25.0)]
#[case("A13 * 0.5 + 1", 7.5)]
#[case("  A20 / 3  ", 6.67)]
#[case("A5-A5", 0.0)]
fn succes(#[case] formule: &str, #[case] attendu: f64) {
    assert_eq!(ok(formule, &vars_exemple()), attendu, "formule={formule:?}");
}

#[test]
fn somme_pour_valeurs_quelconques() {
    let jeux = [
        (1.5, 2.25),
        (-7.0, 3.333),
        (1e6, 0.004),
        (0.0, -0.0),
        (123.456, -987.654),
    ];
    for (a5, a20) in jeux {
        let vars = Variables {
            a5,
            a20,
            ..vars_exemple()
        };
        let attendu = ((a5 + a20) * 100.0).round() / 100.0;
        let attendu = if attendu == 0.0 { 0.0 } else { attendu };
        assert_eq!(ok("A5 + A20", &vars), attendu, "a5={a5} a20={a20}");
    }
}

#[test]
fn casse_sans_effet() {
    let vars = vars_exemple();
    assert_eq!(
        evaluer_formule("a5+a20", &vars),
        evaluer_formule("A5+A20", &vars)
    );
    assert_eq!(
        evaluer_formule("a12 * A13", &vars),
        evaluer_formule("A12 * a13", &vars)
    );
}

#[test]
fn idempotent() {
    let vars = vars_exemple();
    for f in ["A15 / A7", "A5 + B3", "", "A5 / (A7 - A7)", "((A5)"] {
        assert_eq!(evaluer_formule(f, &vars), evaluer_formule(f, &vars), "f={f:?}");
    }
}

#[test]
fn variable_seule() {
    let vars = Variables {
        a12: 12.0,
        ..vars_exemple()
    };
    assert_eq!(ok("A12", &vars), 12.0);
}

#[test]
fn arrondi_negatif_loin_de_zero() {
    let vars = Variables {
        a5: -0.125,
        ..vars_exemple()
    };
    assert_eq!(ok("A5", &vars), -0.13);

    let vars = Variables {
        a5: 0.125,
        ..vars_exemple()
    };
    assert_eq!(ok("A5", &vars), 0.13);
}

#[test]
fn valeur_negative_substituee() {
    let vars = Variables {
        a7: -3.0,
        ..vars_exemple()
    };
    // "5--3" et "5 - -3"
    assert_eq!(ok("A5-A7", &vars), 8.0);
    assert_eq!(ok("A5 - A7", &vars), 8.0);
    assert_eq!(ok("A5*A7", &vars), -15.0);
}

/* ------------------------ Erreurs (une par étape) ------------------------ */

#[rstest]
#[case("", GenreErreur::EntreeVide)]
#[case("   ", GenreErreur::EntreeVide)]
#[case("\t\n", GenreErreur::EntreeVide)]
#[case("42", GenreErreur::AucuneVariable)]
#[case("A1 + 2", GenreErreur::AucuneVariable)]
#[case("A120", GenreErreur::AucuneVariable)]
#[case("A5 % 2", GenreErreur::CaractereInterdit)]
#[case("A5 ^ 2", GenreErreur::CaractereInterdit)]
#[case("A5; alert(1)", GenreErreur::CaractereInterdit)]
#[case("A5 + B3", GenreErreur::VariableInconnue)]
#[case("A5 + A999999", GenreErreur::VariableInconnue)]
#[case("A5 + X", GenreErreur::VariableInconnue)]
#[case("A5 + (A7 * A12", GenreErreur::ParenthesesDesequilibrees)]
#[case(")A5(", GenreErreur::ParenthesesDesequilibrees)]
#[case("A5 + 2A5", GenreErreur::ContenuResiduel)]
#[case("A7 * A5A7", GenreErreur::ContenuResiduel)]
#[case("A5 +", GenreErreur::ExpressionMalformee)]
#[case("A5 A7", GenreErreur::ExpressionMalformee)]
#[case("A5 * ()", GenreErreur::ExpressionMalformee)]
#[case("A5 + .", GenreErreur::ExpressionMalformee)]
#[case("A5 / (A7 - A7)", GenreErreur::ResultatNonFini)]
#[case("(A5 - A5) / (A7 - A7)", GenreErreur::ResultatNonFini)]
fn erreurs(#[case] formule: &str, #[case] attendu: GenreErreur) {
    assert_eq!(genre(formule, &vars_exemple()), attendu, "formule={formule:?}");
}

/* ------------------------ Messages + données des erreurs ------------------------ */

#[test]
fn message_entree_vide() {
    let e = evaluer_formule("  ", &vars_exemple()).unwrap_err();
    assert_eq!(e.to_string(), "Enter a formula using A-values (e.g. A5 + A20)");
}

#[test]
fn inconnue_nomme_le_jeton() {
    let e = evaluer_formule("A5 + b3", &vars_exemple()).unwrap_err();
    assert_eq!(
        e,
        ErreurFormule::VariableInconnue {
            jeton: "B3".into()
        }
    );
    assert!(e.to_string().contains("\"B3\""));
    assert!(e.to_string().contains("A5, A7, A12, A13, A15, A20"));
}

#[test]
fn caractere_interdit_nomme_le_caractere() {
    let e = evaluer_formule("A5 = 3", &vars_exemple()).unwrap_err();
    assert_eq!(e, ErreurFormule::CaractereInterdit('='));
}

#[test]
fn non_fini_message() {
    let vars = Variables {
        a7: 0.0,
        ..vars_exemple()
    };
    let e = evaluer_formule("A15 / A7", &vars).unwrap_err();
    assert_eq!(e, ErreurFormule::ResultatNonFini);
    assert!(e.to_string().contains("maybe divide by zero?"));
}

#[test]
fn malformee_garde_la_cause() {
    use std::error::Error as _;

    let e = evaluer_formule("A5 +", &vars_exemple()).unwrap_err();
    assert_eq!(e.to_string(), "Invalid formula format.");
    assert!(e.source().is_some());
}

#[test]
fn valeur_nan_refusee_apres_substitution() {
    // Le formulaire ne fournit jamais NaN (lire_nombre), mais l’API reste sûre.
    let vars = Variables {
        a13: f64::NAN,
        ..vars_exemple()
    };
    assert_eq!(genre("A13 + 1", &vars), GenreErreur::ContenuResiduel);

    let vars = Variables {
        a13: f64::INFINITY,
        ..vars_exemple()
    };
    assert_eq!(genre("A13 + 1", &vars), GenreErreur::ContenuResiduel);
}

#[test]
fn grandes_valeurs_finies_acceptees() {
    // v * 100 déborderait, mais v n’a plus de partie décimale
    let vars = Variables {
        a5: f64::MAX,
        ..vars_exemple()
    };
    assert_eq!(evaluer_formule("A5", &vars), Ok(f64::MAX));

    let vars = Variables {
        a5: 1e307,
        a20: 0.0,
        ..vars_exemple()
    };
    assert_eq!(evaluer_formule("A5 + A20", &vars), Ok(1e307));

    let vars = Variables {
        a5: 2e306,
        ..vars_exemple()
    };
    assert_eq!(evaluer_formule("A5", &vars), Ok(2e306));
}

#[test]
fn somme_qui_deborde_refusee() {
    let vars = Variables {
        a5: f64::MAX,
        a20: f64::MAX,
        ..vars_exemple()
    };
    assert_eq!(genre("A5 + A20", &vars), GenreErreur::ResultatNonFini);
}

#[test]
fn ordre_des_etapes() {
    let vars = vars_exemple();
    // pas de variable ET caractère interdit : l’étape 3 passe avant la 4
    assert_eq!(genre("4 % 2", &vars), GenreErreur::AucuneVariable);
    // caractère interdit ET identifiant inconnu : 4 avant 5
    assert_eq!(genre("A5 + B3 % 2", &vars), GenreErreur::CaractereInterdit);
    // identifiant inconnu ET parenthèses : 5 avant 6
    assert_eq!(genre("(A5 + B3", &vars), GenreErreur::VariableInconnue);
}

/* ------------------------ Démarche ------------------------ */

#[test]
fn demarche_montre_la_substitution() {
    let vars = Variables::depuis_fn(|v| if v == Variable::A7 { -2.0 } else { 1.5 });
    let (v, d) = evaluer_formule_detaillee("a5 * a7", &vars).unwrap();
    assert_eq!(v, -3.0);
    assert_eq!(d.substituee, "1.5 * -2");
    assert_eq!(d.rpn, "1.5 2 neg *");
}
