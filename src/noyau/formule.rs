//! Noyau — formule restreinte sur A5, A7, A12, A13, A15, A20
//!
//! vide ? -> MAJUSCULES -> variable connue ? -> caractères -> identifiants
//!        -> parenthèses -> substitution -> re-contrôle -> calcul -> fini ? -> arrondi 2 déc.
//!
//! Chaque étape coupe court sur échec. Ce module ne fait AUCUN parsing
//! arithmétique : il réduit le texte à chiffres + opérateurs, puis délègue
//! à `eval::evaluer_arithmetique_detaillee`.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::erreur::ErreurFormule;
use super::eval::evaluer_arithmetique_detaillee;
use super::format::format_nombre;
use super::variables::{Variable, Variables};

/// Un des six noms, en mot entier (frontières ASCII).
static RE_VARIABLE: LazyLock<Regex> = LazyLock::new(|| {
    let noms: Vec<&str> = Variable::TOUTES.iter().map(|v| v.nom()).collect();
    let motif = format!(r"(?-u:\b)(?:{})(?-u:\b)", noms.join("|"));
    Regex::new(&motif).expect("motif variables valide")
});

/// Tout identifiant : lettres puis chiffres (capte aussi les noms mal formés).
static RE_IDENTIFIANT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]+[0-9]*").expect("motif identifiant valide"));

/// Trace d’une évaluation réussie (panneau “Démarche”).
#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub substituee: String,
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue une formule utilisateur avec les valeurs `vars`.
///
/// Ok = valeur finie arrondie à 2 décimales ; Err = genre + message (Display).
pub fn evaluer_formule(brut: &str, vars: &Variables) -> Result<f64, ErreurFormule> {
    evaluer_formule_detaillee(brut, vars).map(|(v, _)| v)
}

/// Idem + démarche (texte substitué, jetons, RPN).
pub fn evaluer_formule_detaillee(
    brut: &str,
    vars: &Variables,
) -> Result<(f64, Demarche), ErreurFormule> {
    let r = pipeline(brut, vars);
    match &r {
        Ok((v, _)) => log::debug!("formule {brut:?} = {v}"),
        Err(e) => log::debug!("formule {brut:?} refusée ({:?}): {e}", e.genre()),
    }
    r
}

fn pipeline(brut: &str, vars: &Variables) -> Result<(f64, Demarche), ErreurFormule> {
    // 1) Vide
    let brut = brut.trim();
    if brut.is_empty() {
        return Err(ErreurFormule::EntreeVide);
    }

    // 2) Analyse en majuscules
    let maj = brut.to_uppercase();

    // 3) Au moins une variable connue, en mot entier
    if !RE_VARIABLE.is_match(&maj) {
        return Err(ErreurFormule::AucuneVariable);
    }

    // 4) Caractères (sur le texte brut) : les lettres passent, l’étape 5 les trie
    if let Some(c) = brut
        .chars()
        .find(|&c| !(est_arithmetique(c) || c.is_ascii_alphabetic()))
    {
        return Err(ErreurFormule::CaractereInterdit(c));
    }

    // 5) Identifiants : tout ce qui n’est pas exactement un des six noms
    if let Some(m) = RE_IDENTIFIANT
        .find_iter(&maj)
        .find(|m| Variable::depuis_nom(m.as_str()).is_none())
    {
        return Err(ErreurFormule::VariableInconnue {
            jeton: m.as_str().to_string(),
        });
    }

    // 6) Parenthèses
    if !parentheses_equilibrees(&maj) {
        return Err(ErreurFormule::ParenthesesDesequilibrees);
    }

    // 7) Substitution (une passe, indépendante de l’ordre des noms)
    let substituee = RE_VARIABLE
        .replace_all(&maj, |caps: &Captures| match Variable::depuis_nom(&caps[0]) {
            Some(v) => format_nombre(vars.get(v)),
            // inatteignable ; laissé tel quel, l’étape 8 refusera
            None => caps[0].to_string(),
        })
        .into_owned();
    log::trace!("substitution: {maj:?} -> {substituee:?}");

    // 8) Re-contrôle : il ne doit rester que de l’arithmétique
    if !substituee.chars().all(est_arithmetique) {
        return Err(ErreurFormule::ContenuResiduel);
    }

    // 9) Calcul délégué
    let (v, d) =
        evaluer_arithmetique_detaillee(&substituee).map_err(ErreurFormule::ExpressionMalformee)?;

    // 10) Fini
    if !v.is_finite() {
        return Err(ErreurFormule::ResultatNonFini);
    }

    // 11) Arrondi 2 décimales (demi loin de zéro)
    let arrondi = arrondi_2(v);

    let demarche = Demarche {
        substituee,
        jetons: d.jetons,
        rpn: d.rpn,
    };
    Ok((arrondi, demarche))
}

/// Chiffres, '.', espaces, parenthèses, + - * /.
fn est_arithmetique(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '.') || c.is_whitespace()
}

/// Compteur signé : jamais négatif, zéro à la fin.
fn parentheses_equilibrees(s: &str) -> bool {
    let mut prof: i64 = 0;
    for c in s.chars() {
        match c {
            '(' => prof += 1,
            ')' => {
                prof -= 1;
                if prof < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    prof == 0
}

/// x100, arrondi demi loin de zéro (`f64::round`), /100. -0 devient 0.
///
/// Si v * 100 déborde, v est déjà entier (|v| > 2^52) : rendu tel quel.
fn arrondi_2(v: f64) -> f64 {
    let centiemes = v * 100.0;
    if !centiemes.is_finite() {
        return v;
    }
    let r = centiemes.round() / 100.0;
    if r == 0.0 {
        0.0
    } else {
        r
    }
}
