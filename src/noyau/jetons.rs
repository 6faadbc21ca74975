// src/noyau/jetons.rs

use super::erreur::ErreurCalcul;
use super::format::format_nombre;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,

    // Signes préfixes : posés par to_rpn (le tokenizer ne sait pas s’ils sont unaires)
    Neg,
    Pos,

    LPar,
    RPar,
}

/// Tokenize une chaîne arithmétique en jetons.
/// Supporte:
/// - décimaux : 12, 12.5, 12., .5
/// - opérateurs + - * /
/// - parenthèses ( )
///
/// Pas d’identifiants : les variables sont déjà substituées en amont.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        // Décimal : chiffres [ '.' chiffres ] ou '.' chiffres
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }
            let texte: String = chars[start..i].iter().collect();
            // "." seul : aucun chiffre
            if !texte.chars().any(|ch| ch.is_ascii_digit()) {
                return Err(ErreurCalcul::NombreInvalide(texte));
            }
            let n = texte
                .parse::<f64>()
                .map_err(|_| ErreurCalcul::NombreInvalide(texte.clone()))?;
            out.push(Tok::Num(n));
            continue;
        }

        return Err(ErreurCalcul::CaractereInattendu(c));
    }

    Ok(out)
}

/// Format utilitaire (“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens.iter().map(format_tok).collect::<Vec<_>>().join(" ")
}

pub(crate) fn format_tok(t: &Tok) -> String {
    match t {
        Tok::Num(n) => format_nombre(*n),

        Tok::Plus => "+".to_string(),
        Tok::Minus => "-".to_string(),
        Tok::Star => "*".to_string(),
        Tok::Slash => "/".to_string(),

        // notation RPN lisible : neg(x) / pos(x)
        Tok::Neg => "neg".to_string(),
        Tok::Pos => "pos".to_string(),

        Tok::LPar => "(".to_string(),
        Tok::RPar => ")".to_string(),
    }
}
