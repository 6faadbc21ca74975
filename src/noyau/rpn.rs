// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> f64
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), en vérifiant la grammaire au passage
// - Puis évaluer la RPN sur une pile de f64
//
// Règles:
// - Précédences : + - (1) < * / (2) < signes préfixes (3)
// - + - * / associatifs à gauche ; signes préfixes à droite ("- -3", "5--3")
// - Un '+'/'-' qui arrive quand on attend une valeur est un signe (Pos/Neg)
//
// NOTE:
// - Division par zéro : PAS une erreur ici (IEEE-754 => inf/NaN), c’est l’appelant qui tranche.

use super::erreur::ErreurCalcul;
use super::jetons::{format_tok, Tok};

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg | Tok::Pos => 3,
        _ => 0,
    }
}

fn inattendu(t: &Tok) -> ErreurCalcul {
    ErreurCalcul::JetonInattendu(format_tok(t))
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Star, Minus, Num(3)]
///   rpn:    [Num(2), Num(3), Neg, Star]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalcul> {
    if tokens.is_empty() {
        return Err(ErreurCalcul::ExpressionVide);
    }

    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un nombre ou une expression fermée.
    // Sert à détecter les signes et les valeurs collées ("5 5", "2(3)").
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                if prev_was_value {
                    return Err(inattendu(&tok));
                }
                out.push(tok);
                prev_was_value = true;
            }

            Tok::LPar => {
                if prev_was_value {
                    return Err(inattendu(&tok));
                }
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                if !prev_was_value {
                    return Err(inattendu(&tok));
                }
                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(top),
                        None => return Err(ErreurCalcul::ParentheseOrpheline),
                    }
                }
                prev_was_value = true;
            }

            Tok::Plus | Tok::Minus if !prev_was_value => {
                // signe préfixe : rien à dépiler (il s’applique à ce qui suit)
                ops.push(if tok == Tok::Minus { Tok::Neg } else { Tok::Pos });
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                if !prev_was_value {
                    return Err(inattendu(&tok));
                }

                // dépile tant que le haut de pile est au moins aussi prioritaire
                // (gauche-associatif), sans traverser '('
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) || precedence(top) < precedence(&tok) {
                        break;
                    }
                    if let Some(top) = ops.pop() {
                        out.push(top);
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }

            // jamais produits par tokenize
            Tok::Neg | Tok::Pos => return Err(inattendu(&tok)),
        }
    }

    // fin : "5 +" ou "-" => il manque une valeur
    if !prev_was_value {
        return Err(ErreurCalcul::ExpressionIncomplete);
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurCalcul::ParenthesesNonFermees);
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN (sortie de `to_rpn`) en f64.
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, ErreurCalcul> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Num(n) => st.push(*n),

            Tok::Neg | Tok::Pos => {
                let x = st.pop().ok_or(ErreurCalcul::ExpressionIncomplete)?;
                st.push(if *tok == Tok::Neg { -x } else { x });
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = st.pop().ok_or(ErreurCalcul::ExpressionIncomplete)?;
                let a = st.pop().ok_or(ErreurCalcul::ExpressionIncomplete)?;

                let v = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    _ => a / b,
                };
                st.push(v);
            }

            Tok::LPar | Tok::RPar => return Err(inattendu(tok)),
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(ErreurCalcul::ExpressionIncomplete),
    }
}
