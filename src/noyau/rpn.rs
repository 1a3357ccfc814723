// src/noyau/rpn.rs
//
// Shunting-yard -> RPN (postfix)
// Objectif:
// - Convertir une suite de Tok en RPN; l'évaluation se fait ensuite
//   directement sur la RPN (pile de valeurs), sans AST intermédiaire.
//
// Règles:
// - Moins unaire: si '-' arrive quand on n'attend PAS une valeur, il devient
//   Tok::Neg (préfixe). Précédence entre % et ** comme en Python:
//   -2**2 = -(2**2) = -4, mais -7%3 = (-7)%3 = 2.
// - Plus unaire: neutre, élidé.
// - Ident(name): atome, sortie directe (l'évaluation tranchera).

use super::erreur::ErreurEval;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash | Tok::Percent => 2,
        Tok::Neg => 3,
        Tok::DoubleStar => 4,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::DoubleStar)
}

/// Passe une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple: `2 + 3 * 4` devient `2 3 4 * +`.
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = atome ou groupe fermé ; distingue moins binaire et unaire.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) | Tok::Ident(_) => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::LPar => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                // dépile jusqu'à '('
                let mut fermee = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        fermee = true;
                        break;
                    }
                    out.push(top);
                }
                if !fermee {
                    return Err(ErreurEval::Syntaxe("parenthèse fermante isolée".into()));
                }
                prev_was_value = true;
            }

            Tok::Plus => {
                // plus unaire : neutre, élidé
                if prev_was_value {
                    depiler_selon_precedence(&mut ops, &mut out, &Tok::Plus);
                    ops.push(Tok::Plus);
                    prev_was_value = false;
                }
            }

            Tok::Minus => {
                if prev_was_value {
                    depiler_selon_precedence(&mut ops, &mut out, &Tok::Minus);
                    ops.push(Tok::Minus);
                } else {
                    // préfixe : son opérande n'est pas encore lu, rien à dépiler
                    ops.push(Tok::Neg);
                }
                prev_was_value = false;
            }

            Tok::Star | Tok::Slash | Tok::Percent | Tok::DoubleStar => {
                depiler_selon_precedence(&mut ops, &mut out, &tok);
                ops.push(tok);
                prev_was_value = false;
            }

            // jamais produit par tokenize; accepté tel quel (préfixe)
            Tok::Neg => {
                ops.push(Tok::Neg);
                prev_was_value = false;
            }
        }
    }

    // vidange finale de la pile d'opérateurs
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurEval::Syntaxe("parenthèses non fermées".into()));
        }
        out.push(op);
    }

    Ok(out)
}

/// Dépile vers la sortie tant que la précédence/associativité l'exige
/// (sans traverser une parenthèse ouvrante).
fn depiler_selon_precedence(ops: &mut Vec<Tok>, out: &mut Vec<Tok>, tok: &Tok) {
    while let Some(top) = ops.last() {
        if matches!(top, Tok::LPar) {
            break;
        }

        let p_top = precedence(top);
        let p_tok = precedence(tok);

        let doit_pop = if is_right_associative(tok) {
            p_top > p_tok
        } else {
            p_top >= p_tok
        };

        if doit_pop {
            out.push(ops.pop().unwrap());
        } else {
            break;
        }
    }
}

/* ------------------------ Tests ------------------------ */
