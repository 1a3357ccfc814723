//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> pile de valeurs -> Nombre exact
//!
//! Remarque : pas d'AST — la grammaire clavier (littéraux, binaires,
//! moins unaire) s'évalue directement sur la RPN.

use super::erreur::ErreurEval;
use super::jetons::{tokenize, Tok};
use super::nombre::Nombre;
use super::rpn::to_rpn;

/// API publique : évalue une expression et retourne sa valeur exacte.
///
/// Toute issue est un `Result` : valeur, ou erreur par famille
/// (entrée vide, syntaxe, nom inconnu, division par zéro, modulo
/// complexe, exposant non entier, débordement).
pub fn evaluer(expr_str: &str) -> Result<Nombre, ErreurEval> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurEval::Vide);
    }

    // 1) Jetons
    let jetons = tokenize(s)?;

    // 2) RPN
    let rpn = to_rpn(&jetons)?;

    // 3) Pile de valeurs
    eval_rpn(&rpn)
}

fn eval_rpn(rpn: &[Tok]) -> Result<Nombre, ErreurEval> {
    let mut pile: Vec<Nombre> = Vec::new();

    for tok in rpn.iter().cloned() {
        match tok {
            Tok::Num(n) => pile.push(n),

            // aucun nom lié dans ce noyau
            Tok::Ident(nom) => return Err(ErreurEval::NomInconnu(nom)),

            Tok::Neg => {
                let x = pile.pop().ok_or_else(expression_invalide)?;
                pile.push(-x);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Percent | Tok::DoubleStar => {
                let b = pile.pop().ok_or_else(expression_invalide)?;
                let a = pile.pop().ok_or_else(expression_invalide)?;

                let v = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    Tok::Slash => a.diviser(&b)?,
                    Tok::Percent => a.modulo(&b)?,
                    Tok::DoubleStar => a.puissance(&b)?,
                    _ => unreachable!(),
                };
                pile.push(v);
            }

            Tok::LPar | Tok::RPar => {
                return Err(ErreurEval::Syntaxe("parenthèse inattendue en RPN".into()));
            }
        }
    }

    if pile.len() != 1 {
        return Err(expression_invalide());
    }
    Ok(pile.pop().unwrap())
}

fn expression_invalide() -> ErreurEval {
    ErreurEval::Syntaxe("expression invalide".into())
}
