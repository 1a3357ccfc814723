//! src/app/evaluateur.rs
//!
//! Contrat d'évaluation (côté app).
//!
//! Le contrôleur ne connaît que ce contrat : un texte entre, un verdict
//! sort. Le verdict est une valeur dans tous les cas — jamais de panique,
//! jamais d'exception déguisée.

use crate::noyau;

/// Issue d'une évaluation : texte de valeur, ou étiquette d'erreur courte.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Valeur(String),
    Echec(String),
}

/// Contrat : évaluer un texte d'expression en un verdict.
pub trait Evaluateur {
    fn evaluer(&self, texte: &str) -> Verdict;
}

/// Évaluateur branché sur le noyau exact (jetons -> RPN -> pile).
#[derive(Clone, Copy, Default, Debug)]
pub struct EvaluateurNoyau;

impl Evaluateur for EvaluateurNoyau {
    fn evaluer(&self, texte: &str) -> Verdict {
        match noyau::evaluer(texte) {
            Ok(v) => Verdict::Valeur(noyau::format_nombre(&v)),
            Err(e) => Verdict::Echec(e.etiquette().to_string()),
        }
    }
}
