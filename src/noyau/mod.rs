//! Noyau exact Gauss
//!
//! Organisation interne :
//! - nombre.rs  : rationnel de Gauss + opérations vérifiées
//! - erreur.rs  : taxonomie des erreurs (une famille par variante)
//! - jetons.rs  : tokenisation (littéraux décimaux, j, e, opérateurs)
//! - rpn.rs     : shunting-yard (moins unaire explicite)
//! - eval.rs    : pipeline complet (jetons -> RPN -> pile)
//! - format.rs  : conversion native (entier / décimal exact / fraction / j)

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod nombre;
pub mod rpn;

#[cfg(test)]
mod tests_arithmetique;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurEval;
pub use eval::evaluer;
pub use format::format_nombre;
