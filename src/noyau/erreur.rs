// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
// -------------------------------
// Une variante par famille de faute, deux rendus :
// - Display     : message complet (diagnostic)
// - etiquette() : catégorie courte, une seule ligne (écran résultat)
//
// NOTE: Vide garde sa propre variante (message dédié) mais partage
// l'étiquette de Syntaxe — une expression vide est une faute de syntaxe
// du point de vue du contrat d'évaluation.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErreurEval {
    /// Entrée vide ou blanche.
    Vide,
    /// Faute de syntaxe (caractère inattendu, parenthèses, arité…).
    Syntaxe(String),
    /// Identifiant sans valeur liée (ex: `_`, `j` seul, `e` seul).
    NomInconnu(String),
    /// Division ou modulo par zéro (inclut `0 ** -n`).
    DivisionParZero,
    /// Modulo avec un opérande non réel.
    ModuloComplexe,
    /// Puissance avec exposant non entier ou non réel.
    ExposantNonEntier,
    /// Garde-fou: exposant au-delà de la borne.
    Debordement,
}

impl ErreurEval {
    /// Catégorie courte pour l'écran résultat (une ligne, pas de détail).
    pub fn etiquette(&self) -> &'static str {
        match self {
            ErreurEval::Vide | ErreurEval::Syntaxe(_) => "Erreur de syntaxe",
            ErreurEval::NomInconnu(_) => "Nom inconnu",
            ErreurEval::DivisionParZero => "Division par zéro",
            ErreurEval::ModuloComplexe => "Opération invalide",
            ErreurEval::ExposantNonEntier => "Exposant non entier",
            ErreurEval::Debordement => "Débordement",
        }
    }
}

impl fmt::Display for ErreurEval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErreurEval::Vide => write!(f, "entrée vide"),
            ErreurEval::Syntaxe(detail) => write!(f, "{detail}"),
            ErreurEval::NomInconnu(nom) => write!(f, "nom inconnu: '{nom}'"),
            ErreurEval::DivisionParZero => write!(f, "division par zéro"),
            ErreurEval::ModuloComplexe => write!(f, "modulo de nombres complexes"),
            ErreurEval::ExposantNonEntier => write!(f, "exposant doit être entier"),
            ErreurEval::Debordement => write!(f, "exposant trop grand"),
        }
    }
}

impl std::error::Error for ErreurEval {}
