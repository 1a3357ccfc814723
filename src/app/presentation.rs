//! src/app/presentation.rs
//!
//! Présentation du verdict pour la ligne résultat.
//!
//! Une valeur s'affiche telle quelle (conversion native du noyau, sans
//! arrondi supplémentaire) ; un échec s'affiche par son étiquette courte.
//! C'est ici que viendrait tout habillage futur (séparateurs de milliers…),
//! jamais dans le contrôleur.

use super::evaluateur::Verdict;

/// Texte de la ligne résultat pour un verdict donné.
pub fn format_verdict(verdict: &Verdict) -> String {
    match verdict {
        Verdict::Valeur(texte) => texte.clone(),
        Verdict::Echec(etiquette) => etiquette.clone(),
    }
}
