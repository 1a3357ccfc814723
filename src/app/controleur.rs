//! src/app/controleur.rs
//!
//! Contrôleur (état UI, sans vue).
//!
//! Rôle : recevoir les commandes du clavier (insertion, backspace, clear,
//! évaluation) et maintenir l'écran deux lignes (résultat + attente).
//!
//! Contrats :
//! - Toute interaction passe par une Commande (pas d'accès direct à l'état).
//! - Évaluer ne modifie JAMAIS la ligne d'attente : l'expression reste
//!   éditable telle quelle après le verdict.
//! - Clear ne touche que l'attente : le dernier résultat reste lisible.
//! - Une commande déclenche au plus une évaluation.

use super::evaluateur::{Evaluateur, EvaluateurNoyau};
use super::presentation::format_verdict;
use super::saisie::Saisie;

/// Une interaction clavier = une commande.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Commande {
    Inserer(String),
    Backspace,
    Clear,
    Evaluer,
}

/// Les deux lignes de l'écran, en valeur : ce que la vue rend à chaque frame.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Affichage {
    /// Ligne haute : dernier verdict (valeur ou étiquette d'erreur).
    pub resultat: String,
    /// Ligne basse : expression en cours de composition.
    pub attente: String,
}

pub struct Controleur {
    saisie: Saisie,
    resultat: String,
    evaluateur: Box<dyn Evaluateur>,
}

impl Default for Controleur {
    fn default() -> Self {
        Controleur::nouveau()
    }
}

impl Controleur {
    /// Contrôleur branché sur le noyau exact.
    pub fn nouveau() -> Self {
        Controleur::avec_evaluateur(Box::new(EvaluateurNoyau))
    }

    /// Contrôleur avec un évaluateur fourni (tests, autre noyau…).
    pub fn avec_evaluateur(evaluateur: Box<dyn Evaluateur>) -> Self {
        Controleur {
            saisie: Saisie::default(),
            resultat: String::new(),
            evaluateur,
        }
    }

    /// Applique une commande. Seul Evaluer consulte l'évaluateur ; la ligne
    /// d'attente ne change que par Inserer/Backspace/Clear.
    pub fn appliquer(&mut self, commande: Commande) {
        match commande {
            Commande::Inserer(fragment) => self.saisie.inserer(&fragment),
            Commande::Backspace => self.saisie.backspace(),
            Commande::Clear => self.saisie.clear(),
            Commande::Evaluer => {
                // le texte part tel quel, vide compris : le verdict tranche
                let verdict = self.evaluateur.evaluer(self.saisie.texte());
                self.resultat = format_verdict(&verdict);
            }
        }
    }

    /// Instantané des deux lignes de l'écran (seule lecture de l'état).
    pub fn affichage(&self) -> Affichage {
        Affichage {
            resultat: self.resultat.clone(),
            attente: self.saisie.texte().to_string(),
        }
    }
}
