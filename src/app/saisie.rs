//! src/app/saisie.rs
//!
//! Saisie (tampon d'expression, sans vue, sans noyau).
//!
//! Rôle : contenir le texte en cours de composition et offrir les trois
//! opérations du clavier (insertion, backspace, clear), déterministes.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Aucune validation : la frappe est libre, le verdict tombe à l'évaluation.
//! - Backspace retire UN caractère (le clavier n'insère que des symboles d'un
//!   caractère).

#[derive(Clone, Default, Debug)]
pub struct Saisie {
    texte: String,
}

impl Saisie {
    /// Ajoute un fragment (chiffre, opérateur, parenthèse…) en fin de texte.
    pub fn inserer(&mut self, fragment: &str) {
        self.texte.push_str(fragment);
    }

    /// Retire le dernier caractère. Sans effet si le texte est vide.
    pub fn backspace(&mut self) {
        self.texte.pop();
    }

    /// Vide entièrement le texte.
    pub fn clear(&mut self) {
        self.texte.clear();
    }

    pub fn texte(&self) -> &str {
        &self.texte
    }
}
