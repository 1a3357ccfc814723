// src/app.rs
//
// Calculatrice Gauss — module App (racine)
// ----------------------------------------
// Rôle:
// - Déclarer les sous-modules (saisie, evaluateur, presentation, controleur, vue)
// - Définir AppCalc (état eframe) au-dessus du contrôleur
// - Fournir l'impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Pas de raccourci clavier : le pavé à l'écran est la seule entrée.
// - La vue ne parle au contrôleur que par des Commande (vue.rs).

pub mod controleur;
pub mod evaluateur;
pub mod presentation;
pub mod saisie;
pub mod vue;

use controleur::Controleur;

use eframe::egui;

/// État eframe : un contrôleur, rien d'autre.
#[derive(Default)]
pub struct AppCalc {
    controleur: Controleur,
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // vue.rs
        });
    }
}
