// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc pour natif + wasm
// - Écran deux lignes : résultat (haut, à droite) + attente (bas, à gauche)
// - Tactile : gros boutons, grille 6x4 fixe
//
// Note :
// - La vue ne calcule RIEN : chaque clic devient une Commande pour le
//   contrôleur, l'écran est relu à chaque frame (mode immédiat).

use eframe::egui;

use super::controleur::Commande;
use super::AppCalc;

impl AppCalc {
    /// UI complète, appelée à chaque frame par eframe::App::update(...).
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // espacement serré, format clavier
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice Gauss");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_clavier(ui);
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let affichage = self.controleur.affichage();
        // Ligne haute : dernier verdict, à droite (sens “résultat”)
        Self::ligne_ecran(
            ui,
            "ecran_resultat",
            &affichage.resultat,
            egui::Layout::right_to_left(egui::Align::Center),
        );
        // Ligne basse : expression en cours, à gauche (sens de composition)
        Self::ligne_ecran(
            ui,
            "ecran_attente",
            &affichage.attente,
            egui::Layout::left_to_right(egui::Align::Center),
        );
    }

    fn ligne_ecran(ui: &mut egui::Ui, id: &str, contenu: &str, disposition: egui::Layout) {
        // Affichage lecture seule “stable”, cadre + monospace.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(ui.text_style_height(&egui::TextStyle::Monospace));
                    ui.with_layout(disposition, |ui| {
                        ui.monospace(contenu);
                    });
                });
            });
    }

    fn ui_clavier(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("clavier_gauss")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_commande(ui, "C", "Vide l'expression", Commande::Clear);
                self.bouton_insert(ui, "(");
                self.bouton_insert(ui, ")");
                self.bouton_commande(
                    ui,
                    "DEL",
                    "Efface le dernier caractère",
                    Commande::Backspace,
                );
                ui.end_row();

                self.bouton_insert(ui, "j");
                self.bouton_insert(ui, "e");
                self.bouton_insert(ui, "_");
                self.bouton_insert(ui, "%");
                ui.end_row();

                self.bouton_insert(ui, "7");
                self.bouton_insert(ui, "8");
                self.bouton_insert(ui, "9");
                self.bouton_insert(ui, "/");
                ui.end_row();

                self.bouton_insert(ui, "4");
                self.bouton_insert(ui, "5");
                self.bouton_insert(ui, "6");
                self.bouton_insert(ui, "*");
                ui.end_row();

                self.bouton_insert(ui, "1");
                self.bouton_insert(ui, "2");
                self.bouton_insert(ui, "3");
                self.bouton_insert(ui, "-");
                ui.end_row();

                self.bouton_insert(ui, "0");
                self.bouton_insert(ui, ".");
                self.bouton_commande(ui, "=", "Évalue l'expression", Commande::Evaluer);
                self.bouton_insert(ui, "+");
                ui.end_row();
            });
    }

    /// Bouton symbole : un clic = Inserer(symbole).
    fn bouton_insert(&mut self, ui: &mut egui::Ui, symbole: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(symbole));
        if resp.clicked() {
            self.controleur
                .appliquer(Commande::Inserer(symbole.to_string()));
        }
    }

    /// Bouton d'action : un clic = la commande fournie.
    fn bouton_commande(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, commande: Commande) {
        let resp = ui
            .add_sized([46.0, 28.0], egui::Button::new(label))
            .on_hover_text(tip);
        if resp.clicked() {
            self.controleur.appliquer(commande);
        }
    }
}
