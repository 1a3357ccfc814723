// src/main.rs
//
// Calculatrice Gauss — point d'entrée NATIF + WEB (WASM)
// ------------------------------------------------------
// - NATIF : eframe::run_native + NativeOptions (fenêtre format clavier)
// - WEB   : eframe::WebRunner sur <canvas id="the_canvas_id"> (index.html)
//
// Ici : démarrage seulement. L'impl eframe::App vit dans src/app.rs,
// la vue dans src/app/vue.rs.

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod noyau;

use app::AppCalc;

/// Titre unique (fenêtre native + onglet web).
const TITRE_APP: &str = "Calculatrice Gauss";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    // Fenêtre étroite : deux lignes d'écran + grille 6x4.
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([360.0, 420.0])
            .with_min_inner_size([300.0, 380.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppCalc>::default())),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le vrai démarrage est start() ci-dessous (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Démarrage automatique au chargement de la page :
    /// titre d'onglet, récupération du canvas, lancement du WebRunner.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let fenetre = window().ok_or_else(|| erreur_js("window() indisponible"))?;
        let document = fenetre
            .document()
            .ok_or_else(|| erreur_js("document() indisponible"))?;

        document.set_title(TITRE_APP);

        let element = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| erreur_js("canvas introuvable (id attendu: the_canvas_id)"))?;

        let canvas: HtmlCanvasElement = element
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| erreur_js("l'élément trouvé n'est pas un <canvas>"))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn erreur_js(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
