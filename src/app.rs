// src/app.rs
//
// Module App (racine)
// -------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppFormulaire (pour main.rs)
// - Fournir l’impl eframe::App (compatible NATIF + WEB) + persistance des six valeurs
//
// Important:
// - La gestion Enter est faite dans vue.rs (quand le champ formule a le focus).

pub mod etat;
pub mod vue;

pub use etat::AppFormulaire;

use eframe::egui;

use crate::noyau::Variables;
use etat::CLE_STOCKAGE;

impl AppFormulaire {
    /// Démarrage : valeurs sauvegardées si présentes, sinon jeu d’exemple.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let sauvees = cc
            .storage
            .and_then(|s| eframe::get_value::<Variables>(s, CLE_STOCKAGE));

        match sauvees {
            Some(valeurs) => {
                log::info!("valeurs rechargées: {valeurs:?}");
                Self::depuis_valeurs(valeurs)
            }
            None => {
                log::info!("aucune valeur sauvegardée, jeu d’exemple");
                Self::default()
            }
        }
    }
}

impl eframe::App for AppFormulaire {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = effacer la formule
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc && self.page == etat::Page::Formule {
            self.effacer_formule();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        log::debug!("sauvegarde des valeurs: {:?}", self.valeurs);
        eframe::set_value(storage, CLE_STOCKAGE, &self.valeurs);
    }
}
