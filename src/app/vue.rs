// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Deux pages, comme le site d’origine :
// - "Assessment"     : six champs A5..A20, alpha / beta / charlie, Calculate / Reset / Random
// - "Custom formula" : rappel des valeurs, champ formule, Run, sortie, avertissement, démarche
//
// Note :
// - Recalcul “live” : chaque modification d’un champ A.. relance maj_depuis_saisies()
// - Enter dans le champ formule = Run

use eframe::egui;

use super::etat::{AppFormulaire, Page};
use crate::noyau::format::{format_fixe_2, format_nombre};
use crate::noyau::Variable;

/// Préfixe visible des avertissements.
const PREFIXE_ALERTE: &str = "⚠ ";

impl AppFormulaire {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_navigation(ui);
        ui.separator();
        ui.add_space(6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| match self.page {
                Page::Evaluation => self.ui_evaluation(ui),
                Page::Formule => self.ui_formule(ui),
            });
    }

    fn ui_navigation(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.page, Page::Evaluation, "Assessment");
            ui.selectable_value(&mut self.page, Page::Formule, "Custom formula");
        });
    }

    /* ------------------------ Page "Assessment" ------------------------ */

    fn ui_evaluation(&mut self, ui: &mut egui::Ui) {
        ui.heading("Simple assessment");
        ui.add_space(6.0);

        let mut modifie = false;
        egui::Grid::new("grille_saisies")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                for v in Variable::TOUTES {
                    ui.label(v.nom());
                    let resp = ui.add(
                        egui::TextEdit::singleline(&mut self.saisies[v.index()])
                            .desired_width(120.0)
                            .id_salt(("saisie", v.nom())),
                    );
                    modifie |= resp.changed();
                    ui.end_row();
                }
            });
        if modifie {
            self.maj_depuis_saisies();
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("Calculate").clicked() {
                self.maj_depuis_saisies();
            }
            if ui.button("Reset").on_hover_text("A5=5, A7=7, ...").clicked() {
                self.reset();
            }
            if ui.button("Random").on_hover_text("1 to 90").clicked() {
                self.aleatoire();
            }
        });

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        let beta = match self.derives.beta {
            Some(b) => format_fixe_2(b),
            None => "-".to_string(),
        };
        egui::Grid::new("grille_derives")
            .num_columns(3)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                Self::ligne_derive(ui, "alpha", "A5 + A20", &format_nombre(self.derives.alpha));
                Self::ligne_derive(ui, "beta", "A15 / A7", &beta);
                Self::ligne_derive(
                    ui,
                    "charlie",
                    "A13 × A12",
                    &format_nombre(self.derives.charlie),
                );
            });

        if self.derives.beta.is_none() {
            ui.add_space(6.0);
            ui.colored_label(
                ui.visuals().warn_fg_color,
                format!("{PREFIXE_ALERTE}A7 is 0: beta cannot be calculated (divide by zero)."),
            );
        }
    }

    fn ligne_derive(ui: &mut egui::Ui, nom: &str, definition: &str, valeur: &str) {
        ui.label(nom);
        ui.weak(definition);
        ui.monospace(valeur);
        ui.end_row();
    }

    /* ------------------------ Page "Custom formula" ------------------------ */

    fn ui_formule(&mut self, ui: &mut egui::Ui) {
        ui.heading("Custom formula");
        ui.add_space(6.0);

        // Rappel des valeurs utilisées
        ui.horizontal_wrapped(|ui| {
            for v in Variable::TOUTES {
                ui.monospace(format!("{} = {}", v.nom(), format_nombre(self.valeurs.get(v))));
                ui.add_space(8.0);
            }
        });

        ui.add_space(6.0);
        ui.label("Formula :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.formule)
                .desired_width(ui.available_width())
                .hint_text("e.g. (A5 + A20) / A7")
                .id_salt("formule_edit")
                .code_editor(),
        );

        if self.focus_formule {
            resp.request_focus();
            self.focus_formule = false;
        }

        // Enter évalue (seulement si le champ est focus)
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (resp.has_focus() || resp.lost_focus()) && enter {
            self.evaluer_formule();
        }

        ui.add_space(6.0);

        // Touches rapides : variables + opérateurs + Run
        ui.horizontal_wrapped(|ui| {
            for v in Variable::TOUTES {
                self.bouton_insert(ui, v.nom(), InsertKind::Mot);
            }
            ui.separator();
            for op in ["+", "-", "*", "/"] {
                self.bouton_insert(ui, op, InsertKind::Op);
            }
            self.bouton_insert(ui, "(", InsertKind::Parenthese);
            self.bouton_insert(ui, ")", InsertKind::Parenthese);

            ui.add_space(10.0);

            if ui.add_sized([64.0, 30.0], egui::Button::new("Run")).clicked() {
                self.evaluer_formule();
            }
        });

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        ui.label("Result :");
        Self::champ_monospace(ui, "formule_sortie", &self.sortie, 1);

        if !self.avertissement.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(
                ui.visuals().error_fg_color,
                format!("{PREFIXE_ALERTE}{}", self.avertissement),
            );
        }

        ui.add_space(8.0);
        self.ui_demarche(ui);
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Steps")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Substituted", "demarche_subst", &self.demarche.substituee);
                Self::champ_demarche(ui, "Tokens", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Lecture seule, cadre visuel via Frame + Label monospace.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, texte: &str, kind: InsertKind) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(texte));
        if !resp.clicked() {
            return;
        }
        inserer(&mut self.formule, texte, kind);
        self.focus_formule = true;
    }
}

#[derive(Clone, Copy, Debug)]
enum InsertKind {
    Mot,
    Op,
    Parenthese,
}

/// Ajoute `texte` en fin de formule, avec les espaces qui gardent les noms séparés.
fn inserer(formule: &mut String, texte: &str, kind: InsertKind) {
    match kind {
        InsertKind::Op => {
            while formule.ends_with(' ') {
                formule.pop();
            }
            if !formule.is_empty() {
                formule.push(' ');
            }
            formule.push_str(texte);
            formule.push(' ');
        }
        InsertKind::Mot => {
            // un nom collé à un chiffre / nom / ')' ne serait plus un mot entier
            let last = formule.chars().last();
            if matches!(last, Some(c) if c.is_ascii_alphanumeric() || c == ')') {
                formule.push(' ');
            }
            formule.push_str(texte);
        }
        InsertKind::Parenthese => formule.push_str(texte),
    }
}
