// src/app/vue.rs
//
// Vue egui de la console :
// - Entrée d’un littéral : Enter ou "=" évalue (quand le champ a le focus)
// - Quatre rendus côte à côte : décimal, binaire, octal, hexadécimal
// - Sélecteur de largeur (32 / 64 bits)
// - Graine + bouton "Tirer" pour le générateur

use eframe::egui;

use numerique_qpur::noyau::Largeur;

use super::etat::ConsoleNum;

impl ConsoleNum {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Console numérique");
                ui.add_space(6.0);

                self.ui_largeur(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_rendus(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_generateur(ui);
            });
    }

    fn ui_largeur(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Largeur :");

            let mut choix = self.largeur;
            ui.selectable_value(&mut choix, Largeur::Etroite, "32 bits");
            ui.selectable_value(&mut choix, Largeur::Large, "64 bits");

            if choix != self.largeur {
                self.set_largeur(choix);
            }
        });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Littéral :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 0x1A, -3.5e2, 0b1p-3, inf")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.evalue();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            let eq = ui.add_sized([64.0, 30.0], egui::Button::new("="));
            if eq.clicked() {
                self.evalue();
            }

            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface rendus + erreur + tirages",
                Action::ClearResultats,
            );
        });

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_rendus(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("rendus_numeriques")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                for (titre, id, contenu) in [
                    ("Décimal", "rendu_dec", &self.rendus.repr),
                    ("Binaire", "rendu_bin", &self.rendus.bin),
                    ("Octal", "rendu_oct", &self.rendus.oct),
                    ("Hexa", "rendu_hex", &self.rendus.hex),
                ] {
                    ui.label(format!("{titre} :"));
                    Self::champ_monospace(ui, id, contenu, 1);
                    ui.end_row();
                }
            });

        if !self.rendus.repr.is_empty() {
            ui.add_space(4.0);
            ui.label(if self.exact { "domaine exact (entier)" } else { "flottant" });
        }
    }

    fn ui_generateur(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Générateur")
            .default_open(true)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Graine :");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.graine)
                            .desired_width(160.0)
                            .id_source("graine_edit")
                            .code_editor(),
                    );
                    self.bouton_action(ui, "Amorcer", "Ré-amorce le générateur", Action::Amorce);
                    self.bouton_action(ui, "Tirer", "Un tirage dans [0, 1)", Action::Tire);
                });

                let etat = self.generateur.etat();
                ui.monospace(format!(
                    "état : [{:#x}, {:#x}, {:#x}, {:#x}]",
                    etat[0], etat[1], etat[2], etat[3]
                ));

                for t in &self.tirages {
                    ui.monospace(t.as_str());
                }
            });
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
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

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([64.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::Amorce => self.amorce(),
                Action::Tire => self.tire(),
            }
            self.focus_entree = true;
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    Amorce,
    Tire,
}
