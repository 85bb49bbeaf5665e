// src/app.rs
//
// Console numérique : état (etat.rs), vue egui (vue.rs) et impl eframe::App.
// Enter est géré dans vue.rs, quand le champ a le focus.

pub mod etat;
pub mod vue;

pub use etat::ConsoleNum;

use eframe::egui;

impl eframe::App for ConsoleNum {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Échap = bouton "C"
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.clear_entree();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
