//! src/app/etat.rs
//!
//! État UI de la console numérique et ses actions (évaluer, effacer, amorcer, tirer).
//! Aucune logique d’affichage ici.

use numerique_qpur::noyau::{Generateur, Largeur, Nombre, Numerique};

/// Nombre de tirages gardés à l’écran.
const TIRAGES_MAX: usize = 12;

/// Les quatre rendus d’un même Nombre.
#[derive(Clone, Default, Debug)]
pub struct Rendus {
    pub repr: String,
    pub bin: String,
    pub oct: String,
    pub hex: String,
}

#[derive(Clone, Debug)]
pub struct ConsoleNum {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- paramètres ---
    pub largeur: Largeur,
    pub graine: String,

    // --- sorties ---
    pub rendus: Rendus,
    pub exact: bool,    // le dernier résultat est-il dans le domaine entier ?
    pub erreur: String, // lecture incomplète, NaN, graine illisible…

    // --- générateur ---
    pub generateur: Generateur,
    pub tirages: Vec<String>,

    // --- UX ---
    pub focus_entree: bool,
}

impl Default for ConsoleNum {
    fn default() -> Self {
        Self::new(Largeur::default())
    }
}

impl ConsoleNum {
    pub fn new(largeur: Largeur) -> Self {
        Self {
            entree: String::new(),
            largeur,
            graine: "1".to_string(),
            rendus: Rendus::default(),
            exact: false,
            erreur: String::new(),
            generateur: Generateur::graine(1, largeur),
            tirages: Vec::new(),
            focus_entree: true,
        }
    }

    pub fn numerique(&self) -> Numerique {
        Numerique::new(self.largeur)
    }

    /* ------------------------ Actions ------------------------ */

    /// C : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : rendus + erreur + tirages.
    pub fn clear_resultats(&mut self) {
        self.rendus = Rendus::default();
        self.exact = false;
        self.erreur.clear();
        self.tirages.clear();
        self.focus_entree = true;
    }

    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.rendus = Rendus::default();
        self.exact = false;
        self.focus_entree = true;
    }

    /// Lit l’entrée (stricte) et dépose les quatre rendus.
    pub fn evalue(&mut self) {
        let n = self.numerique();

        let valeur = match n.lit_texte(&self.entree) {
            Ok(v) => v,
            Err(e) => {
                tracing::debug!(entree = %self.entree, erreur = %e, "lecture refusée");
                self.set_erreur(e.to_string());
                return;
            }
        };

        match self.rendus_de(valeur) {
            Ok(r) => {
                self.erreur.clear();
                self.rendus = r;
                self.exact = valeur.est_exact();
            }
            Err(e) => self.set_erreur(e.to_string()),
        }
        self.focus_entree = true;
    }

    fn rendus_de(&self, v: Nombre) -> numerique_qpur::noyau::ResultatNombre<Rendus> {
        let n = self.numerique();
        Ok(Rendus {
            repr: n.repr(v)?.to_string(),
            bin: n.bin(v)?.to_string(),
            oct: n.oct(v)?.to_string(),
            hex: n.hex(v)?.to_string(),
        })
    }

    /// Change la largeur : le générateur est ré-amorcé, les rendus recalculés.
    pub fn set_largeur(&mut self, largeur: Largeur) {
        if largeur == self.largeur {
            return;
        }
        tracing::info!(%largeur, "largeur changée");
        self.largeur = largeur;
        self.amorce();
        if !self.entree.trim().is_empty() {
            self.evalue();
        }
    }

    /// Amorce le générateur depuis le texte de graine (littéral quelconque).
    pub fn amorce(&mut self) {
        let n = self.numerique();
        match n.lit_texte(&self.graine) {
            Ok(g) => {
                self.generateur = n.graine(g);
                self.tirages.clear();
                self.erreur.clear();
            }
            Err(e) => self.set_erreur(format!("graine : {e}")),
        }
        self.focus_entree = true;
    }

    /// Un tirage, rendu en décimal, le plus récent en tête.
    pub fn tire(&mut self) {
        let t = self.generateur.tire();
        let texte = match self.numerique().repr(t) {
            Ok(s) => s.to_string(),
            Err(e) => format!("({e})"),
        };

        self.tirages.insert(0, texte);
        self.tirages.truncate(TIRAGES_MAX);
    }
}
