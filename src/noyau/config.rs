// src/noyau/config.rs
//
// Largeur de mot (configuration fixée au démarrage) :
// - Etroite : classe 32 bits (calcul en f32, demi-mot 16 bits)
// - Large   : classe 64 bits (calcul en f64, demi-mot 32 bits)
//
// Une simple valeur, passée explicitement : les deux largeurs peuvent
// cohabiter dans le même processus (tests côte à côte).

use std::fmt;
use std::str::FromStr;

use super::erreur::ErreurNombre;

/// Variable d’environnement lue (une fois) par `Largeur::depuis_env`.
pub const VAR_LARGEUR: &str = "NUMERIQUE_LARGEUR";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Largeur {
    /// Classe 32 bits.
    Etroite,
    /// Classe 64 bits.
    #[default]
    Large,
}

impl Largeur {
    /// Bits binaires de précision garantis (mantisse moins les 3 bits d’étiquette).
    pub const fn bits_precision(self) -> u32 {
        match self {
            Largeur::Etroite => 23 - 3,
            Largeur::Large => 52 - 3,
        }
    }

    /// Largeur du mot natif.
    pub const fn bits_mot(self) -> u32 {
        match self {
            Largeur::Etroite => 32,
            Largeur::Large => 64,
        }
    }

    /// Demi-mot : domaine des opérations bit à bit et des mots du générateur.
    pub const fn bits_demi_mot(self) -> u32 {
        self.bits_mot() / 2
    }

    /// Bits de mantisse (bit implicite compris) du flottant de calcul.
    pub const fn bits_mantisse(self) -> u32 {
        match self {
            Largeur::Etroite => f32::MANTISSA_DIGITS,
            Largeur::Large => f64::MANTISSA_DIGITS,
        }
    }

    /// Constantes xorshift128+ accordées à la largeur du mot.
    pub const fn decalages(self) -> (u32, u32, u32) {
        match self {
            Largeur::Etroite => (15, 18, 11),
            Largeur::Large => (23, 17, 26),
        }
    }

    pub const fn masque_mot(self) -> u64 {
        match self {
            Largeur::Etroite => u32::MAX as u64,
            Largeur::Large => u64::MAX,
        }
    }

    pub const fn masque_demi_mot(self) -> u64 {
        (1u64 << self.bits_demi_mot()) - 1
    }

    /// Arrondi au flottant de calcul (f32 en étroit, identité en large).
    pub fn arrondit(self, f: f64) -> f64 {
        match self {
            Largeur::Etroite => f64::from(f as f32),
            Largeur::Large => f,
        }
    }

    /// Troncature au budget de précision : on efface les 3 bits bas de la mantisse.
    ///
    /// NaN et infinis traversent inchangés (mantisse nulle pour ±∞).
    pub fn tronque(self, f: f64) -> f64 {
        match self {
            Largeur::Etroite => {
                let g = f as f32;
                if g.is_nan() {
                    return f;
                }
                f64::from(f32::from_bits(g.to_bits() & !7))
            }
            Largeur::Large => {
                if f.is_nan() {
                    return f;
                }
                f64::from_bits(f.to_bits() & !7)
            }
        }
    }

    /// Flottant normal dans le flottant de calcul : ni nul, ni sous-normal, ni infini.
    pub fn est_normal(self, f: f64) -> bool {
        match self {
            Largeur::Etroite => (f as f32).is_normal(),
            Largeur::Large => f.is_normal(),
        }
    }

    /// Lecture de `NUMERIQUE_LARGEUR` ; absente ou invalide => défaut (Large).
    pub fn depuis_env() -> Self {
        match std::env::var(VAR_LARGEUR) {
            Ok(v) => v.parse().unwrap_or_else(|e: ErreurNombre| {
                tracing::warn!(valeur = %v, erreur = %e, "largeur ignorée, défaut conservé");
                Largeur::default()
            }),
            Err(_) => Largeur::default(),
        }
    }
}

impl FromStr for Largeur {
    type Err = ErreurNombre;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "32" | "etroite" | "étroite" => Ok(Largeur::Etroite),
            "64" | "large" => Ok(Largeur::Large),
            autre => Err(ErreurNombre::ArgumentInvalide(format!(
                "largeur inconnue : {autre:?} (attendu 32 ou 64)"
            ))),
        }
    }
}

impl fmt::Display for Largeur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Largeur::Etroite => f.write_str("32 bits"),
            Largeur::Large => f.write_str("64 bits"),
        }
    }
}
