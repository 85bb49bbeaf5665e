//! Générateur pseudo-aléatoire à graine (xorshift128+, mots = demi-mots).
//!
//! L’état tient en quatre demi-mots `[x_hi, x_lo, y_hi, y_lo]` (emplacements 0..=3).
//! Un tirage lit les quatre mots, calcule le pas suivant et la sortie dans des
//! variables locales, puis publie l’état : jamais d’état avancé sans sa sortie.

use super::arith::Numerique;
use super::canon::Nombre;
use super::config::Largeur;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generateur {
    mots: [u64; 4],
    largeur: Largeur,
}

impl Generateur {
    /// Graine tronquée au mot natif, répartie en `[hi, lo, lo, hi]`.
    pub fn graine(graine: u64, largeur: Largeur) -> Self {
        let demi = largeur.bits_demi_mot();
        let masque = largeur.masque_demi_mot();
        let m = graine & largeur.masque_mot();

        let hi = m >> demi;
        let lo = m & masque;

        tracing::trace!(graine = m, %largeur, "générateur amorcé");
        Self {
            mots: [hi, lo, lo, hi],
            largeur,
        }
    }

    /// Reprise d’un état sauvegardé par l’hôte (chaque mot réduit au demi-mot).
    pub fn depuis_etat(mots: [u64; 4], largeur: Largeur) -> Self {
        let masque = largeur.masque_demi_mot();
        Self {
            mots: mots.map(|m| m & masque),
            largeur,
        }
    }

    /// Les quatre emplacements 0..=3.
    pub fn etat(&self) -> [u64; 4] {
        self.mots
    }

    pub fn largeur(&self) -> Largeur {
        self.largeur
    }

    /// Un tirage dans [0, 1).
    pub fn tire(&mut self) -> Nombre {
        let l = self.largeur;
        let demi = l.bits_demi_mot();
        let masque_demi = l.masque_demi_mot();
        let masque = l.masque_mot();
        let (s1, s2, s3) = l.decalages();

        let [x_hi, x_lo, y_hi, y_lo] = self.mots;
        let mut x = (x_hi << demi) | x_lo;
        let y = (y_hi << demi) | y_lo;

        x ^= (x << s1) & masque;
        x ^= x >> s2;
        x ^= y ^ (y >> s3);

        let sortie = vers_unite(x.wrapping_add(y) & masque, l);

        self.mots = [y >> demi, y & masque_demi, x >> demi, x & masque_demi];
        sortie
    }
}

/// somme / 2^mot, en gardant seulement les bits de tête : jamais 1.0 par arrondi.
fn vers_unite(somme: u64, l: Largeur) -> Nombre {
    let mantisse = l.bits_mantisse();
    let tete = somme >> (l.bits_mot() - mantisse);
    Nombre::canonise(tete as f64 / 2f64.powi(mantisse as i32), l)
}

impl Iterator for Generateur {
    type Item = Nombre;

    fn next(&mut self) -> Option<Nombre> {
        Some(self.tire())
    }
}

impl Numerique {
    /// Graine depuis un Nombre : valeur absolue entière réduite au mot natif.
    pub fn graine(&self, n: Nombre) -> Generateur {
        let l = self.largeur();
        let m = match n.en_entier() {
            Some(i) => (i.unsigned_abs() & u128::from(l.masque_mot())) as u64,
            None => {
                let f = n.en_flottant();
                if f.is_finite() {
                    let module = 2f64.powi(l.bits_mot() as i32);
                    f.abs().trunc().rem_euclid(module) as u64
                } else {
                    0
                }
            }
        };
        Generateur::graine(m, l)
    }
}
