// src/noyau/bits.rs
//
// Opérations bit à bit sur la vue « demi-mot » :
// - partie entière de la valeur absolue, réduite modulo 2^demi (perte voulue)
// - not/and/or/xor : résultat masqué au demi-mot
// - shl/shr : décalage dans le mot natif, compte pris modulo la largeur du mot
//
// Le résultat revient toujours dans le domaine exact (Entier).

use num_traits::ToPrimitive;

use super::arith::Numerique;
use super::canon::Nombre;

impl Numerique {
    /// Vue non signée demi-mot d’un Nombre (±∞ => 0).
    pub fn demi_mot(&self, n: Nombre) -> u64 {
        let masque = self.largeur().masque_demi_mot();

        if let Some(i) = n.en_entier() {
            return (i.unsigned_abs() & u128::from(masque)) as u64;
        }

        let f = n.en_flottant();
        if !f.is_finite() {
            return 0;
        }

        let module = (masque as f64) + 1.0;
        f.abs().trunc().rem_euclid(module).to_u64().unwrap_or(0) & masque
    }

    pub fn not(&self, a: Nombre) -> Nombre {
        let masque = self.largeur().masque_demi_mot();
        Nombre::from(!self.demi_mot(a) & masque)
    }

    pub fn and(&self, a: Nombre, b: Nombre) -> Nombre {
        Nombre::from(self.demi_mot(a) & self.demi_mot(b))
    }

    pub fn or(&self, a: Nombre, b: Nombre) -> Nombre {
        Nombre::from(self.demi_mot(a) | self.demi_mot(b))
    }

    pub fn xor(&self, a: Nombre, b: Nombre) -> Nombre {
        Nombre::from(self.demi_mot(a) ^ self.demi_mot(b))
    }

    /// Compte de décalage ramené dans [0, bits_mot).
    fn compte(&self, b: Nombre) -> u32 {
        (self.demi_mot(b) % u64::from(self.largeur().bits_mot())) as u32
    }

    pub fn shl(&self, a: Nombre, b: Nombre) -> Nombre {
        let masque = self.largeur().masque_mot();
        Nombre::from((self.demi_mot(a) << self.compte(b)) & masque)
    }

    pub fn shr(&self, a: Nombre, b: Nombre) -> Nombre {
        Nombre::from(self.demi_mot(a) >> self.compte(b))
    }
}
