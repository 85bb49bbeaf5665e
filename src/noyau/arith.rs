//! Moteur arithmétique.
//!
//! Chaque opérateur passe par la vue flottante, calcule dans la précision de la
//! largeur configurée, puis re-canonicalise le résultat (NaN => erreur Domaine,
//! zéro => zéro exact). Seule exception : la négation du zéro exact.

use super::canon::Nombre;
use super::config::Largeur;
use super::erreur::{ErreurNombre, ResultatNombre};

/// Moteur numérique : une largeur, aucun autre état.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Numerique {
    largeur: Largeur,
}

impl Numerique {
    pub const fn new(largeur: Largeur) -> Self {
        Self { largeur }
    }

    pub const fn largeur(&self) -> Largeur {
        self.largeur
    }

    /// Canonicaliseur (fromFloat) pour cette largeur.
    pub fn depuis_flottant(&self, f: f64) -> ResultatNombre<Nombre> {
        Nombre::depuis_flottant(f, self.largeur)
    }

    /// Résultat flottant -> Nombre, NaN signalé au nom de l’opération.
    pub(crate) fn resultat(&self, operation: &'static str, f: f64) -> ResultatNombre<Nombre> {
        let f = self.largeur.arrondit(f);
        if f.is_nan() {
            return Err(ErreurNombre::domaine(operation));
        }
        Ok(Nombre::canonise(f, self.largeur))
    }

    /// Opérande dans la précision de calcul.
    pub(crate) fn vue(&self, n: Nombre) -> f64 {
        self.largeur.arrondit(n.en_flottant())
    }

    /* ------------------------ comparaison ------------------------ */

    /// -1 / 0 / +1 selon l’ordre réel (total : aucun NaN possible).
    ///
    /// Comparaison exacte des valeurs stockées, sans passer par la vue
    /// flottante : en étroit, deux Nombre distincts qui s’arrondissent au même
    /// f32 restent distincts. `cmp(a, b) == 0` si et seulement si `a == b`.
    pub fn cmp(&self, a: Nombre, b: Nombre) -> i8 {
        a.cmp(&b) as i8
    }

    /* ------------------------ unaires ------------------------ */

    pub fn neg(&self, a: Nombre) -> ResultatNombre<Nombre> {
        if a.est_zero() {
            return Ok(a);
        }
        self.resultat("neg", -self.vue(a))
    }

    pub fn abs(&self, a: Nombre) -> ResultatNombre<Nombre> {
        if a.est_zero() {
            return Ok(a);
        }
        self.resultat("abs", self.vue(a).abs())
    }

    pub fn floor(&self, a: Nombre) -> ResultatNombre<Nombre> {
        self.resultat("floor", self.vue(a).floor())
    }

    pub fn ceil(&self, a: Nombre) -> ResultatNombre<Nombre> {
        self.resultat("ceil", self.vue(a).ceil())
    }

    /* ------------------------ binaires ------------------------ */

    pub fn add(&self, a: Nombre, b: Nombre) -> ResultatNombre<Nombre> {
        self.resultat("add", self.vue(a) + self.vue(b))
    }

    pub fn sub(&self, a: Nombre, b: Nombre) -> ResultatNombre<Nombre> {
        self.resultat("sub", self.vue(a) - self.vue(b))
    }

    pub fn mul(&self, a: Nombre, b: Nombre) -> ResultatNombre<Nombre> {
        self.resultat("mul", self.vue(a) * self.vue(b))
    }

    pub fn div(&self, a: Nombre, b: Nombre) -> ResultatNombre<Nombre> {
        self.resultat("div", self.vue(a) / self.vue(b))
    }

    /// floor(a / b), le quotient étant d’abord arrondi à la précision de calcul.
    pub fn idiv(&self, a: Nombre, b: Nombre) -> ResultatNombre<Nombre> {
        let q = self.largeur.arrondit(self.vue(a) / self.vue(b));
        self.resultat("idiv", q.floor())
    }

    /// fmod, puis correction pour que le reste ait le signe du diviseur.
    pub fn modulo(&self, a: Nombre, b: Nombre) -> ResultatNombre<Nombre> {
        let base = self.vue(b);
        let mut m = self.vue(a) % base;

        if m * base < 0.0 {
            m = self.largeur.arrondit(m + base);
        }

        self.resultat("mod", m)
    }

    pub fn pow(&self, a: Nombre, b: Nombre) -> ResultatNombre<Nombre> {
        self.resultat("pow", self.vue(a).powf(self.vue(b)))
    }
}
