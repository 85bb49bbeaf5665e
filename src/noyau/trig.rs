// src/noyau/trig.rs
//
// Transcendantes : log, cos/sin/tan, acos/asin, atan (1 ou 2 arguments).
// Même contrat que l’arithmétique : vue flottante -> calcul -> re-canonicalisation.

use std::f64::consts::E;

use super::arith::Numerique;
use super::canon::Nombre;
use super::erreur::ResultatNombre;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrigFn {
    Cos,
    Sin,
    Tan,
    Acos,
    Asin,
}

impl TrigFn {
    fn nom(self) -> &'static str {
        match self {
            TrigFn::Cos => "cos",
            TrigFn::Sin => "sin",
            TrigFn::Tan => "tan",
            TrigFn::Acos => "acos",
            TrigFn::Asin => "asin",
        }
    }

    fn applique(self, x: f64) -> f64 {
        match self {
            TrigFn::Cos => x.cos(),
            TrigFn::Sin => x.sin(),
            TrigFn::Tan => x.tan(),
            TrigFn::Acos => x.acos(),
            TrigFn::Asin => x.asin(),
        }
    }
}

impl Numerique {
    /// Constante e, stockée comme tout autre Nombre (tronquée).
    pub fn e(&self) -> Nombre {
        Nombre::canonise(E, self.largeur())
    }

    /// ln(a) / ln(b) ; base e par défaut.
    pub fn log(&self, a: Nombre, b: Option<Nombre>) -> ResultatNombre<Nombre> {
        let b = b.unwrap_or_else(|| self.e());
        let la = self.largeur().arrondit(self.vue(a).ln());
        let lb = self.largeur().arrondit(self.vue(b).ln());
        self.resultat("log", la / lb)
    }

    pub fn trig(&self, f: TrigFn, a: Nombre) -> ResultatNombre<Nombre> {
        self.resultat(f.nom(), f.applique(self.vue(a)))
    }

    pub fn cos(&self, a: Nombre) -> ResultatNombre<Nombre> {
        self.trig(TrigFn::Cos, a)
    }

    pub fn sin(&self, a: Nombre) -> ResultatNombre<Nombre> {
        self.trig(TrigFn::Sin, a)
    }

    pub fn tan(&self, a: Nombre) -> ResultatNombre<Nombre> {
        self.trig(TrigFn::Tan, a)
    }

    pub fn acos(&self, a: Nombre) -> ResultatNombre<Nombre> {
        self.trig(TrigFn::Acos, a)
    }

    pub fn asin(&self, a: Nombre) -> ResultatNombre<Nombre> {
        self.trig(TrigFn::Asin, a)
    }

    /// atan(a) si `b` absent, sinon atan2(a, b).
    pub fn atan(&self, a: Nombre, b: Option<Nombre>) -> ResultatNombre<Nombre> {
        match b {
            None => self.resultat("atan", self.vue(a).atan()),
            Some(b) => self.resultat("atan", self.vue(a).atan2(self.vue(b))),
        }
    }
}
