// src/noyau/format.rs
//
// Nombre -> texte dans une base donnée (2..=36) :
// - 0           : "0", ou "0" + préfixe + "0" ("0x0", "0b0"…)
// - ±∞          : "+inf" / "-inf"
// - cas général : [-][0p]chiffres[.fraction][marque[-]exposant]
//
// Notation scientifique quand l’ordre de grandeur dépasse le budget de chiffres
// (sig >= digits) ou quand il y a plus d’un zéro après la virgule (sig < -1).
// Les chiffres de la partie entière sont émis du poids faible au poids fort,
// puis le segment est retourné sur place.

use std::sync::Arc;

use super::arith::Numerique;
use super::canon::Nombre;
use super::erreur::{ErreurNombre, ResultatNombre};
use super::interne::interne;

/// Préfixe, base, marque d’exposant, base de l’exposant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Convention {
    prefixe: Option<u8>,
    base: u32,
    marque: u8,
    base_exp: u32,
}

impl Convention {
    pub const DECIMALE: Convention = Convention {
        prefixe: None,
        base: 10,
        marque: b'e',
        base_exp: 10,
    };
    pub const BINAIRE: Convention = Convention {
        prefixe: Some(b'b'),
        base: 2,
        marque: b'p',
        base_exp: 2,
    };
    pub const OCTALE: Convention = Convention {
        prefixe: Some(b'o'),
        base: 8,
        marque: b'p',
        base_exp: 2,
    };
    pub const HEXADECIMALE: Convention = Convention {
        prefixe: Some(b'x'),
        base: 16,
        marque: b'p',
        base_exp: 2,
    };

    /// Convention libre ; bases dans 2..=36, préfixe et marque ASCII.
    pub fn new(
        prefixe: Option<char>,
        base: u32,
        marque: char,
        base_exp: u32,
    ) -> ResultatNombre<Self> {
        if !(2..=36).contains(&base) || !(2..=36).contains(&base_exp) {
            return Err(ErreurNombre::ArgumentInvalide(format!(
                "base hors de 2..=36 (base {base}, exposant {base_exp})"
            )));
        }
        let ascii = |c: char| {
            u8::try_from(c)
                .ok()
                .filter(u8::is_ascii_graphic)
                .ok_or_else(|| ErreurNombre::ArgumentInvalide(format!("caractère non ASCII : {c:?}")))
        };

        Ok(Self {
            prefixe: prefixe.map(ascii).transpose()?,
            base,
            marque: ascii(marque)?,
            base_exp,
        })
    }

    pub fn base(&self) -> u32 {
        self.base
    }
}

/// Chiffre canonique : 0-9 puis a-z (minuscules).
pub fn chiffre_ascii(v: u64) -> u8 {
    u32::try_from(v)
        .ok()
        .and_then(|v| char::from_digit(v, 36))
        .map_or(b'?', |c| c as u8)
}

impl Numerique {
    pub fn formate(&self, n: Nombre, conv: Convention) -> ResultatNombre<Arc<str>> {
        if n.est_zero() {
            return Ok(match conv.prefixe {
                Some(c) => interne([b'0', c, b'0'].map(char::from).iter().collect::<String>()),
                None => interne("0"),
            });
        }
        if n == Nombre::INF {
            return Ok(interne("+inf"));
        }
        if n == Nombre::MOINS_INF {
            return Ok(interne("-inf"));
        }

        let base = Nombre::from(conv.base);
        let base_exp = Nombre::from(conv.base_exp);

        let mut tampon: Vec<u8> = Vec::with_capacity(24);
        let mut n = n;

        if self.cmp(n, Nombre::ZERO) < 0 {
            n = self.neg(n)?;
            tampon.push(b'-');
        }
        if let Some(c) = conv.prefixe {
            tampon.extend_from_slice(&[b'0', c]);
        }

        let mut exp = self.floor(self.log(n, Some(base_exp))?)?;
        let sig = self.floor(self.log(n, Some(base))?)?;
        let digits = self.ceil(self.div(
            Nombre::from(self.largeur().bits_precision()),
            self.log(base, Some(Nombre::from(2)))?,
        )?)?;

        let scientifique =
            self.cmp(sig, digits) >= 0 || self.cmp(sig, Nombre::from(-1)) < 0;
        tracing::trace!(?exp, ?sig, ?digits, scientifique, base = conv.base, "formatage");

        if scientifique {
            (n, exp) = self.mantisse(n, base_exp, exp)?;
        }

        let debut = tampon.len();
        self.partie_entiere(&mut tampon, n, base)?;

        let budget = digits
            .en_entier()
            .and_then(|d| usize::try_from(d).ok())
            .unwrap_or(0)
            .saturating_sub(tampon.len() - debut);
        self.partie_fraction(&mut tampon, n, base, budget)?;

        if scientifique {
            tampon.push(conv.marque);

            let mut e = exp;
            if self.cmp(e, Nombre::ZERO) < 0 {
                e = self.neg(e)?;
                tampon.push(b'-');
            }
            self.partie_entiere(&mut tampon, e, Nombre::from(10))?;
        }

        Ok(interne(tampon.iter().map(|&b| char::from(b)).collect::<String>()))
    }

    /// Ramène `n` dans [1, base_exp) : n / base_exp^exp, exposant recalé.
    ///
    /// Une puissance non normale (∞ vers MAX, 0 vers les sous-normaux) est
    /// appliquée en deux moitiés. Le log arrondi peut tomber un cran à côté.
    fn mantisse(&self, n: Nombre, base_exp: Nombre, exp: Nombre) -> ResultatNombre<(Nombre, Nombre)> {
        let p = self.pow(base_exp, exp)?;
        let mut m = if self.largeur().est_normal(p.en_flottant()) {
            self.div(n, p)?
        } else {
            tracing::trace!(?exp, "puissance hors des normaux, division en deux temps");
            let moitie = self.idiv(exp, Nombre::from(2))?;
            let reste = self.sub(exp, moitie)?;
            let m = self.div(n, self.pow(base_exp, moitie)?)?;
            self.div(m, self.pow(base_exp, reste)?)?
        };

        let mut exp = exp;
        while self.cmp(m, Nombre::UN) < 0 && !m.est_zero() {
            m = self.mul(m, base_exp)?;
            exp = self.sub(exp, Nombre::UN)?;
        }
        while self.cmp(m, base_exp) >= 0 && !m.est_infini() {
            m = self.div(m, base_exp)?;
            exp = self.add(exp, Nombre::UN)?;
        }
        Ok((m, exp))
    }

    /// Chiffres de la partie entière : poids faible d’abord, puis retournement sur place.
    fn partie_entiere(&self, tampon: &mut Vec<u8>, mut n: Nombre, base: Nombre) -> ResultatNombre<()> {
        let debut = tampon.len();

        while self.cmp(n, Nombre::ZERO) > 0 {
            let d = self.modulo(n, base)?;
            tampon.push(chiffre_ascii(self.demi_mot(d)));
            n = self.idiv(n, base)?;
        }

        tampon[debut..].reverse();
        Ok(())
    }

    /// Fraction : au plus `budget` chiffres, arrêt dès que le reste passe sous base^-budget.
    fn partie_fraction(
        &self,
        tampon: &mut Vec<u8>,
        n: Nombre,
        base: Nombre,
        budget: usize,
    ) -> ResultatNombre<()> {
        let tolerance = self.pow(base, Nombre::from(-(budget as i64)))?;
        let moins_un = Nombre::from(-1);
        let mut rang = moins_un;
        let mut n = self.modulo(n, Nombre::UN)?;

        for _ in 0..budget {
            if self.cmp(n, tolerance) <= 0 {
                break;
            }
            if rang == moins_un {
                tampon.push(b'.');
            }

            let p = self.pow(base, rang)?;
            let d = self.idiv(n, p)?;
            tampon.push(chiffre_ascii(self.demi_mot(d)));

            n = self.modulo(n, p)?;
            rang = self.sub(rang, Nombre::UN)?;
        }
        Ok(())
    }

    /// Base 10, sans préfixe, exposant `e` en base 10.
    pub fn repr(&self, n: Nombre) -> ResultatNombre<Arc<str>> {
        self.formate(n, Convention::DECIMALE)
    }

    pub fn bin(&self, n: Nombre) -> ResultatNombre<Arc<str>> {
        self.formate(n, Convention::BINAIRE)
    }

    pub fn oct(&self, n: Nombre) -> ResultatNombre<Arc<str>> {
        self.formate(n, Convention::OCTALE)
    }

    pub fn hex(&self, n: Nombre) -> ResultatNombre<Arc<str>> {
        self.formate(n, Convention::HEXADECIMALE)
    }
}
