// src/noyau/canon.rs
//
// Canonicalisation forte (une seule représentation par valeur) :
// - jamais de NaN (refusé à la construction : ErreurNombre::Domaine)
// - jamais de zéro négatif (-0 => 0 exact)
// - troncature au budget de précision (3 bits bas de la mantisse effacés)
// - tout flottant entier dans le domaine exact [-2^63, 2^64) devient Entier
//
// Conséquence : l’égalité structurelle (bits) coïncide avec l’égalité mathématique,
// et l’ordre total (Ord) est cohérent avec elle.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use num_traits::ToPrimitive;

use super::config::Largeur;
use super::erreur::{ErreurNombre, ResultatNombre};

/// -2^63 : plus petit entier exact.
const MIN_EXACT: f64 = -9_223_372_036_854_775_808.0;
/// 2^64 : borne (exclue) du domaine exact.
const MAX_EXACT: f64 = 18_446_744_073_709_551_616.0;

#[derive(Clone, Copy)]
enum Repr {
    Entier(i128),
    Flottant(f64),
}

/// Valeur numérique immuable, toujours canonique.
#[derive(Clone, Copy)]
pub struct Nombre(Repr);

impl Nombre {
    pub const ZERO: Nombre = Nombre(Repr::Entier(0));
    pub const UN: Nombre = Nombre(Repr::Entier(1));
    pub const INF: Nombre = Nombre(Repr::Flottant(f64::INFINITY));
    pub const MOINS_INF: Nombre = Nombre(Repr::Flottant(f64::NEG_INFINITY));

    /// Conversion depuis un flottant : NaN refusé, -0 => 0, troncature à la précision.
    pub fn depuis_flottant(f: f64, largeur: Largeur) -> ResultatNombre<Nombre> {
        if f.is_nan() {
            return Err(ErreurNombre::domaine("depuis_flottant"));
        }
        Ok(Self::canonise(f, largeur))
    }

    /// Forme canonique d’un flottant déjà garanti non-NaN.
    pub(crate) fn canonise(f: f64, largeur: Largeur) -> Nombre {
        debug_assert!(!f.is_nan(), "canonise: NaN");

        let f = largeur.tronque(f);
        if f == 0.0 {
            return Nombre::ZERO;
        }

        if f.is_finite() && f.fract() == 0.0 && (MIN_EXACT..MAX_EXACT).contains(&f) {
            if let Some(i) = f.to_i128() {
                return Nombre(Repr::Entier(i));
            }
        }

        Nombre(Repr::Flottant(f))
    }

    pub const fn depuis_entier(i: i64) -> Nombre {
        Nombre(Repr::Entier(i as i128))
    }

    pub const fn depuis_non_signe(u: u64) -> Nombre {
        Nombre(Repr::Entier(u as i128))
    }

    /// Texte d’exactement un caractère -> son point de code (domaine exact).
    pub fn depuis_caractere(texte: &str) -> ResultatNombre<Nombre> {
        let mut it = texte.chars();
        match (it.next(), it.next()) {
            (Some(c), None) => Ok(Nombre(Repr::Entier(i128::from(u32::from(c))))),
            _ => Err(ErreurNombre::ArgumentInvalide(format!(
                "texte de longueur {} (attendu 1)",
                texte.chars().count()
            ))),
        }
    }

    /// Vue flottante (utilisée par toute l’arithmétique).
    pub fn en_flottant(self) -> f64 {
        match self.0 {
            Repr::Entier(i) => i as f64,
            Repr::Flottant(f) => f,
        }
    }

    /// Valeur exacte si le nombre est dans le domaine entier.
    pub fn en_entier(self) -> Option<i128> {
        match self.0 {
            Repr::Entier(i) => Some(i),
            Repr::Flottant(_) => None,
        }
    }

    pub fn est_exact(self) -> bool {
        matches!(self.0, Repr::Entier(_))
    }

    pub fn est_zero(self) -> bool {
        matches!(self.0, Repr::Entier(0))
    }

    pub fn est_infini(self) -> bool {
        matches!(self.0, Repr::Flottant(f) if f.is_infinite())
    }
}

impl Default for Nombre {
    fn default() -> Self {
        Nombre::ZERO
    }
}

/* ------------------------ conversions directes (domaine exact) ------------------------ */

impl From<i64> for Nombre {
    fn from(i: i64) -> Self {
        Nombre::depuis_entier(i)
    }
}

impl From<u64> for Nombre {
    fn from(u: u64) -> Self {
        Nombre::depuis_non_signe(u)
    }
}

impl From<i32> for Nombre {
    fn from(i: i32) -> Self {
        Nombre::depuis_entier(i64::from(i))
    }
}

impl From<u32> for Nombre {
    fn from(u: u32) -> Self {
        Nombre::depuis_non_signe(u64::from(u))
    }
}

/* ------------------------ égalité structurelle + ordre total ------------------------ */

impl PartialEq for Nombre {
    fn eq(&self, other: &Self) -> bool {
        match (self.0, other.0) {
            (Repr::Entier(a), Repr::Entier(b)) => a == b,
            (Repr::Flottant(a), Repr::Flottant(b)) => a.to_bits() == b.to_bits(),
            _ => false,
        }
    }
}

impl Eq for Nombre {}

impl Hash for Nombre {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.0 {
            Repr::Entier(i) => {
                0u8.hash(state);
                i.hash(state);
            }
            Repr::Flottant(f) => {
                1u8.hash(state);
                f.to_bits().hash(state);
            }
        }
    }
}

/// Entier exact face à un flottant canonique (non entier, infini, ou hors domaine exact).
fn cmp_entier_flottant(i: i128, f: f64) -> Ordering {
    if f >= MAX_EXACT {
        Ordering::Less
    } else if f < MIN_EXACT {
        Ordering::Greater
    } else {
        // ici f n’est pas entier, donc |f| < 2^52 : l’arrondi de i ne peut pas inverser l’ordre
        (i as f64).total_cmp(&f)
    }
}

impl Ord for Nombre {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0, other.0) {
            (Repr::Entier(a), Repr::Entier(b)) => a.cmp(&b),
            // ni NaN ni -0 : total_cmp est l’ordre réel
            (Repr::Flottant(a), Repr::Flottant(b)) => a.total_cmp(&b),
            (Repr::Entier(i), Repr::Flottant(f)) => cmp_entier_flottant(i, f),
            (Repr::Flottant(f), Repr::Entier(i)) => cmp_entier_flottant(i, f).reverse(),
        }
    }
}

impl PartialOrd for Nombre {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Nombre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Repr::Entier(i) => write!(f, "Entier({i})"),
            Repr::Flottant(x) => write!(f, "Flottant({x:?})"),
        }
    }
}
