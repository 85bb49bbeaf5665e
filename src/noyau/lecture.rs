// src/noyau/lecture.rs
//
// Lecture d’un littéral numérique depuis des octets :
//
//   littéral := signe? ( "inf" | nombre )
//   nombre   := prefixe? chiffres ('.' chiffres)? exposant?
//   prefixe  := '0' ('b'|'B'|'o'|'O'|'d'|'D'|'x'|'X')
//   exposant := ('e'|'E'|'p'|'P') signe? chiffres-décimaux
//
// Jamais d’erreur : on s’arrête au premier octet qui ne colle pas, le curseur
// reste juste après le dernier octet consommé, l’appelant décide du reste.

use super::arith::Numerique;
use super::canon::Nombre;
use super::erreur::{ErreurNombre, ResultatNombre};

/* ------------------------ Curseur ------------------------ */

/// Position courante dans une suite d’octets immuable.
#[derive(Clone, Copy, Debug)]
pub struct Curseur<'a> {
    octets: &'a [u8],
    pos: usize,
}

impl<'a> Curseur<'a> {
    pub fn new(octets: &'a [u8]) -> Self {
        Self { octets, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Octets non consommés.
    pub fn reste(&self) -> &'a [u8] {
        &self.octets[self.pos..]
    }

    pub fn est_fini(&self) -> bool {
        self.pos >= self.octets.len()
    }

    fn courant(&self) -> Option<u8> {
        self.octets.get(self.pos).copied()
    }

    /// Au moins `n` octets restants (regard en avant de longueur fixe).
    fn reste_au_moins(&self, n: usize) -> bool {
        self.octets.len() - self.pos >= n
    }

    fn avance(&mut self, n: usize) {
        self.pos += n;
    }

    /// Consomme un '+' ou un '-' éventuel ; renvoie le signe.
    fn signe(&mut self) -> f64 {
        match self.courant() {
            Some(b'+') => {
                self.avance(1);
                1.0
            }
            Some(b'-') => {
                self.avance(1);
                -1.0
            }
            _ => 1.0,
        }
    }
}

/// Valeur d’un chiffre ASCII, lettres insensibles à la casse ; u32::MAX sinon.
pub fn valeur_chiffre(c: u8) -> u32 {
    match c {
        b'0'..=b'9' => u32::from(c - b'0'),
        b'a'..=b'z' => u32::from(c - b'a') + 10,
        b'A'..=b'Z' => u32::from(c - b'A') + 10,
        _ => u32::MAX,
    }
}

/* ------------------------ Lecture ------------------------ */

impl Numerique {
    /// Consomme le plus long littéral possible à la position du curseur.
    pub fn lit(&self, curseur: &mut Curseur<'_>) -> Nombre {
        let l = self.largeur();
        let signe = curseur.signe();

        if curseur.reste_au_moins(3) && curseur.reste().starts_with(b"inf") {
            curseur.avance(3);
            return if signe < 0.0 { Nombre::MOINS_INF } else { Nombre::INF };
        }

        let mut base: u32 = 10;
        if curseur.reste_au_moins(3) && curseur.courant() == Some(b'0') {
            let choix = match curseur.reste()[1] {
                b'b' | b'B' => Some(2),
                b'o' | b'O' => Some(8),
                b'd' | b'D' => Some(10),
                b'x' | b'X' => Some(16),
                _ => None,
            };
            if let Some(b) = choix {
                base = b;
                curseur.avance(2);
            }
        }
        let b = f64::from(base);

        // chaque pas est tronqué comme un résultat d’opération (précision de calcul + budget)
        let t = |x: f64| l.tronque(x);

        // mantisse : n = n*base + chiffre
        let mut n = 0.0f64;
        while let Some(d) = curseur.courant().map(valeur_chiffre).filter(|&d| d < base) {
            n = t(t(n * b) + f64::from(d));
            curseur.avance(1);
        }

        if curseur.courant() == Some(b'.') {
            curseur.avance(1);
            let mut echelle = 1.0f64;

            while let Some(d) = curseur.courant().map(valeur_chiffre).filter(|&d| d < base) {
                echelle = t(echelle * b);
                n = t(n + t(f64::from(d) / echelle));
                curseur.avance(1);
            }
        }

        if let Some(marque) = curseur.courant().filter(|c| b"eEpP".contains(c)) {
            let base_exp = if marque == b'e' || marque == b'E' { 10.0 } else { 2.0 };
            curseur.avance(1);
            let signe_exp = curseur.signe();

            let mut exp = 0.0f64;
            while let Some(d) = curseur.courant().map(valeur_chiffre).filter(|&d| d < 10) {
                exp = t(t(exp * 10.0) + f64::from(d));
                curseur.avance(1);
            }

            // mantisse infinie, facteur nul : le dépassement l’emporte
            let echelonne = |x: f64, f: f64| {
                let p = t(x * f);
                if p.is_nan() { if x == 0.0 { 0.0 } else { x } } else { p }
            };

            let e = signe_exp * exp;
            let facteur = t(f64::powf(base_exp, e));
            n = if l.est_normal(facteur) {
                echelonne(n, facteur)
            } else {
                // 10^-320 ou 2^1071 hors des normaux : deux moitiés
                let moitie = (e / 2.0).trunc();
                let n = echelonne(n, t(f64::powf(base_exp, moitie)));
                echelonne(n, t(f64::powf(base_exp, e - moitie)))
            };
        }

        Nombre::canonise(signe * n, l)
    }

    /// Lecture stricte d’un texte complet : tout doit être consommé.
    pub fn lit_texte(&self, texte: &str) -> ResultatNombre<Nombre> {
        let t = texte.trim();
        if t.is_empty() {
            return Err(ErreurNombre::ArgumentInvalide("texte vide".into()));
        }

        let mut c = Curseur::new(t.as_bytes());
        let n = self.lit(&mut c);

        if !c.est_fini() {
            return Err(ErreurNombre::ArgumentInvalide(format!(
                "caractère inattendu à la position {} : {:?}",
                c.position(),
                String::from_utf8_lossy(c.reste())
            )));
        }
        Ok(n)
    }
}
