//! Tests fuzz safe : propriétés + robustesse + déterminisme.
//!
//! But : marteler le noyau sans brûler la machine.
//! - propriétés proptest (canonicité, ordre, allers-retours, bits, graine)
//! - fuzz déterministe dont la source d’aléa est le Generateur du noyau lui-même
//! - budget temps global
//! - erreurs acceptées : Domaine (NaN) uniquement ; tout le reste est un bug
//! - tout rendu réussit et se relit dans l’écart admis

use std::time::{Duration, Instant};

use proptest::prelude::*;

use super::{
    Convention, Curseur, ErreurNombre, Generateur, Largeur, Nombre, Numerique,
};

const LARGE: Numerique = Numerique::new(Largeur::Large);

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

fn largeur() -> impl Strategy<Value = Largeur> {
    prop_oneof![Just(Largeur::Etroite), Just(Largeur::Large)]
}

/// Flottants non-NaN, infinis et zéros signés compris.
fn flottant() -> impl Strategy<Value = f64> {
    prop_oneof![
        any::<f64>().prop_filter("NaN", |f| !f.is_nan()),
        Just(0.0),
        Just(-0.0),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
        (-1_000_000i64..1_000_000).prop_map(|i| i as f64),
    ]
}

/// Flottants de toute magnitude : extrêmes, sous-normaux, log-uniformes.
fn magnitude() -> impl Strategy<Value = f64> {
    prop_oneof![
        flottant(),
        Just(f64::MAX),
        Just(-f64::MAX),
        Just(f64::MIN_POSITIVE),
        Just(f64::from(f32::MAX)),
        Just(f64::from(f32::MIN_POSITIVE)),
        (8u64..1 << 52).prop_map(f64::from_bits),
        (1.0f64..10.0, -323i32..=308, any::<bool>()).prop_map(|(m, e, neg)| {
            let x = m * 10f64.powf(f64::from(e));
            if neg { -x } else { x }
        }),
    ]
}

fn convention() -> impl Strategy<Value = Convention> {
    prop_oneof![
        Just(Convention::DECIMALE),
        Just(Convention::BINAIRE),
        Just(Convention::OCTALE),
        Just(Convention::HEXADECIMALE),
    ]
}

/// Budget de précision moins un octet, plus un chiffre de tête perdu (0.x),
/// plus le plus petit sous-normal non effacé par la troncature.
fn ecart_admis(l: Largeur, conv: Convention, x: f64) -> f64 {
    let quantum = match l {
        Largeur::Etroite => f64::from(f32::from_bits(8)),
        Largeur::Large => f64::from_bits(8),
    };
    let relatif = 2f64.powi(8 - l.bits_precision() as i32) * f64::from(conv.base());
    x.abs() * relatif + quantum
}

/// Le rendu réussit, se relit en entier, et retombe dans l’écart admis.
fn aller_retour(n: Numerique, v: Nombre, conv: Convention) {
    let texte = n
        .formate(v, conv)
        .unwrap_or_else(|e| panic!("{v:?} en base {} ({}) : {e}", conv.base(), n.largeur()));

    let mut c = Curseur::new(texte.as_bytes());
    let relu = n.lit(&mut c);
    assert!(c.est_fini(), "texte={texte} lu jusqu’à {}", c.position());
    assert!(canonique(relu), "texte={texte}");

    let (x, r) = (v.en_flottant(), relu.en_flottant());
    if x.is_infinite() {
        assert_eq!(r, x, "texte={texte}");
    } else {
        let admis = ecart_admis(n.largeur(), conv, x);
        assert!(
            (r - x).abs() <= admis,
            "{v:?} ({}) texte={texte} relu={r:e} écart admis={admis:e}",
            n.largeur()
        );
    }
}

fn canonique(n: Nombre) -> bool {
    let f = n.en_flottant();
    !f.is_nan() && (f != 0.0 || (n.est_zero() && f.to_bits() == 0))
}

/* ------------------------ Propriétés ------------------------ */

proptest! {
    #[test]
    fn prop_jamais_nan_ni_zero_negatif(f in flottant(), l in largeur()) {
        let n = Nombre::depuis_flottant(f, l).unwrap();
        prop_assert!(canonique(n), "f={f:e} => {n:?}");
    }

    #[test]
    fn prop_egalite_ssi_cmp_nul(a in flottant(), b in flottant()) {
        let x = LARGE.depuis_flottant(a).unwrap();
        let y = LARGE.depuis_flottant(b).unwrap();
        prop_assert_eq!(x == y, LARGE.cmp(x, y) == 0);
        prop_assert_eq!(LARGE.cmp(x, y), -LARGE.cmp(y, x));
    }

    #[test]
    fn prop_entier_aller_retour(i in -99_999_999_999_999i64..100_000_000_000_000) {
        let n = Nombre::from(i);
        let texte = LARGE.repr(n).unwrap();
        prop_assert_eq!(LARGE.lit_texte(&texte).unwrap(), n, "texte={}", texte);
    }

    #[test]
    fn prop_flottant_aller_retour(f in magnitude(), l in largeur(), conv in convention()) {
        let n = Numerique::new(l);
        let v = n.depuis_flottant(f).unwrap();
        aller_retour(n, v, conv);
    }

    #[test]
    fn prop_identites_bit_a_bit(a in flottant(), l in largeur()) {
        let n = Numerique::new(l);
        let x = n.depuis_flottant(a).unwrap();
        let vue = Nombre::from(n.demi_mot(x));

        prop_assert_eq!(n.not(n.not(x)), vue);
        prop_assert_eq!(n.xor(x, x), Nombre::ZERO);
        prop_assert_eq!(n.and(x, x), vue);
        prop_assert_eq!(n.or(x, x), vue);
    }

    #[test]
    fn prop_decalage_modulo_largeur(a in 0u32..=u32::MAX, k in 0u32..64, l in largeur()) {
        let n = Numerique::new(l);
        let mot = l.bits_mot();
        let x = Nombre::from(a);
        let k1 = Nombre::from(k);
        let k2 = Nombre::from(k + mot);

        prop_assert_eq!(n.shl(x, k1), n.shl(x, k2));
        prop_assert_eq!(n.shr(x, k1), n.shr(x, k2));
    }

    #[test]
    fn prop_graine_deterministe(graine in any::<u64>(), l in largeur()) {
        let a: Vec<Nombre> = Generateur::graine(graine, l).take(32).collect();
        let b: Vec<Nombre> = Generateur::graine(graine, l).take(32).collect();
        prop_assert_eq!(&a, &b);

        for t in a {
            prop_assert!(t >= Nombre::ZERO && t < Nombre::UN, "{:?}", t);
        }
    }

    #[test]
    fn prop_lecture_ne_recule_jamais(octets in proptest::collection::vec(any::<u8>(), 0..24)) {
        let mut c = Curseur::new(&octets);
        let n = LARGE.lit(&mut c);
        prop_assert!(canonique(n));
        prop_assert!(c.position() <= octets.len());
    }
}

/* ------------------------ Fuzz déterministe (Generateur) ------------------------ */

const ALPHABET: &[u8] = b"0123456789abcdefxXoObBdD.eEpP+-inf ";

/// Indice dans [0, n) tiré du générateur.
fn pick(g: &mut Generateur, n: usize) -> usize {
    ((g.tire().en_flottant() * n as f64) as usize).min(n.saturating_sub(1))
}

fn gen_texte(g: &mut Generateur) -> Vec<u8> {
    let long = pick(g, 16);
    (0..long).map(|_| ALPHABET[pick(g, ALPHABET.len())]).collect()
}

fn gen_nombre(n: Numerique, g: &mut Generateur) -> Nombre {
    let t = g.tire();
    let echelle = Nombre::from(pick(g, 40) as i64 - 20);
    let x = n
        .mul(t, n.pow(Nombre::from(10), echelle).unwrap_or(Nombre::UN))
        .unwrap_or(t);
    match pick(g, 8) {
        0 => Nombre::ZERO,
        1 => Nombre::INF,
        2 => n.neg(x).unwrap_or(x),
        3 => n.floor(x).unwrap_or(x),
        _ => x,
    }
}

fn accepte(r: Result<Nombre, ErreurNombre>) -> Option<Nombre> {
    match r {
        Ok(v) => {
            assert!(canonique(v), "résultat non canonique: {v:?}");
            Some(v)
        }
        Err(ErreurNombre::Domaine { .. }) => None,
        Err(e) => panic!("erreur inattendue: {e}"),
    }
}

#[test]
fn fuzz_lecture_textes_aleatoires() {
    let start = Instant::now();

    for l in [Largeur::Etroite, Largeur::Large] {
        let n = Numerique::new(l);
        let mut g = Generateur::graine(0xC0FFEE, Largeur::Large);

        for _ in 0..3000 {
            budget(start, Duration::from_secs(5));

            let texte = gen_texte(&mut g);
            let mut c = Curseur::new(&texte);
            let v = n.lit(&mut c);

            assert!(canonique(v), "texte={:?}", String::from_utf8_lossy(&texte));
            assert!(c.position() <= texte.len());
        }
    }
}

#[test]
fn fuzz_operations_et_rendus() {
    let start = Instant::now();

    for l in [Largeur::Etroite, Largeur::Large] {
        let n = Numerique::new(l);
        let mut g = Generateur::graine(0xBADC0DE, l);

        for _ in 0..1500 {
            budget(start, Duration::from_secs(8));

            let a = gen_nombre(n, &mut g);
            let b = gen_nombre(n, &mut g);

            let resultats = [
                accepte(n.add(a, b)),
                accepte(n.sub(a, b)),
                accepte(n.mul(a, b)),
                accepte(n.div(a, b)),
                accepte(n.idiv(a, b)),
                accepte(n.modulo(a, b)),
                accepte(n.pow(a, b)),
                accepte(n.log(a, None)),
                accepte(n.sin(a)),
                accepte(n.atan(a, Some(b))),
            ];

            for v in resultats.into_iter().flatten() {
                for conv in [
                    Convention::DECIMALE,
                    Convention::BINAIRE,
                    Convention::OCTALE,
                    Convention::HEXADECIMALE,
                ] {
                    aller_retour(n, v, conv);
                }
            }
        }
    }
}

#[test]
fn fuzz_deterministe() {
    let tirer = || {
        let mut g = Generateur::graine(2024, Largeur::Large);
        (0..200)
            .map(|_| gen_nombre(LARGE, &mut g))
            .collect::<Vec<_>>()
    };
    assert_eq!(tirer(), tirer());
}
