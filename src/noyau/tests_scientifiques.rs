//! Tests scientifiques (campagne) : scénarios + oracles exacts.
//!
//! But : vérifier le noyau de bout en bout, dans les deux largeurs quand c’est pertinent.
//! - scénarios fixes (lecture, modulo, rendu hex, graine)
//! - oracle num-bigint : rendu des entiers en base 2/8/10/16
//! - oracle num-rational : lecture des fractions décimales
//! - budget temps global, comme partout ailleurs

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Signed;
use pretty_assertions::assert_eq;
use rstest::rstest;

use super::{Convention, Curseur, Generateur, Largeur, Nombre, Numerique};

const LARGE: Numerique = Numerique::new(Largeur::Large);

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

fn lit_ok(n: Numerique, texte: &str) -> Nombre {
    n.lit_texte(texte)
        .unwrap_or_else(|e| panic!("texte={texte:?} err={e}"))
}

/* ------------------------ Scénarios (deux largeurs) ------------------------ */

#[rstest]
#[case("0x1A", 26)]
#[case("-3.5e2", -350)]
#[case("0b1111", 15)]
#[case("0o777", 511)]
#[case("0d42", 42)]
#[case("+7", 7)]
#[case("1p10", 1024)]
#[case("0x10P-4", 1)]
fn sci_lecture_entiers(
    #[case] texte: &str,
    #[case] attendu: i64,
    #[values(Largeur::Etroite, Largeur::Large)] largeur: Largeur,
) {
    let n = Numerique::new(largeur);
    let v = lit_ok(n, texte);
    assert_eq!(v, Nombre::from(attendu), "texte={texte:?} ({largeur})");
    assert!(v.est_exact());
}

#[rstest]
fn sci_modulo_signe_du_diviseur(#[values(Largeur::Etroite, Largeur::Large)] largeur: Largeur) {
    let n = Numerique::new(largeur);
    assert_eq!(n.modulo(Nombre::from(-7), Nombre::from(3)).unwrap(), Nombre::from(2));
}

#[rstest]
#[case(255, "0xff", "0b11111111", "0o377", "255")]
#[case(-42, "-0x2a", "-0b101010", "-0o52", "-42")]
#[case(0, "0x0", "0b0", "0o0", "0")]
fn sci_rendus_entiers(
    #[case] v: i64,
    #[case] hex: &str,
    #[case] bin: &str,
    #[case] oct: &str,
    #[case] dec: &str,
    #[values(Largeur::Etroite, Largeur::Large)] largeur: Largeur,
) {
    let n = Numerique::new(largeur);
    let x = Nombre::from(v);
    assert_eq!(&*n.hex(x).unwrap(), hex);
    assert_eq!(&*n.bin(x).unwrap(), bin);
    assert_eq!(&*n.oct(x).unwrap(), oct);
    assert_eq!(&*n.repr(x).unwrap(), dec);
}

#[test]
fn sci_repr_zero_un_reparse() {
    let x = LARGE.depuis_flottant(0.1).unwrap();
    let texte = LARGE.repr(x).unwrap();
    assert_eq!(&*texte, "0.1");

    let relu = lit_ok(LARGE, &texte).en_flottant();
    assert!((relu - 0.1).abs() <= 0.1 * 2f64.powi(-45), "relu={relu}");
}

#[rstest]
fn sci_graine_1_deux_tirages(#[values(Largeur::Etroite, Largeur::Large)] largeur: Largeur) {
    let n = Numerique::new(largeur);
    let mut g = n.graine(Nombre::UN);

    let a = g.tire();
    let b = g.tire();
    for t in [a, b] {
        assert!(t >= Nombre::ZERO && t < Nombre::UN, "{t:?} ({largeur})");
    }
    assert_ne!(a, b);
}

#[test]
fn sci_zero_jamais_scientifique() {
    for conv in [
        Convention::DECIMALE,
        Convention::BINAIRE,
        Convention::OCTALE,
        Convention::HEXADECIMALE,
    ] {
        let t = LARGE.formate(Nombre::ZERO, conv).unwrap();
        assert!(!t.contains('e') && !t.contains('p'), "{t}");
    }
}

#[test]
fn sci_infinis_aller_retour() {
    for x in [Nombre::INF, Nombre::MOINS_INF] {
        let t = LARGE.hex(x).unwrap();
        assert_eq!(lit_ok(LARGE, &t), x);
    }
}

#[test]
fn sci_curseur_laisse_le_reste_a_l_appelant() {
    let mut c = Curseur::new(b"0x1f+2");
    assert_eq!(LARGE.lit(&mut c), Nombre::from(31));
    assert_eq!(c.reste(), b"+2");
    assert_eq!(LARGE.lit(&mut c), Nombre::from(2));
    assert!(c.est_fini());
}

#[test]
fn sci_caractere_unique() {
    assert_eq!(Nombre::depuis_caractere("A").unwrap(), Nombre::from(65));
    assert_eq!(
        Nombre::depuis_caractere("AB").unwrap_err().code(),
        "invalid argument"
    );
}

/* ------------------------ Oracle num-bigint : rendu des entiers ------------------------ */

fn prefixe(conv: Convention) -> &'static str {
    match conv.base() {
        2 => "0b",
        8 => "0o",
        16 => "0x",
        _ => "",
    }
}

#[rstest]
fn sci_oracle_rendu_entier(
    #[values(
        Convention::DECIMALE,
        Convention::BINAIRE,
        Convention::OCTALE,
        Convention::HEXADECIMALE
    )]
    conv: Convention,
) {
    let start = Instant::now();
    let mut g = Generateur::graine(0x5EED, Largeur::Large);

    for _ in 0..400 {
        budget(start, Duration::from_secs(5));

        // entiers dans [0, 2^40) : sous le budget de chiffres de toutes les bases
        let t = g.tire().en_flottant();
        let mut v = (t * 2f64.powi(40)) as i64;
        if g.tire() < LARGE.depuis_flottant(0.5).unwrap() {
            v = -v;
        }

        let obtenu = LARGE.formate(Nombre::from(v), conv).unwrap();

        let b = BigInt::from(v);
        let attendu = match (v, prefixe(conv)) {
            (0, "") => "0".to_string(),
            (0, p) => format!("{p}0"),
            (v, p) if v < 0 => format!("-{p}{}", (-b).to_str_radix(conv.base())),
            (_, p) => format!("{p}{}", b.to_str_radix(conv.base())),
        };

        assert_eq!(&*obtenu, attendu, "v={v}");
    }
}

/* ------------------------ Oracle num-rational : fractions décimales ------------------------ */

#[test]
fn sci_oracle_lecture_fraction_decimale() {
    let start = Instant::now();
    let mut g = Generateur::graine(0xF00D, Largeur::Large);
    let tolerance = BigRational::new(BigInt::from(1), BigInt::from(1u64 << 40));

    for _ in 0..400 {
        budget(start, Duration::from_secs(5));

        let ip = (g.tire().en_flottant() * 1e6) as u64;
        let fp = (g.tire().en_flottant() * 1e6) as u64;
        let texte = format!("{ip}.{fp:06}");

        let obtenu = lit_ok(LARGE, &texte).en_flottant();

        let exact = BigRational::new(
            BigInt::from(ip * 1_000_000 + fp),
            BigInt::from(1_000_000u64),
        );
        if exact == BigRational::from_integer(BigInt::from(0)) {
            assert_eq!(obtenu, 0.0);
            continue;
        }

        let approx = BigRational::from_float(obtenu)
            .unwrap_or_else(|| panic!("texte={texte:?} relu non fini"));
        let ecart = ((approx - &exact) / &exact).abs();
        assert!(ecart <= tolerance, "texte={texte:?} relu={obtenu}");
    }
}

/* ------------------------ Largeur étroite : précision réduite ------------------------ */

#[test]
fn sci_etroite_tronque_comme_un_f32() {
    let e = Numerique::new(Largeur::Etroite);
    let x = lit_ok(e, "0.1").en_flottant();

    // mantisse f32, trois bits bas effacés
    let bits = (x as f32).to_bits() & 0x7;
    assert_eq!(bits, 0);
    assert!((x - 0.1).abs() < 1e-5);
}
