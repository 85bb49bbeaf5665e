//! Noyau numérique
//!
//! Organisation interne :
//! - config.rs   : largeur (32/64) fixée au démarrage, constantes dérivées
//! - erreur.rs   : erreurs typées (domaine, argument invalide)
//! - canon.rs    : Nombre canonique (ni NaN, ni -0) + ordre total
//! - arith.rs    : moteur arithmétique (Numerique)
//! - trig.rs     : log, trigonométrie, atan à deux arguments
//! - bits.rs     : opérations bit à bit sur la vue demi-mot
//! - alea.rs     : xorshift128+ à graine
//! - lecture.rs  : littéraux texte -> Nombre (curseur, jamais d’erreur)
//! - format.rs   : Nombre -> texte en base N (notation scientifique)
//! - interne.rs  : table d’internement des textes produits

pub mod alea;
pub mod arith;
pub mod bits;
pub mod canon;
pub mod config;
pub mod erreur;
pub mod format;
pub mod interne;
pub mod lecture;
pub mod trig;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique
pub use alea::Generateur;
pub use arith::Numerique;
pub use canon::Nombre;
pub use config::Largeur;
pub use erreur::{ErreurNombre, ResultatNombre};
pub use format::Convention;
pub use interne::interne;
pub use lecture::Curseur;
pub use trig::TrigFn;
