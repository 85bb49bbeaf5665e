// src/lib.rs
//
// Noyau numérique embarquable : Nombre canonique, arithmétique, bits,
// lecture/écriture en base N, générateur à graine.
// La console egui (src/main.rs) n’en est qu’un client.

pub mod noyau;

pub use noyau::{
    Convention, Curseur, ErreurNombre, Generateur, Largeur, Nombre, Numerique, ResultatNombre,
};
