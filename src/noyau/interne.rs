// src/noyau/interne.rs
//
// Internement des textes produits : un contenu donné n’existe qu’une fois
// (même Arc<str> rendu à chaque demande). Table globale paresseuse.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

static TEXTES: OnceLock<Mutex<HashSet<Arc<str>>>> = OnceLock::new();

/// Poignée canonique pour `texte`.
pub fn interne(texte: impl AsRef<str>) -> Arc<str> {
    let texte = texte.as_ref();
    let table = TEXTES.get_or_init(|| Mutex::new(HashSet::new()));
    // une table empoisonnée reste cohérente : on insère ou on lit, rien d’autre
    let mut garde = table.lock().unwrap_or_else(PoisonError::into_inner);

    if let Some(t) = garde.get(texte) {
        return Arc::clone(t);
    }

    let t: Arc<str> = Arc::from(texte);
    garde.insert(Arc::clone(&t));
    t
}
