//! Erreurs du noyau numérique.
//!
//! Deux catégories seulement, levées au point de violation, jamais rattrapées ici :
//! - Domaine          : le résultat flottant serait NaN
//! - ArgumentInvalide : conversion d’un caractère sur un texte de longueur ≠ 1, base hors 2..=36, etc.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurNombre {
    #[error("résultat NaN ({operation})")]
    Domaine { operation: &'static str },

    #[error("argument invalide : {0}")]
    ArgumentInvalide(String),
}

impl ErreurNombre {
    /// Catégorie stable, telle que vue par l’hôte.
    pub fn code(&self) -> &'static str {
        match self {
            ErreurNombre::Domaine { .. } => "nan_result",
            ErreurNombre::ArgumentInvalide(_) => "invalid argument",
        }
    }

    pub(crate) fn domaine(operation: &'static str) -> Self {
        tracing::debug!(operation, "résultat NaN rejeté");
        ErreurNombre::Domaine { operation }
    }
}

pub type ResultatNombre<T> = Result<T, ErreurNombre>;
