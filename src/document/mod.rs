//! Brazilian identifier engines
//!
//! Each engine follows the same shape: normalize the raw input, check its
//! shape (and check digits for CPF/CNPJ), format it for display, and
//! generate new valid values.

pub mod cep;
pub mod checksum;
pub mod cnpj;
pub mod cpf;

use std::fmt;

pub use cep::Cep;
pub use cnpj::Cnpj;
pub use cpf::Cpf;

/// Kind of identifier, used for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Individual taxpayer ID
    Cpf,
    /// Corporate taxpayer ID
    Cnpj,
    /// Postal code
    Cep,
}

impl DocumentKind {
    /// Number of digits in the normalized form
    pub fn length(self) -> usize {
        match self {
            DocumentKind::Cpf => crate::CPF_LENGTH,
            DocumentKind::Cnpj => crate::CNPJ_LENGTH,
            DocumentKind::Cep => crate::CEP_LENGTH,
        }
    }

    /// Upper-case display name
    pub fn name(self) -> &'static str {
        match self {
            DocumentKind::Cpf => "CPF",
            DocumentKind::Cnpj => "CNPJ",
            DocumentKind::Cep => "CEP",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
