//! # brdocs
//!
//! Validation, formatting and generation of Brazilian identifiers.
//!
//! ## Features
//!
//! - CPF and CNPJ validation with modulo-11 check digits
//! - CEP shape validation, formatting and state lookup
//! - Generators for all three, from a shared seedable source or any `rand::Rng`
//! - Typed `Cpf`, `Cnpj` and `Cep` values with serde support
//!
//! ## Example
//!
//! ```
//! use brdocs::{cep, cnpj, cpf};
//!
//! assert!(cpf::is_valid("123.456.789-09"));
//! assert!(cnpj::is_valid("15757747000166"));
//! assert_eq!(cep::format("01310100"), "01310-100");
//!
//! let generated = cpf::generate();
//! assert_eq!(generated.len(), brdocs::CPF_LENGTH);
//! ```

pub mod dataset;
pub mod document;
pub mod error;
pub mod random;
pub mod utils;

// Re-export main types
pub use document::{cep, cnpj, cpf};
pub use document::{Cep, Cnpj, Cpf, DocumentKind};
pub use error::{DocumentError, Result};
pub use utils::normalize;

/// CPF length in digits
pub const CPF_LENGTH: usize = 11;

/// CNPJ length in digits
pub const CNPJ_LENGTH: usize = 14;

/// CEP length in digits
pub const CEP_LENGTH: usize = 8;

/// Largest numeric CEP
pub const CEP_MAX: u32 = 99_999_999;

/// Version of the embedded CEP range table
pub const CEP_DATASET_VERSION: &str = "2024.1";
