//! Entity definitions
//!
//! Entities are grouped by domain: personnel, organization, audit, duty and
//! attachments. Every entity is declared with [`impl_resource_entity!`](crate::impl_resource_entity).

pub mod macros;

pub mod attachment;
pub mod audit;
pub mod duty;
pub mod enums;
pub mod module;
pub mod organization;
pub mod personnel;

pub use attachment::{FileBargeMamooriat, FileGozaresh, FileHesabResi, FileName};
pub use audit::{BarnameHesabResi, Gozaresh, HesabResi};
pub use duty::{BargeMamooriat, Morkhasi, Negahbani};
pub use enums::{FileType, NoeBarnameHesabResi, VaziatBargeMamooriat, VaziatGozaresh, VaziateHesabResi};
pub use module::SahaModule;
pub use organization::{Mantaghe, NirooCode, Ostan, Shahr, Yegan, YeganCode, YeganType};
pub use personnel::{Daraje, Dore, Karbar, Payam, Semat};
