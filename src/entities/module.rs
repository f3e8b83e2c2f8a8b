//! The application module registering every resource

use super::*;
use crate::core::{Entity, Module};
use crate::server::entity_registry::EntityRegistry;
use crate::server::resource::ResourceDescriptor;

/// Registers the 22 SAHA resources
pub struct SahaModule;

/// Implements [`Module`] for `SahaModule` over the listed entity types
macro_rules! saha_entities {
    ($($entity:ty),* $(,)?) => {
        impl Module for SahaModule {
            fn name(&self) -> &str {
                "saha"
            }

            fn tables(&self) -> Vec<&'static str> {
                vec![$(<$entity>::table_name()),*]
            }

            fn register_entities(&self, registry: &mut EntityRegistry) {
                $(registry.register(Box::new(ResourceDescriptor::<$entity>::new()));)*
            }
        }
    };
}

saha_entities!(
    Karbar,
    Daraje,
    Semat,
    Dore,
    Payam,
    Yegan,
    YeganCode,
    YeganType,
    NirooCode,
    Ostan,
    Shahr,
    Mantaghe,
    HesabResi,
    BarnameHesabResi,
    Gozaresh,
    BargeMamooriat,
    Morkhasi,
    Negahbani,
    FileName,
    FileHesabResi,
    FileGozaresh,
    FileBargeMamooriat,
);
