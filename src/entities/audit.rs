//! Audits, their programs and reports

use super::enums::{NoeBarnameHesabResi, VaziatGozaresh, VaziateHesabResi};
use crate::core::EntityRef;
use crate::impl_resource_entity;

impl_resource_entity!(
    HesabResi,
    "hesabResi",
    "hesab_resi",
    {
        sal: i32,
        vaziate_hesab_resi: VaziateHesabResi,
        yegan: EntityRef,
        dore: EntityRef,
        barname_hesab_resi: EntityRef,
        gozaresh: EntityRef,
    }
);

impl_resource_entity!(
    BarnameHesabResi,
    "barnameHesabResi",
    "barname_hesab_resi",
    {
        noe_barname_hesab_resi: NoeBarnameHesabResi,
    },
    reverse: {
        "hesabresi-is-null" => ("hesab_resi", "barnameHesabResi"),
    }
);

impl_resource_entity!(
    Gozaresh,
    "gozaresh",
    "gozaresh",
    {
        vaziat: VaziatGozaresh,
    },
    reverse: {
        "hesabresi-is-null" => ("hesab_resi", "gozaresh"),
    }
);
