//! Duty orders, leave and guard shifts

use super::enums::VaziatBargeMamooriat;
use crate::core::EntityRef;
use crate::impl_resource_entity;
use chrono::{DateTime, Utc};

impl_resource_entity!(
    BargeMamooriat,
    "bargeMamooriat",
    "barge_mamooriat",
    {
        vaziat: VaziatBargeMamooriat,
        sale_mamooriat: i32,
        shoroo_mamooriat: DateTime<Utc>,
        payan_mamooriat: DateTime<Utc>,
        karbar: EntityRef,
        hesab_resi: EntityRef,
    }
);

// Leave
impl_resource_entity!(
    Morkhasi,
    "morkhasi",
    "morkhasi",
    {
        begin: DateTime<Utc>,
        end: DateTime<Utc>,
        karbar: EntityRef,
    }
);

// Guard shift
impl_resource_entity!(
    Negahbani,
    "negahbani",
    "negahbani",
    {
        begin: DateTime<Utc>,
        end: DateTime<Utc>,
        karbar: EntityRef,
        yegan: EntityRef,
    }
);
