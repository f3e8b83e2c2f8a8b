//! Personnel: karbar (staff member), rank, position, service period and messages

use crate::core::EntityRef;
use crate::impl_resource_entity;
use chrono::{DateTime, Utc};

impl_resource_entity!(
    Karbar,
    "karbar",
    "karbar",
    {
        name: String,
        shoghl_sazmani: String,
        shoghl_amali: String,
        code_perseneli: String,
        bezaneshate: bool,
        sazmani: bool,
        tarikh_bazneshastegi: DateTime<Utc>,
        tarikh_estekhdam: DateTime<Utc>,
        yegan: EntityRef,
        daraje: EntityRef,
        semat: EntityRef,
    },
    many_to_many: {
        dores: "dores" => "dore",
    }
);

// Rank
impl_resource_entity!(
    Daraje,
    "daraje",
    "daraje",
    {
        name: String,
        description: String,
    }
);

// Position
impl_resource_entity!(
    Semat,
    "semat",
    "semat",
    {
        onvan_shoghli: String,
    }
);

// Service period
impl_resource_entity!(
    Dore,
    "dore",
    "dore",
    {
        begin: DateTime<Utc>,
        end: DateTime<Utc>,
    }
);

// Message addressed to a karbar
impl_resource_entity!(
    Payam,
    "payam",
    "payam",
    {
        onvan: String,
        matn: String,
        karbar: EntityRef,
    }
);
