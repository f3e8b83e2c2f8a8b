//! Organizational units and geography

use crate::core::EntityRef;
use crate::impl_resource_entity;

impl_resource_entity!(
    Yegan,
    "yegan",
    "yegan",
    {
        name: String,
        code: String,
        yegan_type: EntityRef,
        shahr: EntityRef,
    },
    many_to_many: {
        niroo_codes: "nirooCodes" => "niroo_code",
    },
    reverse: {
        "yegancode-is-null" => ("yegan_code", "yegan"),
    }
);

impl_resource_entity!(
    YeganCode,
    "yeganCode",
    "yegan_code",
    {
        name: String,
        code: String,
        yegan: EntityRef,
    }
);

impl_resource_entity!(YeganType, "yeganType", "yegan_type", { name: String });

impl_resource_entity!(
    NirooCode,
    "nirooCode",
    "niroo_code",
    {
        name: String,
        code: String,
    }
);

// Province
impl_resource_entity!(
    Ostan,
    "ostan",
    "ostan",
    {
        name: String,
        mantaghe: EntityRef,
    }
);

// City, with its allowance coefficients
impl_resource_entity!(
    Shahr,
    "shahr",
    "shahr",
    {
        name: String,
        zarib_abo_hava: i32,
        zarib_tashilat: i32,
        masafat_ta_markaz: i32,
        ostan: EntityRef,
    }
);

// Region
impl_resource_entity!(Mantaghe, "mantaghe", "mantaghe", { name: String });
