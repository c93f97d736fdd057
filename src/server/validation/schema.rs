//! Field schemas for every entity kind.
//!
//! Field names must match the entity's storage columns exactly. Field order is the presence
//! check order on create; the type checks on create and the field walk on update follow their
//! own orders where a kind lists one.

use crate::server::validation::{EntitySchema, FieldSchema};

pub static USER: EntitySchema = EntitySchema {
    entity: "User",
    fields: &[FieldSchema::text("user_name")],
    create_type_order: &[],
    update_order: &[],
};

pub static PERSON: EntitySchema = EntitySchema {
    entity: "Person",
    fields: &[
        FieldSchema::text("name").unique(),
        FieldSchema::integer("mass"),
        FieldSchema::integer("height"),
        FieldSchema::text("hair_color"),
        FieldSchema::text("gender"),
        FieldSchema::text("eye_color"),
        FieldSchema::text("birth_year"),
    ],
    create_type_order: PERSON_TYPE_ORDER,
    update_order: PERSON_TYPE_ORDER,
};

/// Strings first, then integers.
const PERSON_TYPE_ORDER: &[&str] = &[
    "name",
    "birth_year",
    "eye_color",
    "gender",
    "hair_color",
    "height",
    "mass",
];

pub static VEHICLE: EntitySchema = EntitySchema {
    entity: "Vehicle",
    fields: &[
        FieldSchema::text("name").unique(),
        FieldSchema::integer("cargo_capacity"),
        FieldSchema::text("consumables"),
        FieldSchema::integer("cost_in_credits"),
        FieldSchema::integer("crew"),
        FieldSchema::integer("length"),
        FieldSchema::text("manufacturer"),
        FieldSchema::integer("max_atmosphering_speed"),
        FieldSchema::text("model"),
        FieldSchema::integer("passengers"),
        FieldSchema::text("vehicle_class"),
    ],
    create_type_order: &[
        "name",
        "cargo_capacity",
        "consumables",
        "cost_in_credits",
        "crew",
        "length",
        "manufacturer",
        "max_atmosphering_speed",
        "model",
        "vehicle_class",
        "passengers",
    ],
    update_order: &[],
};

pub static PLANET: EntitySchema = EntitySchema {
    entity: "Planet",
    fields: &[
        FieldSchema::text("name").unique(),
        FieldSchema::text("climate"),
        FieldSchema::integer("diameter"),
        FieldSchema::text("gravity"),
        FieldSchema::integer("orbital_period"),
        FieldSchema::integer("population"),
        FieldSchema::integer("rotation_period"),
        FieldSchema::integer("surface_water"),
        FieldSchema::text("terrain"),
    ],
    create_type_order: &[
        "name",
        "climate",
        "gravity",
        "terrain",
        "diameter",
        "orbital_period",
        "population",
        "rotation_period",
        "surface_water",
    ],
    update_order: &[],
};
