//! Factory functions for request bodies.
//!
//! Pure functions returning JSON objects shaped like the bodies clients send to the create
//! endpoints, with every required field present and correctly typed.

use serde_json::{json, Map, Value};

fn into_object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => unreachable!("factory bodies are JSON objects"),
    }
}

/// Create body for a user.
pub fn user_body(user_name: &str) -> Map<String, Value> {
    into_object(json!({ "user_name": user_name }))
}

/// Create body for a person.
pub fn person_body(name: &str) -> Map<String, Value> {
    into_object(json!({
        "name": name,
        "mass": 77,
        "height": 172,
        "hair_color": "blond",
        "gender": "male",
        "eye_color": "blue",
        "birth_year": "19BBY"
    }))
}

/// Create body for a vehicle.
pub fn vehicle_body(name: &str) -> Map<String, Value> {
    into_object(json!({
        "name": name,
        "cargo_capacity": 50000,
        "consumables": "2 months",
        "cost_in_credits": 150000,
        "crew": 46,
        "length": 36,
        "manufacturer": "Corellia Mining Corporation",
        "max_atmosphering_speed": 30,
        "model": "Digger Crawler",
        "passengers": 30,
        "vehicle_class": "wheeled"
    }))
}

/// Create body for a planet, using the attributes of Tatooine with the given name.
pub fn planet_body(name: &str) -> Map<String, Value> {
    into_object(json!({
        "name": name,
        "climate": "arid",
        "diameter": 10465,
        "gravity": "1 standard",
        "orbital_period": 304,
        "population": 200000,
        "rotation_period": 23,
        "surface_water": 1,
        "terrain": "desert"
    }))
}
