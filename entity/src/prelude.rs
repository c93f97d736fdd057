pub use super::favorite_person::Entity as FavoritePerson;
pub use super::favorite_planet::Entity as FavoritePlanet;
pub use super::favorite_vehicle::Entity as FavoriteVehicle;
pub use super::person::Entity as Person;
pub use super::planet::Entity as Planet;
pub use super::user::Entity as User;
pub use super::vehicle::Entity as Vehicle;
