use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema};

use crate::server::{config::Config, error::Error};

/// Connect to the database
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Ok(db)
}

/// Creates every table that does not exist yet.
///
/// Referenced tables are created before the favorite junctions that point at them.
pub async fn create_schema(db: &DatabaseConnection) -> Result<(), Error> {
    use entity::prelude::*;

    let schema = Schema::new(db.get_database_backend());

    create_table(db, &schema, User).await?;
    create_table(db, &schema, Person).await?;
    create_table(db, &schema, Vehicle).await?;
    create_table(db, &schema, Planet).await?;
    create_table(db, &schema, FavoritePerson).await?;
    create_table(db, &schema, FavoriteVehicle).await?;
    create_table(db, &schema, FavoritePlanet).await?;

    Ok(())
}

async fn create_table<E: EntityTrait>(
    db: &DatabaseConnection,
    schema: &Schema,
    entity: E,
) -> Result<(), Error> {
    let mut stmt = schema.create_table_from_entity(entity);
    stmt.if_not_exists();

    db.execute(&stmt).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use sea_orm::{Database, EntityTrait};

    use super::create_schema;

    /// Expect the schema to be created once and left alone on the next startup
    #[tokio::test]
    async fn create_schema_is_repeatable() {
        let db = Database::connect("sqlite::memory:").await.unwrap();

        create_schema(&db).await.unwrap();
        create_schema(&db).await.unwrap();

        let users = entity::prelude::User::find().all(&db).await.unwrap();
        assert!(users.is_empty());
    }
}
