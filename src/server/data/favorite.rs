use std::marker::PhantomData;

use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::favorite::FavoriteLink;

/// Links between users and one resource kind, stored in that kind's junction table.
pub struct FavoriteRepository<'a, C: ConnectionTrait, F: FavoriteLink> {
    db: &'a C,
    _link: PhantomData<F>,
}

impl<'a, C: ConnectionTrait, F: FavoriteLink> FavoriteRepository<'a, C, F> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            _link: PhantomData,
        }
    }

    pub async fn exists(&self, user_id: i32, target_id: i32) -> Result<bool, DbErr> {
        let link = F::Entity::find()
            .filter(F::user_column().eq(user_id))
            .filter(F::target_column().eq(target_id))
            .one(self.db)
            .await?;

        Ok(link.is_some())
    }

    /// Inserts a link between a user and a target
    ///
    /// The junction's composite primary key rejects a duplicate link and its foreign keys reject
    /// a missing user or target, so the write is checked atomically by the database.
    ///
    /// # Returns
    /// - `Ok(())` - Link stored
    /// - `Err(DbErr)` - Unique or foreign key constraint violation, or any other query failure
    pub async fn insert(&self, user_id: i32, target_id: i32) -> Result<(), DbErr> {
        F::Entity::insert(F::link(user_id, target_id))
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Deletes a link
    ///
    /// Check [`DeleteResult::rows_affected`] to learn whether the link existed.
    pub async fn delete(&self, user_id: i32, target_id: i32) -> Result<DeleteResult, DbErr> {
        F::Entity::delete_many()
            .filter(F::user_column().eq(user_id))
            .filter(F::target_column().eq(target_id))
            .exec(self.db)
            .await
    }

    /// Gets every link owned by a user, ordered by target ID
    pub async fn get_many_by_user_id(&self, user_id: i32) -> Result<Vec<F::Model>, DbErr> {
        F::Entity::find()
            .filter(F::user_column().eq(user_id))
            .order_by_asc(F::target_column())
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod insert {
        use holocron_test_utils::prelude::*;
        use sea_orm::SqlErr;

        use crate::server::data::favorite::FavoriteRepository;

        /// Expect success when linking an existing user and person
        #[tokio::test]
        async fn inserts_link() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_catalog_tables()
                .with_user("luke")
                .with_person("Leia Organa")
                .build()
                .await?;

            let repo = FavoriteRepository::<_, entity::prelude::FavoritePerson>::new(&test.db);
            repo.insert(1, 1).await?;

            assert!(repo.exists(1, 1).await?);

            Ok(())
        }

        /// Expect the composite key to reject a second identical link
        #[tokio::test]
        async fn rejects_duplicate_link() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_catalog_tables()
                .with_user("luke")
                .with_planet("Tatooine")
                .build()
                .await?;

            let repo = FavoriteRepository::<_, entity::prelude::FavoritePlanet>::new(&test.db);
            repo.insert(1, 1).await?;
            let result = repo.insert(1, 1).await;

            assert!(matches!(
                result.map_err(|e| e.sql_err()),
                Err(Some(SqlErr::UniqueConstraintViolation(_)))
            ));

            Ok(())
        }

        /// Expect a foreign key error when linking to a vehicle that does not exist
        #[tokio::test]
        async fn rejects_missing_target() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_catalog_tables()
                .with_user("luke")
                .build()
                .await?;

            let repo = FavoriteRepository::<_, entity::prelude::FavoriteVehicle>::new(&test.db);
            let result = repo.insert(1, 1).await;

            assert!(matches!(
                result.map_err(|e| e.sql_err()),
                Err(Some(SqlErr::ForeignKeyConstraintViolation(_)))
            ));

            Ok(())
        }
    }

    mod delete {
        use holocron_test_utils::prelude::*;

        use crate::server::data::favorite::FavoriteRepository;

        /// Expect one row affected for an existing link and none afterwards
        #[tokio::test]
        async fn deletes_existing_link() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_catalog_tables()
                .with_user("luke")
                .with_vehicle("Sand Crawler")
                .build()
                .await?;
            test.user().insert_favorite_vehicle(1, 1).await?;

            let repo = FavoriteRepository::<_, entity::prelude::FavoriteVehicle>::new(&test.db);

            assert_eq!(repo.delete(1, 1).await?.rows_affected, 1);
            assert_eq!(repo.delete(1, 1).await?.rows_affected, 0);

            Ok(())
        }
    }

    mod get_many_by_user_id {
        use holocron_test_utils::prelude::*;

        use crate::server::data::favorite::FavoriteRepository;

        /// Expect only the user's own links, ordered by target
        #[tokio::test]
        async fn returns_links_of_user_only() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_catalog_tables()
                .with_user("luke")
                .with_user("leia")
                .with_person("Han Solo")
                .with_person("Chewbacca")
                .build()
                .await?;
            test.user().insert_favorite_person(1, 2).await?;
            test.user().insert_favorite_person(1, 1).await?;
            test.user().insert_favorite_person(2, 1).await?;

            let repo = FavoriteRepository::<_, entity::prelude::FavoritePerson>::new(&test.db);
            let links = repo.get_many_by_user_id(1).await?;

            let targets: Vec<i32> = links.iter().map(|link| link.person_id).collect();
            assert_eq!(targets, vec![1, 2]);

            Ok(())
        }
    }
}
