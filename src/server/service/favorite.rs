use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::favorite::{FavoriteDto, ResourceKind},
    server::{
        data::{favorite::FavoriteRepository, resource::ResourceRepository},
        error::{favorite::FavoriteError, Error},
        model::{favorite::FavoriteLink, list::ListOutcome},
    },
};

/// Service managing links between users and their favorite people, vehicles and planets.
///
/// A link is either absent or present. Both endpoints are checked for existence before a
/// link is written or removed; the write itself is guarded by the junction's primary and
/// foreign keys, so concurrent adds of the same link store it once.
///
/// Links disappear with their user or target: the junction foreign keys cascade on delete.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Links a user to a target of the given kind.
    ///
    /// # Returns
    /// - `Ok(())` - Link stored
    /// - `Err(FavoriteError::UserNotFound)` - No such user, whatever the target
    /// - `Err(FavoriteError::TargetNotFound)` - User exists but the target does not
    /// - `Err(FavoriteError::AlreadyFavorited)` - The link already exists
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_favorite(
        &self,
        user_id: i32,
        kind: ResourceKind,
        target_id: i32,
    ) -> Result<(), Error> {
        match kind {
            ResourceKind::People => {
                self.add::<entity::prelude::FavoritePerson>(user_id, target_id)
                    .await
            }
            ResourceKind::Vehicles => {
                self.add::<entity::prelude::FavoriteVehicle>(user_id, target_id)
                    .await
            }
            ResourceKind::Planets => {
                self.add::<entity::prelude::FavoritePlanet>(user_id, target_id)
                    .await
            }
        }
    }

    /// Removes the link between a user and a target of the given kind.
    ///
    /// # Returns
    /// - `Ok(())` - Link removed
    /// - `Err(FavoriteError::UserNotFound | TargetNotFound)` - Same checks as [`Self::add_favorite`]
    /// - `Err(FavoriteError::LinkNotFound)` - Both endpoints exist but are not linked
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove_favorite(
        &self,
        user_id: i32,
        kind: ResourceKind,
        target_id: i32,
    ) -> Result<(), Error> {
        match kind {
            ResourceKind::People => {
                self.remove::<entity::prelude::FavoritePerson>(user_id, target_id)
                    .await
            }
            ResourceKind::Vehicles => {
                self.remove::<entity::prelude::FavoriteVehicle>(user_id, target_id)
                    .await
            }
            ResourceKind::Planets => {
                self.remove::<entity::prelude::FavoritePlanet>(user_id, target_id)
                    .await
            }
        }
    }

    /// Lists every favorite of a user: people first, then vehicles, then planets, each kind
    /// ordered by target ID.
    ///
    /// # Returns
    /// - `Ok(ListOutcome::Empty)` - The user has no favorites
    /// - `Ok(ListOutcome::Found(_))` - The user's favorites
    /// - `Err(FavoriteError::UserNotFound)` - No such user
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn list_favorites(&self, user_id: i32) -> Result<ListOutcome<FavoriteDto>, Error> {
        self.ensure_user(user_id).await?;

        let mut favorites = Vec::new();
        favorites.extend(self.links::<entity::prelude::FavoritePerson>(user_id).await?);
        favorites.extend(self.links::<entity::prelude::FavoriteVehicle>(user_id).await?);
        favorites.extend(self.links::<entity::prelude::FavoritePlanet>(user_id).await?);

        Ok(favorites.into())
    }

    async fn add<F: FavoriteLink>(&self, user_id: i32, target_id: i32) -> Result<(), Error> {
        self.ensure_endpoints::<F>(user_id, target_id).await?;

        let repo = FavoriteRepository::<_, F>::new(self.db);

        if repo.exists(user_id, target_id).await? {
            return Err(FavoriteError::AlreadyFavorited {
                user_id,
                kind: F::KIND,
                target_id,
            }
            .into());
        }

        // A concurrent add can still win the race; the primary key catches it below
        let result = repo.insert(user_id, target_id).await;

        let err = match result {
            Ok(()) => {
                tracing::debug!(
                    user_id = %user_id,
                    target_id = %target_id,
                    "Added favorite {}",
                    F::KIND
                );

                return Ok(());
            }
            Err(err) => err,
        };

        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Err(FavoriteError::AlreadyFavorited {
                user_id,
                kind: F::KIND,
                target_id,
            }
            .into()),
            // An endpoint was deleted after the existence checks passed
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                self.ensure_endpoints::<F>(user_id, target_id).await?;

                Err(err.into())
            }
            _ => Err(err.into()),
        }
    }

    async fn remove<F: FavoriteLink>(&self, user_id: i32, target_id: i32) -> Result<(), Error> {
        self.ensure_endpoints::<F>(user_id, target_id).await?;

        let result = FavoriteRepository::<_, F>::new(self.db)
            .delete(user_id, target_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(FavoriteError::LinkNotFound {
                user_id,
                kind: F::KIND,
                target_id,
            }
            .into());
        }

        Ok(())
    }

    async fn links<F: FavoriteLink>(&self, user_id: i32) -> Result<Vec<FavoriteDto>, Error> {
        let links = FavoriteRepository::<_, F>::new(self.db)
            .get_many_by_user_id(user_id)
            .await?;

        Ok(links
            .iter()
            .map(|link| FavoriteDto {
                user_id,
                kind: F::KIND,
                target_id: F::target_id(link),
            })
            .collect())
    }

    async fn ensure_user(&self, user_id: i32) -> Result<(), Error> {
        let user_exists = ResourceRepository::<_, entity::prelude::User>::new(self.db)
            .exists(user_id)
            .await?;

        if !user_exists {
            return Err(FavoriteError::UserNotFound(user_id).into());
        }

        Ok(())
    }

    /// Checks the user first, then the target.
    async fn ensure_endpoints<F: FavoriteLink>(
        &self,
        user_id: i32,
        target_id: i32,
    ) -> Result<(), Error> {
        self.ensure_user(user_id).await?;

        let target_exists = ResourceRepository::<_, F::Target>::new(self.db)
            .exists(target_id)
            .await?;

        if !target_exists {
            return Err(FavoriteError::TargetNotFound {
                kind: F::KIND,
                target_id,
            }
            .into());
        }

        Ok(())
    }
}
