use holocron_test_utils::prelude::*;
use sea_orm::EntityTrait;

use crate::{
    model::favorite::{FavoriteDto, ResourceKind},
    server::{
        error::{favorite::FavoriteError, Error},
        model::list::ListOutcome,
        service::{favorite::FavoriteService, resource::ResourceService},
    },
};

mod add_favorite {
    use super::*;

    /// Expect a stored link to show up in the user's favorites
    #[tokio::test]
    async fn links_user_to_planet() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .with_user("luke")
            .with_planet("Tatooine")
            .build()
            .await?;
        let service = FavoriteService::new(&test.db);

        service
            .add_favorite(1, ResourceKind::Planets, 1)
            .await
            .unwrap();

        let favorites = service.list_favorites(1).await.unwrap();
        assert_eq!(
            favorites,
            ListOutcome::Found(vec![FavoriteDto {
                user_id: 1,
                kind: ResourceKind::Planets,
                target_id: 1,
            }])
        );

        Ok(())
    }

    /// Expect AlreadyFavorited on a second add, and a clean re-add after removal
    #[tokio::test]
    async fn add_remove_add_cycle() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .with_user("luke")
            .with_person("Obi-Wan Kenobi")
            .build()
            .await?;
        let service = FavoriteService::new(&test.db);

        service.add_favorite(1, ResourceKind::People, 1).await.unwrap();

        let result = service.add_favorite(1, ResourceKind::People, 1).await;
        assert!(matches!(
            result,
            Err(Error::FavoriteError(FavoriteError::AlreadyFavorited { .. }))
        ));

        service
            .remove_favorite(1, ResourceKind::People, 1)
            .await
            .unwrap();
        service.add_favorite(1, ResourceKind::People, 1).await.unwrap();

        Ok(())
    }

    /// Expect UserNotFound for an unknown user whether or not the target exists
    #[tokio::test]
    async fn fails_for_unknown_user_first() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .with_vehicle("Sand Crawler")
            .build()
            .await?;
        let service = FavoriteService::new(&test.db);

        let existing_target = service.add_favorite(9, ResourceKind::Vehicles, 1).await;
        let missing_target = service.add_favorite(9, ResourceKind::Vehicles, 7).await;

        assert!(matches!(
            existing_target,
            Err(Error::FavoriteError(FavoriteError::UserNotFound(9)))
        ));
        assert!(matches!(
            missing_target,
            Err(Error::FavoriteError(FavoriteError::UserNotFound(9)))
        ));

        Ok(())
    }

    /// Expect TargetNotFound naming the kind when the user exists but the target does not
    #[tokio::test]
    async fn fails_for_unknown_target() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .with_user("luke")
            .build()
            .await?;
        let service = FavoriteService::new(&test.db);

        let result = service.add_favorite(1, ResourceKind::Vehicles, 4).await;

        assert!(matches!(
            result,
            Err(Error::FavoriteError(FavoriteError::TargetNotFound {
                kind: ResourceKind::Vehicles,
                target_id: 4
            }))
        ));

        Ok(())
    }

    /// Expect exactly one of two concurrent adds of the same link to succeed
    #[tokio::test]
    async fn concurrent_adds_store_one_link() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .with_user("luke")
            .with_planet("Hoth")
            .build()
            .await?;
        let service = FavoriteService::new(&test.db);

        let (first, second) = tokio::join!(
            service.add_favorite(1, ResourceKind::Planets, 1),
            service.add_favorite(1, ResourceKind::Planets, 1)
        );

        let err = match (first, second) {
            (Ok(()), Err(err)) | (Err(err), Ok(())) => err,
            other => panic!("expected one success and one failure, got {other:?}"),
        };
        assert!(matches!(
            err,
            Error::FavoriteError(FavoriteError::AlreadyFavorited { .. })
        ));

        let ListOutcome::Found(favorites) = service.list_favorites(1).await.unwrap() else {
            panic!("expected the stored link");
        };
        assert_eq!(favorites.len(), 1);

        Ok(())
    }
}

mod remove_favorite {
    use super::*;

    /// Expect LinkNotFound when both endpoints exist but are not linked
    #[tokio::test]
    async fn fails_for_missing_link() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .with_user("luke")
            .with_person("Leia Organa")
            .build()
            .await?;
        let service = FavoriteService::new(&test.db);

        let result = service.remove_favorite(1, ResourceKind::People, 1).await;

        assert!(matches!(
            result,
            Err(Error::FavoriteError(FavoriteError::LinkNotFound { .. }))
        ));

        Ok(())
    }

    /// Expect TargetNotFound rather than LinkNotFound for a missing target
    #[tokio::test]
    async fn fails_for_unknown_target() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .with_user("luke")
            .build()
            .await?;
        let service = FavoriteService::new(&test.db);

        let result = service.remove_favorite(1, ResourceKind::Planets, 2).await;

        assert!(matches!(
            result,
            Err(Error::FavoriteError(FavoriteError::TargetNotFound { .. }))
        ));

        Ok(())
    }
}

mod list_favorites {
    use super::*;

    /// Expect people, then vehicles, then planets, each ordered by target
    #[tokio::test]
    async fn groups_by_kind_in_order() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .with_user("luke")
            .with_person("Han Solo")
            .with_person("Chewbacca")
            .with_vehicle("Sand Crawler")
            .with_planet("Tatooine")
            .build()
            .await?;
        test.user().insert_favorite_planet(1, 1).await?;
        test.user().insert_favorite_person(1, 2).await?;
        test.user().insert_favorite_vehicle(1, 1).await?;
        test.user().insert_favorite_person(1, 1).await?;
        let service = FavoriteService::new(&test.db);

        let favorites = service.list_favorites(1).await.unwrap();

        let expected = [
            (ResourceKind::People, 1),
            (ResourceKind::People, 2),
            (ResourceKind::Vehicles, 1),
            (ResourceKind::Planets, 1),
        ]
        .into_iter()
        .map(|(kind, target_id)| FavoriteDto {
            user_id: 1,
            kind,
            target_id,
        })
        .collect::<Vec<_>>();
        assert_eq!(favorites, ListOutcome::Found(expected));

        Ok(())
    }

    /// Expect Empty for a user with no favorites and UserNotFound for an unknown user
    #[tokio::test]
    async fn empty_and_unknown_user() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .with_user("luke")
            .build()
            .await?;
        let service = FavoriteService::new(&test.db);

        assert_eq!(service.list_favorites(1).await.unwrap(), ListOutcome::Empty);
        assert!(matches!(
            service.list_favorites(2).await,
            Err(Error::FavoriteError(FavoriteError::UserNotFound(2)))
        ));

        Ok(())
    }

    /// Expect links to be removed with their target or their user
    #[tokio::test]
    async fn links_cascade_on_delete() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .with_user("luke")
            .with_user("leia")
            .with_person("Yoda")
            .with_planet("Dagobah")
            .build()
            .await?;
        test.user().insert_favorite_person(1, 1).await?;
        test.user().insert_favorite_planet(1, 1).await?;
        test.user().insert_favorite_planet(2, 1).await?;
        let service = FavoriteService::new(&test.db);

        ResourceService::<entity::prelude::Person>::new(&test.db)
            .delete(1)
            .await
            .unwrap();
        let ListOutcome::Found(favorites) = service.list_favorites(1).await.unwrap() else {
            panic!("expected the planet link to remain");
        };
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].kind, ResourceKind::Planets);

        ResourceService::<entity::prelude::User>::new(&test.db)
            .delete(1)
            .await
            .unwrap();
        let remaining = entity::prelude::FavoritePlanet::find().all(&test.db).await?;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].user_id, 2);

        Ok(())
    }
}
