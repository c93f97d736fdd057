use std::marker::PhantomData;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, IdenStatic,
    IntoActiveModel, Iterable, QueryFilter, QueryOrder,
};

use crate::server::{
    model::resource::Resource,
    validation::{FieldSet, FieldValue},
};

/// Create, read, update and delete for one resource kind, keyed by integer identifier.
pub struct ResourceRepository<'a, C: ConnectionTrait, R: Resource> {
    db: &'a C,
    _resource: PhantomData<R>,
}

impl<'a, C: ConnectionTrait, R: Resource> ResourceRepository<'a, C, R> {
    /// Creates a new instance of [`ResourceRepository`]
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            _resource: PhantomData,
        }
    }

    /// Gets every row, ordered by identifier
    pub async fn list(&self) -> Result<Vec<R::Model>, DbErr> {
        R::Entity::find()
            .order_by_asc(R::id_column())
            .all(self.db)
            .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<R::Model>, DbErr> {
        R::Entity::find()
            .filter(R::id_column().eq(id))
            .one(self.db)
            .await
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        Ok(self.get(id).await?.is_some())
    }

    /// Inserts a row built from validated fields
    ///
    /// Fails with a unique constraint violation if a unique column value is already taken.
    pub async fn create(&self, fields: &FieldSet) -> Result<R::Model, DbErr> {
        let mut active_model = <R::ActiveModel as Default>::default();
        apply_fields::<R>(&mut active_model, fields)?;

        active_model.insert(self.db).await
    }

    /// Checks whether a row other than `except_id` holds `value` in the named field
    pub async fn value_taken(
        &self,
        field: &str,
        value: &FieldValue,
        except_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = R::Entity::find().filter(column::<R>(field)?.eq(value.clone()));
        if let Some(id) = except_id {
            query = query.filter(R::id_column().ne(id));
        }

        Ok(query.one(self.db).await?.is_some())
    }

    /// Applies a validated delta to a loaded row in a single statement
    ///
    /// # Returns
    /// - `Ok(Model)` - The row after the update, unchanged for an empty delta
    /// - `Err(DbErr::RecordNotUpdated)` - The row was deleted after it was loaded
    /// - `Err(DbErr)` - Query failed, including unique constraint violations
    pub async fn update(&self, model: R::Model, delta: &FieldSet) -> Result<R::Model, DbErr> {
        if delta.is_empty() {
            return Ok(model);
        }

        let mut active_model = model.into_active_model();
        apply_fields::<R>(&mut active_model, delta)?;

        active_model.update(self.db).await
    }

    /// Deletes a row
    ///
    /// Returns OK regardless of the row existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        R::Entity::delete_many()
            .filter(R::id_column().eq(id))
            .exec(self.db)
            .await
    }
}

fn column<R: Resource>(name: &str) -> Result<<R::Entity as EntityTrait>::Column, DbErr> {
    <R::Entity as EntityTrait>::Column::iter()
        .find(|column| column.as_str() == name)
        .ok_or_else(|| DbErr::Custom(format!("{} has no column named {}", R::label(), name)))
}

/// Sets each field on the active model's column of the same name.
fn apply_fields<R: Resource>(
    active_model: &mut R::ActiveModel,
    fields: &FieldSet,
) -> Result<(), DbErr> {
    for (name, value) in fields.iter() {
        active_model.set(column::<R>(name)?, value.clone().into());
    }

    Ok(())
}
