use std::marker::PhantomData;

use sea_orm::{DatabaseConnection, DbErr, SqlErr};
use serde_json::{Map, Value};

use crate::server::{
    data::resource::ResourceRepository,
    error::{resource::ResourceError, validation::ValidationError, Error},
    model::{list::ListOutcome, resource::Resource},
    validation::FieldSet,
};

/// Service for the validation-and-persistence contract shared by every resource kind.
///
/// Writes are validated against the resource's schema before reaching storage; uniqueness is
/// enforced by the storage constraint at write time, so two concurrent creates with the same
/// name cannot both succeed. Updates additionally look for a taken value at the unique field's
/// position in the check order.
pub struct ResourceService<'a, R: Resource> {
    db: &'a DatabaseConnection,
    _resource: PhantomData<R>,
}

impl<'a, R: Resource> ResourceService<'a, R> {
    /// Creates a new instance of [`ResourceService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            _resource: PhantomData,
        }
    }

    /// Lists every row of the resource.
    ///
    /// # Returns
    /// - `Ok(ListOutcome::Empty)` - The table has no rows
    /// - `Ok(ListOutcome::Found(_))` - All rows, ordered by identifier
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn list(&self) -> Result<ListOutcome<R::Dto>, Error> {
        let rows = ResourceRepository::<_, R>::new(self.db).list().await?;

        Ok(ListOutcome::from(rows).map(R::Dto::from))
    }

    pub async fn get(&self, id: i32) -> Result<R::Dto, Error> {
        ResourceRepository::<_, R>::new(self.db)
            .get(id)
            .await?
            .map(R::Dto::from)
            .ok_or_else(|| not_found::<R>(id))
    }

    /// Validates a create body and inserts the row.
    ///
    /// # Returns
    /// - `Ok(Dto)` - The stored row including its assigned identifier
    /// - `Err(Error::ValidationError)` - Missing field, wrong type or duplicate unique value
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, body: &Map<String, Value>) -> Result<R::Dto, Error> {
        let fields = R::schema().validate_create(body)?;

        match ResourceRepository::<_, R>::new(self.db)
            .create(&fields)
            .await
        {
            Ok(model) => {
                tracing::debug!("Created {}", R::label());

                Ok(model.into())
            }
            Err(err) => Err(write_error::<R>(err, &fields)),
        }
    }

    /// Loads the row an update will apply to.
    ///
    /// Lets a caller report an unknown identifier before looking at the request body.
    pub async fn find(&self, id: i32) -> Result<R::Model, Error> {
        ResourceRepository::<_, R>::new(self.db)
            .get(id)
            .await?
            .ok_or_else(|| not_found::<R>(id))
    }

    /// Applies a partial update to an existing row.
    ///
    /// Existence is checked before the body is validated, so an unknown identifier is reported
    /// as not found whatever the body contains. See [`Self::update_row`].
    pub async fn update(&self, id: i32, body: &Map<String, Value>) -> Result<R::Dto, Error> {
        let row = self.find(id).await?;

        self.update_row(row, body).await
    }

    /// Validates an update body and applies it to a loaded row.
    ///
    /// Fields are checked in the schema's update order and the first violation wins. The
    /// unique field is checked against other rows at its own position in that order, so a
    /// taken name is reported before a wrongly typed later field. The delta is applied in one
    /// statement; a failure leaves every field unchanged.
    ///
    /// # Returns
    /// - `Ok(Dto)` - The row after the update
    /// - `Err(Error::ResourceError)` - The row was deleted after it was loaded
    /// - `Err(Error::ValidationError)` - Wrong type or duplicate unique value
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_row(
        &self,
        row: R::Model,
        body: &Map<String, Value>,
    ) -> Result<R::Dto, Error> {
        let repo = ResourceRepository::<_, R>::new(self.db);
        let id = R::id(&row);
        let check = R::schema().check_update(body);

        if let Some(field) = R::schema().unique_field() {
            if let Some(value) = check.accepted.get(field.name) {
                if repo.value_taken(field.name, value, Some(id)).await? {
                    return Err(ValidationError::DuplicateValue {
                        field: field.name,
                        value: value.to_string(),
                    }
                    .into());
                }
            }
        }

        if let Some(err) = check.violation {
            return Err(err.into());
        }

        match repo.update(row, &check.accepted).await {
            Ok(model) => Ok(model.into()),
            Err(DbErr::RecordNotUpdated) => Err(not_found::<R>(id)),
            Err(err) => Err(write_error::<R>(err, &check.accepted)),
        }
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = ResourceRepository::<_, R>::new(self.db).delete(id).await?;

        if result.rows_affected == 0 {
            return Err(not_found::<R>(id));
        }

        Ok(())
    }
}

fn not_found<R: Resource>(id: i32) -> Error {
    ResourceError::NotFound {
        resource: R::label(),
        id,
    }
    .into()
}

/// Maps a unique constraint violation on a write to a duplicate value of the schema's unique
/// field; any other database error passes through.
fn write_error<R: Resource>(err: DbErr, fields: &FieldSet) -> Error {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
        if let Some(field) = R::schema().unique_field() {
            if let Some(value) = fields.get(field.name) {
                return ValidationError::DuplicateValue {
                    field: field.name,
                    value: value.to_string(),
                }
                .into();
            }
        }
    }

    err.into()
}
