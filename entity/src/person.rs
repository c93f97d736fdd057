use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "people")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub mass: i64,
    pub height: i64,
    pub hair_color: String,
    pub gender: String,
    pub eye_color: String,
    pub birth_year: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_person::Entity")]
    FavoritePerson,
}

impl Related<super::favorite_person::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoritePerson.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
