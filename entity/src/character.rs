use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub character_id: i32,
    #[sea_orm(column_type = "String(StringLen::N(40))", nullable)]
    pub gender: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(40))", unique)]
    pub name: String,
    pub film_id: i32,
    pub homeworld_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::planet::Entity",
        from = "Column::HomeworldId",
        to = "super::planet::Column::PlanetId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Planet,
    #[sea_orm(has_many = "super::film::Entity")]
    Film,
    #[sea_orm(has_many = "super::favorite::Entity")]
    Favorite,
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planet.def()
    }
}

impl Related<super::film::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Film.def()
    }
}

impl Related<super::favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
