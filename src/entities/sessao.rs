use sea_orm::entity::prelude::*;

/// `data_e_hora_da_sessao` holds a civil ISO-8601 date-time, so lexical order is chronological.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sessoes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub filme_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub cinema_id: i32,
    pub data_e_hora_da_sessao: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::filme::Entity",
        from = "Column::FilmeId",
        to = "super::filme::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Filme,
    #[sea_orm(
        belongs_to = "super::cinema::Entity",
        from = "Column::CinemaId",
        to = "super::cinema::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Cinema,
}

impl Related<super::filme::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Filme.def()
    }
}

impl Related<super::cinema::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cinema.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
