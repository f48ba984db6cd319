use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cinemas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nome: String,
    #[sea_orm(unique)]
    pub endereco_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::endereco::Entity",
        from = "Column::EnderecoId",
        to = "super::endereco::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Endereco,
    #[sea_orm(has_many = "super::sessao::Entity")]
    Sessao,
}

impl Related<super::endereco::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Endereco.def()
    }
}

impl Related<super::sessao::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sessao.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
