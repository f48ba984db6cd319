use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
    sea_query::{Expr, Query},
};

use crate::{
    entities::{cinema, filme, sessao},
    error::AppResult,
};

#[derive(Clone, Debug, Default)]
pub struct FilmeFilter {
    pub skip: u64,
    pub take: u64,
    pub nome_cinema: Option<String>,
}

pub async fn list<C: ConnectionTrait>(db: &C, filter: FilmeFilter) -> AppResult<Vec<filme::Model>> {
    let mut query = filme::Entity::find();

    if let Some(nome) = filter.nome_cinema {
        // films with at least one sessao in a cinema of that name
        let exibidos = Query::select()
            .column((sessao::Entity, sessao::Column::FilmeId))
            .from(sessao::Entity)
            .inner_join(
                cinema::Entity,
                Expr::col((cinema::Entity, cinema::Column::Id))
                    .equals((sessao::Entity, sessao::Column::CinemaId)),
            )
            .and_where(Expr::col((cinema::Entity, cinema::Column::Nome)).eq(nome))
            .to_owned();
        query = query.filter(filme::Column::Id.in_subquery(exibidos));
    }

    // the name filter narrows the set before paging, so `skip` and `take`
    // count matching films only
    Ok(query
        .order_by_asc(filme::Column::Id)
        .offset(filter.skip)
        .limit(filter.take)
        .all(db)
        .await?)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<filme::Model>> {
    Ok(filme::Entity::find_by_id(id).one(db).await?)
}

pub async fn insert<C: ConnectionTrait>(
    db: &C,
    model: filme::ActiveModel,
) -> AppResult<filme::Model> {
    Ok(model.insert(db).await?)
}

pub async fn update<C: ConnectionTrait>(
    db: &C,
    model: filme::ActiveModel,
) -> AppResult<filme::Model> {
    Ok(model.update(db).await?)
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<u64> {
    let res = filme::Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected)
}
