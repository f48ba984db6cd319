use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, LoaderTrait, ModelTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    entities::{cinema, endereco, sessao},
    error::AppResult,
    models::ReadCinemaDto,
};

pub async fn list<C: ConnectionTrait>(
    db: &C,
    endereco_id: Option<i32>,
) -> AppResult<Vec<cinema::Model>> {
    let mut query = cinema::Entity::find();
    if let Some(endereco_id) = endereco_id {
        query = query.filter(cinema::Column::EnderecoId.eq(endereco_id));
    }
    Ok(query.order_by_asc(cinema::Column::Id).all(db).await?)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<cinema::Model>> {
    Ok(cinema::Entity::find_by_id(id).one(db).await?)
}

pub async fn load<C: ConnectionTrait>(db: &C, cinema: cinema::Model) -> AppResult<ReadCinemaDto> {
    let endereco = cinema.find_related(endereco::Entity).one(db).await?;
    let sessoes = cinema
        .find_related(sessao::Entity)
        .order_by_asc(sessao::Column::FilmeId)
        .all(db)
        .await?;
    Ok(ReadCinemaDto::new(cinema, endereco, sessoes)?)
}

/// Loads each cinema's endereco and sessoes in two batched queries.
pub async fn with_relations<C: ConnectionTrait>(
    db: &C,
    cinemas: Vec<cinema::Model>,
) -> AppResult<Vec<ReadCinemaDto>> {
    if cinemas.is_empty() {
        return Ok(Vec::new());
    }
    let enderecos = cinemas.load_one(endereco::Entity, db).await?;
    let sessoes = cinemas.load_many(sessao::Entity, db).await?;

    let mut out = Vec::with_capacity(cinemas.len());
    for ((cinema, endereco), mut sessoes) in cinemas.into_iter().zip(enderecos).zip(sessoes) {
        // same order as `load`
        sessoes.sort_by_key(|sessao| sessao.filme_id);
        out.push(ReadCinemaDto::new(cinema, endereco, sessoes)?);
    }
    Ok(out)
}

pub async fn insert<C: ConnectionTrait>(
    db: &C,
    model: cinema::ActiveModel,
) -> AppResult<cinema::Model> {
    Ok(model.insert(db).await?)
}

pub async fn update<C: ConnectionTrait>(
    db: &C,
    model: cinema::ActiveModel,
) -> AppResult<cinema::Model> {
    Ok(model.update(db).await?)
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<u64> {
    let res = cinema::Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected)
}
