use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder};

use crate::{entities::sessao, error::AppResult};

pub async fn list<C: ConnectionTrait>(db: &C) -> AppResult<Vec<sessao::Model>> {
    Ok(sessao::Entity::find()
        .order_by_asc(sessao::Column::FilmeId)
        .order_by_asc(sessao::Column::CinemaId)
        .all(db)
        .await?)
}

pub async fn find<C: ConnectionTrait>(
    db: &C,
    filme_id: i32,
    cinema_id: i32,
) -> AppResult<Option<sessao::Model>> {
    Ok(sessao::Entity::find_by_id((filme_id, cinema_id)).one(db).await?)
}

pub async fn insert<C: ConnectionTrait>(
    db: &C,
    model: sessao::ActiveModel,
) -> AppResult<sessao::Model> {
    Ok(model.insert(db).await?)
}

pub async fn update<C: ConnectionTrait>(
    db: &C,
    model: sessao::ActiveModel,
) -> AppResult<sessao::Model> {
    Ok(model.update(db).await?)
}

pub async fn delete<C: ConnectionTrait>(db: &C, filme_id: i32, cinema_id: i32) -> AppResult<u64> {
    let res = sessao::Entity::delete_by_id((filme_id, cinema_id)).exec(db).await?;
    Ok(res.rows_affected)
}
