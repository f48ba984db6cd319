use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder};

use crate::{entities::endereco, error::AppResult};

pub async fn list<C: ConnectionTrait>(db: &C) -> AppResult<Vec<endereco::Model>> {
    Ok(endereco::Entity::find().order_by_asc(endereco::Column::Id).all(db).await?)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<endereco::Model>> {
    Ok(endereco::Entity::find_by_id(id).one(db).await?)
}

pub async fn insert<C: ConnectionTrait>(
    db: &C,
    model: endereco::ActiveModel,
) -> AppResult<endereco::Model> {
    Ok(model.insert(db).await?)
}

pub async fn update<C: ConnectionTrait>(
    db: &C,
    model: endereco::ActiveModel,
) -> AppResult<endereco::Model> {
    Ok(model.update(db).await?)
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<u64> {
    let res = endereco::Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected)
}
