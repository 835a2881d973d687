use bridge_history_entity::rollup_batch::{Column, Entity, Model};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub async fn find_by_batch_indexes<C>(db: &C, batch_indexes: &[i64]) -> Result<Vec<Model>, DbErr>
where
    C: ConnectionTrait,
{
    if batch_indexes.is_empty() {
        return Ok(vec![]);
    }

    Entity::find()
        .filter(Column::DeletedAt.is_null())
        .filter(Column::BatchIndex.is_in(batch_indexes.to_vec()))
        .all(db)
        .await
}
