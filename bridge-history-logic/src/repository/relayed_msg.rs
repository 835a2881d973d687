use bridge_history_entity::relayed_msg::{Column, Entity, Model};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub async fn find_by_msg_hashes<C>(db: &C, msg_hashes: &[String]) -> Result<Vec<Model>, DbErr>
where
    C: ConnectionTrait,
{
    if msg_hashes.is_empty() {
        return Ok(vec![]);
    }

    Entity::find()
        .filter(Column::DeletedAt.is_null())
        .filter(Column::MsgHash.is_in(msg_hashes.to_vec()))
        .all(db)
        .await
}
