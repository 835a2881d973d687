use bridge_history_entity::{
    cross_message::{Column, Entity, Model},
    sea_orm_active_enums::MsgType,
};
use sea_orm::{ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

/// Cross messages initiated or finalized by any of the given transactions.
pub async fn find_by_tx_hashes<C>(db: &C, tx_hashes: &[String]) -> Result<Vec<Model>, DbErr>
where
    C: ConnectionTrait,
{
    if tx_hashes.is_empty() {
        return Ok(vec![]);
    }

    Entity::find()
        .filter(Column::DeletedAt.is_null())
        .filter(
            Condition::any()
                .add(Column::Layer1Hash.is_in(tx_hashes.to_vec()))
                .add(Column::Layer2Hash.is_in(tx_hashes.to_vec())),
        )
        .all(db)
        .await
}

/// Layer 2 cross messages with the given message hashes.
pub async fn find_l2_by_msg_hashes<C>(db: &C, msg_hashes: &[String]) -> Result<Vec<Model>, DbErr>
where
    C: ConnectionTrait,
{
    if msg_hashes.is_empty() {
        return Ok(vec![]);
    }

    Entity::find()
        .filter(Column::DeletedAt.is_null())
        .filter(Column::MsgType.eq(MsgType::Layer2))
        .filter(Column::MsgHash.is_in(msg_hashes.to_vec()))
        .all(db)
        .await
}
