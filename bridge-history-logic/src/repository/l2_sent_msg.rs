use bridge_history_entity::{
    l2_sent_msg::{Column, Entity, Model},
    relayed_msg,
};
use sea_orm::{
    sea_query::Query, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

/// Layer 2 messages sent by `address` which already have a withdraw proof
/// but were not relayed yet. Newest messages go first.
pub async fn find_claimable_by_address<C>(db: &C, address: &str) -> Result<Vec<Model>, DbErr>
where
    C: ConnectionTrait,
{
    let relayed_hashes = Query::select()
        .column(relayed_msg::Column::MsgHash)
        .from(relayed_msg::Entity)
        .and_where(relayed_msg::Column::DeletedAt.is_null())
        .to_owned();

    Entity::find()
        .filter(Column::DeletedAt.is_null())
        .filter(
            Condition::any()
                .add(Column::OriginalSender.eq(address))
                .add(Column::Sender.eq(address)),
        )
        .filter(Column::MsgProof.ne(""))
        .filter(Column::MsgHash.not_in_subquery(relayed_hashes))
        .order_by_desc(Column::Id)
        .all(db)
        .await
}

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
