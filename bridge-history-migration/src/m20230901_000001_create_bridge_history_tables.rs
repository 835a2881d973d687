use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let sql = r#"
            CREATE TYPE msg_type AS ENUM ('layer1', 'layer2');

            CREATE TABLE cross_message (
                id bigserial PRIMARY KEY,
                msg_hash varchar NOT NULL DEFAULT '',
                height bigint NOT NULL,
                sender varchar NOT NULL,
                target varchar NOT NULL,
                amount varchar NOT NULL,
                layer1_hash varchar NOT NULL DEFAULT '',
                layer2_hash varchar NOT NULL DEFAULT '',
                layer1_token varchar NOT NULL DEFAULT '',
                layer2_token varchar NOT NULL DEFAULT '',
                token_ids varchar NOT NULL DEFAULT '',
                msg_type msg_type NOT NULL,
                block_timestamp timestamp,
                created_at timestamp NOT NULL DEFAULT (now()),
                updated_at timestamp NOT NULL DEFAULT (now()),
                deleted_at timestamp
            );

            CREATE TABLE l2_sent_msg (
                id bigserial PRIMARY KEY,
                original_sender varchar NOT NULL DEFAULT '',
                tx_hash varchar NOT NULL,
                sender varchar NOT NULL,
                target varchar NOT NULL,
                value varchar NOT NULL,
                msg_hash varchar NOT NULL UNIQUE,
                height bigint NOT NULL,
                nonce bigint NOT NULL,
                batch_index bigint NOT NULL DEFAULT 0,
                msg_proof text NOT NULL DEFAULT '',
                msg_data text NOT NULL,
                created_at timestamp NOT NULL DEFAULT (now()),
                updated_at timestamp NOT NULL DEFAULT (now()),
                deleted_at timestamp
            );

            CREATE TABLE relayed_msg (
                id bigserial PRIMARY KEY,
                msg_hash varchar NOT NULL UNIQUE,
                height bigint NOT NULL,
                layer1_hash varchar NOT NULL DEFAULT '',
                layer2_hash varchar NOT NULL DEFAULT '',
                created_at timestamp NOT NULL DEFAULT (now()),
                updated_at timestamp NOT NULL DEFAULT (now()),
                deleted_at timestamp
            );

            CREATE TABLE rollup_batch (
                id bigserial PRIMARY KEY,
                commit_height bigint NOT NULL,
                batch_index bigint NOT NULL UNIQUE,
                batch_hash varchar NOT NULL,
                start_block_number bigint NOT NULL,
                end_block_number bigint NOT NULL,
                created_at timestamp NOT NULL DEFAULT (now()),
                updated_at timestamp NOT NULL DEFAULT (now()),
                deleted_at timestamp
            );

            COMMENT ON TABLE cross_message IS 'Deposits and withdrawals observed on either layer';

            COMMENT ON TABLE l2_sent_msg IS 'Messages sent on layer 2 together with their withdraw proofs';

            COMMENT ON TABLE relayed_msg IS 'Messages relayed (finalized) on the counter layer';

            COMMENT ON TABLE rollup_batch IS 'Committed rollup batches';
        "#;
        crate::from_sql(manager, sql).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let sql = r#"
            DROP TABLE rollup_batch;
            DROP TABLE relayed_msg;
            DROP TABLE l2_sent_msg;
            DROP TABLE cross_message;
            DROP TYPE msg_type;
        "#;
        crate::from_sql(manager, sql).await
    }
}
