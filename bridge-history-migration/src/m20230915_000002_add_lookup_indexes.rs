use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let sql = r#"
            CREATE INDEX IF NOT EXISTS cross_message_msg_hash_index ON cross_message (msg_hash);
            CREATE INDEX IF NOT EXISTS cross_message_layer1_hash_index ON cross_message (layer1_hash);
            CREATE INDEX IF NOT EXISTS cross_message_layer2_hash_index ON cross_message (layer2_hash);
            CREATE INDEX IF NOT EXISTS l2_sent_msg_sender_index ON l2_sent_msg (sender);
            CREATE INDEX IF NOT EXISTS l2_sent_msg_original_sender_index ON l2_sent_msg (original_sender);
        "#;
        crate::from_sql(manager, sql).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let sql = r#"
            DROP INDEX IF EXISTS l2_sent_msg_original_sender_index;
            DROP INDEX IF EXISTS l2_sent_msg_sender_index;
            DROP INDEX IF EXISTS cross_message_layer2_hash_index;
            DROP INDEX IF EXISTS cross_message_layer1_hash_index;
            DROP INDEX IF EXISTS cross_message_msg_hash_index;
        "#;
        crate::from_sql(manager, sql).await
    }
}
