pub mod cross_message;
pub mod l2_sent_msg;
pub mod relayed_msg;
pub mod rollup_batch;
