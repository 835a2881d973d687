use crate::{cross_message, l2_sent_msg, relayed_msg, sea_orm_active_enums::MsgType};

impl MsgType {
    pub fn is_layer1(&self) -> bool {
        matches!(self, MsgType::Layer1)
    }
}

impl cross_message::Model {
    pub fn validated_height(&self) -> u64 {
        self.height.max(0) as u64
    }
}

impl l2_sent_msg::Model {
    pub fn validated_height(&self) -> u64 {
        self.height.max(0) as u64
    }

    pub fn validated_nonce(&self) -> u64 {
        self.nonce.max(0) as u64
    }

    pub fn validated_batch_index(&self) -> u64 {
        self.batch_index.max(0) as u64
    }
}

impl relayed_msg::Model {
    pub fn validated_height(&self) -> u64 {
        self.height.max(0) as u64
    }
}
