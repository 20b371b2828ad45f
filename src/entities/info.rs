//! Information messages shown after saving

use serde::{Deserialize, Serialize};

/// Entry of `information.yaml`: a message tied to a usage count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    /// Usage count at which the message is shown
    pub counter: u64,
    pub msg: String,
}

/// Messages due at the given usage count
pub fn messages_for(infos: &[Info], counter: u64) -> Vec<&str> {
    infos
        .iter()
        .filter(|i| i.counter == counter)
        .map(|i| i.msg.as_str())
        .collect()
}
