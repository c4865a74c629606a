use serde::{Deserialize, Serialize};

/// The identity a command is executed on behalf of. Always passed explicitly;
/// there is no ambient "current user" context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: i64,
    pub username: String,
}

impl Actor {
    pub fn label(&self) -> String {
        self.username.clone()
    }
}
