use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct ListPlayersQuery {
    pub search: Option<String>,
}
