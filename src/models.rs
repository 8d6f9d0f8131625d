use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub driver_id: u64,
    pub sub: String,
    pub exp: usize,
    pub jti: String,
}
