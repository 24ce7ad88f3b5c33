use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signup {
    pub id: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
