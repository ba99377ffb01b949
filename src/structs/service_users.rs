use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 利用者(client)
#[derive(Serialize, sqlx::FromRow)]
pub struct ServiceUser {
    pub id: Uuid,
    pub name: String,
    pub office_id: Uuid,
    pub is_suspended: bool,
}

#[derive(Deserialize)]
pub struct ServiceUserQuery {
    /// 只能是登入職員自己的事業所,不帶就用自己的
    pub office_id: Option<Uuid>,
}
