use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize)]
pub struct Claims {
    pub exp: usize,
    pub iat: usize,
    pub email: String,
}

/// authorize middleware 驗證後塞進 request extensions 的目前登入職員
#[derive(Clone)]
pub struct CurrentStaff {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: String,
    pub office_id: Uuid,
}

#[derive(Deserialize)]
pub struct SignInData {
    pub email: String,
    pub password: String,
}
