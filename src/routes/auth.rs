use crate::{
    errors::{AppError, AuthError, SystemError},
    repositories::staffs,
    state::AppState,
    structs::{
        action_result::ActionResult,
        auth::{Claims, CurrentStaff, SignInData},
    },
};
use axum::{
    body::Body,
    extract::{Json, Request, State},
    http::{self, Response},
    middleware::Next,
    routing::post,
    Router,
};
use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, TokenData, Validation};

pub fn new() -> Router<AppState> {
    Router::new().route("/", post(sign_in))
}

pub async fn authorize(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response<Body>, AppError> {
    let token = extract_token(req.headers())?;
    let token_data = decode_jwt(token)?;

    let current_staff = retrieve_staff_by_email(&state, &token_data.claims.email).await?;

    req.extensions_mut().insert(current_staff);
    Ok(next.run(req).await)
}

// 抽取 token 解析邏輯
pub fn extract_token(headers: &http::HeaderMap) -> Result<String, AppError> {
    let auth_header = headers
        .get(http::header::AUTHORIZATION)
        .ok_or(AppError::AuthError(AuthError::MissingToken))?
        .to_str()
        .map_err(|_| AppError::AuthError(AuthError::InvalidHeader))?;

    auth_header
        .split_whitespace()
        .nth(1)
        .ok_or(AppError::AuthError(AuthError::MissingToken))
        .map(ToString::to_string)
}

pub async fn sign_in(
    State(state): State<AppState>,
    Json(sign_in_data): Json<SignInData>,
) -> Result<ActionResult<String>, AppError> {
    let db_staff = staffs::check_email_exists(&state, &sign_in_data.email)
        .await
        .map_err(|_| AppError::AuthError(AuthError::Unauthorized))?;

    if !verify_password(&sign_in_data.password, &db_staff.password)? {
        return Err(AppError::AuthError(AuthError::Unauthorized));
    }

    let token = encode_jwt(db_staff.email)?;

    Ok(ActionResult::ok(token))
}

pub async fn retrieve_staff_by_email(
    state: &AppState,
    email: &str,
) -> Result<CurrentStaff, AppError> {
    staffs::check_email_exists(state, email)
        .await
        .map(|db_staff| CurrentStaff {
            id: db_staff.id,
            email: db_staff.email,
            name: db_staff.name,
            role: db_staff.role,
            office_id: db_staff.office_id,
        })
        .map_err(|_| AppError::AuthError(AuthError::Unauthorized))
}

pub fn encode_jwt(email: String) -> Result<String, AppError> {
    let jwt_secret = std::env::var("JWT_SECRET")
        .map_err(|_| AppError::SystemError(SystemError::EnvVarMissing("JWT_SECRET".to_string())))?;

    let now = Utc::now();
    let exp = (now + Duration::hours(1)).timestamp() as usize;
    let iat = now.timestamp() as usize;

    let claim = Claims { iat, exp, email };

    encode(
        &Header::default(),
        &claim,
        &EncodingKey::from_secret(jwt_secret.as_ref()),
    )
    .map_err(|_| AppError::AuthError(AuthError::InvalidToken))
}

pub fn decode_jwt(jwt: String) -> Result<TokenData<Claims>, AppError> {
    let jwt_secret = std::env::var("JWT_SECRET")
        .map_err(|_| AppError::SystemError(SystemError::EnvVarMissing("JWT_SECRET".to_string())))?;

    decode(
        &jwt,
        &DecodingKey::from_secret(jwt_secret.as_ref()),
        &Validation::default(),
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
            AppError::AuthError(AuthError::TokenExpired)
        }
        _ => AppError::AuthError(AuthError::InvalidToken),
    })
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|_| AppError::SystemError(SystemError::Internal("密碼驗證處理失敗".to_string())))
}

pub fn _hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|_| AppError::SystemError(SystemError::Internal("密碼哈希失敗".to_string())))
}
