use super::{decode, unwrap_data};
use crate::http::ApiClient;
use crate::session::Session;
use shared_types::{AppError, LoginRequest, LoginResponse, Profile};

/// Exchange credentials for a token and persist the resulting session.
#[tracing::instrument(skip(client, password))]
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<Session, AppError> {
    let request = LoginRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
    };
    let payload = client.post_json("/auth/login", &request).await?;
    let response: LoginResponse = decode(payload)?;
    if response.access_token.is_empty() {
        return Err(AppError::decode("login response carried no access token"));
    }

    let session = Session::from_login(&response);
    session.persist(client.store().as_ref(), &response.access_token);
    tracing::info!(user_id = %session.user_id, role = %session.role, "signed in");
    Ok(session)
}

/// Tell the server the token is done with, then drop local state regardless.
pub async fn logout(client: &ApiClient) {
    if let Err(e) = client.post("/auth/logout").await {
        tracing::warn!(error = %e, "logout request failed; clearing local session anyway");
    }
    Session::clear(client.store().as_ref());
    tracing::info!("signed out");
}

pub async fn profile(client: &ApiClient) -> Result<Profile, AppError> {
    let payload = client.get("/users/me", &[]).await?;
    decode(unwrap_data(payload))
}
