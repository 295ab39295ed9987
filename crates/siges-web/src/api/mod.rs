mod login;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

pub fn login_router() -> Router<AppState> {
    Router::new().route(
        "/login/personal-administrativo",
        get(login::login_info).post(login::login),
    )
}
