//! Translation endpoints. Behaviour varies with whether the caller is known.

use axum::Json;

use crate::dto::response::{HistoryResponse, UserInfo};
use crate::extractors::MaybeAuthUser;

/// GET /v1/translation/history
pub async fn history(MaybeAuthUser(ctx): MaybeAuthUser) -> Json<HistoryResponse> {
    Json(HistoryResponse {
        message: "success".to_string(),
        user: ctx.as_ref().map(UserInfo::from),
    })
}
