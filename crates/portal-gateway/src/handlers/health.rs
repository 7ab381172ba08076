use crate::model::PongResponse;
use axum::Json;

pub async fn pong_handler() -> Json<PongResponse> {
    Json(PongResponse { message: "pong" })
}
