use actix_web::HttpResponse;

/**
 * @route   GET /health_check
 * @access  Public
 */
#[tracing::instrument(name = "Health check")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}
