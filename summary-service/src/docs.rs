use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "AI Health Summary Service",
        description = "Generate concise medical summaries from OCR text",
        version = "1.0"
    ),
    paths(handlers::summarize::summarize, handlers::health::health_check),
    components(schemas(models::SummaryRequest, models::SummaryResponse)),
    tags(
        (name = "Summary", description = "OCR text summarization"),
        (name = "Observability", description = "Service health and monitoring"),
    )
)]
pub struct ApiDoc;
