// File: services/webicast_backend/src/main.rs
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use webicast_common::logging;
use webicast_config::load_config;

mod handlers;

use handlers::api_routes;

#[tokio::main]
async fn main() {
    logging::init();

    let config = Arc::new(load_config().expect("Failed to load config"));
    let gcal_state = webicast_gcal::routes::build_state(config.clone()).await;

    let api_router = api_routes(config.clone())
        .merge(webicast_gcal::routes::routes(gcal_state.clone()))
        .merge(webicast_mailer::routes::routes(config.clone()))
        .merge(webicast_import::routes::routes())
        .merge(webicast_flow::routes::routes(config.clone(), gcal_state.clone()));

    let mut app = Router::new()
        .nest("/api", api_router)
        .merge(webicast_gcal::routes::auth_routes(gcal_state));

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;
        use webicast_flow::doc::FlowApiDoc;
        use webicast_gcal::doc::GcalApiDoc;
        use webicast_import::doc::ImportApiDoc;
        use webicast_mailer::doc::MailerApiDoc;

        // Define the Merged OpenAPI Documentation struct
        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Webicast API",
                version = "0.1.0",
                description = "Webinar scheduling and notification API"
            ),
            components(),
            tags( (name = "Webicast", description = "Core service endpoints")),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        // Create the merged OpenAPI document
        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(GcalApiDoc::openapi());
        openapi_doc.merge(MailerApiDoc::openapi());
        openapi_doc.merge(ImportApiDoc::openapi());
        openapi_doc.merge(FlowApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");

        // Create the Swagger UI route, referencing the merged doc
        let swagger_ui =
            SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc.clone());
        app = app.merge(swagger_ui);
    }

    // The scheduling UI runs on its own dev server
    let app = app
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await.expect("Failed to bind");
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
