use poem::{
    EndpointExt, Route, Server as PoemServer, endpoint::StaticFilesEndpoint,
    listener::TcpListener, middleware::Tracing,
};
use poem_openapi::OpenApiService;

use crate::{
    config::{app_config::AppConfig, static_config::StaticConfig},
    setup::dependency_injection::DependencyContainer,
};

pub struct Server;

impl Server {
    /// Builds the route tree: the API under `/api`, its docs, and the UI
    /// bundle as a catch-all when enabled.
    pub fn routes(
        container: DependencyContainer,
        public_addr: &str,
        static_files: &StaticConfig,
    ) -> Route {
        let api_service = OpenApiService::new(
            (container.health_api, container.product_api),
            "Product Catalog API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}/api", public_addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();

        let mut app = Route::new()
            .nest("/api", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec);

        if static_files.enabled {
            app = app.nest(
                "/",
                StaticFilesEndpoint::new(&static_files.dir)
                    .index_file("index.html")
                    .fallback_to_index(),
            );
        }

        app
    }

    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::routes(container, &addr, &config.static_files)
            .with(config.cors)
            .with(Tracing);

        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        if config.static_files.enabled {
            tracing::info!("Serving UI bundle from {}", config.static_files.dir);
        }

        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
