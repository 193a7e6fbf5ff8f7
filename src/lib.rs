//! List views for day-offs and overtimes.
//!
//! The `data` feature exposes the reusable layer: the query filter
//! synchronizer ([`sync`]), transient alerts ([`toast`]) and the list
//! services. The `server` feature adds the Actix-web application that renders
//! the list pages the synchronizer binds to.

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
mod error_conversions;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod services;
#[cfg(feature = "data")]
pub mod sync;
#[cfg(feature = "data")]
pub mod toast;

#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;

#[cfg(feature = "server")]
pub use server::{configure, run};

#[cfg(feature = "server")]
mod server {
    use actix_files::Files;
    use actix_web::{App, HttpServer, middleware, web};
    use tera::Tera;

    use crate::models::config::ServerConfig;
    use crate::repository::JsonRepository;
    use crate::routes::day_off::show_day_offs;
    use crate::routes::main::index;
    use crate::routes::overtime::show_overtimes;

    /// Registers the list-page routes on an application or scope.
    pub fn configure(cfg: &mut web::ServiceConfig) {
        cfg.service(index)
            .service(show_day_offs)
            .service(show_overtimes);
    }

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let repo = JsonRepository::from_path(&server_config.records_path).map_err(|e| {
            std::io::Error::other(format!(
                "Failed to load records from {}: {e}",
                server_config.records_path
            ))
        })?;

        let tera = Tera::new(&server_config.templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

        let bind_address = (server_config.address.clone(), server_config.port);
        log::info!("Listening on {}:{}", bind_address.0, bind_address.1);

        HttpServer::new(move || {
            App::new()
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(Files::new("/assets", &server_config.assets_dir))
                .configure(configure)
                .app_data(web::Data::new(tera.clone()))
                .app_data(web::Data::new(repo.clone()))
                .app_data(web::Data::new(server_config.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
