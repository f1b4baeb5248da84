//! HTTP handlers and route configuration.

mod health;
mod posts;
mod users;
mod views;


use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            // `/me` is registered ahead of `/{id}` so it is not parsed as an id
            .service(
                web::scope("/users")
                    .route("", web::post().to(users::create_user))
                    .route("/me", web::get().to(users::get_my_info))
                    .route("/me", web::put().to(users::update_my_info))
                    .route("/{id}", web::get().to(users::get_user_by_id))
                    .route("/{id}/verify", web::get().to(users::verify_email)),
            )
            .service(
                web::scope("/posts")
                    .route("", web::post().to(posts::create_post))
                    .route("/{id}", web::get().to(posts::get_post_by_id))
                    .route("/{id}", web::put().to(posts::update_post)),
            ),
    );
}
