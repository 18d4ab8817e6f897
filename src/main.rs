use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use divetrain_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config);

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(cors)
            .service(handlers::health_check)
            .service(handlers::start_session)
            .service(handlers::get_session)
            .service(handlers::record_answer)
            .service(handlers::go_to_next)
            .service(handlers::go_to_previous)
            .service(handlers::submit)
            .service(handlers::review)
            .service(handlers::discard_session)
            .service(handlers::list_tracks)
            .service(handlers::get_track)
            .service(handlers::tutor_message)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
