mod config;

use actix_cors::Cors;
use actix_web::{guard, web, App, HttpResponse, HttpServer};
use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};
use config::ServerConfig;
use graphql::utilities::FormSessions;
use graphql::{build_schema, FormSchema};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

async fn index() -> &'static str {
    "Hello, signup-form!"
}

async fn graphql_playground() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

async fn graphql_request(schema: web::Data<FormSchema>, request: GraphQLRequest) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

fn init_tracing(config: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn cors(origin: Option<&str>) -> Cors {
    match origin {
        Some(origin) => Cors::default()
            .allowed_origin(origin)
            .allowed_methods(vec!["GET", "POST"])
            .allow_any_header(),
        None => Cors::permissive(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env();
    init_tracing(&config);

    let schema = build_schema(FormSessions::with_ttl(config.session_ttl));
    let cors_origin = config.cors_origin.clone();

    tracing::info!(
        host = %config.host,
        port = config.port,
        session_ttl_secs = config.session_ttl.as_secs(),
        "starting signup-form server"
    );

    HttpServer::new(move || {
        App::new()
            .wrap(cors(cors_origin.as_deref()))
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(schema.clone()))
            .route("/", web::get().to(index))
            .service(
                web::resource("/graphql")
                    .guard(guard::Post())
                    .to(graphql_request),
            )
            .service(
                web::resource("/graphql")
                    .guard(guard::Get())
                    .to(graphql_playground),
            )
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
