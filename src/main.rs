use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use career_match::config::Settings;
use career_match::core::{Matcher, ResumeParser, SkillExtractor, SkillLexicon};
use career_match::models::ScoringWeights;
use career_match::routes::{self, resume::json_error_handler, AppState};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str, format: &str) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

fn load_lexicon(path: Option<&str>) -> std::io::Result<SkillLexicon> {
    match path {
        Some(path) => SkillLexicon::load(path).map_err(|e| {
            error!("Failed to load skill lexicon from {}: {}", path, e);
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        }),
        None => Ok(SkillLexicon::default()),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            // Logging is configured from settings, so report on stderr
            eprintln!("Configuration error: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging.level, &settings.logging.format);

    info!("Starting Career Match service...");

    let lexicon = load_lexicon(settings.lexicon.path.as_deref())?;
    let extractor = Arc::new(SkillExtractor::new(Arc::new(lexicon)));
    let parser = Arc::new(ResumeParser::new(extractor));

    info!(
        "Resume parser ready ({} skills, source: {})",
        parser.extractor().lexicon().len(),
        settings.lexicon.path.as_deref().unwrap_or("built-in")
    );

    let weights = ScoringWeights::from(&settings.scoring.weights);
    let matcher = Matcher::new(weights);

    info!("Matcher initialized with weights: {:?}", weights);

    let app_state = AppState {
        parser,
        matcher,
        matching: settings.matching.clone(),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
