use std::sync::Arc;

use clap::Parser;
use pgmastery::{catalog::Catalog, enroll::SheetSink, names, quiz::QuizSessions, AppState};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:1414")]
    address: String,

    /// Webhook URL of the enrollment spreadsheet. Enrollments stay PENDING
    /// when unset.
    #[arg(long, env)]
    sheet_url: Option<String>,

    /// WhatsApp number enrollment handoffs are addressed to.
    #[arg(long, env, default_value = names::DEFAULT_WHATSAPP_ADMIN)]
    whatsapp_admin: String,

    /// Mark cookies Secure. Enable behind TLS.
    #[arg(long, env, default_value_t = false)]
    secure_cookies: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,pgmastery=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let catalog = Catalog::load()?;
    tracing::info!(
        courses = catalog.courses.len(),
        posts = catalog.posts.len(),
        "catalog loaded"
    );

    let state = AppState {
        catalog: Arc::new(catalog),
        quizzes: QuizSessions::new(),
        sink: SheetSink::new(args.sheet_url),
        whatsapp_admin: args.whatsapp_admin,
        secure_cookies: args.secure_cookies,
    };

    let app = pgmastery::router(state);
    let listener = tokio::net::TcpListener::bind(&args.address).await?;
    tracing::info!("listening on {}", args.address);
    axum::serve(listener, app).await?;

    Ok(())
}
