use dotenvy::dotenv;
use regdesk::app::{self, features::resend_qr::ResendStep, AppState, APP_NAME};
use regdesk::EditorEvent;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type Input = Lines<BufReader<Stdin>>;

/// Print a prompt and read one line. `None` on end of input.
async fn ask(lines: &mut Input, prompt: &str) -> std::io::Result<Option<String>> {
    println!("{}", prompt);
    Ok(lines.next_line().await?.map(|l| l.trim_end().to_string()))
}

#[tokio::main]
async fn main() {
    // Load .env file (silently ignore if missing)
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_PKG_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = app::config::Config::from_env().unwrap_or_else(|e| {
        tracing::error!("Failed to load config: {}", e);
        std::process::exit(1);
    });

    let state = AppState::from_config(config).await.unwrap_or_else(|e| {
        tracing::error!("Failed to initialize: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = run(&state).await {
        tracing::error!("Console input failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(state: &AppState) -> std::io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut flow = state.new_flow();
    println!("== {} ==", APP_NAME);

    loop {
        match flow.step() {
            ResendStep::Search => {
                let Some(raw) = ask(&mut lines, "Número de cédula:").await? else {
                    return Ok(());
                };
                flow.set_identity_input(&raw);
                if let Err(e) = flow.search(state.registry.as_ref()).await {
                    println!("  {}", e);
                    continue;
                }
                if let Some(found) = flow.found() {
                    println!("¡Usuario encontrado! Hola {}", found.full_name());
                    println!("  Teléfono: {}", found.phone);
                }
            }
            ResendStep::Edit => {
                let options: Vec<String> = flow
                    .editor()
                    .domains()
                    .options()
                    .into_iter()
                    .map(|(value, _)| value.to_string())
                    .collect();
                println!(
                    "Correo: {}   (dominios: {})",
                    flow.editor().preview(flow.email_parts()),
                    options.join(" ")
                );
                let prompt = "Escribe el usuario, elige un dominio, 'enviar' o 'volver':";
                let Some(line) = ask(&mut lines, prompt).await? else {
                    return Ok(());
                };
                let result = match line.as_str() {
                    "enviar" => flow.resend(state.registry.as_ref()).await,
                    "volver" => {
                        flow.reset();
                        Ok(())
                    }
                    value if options.iter().any(|o| o == value) => flow.select_domain(value).map(|_| ()),
                    value => flow.edit_email(EditorEvent::Input(value.to_string())).map(|_| ()),
                };
                if let Err(e) = result {
                    println!("  {}", e);
                }
            }
            ResendStep::Success => {
                if let Some(to) = flow.sent_to() {
                    println!("¡QR reenviado! Enviado a: {}", to);
                    println!("Revisa tu bandeja de entrada y carpeta de spam.");
                }
                let Some(line) = ask(&mut lines, "¿Buscar otro usuario? (s/n)").await? else {
                    return Ok(());
                };
                if !line.eq_ignore_ascii_case("s") {
                    return Ok(());
                }
                flow.reset();
            }
        }
    }
}
