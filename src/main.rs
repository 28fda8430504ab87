use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use vocera::bridge::Bridge;
use vocera::context::{PageContext, UserRole};
use vocera::speech::console::ConsoleVoice;
use vocera::store::{AuthState, CartLine, MemoryStore, StateStore, StoreSnapshot};
use vocera::transcript::types::TranscriptAlternative;
use vocera::ui::echo::EchoTree;
use vocera::VoicePipeline;

/// Line-oriented driver: each stdin line is treated as a recognized
/// utterance with one alternative. `:page /ruta`, `:login`, `:logout`
/// and `:reset` steer the simulated host; everything else goes through
/// the pipeline against console-backed collaborators.
#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    tracing::info!("vocera demo driver; escribe un comando de voz");

    let tree = EchoTree;
    let voice = ConsoleVoice::new();
    let store = MemoryStore::new(StoreSnapshot {
        cart: vec![CartLine {
            name: "chocolates surtidos".to_string(),
            quantity: 2,
            unit_price: 150.0,
        }],
        auth: AuthState::default(),
    });

    let mut pipeline = VoicePipeline::new();
    let mut page = PageContext::new("/");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }

        match line.split_once(' ') {
            Some((":page", route)) => {
                page.pathname = route.trim().to_string();
                println!("-- página: {}", page.pathname);
                continue;
            }
            _ => {}
        }
        match line.as_str() {
            ":quit" => break,
            ":login" => {
                page.is_authenticated = true;
                page.role = UserRole::Customer;
                let mut snapshot = store.snapshot();
                snapshot.auth = AuthState {
                    authenticated: true,
                    role: UserRole::Customer,
                    display_name: Some("Ana".to_string()),
                    email: Some("ana@example.com".to_string()),
                };
                store.set(snapshot);
                println!("-- sesión iniciada");
                continue;
            }
            ":logout" => {
                page.is_authenticated = false;
                page.role = UserRole::Visitor;
                let mut snapshot = store.snapshot();
                snapshot.auth = AuthState::default();
                store.set(snapshot);
                println!("-- sesión cerrada");
                continue;
            }
            ":reset" => {
                pipeline.reset_session();
                println!("-- sesión de voz reiniciada");
                continue;
            }
            _ => {}
        }

        let bridge = Bridge::new(&tree, &voice, Some(&store));
        let alternatives = [TranscriptAlternative::new(&line, 0.9)];
        match pipeline.handle_utterance(&alternatives, &page, &bridge).await {
            Some(outcome) => {
                println!(
                    "-- resultado: success={} action={}",
                    outcome.result().success,
                    outcome.result().action
                );
            }
            None => println!("-- nada que hacer"),
        }
    }
}
