include!("../../lib.rs");

use crate::core::controller::AppState;
use crate::core::repository::RepositoryStore;
use crate::session::factory::create_session;
use crate::utils::trace::setup_tracing;

#[tokio::main]
async fn main() {
    setup_tracing();

    let state = AppState::new("main", RepositoryStore::InMemory);
    let stdin = std::io::stdin();
    let mut session = create_session(&state, stdin.lock(), std::io::stdout()).await;
    if let Err((code, message)) = session.run().await {
        eprintln!("{}", message);
        std::process::exit(code);
    }
}
