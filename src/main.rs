//! BudBuddy terminal chat
//!
//! Main application entry point

use anyhow::Context;
use tracing::{error, info};

use BudBuddy::{
    chat::ChatEngine,
    config::Settings,
    services::RecommendService,
    state::ProfileStorage,
    ui::{Console, Selection},
    utils::logging,
    BudBuddyError,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("failed to load configuration")?;
    settings.validate().context("invalid configuration")?;

    // Initialize logging; the guard must outlive the chat loop
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}", BudBuddy::info());

    let profile = ProfileStorage::new(&settings.storage);
    let mut console = Console::new(settings.chat.clone());

    // Age gate before anything else
    if settings.features.age_gate && !console.age_gate(&profile).await? {
        println!("No problem — come back another time.");
        info!("Age gate declined, exiting");
        return Ok(());
    }

    // Build the engine
    let recommender = RecommendService::new(&settings.api)?;
    let mut engine = ChatEngine::new(recommender)?;
    if settings.features.persist_experience {
        engine = engine.with_profile(profile);
    }

    let mut reply = engine.start()?;
    info!(session_id = %engine.context().session_id, "Chat session started");

    loop {
        console.show_reply(&reply).await;

        let selection = match console.read_selection(&reply.choices).await? {
            Selection::Choice(label) => label,
            Selection::Quit => break,
        };

        reply = match engine.handle_choice(&selection).await {
            Ok(next) => next,
            Err(BudBuddyError::InvalidChoice { .. }) => {
                // Shouldn't happen through the numbered menu, but typed
                // labels can miss; just show the menu again.
                println!("That option isn't on the menu right now.");
                continue;
            }
            Err(e) => {
                error!(error = %e, "Chat engine error");
                return Err(e.into());
            }
        };
    }

    println!("Bye!");
    info!("Chat session ended");
    Ok(())
}
