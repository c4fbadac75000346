#![warn(clippy::all)]

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use polls::{
    clock::{Clock, SystemClock},
    config::Config,
    store::{QuestionStore, Store},
    types::{choice::NewChoice, question::NewQuestion},
};
use tracing_subscriber::fmt::format::FmtSpan;

fn seed_demo(store: &Store, now: DateTime<Utc>) -> Result<(), handle_errors::Error> {
    let demo = [
        ("What's up?", Duration::hours(-2), vec!["Not much", "The sky"]),
        ("Favourite language?", Duration::days(-3), vec!["Rust", "Something else"]),
        ("Coming soon?", Duration::days(7), vec!["Yes", "No"]),
    ];
    for (text, offset, choices) in demo {
        let question = store.create_question(NewQuestion {
            text: text.to_string(),
            pub_date: now + offset,
        });
        for choice in choices {
            store.add_choice(
                question.id,
                NewChoice {
                    text: choice.to_string(),
                },
            )?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load();

    tracing_subscriber::fmt()
        // Use the filter from the config to determine which traces to record.
        .with_env_filter(config.log_level.as_str())
        // Record an event when each span closes, which times our routes.
        .with_span_events(FmtSpan::CLOSE)
        .init();

    let store = Store::new();
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    if config.seed_demo {
        seed_demo(&store, clock.now())?;
        tracing::info!(count = store.all_questions().len(), "seeded demo questions");
    }

    let routes = polls::routes::build(store, clock);

    tracing::info!(address = %config.bind_address, "polls server listening");
    warp::serve(routes).run(config.bind_address).await;

    Ok(())
}
