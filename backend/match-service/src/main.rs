use anyhow::{Context, Result};
use tracing::{info, warn};

use match_service::config::{Config, DemoStep};
use match_service::context::AppContext;
use match_service::domain::models::UserId;
use match_service::domain::seed::sample_directory;
use match_service::events::EventSink;
use match_service::logging::init_tracing;
use match_service::screens::{chat, feed, people, ChatScreen, FeedScreen, PeopleScreen};
use match_service::services::discovery::{for_you, leaderboard};
use match_service::services::CardDeck;

fn run_people_screen(config: &Config, ctx: &mut AppContext, sink: EventSink) -> Result<()> {
    let deck = match config.session.shuffle_seed {
        Some(seed) => CardDeck::with_seed(seed),
        None => CardDeck::new(),
    };
    let mut screen = PeopleScreen::open(ctx, deck, sink.clone(), config.session.shuffle_on_load)?;

    for step in &config.demo.script {
        match *step {
            DemoStep::Swipe(direction) => {
                if !screen.controls_enabled() {
                    warn!(direction = %direction, "No card on top, swipe skipped");
                    continue;
                }
                let outcome = screen.swipe(ctx, direction)?;
                info!(
                    card = %outcome.profile.title(),
                    direction = %outcome.direction,
                    remaining = screen.deck().remaining(),
                    "Swiped"
                );
            }
            DemoStep::Undo => match screen.undo() {
                Some(outcome) => info!(
                    card = %outcome.profile.title(),
                    direction = %outcome.direction,
                    "Undo"
                ),
                None => info!("Nothing to undo"),
            },
            DemoStep::Shuffle => screen.shuffle(),
            DemoStep::Message => {
                if !screen.controls_enabled() {
                    warn!("No card on top, message skipped");
                    continue;
                }
                let conversation_id = screen.message_current(ctx)?;
                let thread = ChatScreen::open(ctx, conversation_id, sink.for_source(chat::SOURCE))?;
                thread.send(ctx, "hi there")?;
                let messages = thread.messages(ctx)?.len();
                info!(conversation_id = %conversation_id, messages, "Message sent");
            }
            DemoStep::Select => {
                if let Some(profile) = screen.select_current() {
                    info!(card = %profile.title(), "Card tapped");
                }
            }
        }
    }

    Ok(())
}

fn run_feed_screen(ctx: &mut AppContext, sink: EventSink) -> Result<()> {
    let screen = FeedScreen::open(sink);
    let post_ids: Vec<u32> = ctx.directory().posts().iter().map(|post| post.id).collect();

    for post_id in post_ids {
        let liked = !ctx.directory().post(post_id)?.liked_by_current_user;
        screen.toggle_like(ctx, post_id, liked)?;

        let likes = screen.likes_label(ctx, post_id)?.unwrap_or_default();
        let comments = screen.comments_label(ctx, post_id)?.unwrap_or_default();
        info!(post_id, liked, likes = %likes, comments = %comments, "Feed item");
    }

    if let Some(first) = ctx.directory().posts().first().map(|post| post.id) {
        screen.add_comment(ctx, first, "Looks great!")?;
    }

    Ok(())
}

fn report_discovery(ctx: &AppContext) -> Result<()> {
    let viewer = ctx.current_user()?;

    for user in for_you(ctx.directory().users(), viewer) {
        info!(name = %user.full_name(), "For you");
    }
    for (rank, user) in leaderboard(ctx.directory().users()).iter().enumerate() {
        info!(rank = rank + 1, name = %user.full_name(), likes = user.like_count(), "Leaderboard");
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(config.app.json_logs);

    info!("🔧 Starting match-service session");
    info!(
        env = %config.app.env,
        user_id = %config.session.current_user_id,
        shuffle_on_load = config.session.shuffle_on_load,
        steps = config.demo.script.len(),
        "Configuration loaded"
    );

    let mut ctx = AppContext::new(
        sample_directory(),
        UserId::new(config.session.current_user_id.clone()),
    )
    .context("Failed to start session")?;
    info!("✅ Session context created");

    let (sink, mut events) = EventSink::channel(people::SOURCE);
    run_people_screen(&config, &mut ctx, sink.clone())?;
    run_feed_screen(&mut ctx, sink.for_source(feed::SOURCE))?;
    report_discovery(&ctx)?;
    drop(sink);

    let mut delivered = 0usize;
    while let Some(envelope) = events.recv().await {
        delivered += 1;
        let payload = serde_json::to_string(&envelope.data)?;
        info!(
            source = %envelope.source,
            kind = envelope.data.kind(),
            payload = %payload,
            "Screen event"
        );
    }
    info!(delivered, "✅ Screen events drained");

    ctx.sign_out();
    Ok(())
}
