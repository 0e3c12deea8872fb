//! Degraded startup: missing or broken content files

mod helpers;

use helpers::*;
use FuriaBot::handlers::sections::{matches, quiz, results, roster, stats, trivia};
use FuriaBot::handlers::{reply_to_text, MenuAction};
use FuriaBot::ContentStore;

fn fallback_for(action: MenuAction) -> &'static str {
    match action {
        MenuAction::UpcomingMatches => matches::UNAVAILABLE,
        MenuAction::PastResults => results::UNAVAILABLE,
        MenuAction::Roster => roster::UNAVAILABLE,
        MenuAction::TeamStats => stats::UNAVAILABLE,
        MenuAction::Quiz => quiz::UNAVAILABLE,
        MenuAction::Trivia => trivia::UNAVAILABLE,
    }
}

#[tokio::test]
async fn test_missing_file_serves_every_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let document = ContentStore::new(dir.path().join("nope.json")).load().await;
    assert!(document.is_empty());

    let ctx = context_with(document);
    for action in MenuAction::ALL {
        let reply = reply_to_text(&ctx, test_user_id(), action.label()).await;
        assert_eq!(reply.text, fallback_for(action));
    }
}

#[tokio::test]
async fn test_malformed_file_serves_every_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_content(dir.path(), "[ this is not json");
    let ctx = context_with(ContentStore::new(path).load().await);

    for action in MenuAction::ALL {
        assert_eq!(reply_to_text(&ctx, 1, action.label()).await.text, fallback_for(action));
    }
}

#[tokio::test]
async fn test_sample_file_serves_every_section() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_content(dir.path(), SAMPLE_CONTENT);
    let ctx = context_with(ContentStore::new(path).load().await);

    for action in MenuAction::ALL {
        let reply = reply_to_text(&ctx, 1, action.label()).await;
        assert_ne!(reply.text, fallback_for(action), "{:?} fell back", action);
    }

    let stats_reply = reply_to_text(&ctx, 1, MenuAction::TeamStats.label()).await;
    assert!(stats_reply.text.contains("- Mirage: 64%\n- Nuke: 52%"));
}

#[tokio::test]
async fn test_absent_stats_section_is_exact_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_content(dir.path(), r#"{ "roster": [] }"#);
    let ctx = context_with(ContentStore::new(path).load().await);

    let reply = reply_to_text(&ctx, 1, MenuAction::TeamStats.label()).await;
    assert_eq!(reply.text, "📊 Statistics unavailable!");
}
