// tests/chat_transcript_tests.rs
// Chat transcript persistence and assistant reply handling

use realty_listings::web_app::chat::*;
use realty_listings::web_app::session::{MemoryStore, Session, SessionStore};
use serde_json::json;

fn structured_reply() -> serde_json::Value {
    json!({
        "description": "I found **2 units** near the river.",
        "has_units": true,
        "unit_result": [
            {
                "link": "http://localhost:3000/house/NC-104",
                "unit_info": {
                    "unit_code": "NC-104",
                    "project_name": "Nile Crest",
                    "unit_type": "Apartment",
                    "floor": 4,
                    "view": "River",
                    "total_area": 140.5,
                    "full_payment": 3250000.0,
                    "completion_date": "2027-06-30"
                }
            }
        ]
    })
}

#[test]
fn test_conversation_round_trips_through_store() {
    let store = MemoryStore::new();
    let mut transcript = ChatTranscript::new();

    let sent = transcript.push_user("  any villas with a pool?  ");
    assert_eq!(sent.as_deref(), Some("any villas with a pool?"));
    assert!(transcript.pending());

    transcript.push_reply(ChatBody::from_json(structured_reply()));
    assert!(!transcript.pending());
    transcript.save(&store);

    let restored = ChatTranscript::load(&store);
    assert_eq!(restored.messages(), transcript.messages());
    assert!(!restored.pending());

    match &restored.messages()[1].body {
        ChatBody::Reply(reply) => {
            assert!(reply.has_units);
            assert_eq!(reply.unit_result[0].unit_info.unit_code, "NC-104");
        }
        other => panic!("expected a structured reply, got {:?}", other),
    }
}

#[test]
fn test_unknown_reply_shape_is_kept_verbatim() {
    let body = ChatBody::from_json(json!({"answer": 42}));

    match &body {
        ChatBody::Unparsed(raw) => assert!(raw.contains("\"answer\":42")),
        other => panic!("expected Unparsed, got {:?}", other),
    }
    assert_eq!(ChatBody::from_json(json!("plain text")), ChatBody::Text("plain text".into()));
}

#[test]
fn test_error_reply_is_flagged_and_clears_pending() {
    let mut transcript = ChatTranscript::new();
    transcript.push_user("hello");

    transcript.push_error("An error occurred");

    let last = transcript.messages().last().unwrap();
    assert!(last.is_error);
    assert_eq!(last.from, Sender::Assistant);
    assert!(!transcript.pending());
    assert!(transcript.push_user("again").is_some());
}

#[test]
fn test_corrupt_and_missing_data_load_empty() {
    let store = MemoryStore::new();
    assert!(ChatTranscript::load(&store).is_empty());

    store.save(CHAT_STORAGE_KEY, "[{\"id\": 1}]");
    assert!(ChatTranscript::load(&store).is_empty());

    store.save(CHAT_STORAGE_KEY, "{not json");
    assert!(ChatTranscript::load(&store).is_empty());
}

#[test]
fn test_clear_and_logout_remove_transcript() {
    let store = MemoryStore::new();
    let session = Session::new(store.clone());
    let mut transcript = ChatTranscript::new();
    transcript.push_user("hi");
    transcript.push_reply(ChatBody::Text("hello".into()));
    transcript.save(session.store());
    assert!(store.load(CHAT_STORAGE_KEY).is_some());

    transcript.clear(session.store());
    assert!(transcript.is_empty());
    assert!(store.load(CHAT_STORAGE_KEY).is_none());

    transcript.push_user("hi again");
    transcript.save(session.store());
    session.logout();
    assert!(store.load(CHAT_STORAGE_KEY).is_none());
}

#[test]
fn test_format_chat_text() {
    let cases = [
        ("**Price**: 2M", "<strong>Price</strong>: 2M"),
        ("a < b & c", "a &lt; b &amp; c"),
        ("line one\nline two", "line one<br>line two"),
        ("para one\n\npara two", "para one<br><br>para two"),
        ("<script>alert(1)</script>", "&lt;script&gt;alert(1)&lt;/script&gt;"),
    ];

    for (input, expected) in cases {
        assert_eq!(format_chat_text(input), expected, "input: {:?}", input);
    }
}

#[test]
fn test_format_chat_text_links_open_in_new_tab() {
    let html = format_chat_text("See https://example.com/units?id=7 for details");

    assert!(html.contains(r#"<a href="https://example.com/units?id=7" target="_blank""#));
    assert!(html.contains(r#"rel="noopener noreferrer""#));
    assert!(html.ends_with("</a> for details"));
}
