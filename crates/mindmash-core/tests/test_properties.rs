use mindmash_core::category::{Category, determine_category};
use mindmash_core::command::{CommandKind, parse_commands, render_html};
use mindmash_core::map::{CollaborationMap, MapData};
use mindmash_core::persona::SYSTEM_ID;
use mindmash_core::response::{FALLBACK_RESPONSE, ResponseDatabase, get_ai_response};
use rand::SeedableRng;
use rand::rngs::StdRng;
use strum::IntoEnumIterator;

#[test]
fn test_text_without_keywords_is_general() {
    for text in [
        "",
        "hello there",
        "what a lovely afternoon",
        "codex artistry datastore",
        "12345 !!! ???",
    ] {
        assert_eq!(determine_category(text), Category::General, "{text:?}");
    }
}

#[test]
fn test_missing_table_entries_fall_back_to_system_general() {
    let db = ResponseDatabase::builtin();
    let system_general = db.responses(SYSTEM_ID, Category::General).unwrap();

    for persona in ["nobody", "claude", ""] {
        for category in Category::iter() {
            let response = get_ai_response(persona, category, &[] as &[&str]);
            assert!(
                system_general.contains(&response) || response == FALLBACK_RESPONSE,
                "{persona}/{category}: {response}"
            );
        }
    }

    // grok has no educational entries, so its general table answers.
    let grok_general = db.responses("grok", Category::General).unwrap();
    let response = get_ai_response("grok", Category::Educational, &[] as &[&str]);
    assert!(grok_general.contains(&response));
}

#[test]
fn test_previously_used_is_avoided_until_exhausted() {
    let db = ResponseDatabase::builtin();
    let mut rng = StdRng::seed_from_u64(99);

    for persona in db.persona_ids() {
        for category in Category::iter() {
            let pool = db.candidates(persona, category).unwrap().to_vec();

            // Everything but the last entry is used: the last one must come back.
            let used = &pool[..pool.len() - 1];
            for _ in 0..8 {
                let picked = db.select(persona, category, used, &mut rng);
                assert!(!used.contains(&picked), "{persona}/{category} repeated {picked}");
            }

            // The whole pool is used: any entry is acceptable.
            let picked = db.select(persona, category, &pool, &mut rng);
            assert!(pool.contains(&picked));
        }
    }
}

#[test]
fn test_pin_command() {
    let commands = parse_commands("/pin hello world");
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].kind, CommandKind::Pin);
    assert_eq!(commands[0].processed_text(), "hello world");
}

#[test]
fn test_hashtag_and_mention_commands() {
    let commands = parse_commands("check #ai and @bob");
    let kinds: Vec<_> = commands.iter().map(|c| c.kind).collect();
    assert_eq!(kinds, [CommandKind::Hashtag, CommandKind::Mention]);
    assert_eq!(commands[0].hashtags(), ["ai"]);
    assert_eq!(commands[1].mentions(), ["bob"]);

    let html = render_html(&commands[1].tokens);
    assert!(html.contains(r#"text-cyan-400 hover:underline cursor-pointer">#ai</span>"#));
    assert!(html.contains(r#"text-fuchsia-400 hover:underline cursor-pointer">@bob</span>"#));
}

#[test]
fn test_plain_text_command() {
    let commands = parse_commands("plain text");
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].kind, CommandKind::None);
    assert_eq!(commands[0].processed_text(), "plain text");
}

#[test]
fn test_map_without_connections_is_rejected() {
    let mut map = CollaborationMap::default();
    map.set_active("chatgpt");
    let before = map.data().clone();

    let err = map
        .load_json(r#"{"nodes": {"solo": {"id": "solo", "color": "red", "position": {"x": 0, "y": 0}, "name": "Solo"}}}"#)
        .unwrap_err();

    assert!(err.is_invalid_map());
    assert_eq!(map.data(), &before);
    assert_eq!(map.data(), &MapData::default());
    assert_eq!(map.active_node().unwrap().id, "chatgpt");
}

#[test]
fn test_database_query_is_technical() {
    assert_eq!(
        determine_category("How do I optimize this database query?"),
        Category::Technical
    );
}
