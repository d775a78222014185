use tokio::time::{Duration, Instant};
use typeflow_core::{Typewriter, TypewriterConfig};
use typeflow_queue::{EventQueue, Op};

#[tokio::test(start_paused = true)]
async fn test_json_script_executes_like_the_builder_form() {
    let script = r#"[
        {"PutText": "hi"},
        {"Standby": 5.0},
        {"Repeat": {"Times": 1}}
    ]"#;
    let ops: Vec<Op> = serde_json::from_str(script).unwrap();

    let mut queue = EventQueue::new(Typewriter::new(TypewriterConfig::default()).unwrap());
    queue.extend(ops);

    let start = Instant::now();
    queue.start().await.unwrap();

    assert_eq!(queue.typewriter().content(), "hihi");
    assert_eq!(start.elapsed(), Duration::from_millis(10));
}

#[test]
fn test_ops_round_trip_through_serde() {
    let ops = vec![
        Op::TypeText("abc".to_string()),
        Op::DeleteChars(None),
        Op::PresetTheme("dark".to_string()),
        Op::ClearHistory,
    ];

    let encoded = serde_json::to_string(&ops).unwrap();
    let decoded: Vec<Op> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, ops);
}

#[test]
fn test_settings_script_allows_partial_fields() {
    let op: Op = serde_json::from_str(r#"{"Settings": {"type_cps": 100.0}}"#).unwrap();
    match op {
        Op::Settings(settings) => {
            assert_eq!(settings.type_cps, Some(100.0));
            assert_eq!(settings.delete_cps, None);
            assert_eq!(settings.cursor, None);
        }
        other => panic!("unexpected op: {:?}", other),
    }
}
