use mindmash_core::map::{CollaborationMap, MapData, MapRepository};
use mindmash_infrastructure::JsonMapRepository;
use tempfile::TempDir;

#[tokio::test]
async fn test_save_and_load_map() {
    let temp_dir = TempDir::new().unwrap();
    let repo = JsonMapRepository::with_path(temp_dir.path().join("mindmash-map.json"));

    let mut map = MapData::default();
    map.connections.retain(|c| c.from == "user");
    repo.save(&map).await.expect("Should save map");

    let loaded = repo.load().await.expect("Should load map");
    assert_eq!(loaded, map);
    assert_eq!(loaded.connections.len(), 4);
}

#[tokio::test]
async fn test_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let repo = JsonMapRepository::with_path(temp_dir.path().join("nothing.json"));

    let err = repo.load().await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_malformed_file_leaves_map_unchanged() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    std::fs::write(&path, r#"{"nodes": {}}"#).unwrap();
    let repo = JsonMapRepository::with_path(&path);

    let mut map = CollaborationMap::default();
    map.set_active("gemini");
    let before = map.data().clone();

    match repo.load().await {
        Ok(data) => map.replace(data),
        Err(e) => assert!(e.is_invalid_map(), "unexpected error: {e}"),
    }

    assert_eq!(map.data(), &before);
    assert_eq!(map.active_node().unwrap().id, "gemini");
}

#[tokio::test]
async fn test_load_file_written_by_hand() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("custom.json");
    std::fs::write(
        &path,
        r#"{
          "nodes": {
            "grok": {"id": "grok", "color": "green", "position": {"x": 0.9, "y": 0.1}, "name": "Grok"}
          },
          "connections": [{"from": "user", "to": "grok", "strength": 0.3}]
        }"#,
    )
    .unwrap();

    let loaded = JsonMapRepository::with_path(&path).load().await.unwrap();
    assert_eq!(loaded.nodes["grok"].color, "green");
    assert_eq!(loaded.connections[0].strength, 0.3);
}
