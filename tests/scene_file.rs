//! Integration tests for the shipped scene file

use starlab::config::AppConfig;
use starlab::demo::{Demo, SceneDemo};
use starlab::scene::StarScene;

#[test]
fn test_shipped_scene_matches_builtin() {
    let scene = StarScene::load(AppConfig::default().scene.path).unwrap();
    assert_eq!(scene, StarScene::builtin());
}

#[test]
fn test_scene_demo_draws_every_star() {
    let demo = SceneDemo::from_config(&AppConfig::default());
    let batches = demo.batches();
    assert_eq!(batches.len(), 5);
    assert!(batches.iter().all(|b| b.primitive_count() > 0));
}
