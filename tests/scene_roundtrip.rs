use std::f64::consts::FRAC_PI_2;

use extrude_rs::actions::{Action, ActionKind, RotationAxis, RotationOrigin};
use extrude_rs::shapes::{BezierShape, Polygon, ShapeKind};
use extrude_rs::{Point, PointSequence, Scene, SceneError, SceneState, Shape};

fn temp_dir(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "extrude_rs_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn quad() -> Polygon {
    let points: PointSequence = vec![
        Point::new(-10.0, -10.0, 0.0),
        Point::new(10.0, -10.0, 0.0),
        Point::new(10.0, 10.0, 2.5),
        Point::new(-10.0, 10.0, 2.5),
    ]
    .into();
    Polygon::from_points(points)
}

#[test]
fn save_then_open_reproduces_scene() {
    let tmp = temp_dir("save_open");
    std::fs::create_dir_all(&tmp).unwrap();
    let path = tmp.join("quad.scn");

    let mut scene = Scene::with_shape(quad());
    scene
        .storyboard_mut()
        .add_action(Action::translate(4.0, -2.0, 8.0, 16));
    scene.storyboard_mut().add_action(
        Action::rotate(FRAC_PI_2, RotationOrigin::Bottom, RotationAxis::Y, 9).alongside_previous(),
    );
    scene.save(&path).unwrap();

    let mut loaded = Scene::new();
    loaded.open(&path).unwrap();

    assert_eq!(loaded.shape().kind(), ShapeKind::Polygon);
    assert_eq!(loaded.shape().points(), scene.shape().points());

    let actions = loaded.storyboard().actions();
    assert_eq!(actions.len(), 2);
    match actions[0].kind() {
        ActionKind::Translate(t) => assert_eq!(t.delta, Point::new(4.0, -2.0, 8.0)),
        other => panic!("expected translate, got {:?}", other),
    }
    assert_eq!(actions[0].steps(), 16);
    assert!(!actions[0].with_previous());
    match actions[1].kind() {
        ActionKind::Rotate(r) => {
            assert_eq!(r.angle, FRAC_PI_2);
            assert_eq!(r.origin, RotationOrigin::Bottom);
            assert_eq!(r.axis, RotationAxis::Y);
        }
        other => panic!("expected rotate, got {:?}", other),
    }
    assert_eq!(actions[1].steps(), 9);
    assert!(actions[1].with_previous());

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn loaded_scene_plays_like_the_original() {
    let tmp = temp_dir("play_loaded");
    std::fs::create_dir_all(&tmp).unwrap();
    let path = tmp.join("bezier.scn");

    let mut bezier = BezierShape::new();
    bezier.add_anchor(0.0, 0.0, 20.0);
    bezier.add_anchor(40.0, 40.0, 20.0);
    bezier.add_anchor(80.0, 0.0, 20.0);
    let mut scene = Scene::with_shape(bezier);
    scene
        .storyboard_mut()
        .add_action(Action::scale(10.0, 10.0, 0.0, 5));
    scene.storyboard_mut().add_action(Action::translate(0.0, 0.0, 50.0, 5));
    scene.save(&path).unwrap();

    let mut loaded = Scene::load(&path).unwrap();
    assert_eq!(loaded.shape(), scene.shape());

    scene.play();
    loaded.play();
    while scene.tick() {
        assert!(loaded.tick());
    }
    assert!(!loaded.tick());
    assert_eq!(loaded.state(), SceneState::End);

    let expected = scene.storyboard().frames();
    let actual = loaded.storyboard().frames();
    assert_eq!(actual.len(), 11);
    assert_eq!(actual, expected);

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn failed_open_leaves_scene_untouched() {
    let tmp = temp_dir("bad_open");
    std::fs::create_dir_all(&tmp).unwrap();
    let path = tmp.join("bad.scn");

    // A valid polygon followed by an action with an unknown tag
    let mut bytes = Vec::new();
    Scene::with_shape(quad()).write_to(&mut bytes).unwrap();
    bytes.truncate(bytes.len() - 4);
    bytes.extend_from_slice(&1u32.to_le_bytes());
    bytes.extend_from_slice(&7i32.to_le_bytes());
    std::fs::write(&path, &bytes).unwrap();

    let mut scene = Scene::with_shape(BezierShape::new());
    scene
        .storyboard_mut()
        .add_action(Action::translate(1.0, 1.0, 1.0, 3));

    let err = scene.open(&path).unwrap_err();
    assert!(matches!(err, SceneError::Format(_)));
    assert_eq!(scene.shape().kind(), ShapeKind::Bezier);
    assert_eq!(scene.storyboard().action_count(), 1);

    assert!(matches!(
        scene.open(tmp.join("missing.scn")),
        Err(SceneError::Open { .. })
    ));
    assert_eq!(scene.shape(), &Shape::from(BezierShape::new()));

    std::fs::remove_dir_all(&tmp).ok();
}
