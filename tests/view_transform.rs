use eframe_sketch::ViewTransform;
use egui::{pos2, Pos2};
use kurbo::Affine;

const TOLERANCE: f64 = 1e-9;

fn is_identity(affine: Affine) -> bool {
    affine
        .as_coeffs()
        .iter()
        .zip(Affine::IDENTITY.as_coeffs())
        .all(|(a, b)| (a - b).abs() <= TOLERANCE)
}

fn assert_consistent(view: &ViewTransform) {
    let forward = view.world_to_screen_matrix();
    let inverse = view.screen_to_world_matrix();
    assert!(
        is_identity(forward * inverse),
        "forward * inverse is not identity: {:?}",
        forward * inverse
    );
    assert!(is_identity(inverse * forward));
}

fn assert_round_trip(view: &ViewTransform, screen: Pos2) {
    let back = view.world_to_screen(view.screen_to_world(screen));
    assert!((back - screen).length() < 1e-2, "{screen:?} came back as {back:?}");
}

#[test]
fn test_inverse_stays_exact_across_gestures() {
    let mut view = ViewTransform::default();
    assert_consistent(&view);

    let gestures: [(bool, Pos2, &[Pos2]); 4] = [
        (true, pos2(50.0, 60.0), &[pos2(80.0, 90.0), pos2(10.0, 400.0)]),
        (false, pos2(400.0, 100.0), &[pos2(350.0, 250.0), pos2(100.0, 500.0)]),
        (true, pos2(300.0, 300.0), &[pos2(310.0, 290.0)]),
        (false, pos2(100.0, 350.0), &[pos2(600.0, 120.0), pos2(-200.0, 100.0)]),
    ];

    for (is_pan, anchor, moves) in gestures {
        view.begin_gesture(anchor);
        for current in moves {
            let applied = if is_pan {
                view.pan(*current)
            } else {
                view.zoom_rotate(*current)
            };
            assert!(applied);
            assert_consistent(&view);
            assert_round_trip(&view, pos2(123.0, 456.0));
        }
        view.end_gesture();
    }

    view.reset();
    assert_consistent(&view);
    assert_eq!(view.world_to_screen_matrix(), Affine::IDENTITY);
}

#[test]
fn test_round_trip_without_mutation() {
    let mut view = ViewTransform::default();
    view.begin_gesture(pos2(300.0, 100.0));
    view.zoom_rotate(pos2(250.0, 380.0));
    view.end_gesture();

    for screen in [pos2(0.0, 0.0), pos2(640.0, 480.0), pos2(-30.0, 75.5)] {
        assert_round_trip(&view, screen);
    }
}

#[test]
fn test_gestures_after_end_are_ignored() {
    let mut view = ViewTransform::default();
    view.begin_gesture(pos2(10.0, 10.0));
    view.pan(pos2(20.0, 20.0));
    view.end_gesture();
    let before = view.world_to_screen_matrix();

    assert!(!view.pan(pos2(90.0, 90.0)));
    assert!(!view.zoom_rotate(pos2(400.0, 400.0)));
    assert_eq!(view.world_to_screen_matrix(), before);
}

#[test]
fn test_short_arm_never_changes_transform() {
    let mut view = ViewTransform::default();
    // pivot is (100, 100); this anchor is 50 away
    view.begin_gesture(pos2(130.0, 140.0));
    for current in [pos2(500.0, 500.0), pos2(0.0, 300.0), pos2(101.0, 99.0)] {
        assert!(!view.zoom_rotate(current));
        assert_eq!(view.world_to_screen_matrix(), Affine::IDENTITY);
    }
}
