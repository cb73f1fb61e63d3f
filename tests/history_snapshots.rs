use eframe_sketch::{Curve, SnapshotHistory};
use egui::{pos2, Color32};

fn state(tag: usize) -> Vec<Curve> {
    (0..=tag)
        .map(|i| {
            let mut curve = Curve::new(pos2(i as f32, tag as f32), Color32::from_gray(i as u8), 1.0 + i as f32);
            curve.add_point(pos2(i as f32 + 10.0, tag as f32 + 10.0));
            curve
        })
        .collect()
}

#[test]
fn test_undo_then_redo_restores_latest_state() {
    for n in 1..=5 {
        let mut history = SnapshotHistory::new(5);
        for tag in 0..n {
            history.save(&state(tag));
        }

        for _ in 0..n - 1 {
            assert!(history.undo().is_some());
        }
        assert_eq!(history.current(), Some(state(0)));

        let mut latest = history.current();
        for _ in 0..n - 1 {
            latest = history.redo();
        }
        assert_eq!(latest, Some(state(n - 1)));
    }
}

#[test]
fn test_bounds_are_no_ops() {
    let mut history = SnapshotHistory::new(5);
    history.save(&state(0));
    history.save(&state(1));

    assert_eq!(history.redo(), None);
    assert_eq!(history.cursor(), 1);

    history.undo();
    assert_eq!(history.undo(), None);
    assert_eq!(history.cursor(), 0);
    assert_eq!(history.current(), Some(state(0)));
}

#[test]
fn test_snapshots_do_not_alias_live_curves() {
    let mut history = SnapshotHistory::new(5);
    let mut live = state(1);
    history.save(&live);

    live[0].set_color(Color32::RED);
    live[0].add_point(pos2(99.0, 99.0));
    live.pop();

    assert_eq!(history.current(), Some(state(1)));

    // restored copies are independent of the stored entry too
    let mut restored = history.current().unwrap();
    restored[1].set_stroke_width(40.0);
    assert_eq!(history.current(), Some(state(1)));
}

#[test]
fn test_new_edit_drops_redo_branch() {
    let mut history = SnapshotHistory::new(5);
    for tag in 0..4 {
        history.save(&state(tag));
    }
    history.undo();
    history.undo();
    history.save(&state(9));

    assert!(!history.can_redo());
    assert_eq!(history.len(), 3);
    assert_eq!(history.undo(), Some(state(1)));
}
