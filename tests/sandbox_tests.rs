use verlet_sandbox::{Command, Mode, NoOpStepObserver, Press, Release, Sandbox, SimConfig, Vec2, GridConfig};

fn sandbox() -> Sandbox<f32> {
    Sandbox::new(SimConfig::new()).unwrap()
}

#[test]
fn click_places_then_drag_links() {
    let mut s = sandbox();
    let a = match s.press(Vec2::new(100.0, 100.0)) {
        Press::Placed(h) => h,
        other => panic!("expected a placement, got {:?}", other),
    };
    assert_eq!(s.release(Vec2::new(100.0, 100.0)), Release::Nothing);
    let b = match s.press(Vec2::new(200.0, 100.0)) {
        Press::Placed(h) => h,
        other => panic!("expected a placement, got {:?}", other),
    };
    s.release(Vec2::new(200.0, 100.0));

    assert_eq!(s.press(Vec2::new(102.0, 101.0)), Press::LinkStarted(a));
    let preview = s.drag_preview(Vec2::new(150.0, 120.0));
    assert_eq!(preview, Some((Vec2::new(100.0, 100.0), Vec2::new(150.0, 120.0))));

    match s.release(Vec2::new(199.0, 100.0)) {
        Release::Linked(c) => {
            let link = s.scene().constraint(c).unwrap();
            assert_eq!((link.a(), link.b()), (a, b));
            assert!((link.rest_length() - 100.0).abs() < 1e-4);
        }
        other => panic!("expected a link, got {:?}", other),
    }
    assert_eq!(s.drag_preview(Vec2::new(0.0, 0.0)), None);
}

#[test]
fn press_on_rim_grabs_but_release_on_rim_misses() {
    let mut s = sandbox();
    s.press(Vec2::new(100.0, 100.0));
    s.release(Vec2::new(100.0, 100.0));
    s.press(Vec2::new(200.0, 100.0));
    s.release(Vec2::new(200.0, 100.0));

    // exactly one radius away: inclusive grab succeeds
    assert!(matches!(s.press(Vec2::new(105.0, 100.0)), Press::LinkStarted(_)));
    // exactly one radius away: strict release misses
    assert_eq!(s.release(Vec2::new(195.0, 100.0)), Release::Nothing);
    assert_eq!(s.scene().constraint_count(), 0);
    assert_eq!(s.scene().particle_count(), 2);
}

#[test]
fn release_on_start_particle_does_not_self_link() {
    let mut s = sandbox();
    s.press(Vec2::new(50.0, 50.0));
    s.release(Vec2::new(50.0, 50.0));
    assert!(matches!(s.press(Vec2::new(50.0, 50.0)), Press::LinkStarted(_)));
    assert_eq!(s.release(Vec2::new(51.0, 50.0)), Release::Nothing);
    assert_eq!(s.scene().constraint_count(), 0);
}

#[test]
fn simulate_mode_drag_cuts() {
    let mut s = sandbox();
    s.spawn_grid(&GridConfig::new(Vec2::new(100.0, 100.0), 2, 3, 40.0).with_pinned_top(1)).unwrap();
    let before = s.scene().constraint_count();
    s.apply(Command::TogglePhysics);
    assert_eq!(s.mode(), Mode::Simulate);

    // slanted stroke through the vertical gap between columns 0 and 1
    assert_eq!(s.press(Vec2::new(110.0, 80.0)), Press::CutStarted);
    assert_eq!(s.release(Vec2::new(130.0, 160.0)), Release::Cut(2));
    assert_eq!(s.scene().constraint_count(), before - 2);
}

#[test]
fn simulate_cut_may_start_on_a_particle() {
    let mut s = sandbox();
    let a = s.scene_mut().add_particle(Vec2::new(100.0, 100.0));
    let b = s.scene_mut().add_particle(Vec2::new(200.0, 200.0));
    s.scene_mut().add_constraint(a, b).unwrap();
    s.apply(Command::TogglePhysics);

    assert_eq!(s.press(Vec2::new(100.0, 100.0)), Press::CutStarted);
    assert_eq!(s.release(Vec2::new(200.0, 100.0)), Release::Cut(1));
    assert_eq!(s.scene().constraint_count(), 0);
    assert_eq!(s.scene().particle_count(), 2);
}

#[test]
fn right_click_pins_and_delete_cascades() {
    let mut s = sandbox();
    s.press(Vec2::new(10.0, 10.0));
    s.release(Vec2::new(10.0, 10.0));
    s.press(Vec2::new(60.0, 10.0));
    s.release(Vec2::new(60.0, 10.0));
    s.press(Vec2::new(10.0, 10.0));
    assert!(matches!(s.release(Vec2::new(60.0, 10.0)), Release::Linked(_)));

    assert_eq!(s.toggle_pin_at(Vec2::new(11.0, 10.0)), Some(true));
    assert_eq!(s.toggle_pin_at(Vec2::new(300.0, 300.0)), None);

    assert_eq!(s.delete_at(Vec2::new(60.0, 10.0)), 1);
    assert_eq!(s.scene().particle_count(), 1);
    assert_eq!(s.scene().constraint_count(), 0);
    assert_eq!(s.delete_at(Vec2::new(60.0, 10.0)), 0);
}

#[test]
fn delete_removes_every_overlapping_particle() {
    let mut s = sandbox();
    s.scene_mut().add_particle(Vec2::new(10.0, 10.0));
    s.scene_mut().add_particle(Vec2::new(11.0, 10.0));
    s.scene_mut().add_particle(Vec2::new(90.0, 10.0));
    assert_eq!(s.delete_at(Vec2::new(10.5, 10.0)), 2);
    assert_eq!(s.scene().particle_count(), 1);
}

#[test]
fn polyline_drops_linked_points_at_spacing() {
    let mut s = sandbox();
    assert!(s.extend_polyline(Vec2::new(0.0, 100.0)).is_some());
    assert!(s.extend_polyline(Vec2::new(10.0, 100.0)).is_none(), "too close to the last point");
    assert!(s.extend_polyline(Vec2::new(25.0, 100.0)).is_some());
    assert!(s.extend_polyline(Vec2::new(50.0, 100.0)).is_some());
    s.end_polyline();
    assert_eq!(s.scene().particle_count(), 3);
    assert_eq!(s.scene().constraint_count(), 2);

    // a new stroke starts unlinked
    s.extend_polyline(Vec2::new(300.0, 300.0));
    assert_eq!(s.scene().particle_count(), 4);
    assert_eq!(s.scene().constraint_count(), 2);
}

#[test]
fn polyline_restarts_when_last_point_is_deleted() {
    let mut s = sandbox();
    s.extend_polyline(Vec2::new(0.0, 100.0));
    s.extend_polyline(Vec2::new(30.0, 100.0));
    assert_eq!(s.delete_at(Vec2::new(30.0, 100.0)), 1);

    let fresh = s.extend_polyline(Vec2::new(60.0, 100.0)).unwrap();
    assert!(s.scene().constraints_of(fresh).is_empty());
    assert_eq!(s.scene().constraint_count(), 0);

    // the stroke carries on from the new particle
    let next = s.extend_polyline(Vec2::new(90.0, 100.0)).unwrap();
    assert_eq!(s.scene().constraints_of(next).len(), 1);
    assert_eq!(s.scene().constraint_count(), 1);
}

#[test]
fn polyline_is_disabled_while_simulating() {
    let mut s = sandbox();
    s.apply(Command::TogglePhysics);
    assert!(s.extend_polyline(Vec2::new(0.0, 0.0)).is_none());
    assert!(s.scene().is_empty());
}

#[test]
fn clear_resets_session() {
    let mut s = sandbox();
    s.press(Vec2::new(10.0, 10.0));
    s.apply(Command::TogglePhysics);
    s.apply(Command::TogglePoints);
    s.apply(Command::Clear);

    let status = s.status();
    assert_eq!(status.mode, Mode::Edit);
    assert!(status.show_points);
    assert_eq!(status.particles, 0);
    assert_eq!(status.constraints, 0);
}

#[test]
fn toggles_flip_status_flags() {
    let mut s = sandbox();
    assert!(s.status().bounce_enabled);
    s.apply(Command::ToggleBounce);
    assert!(!s.status().bounce_enabled);
    assert!(!s.status().show_options);
    s.apply(Command::ToggleOptions);
    assert!(s.status().show_options);
    s.apply(Command::IncreaseStiffness);
    assert_eq!(s.status().stiffness, 11);
}

#[test]
fn ticking_moves_only_in_simulate_mode() {
    let mut s = sandbox();
    let p = match s.press(Vec2::new(640.0, 100.0)) {
        Press::Placed(h) => h,
        other => panic!("expected a placement, got {:?}", other),
    };
    assert!(!s.tick(&mut NoOpStepObserver));
    s.apply(Command::TogglePhysics);
    for _ in 0..10 {
        assert!(s.tick(&mut NoOpStepObserver));
    }
    assert!(s.scene().particle(p).unwrap().pos.y > 100.0);
}
