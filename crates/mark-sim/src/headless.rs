//! Headless full-stack tests.
//!
//! Drives the complete rover scene (teleop, camera switching, follow camera)
//! frame by frame with no window, using a bare keyboard resource.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use mark_core::config::RigConfig;
    use mark_core::frame::FrameCount;
    use mark_core::types::{CameraSlot, JointRole};
    use mark_teleop::{TeleopCommander, TeleopKey};
    use mark_test_utils::{hold_keys, release_keys, tap_key};
    use mark_record::Recorder;
    use mark_viz::CameraFeed;

    use crate::builder::{SceneBuilder, SpawnedScene};
    use crate::stats::SessionStats;

    fn scene() -> SpawnedScene {
        SceneBuilder::new().build().unwrap()
    }

    fn approx(actual: Option<f32>, expected: f32) -> bool {
        actual.is_some_and(|v| (v - expected).abs() < 1e-4)
    }

    fn assert_one_camera(scene: &SpawnedScene) {
        let enabled = CameraSlot::ALL
            .into_iter()
            .filter(|&slot| scene.camera_enabled(slot))
            .count();
        assert_eq!(enabled, 1);
    }

    // -------------------------------------------------------------------
    // Teleop
    // -------------------------------------------------------------------

    #[test]
    fn holding_forward_for_n_frames_adds_n() {
        let mut scene = scene();
        hold_keys(&mut scene.app, &[KeyCode::KeyW]);
        for _ in 1..40 {
            scene.app.update();
        }

        assert!(approx(scene.target(JointRole::LeftWheel), 40.0));
        assert!(approx(scene.target(JointRole::RightWheel), 40.0));
        assert_eq!(scene.app.world().resource::<FrameCount>().get(), 40);
    }

    #[test]
    fn release_stops_accumulation() {
        let mut scene = scene();
        hold_keys(&mut scene.app, &[KeyCode::KeyD]);
        scene.app.update();
        release_keys(&mut scene.app, &[KeyCode::KeyD]);
        scene.app.update();

        assert!(approx(scene.target(JointRole::RightWheel), 2.0));
        assert!(approx(scene.target(JointRole::LeftWheel), 0.0));
    }

    #[test]
    fn forward_and_turn_left_compose() {
        let mut scene = scene();
        hold_keys(&mut scene.app, &[KeyCode::KeyW, KeyCode::KeyA]);
        for _ in 1..5 {
            scene.app.update();
        }

        assert!(approx(scene.target(JointRole::LeftWheel), 10.0));
        assert!(approx(scene.target(JointRole::RightWheel), 5.0));

        let stats = scene.app.world().resource::<SessionStats>();
        assert_eq!(stats.frames_driven, 5);
        assert_eq!(stats.held(TeleopKey::Forward), 5);
        assert_eq!(stats.held(TeleopKey::TurnLeft), 5);
    }

    #[test]
    fn forward_and_backward_cancel() {
        let mut scene = scene();
        hold_keys(&mut scene.app, &[KeyCode::KeyW, KeyCode::KeyS]);

        assert!(approx(scene.target(JointRole::LeftWheel), 0.0));
        assert!(approx(scene.target(JointRole::RightWheel), 0.0));
    }

    #[test]
    fn arrows_and_gripper_keys() {
        let mut scene = scene();
        hold_keys(
            &mut scene.app,
            &[KeyCode::ArrowUp, KeyCode::ArrowRight, KeyCode::KeyP],
        );
        scene.app.update();

        assert!(approx(scene.target(JointRole::CameraTilt), -2.0));
        assert!(approx(scene.target(JointRole::CameraPan), -2.0));
        assert!(approx(scene.target(JointRole::GripperLeft), 2.0));
        assert!(approx(scene.target(JointRole::GripperRight), 2.0));
        assert!(approx(scene.target(JointRole::LeftWheel), 0.0));
    }

    #[test]
    fn configured_speeds_reach_the_mapper() {
        let mut scene = SceneBuilder::new()
            .with_config(RigConfig {
                driving_speed: 0.5,
                camera_speed: 0.25,
                ..RigConfig::default()
            })
            .build()
            .unwrap();
        hold_keys(&mut scene.app, &[KeyCode::KeyW, KeyCode::ArrowLeft]);
        scene.app.update();

        assert!(approx(scene.target(JointRole::LeftWheel), 1.0));
        assert!(approx(scene.target(JointRole::CameraPan), 0.5));
    }

    #[test]
    fn disabled_teleop_ignores_keys() {
        let mut scene = SceneBuilder::new()
            .with_config(RigConfig {
                teleop_enabled: false,
                ..RigConfig::default()
            })
            .build()
            .unwrap();
        hold_keys(&mut scene.app, &[KeyCode::KeyW, KeyCode::KeyO]);
        scene.app.update();

        for role in JointRole::ALL {
            assert!(approx(scene.target(role), 0.0));
        }
    }

    #[test]
    fn remote_command_codes_drive_joints() {
        let mut scene = SceneBuilder::new().with_keyboard(false).build().unwrap();
        scene
            .app
            .world_mut()
            .resource_mut::<TeleopCommander>()
            .apply_key_states([(9, true), (5, true)]);

        for _ in 0..3 {
            scene.app.update();
        }

        assert!(approx(scene.target(JointRole::GripperLeft), -3.0));
        assert!(approx(scene.target(JointRole::GripperRight), -3.0));
        assert!(approx(scene.target(JointRole::CameraTilt), -3.0));
    }

    #[test]
    fn held_key_outlasts_remote_release() {
        let mut scene = scene();
        hold_keys(&mut scene.app, &[KeyCode::KeyW]);
        scene
            .app
            .world_mut()
            .resource_mut::<TeleopCommander>()
            .apply_key_states([(1, false)]);

        for _ in 0..3 {
            scene.app.update();
        }

        assert!(approx(scene.target(JointRole::LeftWheel), 4.0));
        assert!(approx(scene.target(JointRole::RightWheel), 4.0));
    }

    #[test]
    fn remote_and_keyboard_hold_same_input() {
        let mut scene = scene();
        scene
            .app
            .world_mut()
            .resource_mut::<TeleopCommander>()
            .apply_key_states([(1, true)]);
        hold_keys(&mut scene.app, &[KeyCode::KeyW]);
        release_keys(&mut scene.app, &[KeyCode::KeyW]);

        // The remote still holds Forward once the key is up; no double count.
        assert!(approx(scene.target(JointRole::LeftWheel), 2.0));
        scene.app.update();
        assert!(approx(scene.target(JointRole::LeftWheel), 3.0));
    }

    // -------------------------------------------------------------------
    // Cameras
    // -------------------------------------------------------------------

    #[test]
    fn camera_keys_switch_views() {
        let mut scene = scene();
        scene.app.update();
        assert!(scene.camera_enabled(CameraSlot::TopDown));
        assert_one_camera(&scene);

        for key in [KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit1] {
            tap_key(&mut scene.app, key);
            assert_one_camera(&scene);
        }

        assert!(scene.camera_enabled(CameraSlot::TopDown));
        assert!(!scene.camera_enabled(CameraSlot::Mark));
        assert_eq!(
            scene.app.world().resource::<SessionStats>().camera_switches,
            2
        );
    }

    #[test]
    fn camera_switch_and_driving_are_independent() {
        let mut scene = scene();
        hold_keys(&mut scene.app, &[KeyCode::KeyW]);
        tap_key(&mut scene.app, KeyCode::Digit2);

        assert!(scene.camera_enabled(CameraSlot::Mark));
        assert!(approx(scene.target(JointRole::LeftWheel), 2.0));
    }

    #[test]
    fn extra_feed_does_not_break_single_active_camera() {
        let mut scene = scene();
        scene
            .app
            .world_mut()
            .spawn(CameraFeed::new(CameraSlot::TopDown));

        for key in [KeyCode::Digit2, KeyCode::Digit1] {
            tap_key(&mut scene.app, key);
            let mut feeds = scene.app.world_mut().query::<&CameraFeed>();
            let enabled = feeds
                .iter(scene.app.world())
                .filter(|feed| feed.enabled)
                .count();
            assert_eq!(enabled, 1);
        }
        assert!(scene.camera_enabled(CameraSlot::TopDown));
    }

    // -------------------------------------------------------------------
    // Follow camera
    // -------------------------------------------------------------------

    #[test]
    fn follow_camera_tracks_base_at_fixed_height() {
        let mut scene = SceneBuilder::new()
            .with_config(RigConfig {
                top_down_height: 2.0,
                ..RigConfig::default()
            })
            .build()
            .unwrap();
        scene
            .app
            .world_mut()
            .get_mut::<Transform>(scene.base)
            .unwrap()
            .translation = Vec3::new(3.0, 5.0, 7.0);
        scene.app.update();

        assert_eq!(
            scene.camera_position(CameraSlot::TopDown),
            Some(Vec3::new(3.0, 2.0, 7.0))
        );
    }

    #[derive(Resource)]
    struct BaseEntity(Entity);

    fn drift_base(base: Res<BaseEntity>, mut transforms: Query<&mut Transform>) {
        if let Ok(mut transform) = transforms.get_mut(base.0) {
            transform.translation += Vec3::new(1.0, 0.5, -1.0);
        }
    }

    #[test]
    fn follow_camera_has_no_frame_lag() {
        let mut scene = scene();
        scene.app.insert_resource(BaseEntity(scene.base));
        scene.app.add_systems(Update, drift_base);

        for frame in 1_u8..=5 {
            scene.app.update();
            let step = f32::from(frame);
            assert_eq!(
                scene.camera_position(CameraSlot::TopDown),
                Some(Vec3::new(step, 10.0, -step))
            );
        }
    }

    #[test]
    fn unassigned_follow_camera_stays_put() {
        let mut scene = SceneBuilder::new().with_follow_base(false).build().unwrap();
        scene
            .app
            .world_mut()
            .get_mut::<Transform>(scene.base)
            .unwrap()
            .translation = Vec3::new(9.0, 0.0, 9.0);

        for _ in 0..10 {
            scene.app.update();
        }

        assert_eq!(
            scene.camera_position(CameraSlot::TopDown),
            Some(Vec3::new(0.0, 10.0, 0.0))
        );
    }

    // -------------------------------------------------------------------
    // Recording
    // -------------------------------------------------------------------

    #[test]
    fn recorder_samples_held_inputs_and_targets() {
        let dir = std::env::temp_dir().join(format!("mark_test_sim_record_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let mut scene = scene();
        scene.app.insert_resource(Recorder::create(&dir).unwrap());
        hold_keys(&mut scene.app, &[KeyCode::KeyA]);
        release_keys(&mut scene.app, &[KeyCode::KeyA]);

        let mut recorder = scene.app.world_mut().remove_resource::<Recorder>().unwrap();
        recorder.finish().unwrap();
        assert_eq!(recorder.rows(), 2);

        let content = std::fs::read_to_string(dir.join("data.csv")).unwrap();
        let rows: Vec<Vec<&str>> = content
            .lines()
            .skip(1)
            .map(|line| line.split(',').collect())
            .collect();
        // key_2 is TurnLeft; left_wheel follows the ten key columns.
        assert_eq!((rows[0][0], rows[0][2], rows[0][11]), ("0", "1", "1.0"));
        assert_eq!((rows[1][0], rows[1][2], rows[1][11]), ("1", "0", "1.0"));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
