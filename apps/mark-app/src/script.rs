//! Scripted keyboard replay for headless runs.
//!
//! A script is a comma-separated list of steps, each `KEYS*N`: the `+`-joined
//! keys are held for `N` frames (default 1). `idle` holds nothing.
//!
//! ```text
//! w*30, w+a*10, idle*5, 2, up*4, p*8
//! ```

use std::collections::HashSet;

use bevy::prelude::*;
use mark_core::error::ConfigError;

/// One script step: keys held together for a number of frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptStep {
    pub keys: Vec<KeyCode>,
    pub frames: u32,
}

fn invalid(message: String) -> ConfigError {
    ConfigError::InvalidValue {
        field: "script".into(),
        message,
    }
}

/// Keyboard key for a script key name.
pub fn key_from_name(name: &str) -> Option<KeyCode> {
    let key = match name.to_ascii_lowercase().as_str() {
        "w" => KeyCode::KeyW,
        "a" => KeyCode::KeyA,
        "s" => KeyCode::KeyS,
        "d" => KeyCode::KeyD,
        "up" => KeyCode::ArrowUp,
        "down" => KeyCode::ArrowDown,
        "left" => KeyCode::ArrowLeft,
        "right" => KeyCode::ArrowRight,
        "o" => KeyCode::KeyO,
        "p" => KeyCode::KeyP,
        "1" => KeyCode::Digit1,
        "2" => KeyCode::Digit2,
        _ => return None,
    };
    Some(key)
}

/// Parse a script into steps.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] for unknown key names, empty steps,
/// or a repeat count that is zero or not a number.
pub fn parse_script(script: &str) -> Result<Vec<ScriptStep>, ConfigError> {
    let mut steps = Vec::new();
    for raw in script.split(',') {
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }

        let (keys_part, frames) = match raw.rsplit_once('*') {
            Some((keys, count)) => {
                let frames: u32 = count
                    .trim()
                    .parse()
                    .map_err(|_| invalid(format!("bad repeat count in '{raw}'")))?;
                if frames == 0 {
                    return Err(invalid(format!("repeat count must be >= 1 in '{raw}'")));
                }
                (keys.trim(), frames)
            }
            None => (raw, 1),
        };

        let keys = if keys_part.eq_ignore_ascii_case("idle") {
            Vec::new()
        } else {
            keys_part
                .split('+')
                .map(|name| {
                    let name = name.trim();
                    key_from_name(name).ok_or_else(|| invalid(format!("unknown key '{name}'")))
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        steps.push(ScriptStep { keys, frames });
    }
    Ok(steps)
}

/// Replay `steps` against `app`, one `update` per frame.
///
/// Keys carried over between consecutive steps stay held; others are
/// released at the step boundary. With `frame_limit`, exactly that many
/// frames run. Returns the number of frames run.
pub fn replay(app: &mut App, steps: &[ScriptStep], frame_limit: Option<u32>) -> u32 {
    let mut held: HashSet<KeyCode> = HashSet::new();
    let mut frames = 0;
    let limit_reached = |frames: u32| frame_limit.is_some_and(|limit| frames >= limit);

    'steps: for step in steps {
        let next: HashSet<KeyCode> = step.keys.iter().copied().collect();
        set_held(app, &held, &next);
        held = next;

        for _ in 0..step.frames {
            if limit_reached(frames) {
                break 'steps;
            }
            run_frame(app);
            frames += 1;
        }
    }

    set_held(app, &held, &HashSet::new());
    if let Some(limit) = frame_limit {
        while frames < limit {
            run_frame(app);
            frames += 1;
        }
    }
    frames
}

fn set_held(app: &mut App, held: &HashSet<KeyCode>, next: &HashSet<KeyCode>) {
    let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    for &key in held.difference(next) {
        input.release(key);
    }
    for &key in next.difference(held) {
        input.press(key);
    }
}

fn run_frame(app: &mut App) {
    app.update();
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use mark_core::types::{CameraSlot, JointRole};
    use mark_sim::SceneBuilder;

    #[test]
    fn parse_steps_with_counts() {
        let steps = parse_script("w*3, w+a, idle*2, 2").unwrap();
        assert_eq!(
            steps,
            vec![
                ScriptStep {
                    keys: vec![KeyCode::KeyW],
                    frames: 3
                },
                ScriptStep {
                    keys: vec![KeyCode::KeyW, KeyCode::KeyA],
                    frames: 1
                },
                ScriptStep {
                    keys: vec![],
                    frames: 2
                },
                ScriptStep {
                    keys: vec![KeyCode::Digit2],
                    frames: 1
                },
            ]
        );
    }

    #[test]
    fn parse_is_case_insensitive_and_skips_empty_steps() {
        let steps = parse_script(" UP + Left ,, IDLE ").unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].keys, vec![KeyCode::ArrowUp, KeyCode::ArrowLeft]);
        assert!(steps[1].keys.is_empty());
    }

    #[test]
    fn parse_rejects_unknown_key() {
        let err = parse_script("w,jump").unwrap_err();
        assert!(err.to_string().contains("unknown key 'jump'"));
    }

    #[test]
    fn parse_rejects_zero_or_bad_count() {
        assert!(parse_script("w*0").is_err());
        assert!(parse_script("w*many").is_err());
    }

    #[test]
    fn replay_drives_scene() {
        let mut scene = SceneBuilder::new().build().unwrap();
        let steps = parse_script("w*4, w+a*2, idle, 2, o*3").unwrap();
        let frames = replay(&mut scene.app, &steps, None);

        assert_eq!(frames, 11);
        assert_eq!(scene.target(JointRole::LeftWheel), Some(8.0));
        assert_eq!(scene.target(JointRole::RightWheel), Some(6.0));
        assert_eq!(scene.target(JointRole::GripperLeft), Some(-3.0));
        assert!(scene.camera_enabled(CameraSlot::Mark));
    }

    #[test]
    fn replay_respects_frame_limit() {
        let mut scene = SceneBuilder::new().build().unwrap();
        let steps = parse_script("d*10").unwrap();

        assert_eq!(replay(&mut scene.app, &steps, Some(4)), 4);
        assert_eq!(scene.target(JointRole::RightWheel), Some(4.0));

        let mut scene = SceneBuilder::new().build().unwrap();
        assert_eq!(replay(&mut scene.app, &steps, Some(15)), 15);
        assert_eq!(scene.target(JointRole::RightWheel), Some(10.0));
    }
}
