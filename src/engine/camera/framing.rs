use bevy::prelude::*;

use crate::engine::scene::parts::PartName;

/// Camera position used to frame one selected part.
///
/// Framing only ever moves the camera in the Y/Z plane; X stays on the model
/// axis so the shoe remains centred. The rest pose (`REST_CAMERA_POSITION`)
/// is the explicit default used when the selection clears.
pub fn framing_target(part: PartName) -> Vec3 {
    match part {
        PartName::Laces => Vec3::new(0.0, 1.5, 3.0),
        PartName::Inside => Vec3::new(0.0, 1.2, 2.5),
        PartName::Outside1 => Vec3::new(0.0, 1.3, 2.8),
        PartName::Outside2 => Vec3::new(0.0, 1.4, 2.9),
        PartName::Outside3 => Vec3::new(0.0, 1.6, 3.1),
        PartName::SoleBottom => Vec3::new(0.0, 1.7, 3.2),
        PartName::SoleTop => Vec3::new(0.0, 1.8, 3.3),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::render_settings::REST_CAMERA_POSITION;

    #[test]
    fn test_each_part_has_its_own_framing() {
        let targets: Vec<Vec3> = PartName::ALL.iter().map(|p| framing_target(*p)).collect();
        for (i, a) in targets.iter().enumerate() {
            for b in targets.iter().skip(i + 1) {
                assert_ne!(a, b, "framing targets must be distinct");
            }
        }
    }

    #[test]
    fn test_framing_stays_on_model_axis() {
        for part in PartName::ALL {
            assert_eq!(framing_target(part).x, 0.0);
        }
        assert_eq!(REST_CAMERA_POSITION.x, 0.0);
    }

    #[test]
    fn test_laces_framing() {
        assert_eq!(framing_target(PartName::Laces), Vec3::new(0.0, 1.5, 3.0));
    }
}
