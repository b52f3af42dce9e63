use cubeturner_midi::keymap::{self, Direction};
use evdev::Key;

#[test]
fn test_arrow_keys_map_to_fixed_controllers() {
    assert_eq!(keymap::map(Key::KEY_LEFT.code()), Some(16));
    assert_eq!(keymap::map(Key::KEY_RIGHT.code()), Some(17));
    assert_eq!(keymap::map(Key::KEY_UP.code()), Some(18));
    assert_eq!(keymap::map(Key::KEY_DOWN.code()), Some(19));
}

#[test]
fn test_other_codes_have_no_mapping() {
    let mapped: Vec<u16> = Direction::ALL.iter().map(|d| d.key().code()).collect();

    for code in 0..=0x2ff_u16 {
        if mapped.contains(&code) {
            continue;
        }
        assert_eq!(keymap::map(code), None, "code {} should be unmapped", code);
    }
}

#[test]
fn test_direction_round_trip_through_code() {
    for direction in Direction::ALL {
        assert_eq!(Direction::from_code(direction.key().code()), Some(direction));
    }
}

#[test]
fn test_direction_names() {
    let names: Vec<String> = Direction::ALL.iter().map(|d| d.to_string()).collect();
    assert_eq!(names, ["left", "right", "up", "down"]);
}

#[test]
fn test_controllers_are_valid_data_bytes() {
    for direction in Direction::ALL {
        assert!(direction.controller() <= 127);
    }
}
