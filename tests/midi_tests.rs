use cubeturner_midi::midi::{MidiEngine, MidiError, MidiMessage, MockMidiEngine};

#[test]
fn test_control_change_bytes() {
    let msg = MidiMessage::control_change(9, 16, 127);
    assert_eq!(msg.to_bytes(), [0xB9, 16, 127]);

    let msg = MidiMessage::control_change(0, 19, 0);
    assert_eq!(msg.to_bytes(), [0xB0, 19, 0]);

    let msg = MidiMessage::control_change(15, 17, 127);
    assert_eq!(msg.to_bytes(), [0xBF, 17, 127]);
}

#[test]
fn test_control_change_bytes_are_masked() {
    // channel and data bytes can never spill into other fields
    let msg = MidiMessage::control_change(0x1A, 0x90, 0xFF);
    assert_eq!(msg.to_bytes(), [0xBA, 0x10, 0x7F]);
}

#[test]
fn test_control_change_display() {
    let msg = MidiMessage::control_change(9, 18, 0);
    assert_eq!(msg.to_string(), "control_change channel=9 control=18 value=0");
}

#[test]
fn test_mock_engine_records_in_order() {
    let mut engine = MockMidiEngine::new();
    let observer = engine.clone();

    engine
        .send(MidiMessage::control_change(9, 16, 127))
        .unwrap();
    engine.send(MidiMessage::control_change(9, 16, 0)).unwrap();

    assert_eq!(
        observer.sent(),
        vec![
            MidiMessage::control_change(9, 16, 127),
            MidiMessage::control_change(9, 16, 0),
        ]
    );
}

#[test]
fn test_failing_mock_engine() {
    let mut engine = MockMidiEngine::failing();
    let result = engine.send(MidiMessage::control_change(0, 16, 127));
    assert!(matches!(result, Err(MidiError::SendError(_))));
    assert!(engine.sent().is_empty());
}

#[test]
fn test_midi_error_display() {
    assert_eq!(
        MidiError::SendError("gone".to_string()).to_string(),
        "MIDI send error: gone"
    );
    assert_eq!(
        MidiError::ConnectionError("no sequencer".to_string()).to_string(),
        "MIDI connection error: no sequencer"
    );
}
