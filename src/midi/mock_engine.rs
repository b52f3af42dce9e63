use crate::midi::{MidiEngine, MidiError, MidiMessage, Result};
use std::cell::RefCell;
use std::rc::Rc;

/// Engine that keeps every message instead of sending it
#[derive(Clone, Default)]
pub struct MockMidiEngine {
    sent: Rc<RefCell<Vec<MidiMessage>>>,
    fail_sends: bool,
}

impl MockMidiEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine whose every send fails
    pub fn failing() -> Self {
        MockMidiEngine {
            sent: Rc::default(),
            fail_sends: true,
        }
    }

    /// Messages sent so far, shared between clones
    pub fn sent(&self) -> Vec<MidiMessage> {
        self.sent.borrow().clone()
    }
}

impl MidiEngine for MockMidiEngine {
    fn send(&mut self, msg: MidiMessage) -> Result<()> {
        if self.fail_sends {
            return Err(MidiError::SendError("mock port closed".to_string()));
        }
        self.sent.borrow_mut().push(msg);
        Ok(())
    }
}
