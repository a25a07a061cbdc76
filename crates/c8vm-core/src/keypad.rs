use crate::constants::NUM_KEYS;

/// A key going down or coming back up, for key symbols 0x0 through 0xF
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Pressed(u8),
    Released(u8),
}

/// A list of "buttons" for the hexadecimal keypad, set to true when pressed, false otherwise.
///
/// The presentation side writes it while polling for input, the cpu only reads it during a cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keypad {
    keys: [bool; NUM_KEYS as usize],
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set key's state, symbols above 0xF wrap onto the keypad
    pub fn set(&mut self, key: u8, pressed: bool) {
        self.keys[(key & 0xF) as usize] = pressed;
    }

    pub fn press(&mut self, key: u8) {
        self.set(key, true);
    }

    pub fn release(&mut self, key: u8) {
        self.set(key, false);
    }

    pub fn apply(&mut self, event: KeyEvent) {
        match event {
            KeyEvent::Pressed(key) => self.press(key),
            KeyEvent::Released(key) => self.release(key),
        }
    }

    pub fn is_pressed(&self, key: u8) -> bool {
        self.keys[(key & 0xF) as usize]
    }

    /// The lowest key that is down, if any
    pub fn first_pressed(&self) -> Option<u8> {
        self.keys
            .iter()
            .position(|pressed| *pressed)
            .map(|key| key as u8)
    }
}
