use macroquad::input::KeyCode;

/// The left hand side of a qwerty keyboard laid over the hexadecimal keypad:
///
/// ```text
/// 1 2 3 4        1 2 3 C
/// Q W E R   ->   4 5 6 D
/// A S D F        7 8 9 E
/// Z X C V        A 0 B F
/// ```
pub const KEYMAP: [(KeyCode, u8); 16] = [
    (KeyCode::Key1, 0x1),
    (KeyCode::Key2, 0x2),
    (KeyCode::Key3, 0x3),
    (KeyCode::Key4, 0xC),
    (KeyCode::Q, 0x4),
    (KeyCode::W, 0x5),
    (KeyCode::E, 0x6),
    (KeyCode::R, 0xD),
    (KeyCode::A, 0x7),
    (KeyCode::S, 0x8),
    (KeyCode::D, 0x9),
    (KeyCode::F, 0xE),
    (KeyCode::Z, 0xA),
    (KeyCode::X, 0x0),
    (KeyCode::C, 0xB),
    (KeyCode::V, 0xF),
];

/// The keypad symbol a physical key stands for, if it stands for one
pub fn key_symbol(key: KeyCode) -> Option<u8> {
    KEYMAP
        .iter()
        .find(|(code, _)| *code == key)
        .map(|(_, symbol)| *symbol)
}
