/// The width of the display in pixels
pub const DISPLAY_WIDTH: u8 = 64;
/// The height of the display in pixels
pub const DISPLAY_HEIGHT: u8 = 32;
/// The size of ram in bytes
pub const RAM_SIZE: u16 = 4096;
/// For the regular chip 8 roms
pub const ROM_START_ADDRESS: u16 = 0x200;
/// The largest image that fits between the program start and the end of ram
pub const MAX_ROM_SIZE: usize = (RAM_SIZE - ROM_START_ADDRESS) as usize;
/// Where the built-in hexadecimal glyphs live
pub const FONT_START_ADDRESS: u16 = 0x000;
/// Every glyph is 5 rows tall, one byte per row
pub const FONT_GLYPH_SIZE: u16 = 5;
/// First address past the glyphs, everything below it is read-only once loaded
pub const FONT_END_ADDRESS: u16 = FONT_START_ADDRESS + 16 * FONT_GLYPH_SIZE;
/// Amount of registers CHIP-8 has
pub const NUM_REGISTERS: u8 = 16;
/// Register VF doubles as the carry, borrow and collision flag
pub const FLAG_REGISTER: u8 = 0xF;
/// How many return addresses fit on the call stack
pub const STACK_SIZE: usize = 16;
/// Amount of keys on the hexadecimal keypad
pub const NUM_KEYS: u8 = 16;
/// Every instruction is two bytes long
pub const OPCODE_SIZE: u16 = 2;

/// The hexadecimal glyphs 0 through F, stored from [`FONT_START_ADDRESS`]
pub const FONTSET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, //0
    0x20, 0x60, 0x20, 0x20, 0x70, //1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, //2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, //3
    0x90, 0x90, 0xF0, 0x10, 0x10, //4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, //5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, //6
    0xF0, 0x10, 0x20, 0x40, 0x40, //7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, //8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, //9
    0xF0, 0x90, 0xF0, 0x90, 0x90, //a
    0xE0, 0x90, 0xE0, 0x90, 0xE0, //b
    0xF0, 0x80, 0x80, 0x80, 0xF0, //c
    0xE0, 0x90, 0x90, 0x90, 0xE0, //d
    0xF0, 0x80, 0xF0, 0x80, 0xF0, //e
    0xF0, 0x80, 0xF0, 0x80, 0x80, //f
];
