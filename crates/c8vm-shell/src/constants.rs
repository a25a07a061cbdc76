use c8vm_core::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

pub const APP_NAME: &str = "Chip8";
/// Size of a single chip8 pixel on screen, in window pixels
pub const PIXEL_SIZE: i32 = 16;
pub const WINDOW_WIDTH: i32 = DISPLAY_WIDTH as i32 * PIXEL_SIZE;
pub const WINDOW_HEIGHT: i32 = DISPLAY_HEIGHT as i32 * PIXEL_SIZE;
/// How many cycles the cpu advances for every frame. This decides how fast the cpu will run,
/// timers included since they tick once per cycle
pub const CYCLES_PER_FRAME: usize = 5;
