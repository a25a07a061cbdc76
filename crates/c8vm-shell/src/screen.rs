use macroquad::input::{KeyCode, get_last_key_pressed, is_key_down, is_key_pressed};
use macroquad::logging::{debug, info};
use macroquad::prelude::{
    BLACK, DrawTextureParams, FilterMode, Image, Texture2D, WHITE, clear_background,
    draw_texture_ex, screen_height, screen_width, vec2,
};

use c8vm_core::{DISPLAY_HEIGHT, DISPLAY_WIDTH, Framebuffer, Keypad, Shell};

use crate::keymap::{KEYMAP, key_symbol};

/// A macroquad window showing the chip8 screen, white pixels on black, scaled to fill the window.
///
/// Has to be created from inside the macroquad main future, the texture lives on the gpu.
pub struct MacroquadShell {
    framebuffer: Framebuffer,
    /// One image pixel per chip8 pixel, uploaded to `texture` on every draw
    image: Image,
    texture: Texture2D,
    /// Set by `present`, so key logging happens once per frame instead of once per cycle
    fresh_frame: bool,
}

impl MacroquadShell {
    pub fn new() -> Self {
        let image = Image::gen_image_color(DISPLAY_WIDTH as u16, DISPLAY_HEIGHT as u16, BLACK);
        let texture = Texture2D::from_image(&image);
        // keep the pixels blocky when scaled up
        texture.set_filter(FilterMode::Nearest);

        Self {
            framebuffer: Framebuffer::new(),
            image,
            texture,
            fresh_frame: true,
        }
    }

    /// Puts the last drawn screen in the window, once per frame before `next_frame`
    pub fn present(&mut self) {
        clear_background(BLACK);
        draw_texture_ex(
            &self.texture,
            0.,
            0.,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(screen_width(), screen_height())),
                ..Default::default()
            },
        );
        self.fresh_frame = true;
    }
}

impl Default for MacroquadShell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell for MacroquadShell {
    fn update(&mut self, keypad: &mut Keypad) -> bool {
        if is_key_pressed(KeyCode::Escape) {
            info!("Escape pressed, stopping");
            return false;
        }

        if std::mem::take(&mut self.fresh_frame) {
            if let Some(key) = get_last_key_pressed() {
                if key_symbol(key).is_none() {
                    debug!("Unhandled key {:?}", key);
                }
            }
        }

        for (code, symbol) in KEYMAP {
            keypad.set(symbol, is_key_down(code));
        }
        true
    }

    fn framebuffer(&mut self) -> &mut Framebuffer {
        &mut self.framebuffer
    }

    fn draw(&mut self) {
        let width = self.framebuffer.width();
        for (index, on) in self.framebuffer.pixels().iter().enumerate() {
            let color = if *on { WHITE } else { BLACK };
            self.image
                .set_pixel((index % width) as u32, (index / width) as u32, color);
        }
        self.texture.update(&self.image);
    }

    fn beep(&mut self) {
        info!("BEEP");
    }
}
