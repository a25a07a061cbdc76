use crate::constants::{FLAG_REGISTER, NUM_REGISTERS};

#[derive(Clone, Copy, Debug, Default)]
///# Holds all the registers and the sound and delay timers
pub struct Registers {
    register: [u8; NUM_REGISTERS as usize],
    vindex: u16,
    /// 0 by default, unless its set to a number then it will just start decrementing by one every
    /// cycle
    delay_timer: u8,
    /// Decremented every cycle like the delay timer. Running out (going from 1 to 0) is what
    /// triggers the tone
    sound_timer: u8,
}

impl Registers {
    pub fn set_index_register(&mut self, value: u16) {
        self.vindex = value;
    }
    pub fn get_index_register(&self) -> u16 {
        self.vindex
    }
    pub fn set_sound_timer(&mut self, value: u8) {
        self.sound_timer = value;
    }
    pub fn get_sound_timer(&self) -> u8 {
        self.sound_timer
    }
    pub fn set_delay_timer(&mut self, value: u8) {
        self.delay_timer = value;
    }
    pub fn get_delay_timer(&self) -> u8 {
        self.delay_timer
    }

    /// Counts both timers down by one, returns true when the sound timer just ran out
    pub fn tick_timers(&mut self) -> bool {
        if self.delay_timer > 0 {
            self.delay_timer -= 1;
        }
        if self.sound_timer > 0 {
            self.sound_timer -= 1;
            return self.sound_timer == 0;
        }
        false
    }

    /// Register indexes come from a nibble, anything above 0xf wraps onto 0x0..=0xf
    pub fn get_register(&self, register: u8) -> u8 {
        self.register[(register & 0xf) as usize]
    }
    pub fn set_register(&mut self, register: u8, value: u8) {
        self.register[(register & 0xf) as usize] = value;
    }
    /// VF
    pub fn set_flag(&mut self, set: bool) {
        self.set_register(FLAG_REGISTER, u8::from(set));
    }
}
