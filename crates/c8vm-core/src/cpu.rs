use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::constants::{FONT_GLYPH_SIZE, FONT_START_ADDRESS, OPCODE_SIZE, ROM_START_ADDRESS};
use crate::error::{Chip8Error, Result};
use crate::framebuffer::Framebuffer;
use crate::instruction::Instruction;
use crate::keypad::Keypad;
use crate::ram::Ram;
use crate::registers::Registers;
use crate::rombuffer::RomBuffer;
use crate::stack::Stack;

/// How an executed instruction moves the program counter
enum ProgramCounter {
    Next,
    Skip,
    Jump(u16),
    /// Stay on this instruction and retry it next cycle
    Wait,
}

/// What a single call to [`Cpu::step`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cycle {
    /// The program counter moved on and the timers ticked. `tone` is set on the cycle the sound
    /// timer ran out.
    Progressed { tone: bool },
    /// Waiting for a key, nothing changed
    Blocked,
}

/// The main cpu,
pub struct Cpu {
    ///Program counter, used to keep track of what to fetch,decode and execute from ram, initialized at 0x200
    program_counter: u16,
    /// The memory, stores the rom data when loaded from disk
    memory: Ram,
    /// A random number generator. Seedable so random instructions can be tested
    rng: ChaCha8Rng,
    /// Registers 0x0 through 0xF, I and the timers
    registers: Registers,
    stack: Stack,
}

impl Cpu {
    /// Creates a new cpu object, with the contents of a rom file loaded in to memory
    pub fn new(rom: &RomBuffer) -> Result<Self> {
        let rng = ChaCha8Rng::from_rng(&mut rand::rng());
        Self::with_rng(rom, rng)
    }

    /// Same as [`Cpu::new`] but with a fixed random sequence
    pub fn with_seed(rom: &RomBuffer, seed: u64) -> Result<Self> {
        Self::with_rng(rom, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(rom: &RomBuffer, rng: ChaCha8Rng) -> Result<Self> {
        let mut memory = Ram::with_fonts();
        memory.load_rom(rom)?;

        Ok(Self {
            program_counter: ROM_START_ADDRESS,
            memory,
            rng,
            registers: Registers::default(),
            stack: Stack::default(),
        })
    }

    /// A single cpu cycle: fetches, decodes and executes one opcode, moves the program counter
    /// and decrements the timers. When the instruction is waiting for a key nothing moves.
    pub fn step(&mut self, framebuffer: &mut Framebuffer, keypad: &Keypad) -> Result<Cycle> {
        let address = self.program_counter;
        let opcode = self.fetch()?;
        let instruction =
            Instruction::decode(opcode).ok_or(Chip8Error::UnknownOpcode { opcode, address })?;

        match self.execute(instruction, framebuffer, keypad)? {
            ProgramCounter::Next => self.program_counter += OPCODE_SIZE,
            ProgramCounter::Skip => self.program_counter += OPCODE_SIZE * 2,
            ProgramCounter::Jump(target) => self.program_counter = target,
            ProgramCounter::Wait => return Ok(Cycle::Blocked),
        }

        let tone = self.registers.tick_timers();
        Ok(Cycle::Progressed { tone })
    }

    /// The instruction the program counter points at, without executing it
    pub fn peek_instruction(&self) -> Result<Option<Instruction>> {
        Ok(Instruction::decode(self.fetch()?))
    }

    /// Returns two bytes from memory at the location where the program counter currently points to
    fn fetch(&self) -> Result<u16> {
        self.memory.get_opcode(self.program_counter)
    }

    fn skip_if(condition: bool) -> ProgramCounter {
        if condition {
            ProgramCounter::Skip
        } else {
            ProgramCounter::Next
        }
    }

    ///Execute the instruction, for details on the instruction, check the instruction enum
    ///definition
    fn execute(
        &mut self,
        instruction: Instruction,
        framebuffer: &mut Framebuffer,
        keypad: &Keypad,
    ) -> Result<ProgramCounter> {
        let pc = match instruction {
            //00E0
            Instruction::ClearScreen => {
                framebuffer.clear();
                ProgramCounter::Next
            }
            //00EE
            Instruction::ReturnFromSubroutine => {
                let caller = self.stack.pop().ok_or(Chip8Error::StackUnderflow {
                    address: self.program_counter,
                })?;
                // the stack holds the call itself, carry on after it
                ProgramCounter::Jump(caller + OPCODE_SIZE)
            }
            //1NNN
            Instruction::Jump { nnn } => ProgramCounter::Jump(nnn),
            //2NNN
            Instruction::CallSubroutineAtNNN { nnn } => {
                self.stack.push(self.program_counter)?;
                ProgramCounter::Jump(nnn)
            }
            //3XKK
            Instruction::SkipNextInstructionIfXIsKK { x, kk } => {
                Self::skip_if(self.registers.get_register(x) == kk)
            }
            //4XKK
            Instruction::SkipNextInstructionIfXIsNotKK { x, kk } => {
                Self::skip_if(self.registers.get_register(x) != kk)
            }
            //5XY0
            Instruction::SkipNextInstructionIfXIsY { x, y } => {
                let vx = self.registers.get_register(x);
                let vy = self.registers.get_register(y);
                Self::skip_if(vx == vy)
            }
            //6XKK
            Instruction::LoadRegisterX { x, kk } => {
                self.registers.set_register(x, kk);
                ProgramCounter::Next
            }
            //7XKK
            Instruction::AddToRegisterX { x, kk } => {
                let vx = self.registers.get_register(x);
                self.registers.set_register(x, vx.wrapping_add(kk));
                ProgramCounter::Next
            }
            //8xy0
            Instruction::LoadRegisterYIntoX { x, y } => {
                let vy = self.registers.get_register(y);
                self.registers.set_register(x, vy);
                ProgramCounter::Next
            }
            //8xy1
            Instruction::LoadXOrYInX { x, y } => {
                let vx = self.registers.get_register(x);
                let vy = self.registers.get_register(y);
                self.registers.set_register(x, vx | vy);
                ProgramCounter::Next
            }
            //8xy2
            Instruction::LoadXAndYInX { x, y } => {
                let vx = self.registers.get_register(x);
                let vy = self.registers.get_register(y);
                self.registers.set_register(x, vx & vy);
                ProgramCounter::Next
            }
            //8xy3
            Instruction::LoadXXorYInX { x, y } => {
                let vx = self.registers.get_register(x);
                let vy = self.registers.get_register(y);
                self.registers.set_register(x, vx ^ vy);
                ProgramCounter::Next
            }
            //8xy4
            Instruction::AddYToX { x, y } => {
                let vx = self.registers.get_register(x);
                let vy = self.registers.get_register(y);
                let (res, carry) = vx.overflowing_add(vy);
                self.registers.set_register(x, res);
                self.registers.set_flag(carry);
                ProgramCounter::Next
            }
            //8xy5
            Instruction::SubYFromX { x, y } => {
                let vx = self.registers.get_register(x);
                let vy = self.registers.get_register(y);
                let (res, borrow) = vx.overflowing_sub(vy);
                self.registers.set_register(x, res);
                self.registers.set_flag(!borrow);
                ProgramCounter::Next
            }
            //8xy6
            Instruction::ShiftXRight1 { x } => {
                let vx = self.registers.get_register(x);
                self.registers.set_register(x, vx >> 1);
                self.registers.set_flag(vx & 0x01 == 0x01);
                ProgramCounter::Next
            }
            //8xy7
            Instruction::SubXFromY { x, y } => {
                let vx = self.registers.get_register(x);
                let vy = self.registers.get_register(y);
                let (res, borrow) = vy.overflowing_sub(vx);
                self.registers.set_register(x, res);
                self.registers.set_flag(!borrow);
                ProgramCounter::Next
            }
            //8xyE
            Instruction::ShiftXLeft1 { x } => {
                let vx = self.registers.get_register(x);
                self.registers.set_register(x, vx << 1);
                self.registers.set_flag(vx & 0x80 == 0x80);
                ProgramCounter::Next
            }
            //9XY0
            Instruction::SkipNextInstructionIfXIsNotY { x, y } => {
                let vx = self.registers.get_register(x);
                let vy = self.registers.get_register(y);
                Self::skip_if(vx != vy)
            }
            //ANNN
            Instruction::SetIndexRegister { nnn } => {
                self.registers.set_index_register(nnn);
                ProgramCounter::Next
            }
            //BNNN
            Instruction::JumpToAddressPlusV0 { nnn } => {
                let v0 = u16::from(self.registers.get_register(0));
                ProgramCounter::Jump(nnn + v0)
            }
            //CXKK
            Instruction::SetXToRandom { x, kk } => {
                let random_byte: u8 = self.rng.random();
                self.registers.set_register(x, random_byte & kk);
                ProgramCounter::Next
            }
            //DXYN
            Instruction::Display { x, y, n } => {
                let start_x = usize::from(self.registers.get_register(x));
                let start_y = usize::from(self.registers.get_register(y));
                let sprite = self
                    .memory
                    .slice(self.registers.get_index_register(), usize::from(n))?;
                let collision = framebuffer.draw_sprite(start_x, start_y, sprite);
                self.registers.set_flag(collision);
                ProgramCounter::Next
            }
            //EX9E
            Instruction::SkipIfVxPressed { x } => {
                Self::skip_if(keypad.is_pressed(self.registers.get_register(x)))
            }
            //EXA1
            Instruction::SkipIfVxNotPressed { x } => {
                Self::skip_if(!keypad.is_pressed(self.registers.get_register(x)))
            }
            //FX07
            Instruction::SetXToDelayTimer { x } => {
                let delay = self.registers.get_delay_timer();
                self.registers.set_register(x, delay);
                ProgramCounter::Next
            }
            //FX0A
            Instruction::WaitForKeyPressed { x } => match keypad.first_pressed() {
                Some(key) => {
                    self.registers.set_register(x, key);
                    ProgramCounter::Next
                }
                None => ProgramCounter::Wait,
            },
            //FX15
            Instruction::SetDelayTimerToX { x } => {
                let vx = self.registers.get_register(x);
                self.registers.set_delay_timer(vx);
                ProgramCounter::Next
            }
            //FX18
            Instruction::SetSoundTimerToX { x } => {
                let vx = self.registers.get_register(x);
                self.registers.set_sound_timer(vx);
                ProgramCounter::Next
            }
            //FX1E
            Instruction::AddXToI { x } => {
                let vx = u16::from(self.registers.get_register(x));
                let added = self.registers.get_index_register().wrapping_add(vx);
                self.registers.set_index_register(added);
                self.registers.set_flag(added > 0xFFF);
                ProgramCounter::Next
            }
            //FX29
            Instruction::SetIToSpriteX { x } => {
                //the sprite at *index* x, not location x.
                let vx = u16::from(self.registers.get_register(x));
                self.registers
                    .set_index_register(FONT_START_ADDRESS + vx * FONT_GLYPH_SIZE);
                ProgramCounter::Next
            }
            //FX33
            Instruction::LoadBCDOfX { x } => {
                let vx = self.registers.get_register(x);
                let digits = self
                    .memory
                    .slice_mut(self.registers.get_index_register(), 3)?;
                digits.copy_from_slice(&[vx / 100, (vx / 10) % 10, vx % 10]);
                ProgramCounter::Next
            }
            //FX55
            Instruction::Write0ThroughX { x } => {
                let vi = self.registers.get_index_register();
                let memory = self.memory.slice_mut(vi, usize::from(x) + 1)?;
                for (register, byte) in (0..=x).zip(memory.iter_mut()) {
                    *byte = self.registers.get_register(register);
                }
                self.registers
                    .set_index_register(vi.wrapping_add(u16::from(x) + 1));
                ProgramCounter::Next
            }
            //FX65
            Instruction::Load0ThroughX { x } => {
                let vi = self.registers.get_index_register();
                let memory = self.memory.slice(vi, usize::from(x) + 1)?;
                for (register, byte) in (0..=x).zip(memory.iter()) {
                    self.registers.set_register(register, *byte);
                }
                self.registers
                    .set_index_register(vi.wrapping_add(u16::from(x) + 1));
                ProgramCounter::Next
            }
        };
        Ok(pc)
    }

    pub fn program_counter(&self) -> u16 {
        self.program_counter
    }

    pub fn register(&self, register: u8) -> u8 {
        self.registers.get_register(register)
    }

    pub fn index_register(&self) -> u16 {
        self.registers.get_index_register()
    }

    pub fn delay_timer(&self) -> u8 {
        self.registers.get_delay_timer()
    }

    pub fn sound_timer(&self) -> u8 {
        self.registers.get_sound_timer()
    }

    /// How many subroutine calls are waiting to return
    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    pub fn memory_byte(&self, address: u16) -> Result<u8> {
        self.memory.get_byte(address)
    }
}
