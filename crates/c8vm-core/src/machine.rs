use crate::cpu::{Cpu, Cycle};
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::keypad::Keypad;

/// Whatever puts the machine on a screen and reads its keys.
///
/// The machine polls it once per cycle. During `update` the shell is the only writer of the
/// keypad, during `draw` it is the only reader of the frame buffer, and in between the cpu has
/// both to itself.
pub trait Shell {
    /// Refreshes the keypad from whatever input arrived since the last call. Returns false once
    /// the shell is gone (window closed and the like), which stops the machine.
    fn update(&mut self, keypad: &mut Keypad) -> bool;

    /// The frame buffer the cpu draws into
    fn framebuffer(&mut self) -> &mut Framebuffer;

    /// Called after a cycle that changed the frame buffer
    fn draw(&mut self);

    /// Called on the cycle the sound timer runs out
    fn beep(&mut self) {}
}

/// A cpu together with the keys it reads, driven by a [`Shell`]
pub struct Machine {
    cpu: Cpu,
    keypad: Keypad,
}

impl Machine {
    pub fn new(cpu: Cpu) -> Self {
        Self {
            cpu,
            keypad: Keypad::new(),
        }
    }

    /// Polls the shell, runs one cpu cycle, then beeps and draws when the cycle asks for it.
    ///
    /// Returns `None` without touching the cpu when the shell is gone.
    pub fn cycle<S: Shell + ?Sized>(&mut self, shell: &mut S) -> Result<Option<Cycle>> {
        if !shell.update(&mut self.keypad) {
            return Ok(None);
        }

        let cycle = self.cpu.step(shell.framebuffer(), &self.keypad)?;
        if let Cycle::Progressed { tone: true } = cycle {
            shell.beep();
        }
        if shell.framebuffer().take_dirty() {
            shell.draw();
        }
        Ok(Some(cycle))
    }

    /// Cycles until the shell is gone or something fatal happens
    pub fn run<S: Shell + ?Sized>(&mut self, shell: &mut S) -> Result<()> {
        while self.cycle(shell)?.is_some() {}
        Ok(())
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rombuffer::RomBuffer;

    /// Stays alive for a fixed number of polls and counts what it was asked to do
    struct CountingShell {
        polls_left: usize,
        framebuffer: Framebuffer,
        draws: usize,
        beeps: usize,
    }

    impl CountingShell {
        fn new(polls: usize) -> Self {
            Self {
                polls_left: polls,
                framebuffer: Framebuffer::new(),
                draws: 0,
                beeps: 0,
            }
        }
    }

    impl Shell for CountingShell {
        fn update(&mut self, _keypad: &mut Keypad) -> bool {
            if self.polls_left == 0 {
                return false;
            }
            self.polls_left -= 1;
            true
        }

        fn framebuffer(&mut self) -> &mut Framebuffer {
            &mut self.framebuffer
        }

        fn draw(&mut self) {
            self.draws += 1;
        }

        fn beep(&mut self) {
            self.beeps += 1;
        }
    }

    fn machine_with(program: Vec<u8>) -> Machine {
        let rom = RomBuffer::from_bytes(program).unwrap();
        Machine::new(Cpu::with_seed(&rom, 0).unwrap())
    }

    #[test]
    fn stops_when_the_shell_is_gone() {
        // JP 0x200 forever
        let mut machine = machine_with(vec![0x12, 0x00]);
        let mut shell = CountingShell::new(5);
        machine.run(&mut shell).unwrap();
        assert_eq!(shell.polls_left, 0);
        assert_eq!(machine.cpu().program_counter(), 0x200);
    }

    #[test]
    fn first_cycle_draws_the_blank_screen_once() {
        let mut machine = machine_with(vec![0x12, 0x00]);
        let mut shell = CountingShell::new(3);
        machine.run(&mut shell).unwrap();
        assert_eq!(shell.draws, 1);
    }

    #[test]
    fn beeps_when_the_sound_timer_runs_out() {
        // LD V0, 2 ; LD ST, V0 ; JP 0x204
        let mut machine = machine_with(vec![0x60, 0x02, 0xF0, 0x18, 0x12, 0x04]);
        let mut shell = CountingShell::new(10);
        machine.run(&mut shell).unwrap();
        assert_eq!(shell.beeps, 1);
    }

    #[test]
    fn a_gone_shell_leaves_the_cpu_alone() {
        let mut machine = machine_with(vec![0x60, 0x05]);
        let mut shell = CountingShell::new(0);
        assert_eq!(machine.cycle(&mut shell).unwrap(), None);
        assert_eq!(machine.cpu().register(0), 0);
    }
}
