use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use macroquad::logging::{error, info};
use macroquad::window::{Conf, next_frame};

use c8vm_core::{Cpu, Cycle, Machine, RomBuffer};
use c8vm_shell::MacroquadShell;
use c8vm_shell::constants::{APP_NAME, CYCLES_PER_FRAME, WINDOW_HEIGHT, WINDOW_WIDTH};

#[derive(Parser, Debug)]
#[command(name = "c8vm", about = "Runs a chip8 rom in a window", long_about = None)]
struct Args {
    /// Chip8 rom image to run
    #[arg(value_name = "ROM")]
    rom: PathBuf,
}

fn window_conf() -> Conf {
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        ..Default::default()
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    info!("Reading rom {}", args.rom.display());
    let rom = RomBuffer::from_file(&args.rom)
        .with_context(|| format!("failed to load {}", args.rom.display()))?;
    info!("Rom loaded ! ({} bytes)", rom.len());

    let machine = Machine::new(Cpu::new(&rom)?);
    macroquad::Window::from_config(window_conf(), run(machine));
    Ok(())
}

/// The frame loop: a batch of cycles, then show the screen and wait for the next frame
async fn run(mut machine: Machine) {
    let mut shell = MacroquadShell::new();

    loop {
        for _ in 0..CYCLES_PER_FRAME {
            match machine.cycle(&mut shell) {
                Ok(Some(Cycle::Progressed { .. })) => {}
                // nothing will change before the keys are polled again
                Ok(Some(Cycle::Blocked)) => break,
                Ok(None) => return,
                Err(err) => {
                    let cpu = machine.cpu();
                    error!("{} (pc {:#05X})", err, cpu.program_counter());
                    if let Ok(Some(instruction)) = cpu.peek_instruction() {
                        error!("while executing {}", instruction);
                    }
                    std::process::exit(1);
                }
            }
        }

        shell.present();
        next_frame().await;
    }
}
