//! Simulator: owns the linked program and the CPU side by side.
//!
//! The program is borrowed by the CPU for every step, so it stays immutable after
//! assembly while registers, memory, and the pc change.

use std::path::Path;

use crate::common::constants::REGISTER_COUNT;
use crate::common::{Diagnostics, SimError};
use crate::config::Config;
use crate::core::{Cpu, MachineSnapshot, RunOutcome};

use super::loader;
use super::program::Program;

/// Top-level simulator: CPU state plus the program it runs.
#[derive(Debug)]
pub struct Simulator {
    /// CPU state (registers, memory, pc, diagnostics, stats).
    pub cpu: Cpu,
    program: Program,
}

impl Simulator {
    /// Assembles `source` and creates a CPU ready to run it.
    ///
    /// Load, link, and decode faults are available from [`Simulator::diagnostics`]
    /// immediately.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::{Config, Simulator};
    /// use mipsim_core::isa::abi;
    ///
    /// let source = "beq $0, $0, done\naddiu $t0, $t0, 1\ndone:\naddiu $t0, $t0, 5\n";
    /// let mut sim = Simulator::new(source, &Config::default());
    /// let _ = sim.run();
    /// assert_eq!(sim.registers()[abi::REG_T0], 6);
    /// ```
    pub fn new(source: &str, config: &Config) -> Self {
        let mut diagnostics = Diagnostics::new();
        let program = Program::assemble(source, &mut diagnostics);
        Self {
            cpu: Cpu::new(config, diagnostics),
            program,
        }
    }

    /// Assembles `source` with the default configuration.
    pub fn from_source(source: &str) -> Self {
        Self::new(source, &Config::default())
    }

    /// Reads a program from disk and assembles it.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if the file cannot be read.
    pub fn from_path(path: impl AsRef<Path>, config: &Config) -> Result<Self, SimError> {
        let source = loader::read_source(path)?;
        Ok(Self::new(&source, config))
    }

    /// Executes one instruction (and its delay slot, for a transfer).
    pub fn step(&mut self) {
        self.cpu.step(&self.program);
    }

    /// Runs until the pc leaves the program.
    pub fn run(&mut self) -> RunOutcome {
        self.cpu.run(&self.program)
    }

    /// Runs until an instruction from source line `line` has executed.
    pub fn run_until_line(&mut self, line: usize) -> RunOutcome {
        self.cpu.run_until_line(&self.program, line)
    }

    /// Returns a copy of all 32 register values.
    pub fn registers(&self) -> [i32; REGISTER_COUNT] {
        self.cpu.registers()
    }

    /// Returns every fault recorded so far, oldest first.
    pub const fn diagnostics(&self) -> &Diagnostics {
        self.cpu.diagnostics()
    }

    /// Returns the linked program.
    pub const fn program(&self) -> &Program {
        &self.program
    }

    /// Returns `true` once the pc has moved past the last instruction.
    pub fn is_finished(&self) -> bool {
        self.cpu.program_index() >= self.program.len()
    }

    /// Returns the source line of the next instruction to execute.
    pub fn current_line(&self) -> Option<usize> {
        self.program.get(self.cpu.program_index()).map(|e| e.line)
    }

    /// Restores the machine to its initial state, keeping the program and diagnostics.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Captures a serializable view of the machine.
    pub fn snapshot(&self) -> MachineSnapshot {
        self.cpu.snapshot(&self.program)
    }
}
