//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire machine state. It coordinates the following:
//! 1. **State Management:** Maintains registers, program counter, and the delay-slot flag.
//! 2. **Memory:** Owns the flat data memory touched by loads and stores.
//! 3. **Diagnostics:** Owns the fault collector shared with the loader, linker, and decoder.
//! 4. **Observability:** Register snapshots, serializable machine snapshots, and statistics.
//!
//! The linked program is not owned by the CPU. Every execution entry point takes it by
//! reference, so instruction text is immutable once linked.

/// Control transfers and the branch-delay-slot protocol.
pub mod control;

/// Fetch/execute stepping and the run loops.
pub mod execution;

/// Load and store handling with address validation.
pub mod memory;

use serde::Serialize;

use crate::common::constants::{INSTRUCTION_BYTES, REGISTER_COUNT};
use crate::common::{Diagnostics, RegisterFile};
use crate::config::Config;
use crate::sim::program::Program;
use crate::soc::Memory;
use crate::stats::SimStats;

pub use execution::RunOutcome;

/// Main CPU structure containing all machine state.
#[derive(Debug)]
pub struct Cpu {
    /// General-purpose registers.
    pub regs: RegisterFile,
    /// Program counter, a byte offset into the program; always a multiple of four.
    pub pc: u32,
    /// Flat data memory.
    pub memory: Memory,
    /// Set only while the instruction after a jump or branch executes.
    pub in_delay_slot: bool,
    /// Enable per-instruction tracing.
    pub trace: bool,
    /// Execute delay slots before committing transfers. When false, the instruction after
    /// a taken transfer never runs.
    pub delay_slots: bool,
    /// Optional ceiling on steps per run call.
    pub step_limit: Option<u64>,
    /// Execution statistics.
    pub stats: SimStats,
    diagnostics: Diagnostics,
}

/// Serializable view of the machine for a surrounding tool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MachineSnapshot {
    /// All 32 registers, ordered by index.
    pub registers: [i32; REGISTER_COUNT],
    /// Program counter in bytes.
    pub pc: u32,
    /// Whether a delay-slot instruction is executing.
    pub in_delay_slot: bool,
    /// Source line of the next instruction, or `None` once the program has finished.
    pub current_line: Option<usize>,
    /// Every diagnostic recorded so far, formatted.
    pub diagnostics: Vec<String>,
    /// Execution statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a CPU with zeroed registers and memory.
    ///
    /// # Arguments
    ///
    /// * `config` - The simulator configuration.
    /// * `diagnostics` - Faults already recorded while loading and linking; runtime
    ///   faults are appended after them.
    pub fn new(config: &Config, diagnostics: Diagnostics) -> Self {
        Self {
            regs: RegisterFile::new(),
            pc: 0,
            memory: Memory::new(),
            in_delay_slot: false,
            trace: config.general.trace_instructions,
            delay_slots: config.pipeline.delay_slots,
            step_limit: config.general.step_limit,
            stats: SimStats::default(),
            diagnostics,
        }
    }

    /// Returns a copy of all 32 register values.
    pub fn registers(&self) -> [i32; REGISTER_COUNT] {
        self.regs.snapshot()
    }

    /// Returns the recorded diagnostics, oldest first.
    pub const fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Returns the program index the next step will fetch.
    pub const fn program_index(&self) -> usize {
        (self.pc / INSTRUCTION_BYTES) as usize
    }

    /// Restores registers, memory, pc, and the delay-slot flag to their initial state.
    ///
    /// Statistics restart from zero. Diagnostics are kept.
    pub fn reset(&mut self) {
        self.regs = RegisterFile::new();
        self.pc = 0;
        self.memory.clear();
        self.in_delay_slot = false;
        self.stats = SimStats::default();
    }

    /// Captures registers, pc, diagnostics, and statistics.
    ///
    /// # Arguments
    ///
    /// * `program` - The linked program, used to find the next source line.
    pub fn snapshot(&self, program: &Program) -> MachineSnapshot {
        MachineSnapshot {
            registers: self.registers(),
            pc: self.pc,
            in_delay_slot: self.in_delay_slot,
            current_line: program.get(self.program_index()).map(|entry| entry.line),
            diagnostics: self.diagnostics.messages(),
            stats: self.stats.clone(),
        }
    }

    /// Prints the pc and registers to a string, one register pair per line.
    pub fn dump_state(&self) -> String {
        format!("pc = {:#010x}\n{}", self.pc, self.regs.dump())
    }
}
