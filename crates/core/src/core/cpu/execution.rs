//! Main Execution Loop.
//!
//! This module implements the fetch/execute cycle of the CPU. It performs the following:
//! 1. **Fetch:** Reads the decoded instruction at `pc / 4` and advances the pc by four
//!    before the instruction body runs.
//! 2. **Execute:** Dispatches exhaustively over the decoded instruction.
//! 3. **Run Loops:** Run to completion, or until a given source line is reached.
//! 4. **Observability:** Optional per-instruction tracing.

use serde::Serialize;

use super::Cpu;
use crate::common::constants::INSTRUCTION_BYTES;
use crate::core::units::alu::Alu;
use crate::isa::disasm::disassemble;
use crate::isa::instruction::Instruction;
use crate::sim::program::Program;

/// Why a run loop returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RunOutcome {
    /// The pc moved past the last instruction.
    Halted,
    /// An instruction from the requested source line has just executed.
    Breakpoint {
        /// The requested source line.
        line: usize,
    },
    /// The configured step ceiling was reached.
    StepLimit {
        /// Steps taken by this run call.
        steps: u64,
    },
}

impl Cpu {
    /// Executes one instruction.
    ///
    /// Does nothing if the pc is outside the program. A transfer executes its delay slot
    /// within the same call.
    ///
    /// # Arguments
    ///
    /// * `program` - The linked program to fetch from.
    pub fn step(&mut self, program: &Program) {
        let Some(entry) = program.get(self.program_index()) else {
            return;
        };
        let (line, inst) = (entry.line, entry.instruction);

        if self.trace {
            tracing::trace!(
                pc = self.pc,
                line,
                delay_slot = self.in_delay_slot,
                "{}",
                disassemble(&inst)
            );
        }

        self.pc = self.pc.wrapping_add(INSTRUCTION_BYTES);
        self.stats.instructions_executed += 1;
        if self.in_delay_slot {
            self.stats.delay_slots_executed += 1;
        }

        self.execute(inst, line, program);
    }

    /// Executes a decoded instruction against the current state.
    ///
    /// The pc has already been advanced past `inst`.
    fn execute(&mut self, inst: Instruction, line: usize, program: &Program) {
        match inst {
            Instruction::Nop | Instruction::Invalid => self.stats.inst_nop += 1,
            Instruction::Immediate { op, rt, rs, imm } => {
                let val = Alu::execute(op.alu_op(), self.regs.read(rs), op.extend(imm));
                self.regs.write(rt, val);
                self.stats.inst_alu += 1;
            }
            Instruction::LoadUpper { rt, imm } => {
                self.regs.write(rt, (u32::from(imm) << 16) as i32);
                self.stats.inst_alu += 1;
            }
            Instruction::Register { op, rd, rs, rt } => {
                let val = Alu::execute(op.alu_op(), self.regs.read(rs), self.regs.read(rt));
                self.regs.write(rd, val);
                self.stats.inst_alu += 1;
            }
            Instruction::ConditionalMove { cond, rd, rs, rt } => {
                if cond.holds(self.regs.read(rt)) {
                    self.regs.write(rd, self.regs.read(rs));
                }
                self.stats.inst_alu += 1;
            }
            Instruction::Shift { op, rd, rt, shamt } => {
                let val = Alu::execute(op.alu_op(), self.regs.read(rt), shamt as i32);
                self.regs.write(rd, val);
                self.stats.inst_shift += 1;
            }
            Instruction::ShiftVariable { op, rd, rt, rs } => {
                let val = Alu::execute(op.alu_op(), self.regs.read(rt), self.regs.read(rs));
                self.regs.write(rd, val);
                self.stats.inst_shift += 1;
            }
            Instruction::Jump { .. }
            | Instruction::JumpRegister { .. }
            | Instruction::Branch { .. } => self.transfer(inst, line, program),
            Instruction::Load {
                op,
                rt,
                base,
                offset,
            } => self.load(op, rt, base, offset, line),
            Instruction::Store {
                op,
                rt,
                base,
                offset,
            } => self.store(op, rt, base, offset, line),
        }
    }

    /// Steps until the pc leaves the program or the step ceiling is hit.
    ///
    /// Without a configured ceiling, a program that never leaves its own bounds runs
    /// forever.
    ///
    /// # Arguments
    ///
    /// * `program` - The linked program.
    pub fn run(&mut self, program: &Program) -> RunOutcome {
        self.run_to(program, None)
    }

    /// Steps until an instruction fetched from source line `line` has executed.
    ///
    /// Instructions run as a delay slot are not matched. Returns [`RunOutcome::Halted`]
    /// if the program ends first.
    ///
    /// # Arguments
    ///
    /// * `program` - The linked program.
    /// * `line` - 1-based source line to stop after.
    pub fn run_until_line(&mut self, program: &Program, line: usize) -> RunOutcome {
        self.run_to(program, Some(line))
    }

    /// Steps while the pc is inside the program, stopping after an instruction from
    /// `stop_line` executes.
    fn run_to(&mut self, program: &Program, stop_line: Option<usize>) -> RunOutcome {
        let mut steps = 0;
        while let Some(entry) = program.get(self.program_index()) {
            if self.step_limit.is_some_and(|limit| steps >= limit) {
                return RunOutcome::StepLimit { steps };
            }
            let fetched = entry.line;
            self.step(program);
            steps += 1;
            if stop_line == Some(fetched) {
                return RunOutcome::Breakpoint { line: fetched };
            }
        }
        RunOutcome::Halted
    }
}
