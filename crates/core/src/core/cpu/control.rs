//! Control Transfers.
//!
//! This module implements jumps, branches, and the branch-delay-slot protocol. A transfer
//! runs as a small state machine:
//! 1. **Nesting Check:** A transfer found in another transfer's delay slot is rejected with
//!    a diagnostic and has no effect; execution continues sequentially.
//! 2. **Resolution:** The target and the branch outcome are computed from register values
//!    as they stand on entry, before the delay slot can change them.
//! 3. **Link:** `jal`/`jalr` write the return address.
//! 4. **Delay Slot:** The next instruction executes exactly once, taken or not.
//! 5. **Commit:** A taken transfer replaces the pc.
//!
//! On entry the pc already points at the delay-slot instruction.

use super::Cpu;
use crate::common::DiagnosticKind;
use crate::common::constants::INSTRUCTION_BYTES;
use crate::core::units::bru;
use crate::isa::abi;
use crate::isa::instruction::Instruction;
use crate::sim::program::Program;

/// Outcome of resolving a transfer before its delay slot runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Resolved {
    /// Target byte address if the transfer is taken.
    target: Option<u32>,
    /// Register receiving the return address.
    link: Option<usize>,
}

impl Cpu {
    /// Executes a jump or branch, including its delay slot.
    ///
    /// # Arguments
    ///
    /// * `inst` - A transfer instruction; other variants are ignored.
    /// * `line` - Source line of the transfer, for diagnostics.
    /// * `program` - The linked program, used to run the delay slot.
    pub fn transfer(&mut self, inst: Instruction, line: usize, program: &Program) {
        if self.in_delay_slot {
            self.stats.nested_transfers_rejected += 1;
            self.diagnostics
                .push(line, DiagnosticKind::NestedTransfer(inst.mnemonic()));
            return;
        }
        self.stats.inst_transfer += 1;

        let Some(resolved) = self.resolve(inst, line) else {
            return;
        };

        if let Some(rd) = resolved.link {
            let ret = if self.delay_slots {
                self.pc.wrapping_add(INSTRUCTION_BYTES)
            } else {
                self.pc
            };
            self.regs.write(rd, ret as i32);
        }

        if self.delay_slots {
            self.in_delay_slot = true;
            self.step(program);
            self.in_delay_slot = false;
        }

        if let Some(target) = resolved.target {
            self.pc = target;
            self.stats.transfers_taken += 1;
        }
    }

    /// Computes the target and link register from the current register values.
    fn resolve(&mut self, inst: Instruction, line: usize) -> Option<Resolved> {
        let entry_pc = self.pc;
        let resolved = match inst {
            Instruction::Jump { link, target } => Resolved {
                target: Some(bru::jump_target(entry_pc, target)),
                link: link.then_some(abi::REG_RA),
            },
            Instruction::JumpRegister { link, rs } => {
                let mut target = self.regs.read(rs) as u32;
                if target % INSTRUCTION_BYTES != 0 {
                    self.diagnostics
                        .push(line, DiagnosticKind::MisalignedTarget(target));
                    target &= !(INSTRUCTION_BYTES - 1);
                }
                Resolved {
                    target: Some(target),
                    link,
                }
            }
            Instruction::Branch {
                cond,
                rs,
                rt,
                offset,
            } => {
                let taken = bru::taken(cond, self.regs.read(rs), self.regs.read(rt));
                Resolved {
                    target: taken.then(|| bru::branch_target(entry_pc, offset)),
                    link: None,
                }
            }
            _ => return None,
        };
        Some(resolved)
    }
}
