//! # Machine Invariant Properties
//!
//! Property-based checks over random values and addresses.

use mipsim_core::common::constants::MEMORY_SIZE;
use mipsim_core::isa::abi;
use mipsim_core::soc::Memory;
use mipsim_core::{Config, Simulator};
use proptest::prelude::*;

fn sim(source: &str) -> Simulator {
    Simulator::new(source, &Config::default())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// `$zero` reads zero after every step, whatever targets it.
    #[test]
    fn zero_register_is_always_zero(imm in -0x8000i64..=0xffff, shamt in 0u32..32) {
        let source = format!(
            "addiu $zero, $zero, {imm}\n\
             ori $0, $zero, {imm}\n\
             lui $zero, {}\n\
             sll $zero, $t0, {shamt}\n\
             nor $zero, $zero, $zero\n\
             lw $zero, 0($zero)\n",
            imm & 0xffff
        );
        let mut sim = sim(&source);
        while !sim.is_finished() {
            sim.step();
            prop_assert_eq!(sim.registers()[abi::REG_ZERO], 0);
        }
        prop_assert!(sim.diagnostics().is_empty());
    }

    /// `sw` then `lw` at the same in-range address returns the stored value.
    #[test]
    fn store_load_round_trip(value in any::<i32>(), addr in 0i32..(MEMORY_SIZE as i32 - 3)) {
        let mut sim = sim("sw $t0, 0($t1)\nlw $t2, 0($t1)\n");
        sim.cpu.regs.write(abi::REG_T0, value);
        sim.cpu.regs.write(abi::REG_T1, addr);
        let _ = sim.run();
        prop_assert_eq!(sim.registers()[abi::REG_T2], value);
        prop_assert!(sim.diagnostics().is_empty());
    }

    /// `sltu` compares as unsigned 32-bit values.
    #[test]
    fn sltu_is_unsigned(a in any::<i32>(), b in any::<i32>()) {
        let mut sim = sim("sltu $t2, $t0, $t1\nslt $t3, $t0, $t1\n");
        sim.cpu.regs.write(abi::REG_T0, a);
        sim.cpu.regs.write(abi::REG_T1, b);
        let _ = sim.run();
        prop_assert_eq!(sim.registers()[abi::REG_T2], i32::from((a as u32) < (b as u32)));
        prop_assert_eq!(sim.registers()[abi::REG_T2 + 1], i32::from(a < b));
    }

    /// Out-of-range stores are reported and leave memory untouched.
    #[test]
    fn out_of_range_store_is_isolated(
        value in 1i32..,
        addr in prop_oneof![i32::MIN..-3, (MEMORY_SIZE as i32 - 3)..i32::MAX],
    ) {
        let mut sim = sim("sw $t0, 0($t1)\nsb $t0, 3($t1)\n");
        sim.cpu.regs.write(abi::REG_T0, value);
        sim.cpu.regs.write(abi::REG_T1, addr);
        let _ = sim.run();
        prop_assert_eq!(sim.diagnostics().len(), 2);
        prop_assert!(sim.cpu.memory == Memory::new());
    }
}
