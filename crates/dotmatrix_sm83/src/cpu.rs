mod alu;
mod bus;
mod cb;
mod exec;
mod helpers;
mod init;
mod interrupts;
mod regs;
mod state;
mod step;

#[cfg(test)]
mod tests;

pub use bus::Bus;
pub use init::{CpuConfig, ResetProfile};
pub use interrupts::InterruptSource;
pub use regs::{Flag, Registers};
pub use state::{StateError, STATE_LEN};

use thiserror::Error;

/// A condition that has permanently taken the core out of normal
/// execution. Retrievable via [`Cpu::fault`]; cleared only by `reset`
/// or `load_state`.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Fault {
    /// One of the 11 holes in the opcode map was fetched. On hardware
    /// this locks the CPU until power-off.
    #[error("undefined opcode 0x{opcode:02X} at 0x{addr:04X} hard-locked the CPU")]
    UnknownOpcode { opcode: u8, addr: u16 },
}

/// Sharp SM83 interpreter core.
///
/// The core owns only CPU-local state: the register file, IME and the EI
/// delay latch, the halt/stop/lock states and a running M-cycle counter.
/// Everything else (cartridge, video, timers, the IE/IF registers) is
/// reached through a [`Bus`] borrowed for the duration of each [`step`].
///
/// [`step`]: Cpu::step
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    pub ime: bool,
    pub halted: bool,
    stopped: bool,
    /// Armed by HALT when IME is clear and an interrupt is already
    /// pending; makes the next opcode fetch skip the PC increment.
    halt_bug: bool,
    /// EI delay latch: set by EI, committed to IME after the next
    /// instruction retires.
    ime_pending: bool,
    fault: Option<Fault>,
    /// Total M-cycles since construction or the last reset.
    m_cycles: u64,
    stop_warned: bool,
    illegal_warned: bool,
    config: CpuConfig,
}

impl Cpu {
    #[inline]
    pub fn m_cycles(&self) -> u64 {
        self.m_cycles
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.fault.is_some()
    }

    /// The condition that locked the core, if any.
    #[inline]
    pub fn fault(&self) -> Option<Fault> {
        self.fault
    }
}
