use typed_builder::TypedBuilder;

use super::{Cpu, Registers};

/// Which well-defined state `reset` restores.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetProfile {
    /// Everything zero, PC at 0x0000. This is also the construction state.
    Cold,
    /// The register file the DMG boot ROM leaves behind when it hands
    /// control to cartridge code at 0x0100.
    PostBoot,
}

/// Build-time policy knobs for the core.
#[derive(Clone, Copy, Debug, Default, TypedBuilder)]
pub struct CpuConfig {
    /// Execute the 11 undefined opcodes as 1 M-cycle NOPs (with a
    /// once-per-session warning) instead of hard-locking the core.
    #[builder(default)]
    pub illegal_opcode_as_nop: bool,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// Construct a core in cold-reset state.
    pub fn new() -> Self {
        Self::with_config(CpuConfig::default())
    }

    /// Construct a core in cold-reset state with explicit policy knobs.
    pub fn with_config(config: CpuConfig) -> Self {
        Self {
            regs: Registers::default(),
            ime: false,
            halted: false,
            stopped: false,
            halt_bug: false,
            ime_pending: false,
            fault: None,
            m_cycles: 0,
            stop_warned: false,
            illegal_warned: false,
            config,
        }
    }

    /// Reset the core to one of the two well-defined profiles.
    ///
    /// Everything except the configuration and the once-per-session
    /// warning latches is cleared; the cycle counter restarts at zero.
    pub fn reset(&mut self, profile: ResetProfile) {
        self.regs = Registers::default();
        self.ime = false;
        self.halted = false;
        self.stopped = false;
        self.halt_bug = false;
        self.ime_pending = false;
        self.fault = None;
        self.m_cycles = 0;

        if profile == ResetProfile::PostBoot {
            self.apply_post_boot_state();
        }
    }

    /// The DMG register values after the boot ROM has run, per hardware
    /// tests (Pan Docs "Power-up sequence").
    fn apply_post_boot_state(&mut self) {
        self.regs.a = 0x01;
        self.regs.f = 0xB0;
        self.regs.b = 0x00;
        self.regs.c = 0x13;
        self.regs.d = 0x00;
        self.regs.e = 0xD8;
        self.regs.h = 0x01;
        self.regs.l = 0x4D;
        self.regs.sp = 0xFFFE;
        self.regs.pc = 0x0100;

        // IME is clear when control reaches the cartridge at 0x0100; the
        // program re-enables it via EI/RETI as needed.
        self.ime = false;
    }
}
