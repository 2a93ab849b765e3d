use crate::cpu::{Bus, Cpu, Fault};

impl Cpu {
    /// HALT, including the hardware's HALT bug.
    ///
    /// With IME clear and an interrupt already pending the CPU does not
    /// actually halt; instead the next opcode fetch fails to increment PC,
    /// so the byte after HALT executes twice.
    pub(super) fn exec_halt<B: Bus>(&mut self, bus: &mut B) -> u8 {
        if !self.ime && Self::pending_mask(bus) != 0 {
            self.halt_bug = true;
            return 1;
        }

        self.halted = true;
        1
    }

    /// STOP: consume the padding byte and enter the stopped state.
    ///
    /// The stepper approximates hardware wake-up by polling the joypad
    /// lines in P1 ($FF00) on every stopped step. The warning fires once
    /// per session.
    pub(super) fn exec_stop<B: Bus>(&mut self, bus: &mut B) -> u8 {
        // STOP is officially a 2-byte instruction; the second byte is
        // fetched and discarded so PC matches hardware.
        let _padding = self.fetch8(bus);

        if !self.stop_warned {
            log::warn!(
                "STOP at PC=0x{pc:04X}: modeled approximately (wake on a low P1 input line, no low-power timing)",
                pc = self.regs.pc.wrapping_sub(2),
            );
            self.stop_warned = true;
        }

        self.stopped = true;
        self.halted = false;
        1
    }

    /// DI takes effect immediately and cancels a pending EI.
    pub(super) fn exec_di(&mut self) -> u8 {
        self.ime = false;
        self.ime_pending = false;
        1
    }

    /// EI arms the delayed-enable latch; IME is committed only after the
    /// *next* instruction retires. A redundant EI while IME is already
    /// set does not re-arm the latch.
    pub(super) fn exec_ei(&mut self) -> u8 {
        if !self.ime {
            self.ime_pending = true;
        }
        1
    }

    /// One of the 11 holes in the opcode map.
    ///
    /// Default policy mirrors hardware: the core hard-locks and the
    /// condition is reported through `fault()`. With
    /// `illegal_opcode_as_nop` the hole retires as a 1 M-cycle NOP and a
    /// single warning is emitted per session.
    pub(super) fn exec_undefined(&mut self, opcode: u8) -> u8 {
        let addr = self.regs.pc.wrapping_sub(1);

        if self.config.illegal_opcode_as_nop {
            if !self.illegal_warned {
                log::warn!(
                    "undefined opcode 0x{opcode:02X} at PC=0x{addr:04X} executed as NOP",
                    opcode = opcode,
                    addr = addr,
                );
                self.illegal_warned = true;
            }
            return 1;
        }

        log::error!(
            "CPU locked: undefined opcode 0x{opcode:02X} at PC=0x{addr:04X} (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
            opcode = opcode,
            addr = addr,
            sp = self.regs.sp,
            af = self.regs.af(),
            bc = self.regs.bc(),
            de = self.regs.de(),
            hl = self.regs.hl(),
        );
        self.fault = Some(Fault::UnknownOpcode { opcode, addr });
        1
    }
}
