use super::{Bus, Cpu};

impl Cpu {
    /// Advance the CPU by one instruction (or one idle cycle, or one
    /// interrupt dispatch) and return the M-cycles elapsed (1..=6).
    ///
    /// A host scheduler calls this in a loop and uses the return value to
    /// tick the PPU, timers, APU and DMA between steps.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> u8 {
        let ei_armed = self.ime_pending;
        let cycles = self.step_inner(bus);
        self.commit_ei_delay(ei_armed);
        self.m_cycles += u64::from(cycles);
        cycles
    }

    fn step_inner<B: Bus>(&mut self, bus: &mut B) -> u8 {
        // A hard-locked core never advances PC or services interrupts; it
        // still reports one M-cycle so host clocks stay monotonic.
        if self.fault.is_some() {
            return 1;
        }

        // STOP: idle until a joypad input line in P1 ($FF00) reads low.
        if self.stopped {
            let p1 = bus.read8(0xFF00);
            if (p1 & 0x0F) != 0x0F {
                self.stopped = false;
            }
            return 1;
        }

        // Interrupt dispatch happens before the next fetch. This call
        // also wakes a halted core whose IME is clear.
        if self.should_service_interrupt(bus) {
            return self.service_interrupt(bus);
        }

        if self.halted {
            // A halted core issues NOP-like idle cycles; PC is untouched.
            return 1;
        }

        let opcode = self.fetch8(bus);
        self.exec_opcode(bus, opcode)
    }
}
