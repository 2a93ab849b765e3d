use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// The set of interrupt lines that are both enabled and requested.
    #[inline]
    pub(in crate::cpu) fn pending_mask<B: Bus>(bus: &mut B) -> u8 {
        let ie = bus.read8(0xFFFF);
        let iflags = bus.read8(0xFF0F);
        ie & iflags & 0x1F
    }

    /// Decide whether a maskable interrupt should be serviced right now.
    ///
    /// Also implements the wake-without-service case: a halted CPU with
    /// IME clear leaves the halt state when a line becomes pending, but
    /// no dispatch happens and execution simply continues.
    pub(in crate::cpu) fn should_service_interrupt<B: Bus>(&mut self, bus: &mut B) -> bool {
        if Self::pending_mask(bus) == 0 {
            return false;
        }

        if self.halted && !self.ime {
            self.halted = false;
            return false;
        }

        self.ime
    }
}
