use crate::cpu::Cpu;

impl Cpu {
    /// Commit the EI delay at an instruction boundary.
    ///
    /// `armed_before_step` is the latch state sampled before the step
    /// began: IME turns on only after the instruction *following* EI has
    /// retired. A DI executed during the step clears the latch and
    /// cancels the commit.
    #[inline]
    pub(in crate::cpu) fn commit_ei_delay(&mut self, armed_before_step: bool) {
        if armed_before_step && self.ime_pending {
            self.ime = true;
            self.ime_pending = false;
        }
    }
}
