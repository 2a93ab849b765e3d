use thiserror::Error;

use super::Cpu;

/// Size in bytes of the fixed save-state record.
///
/// Layout (little-endian): A, F, B, C, D, E, H, L, then SP and PC as
/// u16, then IME, the EI latch, halted and stopped as single bytes,
/// then the 64-bit M-cycle counter.
pub const STATE_LEN: usize = 24;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("save-state record must be {STATE_LEN} bytes, got {0}")]
    BadLength(usize),
}

impl Cpu {
    /// Serialize the observable machine state into the fixed record.
    ///
    /// Transient session state (HALT-bug latch, lock fault, warning
    /// latches, configuration) is intentionally not part of the record.
    pub fn save_state(&self) -> [u8; STATE_LEN] {
        let mut out = [0u8; STATE_LEN];
        out[0] = self.regs.a;
        out[1] = self.regs.f;
        out[2] = self.regs.b;
        out[3] = self.regs.c;
        out[4] = self.regs.d;
        out[5] = self.regs.e;
        out[6] = self.regs.h;
        out[7] = self.regs.l;
        out[8..10].copy_from_slice(&self.regs.sp.to_le_bytes());
        out[10..12].copy_from_slice(&self.regs.pc.to_le_bytes());
        out[12] = self.ime as u8;
        out[13] = self.ime_pending as u8;
        out[14] = self.halted as u8;
        out[15] = self.stopped as u8;
        out[16..24].copy_from_slice(&self.m_cycles.to_le_bytes());
        out
    }

    /// Restore machine state from a record produced by `save_state`.
    ///
    /// Records of any other length are rejected. F is masked to its high
    /// nibble; any lock fault and a pending HALT bug are cleared.
    pub fn load_state(&mut self, bytes: &[u8]) -> Result<(), StateError> {
        if bytes.len() != STATE_LEN {
            return Err(StateError::BadLength(bytes.len()));
        }

        self.regs.a = bytes[0];
        self.regs.f = bytes[1] & 0xF0;
        self.regs.b = bytes[2];
        self.regs.c = bytes[3];
        self.regs.d = bytes[4];
        self.regs.e = bytes[5];
        self.regs.h = bytes[6];
        self.regs.l = bytes[7];
        self.regs.sp = u16::from_le_bytes([bytes[8], bytes[9]]);
        self.regs.pc = u16::from_le_bytes([bytes[10], bytes[11]]);
        self.ime = bytes[12] != 0;
        self.ime_pending = bytes[13] != 0;
        self.halted = bytes[14] != 0;
        self.stopped = bytes[15] != 0;
        self.m_cycles = u64::from_le_bytes([
            bytes[16], bytes[17], bytes[18], bytes[19], bytes[20], bytes[21], bytes[22], bytes[23],
        ]);

        self.halt_bug = false;
        self.fault = None;

        Ok(())
    }
}
