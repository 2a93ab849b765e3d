use super::{Bus, Cpu, Flag};

impl Cpu {
    /// Execute a CB-prefixed instruction (rotates, shifts, SWAP and the
    /// BIT/RES/SET families).
    ///
    /// The 256-entry secondary table is fully regular: the top two bits
    /// select the operation family, the middle three the sub-op or bit
    /// index, the low three the r[z] operand. Cycle counts include the
    /// 0xCB prefix fetch already paid by the caller.
    pub(super) fn exec_cb<B: Bus>(&mut self, bus: &mut B) -> u8 {
        let cb = self.fetch8(bus);
        let x = cb >> 6;
        let y = (cb >> 3) & 0x07;
        let z = cb & 0x07;

        match x {
            0 => {
                // Rotates and shifts.
                let mut value = self.read_reg8(bus, z);
                let cycles = if z == 6 { 4 } else { 2 };

                match y {
                    // RLC r
                    0 => {
                        let carry = (value & 0x80) != 0;
                        value = value.rotate_left(1);
                        self.clear_flags();
                        self.set_flag(Flag::Z, value == 0);
                        self.set_flag(Flag::C, carry);
                    }
                    // RRC r
                    1 => {
                        let carry = (value & 0x01) != 0;
                        value = value.rotate_right(1);
                        self.clear_flags();
                        self.set_flag(Flag::Z, value == 0);
                        self.set_flag(Flag::C, carry);
                    }
                    // RL r
                    2 => {
                        let carry_out = (value & 0x80) != 0;
                        let carry_in = if self.get_flag(Flag::C) { 1 } else { 0 };
                        value = (value << 1) | carry_in;
                        self.clear_flags();
                        self.set_flag(Flag::Z, value == 0);
                        self.set_flag(Flag::C, carry_out);
                    }
                    // RR r
                    3 => {
                        let carry_out = (value & 0x01) != 0;
                        let carry_in = if self.get_flag(Flag::C) { 0x80 } else { 0 };
                        value = (value >> 1) | carry_in;
                        self.clear_flags();
                        self.set_flag(Flag::Z, value == 0);
                        self.set_flag(Flag::C, carry_out);
                    }
                    // SLA r
                    4 => {
                        let carry = (value & 0x80) != 0;
                        value <<= 1;
                        self.clear_flags();
                        self.set_flag(Flag::Z, value == 0);
                        self.set_flag(Flag::C, carry);
                    }
                    // SRA r: arithmetic shift, bit 7 is replicated.
                    5 => {
                        let carry = (value & 0x01) != 0;
                        let msb = value & 0x80;
                        value = (value >> 1) | msb;
                        self.clear_flags();
                        self.set_flag(Flag::Z, value == 0);
                        self.set_flag(Flag::C, carry);
                    }
                    // SWAP r
                    6 => {
                        value = (value << 4) | (value >> 4);
                        self.clear_flags();
                        self.set_flag(Flag::Z, value == 0);
                    }
                    // SRL r
                    7 => {
                        let carry = (value & 0x01) != 0;
                        value >>= 1;
                        self.clear_flags();
                        self.set_flag(Flag::Z, value == 0);
                        self.set_flag(Flag::C, carry);
                    }
                    _ => unreachable!(),
                }

                self.write_reg8(bus, z, value);
                cycles
            }
            1 => {
                // BIT b, r: Z from the tested bit, C preserved.
                let value = self.read_reg8(bus, z);
                let bit_set = (value & (1 << y)) != 0;
                let carry = self.get_flag(Flag::C);
                self.clear_flags();
                self.set_flag(Flag::Z, !bit_set);
                self.set_flag(Flag::H, true);
                self.set_flag(Flag::C, carry);

                if z == 6 {
                    3
                } else {
                    2
                }
            }
            2 => {
                // RES b, r: no flags.
                let value = self.read_reg8(bus, z) & !(1 << y);
                self.write_reg8(bus, z, value);
                if z == 6 {
                    4
                } else {
                    2
                }
            }
            3 => {
                // SET b, r: no flags.
                let value = self.read_reg8(bus, z) | (1 << y);
                self.write_reg8(bus, z, value);
                if z == 6 {
                    4
                } else {
                    2
                }
            }
            _ => unreachable!(),
        }
    }
}
