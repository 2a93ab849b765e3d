use crate::cpu::{Bus, Cpu, Flag};

impl Cpu {
    /// The ALU quadrant (0x80-0xBF): operation from y, operand from r[z].
    pub(super) fn exec_alu_r<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u8 {
        debug_assert!((0x80..=0xBF).contains(&opcode));

        let operation = (opcode >> 3) & 0x07;
        let src = opcode & 0x07;
        let value = self.read_reg8(bus, src);

        match operation {
            0 => self.alu_add(value, false),
            1 => self.alu_add(value, true),
            2 => self.alu_sub(value, false),
            3 => self.alu_sub(value, true),
            4 => self.alu_and(value),
            5 => self.alu_xor(value),
            6 => self.alu_or(value),
            7 => self.alu_cp(value),
            _ => unreachable!(),
        }

        if src == 6 {
            2
        } else {
            1
        }
    }

    pub(super) fn exec_alu_d8<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u8 {
        let value = self.fetch8(bus);

        match opcode {
            0xC6 => self.alu_add(value, false),
            0xCE => self.alu_add(value, true),
            0xD6 => self.alu_sub(value, false),
            0xDE => self.alu_sub(value, true),
            0xE6 => self.alu_and(value),
            0xEE => self.alu_xor(value),
            0xF6 => self.alu_or(value),
            0xFE => self.alu_cp(value),
            _ => unreachable!(),
        }

        2
    }

    /// RLCA/RRCA/RLA/RRA.
    ///
    /// Unlike their CB-prefixed cousins these always clear Z instead of
    /// computing it from the result.
    pub(super) fn exec_rotate_a(&mut self, opcode: u8) -> u8 {
        debug_assert!(matches!(opcode, 0x07 | 0x0F | 0x17 | 0x1F));

        let a = self.regs.a;
        let (result, carry_out) = match opcode {
            // RLCA
            0x07 => (a.rotate_left(1), (a & 0x80) != 0),
            // RRCA
            0x0F => (a.rotate_right(1), (a & 0x01) != 0),
            // RLA
            0x17 => {
                let carry_in = if self.get_flag(Flag::C) { 1 } else { 0 };
                ((a << 1) | carry_in, (a & 0x80) != 0)
            }
            // RRA
            0x1F => {
                let carry_in = if self.get_flag(Flag::C) { 0x80 } else { 0 };
                ((a >> 1) | carry_in, (a & 0x01) != 0)
            }
            _ => unreachable!(),
        };

        self.regs.a = result;
        self.clear_flags();
        self.set_flag(Flag::C, carry_out);
        1
    }

    pub(super) fn exec_add_hl_rp(&mut self, opcode: u8) -> u8 {
        debug_assert!(matches!(opcode, 0x09 | 0x19 | 0x29 | 0x39));

        let value = match (opcode >> 4) & 0x03 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => self.regs.hl(),
            3 => self.regs.sp,
            _ => unreachable!(),
        };
        self.alu_add16_hl(value);
        2
    }

    pub(super) fn exec_add_sp_e8<B: Bus>(&mut self, bus: &mut B) -> u8 {
        let imm = self.fetch8(bus);
        self.regs.sp = self.alu_add16_signed(self.regs.sp, imm);
        4
    }

    pub(super) fn exec_ld_hl_sp_e8<B: Bus>(&mut self, bus: &mut B) -> u8 {
        let imm = self.fetch8(bus);
        let result = self.alu_add16_signed(self.regs.sp, imm);
        self.regs.set_hl(result);
        3
    }

    pub(super) fn exec_daa(&mut self) -> u8 {
        self.alu_daa();
        1
    }

    pub(super) fn exec_cpl(&mut self) -> u8 {
        self.regs.a = !self.regs.a;
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, true);
        1
    }

    pub(super) fn exec_scf(&mut self) -> u8 {
        self.set_flag(Flag::C, true);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        1
    }

    pub(super) fn exec_ccf(&mut self) -> u8 {
        let carry = self.get_flag(Flag::C);
        self.set_flag(Flag::C, !carry);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        1
    }
}
