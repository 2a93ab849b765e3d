pub mod cpu;

pub use cpu::{
    Bus, Cpu, CpuConfig, Fault, Flag, InterruptSource, Registers, ResetProfile, StateError,
    STATE_LEN,
};
