pub mod nop;
