/*
 * Board Support Package (BSP)
 *
 * Lowest hardware-facing layer for the target core including:
 * - Memory-mapped register access
 * - Debug output channel to the host monitor
 * - Program termination signal
 *
 * Boot, trap handling and the linker script live outside this crate.
 */

#![allow(dead_code)]
#![cfg_attr(not(test), no_std)]

pub mod board;
pub mod mmio;
pub mod output;

pub use mmio::MmioByte;
pub use output::{DebugOutput, EOT, exit, init_debug_out, putc};
