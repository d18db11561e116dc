/*
 * Board Memory Map
 *
 * Register addresses per supported board. The addresses come from the
 * surrounding system's memory map, so each board gets its own feature
 * and constant instead of a literal buried in driver code.
 */

//Debug output register of the PULPino-style core
#[cfg(feature = "board-pulpino")]
pub const DEBUG_OUT_ADDR: usize = 0x8400_0004;
