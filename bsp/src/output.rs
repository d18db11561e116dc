/*
 * Debug Output Channel
 *
 * Sends bytes to the host monitor through the board's memory-mapped
 * output register, and signals program termination with an EOT byte.
 * The register accepts one byte per store and acknowledges nothing,
 * so unlike a UART there is no init sequence and no status polling.
 */

use crate::board;
use crate::mmio::MmioByte;

//ASCII End of Transmission, the agreed program-done sentinel
pub const EOT: u8 = 0x04;

pub struct DebugOutput {
	reg: MmioByte,
}

impl DebugOutput {
	/*
	 * new - Create a device over the output register at addr
	 * @addr: Address of the byte-wide output register
	 *
	 * Safety: addr must be the board's debug output register,
	 * valid for the life of the program.
	 */
	pub const unsafe fn new(addr: usize) -> Self {
		DebugOutput { reg: unsafe { MmioByte::new(addr) } }
	}

	//Send a single byte to the host monitor
	#[inline]
	pub fn write_byte(&self, byte: u8) {
		self.reg.write(byte);
	}

	//Send a string byte by byte
	pub fn write_str(&self, s: &str) {
		for byte in s.bytes() {
			self.write_byte(byte);
		}
	}

	//Tell the host monitor the program is done. This only signals;
	//whether the caller halts the core afterwards is its own business.
	pub fn exit(&self) {
		self.write_byte(EOT);
	}
}

//Global debug output instance (lazy init)
use spin::Mutex;
use spin::Once;

static DEBUG_OUT: Once<Mutex<DebugOutput>> = Once::new();

//init global debug output on the board's register address
pub fn init_debug_out() {
	DEBUG_OUT.call_once(|| Mutex::new(unsafe { DebugOutput::new(board::DEBUG_OUT_ADDR) }));
}

//Send one byte through the global device (thread-safe)
pub fn putc(byte: u8) {
	if let Some(out) = DEBUG_OUT.get() {
		out.lock().write_byte(byte);
	}
}

//Signal termination through the global device (thread-safe)
pub fn exit() {
	if let Some(out) = DEBUG_OUT.get() {
		out.lock().exit();
	}
}

//Write string through the global device (thread-safe)
pub fn debug_print(s: &str) {
	if let Some(out) = DEBUG_OUT.get() {
		out.lock().write_str(s);
	}
}

//Debug print macro
#[macro_export]
macro_rules! debug_print {
    ($($arg:tt)*) => {$crate::output::_debug_print(format_args!($($arg)*))
    };
}

//Debug println macro
#[macro_export]
macro_rules! debug_println {
	()=>($crate::debug_print!("\n"));
	($($arg:tt)*) => {$crate::debug_print!("{}\n", format_args!($($arg)*))
	};
}

//Internal function for debug printing with formatting
pub fn _debug_print(args: core::fmt::Arguments) {
	use core::fmt::Write;

	struct DebugWriter;

	impl Write for DebugWriter {
		fn write_str(&mut self, s: &str) -> core::fmt::Result {
			debug_print(s);
			Ok(())
		}
	}
	DebugWriter.write_fmt(args).ok();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn write_byte_hits_only_the_register() {
		let mut cells = [0u8; 3];
		let out = unsafe { DebugOutput::new(cells.as_mut_ptr().wrapping_add(1) as usize) };
		out.write_byte(0x41);
		assert_eq!(cells, [0, 0x41, 0]);
	}

	#[test]
	fn exit_sends_single_eot() {
		let mut cell = 0xFFu8;
		let out = unsafe { DebugOutput::new(&mut cell as *mut u8 as usize) };
		out.exit();
		assert_eq!(cell, EOT);
		assert_eq!(cell, 4);
	}

	#[test]
	fn write_str_ends_on_last_byte() {
		let mut cell = 0u8;
		let out = unsafe { DebugOutput::new(&mut cell as *mut u8 as usize) };
		out.write_str("ok");
		assert_eq!(cell, b'k');
	}
}
