/*
 * Memory-Mapped Register Access
 *
 * Provides a handle over a byte-wide device register at a fixed
 * address. The store is volatile so the compiler never elides,
 * reorders or merges it with neighbouring accesses.
 */

/*
 * struct MmioByte - Byte-wide write-only device register
 *
 * The debug output register is fire-and-forget: software never reads
 * it back and no previous value persists, so no read path exists.
 */
pub struct MmioByte {
	addr: *mut u8,
}

//An MmioByte is just an address, nothing thread-local about it
unsafe impl Send for MmioByte {}

impl MmioByte {
	/*
	 * new - Create a handle over the register at addr
	 * @addr: Address of the register in the board's memory map
	 *
	 * Safety: addr must designate a device register that stays
	 * valid for the life of the program, not ordinary memory.
	 */
	pub const unsafe fn new(addr: usize) -> Self {
		MmioByte { addr: addr as *mut u8 }
	}

	/*
	 * write - Store one byte to the register
	 * @value: Byte to store, every value 0..=255 is legal
	 *
	 * Exactly one volatile store per call. Cannot fail.
	 */
	#[inline]
	pub fn write(&self, value: u8) {
		unsafe {
			self.addr.write_volatile(value);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn writes_exactly_one_cell() {
		let mut cells = [0u8; 3];
		let reg = unsafe { MmioByte::new(cells.as_mut_ptr().wrapping_add(1) as usize) };
		reg.write(0xA5);
		assert_eq!(cells, [0, 0xA5, 0]);
	}

	#[test]
	fn accepts_every_byte_value() {
		let mut cell = 0u8;
		let reg = unsafe { MmioByte::new(&mut cell as *mut u8 as usize) };
		for value in 0..=255u8 {
			reg.write(value);
			assert_eq!(cell, value);
		}
	}
}
