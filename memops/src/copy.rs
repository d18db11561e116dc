/*
 * Byte-Wise Memory Copy
 *
 * Copies run from low address to high, one byte per step, reading
 * each source byte before writing its destination slot.
 */

/*
 * copy_bytes - Copy count bytes from src to dst
 * @dst: Destination start address
 * @src: Source start address
 * @count: Number of bytes to copy
 *
 * Copies in ascending index order. Does nothing when count is 0.
 *
 * Safety: both spans must be valid for count bytes and must not
 * overlap. Overlap is undefined behavior, this is not a memmove.
 * No bounds are checked.
 */
#[inline]
pub unsafe fn copy_bytes(dst: *mut u8, src: *const u8, count: usize) {
	debug_assert!(
		(src as usize) + count <= (dst as usize) || (dst as usize) + count <= (src as usize),
		"copy spans overlap"
	);

	for i in 0..count {
		unsafe {
			let byte = src.add(i).read();
			dst.add(i).write(byte);
		}
	}
}

/*
 * memcpy - C ABI entry the compiler lowers block copies to
 *
 * Only emitted for freestanding builds. Hosted test builds link the
 * platform libc, which already owns this symbol.
 */
#[cfg(target_os = "none")]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn memcpy(dst: *mut u8, src: *const u8, count: usize) -> *mut u8 {
	unsafe {
		copy_bytes(dst, src, count);
	}
	dst
}
