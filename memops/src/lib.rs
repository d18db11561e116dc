/*
 * Memory Operations
 *
 * Byte-wise memory routines for a target whose toolchain ships no
 * memcpy of its own.
 */

#![cfg_attr(not(test), no_std)]

pub mod copy;

pub use copy::copy_bytes;
