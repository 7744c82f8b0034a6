//! `/dev/mem` register mapping for the DE10-Standard lightweight bridge.
//!
//! Maps the bridge window once at startup and exposes it through the
//! [`RegisterBus`] trait with volatile word accesses.  Mapping failures
//! are fatal at startup — there is no degraded mode without peripherals —
//! so the constructor returns a typed error for `main` to wrap with
//! context.  The mapping is released on drop.

use std::ffi::c_void;
use std::fmt;
use std::ptr;

use rustix::fd::OwnedFd;
use rustix::fs::{open, Mode, OFlags};
use rustix::io::Errno;
use rustix::mm::{mmap, munmap, MapFlags, ProtFlags};

use crate::registers::{RegisterBus, LW_BRIDGE_BASE, LW_BRIDGE_SPAN};

const DEV_MEM: &str = "/dev/mem";

/// Errors while establishing the bridge mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapError {
    /// `/dev/mem` could not be opened (usually missing privileges).
    Open(Errno),
    /// The `mmap` of the bridge window failed.
    Map(Errno),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open(errno) => write!(f, "opening {DEV_MEM} failed: {errno}"),
            Self::Map(errno) => write!(f, "mapping the bridge window failed: {errno}"),
        }
    }
}

impl std::error::Error for MapError {}

/// The mapped lightweight bridge window.
pub struct De10Bus {
    base: *mut u8,
    /// Keeps `/dev/mem` open for the lifetime of the mapping.
    _fd: OwnedFd,
}

impl De10Bus {
    /// Map the bridge window.  Requires read/write access to `/dev/mem`
    /// (root or the appropriate capability).
    pub fn map() -> Result<Self, MapError> {
        let fd = open(DEV_MEM, OFlags::RDWR | OFlags::SYNC, Mode::empty())
            .map_err(MapError::Open)?;

        // SAFETY: mapping a fresh region chosen by the kernel; the fixed
        // physical offset is page-aligned and owned by the FPGA bridge.
        let base = unsafe {
            mmap(
                ptr::null_mut(),
                LW_BRIDGE_SPAN,
                ProtFlags::READ | ProtFlags::WRITE,
                MapFlags::SHARED,
                &fd,
                LW_BRIDGE_BASE as u64,
            )
        }
        .map_err(MapError::Map)?;

        Ok(Self {
            base: base.cast::<u8>(),
            _fd: fd,
        })
    }

    fn register_ptr(&self, offset: usize) -> *mut u32 {
        debug_assert!(offset % 4 == 0, "unaligned register offset {offset:#x}");
        debug_assert!(offset + 4 <= LW_BRIDGE_SPAN, "offset {offset:#x} outside bridge");
        // SAFETY: offset is asserted within the mapped span.
        unsafe { self.base.add(offset).cast::<u32>() }
    }
}

impl RegisterBus for De10Bus {
    fn read(&self, offset: usize) -> u32 {
        // SAFETY: the pointer is within the live mapping; volatile keeps
        // the compiler from caching or eliding peripheral reads.
        unsafe { ptr::read_volatile(self.register_ptr(offset)) }
    }

    fn write(&mut self, offset: usize, value: u32) {
        // SAFETY: as above, for the write side.
        unsafe { ptr::write_volatile(self.register_ptr(offset), value) }
    }
}

impl Drop for De10Bus {
    fn drop(&mut self) {
        // SAFETY: base/span are the exact values returned by mmap.
        let _ = unsafe { munmap(self.base.cast::<c_void>(), LW_BRIDGE_SPAN) };
    }
}
