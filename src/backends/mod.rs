// src/backends/mod.rs

//! Display backends and the double-buffer controller they share.
//!
//! A backend owns the pixel memory and hands out a [`Canvas`] over the buffer
//! currently designated "back". [`Backend::flip`] presents that buffer. The
//! swap logic itself lives in [`DoubleBuffer`]; backends only provide the
//! frame storage ([`FrameStore`]) and the device-specific refresh wait and
//! presentation ([`RefreshSync`]).

pub mod drm;
pub mod fbdev;
pub mod headless;

pub use drm::DrmBackend;
pub use fbdev::FramebufferBackend;
pub use headless::HeadlessBackend;

use crate::canvas::{Canvas, CanvasInfo};
use anyhow::{Context, Result};
use log::{trace, warn};
use nix::sys::mman::{mmap, munmap, MapFlags, ProtFlags};
use std::ffi::c_void;
use std::num::NonZeroUsize;
use std::os::fd::AsFd;
use std::ptr::NonNull;

/// Interface every display backend implements. The drawing core only ever
/// talks to this trait.
pub trait Backend {
    /// Geometry and pixel format of the drawable surface.
    fn info(&self) -> CanvasInfo;

    /// A writable view of the back buffer.
    fn canvas(&mut self) -> Canvas<'_>;

    /// Presents the back buffer. With `sync`, the newly presented contents are
    /// also copied into the new back buffer so that later partial redraws
    /// start from the same image.
    fn flip(&mut self, sync: bool) -> Result<()>;
}

/// Indexed storage for one or two equally sized frames.
pub trait FrameStore {
    fn frame_count(&self) -> usize;
    fn frame(&self, index: usize) -> &[u8];
    fn frame_mut(&mut self, index: usize) -> &mut [u8];
    /// Copies frame `from` over frame `to`.
    fn copy_frame(&mut self, from: usize, to: usize);
}

impl<T: AsRef<[u8]> + AsMut<[u8]>> FrameStore for Vec<T> {
    fn frame_count(&self) -> usize {
        self.len()
    }

    fn frame(&self, index: usize) -> &[u8] {
        self[index].as_ref()
    }

    fn frame_mut(&mut self, index: usize) -> &mut [u8] {
        self[index].as_mut()
    }

    fn copy_frame(&mut self, from: usize, to: usize) {
        if from == to {
            return;
        }
        let (low, high) = self.split_at_mut(from.max(to));
        let (src, dst) = if from < to {
            (low[from].as_ref(), high[0].as_mut())
        } else {
            (high[0].as_ref(), low[to].as_mut())
        };
        let len = src.len().min(dst.len());
        dst[..len].copy_from_slice(&src[..len]);
    }
}

/// Device side of a flip.
pub trait RefreshSync {
    /// Blocks until the display is about to start a new refresh.
    fn wait_for_refresh(&mut self) -> Result<()>;
    /// Makes frame `index` the one being scanned out.
    fn show(&mut self, index: usize) -> Result<()>;
}

/// Front/back bookkeeping over a [`FrameStore`].
///
/// With a single frame, front and back are the same buffer and flipping does
/// nothing.
#[derive(Debug)]
pub struct DoubleBuffer<S> {
    store: S,
    front: usize,
}

impl<S: FrameStore> DoubleBuffer<S> {
    /// `front` is the frame currently on screen.
    pub fn new(store: S, front: usize) -> Self {
        let front = if front < store.frame_count() { front } else { 0 };
        Self { store, front }
    }

    pub fn is_double(&self) -> bool {
        self.store.frame_count() > 1
    }

    pub fn front(&self) -> usize {
        self.front
    }

    pub fn back(&self) -> usize {
        if self.is_double() {
            (self.front + 1) % 2
        } else {
            self.front
        }
    }

    pub fn front_frame(&self) -> &[u8] {
        self.store.frame(self.front)
    }

    pub fn back_frame(&self) -> &[u8] {
        self.store.frame(self.back())
    }

    pub fn back_frame_mut(&mut self) -> &mut [u8] {
        let back = self.back();
        self.store.frame_mut(back)
    }

    /// Waits for the next refresh, presents the back frame and swaps roles.
    ///
    /// A failed refresh wait is logged and the swap goes ahead; a failure to
    /// present leaves front and back unchanged.
    pub fn flip<D: RefreshSync + ?Sized>(&mut self, display: &mut D, sync: bool) -> Result<()> {
        if !self.is_double() {
            return Ok(());
        }
        if let Err(e) = display.wait_for_refresh() {
            warn!("DoubleBuffer: refresh wait failed: {:#}", e);
        }
        let back = self.back();
        display.show(back)?;
        self.front = back;
        trace!("DoubleBuffer: frame {} is now front", back);

        if sync {
            self.store.copy_frame(self.front, self.back());
        }
        Ok(())
    }
}

/// A shared read/write memory mapping of a device file, unmapped on drop.
#[derive(Debug)]
pub struct MappedRegion {
    ptr: NonNull<c_void>,
    len: usize,
}

impl MappedRegion {
    pub fn map<F: AsFd>(fd: F, len: usize, offset: libc::off_t) -> Result<Self> {
        let length = NonZeroUsize::new(len).context("Refusing to map an empty region")?;
        // SAFETY: a fresh shared mapping chosen by the kernel; nothing else
        // aliases it until this struct hands out slices.
        let ptr = unsafe {
            mmap(
                None,
                length,
                ProtFlags::PROT_READ | ProtFlags::PROT_WRITE,
                MapFlags::MAP_SHARED,
                fd,
                offset,
            )
        }
        .with_context(|| format!("mmap of {} bytes at offset {:#x} failed", len, offset))?;
        Ok(Self { ptr, len })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl AsRef<[u8]> for MappedRegion {
    fn as_ref(&self) -> &[u8] {
        // SAFETY: `ptr` is valid for `len` bytes until drop.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr().cast::<u8>(), self.len) }
    }
}

impl AsMut<[u8]> for MappedRegion {
    fn as_mut(&mut self) -> &mut [u8] {
        // SAFETY: as above, and `&mut self` guarantees exclusive access.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr().cast::<u8>(), self.len) }
    }
}

impl Drop for MappedRegion {
    fn drop(&mut self) {
        // SAFETY: the mapping was created by `map` and is unmapped only here.
        if let Err(e) = unsafe { munmap(self.ptr, self.len) } {
            warn!("MappedRegion: munmap failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests;
