// src/backends/fbdev.rs

//! Linux framebuffer (`/dev/fbN`) backend.
//!
//! Double buffering uses the panning interface: the virtual screen is made
//! twice as tall as the visible one and a flip pans between the two halves.
//! Drivers without panning support run single-buffered.

use super::{Backend, DoubleBuffer, FrameStore, MappedRegion, RefreshSync};
use crate::canvas::{Canvas, CanvasInfo, Channel, PixelFormat, Rotation};
use anyhow::{bail, Context, Result};
use log::{debug, info, warn};
use std::fs::{File, OpenOptions};
use std::os::fd::{AsRawFd, RawFd};

#[repr(C)]
#[allow(dead_code)]
#[derive(Debug, Default, Clone, Copy)]
pub struct FbBitfield {
    offset: u32,
    length: u32,
    msb_right: u32,
}

impl FbBitfield {
    fn new(offset: u32, length: u32) -> Self {
        Self {
            offset,
            length,
            msb_right: 0,
        }
    }

    fn channel(&self) -> Channel {
        Channel::new(self.offset, self.length)
    }
}

/// `struct fb_var_screeninfo`
#[repr(C)]
#[allow(dead_code)]
#[derive(Debug, Default, Clone, Copy)]
pub struct FbVarScreeninfo {
    xres: u32,
    yres: u32,
    xres_virtual: u32,
    yres_virtual: u32,
    xoffset: u32,
    yoffset: u32,
    bits_per_pixel: u32,
    grayscale: u32,
    red: FbBitfield,
    green: FbBitfield,
    blue: FbBitfield,
    transp: FbBitfield,
    nonstd: u32,
    activate: u32,
    height: u32,
    width: u32,
    accel_flags: u32,
    pixclock: u32,
    left_margin: u32,
    right_margin: u32,
    upper_margin: u32,
    lower_margin: u32,
    hsync_len: u32,
    vsync_len: u32,
    sync: u32,
    vmode: u32,
    rotate: u32,
    colorspace: u32,
    reserved: [u32; 4],
}

/// `struct fb_fix_screeninfo`
#[repr(C)]
#[allow(dead_code)]
#[derive(Debug, Default, Clone, Copy)]
pub struct FbFixScreeninfo {
    id: [u8; 16],
    smem_start: libc::c_ulong,
    smem_len: u32,
    type_: u32,
    type_aux: u32,
    visual: u32,
    xpanstep: u16,
    ypanstep: u16,
    ywrapstep: u16,
    line_length: u32,
    mmio_start: libc::c_ulong,
    mmio_len: u32,
    accel: u32,
    capabilities: u16,
    reserved: [u16; 2],
}

mod ioctl {
    use super::{FbFixScreeninfo, FbVarScreeninfo};

    const FBIOGET_VSCREENINFO: u32 = 0x4600;
    const FBIOPUT_VSCREENINFO: u32 = 0x4601;
    const FBIOGET_FSCREENINFO: u32 = 0x4602;
    const FBIOPAN_DISPLAY: u32 = 0x4606;

    nix::ioctl_read_bad!(get_vscreeninfo, FBIOGET_VSCREENINFO, FbVarScreeninfo);
    nix::ioctl_readwrite_bad!(put_vscreeninfo, FBIOPUT_VSCREENINFO, FbVarScreeninfo);
    nix::ioctl_read_bad!(get_fscreeninfo, FBIOGET_FSCREENINFO, FbFixScreeninfo);
    nix::ioctl_readwrite_bad!(pan_display, FBIOPAN_DISPLAY, FbVarScreeninfo);
    nix::ioctl_write_ptr!(wait_for_vsync, b'F', 0x20, u32);
}

fn read_var(fd: RawFd) -> Result<FbVarScreeninfo> {
    let mut var = FbVarScreeninfo::default();
    unsafe { ioctl::get_vscreeninfo(fd, &mut var) }
        .context("FBIOGET_VSCREENINFO failed")?;
    Ok(var)
}

fn read_fix(fd: RawFd) -> Result<FbFixScreeninfo> {
    let mut fix = FbFixScreeninfo::default();
    unsafe { ioctl::get_fscreeninfo(fd, &mut fix) }
        .context("FBIOGET_FSCREENINFO failed")?;
    Ok(fix)
}

/// Tries 32 bpp 8-8-8, then 16 bpp 5-6-5.
fn change_pixel_format(fd: RawFd, var: &mut FbVarScreeninfo) -> Result<()> {
    // Drop any oversized virtual height left for console scrolling; it makes
    // the depth change more likely to fit in the driver's memory.
    var.yres_virtual = var.yres;

    let candidates = [
        (32, FbBitfield::new(0, 8), FbBitfield::new(8, 8), FbBitfield::new(16, 8)),
        (16, FbBitfield::new(11, 5), FbBitfield::new(5, 6), FbBitfield::new(0, 5)),
    ];
    for (bpp, red, green, blue) in candidates {
        var.bits_per_pixel = bpp;
        var.red = red;
        var.green = green;
        var.blue = blue;
        var.transp = FbBitfield::default();
        match unsafe { ioctl::put_vscreeninfo(fd, var) } {
            Ok(_) => {
                info!("FramebufferBackend: switched to a {} bpp framebuffer", bpp);
                return Ok(());
            }
            Err(e) => warn!("FramebufferBackend: switching to {} bpp failed: {}", bpp, e),
        }
    }
    bail!("no supported pixel format could be set")
}

/// Equally sized frames laid out back to back inside one mapping.
#[derive(Debug)]
pub struct SplitRegion {
    region: MappedRegion,
    base: usize,
    frame_len: usize,
    count: usize,
}

impl SplitRegion {
    pub fn new(region: MappedRegion, base: usize, frame_len: usize, count: usize) -> Result<Self> {
        let needed = base + frame_len * count;
        if needed > region.len() {
            bail!(
                "{} frame(s) of {} bytes at offset {} exceed the {} byte mapping",
                count,
                frame_len,
                base,
                region.len()
            );
        }
        Ok(Self {
            region,
            base,
            frame_len,
            count,
        })
    }

    fn range(&self, index: usize) -> std::ops::Range<usize> {
        let start = self.base + index * self.frame_len;
        start..start + self.frame_len
    }
}

impl FrameStore for SplitRegion {
    fn frame_count(&self) -> usize {
        self.count
    }

    fn frame(&self, index: usize) -> &[u8] {
        &self.region.as_ref()[self.range(index)]
    }

    fn frame_mut(&mut self, index: usize) -> &mut [u8] {
        let range = self.range(index);
        &mut self.region.as_mut()[range]
    }

    fn copy_frame(&mut self, from: usize, to: usize) {
        let src = self.range(from);
        let dst = self.range(to).start;
        self.region.as_mut().copy_within(src, dst);
    }
}

#[derive(Debug)]
struct FbDisplay {
    file: File,
    var: FbVarScreeninfo,
    vsync_supported: bool,
}

impl RefreshSync for FbDisplay {
    fn wait_for_refresh(&mut self) -> Result<()> {
        if !self.vsync_supported {
            return Ok(());
        }
        let screen: u32 = 0;
        if let Err(e) = unsafe { ioctl::wait_for_vsync(self.file.as_raw_fd(), &screen) } {
            self.vsync_supported = false;
            return Err(e).context("FBIO_WAITFORVSYNC failed, flipping without vsync from now on");
        }
        Ok(())
    }

    fn show(&mut self, index: usize) -> Result<()> {
        self.var.xoffset = 0;
        self.var.yoffset = index as u32 * self.var.yres;
        if let Err(e) = unsafe { ioctl::pan_display(self.file.as_raw_fd(), &mut self.var) } {
            warn!("FramebufferBackend: FBIOPAN_DISPLAY failed: {}", e);
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct FramebufferBackend {
    info: CanvasInfo,
    buffers: DoubleBuffer<SplitRegion>,
    display: FbDisplay,
}

impl FramebufferBackend {
    /// Opens `/dev/fb<index>` and prepares it for drawing.
    pub fn open(index: u8, rotation: Rotation) -> Result<Self> {
        let path = format!("/dev/fb{}", index);
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&path)
            .with_context(|| format!("Failed to open {}", path))?;
        let fd = file.as_raw_fd();

        let mut var = read_var(fd)?;
        if var.bits_per_pixel < 16 {
            warn!(
                "FramebufferBackend: {} bpp is not supported, trying to change pixel format",
                var.bits_per_pixel
            );
            change_pixel_format(fd, &mut var)?;
            var = read_var(fd).context("Re-reading variable info after format change")?;
        }
        // line_length can change along with the pixel format.
        let mut fix = read_fix(fd)?;

        let mut double = false;
        if let Err(e) = unsafe { ioctl::pan_display(fd, &mut var) } {
            warn!(
                "FramebufferBackend: FBIOPAN_DISPLAY not supported ({}), double buffering disabled",
                e
            );
        } else if var.yres_virtual == var.yres * 2 {
            debug!("FramebufferBackend: virtual resolution already double");
            double = true;
        } else {
            var.yres_virtual = var.yres * 2;
            match unsafe { ioctl::put_vscreeninfo(fd, &mut var) } {
                Err(e) => warn!(
                    "FramebufferBackend: FBIOPUT_VSCREENINFO failed ({}), double buffering disabled",
                    e
                ),
                Ok(_) => {
                    fix = read_fix(fd).context("Re-reading fixed info after doubling")?;
                    var = read_var(fd)?;
                    debug!("FramebufferBackend: virtual resolution set to double");
                    double = true;
                }
            }
        }

        let format = PixelFormat::classify(var.red.channel(), var.green.channel(), var.blue.channel());
        let stride = fix.line_length as usize;
        let info = CanvasInfo::from_physical(
            var.xres,
            var.yres,
            var.bits_per_pixel,
            stride,
            rotation,
            format,
        );
        info!(
            "FramebufferBackend: {} is {}x{} {} bpp, stride {}, format {:?}",
            path, var.xres, var.yres, var.bits_per_pixel, stride, format
        );

        let region = MappedRegion::map(&file, fix.smem_len as usize, 0)
            .with_context(|| format!("Cannot mmap {}", path))?;
        let page_size = match unsafe { libc::sysconf(libc::_SC_PAGESIZE) } {
            size if size > 0 => size as usize,
            _ => 4096,
        };
        let base = fix.smem_start as usize % page_size;
        let frame_len = info.frame_len();

        let mut count = if double { 2 } else { 1 };
        if base + frame_len * count > region.len() {
            warn!("FramebufferBackend: mapping too small for two frames, double buffering disabled");
            count = 1;
        }
        let front = if count == 2 && var.yres > 0 && var.yoffset >= var.yres {
            1
        } else {
            0
        };
        let store = SplitRegion::new(region, base, frame_len, count)?;

        Ok(Self {
            info,
            buffers: DoubleBuffer::new(store, front),
            display: FbDisplay {
                file,
                var,
                vsync_supported: true,
            },
        })
    }
}

impl Backend for FramebufferBackend {
    fn info(&self) -> CanvasInfo {
        self.info
    }

    fn canvas(&mut self) -> Canvas<'_> {
        Canvas::new(self.info, self.buffers.back_frame_mut())
    }

    fn flip(&mut self, sync: bool) -> Result<()> {
        self.buffers.flip(&mut self.display, sync)
    }
}
