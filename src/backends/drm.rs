// src/backends/drm.rs

//! DRM/KMS backend using two dumb buffers.
//!
//! The device is either a `/dev/dri/cardN` node or a file descriptor leased
//! from the display lease manager (see [`lease`]). The first connected
//! connector is driven with its preferred mode; a flip waits for vblank and
//! points the CRTC at the other buffer. The CRTC configuration found at
//! startup is restored on drop.

pub mod lease;

use super::{Backend, DoubleBuffer, MappedRegion, RefreshSync};
use crate::canvas::{Canvas, CanvasInfo, PixelFormat, Rotation};
use anyhow::{bail, Context, Result};
use bitflags::bitflags;
use log::{debug, info, trace, warn};
use std::fs::{File, OpenOptions};
use std::os::fd::{AsRawFd, BorrowedFd, RawFd};

const DRM_CAP_DUMB_BUFFER: u64 = 0x1;
const DRM_MODE_CONNECTED: u32 = 1;
const DRM_VBLANK_RELATIVE: u32 = 0x1;
const FRAME_COUNT: usize = 2;
const BITS_PER_PIXEL: u32 = 32;
const COLOR_DEPTH: u32 = 24;

bitflags! {
    /// `DRM_MODE_TYPE_*`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModeType: u32 {
        const PREFERRED = 1 << 3;
        const USERDEF = 1 << 5;
        const DRIVER = 1 << 6;
    }
}

/// Where the DRM device comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrmSource {
    /// `/dev/dri/card<N>`
    Card(u8),
    /// A named lease handed out by the lease manager.
    Lease(String),
}

#[repr(C)]
#[allow(dead_code)]
#[derive(Debug, Default, Clone, Copy)]
pub struct DrmGetCap {
    capability: u64,
    value: u64,
}

/// Request and reply halves of `union drm_wait_vblank`.
#[repr(C)]
#[allow(dead_code)]
#[derive(Debug, Default, Clone, Copy)]
pub struct DrmWaitVblank {
    type_: u32,
    sequence: u32,
    tval_sec: libc::c_long,
    tval_usec: libc::c_long,
}

#[repr(C)]
#[allow(dead_code)]
#[derive(Debug, Default, Clone, Copy)]
pub struct DrmModeCardRes {
    fb_id_ptr: u64,
    crtc_id_ptr: u64,
    connector_id_ptr: u64,
    encoder_id_ptr: u64,
    count_fbs: u32,
    count_crtcs: u32,
    count_connectors: u32,
    count_encoders: u32,
    min_width: u32,
    max_width: u32,
    min_height: u32,
    max_height: u32,
}

#[repr(C)]
#[allow(dead_code)]
#[derive(Debug, Default, Clone, Copy)]
pub struct DrmModeModeinfo {
    clock: u32,
    hdisplay: u16,
    hsync_start: u16,
    hsync_end: u16,
    htotal: u16,
    hskew: u16,
    vdisplay: u16,
    vsync_start: u16,
    vsync_end: u16,
    vtotal: u16,
    vscan: u16,
    vrefresh: u32,
    flags: u32,
    type_: u32,
    name: [u8; 32],
}

impl DrmModeModeinfo {
    fn mode_type(&self) -> ModeType {
        ModeType::from_bits_truncate(self.type_)
    }

    fn name(&self) -> String {
        let end = self.name.iter().position(|&b| b == 0).unwrap_or(self.name.len());
        String::from_utf8_lossy(&self.name[..end]).into_owned()
    }
}

#[repr(C)]
#[allow(dead_code)]
#[derive(Debug, Default, Clone, Copy)]
pub struct DrmModeCrtc {
    set_connectors_ptr: u64,
    count_connectors: u32,
    crtc_id: u32,
    fb_id: u32,
    x: u32,
    y: u32,
    gamma_size: u32,
    mode_valid: u32,
    mode: DrmModeModeinfo,
}

#[repr(C)]
#[allow(dead_code)]
#[derive(Debug, Default, Clone, Copy)]
pub struct DrmModeGetEncoder {
    encoder_id: u32,
    encoder_type: u32,
    crtc_id: u32,
    possible_crtcs: u32,
    possible_clones: u32,
}

#[repr(C)]
#[allow(dead_code)]
#[derive(Debug, Default, Clone, Copy)]
pub struct DrmModeGetConnector {
    encoders_ptr: u64,
    modes_ptr: u64,
    props_ptr: u64,
    prop_values_ptr: u64,
    count_modes: u32,
    count_props: u32,
    count_encoders: u32,
    encoder_id: u32,
    connector_id: u32,
    connector_type: u32,
    connector_type_id: u32,
    connection: u32,
    mm_width: u32,
    mm_height: u32,
    subpixel: u32,
    pad: u32,
}

#[repr(C)]
#[allow(dead_code)]
#[derive(Debug, Default, Clone, Copy)]
pub struct DrmModeFbCmd {
    fb_id: u32,
    width: u32,
    height: u32,
    pitch: u32,
    bpp: u32,
    depth: u32,
    handle: u32,
}

#[repr(C)]
#[allow(dead_code)]
#[derive(Debug, Default, Clone, Copy)]
pub struct DrmModeCreateDumb {
    height: u32,
    width: u32,
    bpp: u32,
    flags: u32,
    handle: u32,
    pitch: u32,
    size: u64,
}

#[repr(C)]
#[allow(dead_code)]
#[derive(Debug, Default, Clone, Copy)]
pub struct DrmModeMapDumb {
    handle: u32,
    pad: u32,
    offset: u64,
}

#[repr(C)]
#[allow(dead_code)]
#[derive(Debug, Default, Clone, Copy)]
pub struct DrmModeDestroyDumb {
    handle: u32,
}

mod ioctl {
    use super::*;

    nix::ioctl_readwrite!(get_cap, b'd', 0x0c, DrmGetCap);
    nix::ioctl_readwrite!(wait_vblank, b'd', 0x3a, DrmWaitVblank);
    nix::ioctl_readwrite!(get_resources, b'd', 0xa0, DrmModeCardRes);
    nix::ioctl_readwrite!(get_crtc, b'd', 0xa1, DrmModeCrtc);
    nix::ioctl_readwrite!(set_crtc, b'd', 0xa2, DrmModeCrtc);
    nix::ioctl_readwrite!(get_encoder, b'd', 0xa6, DrmModeGetEncoder);
    nix::ioctl_readwrite!(get_connector, b'd', 0xa7, DrmModeGetConnector);
    nix::ioctl_readwrite!(add_fb, b'd', 0xae, DrmModeFbCmd);
    nix::ioctl_readwrite!(rm_fb, b'd', 0xaf, libc::c_uint);
    nix::ioctl_readwrite!(create_dumb, b'd', 0xb2, DrmModeCreateDumb);
    nix::ioctl_readwrite!(map_dumb, b'd', 0xb3, DrmModeMapDumb);
    nix::ioctl_readwrite!(destroy_dumb, b'd', 0xb4, DrmModeDestroyDumb);
}

// --- Mode-setting queries ---

#[derive(Debug, Default)]
struct Resources {
    crtcs: Vec<u32>,
    connectors: Vec<u32>,
}

fn get_resources(fd: RawFd) -> Result<Resources> {
    let mut res = DrmModeCardRes::default();
    unsafe { ioctl::get_resources(fd, &mut res) }.context("DRM_IOCTL_MODE_GETRESOURCES failed")?;

    let mut fbs = vec![0u32; res.count_fbs as usize];
    let mut crtcs = vec![0u32; res.count_crtcs as usize];
    let mut connectors = vec![0u32; res.count_connectors as usize];
    let mut encoders = vec![0u32; res.count_encoders as usize];
    res.fb_id_ptr = fbs.as_mut_ptr() as u64;
    res.crtc_id_ptr = crtcs.as_mut_ptr() as u64;
    res.connector_id_ptr = connectors.as_mut_ptr() as u64;
    res.encoder_id_ptr = encoders.as_mut_ptr() as u64;
    unsafe { ioctl::get_resources(fd, &mut res) }
        .context("DRM_IOCTL_MODE_GETRESOURCES (ids) failed")?;

    crtcs.truncate(res.count_crtcs as usize);
    connectors.truncate(res.count_connectors as usize);
    Ok(Resources { crtcs, connectors })
}

#[derive(Debug)]
struct Connector {
    id: u32,
    connection: u32,
    encoder_id: u32,
    modes: Vec<DrmModeModeinfo>,
    encoders: Vec<u32>,
}

impl Connector {
    /// The mode flagged preferred, else the first one listed.
    fn preferred_mode(&self) -> Option<&DrmModeModeinfo> {
        self.modes
            .iter()
            .find(|mode| mode.mode_type().contains(ModeType::PREFERRED))
            .or_else(|| self.modes.first())
    }
}

fn get_connector(fd: RawFd, id: u32) -> Result<Connector> {
    let mut conn = DrmModeGetConnector {
        connector_id: id,
        ..Default::default()
    };
    unsafe { ioctl::get_connector(fd, &mut conn) }
        .with_context(|| format!("DRM_IOCTL_MODE_GETCONNECTOR {} failed", id))?;

    let mut modes = vec![DrmModeModeinfo::default(); conn.count_modes as usize];
    let mut encoders = vec![0u32; conn.count_encoders as usize];
    conn.modes_ptr = modes.as_mut_ptr() as u64;
    conn.encoders_ptr = encoders.as_mut_ptr() as u64;
    // Properties are not needed; a zero count keeps the kernel from copying them.
    conn.count_props = 0;
    unsafe { ioctl::get_connector(fd, &mut conn) }
        .with_context(|| format!("DRM_IOCTL_MODE_GETCONNECTOR {} (lists) failed", id))?;

    modes.truncate(conn.count_modes as usize);
    encoders.truncate(conn.count_encoders as usize);
    Ok(Connector {
        id,
        connection: conn.connection,
        encoder_id: conn.encoder_id,
        modes,
        encoders,
    })
}

fn get_encoder(fd: RawFd, id: u32) -> Result<DrmModeGetEncoder> {
    let mut encoder = DrmModeGetEncoder {
        encoder_id: id,
        ..Default::default()
    };
    unsafe { ioctl::get_encoder(fd, &mut encoder) }
        .with_context(|| format!("DRM_IOCTL_MODE_GETENCODER {} failed", id))?;
    Ok(encoder)
}

/// The CRTC already driving the connector, or the first one any of its
/// encoders can drive.
fn pick_crtc(fd: RawFd, res: &Resources, connector: &Connector) -> Result<u32> {
    if connector.encoder_id != 0 {
        if let Ok(encoder) = get_encoder(fd, connector.encoder_id) {
            if encoder.crtc_id != 0 {
                return Ok(encoder.crtc_id);
            }
        }
    }
    for &encoder_id in &connector.encoders {
        let Ok(encoder) = get_encoder(fd, encoder_id) else {
            continue;
        };
        let usable = res
            .crtcs
            .iter()
            .take(32)
            .enumerate()
            .find(|(i, _)| encoder.possible_crtcs & (1 << i) != 0);
        if let Some((_, &crtc_id)) = usable {
            return Ok(crtc_id);
        }
    }
    bail!("no CRTC can drive connector {}", connector.id)
}

fn set_crtc(fd: RawFd, crtc: &DrmModeCrtc, connector_id: u32) -> nix::Result<()> {
    let connectors = [connector_id];
    let mut request = *crtc;
    request.set_connectors_ptr = connectors.as_ptr() as u64;
    request.count_connectors = if crtc.fb_id != 0 { 1 } else { 0 };
    unsafe { ioctl::set_crtc(fd, &mut request) }.map(drop)
}

// --- Dumb buffers ---

/// A CPU-mapped scanout buffer registered as a framebuffer.
///
/// Holds the device descriptor by number; the owner keeps the device open
/// for as long as any buffer exists.
#[derive(Debug)]
struct DumbBuffer {
    fd: RawFd,
    handle: u32,
    fb_id: u32,
    pitch: u32,
    len: usize,
    map: Option<MappedRegion>,
}

impl DumbBuffer {
    fn create(fd: RawFd, width: u32, height: u32) -> Result<Self> {
        let mut create = DrmModeCreateDumb {
            width,
            height,
            bpp: BITS_PER_PIXEL,
            ..Default::default()
        };
        unsafe { ioctl::create_dumb(fd, &mut create) }
            .context("DRM_IOCTL_MODE_CREATE_DUMB failed")?;

        // From here on, drop releases whatever has been acquired.
        let mut buffer = DumbBuffer {
            fd,
            handle: create.handle,
            fb_id: 0,
            pitch: create.pitch,
            len: create.pitch as usize * height as usize,
            map: None,
        };

        let mut fb = DrmModeFbCmd {
            width,
            height,
            pitch: create.pitch,
            bpp: BITS_PER_PIXEL,
            depth: COLOR_DEPTH,
            handle: create.handle,
            ..Default::default()
        };
        unsafe { ioctl::add_fb(fd, &mut fb) }.context("DRM_IOCTL_MODE_ADDFB failed")?;
        buffer.fb_id = fb.fb_id;

        let mut map = DrmModeMapDumb {
            handle: create.handle,
            ..Default::default()
        };
        unsafe { ioctl::map_dumb(fd, &mut map) }.context("DRM_IOCTL_MODE_MAP_DUMB failed")?;
        // SAFETY: `fd` is open for the duration of this call.
        let device = unsafe { BorrowedFd::borrow_raw(fd) };
        let region = MappedRegion::map(device, create.size as usize, map.offset as libc::off_t)
            .context("Cannot mmap dumb buffer")?;
        if region.len() < buffer.len {
            bail!("dumb buffer of {} bytes is smaller than a frame", region.len());
        }
        buffer.map = Some(region);

        trace!(
            "DrmBackend: dumb buffer handle {} fb {} pitch {}",
            buffer.handle,
            buffer.fb_id,
            buffer.pitch
        );
        Ok(buffer)
    }
}

impl AsRef<[u8]> for DumbBuffer {
    fn as_ref(&self) -> &[u8] {
        match &self.map {
            Some(map) => &map.as_ref()[..self.len],
            None => &[],
        }
    }
}

impl AsMut<[u8]> for DumbBuffer {
    fn as_mut(&mut self) -> &mut [u8] {
        let len = self.len;
        match &mut self.map {
            Some(map) => &mut map.as_mut()[..len],
            None => &mut [],
        }
    }
}

impl Drop for DumbBuffer {
    fn drop(&mut self) {
        self.map = None;
        if self.fb_id != 0 {
            let mut fb_id: libc::c_uint = self.fb_id;
            if let Err(e) = unsafe { ioctl::rm_fb(self.fd, &mut fb_id) } {
                warn!("DrmBackend: DRM_IOCTL_MODE_RMFB {} failed: {}", self.fb_id, e);
            }
        }
        let mut destroy = DrmModeDestroyDumb {
            handle: self.handle,
        };
        if let Err(e) = unsafe { ioctl::destroy_dumb(self.fd, &mut destroy) } {
            warn!("DrmBackend: DRM_IOCTL_MODE_DESTROY_DUMB {} failed: {}", self.handle, e);
        }
    }
}

// --- Presentation ---

#[derive(Debug)]
struct DrmDisplay {
    file: File,
    crtc_id: u32,
    connector_id: u32,
    mode: DrmModeModeinfo,
    fb_ids: Vec<u32>,
    saved_crtc: Option<DrmModeCrtc>,
}

impl RefreshSync for DrmDisplay {
    fn wait_for_refresh(&mut self) -> Result<()> {
        let mut vblank = DrmWaitVblank {
            type_: DRM_VBLANK_RELATIVE,
            sequence: 1,
            ..Default::default()
        };
        unsafe { ioctl::wait_vblank(self.file.as_raw_fd(), &mut vblank) }
            .context("DRM_IOCTL_WAIT_VBLANK failed")?;
        Ok(())
    }

    fn show(&mut self, index: usize) -> Result<()> {
        let fb_id = *self
            .fb_ids
            .get(index)
            .with_context(|| format!("no framebuffer for frame {}", index))?;
        let crtc = DrmModeCrtc {
            crtc_id: self.crtc_id,
            fb_id,
            mode_valid: 1,
            mode: self.mode,
            ..Default::default()
        };
        set_crtc(self.file.as_raw_fd(), &crtc, self.connector_id)
            .with_context(|| format!("DRM_IOCTL_MODE_SETCRTC to fb {} failed", fb_id))
    }
}

/// Field order matters: buffers are released before the device is closed.
#[derive(Debug)]
pub struct DrmBackend {
    info: CanvasInfo,
    buffers: DoubleBuffer<Vec<DumbBuffer>>,
    display: DrmDisplay,
}

impl DrmBackend {
    pub fn open(source: &DrmSource, rotation: Rotation) -> Result<Self> {
        let file = match source {
            DrmSource::Card(index) => {
                let path = format!("/dev/dri/card{}", index);
                OpenOptions::new()
                    .read(true)
                    .write(true)
                    .open(&path)
                    .with_context(|| format!("Failed to open {}", path))?
            }
            DrmSource::Lease(name) => File::from(lease::request_lease(name)?),
        };
        let fd = file.as_raw_fd();

        let mut cap = DrmGetCap {
            capability: DRM_CAP_DUMB_BUFFER,
            value: 0,
        };
        unsafe { ioctl::get_cap(fd, &mut cap) }.context("DRM_IOCTL_GET_CAP failed")?;
        if cap.value == 0 {
            bail!("DRM device does not support dumb buffers");
        }

        let res = get_resources(fd)?;
        let connector = res
            .connectors
            .iter()
            .filter_map(|&id| match get_connector(fd, id) {
                Ok(connector) => Some(connector),
                Err(e) => {
                    debug!("DrmBackend: skipping connector {}: {:#}", id, e);
                    None
                }
            })
            .find(|c| c.connection == DRM_MODE_CONNECTED && !c.modes.is_empty())
            .context("No connected connector with modes")?;
        let mode = *connector
            .preferred_mode()
            .context("Connector reported no modes")?;
        let crtc_id = pick_crtc(fd, &res, &connector)?;

        let mut saved = DrmModeCrtc {
            crtc_id,
            ..Default::default()
        };
        let saved_crtc = match unsafe { ioctl::get_crtc(fd, &mut saved) } {
            Ok(_) => Some(saved),
            Err(e) => {
                warn!("DrmBackend: cannot save CRTC {} state: {}", crtc_id, e);
                None
            }
        };

        let (width, height) = (u32::from(mode.hdisplay), u32::from(mode.vdisplay));
        info!(
            "DrmBackend: connector {} crtc {} mode {} ({}x{}@{})",
            connector.id,
            crtc_id,
            mode.name(),
            width,
            height,
            mode.vrefresh
        );

        let buffers = (0..FRAME_COUNT)
            .map(|_| DumbBuffer::create(fd, width, height))
            .collect::<Result<Vec<_>>>()?;
        let pitch = buffers.first().map_or(0, |b| b.pitch) as usize;
        let fb_ids = buffers.iter().map(|b| b.fb_id).collect();

        // Dumb buffers are XRGB8888.
        let info = CanvasInfo::from_physical(
            width,
            height,
            BITS_PER_PIXEL,
            pitch,
            rotation,
            PixelFormat::Rgb888,
        );
        let mut display = DrmDisplay {
            file,
            crtc_id,
            connector_id: connector.id,
            mode,
            fb_ids,
            saved_crtc,
        };
        display.show(0).context("Initial mode set failed")?;

        Ok(Self {
            info,
            buffers: DoubleBuffer::new(buffers, 0),
            display,
        })
    }
}

impl Drop for DrmBackend {
    fn drop(&mut self) {
        let Some(saved) = self.display.saved_crtc else {
            return;
        };
        match set_crtc(self.display.file.as_raw_fd(), &saved, self.display.connector_id) {
            Ok(()) => debug!("DrmBackend: restored CRTC {}", saved.crtc_id),
            Err(e) => warn!("DrmBackend: restoring CRTC {} failed: {}", saved.crtc_id, e),
        }
    }
}

impl Backend for DrmBackend {
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

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn mode(type_: u32, name: &str) -> DrmModeModeinfo {
        let mut mode = DrmModeModeinfo {
            type_,
            ..Default::default()
        };
        mode.name[..name.len()].copy_from_slice(name.as_bytes());
        mode
    }

    #[test]
    fn it_should_prefer_the_mode_flagged_preferred() {
        let connector = Connector {
            id: 1,
            connection: DRM_MODE_CONNECTED,
            encoder_id: 0,
            modes: vec![
                mode(ModeType::DRIVER.bits(), "1024x768"),
                mode((ModeType::DRIVER | ModeType::PREFERRED).bits(), "1920x1080"),
            ],
            encoders: vec![],
        };
        assert_eq!(connector.preferred_mode().unwrap().name(), "1920x1080");
    }

    #[test]
    fn it_should_fall_back_to_the_first_mode() {
        let connector = Connector {
            id: 1,
            connection: DRM_MODE_CONNECTED,
            encoder_id: 0,
            modes: vec![mode(0, "800x480"), mode(0, "640x480")],
            encoders: vec![],
        };
        assert_eq!(connector.preferred_mode().unwrap().name(), "800x480");
    }

    #[test]
    fn it_should_match_the_kernel_struct_sizes() {
        assert_eq!(std::mem::size_of::<DrmModeModeinfo>(), 68);
        assert_eq!(std::mem::size_of::<DrmModeCrtc>(), 104);
        assert_eq!(std::mem::size_of::<DrmModeGetConnector>(), 80);
        assert_eq!(std::mem::size_of::<DrmModeCreateDumb>(), 32);
    }
}
