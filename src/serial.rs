//! Serial interface to the NEO-6M GPS module.
//!
#[allow(unused_imports)]
use defmt::{debug, error, info, trace, warn};
use embedded_hal::serial::Write;
use static_assertions as sa;

/// Largest receive buffer the serial driver will be asked to allocate.
pub const MAX_RX_CAPACITY: u8 = 254;

/// Receive buffer capacity applied when the module is attached.
pub const DEFAULT_RX_CAPACITY: u8 = 100;

/// The NEO-6M ships talking at 9600 baud.
pub const BAUD: u32 = 9_600;

sa::const_assert!(DEFAULT_RX_CAPACITY <= MAX_RX_CAPACITY);

/// Serial drivers with a resizable receive buffer.
///
/// `embedded-hal` has no notion of driver-side buffering, so the HAL uart
/// implements this next to its `Write` impl.
pub trait RxBuffer {
    fn set_rx_capacity(&mut self, capacity: u8);
}

/// NEO-6M attached to a serial port owned by the host runtime.
pub struct Neo6m<U>
where
    U: Write<u8> + RxBuffer,
{
    port: U,
}

impl<U> Neo6m<U>
where
    U: Write<u8> + RxBuffer,
{
    /// Attach to the GPS uart. The port is expected to be set up at [`BAUD`].
    pub fn new(mut port: U) -> Neo6m<U> {
        port.set_rx_capacity(DEFAULT_RX_CAPACITY);
        Neo6m { port }
    }

    /// Resize the driver's receive buffer. Requests above [`MAX_RX_CAPACITY`]
    /// are clamped, not rejected.
    pub fn set_rx_buffer_size(&mut self, size: usize) {
        let capacity = size.min(MAX_RX_CAPACITY as usize) as u8;

        if capacity as usize != size {
            debug!("gps: rx capacity {} clamped to {}", size, capacity);
        }

        self.port.set_rx_capacity(capacity);
    }

    /// Send a command buffer to the module. A `None` buffer is a no-op.
    ///
    /// `len` overrides the buffer's own length and is forwarded as-is: the
    /// module receives that prefix of `buf`.
    pub fn write_buffer(&mut self, buf: Option<&[u8]>, len: Option<usize>) {
        let buf = match buf {
            Some(buf) => buf,
            None => return,
        };

        let len = len.unwrap_or(buf.len());
        trace!("gps: tx {} bytes", len);

        for b in &buf[..len] {
            nb::block!(self.port.write(*b)).ok();
        }
        nb::block!(self.port.flush()).ok();
    }
}
