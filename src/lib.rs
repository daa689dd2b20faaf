#![cfg_attr(not(test), no_std)]

#[allow(unused_imports)]
use defmt::{debug, error, info, trace, warn};

pub mod serial;

pub use serial::{Neo6m, RxBuffer, BAUD, DEFAULT_RX_CAPACITY, MAX_RX_CAPACITY};
