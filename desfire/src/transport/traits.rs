// desfire/src/transport/traits.rs

//! The [`Transceive`] trait.

use crate::Result;

/// Transceive trait abstracts the reader away from framing logic.
///
/// One call exchanges one command APDU for one response APDU. An I/O
/// failure of any kind is reported as `Err`, normally
/// [`Error::Communication`](crate::Error::Communication); the session never
/// retries. Timeouts are the implementor's business.
pub trait Transceive {
    /// Send `command` and return the card's answer (payload plus trailer).
    /// `max_response_len` is the largest answer the caller can accept.
    fn transceive(&mut self, command: &[u8], max_response_len: usize) -> Result<Vec<u8>>;
}

impl<T: Transceive + ?Sized> Transceive for Box<T> {
    fn transceive(&mut self, command: &[u8], max_response_len: usize) -> Result<Vec<u8>> {
        (**self).transceive(command, max_response_len)
    }
}

impl<T: Transceive + ?Sized> Transceive for &mut T {
    fn transceive(&mut self, command: &[u8], max_response_len: usize) -> Result<Vec<u8>> {
        (**self).transceive(command, max_response_len)
    }
}
