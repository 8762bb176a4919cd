use core::mem::MaybeUninit;

use zeroize::Zeroize;

use super::ReleaseMode;

/// Wipe every buffer before it is released, including the buffers left
/// behind by growth and trimming.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Zeroizing;

impl ReleaseMode for Zeroizing {
    #[inline]
    fn prepare_release(bytes: &mut [MaybeUninit<u8>]) {
        bytes.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroizing_wipes_bytes() {
        let mut buf = [MaybeUninit::new(0xAAu8); 16];
        Zeroizing::prepare_release(&mut buf);
        assert!(buf.iter().all(|b| unsafe { b.assume_init() } == 0));
    }
}
