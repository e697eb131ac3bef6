// SPDX-License-Identifier: Apache-2.0

use rand::{rngs::OsRng, CryptoRng, RngCore};

use crate::{ruuid_uuid::UUID_LEN, ErrorKind, RuuidError, Uuid};

/// Version 4 UUID generator drawing from the secure random source it owns.
///
/// The default generator uses the operating system random source which is
/// safe for concurrent use. Other sources are owned by the generator, so
/// share it across threads only behind your own synchronization.
#[derive(Debug, Clone)]
pub struct UuidGenerator<R = OsRng> {
    rng: R,
}

impl Default for UuidGenerator<OsRng> {
    fn default() -> Self {
        Self::new(OsRng)
    }
}

impl<R> UuidGenerator<R>
where
    R: RngCore + CryptoRng,
{
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Panics if the random source cannot supply 16 bytes.
    pub fn generate(&mut self) -> Uuid {
        let mut bytes = [0u8; UUID_LEN];
        if let Err(e) = self.rng.try_fill_bytes(&mut bytes) {
            let e = RuuidError::new(
                ErrorKind::EntropyFailure,
                format!("error reading from random source: {e}"),
            );
            log::error!("{e}");
            panic!("{e}");
        }
        let uuid = Uuid::from_random_bytes(bytes);
        log::trace!("Generated UUID {uuid}");
        uuid
    }

    pub fn generate_many(&mut self, count: usize) -> Vec<Uuid> {
        (0..count).map(|_| self.generate()).collect()
    }
}
