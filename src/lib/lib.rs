// SPDX-License-Identifier: Apache-2.0

mod error;
mod generator;
mod json;
mod ruuid_uuid;

pub use self::error::{ErrorKind, RuuidError};
pub use self::generator::UuidGenerator;
pub use self::ruuid_uuid::{Uuid, UUID_LEN};
