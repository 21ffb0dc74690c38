//! `rc_codec` — a pulse-train codec for consumer infrared remote control
//! signals: NEC and its extended/42-bit variants, Samsung32, SIRC (12/15/20
//! bit), RC5/RC5X, RC6, Kaseikyo, RCA, Pioneer, and a generic AC protocol.
//!
//! The core model is a pulse train: an alternating sequence of mark and
//! space durations in microseconds (`&[u32]`), always starting with a mark.
//! Each protocol module decodes such a train into a typed [`Command`] and
//! encodes a `Command` back into one, within a [`tolerance`] of the nominal
//! timings. [`dispatch`] tries every known protocol in a fixed preference
//! order and exposes both the typed API and the textual
//! `protocol:key=value,...` wire format read and written by [`textual`].
//!
//! ```
//! let pulses = rc_codec::encode("nec:addr=0x04,cmd=0x08").unwrap();
//! assert_eq!(rc_codec::decode(&pulses), "nec:addr=0x04,cmd=0x08");
//! ```

pub mod bits;
pub mod command;
pub mod dispatch;
pub mod error;
pub mod modulation;
pub mod protocols;
pub mod textual;
pub mod toggle;
pub mod tolerance;

pub use command::{Command, ProtocolId};
pub use dispatch::{decode, decode_command, encode, encode_command, try_decode};
pub use error::{Error, Result};
