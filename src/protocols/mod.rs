//! Per-protocol encoders and decoders, one module per entry in the
//! `ProtocolId` table. Each module exposes its own `decode`/`encode` pair
//! (plus `decode15`/`encode20`-style siblings where one wire format covers
//! several field widths); [`crate::dispatch`] is the only caller that walks
//! them as a set.

pub mod ac;
pub mod kaseikyo;
pub mod nec;
pub mod pioneer;
pub mod rc5;
pub mod rc6;
pub mod rca;
pub mod samsung32;
pub mod sirc;
