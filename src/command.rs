//! Typed command model: one enum variant per protocol plus a `Raw` escape
//! hatch, in place of a keyword-dispatch table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The closed set of protocol tags, plus `raw`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProtocolId {
    Nec42,
    Nec,
    Nec42Ext,
    NecExt,
    Rc5,
    Rc6,
    Samsung32,
    Sirc20,
    Sirc15,
    Sirc,
    Kaseikyo,
    Rca,
    Pioneer,
    Ac,
    Raw,
}

impl ProtocolId {
    /// Fixed preference order `rc_auto_decode` tries protocols in;
    /// `Raw` is the fallback, not an attempted decoder.
    pub const DISPATCH_ORDER: [ProtocolId; 14] = [
        ProtocolId::Nec42,
        ProtocolId::Nec,
        ProtocolId::Nec42Ext,
        ProtocolId::NecExt,
        ProtocolId::Rc5,
        ProtocolId::Rc6,
        ProtocolId::Samsung32,
        ProtocolId::Sirc20,
        ProtocolId::Sirc15,
        ProtocolId::Sirc,
        ProtocolId::Kaseikyo,
        ProtocolId::Rca,
        ProtocolId::Pioneer,
        ProtocolId::Ac,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProtocolId::Nec42 => "nec42",
            ProtocolId::Nec => "nec",
            ProtocolId::Nec42Ext => "nec42-ext",
            ProtocolId::NecExt => "nec-ext",
            ProtocolId::Rc5 => "rc5",
            ProtocolId::Rc6 => "rc6",
            ProtocolId::Samsung32 => "samsung32",
            ProtocolId::Sirc20 => "sirc20",
            ProtocolId::Sirc15 => "sirc15",
            ProtocolId::Sirc => "sirc",
            ProtocolId::Kaseikyo => "kaseikyo",
            ProtocolId::Rca => "rca",
            ProtocolId::Pioneer => "pioneer",
            ProtocolId::Ac => "ac",
            ProtocolId::Raw => "raw",
        }
    }
}

impl fmt::Display for ProtocolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProtocolId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "nec42" => ProtocolId::Nec42,
            "nec" => ProtocolId::Nec,
            "nec42-ext" => ProtocolId::Nec42Ext,
            "nec-ext" => ProtocolId::NecExt,
            "rc5" => ProtocolId::Rc5,
            "rc6" => ProtocolId::Rc6,
            "samsung32" => ProtocolId::Samsung32,
            "sirc20" => ProtocolId::Sirc20,
            "sirc15" => ProtocolId::Sirc15,
            "sirc" => ProtocolId::Sirc,
            "kaseikyo" => ProtocolId::Kaseikyo,
            "rca" => ProtocolId::Rca,
            "pioneer" => ProtocolId::Pioneer,
            "ac" => ProtocolId::Ac,
            "raw" => ProtocolId::Raw,
            other => return Err(Error::format(format!("unknown format: {other}"))),
        })
    }
}

/// A symbolic IR command: a protocol tag plus its typed fields, or a raw
/// literal pulse train.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Nec { addr: u8, cmd: u8 },
    NecExt { addr: u16, cmd: u16 },
    Nec42 { addr: u16, cmd: u8 },
    Nec42Ext { addr: u32, cmd: u16 },
    Samsung32 { addr: u8, cmd: u8 },
    Sirc { addr: u8, cmd: u8 },
    Sirc15 { addr: u8, cmd: u8 },
    Sirc20 { addr: u16, cmd: u8 },
    Rc5 { addr: u8, cmd: u8, toggle: Option<bool> },
    Rc6 { addr: u8, cmd: u8, toggle: Option<bool> },
    Kaseikyo { vendor_id: u16, genre1: u8, genre2: u8, data: u16, id: u8 },
    Rca { addr: u8, cmd: u8 },
    Pioneer { addr: u8, cmd: u8 },
    Ac { addr: u8, cmd: u16, double: bool },
    Raw(Vec<u32>),
}

impl Command {
    /// Serializes this command to JSON, for callers embedding it in larger
    /// JSON state rather than the textual `protocol:key=value,...` format.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parses a command previously produced by [`Command::to_json`].
    pub fn from_json(s: &str) -> serde_json::Result<Command> {
        serde_json::from_str(s)
    }

    pub fn protocol_id(&self) -> ProtocolId {
        match self {
            Command::Nec { .. } => ProtocolId::Nec,
            Command::NecExt { .. } => ProtocolId::NecExt,
            Command::Nec42 { .. } => ProtocolId::Nec42,
            Command::Nec42Ext { .. } => ProtocolId::Nec42Ext,
            Command::Samsung32 { .. } => ProtocolId::Samsung32,
            Command::Sirc { .. } => ProtocolId::Sirc,
            Command::Sirc15 { .. } => ProtocolId::Sirc15,
            Command::Sirc20 { .. } => ProtocolId::Sirc20,
            Command::Rc5 { .. } => ProtocolId::Rc5,
            Command::Rc6 { .. } => ProtocolId::Rc6,
            Command::Kaseikyo { .. } => ProtocolId::Kaseikyo,
            Command::Rca { .. } => ProtocolId::Rca,
            Command::Pioneer { .. } => ProtocolId::Pioneer,
            Command::Ac { .. } => ProtocolId::Ac,
            Command::Raw(_) => ProtocolId::Raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_id_round_trips_through_str() {
        for id in ProtocolId::DISPATCH_ORDER {
            assert_eq!(id.as_str().parse::<ProtocolId>().unwrap(), id);
        }
        assert_eq!("raw".parse::<ProtocolId>().unwrap(), ProtocolId::Raw);
    }

    #[test]
    fn unknown_tag_is_a_format_error() {
        let err = "not-a-protocol".parse::<ProtocolId>().unwrap_err();
        assert!(matches!(err, Error::InvalidFormat(_)));
    }

    #[test]
    fn command_reports_its_own_protocol_id() {
        assert_eq!(Command::Nec { addr: 1, cmd: 2 }.protocol_id(), ProtocolId::Nec);
        assert_eq!(Command::Raw(vec![1, 2, 3]).protocol_id(), ProtocolId::Raw);
    }

    #[test]
    fn json_round_trips() {
        let cmd = Command::Rc5 { addr: 0x05, cmd: 0x05, toggle: Some(true) };
        let json = cmd.to_json().unwrap();
        assert_eq!(Command::from_json(&json).unwrap(), cmd);
    }
}
