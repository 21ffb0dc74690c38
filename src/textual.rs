//! The `protocol:key=value,...` / `raw:v,v,...` textual command format:
//! parsing into [`Command`] and canonical hex-formatted rendering back out.

use std::collections::HashMap;

use crate::command::{Command, ProtocolId};
use crate::error::Error;

/// Parses an integer with base autodetection: `0x`/`0X` hex, `0o`/`0O`
/// octal, `0b`/`0B` binary, otherwise decimal — the subset of Python's
/// `int(v, 0)` this format actually needs.
pub fn parse_int(s: &str) -> Result<u64, Error> {
    let s = s.trim();
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .map(|rest| (rest, 16))
        .or_else(|| s.strip_prefix("0o").or_else(|| s.strip_prefix("0O")).map(|rest| (rest, 8)))
        .or_else(|| s.strip_prefix("0b").or_else(|| s.strip_prefix("0B")).map(|rest| (rest, 2)));

    let result = match digits {
        Some((rest, radix)) => u64::from_str_radix(rest, radix),
        None => s.parse::<u64>(),
    };
    result.map_err(|_| Error::format(format!("invalid integer literal: {s}")))
}

fn parse_fields(data: &str) -> Result<HashMap<String, u64>, Error> {
    data.split(',')
        .map(|pair| {
            let (k, v) = pair
                .split_once('=')
                .ok_or_else(|| Error::format(format!("invalid field: {pair}")))?;
            Ok((k.trim().to_string(), parse_int(v)?))
        })
        .collect()
}

fn field(fields: &HashMap<String, u64>, key: &str) -> Result<u64, Error> {
    fields
        .get(key)
        .copied()
        .ok_or_else(|| Error::format(format!("missing field: {key}")))
}

fn optional_toggle(fields: &HashMap<String, u64>) -> Option<bool> {
    fields.get("toggle").map(|&v| v != 0)
}

fn to_u8(v: u64) -> Result<u8, Error> {
    u8::try_from(v).map_err(|_| Error::data(format!("value out of range for an 8-bit field: {v}")))
}

fn to_u16(v: u64) -> Result<u16, Error> {
    u16::try_from(v).map_err(|_| Error::data(format!("value out of range for a 16-bit field: {v}")))
}

fn to_u32(v: u64) -> Result<u32, Error> {
    u32::try_from(v).map_err(|_| Error::data(format!("value out of range for a 32-bit field: {v}")))
}

/// Parses `protocol:key=value,...` or `raw:v,v,...` into a [`Command`].
/// Per-field values are only checked against the field's bit width here;
/// the tighter protocol-specific range (e.g. NEC42's 13-bit address) is
/// enforced by the matching `protocols::*::encode` function.
pub fn parse_command(s: &str) -> Result<Command, Error> {
    let (fmt, data) = s
        .split_once(':')
        .ok_or_else(|| Error::format(format!("invalid command format: {s}")))?;

    if fmt == "raw" {
        let values = data
            .split(',')
            .map(|v| parse_int(v).and_then(to_u32))
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(Command::Raw(values));
    }

    let protocol: ProtocolId = fmt.parse()?;
    let fields = parse_fields(data)?;
    Ok(match protocol {
        ProtocolId::Nec => Command::Nec { addr: to_u8(field(&fields, "addr")?)?, cmd: to_u8(field(&fields, "cmd")?)? },
        ProtocolId::NecExt => {
            Command::NecExt { addr: to_u16(field(&fields, "addr")?)?, cmd: to_u16(field(&fields, "cmd")?)? }
        }
        ProtocolId::Nec42 => {
            Command::Nec42 { addr: to_u16(field(&fields, "addr")?)?, cmd: to_u8(field(&fields, "cmd")?)? }
        }
        ProtocolId::Nec42Ext => {
            Command::Nec42Ext { addr: to_u32(field(&fields, "addr")?)?, cmd: to_u16(field(&fields, "cmd")?)? }
        }
        ProtocolId::Samsung32 => {
            Command::Samsung32 { addr: to_u8(field(&fields, "addr")?)?, cmd: to_u8(field(&fields, "cmd")?)? }
        }
        ProtocolId::Sirc => Command::Sirc { addr: to_u8(field(&fields, "addr")?)?, cmd: to_u8(field(&fields, "cmd")?)? },
        ProtocolId::Sirc15 => {
            Command::Sirc15 { addr: to_u8(field(&fields, "addr")?)?, cmd: to_u8(field(&fields, "cmd")?)? }
        }
        ProtocolId::Sirc20 => {
            Command::Sirc20 { addr: to_u16(field(&fields, "addr")?)?, cmd: to_u8(field(&fields, "cmd")?)? }
        }
        ProtocolId::Rc5 => Command::Rc5 {
            addr: to_u8(field(&fields, "addr")?)?,
            cmd: to_u8(field(&fields, "cmd")?)?,
            toggle: optional_toggle(&fields),
        },
        ProtocolId::Rc6 => Command::Rc6 {
            addr: to_u8(field(&fields, "addr")?)?,
            cmd: to_u8(field(&fields, "cmd")?)?,
            toggle: optional_toggle(&fields),
        },
        ProtocolId::Kaseikyo => Command::Kaseikyo {
            vendor_id: to_u16(field(&fields, "vendor_id")?)?,
            genre1: to_u8(field(&fields, "genre1")?)?,
            genre2: to_u8(field(&fields, "genre2")?)?,
            data: to_u16(field(&fields, "data")?)?,
            id: to_u8(field(&fields, "id")?)?,
        },
        ProtocolId::Rca => Command::Rca { addr: to_u8(field(&fields, "addr")?)?, cmd: to_u8(field(&fields, "cmd")?)? },
        ProtocolId::Pioneer => {
            Command::Pioneer { addr: to_u8(field(&fields, "addr")?)?, cmd: to_u8(field(&fields, "cmd")?)? }
        }
        ProtocolId::Ac => Command::Ac {
            addr: to_u8(field(&fields, "addr")?)?,
            cmd: to_u16(field(&fields, "cmd")?)?,
            double: field(&fields, "double").unwrap_or(0) != 0,
        },
        ProtocolId::Raw => unreachable!("handled above"),
    })
}

/// Renders a command's fields the way each protocol's original decoder
/// formatted them — hex, zero-padded to the field's nibble width, which is
/// sometimes wider than the field's real bit width (NEC42's `cmd` prints as
/// four hex digits despite holding only 8 bits).
pub fn format_fields(cmd: &Command) -> String {
    match cmd {
        Command::Nec { addr, cmd } => format!("addr=0x{addr:02X},cmd=0x{cmd:02X}"),
        Command::NecExt { addr, cmd } => format!("addr=0x{addr:04X},cmd=0x{cmd:04X}"),
        Command::Nec42 { addr, cmd } => format!("addr=0x{addr:04X},cmd=0x{cmd:04X}"),
        Command::Nec42Ext { addr, cmd } => format!("addr=0x{addr:04X},cmd=0x{cmd:04X}"),
        Command::Samsung32 { addr, cmd } => format!("addr=0x{addr:02X},cmd=0x{cmd:02X}"),
        Command::Sirc { addr, cmd } => format!("addr=0x{addr:02X},cmd=0x{cmd:02X}"),
        Command::Sirc15 { addr, cmd } => format!("addr=0x{addr:02X},cmd=0x{cmd:02X}"),
        Command::Sirc20 { addr, cmd } => format!("addr=0x{addr:04X},cmd=0x{cmd:02X}"),
        Command::Rc5 { addr, cmd, .. } => format!("addr=0x{addr:02X},cmd=0x{cmd:02X}"),
        Command::Rc6 { addr, cmd, .. } => format!("addr=0x{addr:02X},cmd=0x{cmd:02X}"),
        Command::Kaseikyo { vendor_id, genre1, genre2, data, id } => format!(
            "vendor_id=0x{vendor_id:04X},genre1=0x{genre1:01X},genre2=0x{genre2:01X},data=0x{data:04X},id=0x{id:01X}"
        ),
        Command::Rca { addr, cmd } => format!("addr=0x{addr:02X},cmd=0x{cmd:02X}"),
        Command::Pioneer { addr, cmd } => format!("addr=0x{addr:02X},cmd=0x{cmd:02X}"),
        Command::Ac { addr, cmd, double } => {
            format!("addr=0x{addr:02X},cmd=0x{cmd:04X},double={}", *double as u8)
        }
        Command::Raw(values) => values.iter().map(u32::to_string).collect::<Vec<_>>().join(","),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_integer_base() {
        assert_eq!(parse_int("0x1A").unwrap(), 0x1A);
        assert_eq!(parse_int("0o17").unwrap(), 0o17);
        assert_eq!(parse_int("0b101").unwrap(), 0b101);
        assert_eq!(parse_int("42").unwrap(), 42);
    }

    #[test]
    fn parses_nec_command() {
        let cmd = parse_command("nec:addr=0x04,cmd=0x08").unwrap();
        assert_eq!(cmd, Command::Nec { addr: 0x04, cmd: 0x08 });
    }

    #[test]
    fn parses_raw_command() {
        let cmd = parse_command("raw:9000,4500,560").unwrap();
        assert_eq!(cmd, Command::Raw(vec![9000, 4500, 560]));
    }

    #[test]
    fn parses_rc5_command_without_toggle() {
        let cmd = parse_command("rc5:addr=0x05,cmd=0x05").unwrap();
        assert_eq!(cmd, Command::Rc5 { addr: 0x05, cmd: 0x05, toggle: None });
    }

    #[test]
    fn out_of_width_field_is_a_domain_error() {
        // NEC's address is an 8-bit field; 0x100 is out of range.
        let err = parse_command("nec:addr=0x100,cmd=0x00").unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[test]
    fn unknown_protocol_is_a_format_error() {
        let err = parse_command("bogus:addr=0x00,cmd=0x00").unwrap_err();
        assert!(matches!(err, Error::InvalidFormat(_)));
    }

    #[test]
    fn format_fields_matches_hex_width_conventions() {
        assert_eq!(format_fields(&Command::Nec { addr: 0x04, cmd: 0x08 }), "addr=0x04,cmd=0x08");
        assert_eq!(
            format_fields(&Command::Nec42 { addr: 0x1ABC, cmd: 0x55 }),
            "addr=0x1ABC,cmd=0x0055"
        );
        assert_eq!(
            format_fields(&Command::Ac { addr: 0x20, cmd: 0x1234, double: true }),
            "addr=0x20,cmd=0x1234,double=1"
        );
    }
}
