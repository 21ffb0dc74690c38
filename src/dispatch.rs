//! Protocol-agnostic entry points: try every protocol in a fixed preference
//! order, fall back to `raw:`, and handle both the textual wire format and
//! the typed [`Command`] model.

use tracing::{debug, trace};

use crate::command::{Command, ProtocolId};
use crate::error::Error;
use crate::protocols::{ac, kaseikyo, nec, pioneer, rc5, rc6, rca, samsung32, sirc};
use crate::textual;

fn protocol_decode(id: ProtocolId, pulses: &[u32]) -> Result<Command, Error> {
    match id {
        ProtocolId::Nec42 => nec::decode42(pulses),
        ProtocolId::Nec => nec::decode(pulses),
        ProtocolId::Nec42Ext => nec::decode42_ext(pulses),
        ProtocolId::NecExt => nec::decode_ext(pulses),
        ProtocolId::Rc5 => rc5::decode(pulses),
        ProtocolId::Rc6 => rc6::decode(pulses),
        ProtocolId::Samsung32 => samsung32::decode(pulses),
        ProtocolId::Sirc20 => sirc::decode20(pulses),
        ProtocolId::Sirc15 => sirc::decode15(pulses),
        ProtocolId::Sirc => sirc::decode(pulses),
        ProtocolId::Kaseikyo => kaseikyo::decode(pulses),
        ProtocolId::Rca => rca::decode(pulses),
        ProtocolId::Pioneer => pioneer::decode(pulses),
        ProtocolId::Ac => ac::decode(pulses),
        ProtocolId::Raw => unreachable!("Raw is a fallback, never an attempted decoder"),
    }
}

fn protocol_encode(cmd: &Command) -> Result<Vec<u32>, Error> {
    match cmd {
        Command::Nec { addr, cmd } => nec::encode(*addr, *cmd),
        Command::NecExt { addr, cmd } => nec::encode_ext(*addr, *cmd),
        Command::Nec42 { addr, cmd } => nec::encode42(*addr, *cmd),
        Command::Nec42Ext { addr, cmd } => nec::encode42_ext(*addr, *cmd),
        Command::Samsung32 { addr, cmd } => samsung32::encode(*addr, *cmd),
        Command::Sirc { addr, cmd } => sirc::encode(*addr, *cmd),
        Command::Sirc15 { addr, cmd } => sirc::encode15(*addr, *cmd),
        Command::Sirc20 { addr, cmd } => sirc::encode20(*addr, *cmd),
        Command::Rc5 { addr, cmd, toggle } => rc5::encode(*addr, *cmd, *toggle),
        Command::Rc6 { addr, cmd, toggle } => rc6::encode(*addr, *cmd, *toggle),
        Command::Kaseikyo { vendor_id, genre1, genre2, data, id } => {
            kaseikyo::encode(*vendor_id, *genre1, *genre2, *data, *id)
        }
        Command::Rca { addr, cmd } => rca::encode(*addr, *cmd),
        Command::Pioneer { addr, cmd } => pioneer::encode(*addr, *cmd),
        Command::Ac { addr, cmd, double } => ac::encode(*addr, *cmd, *double),
        Command::Raw(values) => Ok(values.clone()),
    }
}

fn raw_fallback(pulses: &[u32]) -> Vec<u32> {
    if pulses.len() % 2 == 0 {
        pulses[..pulses.len() - 1].to_vec()
    } else {
        pulses.to_vec()
    }
}

/// Tries every protocol in [`ProtocolId::DISPATCH_ORDER`], stopping at the
/// first success. On total failure, returns every protocol's rejection
/// reason — a diagnostic escape hatch for callers that need to know *why*
/// a train didn't match, rather than just that it fell through to `raw:`.
pub fn try_decode(pulses: &[u32]) -> Result<Command, Vec<(ProtocolId, Error)>> {
    let mut failures = Vec::with_capacity(ProtocolId::DISPATCH_ORDER.len());
    for id in ProtocolId::DISPATCH_ORDER {
        match protocol_decode(id, pulses) {
            Ok(cmd) => {
                trace!(protocol = %id, "pulses matched");
                return Ok(cmd);
            }
            Err(err) => {
                debug!(protocol = %id, %err, "protocol rejected pulses");
                failures.push((id, err));
            }
        }
    }
    Err(failures)
}

/// Decodes `pulses` into a typed [`Command`], falling back to
/// [`Command::Raw`] when no protocol recognizes the train.
pub fn decode_command(pulses: &[u32]) -> Command {
    try_decode(pulses).unwrap_or_else(|_| Command::Raw(raw_fallback(pulses)))
}

/// Decodes `pulses` into the canonical `protocol:key=value,...` textual
/// form (or `raw:v,v,...` on fallback).
pub fn decode(pulses: &[u32]) -> String {
    let cmd = decode_command(pulses);
    format!("{}:{}", cmd.protocol_id(), textual::format_fields(&cmd))
}

/// Encodes an already-typed [`Command`] into its pulse train.
pub fn encode_command(cmd: &Command) -> Result<Vec<u32>, Error> {
    protocol_encode(cmd)
}

/// Parses `protocol:key=value,...` (or `raw:v,v,...`) and encodes it.
pub fn encode(text: &str) -> Result<Vec<u32>, Error> {
    let cmd = textual::parse_command(text)?;
    encode_command(&cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    #[test]
    fn round_trips_nec_through_text() {
        let pulses = encode("nec:addr=0x04,cmd=0x08").unwrap();
        assert_eq!(decode(&pulses), "nec:addr=0x04,cmd=0x08");
    }

    #[test]
    fn dispatcher_emits_trace_events_without_panicking() {
        // Exercises the trace!/debug! calls in try_decode under an actual
        // subscriber; the assertion is just that decoding still completes.
        init_tracing();
        assert_eq!(decode(&[9000, 4499, 560, 560, 560]), "raw:9000,4499,560,560,560");
        let pulses = encode("samsung32:addr=0x07,cmd=0x02").unwrap();
        assert_eq!(decode(&pulses), "samsung32:addr=0x07,cmd=0x02");
    }

    #[test]
    fn nec_is_preferred_over_nec_ext() {
        // a train matching both NEC and NEC-ext's
        // framing decodes as NEC, since it's tried first and the xor check
        // only narrows the match further.
        let pulses = encode("nec:addr=0x04,cmd=0x08").unwrap();
        assert_eq!(decode_command(&pulses).protocol_id(), ProtocolId::Nec);
    }

    #[test]
    fn short_train_falls_back_to_raw() {
        // too short for any protocol to accept.
        assert_eq!(decode(&[9000, 4499, 560, 560, 560]), "raw:9000,4499,560,560,560");
    }

    #[test]
    fn out_of_range_address_is_a_domain_error() {
        let err = encode("nec:addr=0x100,cmd=0x00").unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[test]
    fn even_length_raw_fallback_drops_last_pulse() {
        assert_eq!(decode(&[9000, 4500, 560, 560]), "raw:9000,4500,560");
    }

    #[test]
    fn try_decode_reports_every_rejection_on_total_failure() {
        let failures = try_decode(&[1, 2, 3]).unwrap_err();
        assert_eq!(failures.len(), ProtocolId::DISPATCH_ORDER.len());
    }
}
