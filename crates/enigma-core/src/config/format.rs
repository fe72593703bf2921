// crates/enigma-core/src/config/format.rs

use crate::config::checksum::{blake3_16, crc32, hex};
use crate::config::model::{MachineConfig, ReflectorChoice, RotorSlot, Setting, WheelChoice};
use crate::error::{EnigmaError, Result};

const MAGIC: &[u8; 4] = b"EKS1";
pub const FORMAT_VERSION: u16 = 1;

const FLAG_ALPHABET: u16 = 1;

const CHOICE_CATALOG: u8 = 0;
const CHOICE_CUSTOM: u8 = 1;

const SETTING_SYMBOL: u8 = 0;
const SETTING_NUMBER: u8 = 1;

// crc32 + blake3_16
const SEAL_LEN: usize = 4 + 16;

/// Key sheet: a machine configuration (including current window positions),
/// sealed for storage.
///
/// Layout (little-endian; str = len:u16 + utf8; opt = present:u8 [str]):
/// MAGIC[4]
/// version:u16
/// flags:u16                 bit0: custom alphabet follows
/// [alphabet:str]
/// reflector: choice
/// rotor_count:u16
/// rotors: repeated { wheel: choice, ring: setting, position: setting }
/// plug_count:u16
/// plugs: repeated str
/// crc32:u32                 (over everything before crc32)
/// blake3_16:[16]            (over everything before blake3)
///
/// choice  = tag:u8 (0 catalog: name:str | 1 custom: name:opt wiring:str
///           [wheels only: notches:str stationary:u8])
/// setting = tag:u8 (0 symbol: char:u32 | 1 number: u16)
pub fn encode(config: &MachineConfig) -> Result<Vec<u8>> {
    let mut b = Vec::with_capacity(128);
    b.extend_from_slice(MAGIC);
    b.extend_from_slice(&FORMAT_VERSION.to_le_bytes());

    let flags = if config.alphabet.is_some() {
        FLAG_ALPHABET
    } else {
        0
    };
    b.extend_from_slice(&flags.to_le_bytes());
    if let Some(symbols) = &config.alphabet {
        put_str(&mut b, symbols)?;
    }

    match &config.reflector {
        ReflectorChoice::Catalog(name) => {
            b.push(CHOICE_CATALOG);
            put_str(&mut b, name)?;
        }
        ReflectorChoice::Custom { name, wiring } => {
            b.push(CHOICE_CUSTOM);
            put_opt_str(&mut b, name.as_deref())?;
            put_str(&mut b, wiring)?;
        }
    }

    put_len(&mut b, config.rotors.len(), "rotors")?;
    for slot in &config.rotors {
        match &slot.wheel {
            WheelChoice::Catalog(name) => {
                b.push(CHOICE_CATALOG);
                put_str(&mut b, name)?;
            }
            WheelChoice::Custom {
                name,
                wiring,
                notches,
                stationary,
            } => {
                b.push(CHOICE_CUSTOM);
                put_opt_str(&mut b, name.as_deref())?;
                put_str(&mut b, wiring)?;
                put_str(&mut b, notches)?;
                b.push(u8::from(*stationary));
            }
        }
        put_setting(&mut b, slot.ring);
        put_setting(&mut b, slot.position);
    }

    put_len(&mut b, config.plugboard.len(), "plugs")?;
    for pair in &config.plugboard {
        put_str(&mut b, pair)?;
    }

    let c = crc32(&b);
    b.extend_from_slice(&c.to_le_bytes());

    let h = blake3_16(&b);
    b.extend_from_slice(&h);

    Ok(b)
}

pub fn decode(bytes: &[u8]) -> Result<MachineConfig> {
    if bytes.len() < MAGIC.len() + 4 + SEAL_LEN || &bytes[0..4] != MAGIC {
        return Err(fmt_err("bad magic"));
    }

    // Seals first: nothing below runs on corrupted input.
    let crc_off = bytes.len() - SEAL_LEN;
    let crc_expected = u32::from_le_bytes(slice4(bytes, crc_off)?);
    if crc_expected != crc32(&bytes[..crc_off]) {
        return Err(fmt_err("crc32 mismatch"));
    }
    let h_off = crc_off + 4;
    if bytes[h_off..] != blake3_16(&bytes[..h_off]) {
        return Err(fmt_err("blake3 mismatch"));
    }

    let body = &bytes[..crc_off];
    let mut i = MAGIC.len();

    let version = read_u16(body, &mut i)?;
    if version != FORMAT_VERSION {
        return Err(fmt_err(&format!("unsupported version {version}")));
    }

    let flags = read_u16(body, &mut i)?;
    if flags & !FLAG_ALPHABET != 0 {
        return Err(fmt_err("unknown flags"));
    }
    let alphabet = if flags & FLAG_ALPHABET != 0 {
        Some(read_str(body, &mut i)?)
    } else {
        None
    };

    let reflector = match read_u8(body, &mut i)? {
        CHOICE_CATALOG => ReflectorChoice::Catalog(read_str(body, &mut i)?),
        CHOICE_CUSTOM => {
            let name = read_opt_str(body, &mut i)?;
            let wiring = read_str(body, &mut i)?;
            ReflectorChoice::Custom { name, wiring }
        }
        _ => return Err(fmt_err("unknown reflector kind")),
    };

    let rotor_count = read_u16(body, &mut i)? as usize;
    let mut rotors = Vec::with_capacity(rotor_count);
    for _ in 0..rotor_count {
        let wheel = match read_u8(body, &mut i)? {
            CHOICE_CATALOG => WheelChoice::Catalog(read_str(body, &mut i)?),
            CHOICE_CUSTOM => {
                let name = read_opt_str(body, &mut i)?;
                let wiring = read_str(body, &mut i)?;
                let notches = read_str(body, &mut i)?;
                let stationary = match read_u8(body, &mut i)? {
                    0 => false,
                    1 => true,
                    _ => return Err(fmt_err("bad stationary flag")),
                };
                WheelChoice::Custom {
                    name,
                    wiring,
                    notches,
                    stationary,
                }
            }
            _ => return Err(fmt_err("unknown wheel kind")),
        };
        let ring = read_setting(body, &mut i)?;
        let position = read_setting(body, &mut i)?;
        rotors.push(RotorSlot {
            wheel,
            ring,
            position,
        });
    }

    let plug_count = read_u16(body, &mut i)? as usize;
    let mut plugboard = Vec::with_capacity(plug_count);
    for _ in 0..plug_count {
        plugboard.push(read_str(body, &mut i)?);
    }

    if i != body.len() {
        return Err(fmt_err("trailing bytes"));
    }

    Ok(MachineConfig {
        alphabet,
        reflector,
        plugboard,
        rotors,
    })
}

/// Stable key identifier: the trailing blake3_16 that `encode()` appends.
pub fn key_id_16(config: &MachineConfig) -> Result<[u8; 16]> {
    key_id_16_from_encoded(&encode(config)?)
}

pub fn key_id_hex(config: &MachineConfig) -> Result<String> {
    Ok(hex(&key_id_16(config)?))
}

pub fn key_id_16_from_encoded(encoded: &[u8]) -> Result<[u8; 16]> {
    if encoded.len() < 16 {
        return Err(fmt_err("encoded key sheet too small for id"));
    }
    let mut out = [0u8; 16];
    out.copy_from_slice(&encoded[encoded.len() - 16..]);
    Ok(out)
}

fn fmt_err(msg: &str) -> EnigmaError {
    EnigmaError::KeySheetFormat(msg.to_string())
}

fn put_len(b: &mut Vec<u8>, len: usize, what: &str) -> Result<()> {
    let Ok(len) = u16::try_from(len) else {
        return Err(fmt_err(&format!("too many {what}")));
    };
    b.extend_from_slice(&len.to_le_bytes());
    Ok(())
}

fn put_str(b: &mut Vec<u8>, s: &str) -> Result<()> {
    put_len(b, s.len(), "string bytes")?;
    b.extend_from_slice(s.as_bytes());
    Ok(())
}

fn put_opt_str(b: &mut Vec<u8>, s: Option<&str>) -> Result<()> {
    match s {
        Some(s) => {
            b.push(1);
            put_str(b, s)
        }
        None => {
            b.push(0);
            Ok(())
        }
    }
}

fn put_setting(b: &mut Vec<u8>, s: Setting) {
    match s {
        Setting::Symbol(c) => {
            b.push(SETTING_SYMBOL);
            b.extend_from_slice(&(c as u32).to_le_bytes());
        }
        Setting::Number(n) => {
            b.push(SETTING_NUMBER);
            b.extend_from_slice(&n.to_le_bytes());
        }
    }
}

fn need(bytes: &[u8], i: usize, n: usize) -> Result<()> {
    if bytes.len() < i + n {
        return Err(fmt_err("unexpected eof"));
    }
    Ok(())
}

fn slice4(bytes: &[u8], i: usize) -> Result<[u8; 4]> {
    need(bytes, i, 4)?;
    let mut out = [0u8; 4];
    out.copy_from_slice(&bytes[i..i + 4]);
    Ok(out)
}

fn read_u8(bytes: &[u8], i: &mut usize) -> Result<u8> {
    need(bytes, *i, 1)?;
    let v = bytes[*i];
    *i += 1;
    Ok(v)
}

fn read_u16(bytes: &[u8], i: &mut usize) -> Result<u16> {
    need(bytes, *i, 2)?;
    let v = u16::from_le_bytes([bytes[*i], bytes[*i + 1]]);
    *i += 2;
    Ok(v)
}

fn read_u32(bytes: &[u8], i: &mut usize) -> Result<u32> {
    let v = u32::from_le_bytes(slice4(bytes, *i)?);
    *i += 4;
    Ok(v)
}

fn read_str(bytes: &[u8], i: &mut usize) -> Result<String> {
    let len = read_u16(bytes, i)? as usize;
    need(bytes, *i, len)?;
    let s = std::str::from_utf8(&bytes[*i..*i + len])
        .map_err(|_| fmt_err("string is not utf-8"))?
        .to_string();
    *i += len;
    Ok(s)
}

fn read_opt_str(bytes: &[u8], i: &mut usize) -> Result<Option<String>> {
    match read_u8(bytes, i)? {
        0 => Ok(None),
        1 => Ok(Some(read_str(bytes, i)?)),
        _ => Err(fmt_err("bad name presence flag")),
    }
}

fn read_setting(bytes: &[u8], i: &mut usize) -> Result<Setting> {
    match read_u8(bytes, i)? {
        SETTING_SYMBOL => {
            let raw = read_u32(bytes, i)?;
            char::from_u32(raw)
                .map(Setting::Symbol)
                .ok_or_else(|| fmt_err("bad symbol setting"))
        }
        SETTING_NUMBER => Ok(Setting::Number(read_u16(bytes, i)?)),
        _ => Err(fmt_err("unknown setting kind")),
    }
}
