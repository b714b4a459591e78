//! Text encoding of generator state
//!
//! Layout, as whitespace separated ASCII decimal tokens:
//!
//! ```text
//! random-v2 <seed> <index> <word 0> ... <word 311> endrandom-v2
//! ```
//!
//! followed by a single space. The decoder reads one token at a time and
//! stops right after the end marker, so a generator can sit in the middle of
//! a larger stream written by someone else.

use std::io::{BufRead, Write};

use super::RandomSnapshot;
use crate::error::{RandomError, Result};
use crate::random::Random;
use crate::rng::STATE_WORDS;

pub const BEGIN_MARKER: &str = "random-v2";
pub const END_MARKER: &str = "endrandom-v2";

// Longest legal token is u64::MAX (20 digits)
const MAX_TOKEN_LEN: usize = 32;

/// Write the state of `random` to `writer`
pub fn encode<W: Write + ?Sized>(random: &Random, writer: &mut W) -> std::io::Result<()> {
    let engine = random.engine();
    write_state(writer, random.seed(), engine.index(), engine.words())
}

/// Write a snapshot in the same layout as [`encode`]
pub fn encode_snapshot<W: Write + ?Sized>(
    snapshot: &RandomSnapshot,
    writer: &mut W,
) -> std::io::Result<()> {
    write_state(writer, snapshot.seed, snapshot.index, &snapshot.words)
}

fn write_state<W: Write + ?Sized>(
    writer: &mut W,
    seed: u64,
    index: usize,
    words: &[u64],
) -> std::io::Result<()> {
    write!(writer, "{} {} {}", BEGIN_MARKER, seed, index)?;
    for word in words {
        write!(writer, " {}", word)?;
    }
    write!(writer, " {} ", END_MARKER)
}

/// Read one encoded state from `reader`
///
/// Only the tokens belonging to the state (and the whitespace byte after
/// the end marker) are consumed. The result is not yet validated against
/// the engine's invariants; see `Random::try_from`.
pub fn decode<R: BufRead + ?Sized>(reader: &mut R) -> Result<RandomSnapshot> {
    let begin = expect_token(reader, "begin marker")?;
    if begin != BEGIN_MARKER {
        return Err(RandomError::Format(format!(
            "expected '{}', found '{}'",
            BEGIN_MARKER, begin
        )));
    }

    let seed: u64 = parse_number(&expect_token(reader, "seed")?, "seed")?;
    let index: usize = parse_number(&expect_token(reader, "index")?, "index")?;

    let mut words = Vec::with_capacity(STATE_WORDS);
    for _ in 0..STATE_WORDS {
        let token = expect_token(reader, "state word")?;
        if token == END_MARKER {
            return Err(RandomError::Format(format!(
                "state ended after {} of {} words",
                words.len(),
                STATE_WORDS
            )));
        }
        words.push(parse_number(&token, "state word")?);
    }

    let end = expect_token(reader, "end marker")?;
    if end != END_MARKER {
        return Err(RandomError::Format(format!(
            "expected '{}', found '{}'",
            END_MARKER, end
        )));
    }

    Ok(RandomSnapshot { seed, index, words })
}

fn parse_number<T: std::str::FromStr>(token: &str, what: &str) -> Result<T> {
    token
        .parse()
        .map_err(|_| RandomError::Format(format!("invalid {}: '{}'", what, token)))
}

fn expect_token<R: BufRead + ?Sized>(reader: &mut R, what: &str) -> Result<String> {
    read_token(reader)?
        .ok_or_else(|| RandomError::Format(format!("unexpected end of input, expected {}", what)))
}

/// Next whitespace delimited token, or `None` at end of input
fn read_token<R: BufRead + ?Sized>(reader: &mut R) -> Result<Option<String>> {
    let mut token = Vec::new();
    loop {
        let (used, done) = {
            let buf = reader.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let mut used = 0;
            let mut done = false;
            for &byte in buf {
                used += 1;
                if byte.is_ascii_whitespace() {
                    if !token.is_empty() {
                        done = true;
                        break;
                    }
                } else {
                    token.push(byte);
                    if token.len() > MAX_TOKEN_LEN {
                        return Err(RandomError::Format(format!(
                            "token longer than {} bytes",
                            MAX_TOKEN_LEN
                        )));
                    }
                }
            }
            (used, done)
        };
        reader.consume(used);
        if done {
            break;
        }
    }

    if token.is_empty() {
        return Ok(None);
    }
    String::from_utf8(token)
        .map(Some)
        .map_err(|_| RandomError::Format("token is not valid UTF-8".to_string()))
}
