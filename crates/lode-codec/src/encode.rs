use lode_types::Value;

use crate::error::{CodecError, CodecResult};

/// Marker prefix of every canonical chunk payload.
pub const ENCODING_MARKER: &str = "t ";

/// Produce the canonical byte encoding of a value.
///
/// The payload is ASCII text of the shape `t [<kind-ordinal>,<literal>]`,
/// with nested values carrying their own kind tags. The encoding is
/// construction-path independent: map entries are sorted by their encoded
/// key bytes, negative zero collapses to zero, and string framing is
/// quote-delimited with escapes, so logically equal values always yield
/// byte-identical payloads.
pub fn encode(value: &Value) -> CodecResult<Vec<u8>> {
    let mut out = String::with_capacity(ENCODING_MARKER.len() + 16);
    out.push_str(ENCODING_MARKER);
    encode_value(value, &mut out)?;
    Ok(out.into_bytes())
}

/// Encode one tagged value: `[<kind-ordinal>,<literal>]`.
fn encode_value(value: &Value, out: &mut String) -> CodecResult<()> {
    out.push('[');
    out.push_str(&value.kind().ordinal().to_string());
    out.push(',');
    match value {
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => {
            if n.is_nan() {
                return Err(CodecError::NanNumber);
            }
            // -0.0 == 0.0, so they must share one byte form.
            let n = if *n == 0.0 { 0.0 } else { *n };
            out.push_str(&n.to_string());
        }
        Value::String(s) => encode_string_literal(s, out),
        Value::Blob(bytes) => {
            out.push('"');
            out.push_str(&hex::encode(bytes));
            out.push('"');
        }
        Value::List(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                encode_value(item, out)?;
            }
            out.push(']');
        }
        Value::Map(entries) => encode_map(entries, out)?,
        Value::Ref(r) => {
            out.push('"');
            out.push_str(&r.to_hex());
            out.push('"');
        }
    }
    out.push(']');
    Ok(())
}

/// Encode map entries sorted by their encoded key bytes.
///
/// Sorting here, not at construction, is what makes map encoding independent
/// of insertion order. Keys that encode identically are duplicates.
fn encode_map(entries: &[(Value, Value)], out: &mut String) -> CodecResult<()> {
    let mut encoded: Vec<(String, String)> = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        let mut key_enc = String::new();
        encode_value(key, &mut key_enc)?;
        let mut value_enc = String::new();
        encode_value(value, &mut value_enc)?;
        encoded.push((key_enc, value_enc));
    }
    encoded.sort_by(|a, b| a.0.cmp(&b.0));
    for pair in encoded.windows(2) {
        if pair[0].0 == pair[1].0 {
            return Err(CodecError::DuplicateKey(pair[0].0.clone()));
        }
    }

    out.push('[');
    for (i, (key_enc, value_enc)) in encoded.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push('[');
        out.push_str(key_enc);
        out.push(',');
        out.push_str(value_enc);
        out.push(']');
    }
    out.push(']');
    Ok(())
}

/// Quote-delimited string framing with minimal escapes.
///
/// The parser accepts the wider escape set (`\/`, `\uXXXX` for printable
/// characters); this is the single form the encoder emits.
fn encode_string_literal(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
