use lode_chunk::Chunk;
use lode_types::{ChunkRef, FormatError, Kind, Value};

use crate::encode::encode;
use crate::error::{CodecError, CodecResult};

/// Parse the textual canonical form into a chunk.
///
/// The input is the tagged-literal grammar the encoder emits
/// (`t [<kind-ordinal>,<literal>]`). The parsed value is re-encoded
/// canonically, so the resulting chunk's bytes always equal what
/// [`encode`] would produce for that value — insignificant whitespace and
/// map-entry order in the input normalize away. Used for fixtures and
/// interop; real values go straight through the encoder.
pub fn parse_canonical(input: &str) -> CodecResult<Chunk> {
    let value = parse_value(input)?;
    Ok(Chunk::from_bytes(encode(&value)?))
}

/// Parse the textual canonical form into a value.
///
/// Fails with the [`CodecError`] format variants if the text is not a
/// well-formed tagged literal.
pub fn parse_value(input: &str) -> CodecResult<Value> {
    let mut p = Parser::new(input);
    p.skip_ws();
    if !p.eat(b't') {
        return Err(p.malformed("expected encoding marker 't'"));
    }
    if !matches!(p.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
        return Err(p.malformed("expected whitespace after encoding marker"));
    }
    p.skip_ws();
    let value = p.parse_tagged()?;
    p.skip_ws();
    if p.pos != p.input.len() {
        return Err(CodecError::TrailingInput(p.pos));
    }
    Ok(value)
}

/// Recursive-descent parser over the tagged-literal grammar.
struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Consume `b` if it is next; returns whether it was consumed.
    fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, b: u8) -> CodecResult<()> {
        if self.eat(b) {
            Ok(())
        } else {
            Err(self.malformed(format!("expected '{}'", b as char)))
        }
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    fn malformed(&self, reason: impl Into<String>) -> CodecError {
        CodecError::Malformed {
            pos: self.pos,
            reason: reason.into(),
        }
    }

    /// `[<kind-ordinal>,<literal>]`
    fn parse_tagged(&mut self) -> CodecResult<Value> {
        self.expect(b'[')?;
        self.skip_ws();
        let ordinal = self.parse_ordinal()?;
        let kind = Kind::from_ordinal(ordinal).ok_or(CodecError::UnknownKind(ordinal))?;
        self.skip_ws();
        self.expect(b',')?;
        self.skip_ws();
        let value = match kind {
            Kind::Bool => self.parse_bool()?,
            Kind::Number => self.parse_number()?,
            Kind::String => Value::String(self.parse_string_literal()?),
            Kind::Blob => {
                let hex_text = self.parse_string_literal()?;
                let bytes = hex::decode(&hex_text)
                    .map_err(|e| CodecError::Format(FormatError::InvalidHex(e.to_string())))?;
                Value::Blob(bytes)
            }
            Kind::List => self.parse_list()?,
            Kind::Map => self.parse_map()?,
            Kind::Ref => {
                let hex_text = self.parse_string_literal()?;
                Value::Ref(ChunkRef::from_hex(&hex_text)?)
            }
        };
        self.skip_ws();
        self.expect(b']')?;
        Ok(value)
    }

    fn parse_ordinal(&mut self) -> CodecResult<u8> {
        let start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(self.malformed("expected kind ordinal"));
        }
        self.input[start..self.pos]
            .parse::<u8>()
            .map_err(|_| CodecError::Malformed {
                pos: start,
                reason: "kind ordinal out of range".into(),
            })
    }

    fn parse_bool(&mut self) -> CodecResult<Value> {
        if self.rest().starts_with("false") {
            self.pos += 5;
            Ok(Value::Bool(false))
        } else if self.rest().starts_with("true") {
            self.pos += 4;
            Ok(Value::Bool(true))
        } else {
            Err(self.malformed("expected 'true' or 'false'"))
        }
    }

    fn parse_number(&mut self) -> CodecResult<Value> {
        let start = self.pos;
        while matches!(
            self.peek(),
            Some(b'0'..=b'9' | b'+' | b'-' | b'.' | b'e' | b'E' | b'i' | b'n' | b'f' | b'N' | b'a')
        ) {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(self.malformed("expected number literal"));
        }
        let n: f64 = self.input[start..self.pos]
            .parse()
            .map_err(|_| CodecError::Malformed {
                pos: start,
                reason: "invalid number literal".into(),
            })?;
        if n.is_nan() {
            return Err(CodecError::NanNumber);
        }
        Ok(Value::Number(n))
    }

    fn parse_string_literal(&mut self) -> CodecResult<String> {
        self.expect(b'"')?;
        let mut out = String::new();
        loop {
            let c = match self.rest().chars().next() {
                Some(c) => c,
                None => return Err(CodecError::UnterminatedString),
            };
            match c {
                '"' => {
                    self.pos += 1;
                    return Ok(out);
                }
                '\\' => {
                    self.pos += 1;
                    let esc = self
                        .rest()
                        .chars()
                        .next()
                        .ok_or(CodecError::UnterminatedString)?;
                    self.pos += esc.len_utf8();
                    match esc {
                        '"' => out.push('"'),
                        '\\' => out.push('\\'),
                        '/' => out.push('/'),
                        'n' => out.push('\n'),
                        'r' => out.push('\r'),
                        't' => out.push('\t'),
                        'u' => {
                            let digits = self
                                .rest()
                                .get(..4)
                                .ok_or_else(|| CodecError::InvalidEscape("\\u".into()))?;
                            let code = u32::from_str_radix(digits, 16)
                                .map_err(|_| CodecError::InvalidEscape(format!("\\u{digits}")))?;
                            let ch = char::from_u32(code)
                                .ok_or_else(|| CodecError::InvalidEscape(format!("\\u{digits}")))?;
                            self.pos += 4;
                            out.push(ch);
                        }
                        other => return Err(CodecError::InvalidEscape(other.to_string())),
                    }
                }
                c => {
                    self.pos += c.len_utf8();
                    out.push(c);
                }
            }
        }
    }

    fn parse_list(&mut self) -> CodecResult<Value> {
        self.expect(b'[')?;
        self.skip_ws();
        let mut items = Vec::new();
        if self.eat(b']') {
            return Ok(Value::List(items));
        }
        loop {
            items.push(self.parse_tagged()?);
            self.skip_ws();
            if self.eat(b']') {
                return Ok(Value::List(items));
            }
            self.expect(b',')?;
            self.skip_ws();
        }
    }

    fn parse_map(&mut self) -> CodecResult<Value> {
        self.expect(b'[')?;
        self.skip_ws();
        let mut entries = Vec::new();
        if self.eat(b']') {
            return Ok(Value::Map(entries));
        }
        loop {
            self.expect(b'[')?;
            self.skip_ws();
            let key = self.parse_tagged()?;
            self.skip_ws();
            self.expect(b',')?;
            self.skip_ws();
            let value = self.parse_tagged()?;
            self.skip_ws();
            self.expect(b']')?;
            entries.push((key, value));
            self.skip_ws();
            if self.eat(b']') {
                return Ok(Value::Map(entries));
            }
            self.expect(b',')?;
            self.skip_ws();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bool_fixture() {
        assert_eq!(parse_value("t [0,false]").unwrap(), Value::Bool(false));
        assert_eq!(parse_value("t [0,true]").unwrap(), Value::Bool(true));
    }

    #[test]
    fn chunk_bytes_match_encoder_output() {
        let chunk = parse_canonical("t [0,false]").unwrap();
        assert_eq!(chunk.data(), encode(&Value::Bool(false)).unwrap());
    }

    #[test]
    fn whitespace_normalizes_away() {
        let canonical = parse_canonical("t [0,false]").unwrap();
        let spaced = parse_canonical("t  [ 0 , false ]").unwrap();
        assert_eq!(spaced.data(), canonical.data());
        assert_eq!(spaced.chunk_ref(), canonical.chunk_ref());
    }

    #[test]
    fn map_entry_order_normalizes_away() {
        let forward = parse_canonical(r#"t [5,[[[2,"a"],[1,1]],[[2,"b"],[1,2]]]]"#).unwrap();
        let reversed = parse_canonical(r#"t [5,[[[2,"b"],[1,2]],[[2,"a"],[1,1]]]]"#).unwrap();
        assert_eq!(forward.data(), reversed.data());
    }

    #[test]
    fn parses_numbers() {
        assert_eq!(parse_value("t [1,42]").unwrap(), Value::Number(42.0));
        assert_eq!(parse_value("t [1,-2.5]").unwrap(), Value::Number(-2.5));
        assert_eq!(
            parse_value("t [1,inf]").unwrap(),
            Value::Number(f64::INFINITY)
        );
    }

    #[test]
    fn nan_literal_is_rejected() {
        assert_eq!(parse_value("t [1,NaN]").unwrap_err(), CodecError::NanNumber);
    }

    #[test]
    fn parses_string_escapes() {
        assert_eq!(
            parse_value(r#"t [2,"a\"b\\c\nd"]"#).unwrap(),
            Value::String("a\"b\\c\nd".into())
        );
        assert_eq!(
            parse_value(r#"t [2,"A\t"]"#).unwrap(),
            Value::String("A\t".into())
        );
        // \uXXXX escapes parse, then normalize to the raw character on
        // re-encode when printable.
        assert_eq!(
            parse_value(r#"t [2,"\u0041"]"#).unwrap(),
            Value::String("A".into())
        );
    }

    #[test]
    fn parses_blob_hex() {
        assert_eq!(
            parse_value(r#"t [3,"deadbeef"]"#).unwrap(),
            Value::Blob(vec![0xde, 0xad, 0xbe, 0xef])
        );
    }

    #[test]
    fn blob_bad_hex_is_format_error() {
        assert!(matches!(
            parse_value(r#"t [3,"zz"]"#).unwrap_err(),
            CodecError::Format(FormatError::InvalidHex(_))
        ));
    }

    #[test]
    fn parses_nested_list() {
        assert_eq!(
            parse_value(r#"t [4,[[0,true],[2,"x"]]]"#).unwrap(),
            Value::List(vec![Value::Bool(true), Value::String("x".into())])
        );
        assert_eq!(parse_value("t [4,[]]").unwrap(), Value::List(vec![]));
    }

    #[test]
    fn parses_ref_digest() {
        let r = ChunkRef::from_digest([0xab; 32]);
        let input = format!("t [6,\"{}\"]", r.to_hex());
        assert_eq!(parse_value(&input).unwrap(), Value::Ref(r));
    }

    #[test]
    fn ref_wrong_length_digest_is_format_error() {
        assert!(matches!(
            parse_value(r#"t [6,"abcd"]"#).unwrap_err(),
            CodecError::Format(FormatError::InvalidLength { .. })
        ));
    }

    #[test]
    fn unknown_ordinal_is_rejected() {
        assert_eq!(
            parse_value("t [9,false]").unwrap_err(),
            CodecError::UnknownKind(9)
        );
    }

    #[test]
    fn missing_marker_is_rejected() {
        assert!(matches!(
            parse_value("[0,false]").unwrap_err(),
            CodecError::Malformed { .. }
        ));
        assert!(matches!(
            parse_value("t[0,false]").unwrap_err(),
            CodecError::Malformed { .. }
        ));
    }

    #[test]
    fn trailing_input_is_rejected() {
        assert!(matches!(
            parse_value("t [0,false] extra").unwrap_err(),
            CodecError::TrailingInput(_)
        ));
    }

    #[test]
    fn unterminated_string_is_rejected() {
        assert_eq!(
            parse_value(r#"t [2,"never closed"#).unwrap_err(),
            CodecError::UnterminatedString
        );
    }

    #[test]
    fn invalid_escape_is_rejected() {
        assert!(matches!(
            parse_value(r#"t [2,"\q"]"#).unwrap_err(),
            CodecError::InvalidEscape(_)
        ));
    }

    #[test]
    fn malformed_literal_is_rejected() {
        assert!(matches!(
            parse_value("t [0,flase]").unwrap_err(),
            CodecError::Malformed { .. }
        ));
        assert!(matches!(
            parse_value("t [1,abc]").unwrap_err(),
            CodecError::Malformed { .. }
        ));
    }

    #[test]
    fn complex_fixture_round_trips_through_encoder() {
        let input = r#"t [5,[[[2,"blob"],[3,"0102"]],[[2,"flag"],[0,true]],[[2,"items"],[4,[[1,1],[1,2]]]]]]"#;
        let chunk = parse_canonical(input).unwrap();
        let value = parse_value(input).unwrap();
        assert_eq!(chunk.data(), encode(&value).unwrap());
    }
}
