use crate::error::DumpError;

/// Raw machine code handed to the disassembler. Never empty.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Payload<'bytes> {
    bytes: &'bytes [u8],
}

impl<'bytes> Payload<'bytes> {
    pub fn new(bytes: &'bytes [u8]) -> Result<Self, DumpError> {
        if bytes.is_empty() {
            return Err(DumpError::EmptyPayload);
        }

        Ok(Payload { bytes })
    }

    pub fn as_bytes(&self) -> &'bytes [u8] {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false, `new` refuses empty slices.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

pub struct Sample {
    pub name: &'static str,
    pub bytes: &'static [u8],
}

/// `push rbp; mov rbp, rsp; mov eax, 1234; pop rbp; ret`
pub const CONSTANT_RETURN: &[u8] =
    &[0x55, 0x48, 0x89, 0xe5, 0xb8, 0xd2, 0x04, 0x00, 0x00, 0x5d, 0xc3];

/// Bounds checked index into a table, scaled, then an indirect call.
pub const CHECKED_CALL: &[u8] = &[
    0x55, 0x48, 0x89, 0xe5, 0x31, 0xc0, 0x8b, 0x0f, 0x39, 0xc8, 0x72, 0x02,
    0x0f, 0x0b, 0x89, 0xc0, 0x48, 0x8b, 0x0f, 0xba, 0xd2, 0x04, 0x00, 0x00,
    0x48, 0x0f, 0xaf, 0xc2, 0x48, 0x8b, 0x44, 0x01, 0x78, 0xff, 0xd0, 0x5d,
    0xc3,
];

pub const SAMPLES: &[Sample] = &[
    Sample {
        name: "constant_return",
        bytes: CONSTANT_RETURN,
    },
    Sample {
        name: "checked_call",
        bytes: CHECKED_CALL,
    },
];

pub fn find_sample(name: &str) -> Option<&'static Sample> {
    SAMPLES.iter().find(|sample| sample.name == name)
}

/// Parses a single hex byte such as `0x55`, `55` or `0xf,`.
///
/// List punctuation around the value is ignored so that a byte list copied
/// out of source code can be pasted as is.
pub fn parse_byte(token: &str) -> Result<u8, DumpError> {
    let trimmed = token.trim_matches(|c: char| {
        c.is_whitespace() || c == ',' || c == '[' || c == ']'
    });

    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    // from_str_radix would accept a leading '+'
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(DumpError::InvalidByte {
            token: token.to_string(),
        });
    }

    u8::from_str_radix(digits, 16).map_err(|_| DumpError::InvalidByte {
        token: token.to_string(),
    })
}

pub fn parse_bytes<I, S>(tokens: I) -> Result<Vec<u8>, DumpError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut bytes = vec![];

    for token in tokens {
        for piece in token
            .as_ref()
            .split(|c: char| c == ',' || c.is_whitespace())
            .map(|piece| piece.trim_matches(|c: char| c == '[' || c == ']'))
            .filter(|piece| !piece.is_empty())
        {
            bytes.push(parse_byte(piece)?);
        }
    }

    Ok(bytes)
}
