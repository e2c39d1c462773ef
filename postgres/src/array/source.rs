use pgarray_core::PgArrayError;

/// Column data handed over by a driver for scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanSource<'a> {
    /// SQL NULL
    Null,
    Text(&'a str),
    /// Text-mode bytes, must be valid UTF-8
    Bytes(&'a [u8]),
}

impl<'a> ScanSource<'a> {
    /// Returns the literal text, or `None` for SQL NULL.
    pub fn as_text(&self) -> Result<Option<&'a str>, PgArrayError> {
        match *self {
            ScanSource::Null => Ok(None),
            ScanSource::Text(text) => Ok(Some(text)),
            ScanSource::Bytes(bytes) => match std::str::from_utf8(bytes) {
                Ok(text) => Ok(Some(text)),
                Err(e) => {
                    let valid = e.valid_up_to();
                    Err(PgArrayError::Parse {
                        position: valid,
                        fragment: String::from_utf8_lossy(&bytes[valid..bytes.len().min(valid + 16)])
                            .into_owned(),
                        message: "invalid UTF-8 in array literal".into(),
                    })
                }
            },
        }
    }
}

impl<'a> From<&'a str> for ScanSource<'a> {
    fn from(value: &'a str) -> Self {
        ScanSource::Text(value)
    }
}

impl<'a> From<&'a String> for ScanSource<'a> {
    fn from(value: &'a String) -> Self {
        ScanSource::Text(value)
    }
}

impl<'a> From<&'a [u8]> for ScanSource<'a> {
    fn from(value: &'a [u8]) -> Self {
        ScanSource::Bytes(value)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for ScanSource<'a> {
    fn from(value: &'a [u8; N]) -> Self {
        ScanSource::Bytes(value)
    }
}

impl<'a> From<&'a Vec<u8>> for ScanSource<'a> {
    fn from(value: &'a Vec<u8>) -> Self {
        ScanSource::Bytes(value)
    }
}

impl<'a> From<Option<&'a str>> for ScanSource<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(ScanSource::Null, ScanSource::Text)
    }
}

impl<'a> From<Option<&'a [u8]>> for ScanSource<'a> {
    fn from(value: Option<&'a [u8]>) -> Self {
        value.map_or(ScanSource::Null, ScanSource::Bytes)
    }
}
