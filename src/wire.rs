use alloc::vec::Vec;

/// The column type tag that accompanies a payload on the wire.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WireType {
    Date,
    Time,
    TimeTz,
    Timestamp,
    TimestampTz,
    /// Any type this crate doesn't interpret, by OID.
    Other(u32),
}

impl WireType {
    const DATE: u32 = 1082;
    const TIME: u32 = 1083;
    const TIMESTAMP: u32 = 1114;
    const TIMESTAMPTZ: u32 = 1184;
    const TIMETZ: u32 = 1266;

    /// The PostgreSQL type OID.
    pub fn oid(self) -> u32 {
        match self {
            Self::Date => Self::DATE,
            Self::Time => Self::TIME,
            Self::TimeTz => Self::TIMETZ,
            Self::Timestamp => Self::TIMESTAMP,
            Self::TimestampTz => Self::TIMESTAMPTZ,
            Self::Other(oid) => oid,
        }
    }

    pub fn from_oid(oid: u32) -> Self {
        match oid {
            Self::DATE => Self::Date,
            Self::TIME => Self::Time,
            Self::TIMETZ => Self::TimeTz,
            Self::TIMESTAMP => Self::Timestamp,
            Self::TIMESTAMPTZ => Self::TimestampTz,
            oid => Self::Other(oid),
        }
    }
}

/// Per-value representation negotiated with the server.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i16)]
pub enum Format {
    #[default]
    Text = 0,
    Binary = 1,
}

impl Format {
    /// The protocol's format code.
    pub fn code(self) -> i16 {
        self as i16
    }

    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            0 => Some(Self::Text),
            1 => Some(Self::Binary),
            _ => None,
        }
    }
}

/// A temporal column value as it travels on the wire: type, format and raw payload.
///
/// A `value` of `None` is SQL `NULL`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemporalValue {
    pub ty: WireType,
    pub format: Format,
    pub value: Option<Vec<u8>>,
}

impl TemporalValue {
    pub fn new(ty: WireType, format: Format, value: impl Into<Vec<u8>>) -> Self {
        Self {
            ty,
            format,
            value: Some(value.into()),
        }
    }

    pub fn null(ty: WireType, format: Format) -> Self {
        Self {
            ty,
            format,
            value: None,
        }
    }

    /// Encodes `t` with the default [`Codec`](crate::Codec).
    pub fn from_instant<T: crate::Temporal>(t: &T) -> Result<Self, crate::Error> {
        crate::encode(t)
    }

    pub fn is_null(&self) -> bool {
        self.value.is_none()
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        self.value.as_deref()
    }
}
