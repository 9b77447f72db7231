//! Runtime-typed bridge over the statically-dispatched codecs.

use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use kylin_result::{Error, Result};

use crate::codec::{BeF32, BeF64, BeI16, BeI32, BeI64, Bool, Decimal, FixedWidthCodec, Utf8};

/// A tag naming the physical layout of an encoded key component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Bool,
    Short,
    Int,
    Long,
    Float,
    Double,
    Decimal,
    Utf8,
}

impl DataType {
    /// Encoded width for fixed-width types, `None` for variable-width ones.
    pub fn fixed_width(&self) -> Option<usize> {
        match self {
            DataType::Bool => Some(Bool::WIDTH),
            DataType::Short => Some(BeI16::WIDTH),
            DataType::Int => Some(BeI32::WIDTH),
            DataType::Long => Some(BeI64::WIDTH),
            DataType::Float => Some(BeF32::WIDTH),
            DataType::Double => Some(BeF64::WIDTH),
            DataType::Decimal | DataType::Utf8 => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DataType::Bool => "bool",
            DataType::Short => "short",
            DataType::Int => "int",
            DataType::Long => "long",
            DataType::Float => "float",
            DataType::Double => "double",
            DataType::Decimal => "decimal",
            DataType::Utf8 => "utf8",
        }
    }
}

impl FromStr for DataType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "bool" | "boolean" => DataType::Bool,
            "short" | "i16" => DataType::Short,
            "int" | "i32" => DataType::Int,
            "long" | "i64" => DataType::Long,
            "float" | "f32" => DataType::Float,
            "double" | "f64" => DataType::Double,
            "decimal" => DataType::Decimal,
            "utf8" | "string" => DataType::Utf8,
            other => {
                return Err(Error::InvalidArgumentError(format!(
                    "unknown data type: {other}"
                )));
            }
        })
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Any value a key component can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Decimal(BigDecimal),
    Utf8(String),
}

impl Value {
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Bool(_) => DataType::Bool,
            Value::Short(_) => DataType::Short,
            Value::Int(_) => DataType::Int,
            Value::Long(_) => DataType::Long,
            Value::Float(_) => DataType::Float,
            Value::Double(_) => DataType::Double,
            Value::Decimal(_) => DataType::Decimal,
            Value::Utf8(_) => DataType::Utf8,
        }
    }

    /// Parse the textual form of a `dtype` value. Text for `Utf8` is taken
    /// as-is.
    pub fn parse(dtype: DataType, text: &str) -> Result<Value> {
        Ok(match dtype {
            DataType::Bool => Value::Bool(text.parse().map_err(Error::invalid_argument)?),
            DataType::Short => Value::Short(text.parse().map_err(Error::invalid_argument)?),
            DataType::Int => Value::Int(text.parse().map_err(Error::invalid_argument)?),
            DataType::Long => Value::Long(text.parse().map_err(Error::invalid_argument)?),
            DataType::Float => Value::Float(text.parse().map_err(Error::invalid_argument)?),
            DataType::Double => Value::Double(text.parse().map_err(Error::invalid_argument)?),
            DataType::Decimal => {
                Value::Decimal(BigDecimal::from_str(text).map_err(Error::invalid_argument)?)
            }
            DataType::Utf8 => Value::Utf8(text.to_string()),
        })
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{v}"),
            Value::Short(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Long(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Double(v) => write!(f, "{v}"),
            Value::Decimal(v) => write!(f, "{v}"),
            Value::Utf8(v) => write!(f, "{v}"),
        }
    }
}

/// Encode `value` with its own type's codec, appending to `out`.
pub fn encode_value(value: &Value, out: &mut Vec<u8>) -> Result<()> {
    match value {
        Value::Bool(v) => Bool::encode_into(out, *v),
        Value::Short(v) => BeI16::encode_into(out, *v),
        Value::Int(v) => BeI32::encode_into(out, *v),
        Value::Long(v) => BeI64::encode_into(out, *v),
        Value::Float(v) => BeF32::encode_into(out, *v),
        Value::Double(v) => BeF64::encode_into(out, *v),
        Value::Decimal(v) => Decimal::encode_into(out, v)?,
        Value::Utf8(v) => out.extend_from_slice(v.as_bytes()),
    }
    Ok(())
}

pub fn encode_value_to_vec(value: &Value) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    encode_value(value, &mut out)?;
    Ok(out)
}

/// Decode a whole encoded component as `dtype`.
///
/// Fixed-width types must be exactly their width here; trailing bytes are a
/// mismatch. Returns `None` for anything that does not decode.
pub fn decode_value(bytes: &[u8], dtype: DataType) -> Option<Value> {
    match dtype {
        DataType::Bool => Bool::decode(bytes).ok().map(Value::Bool),
        DataType::Short => BeI16::decode_at(bytes, 0, bytes.len()).ok().map(Value::Short),
        DataType::Int => BeI32::decode_at(bytes, 0, bytes.len()).ok().map(Value::Int),
        DataType::Long => BeI64::decode_at(bytes, 0, bytes.len()).ok().map(Value::Long),
        DataType::Float => BeF32::decode_at(bytes, 0, bytes.len()).ok().map(Value::Float),
        DataType::Double => BeF64::decode_at(bytes, 0, bytes.len()).ok().map(Value::Double),
        DataType::Decimal => Decimal::decode(bytes).map(Value::Decimal),
        DataType::Utf8 => Utf8::decode(Some(bytes)).map(Value::Utf8),
    }
}
