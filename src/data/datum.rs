use super::AsReal;

/// A dynamically typed value.
///
/// `Datum` represents data whose type is only known at runtime, e.g. values
/// decoded from an untyped source. The distribution entry points that accept
/// a `Datum` reject values of the wrong kind with an `InvalidType` error
/// instead of panicking.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub enum Datum {
    F64(f64),
    F32(f32),
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    ISize(isize),
    USize(usize),
    String(String),
    /// An absent value
    Null,
    Vec(Vec<f64>),
    Compound(Vec<Datum>),
}

impl AsReal for Datum {
    fn as_real(&self) -> Option<f64> {
        match self {
            Datum::F64(x) => x.as_real(),
            Datum::F32(x) => x.as_real(),
            Datum::U8(x) => x.as_real(),
            Datum::U16(x) => x.as_real(),
            Datum::U32(x) => x.as_real(),
            Datum::U64(x) => x.as_real(),
            Datum::I8(x) => x.as_real(),
            Datum::I16(x) => x.as_real(),
            Datum::I32(x) => x.as_real(),
            Datum::I64(x) => x.as_real(),
            Datum::ISize(x) => x.as_real(),
            Datum::USize(x) => x.as_real(),
            Datum::Bool(_)
            | Datum::String(_)
            | Datum::Null
            | Datum::Vec(_)
            | Datum::Compound(_) => None,
        }
    }
}

macro_rules! convert_datum {
    ($self:ty | $variant:ident) => {
        impl From<$self> for Datum {
            fn from(x: $self) -> Datum {
                Datum::$variant(x)
            }
        }
    };
}

convert_datum!(f64 | F64);
convert_datum!(f32 | F32);
convert_datum!(bool | Bool);
convert_datum!(u8 | U8);
convert_datum!(u16 | U16);
convert_datum!(u32 | U32);
convert_datum!(u64 | U64);
convert_datum!(i8 | I8);
convert_datum!(i16 | I16);
convert_datum!(i32 | I32);
convert_datum!(i64 | I64);
convert_datum!(isize | ISize);
convert_datum!(usize | USize);
convert_datum!(String | String);
convert_datum!(Vec<f64> | Vec);

impl From<&str> for Datum {
    fn from(x: &str) -> Datum {
        Datum::String(String::from(x))
    }
}

impl From<Vec<Datum>> for Datum {
    fn from(xs: Vec<Datum>) -> Self {
        Datum::Compound(xs)
    }
}

impl<T: Into<Datum>> From<Option<T>> for Datum {
    fn from(x: Option<T>) -> Self {
        x.map_or(Datum::Null, Into::into)
    }
}
