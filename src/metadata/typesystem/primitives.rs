use std::fmt;

use strum::{EnumCount, EnumIter, IntoEnumIterator};

/// The built-in CLI types that target languages spell with a keyword of their own.
///
/// Each kind maps to exactly one fully-qualified runtime name (e.g. `System.Int32`). The
/// language descriptors key their alias tables on this enum rather than on raw strings, so a
/// descriptor can only ever alias a type the runtime actually defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum PrimitiveKind {
    /// System.Void - represents no value
    Void,
    /// System.Boolean - true/false value
    Boolean,
    /// System.Char - Unicode 16-bit character
    Char,
    /// System.SByte - signed 8-bit integer
    SByte,
    /// System.Byte - unsigned 8-bit integer
    Byte,
    /// System.Int16 - signed 16-bit integer
    Int16,
    /// System.UInt16 - unsigned 16-bit integer
    UInt16,
    /// System.Int32 - signed 32-bit integer
    Int32,
    /// System.UInt32 - unsigned 32-bit integer
    UInt32,
    /// System.Int64 - signed 64-bit integer
    Int64,
    /// System.UInt64 - unsigned 64-bit integer
    UInt64,
    /// System.Single - 32-bit floating point
    Single,
    /// System.Double - 64-bit floating point
    Double,
    /// System.Decimal - 128-bit decimal
    Decimal,
    /// System.IntPtr - native sized signed integer
    IntPtr,
    /// System.UIntPtr - native sized unsigned integer
    UIntPtr,
    /// System.Object - base class for all reference types
    Object,
    /// System.String - immutable string of Unicode characters
    String,
    /// System.DateTime - point in time
    DateTime,
}

impl PrimitiveKind {
    /// Namespace every primitive lives in
    pub const NAMESPACE: &'static str = "System";

    /// The short runtime name, without namespace
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveKind::Void => "Void",
            PrimitiveKind::Boolean => "Boolean",
            PrimitiveKind::Char => "Char",
            PrimitiveKind::SByte => "SByte",
            PrimitiveKind::Byte => "Byte",
            PrimitiveKind::Int16 => "Int16",
            PrimitiveKind::UInt16 => "UInt16",
            PrimitiveKind::Int32 => "Int32",
            PrimitiveKind::UInt32 => "UInt32",
            PrimitiveKind::Int64 => "Int64",
            PrimitiveKind::UInt64 => "UInt64",
            PrimitiveKind::Single => "Single",
            PrimitiveKind::Double => "Double",
            PrimitiveKind::Decimal => "Decimal",
            PrimitiveKind::IntPtr => "IntPtr",
            PrimitiveKind::UIntPtr => "UIntPtr",
            PrimitiveKind::Object => "Object",
            PrimitiveKind::String => "String",
            PrimitiveKind::DateTime => "DateTime",
        }
    }

    /// The fully-qualified runtime name, e.g. `System.Int32`
    #[must_use]
    pub fn fullname(&self) -> String {
        format!("{}.{}", Self::NAMESPACE, self.name())
    }

    /// Look up a primitive by its fully-qualified runtime name.
    ///
    /// Returns `None` for anything that is not a primitive, including by-ref spellings
    /// (`System.Int32&`) - callers strip markers before asking.
    #[must_use]
    pub fn from_fullname(fullname: &str) -> Option<Self> {
        let name = fullname.strip_prefix(Self::NAMESPACE)?.strip_prefix('.')?;
        PrimitiveKind::iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", Self::NAMESPACE, self.name())
    }
}
