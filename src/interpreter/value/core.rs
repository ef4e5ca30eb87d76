use bitflags::bitflags;

use crate::{
    interpreter::evaluator::core::EvalResult,
    util::num::{f64_to_i64_truncated, i64_to_f64},
};

bitflags! {
    /// Numeric type tags forming the coercion lattice.
    ///
    /// A wider type's bit pattern contains every bit of the narrower types, so
    /// the result type of a binary operation is the bitwise OR of its operand
    /// types. New numeric types must keep this containment property.
    ///
    /// # Example
    /// ```
    /// use mao::interpreter::value::core::TypeTag;
    ///
    /// assert_eq!(TypeTag::INT.combine(TypeTag::INT), TypeTag::INT);
    /// assert_eq!(TypeTag::INT.combine(TypeTag::DOUBLE), TypeTag::DOUBLE);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TypeTag: u8 {
        /// 64-bit signed integer.
        const INT    = 0b01;
        /// 64-bit floating point number.
        const DOUBLE = 0b11;
    }
}

/// Machine representation selected by a [`TypeTag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    Int,
    Double,
}

impl TypeTag {
    /// Returns the type of a binary operation on operands of types `self` and
    /// `other`.
    #[must_use]
    pub const fn combine(self, other: Self) -> Self {
        self.union(other)
    }

    /// Returns the representation of the widest type contained in the tag.
    #[must_use]
    pub const fn representation(self) -> Representation {
        if self.contains(Self::DOUBLE) {
            Representation::Double
        } else {
            Representation::Int
        }
    }

    /// Keyword naming the type in source code.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self.representation() {
            Representation::Int => "int",
            Representation::Double => "double",
        }
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A raw numeric payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Double(f64),
}

impl Number {
    /// Returns the value as a double, widening integers.
    #[must_use]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Int(n) => i64_to_f64(n),
            Self::Double(d) => d,
        }
    }

    /// Returns the value as an integer, truncating doubles toward zero.
    ///
    /// # Errors
    /// Returns `RuntimeError::Overflow` if a double has no `i64` counterpart.
    pub fn as_i64(self, line: usize) -> EvalResult<i64> {
        match self {
            Self::Int(n) => Ok(n),
            Self::Double(d) => f64_to_i64_truncated(d, line),
        }
    }

    /// Returns `true` for integer zero and for both signed double zeros.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Int(n) => n == 0,
            Self::Double(d) => d == 0.0,
        }
    }
}

/// A typed value.
///
/// The stored [`Number`] always uses the representation named by the tag. The
/// tag of an object never changes: storing a value of another type converts the
/// value instead.
///
/// # Example
/// ```
/// use mao::interpreter::value::core::{Number, RuntimeObject, TypeTag};
///
/// let mut counter = RuntimeObject::zeroed(TypeTag::INT);
/// counter.store(Number::Double(7.9), 1).unwrap();
///
/// assert_eq!(counter.value(), Number::Int(7));
/// assert_eq!(counter.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuntimeObject {
    tag:   TypeTag,
    value: Number,
}

impl RuntimeObject {
    #[must_use]
    pub const fn int(value: i64) -> Self {
        Self { tag:   TypeTag::INT,
               value: Number::Int(value), }
    }

    #[must_use]
    pub const fn double(value: f64) -> Self {
        Self { tag:   TypeTag::DOUBLE,
               value: Number::Double(value), }
    }

    /// Creates the zero value of a type, used for freshly declared variables.
    #[must_use]
    pub const fn zeroed(tag: TypeTag) -> Self {
        match tag.representation() {
            Representation::Int => Self { tag,
                                          value: Number::Int(0) },
            Representation::Double => Self { tag,
                                             value: Number::Double(0.0) },
        }
    }

    /// Creates an object of type `tag` holding `value` converted to the
    /// representation of that type.
    ///
    /// # Errors
    /// Returns `RuntimeError::Overflow` if a double has to be narrowed and has
    /// no `i64` counterpart.
    pub fn with_tag(tag: TypeTag, value: Number, line: usize) -> EvalResult<Self> {
        let value = match tag.representation() {
            Representation::Int => Number::Int(value.as_i64(line)?),
            Representation::Double => Number::Double(value.as_f64()),
        };
        Ok(Self { tag, value })
    }

    #[must_use]
    pub const fn tag(&self) -> TypeTag {
        self.tag
    }

    #[must_use]
    pub const fn value(&self) -> Number {
        self.value
    }

    /// Overwrites the value, converting it to this object's own type.
    ///
    /// # Errors
    /// Returns `RuntimeError::Overflow` if narrowing to an integer fails. The
    /// object is left unchanged in that case.
    pub fn store(&mut self, value: Number, line: usize) -> EvalResult<()> {
        *self = Self::with_tag(self.tag, value, line)?;
        Ok(())
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

/// Integers print in decimal, doubles with six fractional digits.
impl std::fmt::Display for RuntimeObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.value {
            Number::Int(n) => write!(f, "{n}"),
            Number::Double(d) => write!(f, "{d:.6}"),
        }
    }
}

/// A registered variable.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableRecord {
    /// Registration number, unique per interpreter context and starting at 1.
    pub id:     usize,
    /// Current value; its tag is the declared type.
    pub object: RuntimeObject,
}
