/// Runtime objects and the numeric type lattice.
///
/// Defines [`core::TypeTag`], the bitmask type tags combined with bitwise OR to
/// find the result type of mixed arithmetic, together with the typed
/// [`core::RuntimeObject`] every variable and intermediate result is stored
/// in. Also holds [`core::VariableRecord`], the symbol table payload.
pub mod core;
/// Storage for intermediate results.
///
/// Literals and arithmetic results live in a [`pool::TransientPool`] until the
/// statement that produced them completes. Handles into the pool carry the
/// generation they were issued in, so a handle used after its pool was released
/// is detected instead of reading a recycled slot.
pub mod pool;
