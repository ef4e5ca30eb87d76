/// Block-chunked growable sequences.
///
/// The [`arena::Arena`] container is the storage substrate of the interpreter:
/// token streams, hash buckets, expression nodes and the pool of transient
/// objects are all arenas. Elements live in fixed-capacity blocks chained
/// together, so growing the sequence never moves earlier blocks and cursors
/// into them stay valid.
///
/// # Responsibilities
/// - Amortised O(1) append with block-wise growth.
/// - Forward and backward cursor iteration across block boundaries.
/// - Bulk truncation and, for list-shaped arenas, single element removal.
pub mod arena;
/// Chained hash map keyed by names.
///
/// The [`symbol_table::SymbolTable`] maps variable names to their records. It
/// uses a fixed number of buckets, each bucket being a lazily created
/// [`arena::Arena`] used as a plain list.
pub mod symbol_table;
