//! Type-keyed codec registry
//!
//! Every supported sequence type maps to an [`ArrayCodec`]. The table is
//! filled with the built-in element kinds on first use; further element types
//! join through [`register_element`] or [`register_codec`].

use std::{
    any::{Any, TypeId},
    sync::{LazyLock, PoisonError, RwLock},
};

use hashbrown::HashMap;
use pgarray_core::{ArrayDialect, PgArrayError, pgarray_trace_register};

use super::{
    ScanSource,
    codec::{
        ElementCodec, ElementKind, Fallback, Native, Nullable, append_array, append_matrix,
        scan_array, scan_matrix,
    },
};
use crate::{traits::FromPostgresValue, values::PostgresValue};

/// Renders a type-erased sequence into an array literal.
pub type AppenderFunc = fn(&ArrayDialect, &mut String, &dyn Any);

/// Parses an array literal into a type-erased destination sequence.
pub type ScannerFunc = fn(&ArrayDialect, &mut dyn Any, ScanSource<'_>) -> Result<(), PgArrayError>;

/// Resolved appender and scanner for one concrete sequence type.
#[derive(Clone, Copy, Debug)]
pub struct ArrayCodec {
    pub append: AppenderFunc,
    pub scan: ScannerFunc,
    pub element: ElementKind,
    /// 1 for `Vec<E>`, 2 for `Vec<Vec<E>>`
    pub dimensions: usize,
    pub type_name: &'static str,
}

type Registry = HashMap<TypeId, ArrayCodec>;

static REGISTRY: LazyLock<RwLock<Registry>> = LazyLock::new(|| {
    let mut registry = Registry::new();

    insert_kind::<Native<String>>(&mut registry);
    insert_kind::<Native<Vec<u8>>>(&mut registry);
    insert_kind::<Native<i8>>(&mut registry);
    insert_kind::<Native<i16>>(&mut registry);
    insert_kind::<Native<i32>>(&mut registry);
    insert_kind::<Native<i64>>(&mut registry);
    insert_kind::<Native<isize>>(&mut registry);
    insert_kind::<Native<u16>>(&mut registry);
    insert_kind::<Native<u32>>(&mut registry);
    insert_kind::<Native<u64>>(&mut registry);
    insert_kind::<Native<usize>>(&mut registry);
    insert_kind::<Native<f32>>(&mut registry);
    insert_kind::<Native<f64>>(&mut registry);
    insert_kind::<Native<bool>>(&mut registry);
    #[cfg(feature = "uuid")]
    insert_kind::<Native<uuid::Uuid>>(&mut registry);

    RwLock::new(registry)
});

fn insert<C: ElementCodec>(registry: &mut Registry) {
    registry
        .entry(TypeId::of::<Vec<C::Item>>())
        .or_insert(ArrayCodec {
            append: append_array::<C>,
            scan: scan_array::<C>,
            element: C::KIND,
            dimensions: 1,
            type_name: std::any::type_name::<Vec<C::Item>>(),
        });
    registry
        .entry(TypeId::of::<Vec<Vec<C::Item>>>())
        .or_insert(ArrayCodec {
            append: append_matrix::<C>,
            scan: scan_matrix::<C>,
            element: C::KIND,
            dimensions: 2,
            type_name: std::any::type_name::<Vec<Vec<C::Item>>>(),
        });
}

fn insert_kind<C: ElementCodec>(registry: &mut Registry) {
    insert::<C>(registry);
    insert::<Nullable<C>>(registry);
}

/// Looks up the codec for a sequence type.
pub(crate) fn lookup(type_id: TypeId) -> Option<ArrayCodec> {
    REGISTRY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&type_id)
        .copied()
}

/// Registers `E` as an array element handled by the scalar conversion
/// fallback.
///
/// After registration `Vec<E>`, `Vec<Option<E>>`, `Vec<Vec<E>>` and
/// `Vec<Vec<Option<E>>>` can be wrapped in an [`ArrayValue`](super::ArrayValue).
/// Built-in element kinds keep their specialized codec.
///
/// ```
/// use pgarray_postgres::{ArrayValue, register_element, traits::PostgresEnum, PgArrayError};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Mood { Happy, Sad }
///
/// impl PostgresEnum for Mood {
///     fn enum_type_name(&self) -> &'static str { "mood" }
///     fn variant_name(&self) -> &'static str {
///         match self { Mood::Happy => "happy", Mood::Sad => "sad" }
///     }
///     fn into_boxed(&self) -> Box<dyn PostgresEnum> { Box::new(*self) }
///     fn try_from_str(value: &str) -> Result<Self, PgArrayError> {
///         match value {
///             "happy" => Ok(Mood::Happy),
///             "sad" => Ok(Mood::Sad),
///             _ => Err(PgArrayError::conversion(value, "Mood")),
///         }
///     }
/// }
///
/// register_element::<Mood>();
/// let moods = vec![Mood::Happy, Mood::Sad];
/// assert_eq!(ArrayValue::new(&moods).to_literal(), r#"{"happy","sad"}"#);
/// ```
pub fn register_element<E>()
where
    E: FromPostgresValue + Any,
    for<'x> &'x E: Into<PostgresValue<'x>>,
{
    register_codec::<Fallback<E>>();
}

/// Registers a custom [`ElementCodec`] together with its nullable form.
pub fn register_codec<C: ElementCodec>() {
    pgarray_trace_register!(std::any::type_name::<C::Item>());
    let mut registry = REGISTRY.write().unwrap_or_else(PoisonError::into_inner);
    insert_kind::<C>(&mut registry);
}
