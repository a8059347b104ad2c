use std::{any::Any, fmt::Debug};

use kube::api::TypeMeta;
use tracing::trace;

use crate::Result;

/// Produces independent copies of a value, including every owned sub-structure.
///
/// The default implementation goes through [`Clone::clone_from`], which is
/// already a deep copy for owned data. Types holding optional sequences
/// override [`DeepCopy::deep_copy_into`] to copy element by element.
pub trait DeepCopy: Clone + Default {
    /// Copy every field of `self` into `out`, reusing its storage where possible.
    fn deep_copy_into(&self, out: &mut Self) {
        out.clone_from(self)
    }

    /// Copy `self` into freshly allocated storage.
    fn deep_copy(&self) -> Self {
        let mut out = Self::default();
        self.deep_copy_into(&mut out);
        out
    }
}

/// Object identity capability shared by top level resources and their lists.
///
/// Inner records such as spec and status never implement it.
pub trait ClusterObject: Any + Debug + Send + Sync {
    /// apiVersion and kind of the object
    fn object_kind(&self) -> TypeMeta;

    /// Copy the object behind a generic handle.
    fn deep_copy_object(&self) -> Box<dyn ClusterObject>;

    fn as_any(&self) -> &dyn Any;

    /// Wire representation of the object.
    fn to_json(&self) -> Result<serde_json::Value>;
}

impl dyn ClusterObject {
    pub fn downcast_ref<T: ClusterObject>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }
}

impl Clone for Box<dyn ClusterObject> {
    fn clone(&self) -> Self {
        self.deep_copy_object()
    }
}

/// Absent in, absent out. Otherwise an independent copy of `source`.
pub fn deep_copy<T: DeepCopy>(source: Option<&T>) -> Option<T> {
    source.map(DeepCopy::deep_copy)
}

/// Copy `source` and hand it out as a [`ClusterObject`].
pub fn deep_copy_object<T>(source: Option<&T>) -> Option<Box<dyn ClusterObject>>
where
    T: ClusterObject + DeepCopy,
{
    let copy = deep_copy(source)?;
    trace!(kind = %copy.object_kind().kind, "Copied cluster object");
    Some(Box::new(copy))
}

/// Copy an optional sequence element by element.
///
/// An absent source leaves `out` absent, a present one of length N leaves
/// `out` present with exactly N elements.
pub(crate) fn deep_copy_items<T: DeepCopy>(source: &Option<Vec<T>>, out: &mut Option<Vec<T>>) {
    let Some(items) = source else {
        *out = None;
        return;
    };

    let copies = out.get_or_insert_with(|| Vec::with_capacity(items.len()));
    copies.truncate(items.len());
    copies.resize_with(items.len(), T::default);
    for (item, copy) in items.iter().zip(copies.iter_mut()) {
        item.deep_copy_into(copy);
    }
}
