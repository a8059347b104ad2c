use std::any::Any;

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ListMeta;
use kube::{
    api::{DynamicObject, ObjectMeta, TypeMeta},
    Resource,
};
use tracing::debug;

use super::prelude::*;
use crate::deepcopy::{deep_copy_items, ClusterObject, DeepCopy};
use crate::{Error, Result};

mod definition {
    use super::super::prelude::*;

    #[derive(CustomResource, Deserialize, Serialize, Clone, Default, Debug, JsonSchema)]
    #[kube(
        kind = "NooBaa",
        group = "noobaa.io",
        version = "v1alpha1",
        plural = "noobaas",
        namespaced
    )]
    pub struct NoobaaFantomSpec {}
}

/// NoobaaSpec defines the desired state of a NooBaa system
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
pub struct NoobaaSpec {}

/// NoobaaStatus defines the observed state of a NooBaa system
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
pub struct NoobaaStatus {}

impl DeepCopy for NoobaaSpec {}

impl DeepCopy for NoobaaStatus {}

/// Noobaa is the Schema for the noobaas API
#[derive(Resource, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[resource(inherit = definition::NooBaa)]
#[serde(rename_all = "camelCase")]
pub struct Noobaa {
    #[serde(flatten, default)]
    pub types: Option<TypeMeta>,
    pub metadata: ObjectMeta,
    #[serde(default, deserialize_with = "null_as_default")]
    pub spec: NoobaaSpec,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: NoobaaStatus,
}

/// Explicit `null` reads as the zero value, same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Noobaa {
    pub fn new(name: &str, spec: NoobaaSpec) -> Self {
        Self {
            types: Some(TypeMeta::resource::<Noobaa>()),
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                ..Default::default()
            },
            spec,
            status: Default::default(),
        }
    }
}

impl DeepCopy for Noobaa {
    fn deep_copy_into(&self, out: &mut Self) {
        let Self {
            types,
            metadata,
            spec,
            status,
        } = self;

        out.types.clone_from(types);
        out.metadata.clone_from(metadata);
        spec.deep_copy_into(&mut out.spec);
        status.deep_copy_into(&mut out.status);
    }
}

impl ClusterObject for Noobaa {
    fn object_kind(&self) -> TypeMeta {
        self.types
            .clone()
            .unwrap_or_else(TypeMeta::resource::<Noobaa>)
    }

    fn deep_copy_object(&self) -> Box<dyn ClusterObject> {
        Box::new(self.deep_copy())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl TryFrom<DynamicObject> for Noobaa {
    type Error = Error;

    fn try_from(obj: DynamicObject) -> Result<Self> {
        let expected = TypeMeta::resource::<Noobaa>();
        let found = obj.types.clone().unwrap_or_default();
        if found != expected {
            return Err(Error::KindMismatch {
                expected: api_kind(&expected),
                found: api_kind(&found),
            });
        }

        debug!(name = ?obj.metadata.name, "Parsing dynamic object");
        Ok(serde_json::from_value(serde_json::to_value(obj)?)?)
    }
}

/// NoobaaList contains a list of Noobaa
///
/// Missing `items` and empty `items` are kept apart, both in memory and on the wire.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct NoobaaList {
    #[serde(flatten, default)]
    pub types: Option<TypeMeta>,
    #[serde(default)]
    pub metadata: ListMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Noobaa>>,
}

impl DeepCopy for NoobaaList {
    fn deep_copy_into(&self, out: &mut Self) {
        let Self {
            types,
            metadata,
            items,
        } = self;

        out.types.clone_from(types);
        out.metadata.clone_from(metadata);
        deep_copy_items(items, &mut out.items);
    }
}

impl ClusterObject for NoobaaList {
    fn object_kind(&self) -> TypeMeta {
        self.types.clone().unwrap_or_else(TypeMeta::list::<Noobaa>)
    }

    fn deep_copy_object(&self) -> Box<dyn ClusterObject> {
        Box::new(self.deep_copy())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl FromIterator<Noobaa> for NoobaaList {
    fn from_iter<I: IntoIterator<Item = Noobaa>>(iter: I) -> Self {
        Self {
            types: Some(TypeMeta::list::<Noobaa>()),
            items: Some(iter.into_iter().collect()),
            ..Default::default()
        }
    }
}

fn api_kind(types: &TypeMeta) -> String {
    format!("{}/{}", types.api_version, types.kind)
}
