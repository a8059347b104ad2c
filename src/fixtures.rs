use std::collections::BTreeMap;

use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ListMeta, OwnerReference};
use kube::api::{ObjectMeta, TypeMeta};

use crate::api::noobaa::{Noobaa, NoobaaList, NoobaaSpec};

/// A namespaced NooBaa system with labels, annotations and an owner
pub fn noobaa(name: &str) -> Noobaa {
    Noobaa {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some("noobaa".to_string()),
            uid: Some(format!("{name}-uid")),
            labels: Some(BTreeMap::from([("app".to_string(), "noobaa".to_string())])),
            annotations: Some(BTreeMap::from([(
                "noobaa.io/managed-by".to_string(),
                "noobaa-operator".to_string(),
            )])),
            owner_references: Some(vec![OwnerReference {
                api_version: "apps/v1".to_string(),
                kind: "Deployment".to_string(),
                name: "noobaa-operator".to_string(),
                uid: "operator-uid".to_string(),
                controller: Some(true),
                ..Default::default()
            }]),
            ..Default::default()
        },
        ..Noobaa::new(name, NoobaaSpec::default())
    }
}

/// A list page holding `items`, with a continue token set
pub fn noobaa_list(items: Option<Vec<Noobaa>>) -> NoobaaList {
    NoobaaList {
        types: Some(TypeMeta::list::<Noobaa>()),
        metadata: ListMeta {
            continue_: Some("next-page".to_string()),
            resource_version: Some("42".to_string()),
            ..Default::default()
        },
        items,
    }
}
