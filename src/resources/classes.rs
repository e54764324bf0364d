use super::types::{
    BaseClass, ClassDescriptor, ClassProperties, CompiledResource, ModuleOutput,
};
use crate::schema::SchemaName;
use indexmap::IndexMap;
use std::collections::{BTreeMap, BTreeSet};

/// Upper-case the first character and lower-case the rest (`status` -> `Status`,
/// `finalize` -> `Finalize`, `binding` -> `Binding`).
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn quoted(s: &str) -> String {
    format!("'{}'", s)
}

/// Base tag followed by the model mix-in when the schema lives in a module.
fn class_tags(base: BaseClass, schema: Option<&SchemaName>) -> Vec<String> {
    let mut classes = vec![base.to_string()];
    if let Some(full) = schema.and_then(SchemaName::full_name) {
        classes.push(format!("m_{}", full));
    }
    classes
}

fn model_import(schema: Option<&SchemaName>) -> Option<String> {
    schema.and_then(|s| s.module.clone())
}

/// Turn one compiled resource into its class descriptors: one per
/// sub-resource, then the primary class.
pub fn build_classes(compiled: &CompiledResource) -> Vec<ClassDescriptor> {
    let parent = &compiled.identity;
    let sub_base = if compiled.namespaced {
        BaseClass::NamespacedSubResource
    } else {
        BaseClass::GlobalSubResource
    };

    let mut descriptors = Vec::with_capacity(compiled.sub_actions.len() + 1);
    let mut sub_table = BTreeMap::new();
    for sub in &compiled.sub_actions {
        let attr = capitalize(&sub.name);
        let name = format!("{}{}", parent.kind, attr);
        descriptors.push(ClassDescriptor {
            name: name.clone(),
            properties: ClassProperties {
                resource: sub.identity.definition(),
                parent: Some(parent.definition()),
                plural: quoted(&compiled.plural),
                verbs: sub.actions.clone(),
                action: Some(quoted(&sub.name)),
            },
            actions: BTreeMap::new(),
            classes: class_tags(sub_base, sub.schema.as_ref()),
            model_import: model_import(sub.schema.as_ref()),
        });
        sub_table.insert(attr, name);
    }

    let base = if compiled.actions.iter().any(|a| a == "global_list") {
        BaseClass::NamespacedResourceG
    } else if compiled.namespaced {
        BaseClass::NamespacedResource
    } else {
        BaseClass::GlobalResource
    };
    descriptors.push(ClassDescriptor {
        name: parent.kind.clone(),
        properties: ClassProperties {
            resource: parent.definition(),
            parent: None,
            plural: quoted(&compiled.plural),
            verbs: compiled.actions.clone(),
            action: None,
        },
        actions: sub_table,
        classes: class_tags(base, compiled.schema.as_ref()),
        model_import: model_import(compiled.schema.as_ref()),
    });
    descriptors
}

/// Group descriptors by module, modules in first-seen order, and collect
/// the sorted set of schema modules each one imports.
pub fn collect_modules(resources: &[CompiledResource]) -> Vec<ModuleOutput> {
    let mut modules: IndexMap<&str, Vec<ClassDescriptor>> = IndexMap::new();
    for compiled in resources {
        modules
            .entry(compiled.module.as_str())
            .or_default()
            .extend(build_classes(compiled));
    }

    modules
        .into_iter()
        .map(|(name, classes)| {
            let imports: BTreeSet<String> = classes
                .iter()
                .filter_map(|c| c.model_import.clone())
                .collect();
            ModuleOutput {
                name: name.to_string(),
                classes,
                imports: imports.into_iter().collect(),
            }
        })
        .collect()
}
