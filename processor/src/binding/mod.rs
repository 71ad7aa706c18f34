mod build;

use std::collections::HashMap;

use crate::decl::TypeName;

pub use build::build;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewBinding {
    pub id: i32,
    pub member: String,
    pub ty: TypeName,
}

/// One handler and every id it listens on; ids fan out only at emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickBinding {
    pub handler: String,
    pub ids: Vec<i32>,
    // Declared parameter type, None when the handler signature was not usable
    pub param: Option<TypeName>,
}

/// Everything generated for one component. Collections keep discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentBinding {
    pub component: TypeName,
    pub package: String,
    pub relative_name: String,
    pub layout: Option<i32>,
    pub views: Vec<ViewBinding>,
    pub after_views: Vec<String>,
    pub clicks: Vec<ClickBinding>,
}

impl ComponentBinding {
    pub fn new(component: TypeName, package: String, relative_name: String) -> Self {
        Self {
            component,
            package,
            relative_name,
            layout: None,
            views: Vec::new(),
            after_views: Vec::new(),
            clicks: Vec::new(),
        }
    }

    pub fn simple_name(&self) -> &str {
        self.component.simple_name()
    }

    /// Statements in the generated initializer: super call, layout, then one per binding entry.
    pub fn statement_count(&self) -> usize {
        2 + self.views.len()
            + self.after_views.len()
            + self.clicks.iter().map(|c| c.ids.len()).sum::<usize>()
    }
}

/// Per-batch bindings keyed by qualified component name, in insertion order.
#[derive(Debug, Default)]
pub struct BindingMap {
    bindings: Vec<ComponentBinding>,
    index: HashMap<TypeName, usize>,
}

impl BindingMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the binding back if one already exists under the same name.
    pub fn insert(&mut self, binding: ComponentBinding) -> Result<(), ComponentBinding> {
        if self.index.contains_key(&binding.component) {
            return Err(binding);
        }
        self.index
            .insert(binding.component.clone(), self.bindings.len());
        self.bindings.push(binding);
        Ok(())
    }

    pub fn contains(&self, component: &TypeName) -> bool {
        self.index.contains_key(component)
    }

    pub fn get(&self, component: &TypeName) -> Option<&ComponentBinding> {
        self.index.get(component).map(|i| &self.bindings[*i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ComponentBinding> {
        self.bindings.iter()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl IntoIterator for BindingMap {
    type Item = ComponentBinding;
    type IntoIter = std::vec::IntoIter<ComponentBinding>;

    fn into_iter(self) -> Self::IntoIter {
        self.bindings.into_iter()
    }
}

impl<'a> IntoIterator for &'a BindingMap {
    type Item = &'a ComponentBinding;
    type IntoIter = std::slice::Iter<'a, ComponentBinding>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binding(name: &str) -> ComponentBinding {
        let ty = TypeName::new(name);
        ComponentBinding::new(ty.clone(), ty.package().to_string(), ty.simple_name().to_string())
    }

    #[test]
    fn map_keeps_insertion_order_and_rejects_duplicates() {
        let mut map = BindingMap::new();
        assert!(map.insert(binding("b.Second")).is_ok());
        assert!(map.insert(binding("a.First")).is_ok());
        assert!(map.insert(binding("b.Second")).is_err());

        assert_eq!(map.len(), 2);
        assert!(map.contains(&"a.First".into()));
        assert_eq!(
            map.iter().map(|b| b.component.as_str()).collect::<Vec<_>>(),
            ["b.Second", "a.First"]
        );
        assert_eq!(map.get(&"a.First".into()).map(|b| b.simple_name()), Some("First"));
    }

    #[test]
    fn statement_count_sums_click_ids() {
        let mut b = binding("com.example.Main");
        b.views.push(ViewBinding {
            id: 1,
            member: "title".to_string(),
            ty: "android.widget.TextView".into(),
        });
        b.after_views.push("init".to_string());
        b.clicks.push(ClickBinding {
            handler: "onTap".to_string(),
            ids: vec![10, 20],
            param: None,
        });
        assert_eq!(b.statement_count(), 2 + 1 + 1 + 2);
    }
}
