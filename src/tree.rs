//! Read-only view over a decoded acorn JSON document.
//!
//! The assemblers never touch `serde_json::Value` directly. Every lookup goes through
//! [`TreeView`], which decides once what "absent" means: a missing key, a JSON `null`
//! and an out-of-range index all come back as `None`.

use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeView<'a> {
    value: &'a Value,
}

impl<'a> TreeView<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// The underlying decoded value
    pub fn value(&self) -> &'a Value {
        self.value
    }

    /// Look up an object field. `None` when the key is missing, maps to `null`,
    /// or this view is not an object.
    pub fn field(&self, key: &str) -> Option<TreeView<'a>> {
        match self.value.get(key) {
            Some(Value::Null) | None => None,
            Some(value) => Some(TreeView::new(value)),
        }
    }

    /// Look up an array element. `None` past the end, for `null` elements,
    /// or when this view is not an array.
    pub fn index(&self, index: usize) -> Option<TreeView<'a>> {
        match self.value.get(index) {
            Some(Value::Null) | None => None,
            Some(value) => Some(TreeView::new(value)),
        }
    }

    /// Iterate array elements by index until the first absent one
    pub fn children(&self) -> Children<'a> {
        Children {
            view: *self,
            next: 0,
        }
    }

    /// Length-bearing view of an array
    pub fn elements(&self) -> Option<&'a [Value]> {
        self.value.as_array().map(Vec::as_slice)
    }

    pub fn as_str(&self) -> Option<&'a str> {
        self.value.as_str()
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.value.as_bool()
    }

    pub fn as_offset(&self) -> Option<usize> {
        self.value.as_u64().and_then(|n| usize::try_from(n).ok())
    }

    /// Scalar coerced to text: strings as-is, numbers and booleans in canonical form
    pub fn to_text(&self) -> Option<String> {
        match self.value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// The ESTree `type` discriminant
    pub fn tag(&self) -> Option<&'a str> {
        self.field("type").and_then(|t| t.as_str())
    }
}

/// Iterator returned by [`TreeView::children`]
pub struct Children<'a> {
    view: TreeView<'a>,
    next: usize,
}

impl<'a> Iterator for Children<'a> {
    type Item = TreeView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let child = self.view.index(self.next)?;
        self.next += 1;
        Some(child)
    }
}
