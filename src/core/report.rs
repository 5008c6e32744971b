use indexmap::IndexMap;
use serde::Serialize;

/// Attribute value recorded for one usage.
///
/// Literals keep their runtime value, an attribute written with no value at
/// all records `null`, and every other expression is recorded as a
/// `"(<Kind>)"` tag naming its syntactic category; the scanner never
/// evaluates expressions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Str(String),
    /// `"(<Kind>)"` tag for a non-literal expression value.
    Expression(String),
}

impl PropValue {
    /// Numeric literal, downcast to an integer when it has no fraction so
    /// the serialized report prints `3` rather than `3.0`.
    pub fn number(value: f64) -> Self {
        let number = if value.fract() == 0.0
            && value >= i64::MIN as f64
            && value <= i64::MAX as f64
        {
            serde_json::Number::from(value as i64)
        } else {
            // `1e999`-style overflow parses to infinity, which JSON cannot
            // carry; record zero like JSON.stringify's null would.
            serde_json::Number::from_f64(value).unwrap_or_else(|| serde_json::Number::from(0))
        };
        Self::Number(number)
    }

    pub fn expression(kind: &str) -> Self {
        Self::Expression(format!("({kind})"))
    }
}

/// 1-based source position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub file: String,
    pub start: Position,
}

/// One recorded usage of an accepted component.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceInfo {
    /// Attribute name -> recorded value, in source order. A repeated
    /// attribute name keeps the last value.
    pub props: IndexMap<String, PropValue>,
    /// True if at least one spread attribute (`{...rest}`) appeared.
    pub props_spread: bool,
    pub location: Location,
}

/// One level of the report tree.
///
/// `instances` holds only usages whose qualified name ends exactly here;
/// deeper-qualified usages live under `components`. Both fields stay absent
/// until first use, so the serialized report never contains empty sequences
/// or maps.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComponentNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instances: Option<Vec<InstanceInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<IndexMap<String, ComponentNode>>,
}

/// Hierarchical usage report.
///
/// Created once by the caller, threaded through every file scanned in one
/// run, and only ever mutated in place by appending: node creation is
/// idempotent and `instances` grows in traversal order, stable across files
/// in invocation order.
#[derive(Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Report {
    components: IndexMap<String, ComponentNode>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one instance under its dot-separated qualified name, creating
    /// intermediate nodes on demand. A name `A.B.C` lands at
    /// `root[A].components[B].components[C]`. Revisiting a path reuses the
    /// existing nodes and never disturbs siblings.
    pub fn record(&mut self, qualified_name: &str, instance: InstanceInfo) {
        let mut segments = qualified_name.split('.');
        // split() yields at least one segment for any input.
        let head = segments.next().unwrap_or(qualified_name);

        let mut node = self.components.entry(head.to_owned()).or_default();
        for segment in segments {
            node = node
                .components
                .get_or_insert_with(IndexMap::new)
                .entry(segment.to_owned())
                .or_default();
        }
        node.instances.get_or_insert_with(Vec::new).push(instance);
    }

    /// Fold a per-file partial report into this one with the same
    /// get-or-create/append rule as [`Report::record`]. Node-level merging
    /// is order-insensitive; the partial report's own instance order is
    /// preserved, so merging per-file reports in invocation order yields the
    /// same result as one sequential scan.
    pub fn merge(&mut self, other: Report) {
        for (name, node) in other.components {
            merge_node(self.components.entry(name).or_default(), node);
        }
    }

    /// Node for a dot-separated qualified name, if any usage was recorded at
    /// or below it.
    pub fn component(&self, qualified_name: &str) -> Option<&ComponentNode> {
        let mut segments = qualified_name.split('.');
        let mut node = self.components.get(segments.next()?)?;
        for segment in segments {
            node = node.components.as_ref()?.get(segment)?;
        }
        Some(node)
    }

    pub fn components(&self) -> &IndexMap<String, ComponentNode> {
        &self.components
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Total number of recorded instances across the whole tree.
    pub fn instance_count(&self) -> usize {
        self.components.values().map(count_node).sum()
    }
}

fn merge_node(target: &mut ComponentNode, source: ComponentNode) {
    if let Some(instances) = source.instances {
        target.instances.get_or_insert_with(Vec::new).extend(instances);
    }
    if let Some(components) = source.components {
        let target_components = target.components.get_or_insert_with(IndexMap::new);
        for (name, node) in components {
            merge_node(target_components.entry(name).or_default(), node);
        }
    }
}

fn count_node(node: &ComponentNode) -> usize {
    node.instances.as_ref().map_or(0, Vec::len)
        + node
            .components
            .as_ref()
            .map_or(0, |children| children.values().map(count_node).sum())
}
